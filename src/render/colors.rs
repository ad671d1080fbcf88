//! Color definitions for phenotypes

use crate::genetics::Phenotype;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color of an empty cell
pub const EMPTY: Color = Color::new(0xff, 0xff, 0xff);

/// Base color for a phenotype
pub fn phenotype_color(phenotype: Phenotype) -> Color {
    match phenotype.index() {
        0 => Color::new(0x80, 0x80, 0x80), // normal: grey
        1 => Color::new(0x45, 0x42, 0x7e), // A: blue
        2 => Color::new(0x00, 0x00, 0x00), // G: black
        3 => Color::new(0x00, 0x00, 0x00), // AG: black
        4 => Color::new(0xf3, 0x8e, 0x8d), // H: pink
        5 => Color::new(0x45, 0x42, 0x7e), // AH: blue
        6 => Color::new(0x06, 0x73, 0x35), // GH: dark green
        _ => Color::new(0xee, 0xcb, 0x4a), // AGH: yellow
    }
}

/// Single-character glyph for a phenotype in plain-text frames
pub fn phenotype_glyph(phenotype: Phenotype) -> char {
    match phenotype.index() {
        0 => 'o',
        1 => 'a',
        2 => 'g',
        3 => 'x',
        4 => 'h',
        5 => 'y',
        6 => 'z',
        _ => '#',
    }
}
