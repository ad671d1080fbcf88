//! Text rendering of the grid
//!
//! Read-only views of simulation state: a plain glyph frame and a colored
//! terminal frame.

pub mod colors;

use crossterm::queue;
use crossterm::style::{Color as TermColor, Print, ResetColor, SetBackgroundColor};
use std::io::Write;

use crate::cell::CellState;
use crate::spatial::grid::Grid;

pub use colors::{phenotype_color, phenotype_glyph, Color};

/// Glyph for an empty cell
pub const EMPTY_GLYPH: char = '.';

pub fn cell_glyph(cell: &CellState) -> char {
    if cell.is_empty() {
        EMPTY_GLYPH
    } else {
        phenotype_glyph(cell.phenotype())
    }
}

pub fn cell_color(cell: &CellState) -> Color {
    if cell.is_empty() {
        colors::EMPTY
    } else {
        phenotype_color(cell.phenotype())
    }
}

/// One line of glyphs per grid row
pub fn text_frame(grid: &Grid<CellState>) -> String {
    let mut out = String::with_capacity((grid.width + 1) * grid.height);
    for row in grid.cells().chunks(grid.width.max(1)) {
        out.extend(row.iter().map(cell_glyph));
        out.push('\n');
    }
    out
}

/// Write the grid as colored blocks, two columns per cell
pub fn write_terminal_frame<W: Write>(out: &mut W, grid: &Grid<CellState>) -> std::io::Result<()> {
    for row in grid.cells().chunks(grid.width.max(1)) {
        for cell in row {
            let c = cell_color(cell);
            queue!(
                out,
                SetBackgroundColor(TermColor::Rgb { r: c.r, g: c.g, b: c.b }),
                Print("  ")
            )?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }
    out.flush()
}
