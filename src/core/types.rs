//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

use crate::core::error::{OncoError, Result};

/// Simulation tick counter
pub type Tick = u64;

/// Relative position of a Moore neighbor, as `(row delta, column delta)`
///
/// Only the eight non-zero offsets with components in `-1..=1` can be built,
/// so an offset is always a valid neighbor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Offset {
    dr: i8,
    dc: i8,
}

impl Offset {
    const fn raw(dr: i8, dc: i8) -> Self {
        Self { dr, dc }
    }

    pub fn new(dr: i32, dc: i32) -> Result<Self> {
        if (-1..=1).contains(&dr) && (-1..=1).contains(&dc) && (dr, dc) != (0, 0) {
            Ok(Self::raw(dr as i8, dc as i8))
        } else {
            Err(OncoError::InvalidOffset(dr, dc))
        }
    }

    #[inline]
    pub fn dr(&self) -> i32 {
        self.dr as i32
    }

    #[inline]
    pub fn dc(&self) -> i32 {
        self.dc as i32
    }

    /// The offset pointing the other way
    pub fn reverse(&self) -> Self {
        Self::raw(-self.dr, -self.dc)
    }

    /// True when following `self` then `other` returns to the origin
    #[inline]
    pub fn cancels(&self, other: &Offset) -> bool {
        self.dr + other.dr == 0 && self.dc + other.dc == 0
    }

    /// Position of this offset in [`MOORE_OFFSETS`]
    pub fn slot(&self) -> usize {
        // 3x3 row-major index with the centre (4) removed
        let i = ((self.dr + 1) * 3 + (self.dc + 1)) as usize;
        if i > 4 {
            i - 1
        } else {
            i
        }
    }

    pub fn is_orthogonal(&self) -> bool {
        self.dr == 0 || self.dc == 0
    }
}

impl TryFrom<(i32, i32)> for Offset {
    type Error = OncoError;

    fn try_from((dr, dc): (i32, i32)) -> Result<Self> {
        Self::new(dr, dc)
    }
}

impl From<Offset> for (i32, i32) {
    fn from(o: Offset) -> Self {
        (o.dr(), o.dc())
    }
}

/// Canonical Moore neighborhood order (row-major, centre skipped)
pub const MOORE_OFFSETS: [Offset; 8] = [
    Offset::raw(-1, -1),
    Offset::raw(-1, 0),
    Offset::raw(-1, 1),
    Offset::raw(0, -1),
    Offset::raw(0, 1),
    Offset::raw(1, -1),
    Offset::raw(1, 0),
    Offset::raw(1, 1),
];

/// Slots of [`MOORE_OFFSETS`] forming the von Neumann (orthogonal) neighborhood
pub const ORTHOGONAL_SLOTS: [usize; 4] = [1, 3, 4, 6];
