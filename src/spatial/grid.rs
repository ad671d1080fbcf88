//! Generic row-major grid with boundary-aware neighbor lookup

use crate::core::config::Boundary;
use crate::core::types::Offset;

/// Generic 2D grid; `x` is the column, `y` the row
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: Clone> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// A grid of the same shape holding `data`
    ///
    /// `data` must hold exactly one value per cell, in row-major order.
    pub fn with_data<U: Clone>(&self, data: Vec<U>) -> Grid<U> {
        debug_assert_eq!(data.len(), self.data.len());
        Grid {
            width: self.width,
            height: self.height,
            data,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            Some(&self.data[y * self.width + x])
        } else {
            None
        }
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        if x < self.width && y < self.height {
            self.data[y * self.width + x] = value;
        }
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Index of the cell at `offset` from `(x, y)`
    ///
    /// `None` means the neighbor lies off a reservoir-bounded grid.
    #[inline]
    pub fn neighbor_index(
        &self,
        x: usize,
        y: usize,
        offset: Offset,
        boundary: Boundary,
    ) -> Option<usize> {
        let nx = x as i64 + offset.dc() as i64;
        let ny = y as i64 + offset.dr() as i64;
        let (w, h) = (self.width as i64, self.height as i64);

        match boundary {
            Boundary::Toroidal => {
                let nx = nx.rem_euclid(w) as usize;
                let ny = ny.rem_euclid(h) as usize;
                Some(self.index(nx, ny))
            }
            Boundary::Reservoir => {
                if (0..w).contains(&nx) && (0..h).contains(&ny) {
                    Some(self.index(nx as usize, ny as usize))
                } else {
                    None
                }
            }
        }
    }
}
