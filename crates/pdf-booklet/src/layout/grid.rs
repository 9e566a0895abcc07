//! Face grid dimensions
//!
//! Each sheet face is a grid of `nup` cells. The base composition rule works
//! on the side-fold grid; top-fold booklets print the same cells transposed.

use super::GridPosition;
use crate::config::ImpositionConfig;
use crate::types::{BookletStyle, NUp};

/// Cell arrangement of one sheet face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceGrid {
    pub rows: usize,
    pub cols: usize,
}

impl FaceGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Grid the base composition rule fills for this configuration
    ///
    /// ```text
    /// booklet      2-up 1x2   4-up 2x2   6-up 3x2   8-up 2x4
    /// perfectbound 2-up 2x1   4-up 2x2              8-up 4x2
    /// ```
    pub fn for_config(config: &ImpositionConfig) -> Self {
        let cells = config.nup.count();
        match (config.style, config.nup) {
            (BookletStyle::PerfectBound, NUp::Two) => Self::new(2, 1),
            (BookletStyle::PerfectBound, _) => Self::new(cells / 2, 2),
            (_, NUp::Eight) => Self::new(2, 4),
            _ => Self::new(cells / 2, 2),
        }
    }

    pub fn transposed(self) -> Self {
        Self::new(self.cols, self.rows)
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Cell of the `index`-th entry of a row-major face
    pub fn position(&self, index: usize) -> GridPosition {
        GridPosition::new(index / self.cols, index % self.cols)
    }

    /// Reorder a row-major face so it reads column by column.
    ///
    /// The result is the row-major flattening of the transposed grid.
    pub fn transpose<T: Copy>(&self, cells: &[T]) -> Vec<T> {
        debug_assert_eq!(cells.len(), self.cell_count());
        let mut out = Vec::with_capacity(cells.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                out.push(cells[row * self.cols + col]);
            }
        }
        out
    }
}
