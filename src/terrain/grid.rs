//! Grid dimensions of the form `2^n + 1`

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Square grid dimension, always `2^exponent + 1` cells per side.
///
/// The diamond-square loop halves its step until it reaches 1, which only
/// visits every cell when the side minus one is a power of two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct GridSize {
    exponent: u32,
}

impl GridSize {
    /// Largest exponent whose vertex count still fits a `u32` index buffer.
    pub const MAX_EXPONENT: u32 = 15;

    /// Create from an exponent (`size = 7` gives a 129 x 129 grid).
    pub fn new(exponent: u32) -> Result<Self> {
        if exponent == 0 {
            return Err(Error::InvalidDimension(
                "size must be at least 1 (grid of 3 x 3)".to_string(),
            ));
        }
        if exponent > Self::MAX_EXPONENT {
            return Err(Error::InvalidDimension(format!(
                "size {} exceeds maximum of {}",
                exponent,
                Self::MAX_EXPONENT
            )));
        }
        Ok(Self { exponent })
    }

    /// Create from a side length, which must be `2^n + 1` with `n >= 1`.
    pub fn from_dimension(dimension: usize) -> Result<Self> {
        if dimension < 3 || !(dimension - 1).is_power_of_two() {
            return Err(Error::InvalidDimension(format!(
                "dimension {} is not of the form 2^n + 1",
                dimension
            )));
        }
        Self::new((dimension - 1).trailing_zeros())
    }

    /// The exponent `n`
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Cells per side
    pub fn dimension(&self) -> usize {
        (1usize << self.exponent) + 1
    }

    /// Largest valid coordinate on either axis
    pub fn last_index(&self) -> usize {
        1usize << self.exponent
    }

    /// Total number of cells (and mesh vertices)
    pub fn cell_count(&self) -> usize {
        let d = self.dimension();
        d * d
    }

    /// Number of unit quads between cells
    pub fn quad_count(&self) -> usize {
        let l = self.last_index();
        l * l
    }

    /// Flat row-major offset of `(row, col)`
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        row * self.dimension() + col
    }

    /// Whether `(x, z)` lies inside `[0, last]` on both axes
    #[inline]
    pub fn contains(&self, x: usize, z: usize) -> bool {
        let last = self.last_index();
        x <= last && z <= last
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self { exponent: 7 }
    }
}

impl TryFrom<u32> for GridSize {
    type Error = Error;

    fn try_from(exponent: u32) -> Result<Self> {
        Self::new(exponent)
    }
}

impl From<GridSize> for u32 {
    fn from(size: GridSize) -> u32 {
        size.exponent
    }
}
