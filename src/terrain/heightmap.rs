//! Dense square elevation grid

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use super::grid::GridSize;

/// Summary statistics over every cell of a heightmap
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeightStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}

impl HeightStats {
    /// Vertical extent (max - min)
    pub fn range(&self) -> f32 {
        self.max - self.min
    }
}

/// Square grid of elevations stored row-major in a flat buffer.
///
/// The first coordinate (`x`) selects the row and the second (`z`) the
/// column, matching the mesh layout where cell `(x, z)` becomes vertex
/// `(x, elevation, z)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Heightmap {
    size: GridSize,
    heights: Vec<f32>,
}

impl Heightmap {
    /// Create a flat heightmap with every cell at `0.0`
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            heights: vec![0.0; size.cell_count()],
        }
    }

    /// Create from existing row-major data
    pub fn from_data(size: GridSize, heights: Vec<f32>) -> Result<Self> {
        if heights.len() != size.cell_count() {
            return Err(Error::InvalidDimension(format!(
                "expected {} heights for a {}x{} grid, got {}",
                size.cell_count(),
                size.dimension(),
                size.dimension(),
                heights.len()
            )));
        }
        Ok(Self { size, heights })
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Cells per side
    pub fn dimension(&self) -> usize {
        self.size.dimension()
    }

    /// Largest valid coordinate on either axis
    pub fn last_index(&self) -> usize {
        self.size.last_index()
    }

    /// Elevation at grid cell `(x, z)`.
    ///
    /// Coordinates outside `[0, last]` are an error rather than clamped.
    pub fn elevation_at(&self, x: usize, z: usize) -> Result<f32> {
        if !self.size.contains(x, z) {
            return Err(Error::OutOfRangeQuery {
                x,
                z,
                last: self.last_index(),
            });
        }
        Ok(self.heights[self.size.offset(x, z)])
    }

    /// Unchecked-range lookup for callers iterating known-valid coordinates.
    /// Panics on out-of-range input.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.heights[self.size.offset(row, col)]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: f32) {
        let i = self.size.offset(row, col);
        self.heights[i] = value;
    }

    /// Raw row-major elevations
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Consume into the raw row-major buffer
    pub fn into_heights(self) -> Vec<f32> {
        self.heights
    }

    /// Iterate rows, each a slice of `dimension` elevations
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.heights.chunks_exact(self.dimension())
    }

    /// The four corner cells in `(0,0), (0,last), (last,0), (last,last)` order
    pub fn corner_values(&self) -> [f32; 4] {
        let last = self.last_index();
        [
            self.get(0, 0),
            self.get(0, last),
            self.get(last, 0),
            self.get(last, last),
        ]
    }

    /// Min, max and mean elevation
    pub fn stats(&self) -> HeightStats {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0f64;
        for &h in &self.heights {
            min = min.min(h);
            max = max.max(h);
            sum += h as f64;
        }
        HeightStats {
            min,
            max,
            mean: (sum / self.heights.len() as f64) as f32,
        }
    }
}
