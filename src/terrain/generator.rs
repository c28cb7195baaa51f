//! Diamond-square heightfield generation

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::Result;
use super::heightmap::Heightmap;
use super::params::{DiamondDisplacement, SquareNoise, TerrainParams};

/// Midpoint-displacement terrain generator.
///
/// Each pass halves the step size. The square step sets the center of every
/// `step x step` square from its diagonal corners, then the diamond step sets
/// the center of every diamond from its four axis-aligned neighbors. Neighbor
/// lookups that fall off the grid wrap to the opposite edge, so the borders
/// blend toward a periodic continuation instead of averaging fewer samples.
///
/// Displacement at each pass is `roughness * step` times a uniform draw
/// bounded by `random_limit`, so amplitude shrinks with the step.
#[derive(Clone, Debug)]
pub struct HeightfieldGenerator {
    params: TerrainParams,
}

impl HeightfieldGenerator {
    /// Create a generator, rejecting invalid parameters before any work is done
    pub fn new(params: TerrainParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Get terrain parameters
    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Generate using ChaCha8 seeded from `params.seed`, or from OS entropy
    /// when no seed is set.
    pub fn generate(&self) -> Heightmap {
        let mut rng = match self.params.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        self.generate_with_rng(&mut rng)
    }

    /// Generate drawing displacement from the supplied RNG.
    pub fn generate_with_rng<R: Rng>(&self, rng: &mut R) -> Heightmap {
        let start = Instant::now();
        let params = &self.params;

        let mut map = Heightmap::new(params.size);
        let dim = map.dimension();
        let last = map.last_index();

        map.set(0, 0, params.corners.top_left);
        map.set(0, last, params.corners.top_right);
        map.set(last, 0, params.corners.bottom_left);
        map.set(last, last, params.corners.bottom_right);

        let limit = params.random_limit;
        let square_range = match params.square_noise {
            SquareNoise::OneSided => (0.0, limit),
            SquareNoise::Symmetric => (-limit, limit),
        };
        let diamond_range = (-limit, limit);

        let mut step = last;
        while step > 1 {
            let half = step / 2;
            let scale = params.roughness * step as f32;

            // Square step
            for row in (half..dim).step_by(step) {
                for col in (half..dim).step_by(step) {
                    let avg = average(
                        map.get(row - half, col - half),
                        map.get(row - half, col + half),
                        map.get(row + half, col - half),
                        map.get(row + half, col + half),
                    );
                    let offset = draw(rng, square_range) * scale;
                    map.set(row, col, avg + offset);
                }
            }

            // Diamond step: rows alternate between starting at column 0 and `half`
            for row in (0..dim).step_by(half) {
                for col in ((row + half) % step..dim).step_by(step) {
                    let offset = draw(rng, diamond_range) * scale;

                    let above = map.get(wrap_back(row, half, last), col);
                    let below = map.get(wrap_forward(row, half, last), col);
                    let left = map.get(row, wrap_back(col, half, last));
                    let right = map.get(row, wrap_forward(col, half, last));

                    let value = match params.diamond_displacement {
                        DiamondDisplacement::AfterAverage => {
                            average(above, below, left, right) + offset
                        }
                        DiamondDisplacement::FoldedNeighbor => {
                            average(above + offset, below, left, right)
                        }
                    };
                    map.set(row, col, value);
                }
            }

            log::debug!("diamond-square pass: step={} half={} scale={:.3}", step, half, scale);
            step /= 2;
        }

        let stats = map.stats();
        log::info!(
            "Generated {}x{} heightfield in {:.1}ms (min {:.3}, max {:.3}, center {:.3})",
            dim,
            dim,
            start.elapsed().as_secs_f64() * 1000.0,
            stats.min,
            stats.max,
            map.get(last / 2, last / 2),
        );

        map
    }
}

#[inline]
fn average(a: f32, b: f32, c: f32, d: f32) -> f32 {
    (a + b + c + d) / 4.0
}

/// Index `i - half`, wrapping past the low edge to `last - half`.
#[inline]
fn wrap_back(i: usize, half: usize, last: usize) -> usize {
    if i < half { last - half } else { i - half }
}

/// Index `i + half`, wrapping past the high edge to `half`.
#[inline]
fn wrap_forward(i: usize, half: usize, last: usize) -> usize {
    if i + half > last { half } else { i + half }
}

/// Uniform draw from `[lo, hi)`. An empty interval yields `lo` without
/// consuming randomness.
#[inline]
fn draw<R: Rng>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    if hi > lo { rng.gen_range(lo..hi) } else { lo }
}
