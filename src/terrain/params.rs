//! Parameters controlling diamond-square generation

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use super::grid::GridSize;

/// Seed elevations for the four grid corners.
///
/// Named by position with row 0 at the top: `top_left` is `(0, 0)`,
/// `top_right` is `(0, last)`, `bottom_left` is `(last, 0)` and
/// `bottom_right` is `(last, last)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Corners {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
}

impl Corners {
    /// All four corners at the same elevation
    pub fn uniform(elevation: f32) -> Self {
        Self {
            top_left: elevation,
            top_right: elevation,
            bottom_left: elevation,
            bottom_right: elevation,
        }
    }

    /// Values in `(0,0), (0,last), (last,0), (last,last)` order
    pub fn to_array(&self) -> [f32; 4] {
        [self.top_left, self.top_right, self.bottom_left, self.bottom_right]
    }
}

/// Random interval used by the square step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SquareNoise {
    /// `[0, limit)`: square-step centers are only ever raised
    #[default]
    OneSided,
    /// `[-limit, limit)`, same as the diamond step
    Symmetric,
}

/// Where the diamond-step displacement is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiamondDisplacement {
    /// Added to the average of the four neighbors
    #[default]
    AfterAverage,
    /// Added to the `row - half` neighbor before averaging, which quarters
    /// its effect. Reproduces heightfields from the Unity terrain demo.
    FoldedNeighbor,
}

/// Parameters controlling terrain generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    pub size: GridSize,            // Grid is 2^size + 1 cells per side
    pub roughness: f32,            // Displacement per unit of step size
    pub random_limit: f32,         // Bound of the random draw before scaling
    pub corners: Corners,          // Seed elevations
    pub seed: Option<u64>,         // None = seed from OS entropy
    pub square_noise: SquareNoise,
    pub diamond_displacement: DiamondDisplacement,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            size: GridSize::default(),
            roughness: 1.0,
            random_limit: 1.0,
            corners: Corners::default(),
            seed: None,
            square_noise: SquareNoise::default(),
            diamond_displacement: DiamondDisplacement::default(),
        }
    }
}

impl TerrainParams {
    /// Default parameters with the grid exponent set, validating it.
    pub fn with_size(exponent: u32) -> Result<Self> {
        Ok(Self {
            size: GridSize::new(exponent)?,
            ..Default::default()
        })
    }

    /// Check scalar parameters. Grid size is validated on construction.
    pub fn validate(&self) -> Result<()> {
        if !self.roughness.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "roughness must be finite, got {}",
                self.roughness
            )));
        }
        if !self.random_limit.is_finite() || self.random_limit < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "random_limit must be finite and non-negative, got {}",
                self.random_limit
            )));
        }
        if self.corners.to_array().iter().any(|c| !c.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "corner seeds must be finite, got {:?}",
                self.corners
            )));
        }

        // The symmetric draw spans 2 * limit, which must itself be representable.
        if 2.0 * self.random_limit as f64 > f32::MAX as f64 {
            return Err(Error::InvalidParameter(format!(
                "random_limit {} is too large: draw range overflows f32",
                self.random_limit
            )));
        }

        // Per-pass scale is roughness * step, computed before the draw is applied.
        if (self.roughness as f64).abs() * self.size.last_index() as f64 > f32::MAX as f64 {
            return Err(Error::InvalidParameter(format!(
                "roughness {} is too large for a {}x{} grid: step scale overflows f32",
                self.roughness,
                self.size.dimension(),
                self.size.dimension()
            )));
        }

        // Displacement summed over every pass stays below 2 * limit * |roughness| * last,
        // and each average adds four such elevations before dividing.
        let corner_peak = self
            .corners
            .to_array()
            .iter()
            .fold(0.0f64, |m, &c| m.max((c as f64).abs()));
        let displacement_peak = 2.0
            * self.random_limit as f64
            * (self.roughness as f64).abs()
            * self.size.last_index() as f64;
        if 4.0 * (corner_peak + displacement_peak) > f32::MAX as f64 {
            return Err(Error::InvalidParameter(format!(
                "roughness {} with random_limit {} on a {}x{} grid overflows f32 elevations",
                self.roughness,
                self.random_limit,
                self.size.dimension(),
                self.size.dimension()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_params_default() {
        let params = TerrainParams::default();
        assert_eq!(params.size.dimension(), 129);
        assert_eq!(params.roughness, 1.0);
        assert_eq!(params.random_limit, 1.0);
        assert_eq!(params.corners, Corners::uniform(0.0));
        assert_eq!(params.seed, None);
        assert_eq!(params.square_noise, SquareNoise::OneSided);
        assert_eq!(params.diamond_displacement, DiamondDisplacement::AfterAverage);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_with_size() {
        assert_eq!(TerrainParams::with_size(2).unwrap().size.dimension(), 5);
        assert!(matches!(
            TerrainParams::with_size(0),
            Err(Error::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_scalars() {
        let negative = TerrainParams { random_limit: -1.0, ..Default::default() };
        assert!(matches!(negative.validate(), Err(Error::InvalidParameter(_))));

        let nan = TerrainParams { roughness: f32::NAN, ..Default::default() };
        assert!(matches!(nan.validate(), Err(Error::InvalidParameter(_))));

        let inf_corner = TerrainParams {
            corners: Corners { top_left: f32::INFINITY, ..Default::default() },
            ..Default::default()
        };
        assert!(matches!(inf_corner.validate(), Err(Error::InvalidParameter(_))));

        let zero_limit = TerrainParams { random_limit: 0.0, ..Default::default() };
        assert!(zero_limit.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_overflowing_scalars() {
        // Finite on their own, but roughness * step overflows f32
        let rough = TerrainParams { roughness: 1e37, seed: Some(1), ..Default::default() };
        assert!(matches!(rough.validate(), Err(Error::InvalidParameter(_))));

        // [-limit, limit) spans more than f32::MAX
        let wide = TerrainParams {
            random_limit: 3e38,
            ..TerrainParams::with_size(2).unwrap()
        };
        assert!(matches!(wide.validate(), Err(Error::InvalidParameter(_))));

        // Corners whose four-way sum overflows
        let high = TerrainParams {
            random_limit: 0.0,
            corners: Corners::uniform(1e38),
            ..Default::default()
        };
        assert!(matches!(high.validate(), Err(Error::InvalidParameter(_))));

        let negative_rough = TerrainParams { roughness: -1e37, ..Default::default() };
        assert!(matches!(negative_rough.validate(), Err(Error::InvalidParameter(_))));

        // A zero limit still multiplies by roughness * step, and 0 * inf is NaN
        let flat_but_rough = TerrainParams {
            roughness: 1e37,
            random_limit: 0.0,
            ..Default::default()
        };
        assert!(matches!(flat_but_rough.validate(), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_validate_accepts_large_but_safe_scalars() {
        let params = TerrainParams {
            roughness: 1e30,
            random_limit: 1.0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_params_json_defaults() {
        let params: TerrainParams =
            serde_json::from_str(r#"{ "size": 4, "square_noise": "symmetric" }"#).unwrap();
        assert_eq!(params.size.dimension(), 17);
        assert_eq!(params.square_noise, SquareNoise::Symmetric);
        assert_eq!(params.roughness, 1.0);
        assert_eq!(params.corners, Corners::default());
    }

    #[test]
    fn test_params_json_invalid_size() {
        let result = serde_json::from_str::<TerrainParams>(r#"{ "size": 16 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_corners_order() {
        let corners = Corners {
            top_left: 1.0,
            top_right: 2.0,
            bottom_left: 3.0,
            bottom_right: 4.0,
        };
        assert_eq!(corners.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }
}
