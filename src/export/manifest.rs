//! JSON description of a generation run

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::generation::Terrain;
use crate::terrain::{HeightStats, TerrainParams};

/// Current version of the manifest format
pub const MANIFEST_VERSION: u32 = 1;

/// Manifest file name inside the output directory
pub const MANIFEST_FILE: &str = "manifest.json";

/// Metadata written alongside exported terrain files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Format version for compatibility
    pub version: u32,
    /// Run name (base name of the output files)
    pub name: String,
    /// Cells per side
    pub dimension: usize,
    /// Parameters the terrain was generated with
    pub params: TerrainParams,
    /// Elevation statistics
    pub stats: HeightStats,
    pub vertex_count: usize,
    pub triangle_count: usize,
    /// Mesh bounding box, after vertical scaling
    pub bounds_min: [f32; 3],
    pub bounds_max: [f32; 3],
    /// Output files, relative to the manifest's directory
    pub files: Vec<String>,
}

impl Manifest {
    pub fn new(name: impl Into<String>, terrain: &Terrain) -> Self {
        let bounds = terrain.mesh().bounds();
        Self {
            version: MANIFEST_VERSION,
            name: name.into(),
            dimension: terrain.heightmap().dimension(),
            params: terrain.params().clone(),
            stats: terrain.heightmap().stats(),
            vertex_count: terrain.mesh().vertex_count(),
            triangle_count: terrain.mesh().triangle_count(),
            bounds_min: bounds.min.to_array(),
            bounds_max: bounds.max.to_array(),
            files: Vec::new(),
        }
    }

    /// Save to file (sync)
    pub fn save_sync(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file (sync)
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::GenerationPipeline;
    use crate::mesh::MeshBuilder;
    use crate::terrain::{GridSize, TerrainParams};

    #[test]
    fn test_manifest_bounds_follow_mesh() {
        let params = TerrainParams {
            size: GridSize::new(3).unwrap(),
            seed: Some(5),
            ..Default::default()
        };
        let pipeline =
            GenerationPipeline::from_params(params, MeshBuilder::new().with_vertical_scale(2.0))
                .unwrap();
        let terrain = pipeline.generate();
        let stats = terrain.heightmap().stats();

        let manifest = Manifest::new("bounds", &terrain);
        assert_eq!(manifest.bounds_min, [0.0, stats.min * 2.0, 0.0]);
        assert_eq!(manifest.bounds_max, [8.0, stats.max * 2.0, 8.0]);
        assert_eq!(terrain.mesh().bounds().size().y, stats.range() * 2.0);
    }
}
