//! Generation configuration, loadable from JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::terrain::TerrainParams;

/// Which files a run writes and where.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving every output file.
    pub directory: PathBuf,
    /// Base name for output files (`<name>.png`, `<name>.obj`, ...).
    pub name: String,
    /// 16-bit grayscale PNG of the heightmap.
    pub heightmap_png: bool,
    /// Little-endian f32 heightfield, row-major, no header.
    pub heightmap_raw: bool,
    /// Wavefront OBJ of the tessellated mesh.
    pub mesh_obj: bool,
    /// Elevation multiplier applied when placing mesh vertices.
    pub vertical_scale: f32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("assets/terrain"),
            name: "terrain".to_string(),
            heightmap_png: true,
            heightmap_raw: false,
            mesh_obj: true,
            vertical_scale: 1.0,
        }
    }
}

/// Configuration for one terrain generation run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Diamond-square parameters.
    pub terrain: TerrainParams,
    /// Export settings.
    pub output: OutputConfig,
}

impl TerrainConfig {
    /// Create from terrain params with default output settings.
    pub fn from_terrain(terrain: TerrainParams) -> Self {
        Self {
            terrain,
            output: OutputConfig::default(),
        }
    }

    /// Load and validate a JSON config file.
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.terrain.validate()?;
        log::debug!("Loaded terrain config from {}", path.display());
        Ok(config)
    }

    /// Save as pretty JSON, creating parent directories.
    pub fn save_sync(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }
}
