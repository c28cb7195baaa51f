//! Terrain generation pipeline — heightfield generation followed by tessellation.
//!
//! The pipeline orchestrates:
//! 1. Diamond-square heightfield generation (HeightfieldGenerator)
//! 2. Grid tessellation into vertex/index/UV buffers (MeshBuilder)

pub mod config;

pub use config::{OutputConfig, TerrainConfig};

use rand::Rng;

use crate::core::Result;
use crate::mesh::{MeshBuilder, TerrainMesh};
use crate::terrain::{HeightfieldGenerator, Heightmap, TerrainParams};

/// A generated heightfield together with its mesh.
///
/// Both are immutable once produced; the mesh is derived from the heightmap.
#[derive(Clone, Debug)]
pub struct Terrain {
    params: TerrainParams,
    heightmap: Heightmap,
    mesh: TerrainMesh,
}

impl Terrain {
    /// Generate and tessellate with the default mesh builder.
    pub fn generate(params: &TerrainParams) -> Result<Self> {
        Ok(GenerationPipeline::from_params(params.clone(), MeshBuilder::new())?.generate())
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    pub fn heightmap(&self) -> &Heightmap {
        &self.heightmap
    }

    pub fn mesh(&self) -> &TerrainMesh {
        &self.mesh
    }

    /// Elevation at grid cell `(x, z)`; errors outside `[0, last]`.
    pub fn elevation_at(&self, x: usize, z: usize) -> Result<f32> {
        self.heightmap.elevation_at(x, z)
    }

    /// Grid coordinates of the center cell
    pub fn center(&self) -> (usize, usize) {
        let half = self.heightmap.last_index() / 2;
        (half, half)
    }

    pub fn into_parts(self) -> (Heightmap, TerrainMesh) {
        (self.heightmap, self.mesh)
    }
}

/// Orchestrates terrain generation: heightfield → mesh.
pub struct GenerationPipeline {
    generator: HeightfieldGenerator,
    mesh_builder: MeshBuilder,
}

impl GenerationPipeline {
    /// Create a new pipeline from configuration.
    pub fn new(config: &TerrainConfig) -> Result<Self> {
        let mesh_builder = MeshBuilder::new().with_vertical_scale(config.output.vertical_scale);
        Self::from_params(config.terrain.clone(), mesh_builder)
    }

    pub fn from_params(params: TerrainParams, mesh_builder: MeshBuilder) -> Result<Self> {
        Ok(Self {
            generator: HeightfieldGenerator::new(params)?,
            mesh_builder,
        })
    }

    /// Get a reference to the heightfield generator.
    pub fn generator(&self) -> &HeightfieldGenerator {
        &self.generator
    }

    /// Run generation with the configured seed (or OS entropy).
    pub fn generate(&self) -> Terrain {
        let heightmap = self.generator.generate();
        self.finish(heightmap)
    }

    /// Run generation drawing from the supplied RNG.
    pub fn generate_with_rng<R: Rng>(&self, rng: &mut R) -> Terrain {
        let heightmap = self.generator.generate_with_rng(rng);
        self.finish(heightmap)
    }

    fn finish(&self, heightmap: Heightmap) -> Terrain {
        let mesh = self.mesh_builder.build(&heightmap);
        Terrain {
            params: self.generator.params().clone(),
            heightmap,
            mesh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::terrain::{Corners, GridSize};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn small_params() -> TerrainParams {
        TerrainParams {
            size: GridSize::new(2).unwrap(),
            seed: Some(3),
            ..Default::default()
        }
    }

    #[test]
    fn test_terrain_generate() {
        let terrain = Terrain::generate(&small_params()).unwrap();
        assert_eq!(terrain.heightmap().dimension(), 5);
        assert_eq!(terrain.mesh().vertex_count(), 25);
        assert_eq!(terrain.mesh().indices.len(), 96);
        assert_eq!(terrain.center(), (2, 2));
    }

    #[test]
    fn test_mesh_matches_heightmap() {
        let terrain = Terrain::generate(&small_params()).unwrap();
        for x in 0..5 {
            for z in 0..5 {
                let h = terrain.elevation_at(x, z).unwrap();
                assert_eq!(terrain.mesh().positions[x * 5 + z].y, h);
            }
        }
    }

    #[test]
    fn test_elevation_query_out_of_range() {
        let terrain = Terrain::generate(&small_params()).unwrap();
        assert!(matches!(
            terrain.elevation_at(5, 2),
            Err(Error::OutOfRangeQuery { .. })
        ));
    }

    #[test]
    fn test_center_scenario() {
        let terrain = Terrain::generate(&TerrainParams {
            size: GridSize::new(2).unwrap(),
            roughness: 1.0,
            random_limit: 0.0,
            corners: Corners { bottom_right: 10.0, ..Default::default() },
            ..Default::default()
        })
        .unwrap();
        let (x, z) = terrain.center();
        assert_eq!(terrain.elevation_at(x, z).unwrap(), 2.5);
    }

    #[test]
    fn test_pipeline_vertical_scale() {
        let mut config = TerrainConfig::from_terrain(small_params());
        config.output.vertical_scale = 3.0;
        let pipeline = GenerationPipeline::new(&config).unwrap();
        let terrain = pipeline.generate();

        let h = terrain.heightmap().get(1, 3);
        assert_eq!(terrain.mesh().positions[8].y, h * 3.0);
    }

    #[test]
    fn test_pipeline_with_rng_is_reproducible() {
        let pipeline = GenerationPipeline::from_params(small_params(), MeshBuilder::new()).unwrap();
        let a = pipeline.generate_with_rng(&mut ChaCha8Rng::seed_from_u64(11));
        let b = pipeline.generate_with_rng(&mut ChaCha8Rng::seed_from_u64(11));
        assert_eq!(a.heightmap(), b.heightmap());
        assert_eq!(a.mesh(), b.mesh());
    }

    #[test]
    fn test_pipeline_rejects_invalid_params() {
        let params = TerrainParams { roughness: f32::INFINITY, ..small_params() };
        assert!(matches!(
            GenerationPipeline::from_params(params, MeshBuilder::new()),
            Err(Error::InvalidParameter(_))
        ));
    }
}
