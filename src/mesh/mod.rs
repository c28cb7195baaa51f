//! Heightmap tessellation into renderable buffers

pub mod builder;
pub mod vertex;

pub use builder::{MeshBuilder, TerrainMesh, triangle_indices};
pub use vertex::TerrainVertex;
