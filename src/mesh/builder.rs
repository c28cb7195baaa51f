//! Regular-grid tessellation: one vertex per cell, two triangles per quad

use crate::core::types::{Vec2, Vec3};
use crate::math::Aabb;
use crate::terrain::{GridSize, Heightmap};
use super::vertex::TerrainVertex;

/// Vertex, index and UV buffers for a tessellated heightmap.
///
/// Vertex `row * dimension + col` sits at `(row, elevation, col)` and its UV
/// is the same `(x, z)` plane coordinate. Normals are left to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainMesh {
    size: GridSize,
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub uvs: Vec<Vec2>,
}

impl TerrainMesh {
    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Bounding box of all vertex positions
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(&self.positions)
    }

    /// Positions and UVs interleaved for a single vertex buffer
    pub fn interleaved(&self) -> Vec<TerrainVertex> {
        self.positions
            .iter()
            .zip(&self.uvs)
            .map(|(p, uv)| TerrainVertex::new(p.to_array(), uv.to_array()))
            .collect()
    }

    /// Position buffer as raw bytes (12 bytes per vertex)
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// UV buffer as raw bytes (8 bytes per vertex)
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Index buffer as raw bytes (4 bytes per index)
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Builds a [`TerrainMesh`] from a heightmap
#[derive(Clone, Debug)]
pub struct MeshBuilder {
    vertical_scale: f32,
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self { vertical_scale: 1.0 }
    }
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Multiply elevations when placing vertices (default 1.0)
    pub fn with_vertical_scale(mut self, scale: f32) -> Self {
        self.vertical_scale = scale;
        self
    }

    /// Tessellate the heightmap. Buffers depend only on its dimension and
    /// elevations, so this cannot fail.
    pub fn build(&self, heightmap: &Heightmap) -> TerrainMesh {
        let size = heightmap.size();
        let positions = self.positions(heightmap);
        let uvs = positions.iter().map(|p| Vec2::new(p.x, p.z)).collect();
        let indices = triangle_indices(size);

        log::debug!(
            "Tessellated {}x{} grid: {} vertices, {} triangles",
            size.dimension(),
            size.dimension(),
            positions.len(),
            indices.len() / 3
        );

        TerrainMesh { size, positions, indices, uvs }
    }

    fn positions(&self, heightmap: &Heightmap) -> Vec<Vec3> {
        let mut result = Vec::with_capacity(heightmap.size().cell_count());
        for (row, heights) in heightmap.rows().enumerate() {
            for (col, &h) in heights.iter().enumerate() {
                result.push(Vec3::new(row as f32, h * self.vertical_scale, col as f32));
            }
        }
        result
    }
}

/// Index buffer for a grid of the given size: six indices per quad.
///
/// Quad `(row, col)` is split into `(row,col) (row,col+1) (row+1,col)` and
/// `(row+1,col) (row,col+1) (row+1,col+1)`, both clockwise seen from above
/// in a left-handed, y-up frame.
pub fn triangle_indices(size: GridSize) -> Vec<u32> {
    let dim = size.dimension();
    let offset = |row: usize, col: usize| (row * dim + col) as u32;

    let mut result = Vec::with_capacity(size.quad_count() * 6);
    for row in 0..dim - 1 {
        for col in 0..dim - 1 {
            result.extend_from_slice(&[
                offset(row, col),
                offset(row, col + 1),
                offset(row + 1, col),
            ]);
            result.extend_from_slice(&[
                offset(row + 1, col),
                offset(row, col + 1),
                offset(row + 1, col + 1),
            ]);
        }
    }
    result
}
