//! GPU-ready interleaved terrain vertex (20 bytes, tightly packed).

use bytemuck::{Pod, Zeroable};

/// Interleaved vertex for upload as a single vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    // Total: 20 bytes
}

impl TerrainVertex {
    pub fn new(position: [f32; 3], uv: [f32; 2]) -> Self {
        Self { position, uv }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_vertex_size() {
        assert_eq!(std::mem::size_of::<TerrainVertex>(), 20);
    }

    #[test]
    fn test_bytemuck_cast() {
        let v = TerrainVertex::new([1.0, 2.0, 3.0], [1.0, 3.0]);
        let bytes = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 20);

        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 1.0, 3.0]);
    }
}
