//! Headerless little-endian f32 heightfields

use std::io::{Read, Write};

use crate::core::{Error, Result};
use crate::terrain::{GridSize, Heightmap};

/// Write every elevation as a little-endian `f32`, row-major.
pub fn write_heightmap_raw<W: Write>(heightmap: &Heightmap, writer: &mut W) -> Result<()> {
    let mut bytes = Vec::with_capacity(heightmap.heights().len() * 4);
    for h in heightmap.heights() {
        bytes.extend_from_slice(&h.to_le_bytes());
    }
    writer.write_all(&bytes)?;
    Ok(())
}

/// Read a heightfield written by [`write_heightmap_raw`]. The grid size is
/// not stored in the file and must be supplied; input must hold exactly
/// `size.cell_count()` values.
pub fn read_heightmap_raw<R: Read>(reader: &mut R, size: GridSize) -> Result<Heightmap> {
    let mut bytes = vec![0u8; size.cell_count() * 4];
    reader.read_exact(&mut bytes)?;

    // Input must end exactly at the last cell
    let mut extra = [0u8; 1];
    if reader.read(&mut extra)? > 0 {
        return Err(Error::InvalidDimension(format!(
            "raw heightfield has data beyond {} cells for a {}x{} grid",
            size.cell_count(),
            size.dimension(),
            size.dimension()
        )));
    }

    let heights = bytes
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();
    Heightmap::from_data(size, heights)
}
