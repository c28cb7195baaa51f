//! Wavefront OBJ mesh output

use std::io::Write;

use crate::core::Result;
use crate::mesh::TerrainMesh;

/// Write positions, UVs and faces. Face indices are 1-based and keep the
/// mesh's triangle order and winding.
pub fn write_obj<W: Write>(mesh: &TerrainMesh, writer: &mut W) -> Result<()> {
    let dim = mesh.size().dimension();
    writeln!(writer, "# terragrid heightfield {}x{}", dim, dim)?;
    writeln!(writer, "o terrain")?;

    for p in &mesh.positions {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for uv in &mesh.uvs {
        writeln!(writer, "vt {} {}", uv.x, uv.y)?;
    }
    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(writer, "f {a}/{a} {b}/{b} {c}/{c}")?;
    }
    writer.flush()?;
    Ok(())
}
