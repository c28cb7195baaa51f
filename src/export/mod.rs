//! Writing generated terrain to disk.
//!
//! Output structure:
//!   <directory>/
//!     <name>.png      # 16-bit grayscale heightmap
//!     <name>.r32      # raw little-endian f32 heightfield
//!     <name>.obj      # tessellated mesh
//!     manifest.json   # run metadata + list of files written

pub mod manifest;
pub mod obj;
pub mod png;
pub mod raw;

pub use manifest::{Manifest, MANIFEST_FILE};
pub use obj::write_obj;
pub use png::write_heightmap_png;
pub use raw::{read_heightmap_raw, write_heightmap_raw};

use std::fs::File;
use std::io::BufWriter;

use crate::core::Result;
use crate::generation::{OutputConfig, Terrain};

/// Write every output enabled in `output`, then the manifest. Returns the
/// manifest that was written.
pub fn export_all(terrain: &Terrain, output: &OutputConfig) -> Result<Manifest> {
    let dir = &output.directory;
    std::fs::create_dir_all(dir)?;

    let mut manifest = Manifest::new(&output.name, terrain);

    if output.heightmap_png {
        let file = format!("{}.png", output.name);
        write_heightmap_png(terrain.heightmap(), &dir.join(&file))?;
        log::info!("Wrote heightmap image {}", dir.join(&file).display());
        manifest.files.push(file);
    }

    if output.heightmap_raw {
        let file = format!("{}.r32", output.name);
        let mut writer = BufWriter::new(File::create(dir.join(&file))?);
        write_heightmap_raw(terrain.heightmap(), &mut writer)?;
        log::info!("Wrote raw heightfield {}", dir.join(&file).display());
        manifest.files.push(file);
    }

    if output.mesh_obj {
        let file = format!("{}.obj", output.name);
        let mut writer = BufWriter::new(File::create(dir.join(&file))?);
        write_obj(terrain.mesh(), &mut writer)?;
        log::info!("Wrote mesh {}", dir.join(&file).display());
        manifest.files.push(file);
    }

    manifest.save_sync(&dir.join(MANIFEST_FILE))?;
    Ok(manifest)
}
