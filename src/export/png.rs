//! 16-bit grayscale PNG heightmaps

use std::path::Path;

use image::{ImageBuffer, Luma};

use crate::core::Result;
use crate::terrain::Heightmap;

/// Render the heightmap to a 16-bit grayscale image, normalized so the
/// lowest cell is black and the highest white. A flat map is all black.
///
/// Pixel `(x, y)` is grid cell `(row = y, col = x)`.
pub fn heightmap_image(heightmap: &Heightmap) -> ImageBuffer<Luma<u16>, Vec<u16>> {
    let dim = heightmap.dimension() as u32;
    let stats = heightmap.stats();
    let range = stats.range();

    ImageBuffer::from_fn(dim, dim, |x, y| {
        let h = heightmap.get(y as usize, x as usize);
        let t = if range > 0.0 { (h - stats.min) / range } else { 0.0 };
        Luma([(t.clamp(0.0, 1.0) * u16::MAX as f32).round() as u16])
    })
}

/// Write the heightmap as a PNG file.
pub fn write_heightmap_png(heightmap: &Heightmap, path: &Path) -> Result<()> {
    heightmap_image(heightmap).save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::GridSize;
    use tempfile::TempDir;

    #[test]
    fn test_normalized_extremes() {
        let size = GridSize::new(1).unwrap();
        let map = Heightmap::from_data(
            size,
            vec![-1.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 1.0],
        )
        .unwrap();

        let img = heightmap_image(&map);
        assert_eq!(img.dimensions(), (3, 3));
        assert_eq!(img.get_pixel(0, 0)[0], 0);
        assert_eq!(img.get_pixel(1, 1)[0], u16::MAX);
        assert_eq!(img.get_pixel(2, 2)[0], u16::MAX / 2 + 1);
    }

    #[test]
    fn test_flat_map_is_black() {
        let map = Heightmap::new(GridSize::new(2).unwrap());
        let img = heightmap_image(&map);
        assert!(img.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn test_write_png() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("height.png");
        let map = Heightmap::new(GridSize::new(3).unwrap());

        write_heightmap_png(&map, &path).expect("write failed");

        let loaded = image::open(&path).expect("open failed").into_luma16();
        assert_eq!(loaded.dimensions(), (9, 9));
    }
}
