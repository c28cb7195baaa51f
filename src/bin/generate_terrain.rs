//! Terrain generator binary — builds a diamond-square heightfield and writes it to disk.
//!
//! Usage: cargo run --release --bin generate_terrain -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>     JSON config file (flags below override it)
//!   --size <N>          Grid exponent, grid is 2^N + 1 per side (default: 7)
//!   --roughness <R>     Displacement per unit of step size (default: 1.0)
//!   --limit <L>         Random amplitude bound (default: 1.0)
//!   --seed <SEED>       Random seed (default: from OS entropy)
//!   --name <NAME>       Base name of output files (default: "terrain")
//!   --out <DIR>         Output directory (default: assets/terrain)
//!   --raw               Also write a raw f32 heightfield
//!
//! Output structure:
//!   <out>/
//!     <name>.png          # 16-bit grayscale heightmap
//!     <name>.obj          # tessellated mesh
//!     <name>.r32          # raw heightfield (with --raw)
//!     manifest.json       # run metadata

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use terragrid::core::Result;
use terragrid::export;
use terragrid::generation::{GenerationPipeline, TerrainConfig};
use terragrid::terrain::GridSize;

fn main() -> ExitCode {
    terragrid::core::logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terrain generation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut config = match parse_arg::<String>(&args, "--config") {
        Some(path) => TerrainConfig::load_sync(&PathBuf::from(path))?,
        None => TerrainConfig::default(),
    };
    if let Some(size) = parse_arg::<u32>(&args, "--size") {
        config.terrain.size = GridSize::new(size)?;
    }
    if let Some(roughness) = parse_arg::<f32>(&args, "--roughness") {
        config.terrain.roughness = roughness;
    }
    if let Some(limit) = parse_arg::<f32>(&args, "--limit") {
        config.terrain.random_limit = limit;
    }
    if let Some(seed) = parse_arg::<u64>(&args, "--seed") {
        config.terrain.seed = Some(seed);
    }
    if let Some(name) = parse_arg::<String>(&args, "--name") {
        config.output.name = name;
    }
    if let Some(out) = parse_arg::<String>(&args, "--out") {
        config.output.directory = PathBuf::from(out);
    }
    if args.iter().any(|a| a == "--raw") {
        config.output.heightmap_raw = true;
    }

    let dim = config.terrain.size.dimension();
    println!("=== Terragrid Terrain Generator ===");
    println!("Grid:      {} x {}", dim, dim);
    println!("Roughness: {}, Limit: {}", config.terrain.roughness, config.terrain.random_limit);
    match config.terrain.seed {
        Some(seed) => println!("Seed:      {}", seed),
        None => println!("Seed:      (entropy)"),
    }
    println!("Output:    {}", config.output.directory.display());
    println!();

    let start = Instant::now();
    let pipeline = GenerationPipeline::new(&config)?;
    let terrain = pipeline.generate();
    let manifest = export::export_all(&terrain, &config.output)?;
    let elapsed = start.elapsed();

    let (cx, cz) = terrain.center();
    println!("Elevation: min {:.3}, max {:.3}, mean {:.3}",
        manifest.stats.min, manifest.stats.max, manifest.stats.mean);
    println!("Center:    ({}, {}) = {:.3}", cx, cz, terrain.elevation_at(cx, cz)?);
    println!("Mesh:      {} vertices, {} triangles",
        manifest.vertex_count, manifest.triangle_count);
    let extent = terrain.mesh().bounds().size();
    println!("Bounds:    {:.1} x {:.3} x {:.1}", extent.x, extent.y, extent.z);
    println!("Files:     {}", manifest.files.join(", "));
    println!();
    println!("=== Generation Complete in {:.1}ms ===", elapsed.as_secs_f64() * 1000.0);

    Ok(())
}

/// Value following `flag`. A flag given without a usable value is reported
/// and then ignored, leaving the config value in place.
fn parse_arg<T: FromStr>(args: &[String], flag: &str) -> Option<T> {
    let i = args.iter().position(|a| a == flag)?;
    let Some(value) = args.get(i + 1) else {
        log::warn!("{} expects a value; ignoring it", flag);
        return None;
    };
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("Could not parse {} value {:?}; ignoring it", flag, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_arg_values() {
        let args = args(&["generate_terrain", "--size", "5", "--roughness", "0.5", "--name", "hills"]);
        assert_eq!(parse_arg::<u32>(&args, "--size"), Some(5));
        assert_eq!(parse_arg::<f32>(&args, "--roughness"), Some(0.5));
        assert_eq!(parse_arg::<String>(&args, "--name"), Some("hills".to_string()));
        assert_eq!(parse_arg::<u64>(&args, "--seed"), None);
    }

    #[test]
    fn test_parse_arg_rejects_bad_values() {
        let args = args(&["generate_terrain", "--size", "abc", "--seed", "-3", "--limit"]);
        assert_eq!(parse_arg::<u32>(&args, "--size"), None);
        assert_eq!(parse_arg::<u64>(&args, "--seed"), None);
        assert_eq!(parse_arg::<f32>(&args, "--limit"), None);
    }
}
