//! Procedural terrain heightfields

pub mod grid;
pub use grid::GridSize;

pub mod heightmap;
pub use heightmap::{HeightStats, Heightmap};

pub mod params;
pub use params::{Corners, DiamondDisplacement, SquareNoise, TerrainParams};

pub mod generator;
pub use generator::HeightfieldGenerator;
