//! Terragrid - diamond-square terrain heightfields and grid tessellation

pub mod core;
pub mod math;
pub mod terrain;
pub mod mesh;
pub mod generation;
pub mod export;
