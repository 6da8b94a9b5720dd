//! Contour icon generation library
//!
//! Re-exports modules for use by the binary and tests.

pub mod export;
pub mod fractal;
pub mod heightmap;
pub mod noise;
pub mod render;
pub mod seeds;
