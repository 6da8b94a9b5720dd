//! Scalar value-noise field: lattice hash + smoothed bilinear interpolation.

use crate::seeds::NoiseSeeds;

// =============================================================================
// HASH CONSTANTS
// =============================================================================

// The classic sin-based shader hash: frac(sin(i*A + j*B) * C). The constant
// triple is the well-known 12.9898 / 78.233 / 43758.5453.
const HASH_X: f64 = 12.9898;
const HASH_Y: f64 = 78.233;
const HASH_SCALE: f64 = 43758.5453;

/// Hash two lattice coordinates to a pseudo-random value in [0, 1).
///
/// Both seed offsets enter as additive biases, so different seeds shift the
/// whole field onto an uncorrelated slice of the sine curve.
fn lattice_hash(i: f64, j: f64, seeds: &NoiseSeeds) -> f64 {
    let n = (i * HASH_X + j * HASH_Y + seeds.offset_x + seeds.offset_y).sin() * HASH_SCALE;
    n - n.floor()
}

/// Smoothstep easing: 3t^2 - 2t^3. Zero first derivative at t=0 and t=1,
/// which is what makes the blended field C1-smooth across cell boundaries.
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Sample the value-noise field at a real-valued coordinate.
///
/// Decomposes the coordinate into lattice indices and fractional offsets,
/// hashes the four surrounding corners, and blends them bilinearly with
/// smoothstep-eased weights. Pure and total over all real inputs; the result
/// lies in [0, 1).
pub fn value_noise(x: f64, y: f64, seeds: &NoiseSeeds) -> f64 {
    let i = x.floor();
    let j = y.floor();
    let f = x - i;
    let g = y - j;

    let a = lattice_hash(i, j, seeds);
    let b = lattice_hash(i + 1.0, j, seeds);
    let c = lattice_hash(i, j + 1.0, seeds);
    let d = lattice_hash(i + 1.0, j + 1.0, seeds);

    let u = smoothstep(f);
    let v = smoothstep(g);

    a * (1.0 - u) * (1.0 - v) + b * u * (1.0 - v) + c * (1.0 - u) * v + d * u * v
}
