//! Fractal composer: fractional Brownian motion over the value-noise field,
//! plus the domain-warped height function that shapes the contour flow.

use crate::noise::value_noise;
use crate::seeds::NoiseSeeds;

/// Coordinate shift applied to the two warp channels so they sample
/// decorrelated regions of the field.
const WARP_SHIFT: f64 = 100.0;

/// Parameters for the flow field
pub struct FlowParams {
    /// Spatial frequency of the base field (higher = larger features)
    pub flow_scale: f64,
    /// Octave count for the base and warped fields
    pub turbulence: u32,
    /// Octave count for the warp channels
    pub warp_octaves: u32,
    /// Magnitude of the coordinate perturbation, in pixels
    pub warp_strength: f64,
}

impl Default for FlowParams {
    fn default() -> Self {
        Self {
            flow_scale: 100.0,
            turbulence: 1,
            warp_octaves: 3,
            warp_strength: 50.0,
        }
    }
}

/// Fractional Brownian Motion - multi-octave noise.
///
/// Starts at amplitude 0.5 and frequency 1, halving the amplitude and
/// doubling the frequency per octave. With a single octave this degenerates
/// to the base noise scaled by 0.5.
pub fn fbm(x: f64, y: f64, octaves: u32, seeds: &NoiseSeeds) -> f64 {
    let mut total = 0.0;
    let mut amplitude = 0.5;
    let mut frequency = 1.0;

    for _ in 0..octaves {
        total += amplitude * value_noise(x * frequency, y * frequency, seeds);
        frequency *= 2.0;
        amplitude *= 0.5;
    }

    total
}

/// Evaluate the domain-warped height field at a canvas coordinate.
///
/// Two independent fBm channels perturb the sample position before a second
/// fractal sum is taken there; the final height blends the unwarped and
/// warped sums. Deterministic for fixed seeds and coordinates.
pub fn flow_height(x: f64, y: f64, params: &FlowParams, seeds: &NoiseSeeds) -> f64 {
    let scale = params.flow_scale;
    let half_scale = scale * 0.5;

    let base = fbm(x / scale, y / scale, params.turbulence, seeds);

    let warp_x = fbm(
        (x + WARP_SHIFT) / half_scale,
        y / half_scale,
        params.warp_octaves,
        seeds,
    ) * params.warp_strength;
    let warp_y = fbm(
        x / half_scale,
        (y + WARP_SHIFT) / half_scale,
        params.warp_octaves,
        seeds,
    ) * params.warp_strength;

    let warped = fbm(
        (x + warp_x) / scale,
        (y + warp_y) / scale,
        params.turbulence,
        seeds,
    );

    (base + warped * 0.5) * 0.5
}
