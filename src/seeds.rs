//! Seed management for icon generation
//!
//! The noise hash takes two scalar offsets that decorrelate successive runs.
//! Both are derived from a single master seed so a run can be reproduced by
//! passing the printed master back in.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Range of the hash offsets. Large enough that two runs land on
/// uncorrelated slices of the sine hash.
const OFFSET_RANGE: f64 = 10_000.0;

/// Seeds for the noise field.
///
/// Immutable for the whole run; threaded explicitly through every noise and
/// fractal evaluation rather than hidden in process-global state.
#[derive(Clone, Debug)]
pub struct NoiseSeeds {
    /// Master seed (used for display/reproduction)
    pub master: u64,
    /// Additive hash bias for the x lattice channel
    pub offset_x: f64,
    /// Additive hash bias for the y lattice channel
    pub offset_y: f64,
}

impl NoiseSeeds {
    /// Derive both offsets deterministically from a master seed.
    pub fn from_master(master: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(master);
        Self {
            master,
            offset_x: rng.gen::<f64>() * OFFSET_RANGE,
            offset_y: rng.gen::<f64>() * OFFSET_RANGE,
        }
    }
}

impl Default for NoiseSeeds {
    fn default() -> Self {
        Self::from_master(rand::random())
    }
}

impl std::fmt::Display for NoiseSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "NoiseSeeds {{ master: {}, offset_x: {:.4}, offset_y: {:.4} }}",
            self.master, self.offset_x, self.offset_y,
        )
    }
}
