//! Per-cell random sources
//!
//! Every cell draws from its own ChaCha stream, seeded from the run seed, the
//! tick, the phase and the cell index. Draws inside a stream happen in a fixed
//! order, so a trajectory depends only on the seed and the initial grid, never
//! on which thread ran which cell.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cell::Phase;
use crate::core::types::Tick;

/// SplitMix64 finalizer
#[inline]
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Seed for one cell's stream in one phase of one tick
pub fn cell_seed(run_seed: u64, tick: Tick, phase: Phase, index: usize) -> u64 {
    let h = mix(run_seed);
    let h = mix(h ^ tick);
    let h = mix(h ^ phase.tag());
    mix(h ^ index as u64)
}

pub fn cell_rng(run_seed: u64, tick: Tick, phase: Phase, index: usize) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(cell_seed(run_seed, tick, phase, index))
}
