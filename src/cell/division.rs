//! ATP-gated division and daughter placement
//!
//! The ATP proxy combines oxidative and glycolytic yield. Below `a0` the cell
//! starves; above it division probability ramps linearly to certainty at an
//! ATP proxy of 1. A dividing cell claims the best-oxygenated empty neighbor.

use ordered_float::OrderedFloat;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cell::state::{Environment, Intent, NeighborView};
use crate::core::config::SimulationParameters;
use crate::core::types::Offset;
use crate::genetics::{mutate, Phenotype};

/// Fraction of glucose-derived energy over oxygen-derived energy per unit
const GLYCOLYTIC_YIELD: f64 = 1.0 / 18.0;

/// Result of the division step for a surviving cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DivisionOutcome {
    /// ATP proxy below `a0`
    Starved,
    /// Did not divide (failed draw or no room); phenotype unchanged
    Quiescent,
    /// Divided toward `intent.target`; `parent` is the parent's own
    /// independently mutated phenotype
    Divided { parent: Phenotype, intent: Intent },
}

/// ATP proxy (phiA) for a cell at the given glucose and oxygen levels
pub fn atp_proxy(
    phenotype: Phenotype,
    glucose: f64,
    oxygen: f64,
    params: &SimulationParameters,
) -> f64 {
    let phi_g = if phenotype.glycolytic() {
        params.k * glucose
    } else {
        glucose
    };
    oxygen + (phi_g - oxygen) * GLYCOLYTIC_YIELD
}

/// Division probability for an ATP proxy, or `None` when the cell starves
///
/// An undefined (NaN) proxy counts as starvation.
pub fn division_probability(phi_a: f64, a0: f64) -> Option<f64> {
    if phi_a.is_nan() || phi_a < a0 {
        None
    } else if phi_a >= 1.0 {
        Some(1.0)
    } else {
        Some(((phi_a - a0) / (1.0 - a0)).clamp(0.0, 1.0))
    }
}

/// Pick the empty neighbor a daughter would go to
///
/// Only empty on-grid slots qualify. Prefers the highest oxygen level; ties
/// are broken uniformly at random. Draws from `rng` only when there is a tie.
pub fn choose_target<R: Rng + ?Sized>(neighbors: &NeighborView, rng: &mut R) -> Option<Offset> {
    let best = neighbors
        .iter()
        .filter(|s| s.accepts_daughter())
        .map(|s| OrderedFloat(s.state.environment().oxygen))
        .max()?;

    let candidates: Vec<Offset> = neighbors
        .iter()
        .filter(|s| s.accepts_daughter() && OrderedFloat(s.state.environment().oxygen) == best)
        .map(|s| s.offset)
        .collect();

    match candidates.as_slice() {
        [only] => Some(*only),
        many => many.choose(rng).copied(),
    }
}

/// Run the division step for a cell that survived acid
pub fn resolve<R: Rng + ?Sized>(
    phenotype: Phenotype,
    env: Environment,
    neighbors: &NeighborView,
    params: &SimulationParameters,
    rng: &mut R,
) -> DivisionOutcome {
    let phi_a = atp_proxy(phenotype, env.glucose, env.oxygen, params);
    let p_division = match division_probability(phi_a, params.a0) {
        Some(p) => p,
        None => return DivisionOutcome::Starved,
    };

    if !rng.gen_bool(p_division) {
        return DivisionOutcome::Quiescent;
    }

    let target = match choose_target(neighbors, rng) {
        Some(t) => t,
        None => return DivisionOutcome::Quiescent,
    };

    let daughter = mutate(phenotype, params.pa, rng);
    let parent = mutate(phenotype, params.pa, rng);

    DivisionOutcome::Divided {
        parent,
        intent: Intent { target, daughter },
    }
}
