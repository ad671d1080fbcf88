//! Local glucose, oxygen and acid levels
//!
//! One Jacobi-style relaxation step over the orthogonal neighbors, with the
//! centre cell acting as a sink. Occupied cells consume glucose and oxygen,
//! which lowers their level relative to what the neighbors supply.

use crate::cell::state::{Environment, NeighborView};
use crate::core::config::SimulationParameters;
use crate::genetics::Phenotype;

/// Number of orthogonal neighbors averaged over
const SUPPLY_SLOTS: f64 = 4.0;

/// Compute this tick's environment for a cell
///
/// `occupant` is `None` for an empty cell, which consumes and produces nothing.
pub fn estimate(
    occupant: Option<Phenotype>,
    neighbors: &NeighborView,
    params: &SimulationParameters,
) -> Environment {
    let (sum_glucose, sum_oxygen, sum_acid) = neighbors.orthogonal().fold(
        (0.0, 0.0, 0.0),
        |(g, o, a), slot| {
            let env = slot.state.environment();
            (g + env.glucose, o + env.oxygen, a + env.acid)
        },
    );

    let (glucose_uptake, oxygen_uptake) = match occupant {
        None => (0.0, 0.0),
        Some(p) => (params.glucose_uptake(p.glycolytic()), params.oxygen_uptake()),
    };

    let glucose = sum_glucose / (SUPPLY_SLOTS + glucose_uptake);
    let oxygen = sum_oxygen / (SUPPLY_SLOTS + oxygen_uptake);

    let production = acid_production(occupant, glucose, oxygen, params);

    // Negative production (glycolytic cell with oxygen to spare) may pull the
    // average below zero; acid is a concentration, so floor it here
    let acid = ((sum_acid + production) / SUPPLY_SLOTS).max(0.0);

    Environment::new(glucose, oxygen, acid)
}

/// Acid released by the occupant this tick
pub fn acid_production(
    occupant: Option<Phenotype>,
    glucose: f64,
    oxygen: f64,
    params: &SimulationParameters,
) -> f64 {
    match occupant {
        None => 0.0,
        Some(p) if p.glycolytic() => params.k * glucose - oxygen,
        Some(_) => (glucose - oxygen).max(0.0),
    }
}
