//! The per-cell transition rule
//!
//! A tick runs in two phases over the whole grid:
//!
//! 1. [`Phase::Growth`] - every cell reads the previous snapshot. Empty cells
//!    refresh their environment. Occupied cells update metabolites, may die of
//!    acid or starvation, and may publish a division intent.
//! 2. [`Phase::Settlement`] - every cell reads its neighbors' growth outputs.
//!    Empty cells admit at most one daughter; every intent is consumed.
//!
//! No sub-step can fail: infeasible steps leave the cell unchanged.

use rand::Rng;

use crate::cell::division::{self, DivisionOutcome};
use crate::cell::intent;
use crate::cell::metabolites;
use crate::cell::state::{CellState, NeighborView};
use crate::cell::viability;
use crate::core::config::SimulationParameters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Growth,
    Settlement,
}

impl Phase {
    /// Stable tag mixed into per-cell random seeds
    pub fn tag(self) -> u64 {
        match self {
            Phase::Growth => 0,
            Phase::Settlement => 1,
        }
    }
}

/// Compute a cell's output for one phase
///
/// In [`Phase::Growth`] `neighbors` is the previous snapshot; in
/// [`Phase::Settlement`] it is the neighbors' growth-phase outputs.
pub fn transition<R: Rng + ?Sized>(
    phase: Phase,
    cell: &CellState,
    neighbors: &NeighborView,
    params: &SimulationParameters,
    rng: &mut R,
) -> CellState {
    match phase {
        Phase::Growth => grow(cell, neighbors, params, rng),
        Phase::Settlement => settle(cell, neighbors, rng),
    }
}

fn grow<R: Rng + ?Sized>(
    cell: &CellState,
    neighbors: &NeighborView,
    params: &SimulationParameters,
    rng: &mut R,
) -> CellState {
    if cell.is_empty() {
        return CellState::empty(metabolites::estimate(None, neighbors, params));
    }

    let phenotype = cell.phenotype();
    let env = metabolites::estimate(Some(phenotype), neighbors, params);

    // The dead keep the environment they computed this tick
    if viability::dies(phenotype, env.acid, params, rng) {
        return CellState::empty(env);
    }

    match division::resolve(phenotype, env, neighbors, params, rng) {
        DivisionOutcome::Starved => CellState::empty(env),
        DivisionOutcome::Quiescent => CellState::occupied(phenotype, env),
        DivisionOutcome::Divided { parent, intent } => CellState::dividing(parent, env, intent),
    }
}

fn settle<R: Rng + ?Sized>(cell: &CellState, published: &NeighborView, rng: &mut R) -> CellState {
    if cell.is_occupied() {
        return cell.settled();
    }

    match intent::settle(published, rng) {
        Some(daughter) => CellState::occupied(daughter, cell.environment()),
        None => cell.settled(),
    }
}
