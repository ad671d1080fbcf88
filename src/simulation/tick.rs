//! Tick system - advances the whole grid one step
//!
//! A tick is two parallel maps with a barrier between them:
//!
//! 1. Growth: every cell reads the committed grid and writes its own slot of
//!    a fresh buffer (metabolites, death, division intents).
//! 2. Settlement: every cell reads the growth buffer; empty cells admit at
//!    most one daughter and every intent is consumed.
//!
//! Uses rayon for both maps once the grid is large enough. Each cell draws
//! from its own seeded stream, so the result is the same either way.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cell::{transition, CellState, NeighborView, Phase};
use crate::core::config::Boundary;
use crate::core::types::{Tick, MOORE_OFFSETS};
use crate::simulation::rng::cell_rng;
use crate::simulation::world::TumorWorld;
use crate::spatial::grid::Grid;

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Tick that was simulated (0-based)
    pub tick: Tick,
    /// Cells that died of acid or starvation
    pub deaths: usize,
    /// Division intents published
    pub intents: usize,
    /// Empty cells settled by a daughter
    pub births: usize,
    /// Intents that lost the race for their target to another suitor
    pub contested: usize,
    /// Occupied cells after the tick
    pub occupied: usize,
}

/// Gather the Moore neighborhood of `index` from `grid`
///
/// Slots beyond a reservoir edge read as `off_grid` and are flagged so no
/// daughter is ever sent there.
pub fn neighbor_view(
    grid: &Grid<CellState>,
    index: usize,
    boundary: Boundary,
    off_grid: CellState,
) -> NeighborView {
    let (x, y) = grid.coords(index);
    let cells = grid.cells();
    let mut on_grid = [true; 8];
    let mut states = [off_grid; 8];
    for (i, &offset) in MOORE_OFFSETS.iter().enumerate() {
        match grid.neighbor_index(x, y, offset, boundary) {
            Some(n) => states[i] = cells[n],
            None => on_grid[i] = false,
        }
    }
    NeighborView::from_parts(states, on_grid)
}

/// Map every cell index to a new state, in parallel when asked
fn map_cells<F>(len: usize, parallel: bool, f: F) -> Vec<CellState>
where
    F: Fn(usize) -> CellState + Sync + Send,
{
    if parallel {
        (0..len).into_par_iter().map(f).collect()
    } else {
        (0..len).map(f).collect()
    }
}

/// Run one phase over the whole grid
fn run_phase(world: &TumorWorld, source: &Grid<CellState>, phase: Phase) -> Grid<CellState> {
    let parallel = source.len() >= world.parallel_threshold;
    let off_grid = world.off_grid_cell();
    let cells = source.cells();

    let next = map_cells(source.len(), parallel, |i| {
        let neighbors = neighbor_view(source, i, world.boundary, off_grid);
        let mut rng = cell_rng(world.seed, world.current_tick, phase, i);
        transition(phase, &cells[i], &neighbors, &world.params, &mut rng)
    });

    source.with_data(next)
}

/// Advance the world by one tick
pub fn run_tick(world: &mut TumorWorld) -> TickReport {
    let published = run_phase(world, &world.grid, Phase::Growth);
    let settled = run_phase(world, &published, Phase::Settlement);

    let mut report = TickReport {
        tick: world.current_tick,
        ..Default::default()
    };

    let cells = world.grid.cells().iter().zip(published.cells()).zip(settled.cells());
    for ((before, grown), after) in cells {
        if before.is_occupied() && grown.is_empty() {
            report.deaths += 1;
        }
        if grown.intent().is_some() {
            report.intents += 1;
        }
        if grown.is_empty() && after.is_occupied() {
            report.births += 1;
        }
        if after.is_occupied() {
            report.occupied += 1;
        }
    }
    report.contested = report.intents.saturating_sub(report.births);

    world.grid = settled;
    world.current_tick += 1;
    report
}
