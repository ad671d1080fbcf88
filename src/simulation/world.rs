//! TumorWorld - the grid and everything a tick needs to advance it

use crate::cell::{CellState, Environment};
use crate::core::config::{
    validate_dimensions, validate_environment, Boundary, RunConfig, SimulationParameters,
};
use crate::core::error::Result;
use crate::core::types::Tick;
use crate::simulation::layout::initial_grid;
use crate::simulation::tick::{run_tick, TickReport};
use crate::spatial::grid::Grid;

/// The simulated tissue
#[derive(Debug, Clone)]
pub struct TumorWorld {
    /// Committed state after the last tick (no intents)
    pub grid: Grid<CellState>,
    pub params: SimulationParameters,
    pub boundary: Boundary,
    /// Supply level read from off-grid slots under a reservoir boundary
    pub baseline: Environment,
    /// Run seed every per-cell stream derives from
    pub seed: u64,
    /// Ticks completed so far
    pub current_tick: Tick,
    /// Minimum cell count before a tick is mapped in parallel
    pub parallel_threshold: usize,
}

impl TumorWorld {
    /// Build the starting world described by `config`
    pub fn new(config: &RunConfig) -> Result<Self> {
        config.validate()?;
        let grid = initial_grid(&config.grid, config.baseline);
        Ok(Self {
            grid,
            params: config.params,
            boundary: config.grid.boundary,
            baseline: config.baseline,
            seed: config.seed,
            current_tick: 0,
            parallel_threshold: config.parallel_threshold,
        })
    }

    /// Wrap a hand-built grid
    ///
    /// Checks the same limits a [`RunConfig`] does: valid parameters, a grid
    /// of at least 3x3, and finite non-negative metabolite levels in every
    /// cell and in `baseline`.
    pub fn from_grid(
        grid: Grid<CellState>,
        params: SimulationParameters,
        boundary: Boundary,
        baseline: Environment,
        seed: u64,
    ) -> Result<Self> {
        params.validate()?;
        validate_dimensions(grid.width, grid.height)?;
        validate_environment(&baseline, "baseline")?;
        for cell in grid.iter() {
            validate_environment(&cell.environment(), "cell")?;
        }
        Ok(Self {
            grid,
            params,
            boundary,
            baseline,
            seed,
            current_tick: 0,
            parallel_threshold: usize::MAX,
        })
    }

    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn occupied_count(&self) -> usize {
        self.grid.iter().filter(|c| c.is_occupied()).count()
    }

    /// What an off-grid neighbor slot reads as
    pub fn off_grid_cell(&self) -> CellState {
        CellState::empty(self.baseline)
    }

    /// Advance one tick
    pub fn step(&mut self) -> TickReport {
        run_tick(self)
    }

    /// Advance `ticks` ticks, returning one report per tick
    pub fn run(&mut self, ticks: u64) -> Vec<TickReport> {
        (0..ticks).map(|_| self.step()).collect()
    }
}
