//! Per-cell state and the stochastic transition rule

pub mod division;
pub mod intent;
pub mod metabolites;
pub mod state;
pub mod transition;
pub mod viability;

pub use division::DivisionOutcome;
pub use state::{CellState, Environment, Intent, NeighborSlot, NeighborView, Occupancy};
pub use transition::{transition, Phase};
