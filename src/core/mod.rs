pub mod config;
pub mod error;
pub mod types;

pub use config::{Boundary, GridConfig, Layout, RunConfig, SimulationParameters};
pub use error::{OncoError, Result};
