pub mod census;
pub mod layout;
pub mod output;
pub mod rng;
pub mod run;
pub mod tick;
pub mod world;

pub use census::Census;
pub use output::{RunOutput, RunStats};
pub use run::{simulate, simulate_with};
pub use tick::{run_tick, TickReport};
pub use world::TumorWorld;
