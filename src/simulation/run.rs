//! Main simulation loop

use crate::core::config::RunConfig;
use crate::core::error::Result;
use crate::simulation::census::Census;
use crate::simulation::output::{RunOutput, RunStats};
use crate::simulation::tick::{run_tick, TickReport};
use crate::simulation::world::TumorWorld;

/// Run `config.steps` ticks from the configured initial grid
///
/// A census is recorded before the first tick, then every `report_every`
/// ticks (`0` records only the initial and final census).
pub fn simulate(config: RunConfig, report_every: u64) -> Result<RunOutput> {
    simulate_with(config, report_every, |_, _| {})
}

/// [`simulate`], calling `on_tick` after every tick
pub fn simulate_with<F>(config: RunConfig, report_every: u64, mut on_tick: F) -> Result<RunOutput>
where
    F: FnMut(&TumorWorld, &TickReport),
{
    let start = std::time::Instant::now();

    let mut world = TumorWorld::new(&config)?;
    let initial = Census::take(&world.grid, 0);

    tracing::info!(
        "Simulating {} ticks on a {}x{} grid (seed {}, {:?} boundary)",
        config.steps,
        config.grid.width,
        config.grid.height,
        config.seed,
        config.grid.boundary,
    );

    let mut stats = RunStats {
        initial_occupied: initial.occupied,
        peak_occupied: initial.occupied,
        final_occupied: initial.occupied,
        ..Default::default()
    };
    let mut history = vec![initial];

    for _ in 0..config.steps {
        let report = run_tick(&mut world);
        stats.record(&report);

        if report_every > 0 && world.current_tick % report_every == 0 {
            let census = Census::take(&world.grid, world.current_tick);
            tracing::debug!("{}", census.line());
            history.push(census);
        }

        if report.occupied == 0 && stats.extinct_at == Some(report.tick) {
            tracing::info!("Population extinct after tick {}", report.tick);
        }

        on_tick(&world, &report);
    }

    let final_census = Census::take(&world.grid, world.current_tick);
    tracing::info!("{}", final_census.line());

    Ok(RunOutput::new(config, history, final_census, stats, start.elapsed()))
}
