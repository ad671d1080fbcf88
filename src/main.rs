//! Oncogrid - Entry Point
//!
//! Runs one tumor-growth simulation from a TOML config (or the defaults),
//! optionally printing the final grid and writing the full output as JSON.

use clap::Parser;
use std::path::PathBuf;

use oncogrid::cell::CellState;
use oncogrid::core::config::RunConfig;
use oncogrid::core::error::Result;
use oncogrid::render;
use oncogrid::simulation::simulate_with;
use oncogrid::spatial::Grid;

/// Stochastic cellular automaton of tumor growth
#[derive(Parser, Debug)]
#[command(name = "oncogrid")]
#[command(about = "Simulate tumor growth under glucose, oxygen and acid feedback")]
struct Args {
    /// TOML run configuration (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of ticks
    #[arg(long)]
    steps: Option<u64>,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the grid width
    #[arg(long)]
    width: Option<usize>,

    /// Override the grid height
    #[arg(long)]
    height: Option<usize>,

    /// Record a census every N ticks (0 = initial and final only)
    #[arg(long, default_value_t = 10)]
    report_every: u64,

    /// Write the full run output as JSON
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the grid in color every N ticks (0 = final grid only)
    #[arg(long)]
    show: Option<u64>,

    /// Print frames as plain glyphs instead of colored blocks
    #[arg(long)]
    ascii: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("oncogrid=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if let Some(steps) = args.steps {
        config.steps = steps;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(width) = args.width {
        config.grid.width = width;
    }
    if let Some(height) = args.height {
        config.grid.height = height;
    }
    config.validate()?;

    let frame_every = args.show;
    let ascii = args.ascii;
    let last_tick = config.steps;
    let output = simulate_with(config, args.report_every, |world, _| {
        let due = match frame_every {
            None => false,
            Some(0) => world.current_tick == last_tick,
            Some(every) => world.current_tick % every == 0,
        };
        if due {
            println!("tick {}", world.current_tick);
            print_frame(&world.grid, ascii);
        }
    })?;

    println!("{}", output.summary());

    if let Some(path) = &args.output {
        std::fs::write(path, output.to_json()?)?;
        tracing::info!("Full output written to {}", path.display());
    }

    Ok(())
}

fn print_frame(grid: &Grid<CellState>, ascii: bool) {
    if ascii {
        print!("{}", render::text_frame(grid));
    } else if let Err(e) = render::write_terminal_frame(&mut std::io::stdout().lock(), grid) {
        tracing::warn!("Failed to draw frame: {}", e);
    }
}
