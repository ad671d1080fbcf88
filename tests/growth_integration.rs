//! Integration tests for whole-grid ticks
//!
//! These tests drive complete runs through the public API:
//! - Reproducibility for a fixed seed, sequential or parallel
//! - One birth per empty cell, daughters inherit from a neighbor
//! - Intents never survive a tick
//! - Config files drive complete runs

use oncogrid::cell::{CellState, Environment, NeighborView};
use oncogrid::core::config::{Boundary, Layout, RunConfig, SimulationParameters};
use oncogrid::core::error::OncoError;
use oncogrid::core::types::MOORE_OFFSETS;
use oncogrid::genetics::Phenotype;
use oncogrid::simulation::tick::neighbor_view;
use oncogrid::simulation::{run_tick, simulate, TumorWorld};
use oncogrid::spatial::Grid;

fn small_config(seed: u64) -> RunConfig {
    let mut config = RunConfig::default();
    config.grid.width = 24;
    config.grid.height = 24;
    config.grid.layout = Layout::CenterSeed { radius: 4.0 };
    config.steps = 30;
    config.seed = seed;
    config
}

fn run_world(mut world: TumorWorld, ticks: u64) -> TumorWorld {
    for _ in 0..ticks {
        run_tick(&mut world);
    }
    world
}

#[test]
fn test_same_seed_same_trajectory() {
    let a = run_world(TumorWorld::new(&small_config(3)).unwrap(), 25);
    let b = run_world(TumorWorld::new(&small_config(3)).unwrap(), 25);
    assert_eq!(a.grid, b.grid);
}

#[test]
fn test_parallel_matches_sequential() {
    let sequential = TumorWorld::new(&small_config(11))
        .unwrap()
        .with_parallel_threshold(usize::MAX);
    let parallel = TumorWorld::new(&small_config(11))
        .unwrap()
        .with_parallel_threshold(0);

    let sequential = run_world(sequential, 20);
    let parallel = run_world(parallel, 20);
    assert_eq!(sequential.grid, parallel.grid);
}

#[test]
fn test_different_seeds_diverge() {
    let mut config = small_config(1);
    config.params.pa = 0.5;
    let a = run_world(TumorWorld::new(&config).unwrap(), 15);
    config.seed = 2;
    let b = run_world(TumorWorld::new(&config).unwrap(), 15);
    assert_ne!(a.grid, b.grid);
}

#[test]
fn test_no_intent_survives_a_tick() {
    let mut world = TumorWorld::new(&small_config(5)).unwrap();
    for _ in 0..15 {
        run_tick(&mut world);
        assert!(world.grid.iter().all(|c| c.intent().is_none()));
    }
}

#[test]
fn test_daughters_come_from_an_occupied_neighbor() {
    let mut config = small_config(8);
    config.params.pa = 0.0;
    let mut world = TumorWorld::new(&config).unwrap();

    for _ in 0..15 {
        let before = world.grid.clone();
        let off_grid = world.off_grid_cell();
        let boundary = world.boundary;
        run_tick(&mut world);

        for (i, (old, new)) in before.iter().zip(world.grid.iter()).enumerate() {
            if new.is_occupied() {
                // Without mutation a normal seed only ever yields normal cells
                assert_eq!(new.phenotype(), Phenotype::NORMAL);
            }
            if old.is_empty() && new.is_occupied() {
                let view = neighbor_view(&before, i, boundary, off_grid);
                assert!(
                    view.iter()
                        .any(|s| s.state.is_occupied() && s.state.phenotype() == new.phenotype()),
                    "Cell {} was born without an occupied parent nearby",
                    i
                );
            }
        }
    }
}

#[test]
fn test_report_matches_grid_changes() {
    let mut world = TumorWorld::new(&small_config(21)).unwrap();
    for _ in 0..20 {
        let before = world.grid.clone();
        let report = run_tick(&mut world);

        // A cell that dies this tick was occupied when targets were chosen,
        // so every birth lands on a cell that was already empty
        let births = before
            .iter()
            .zip(world.grid.iter())
            .filter(|(old, new)| old.is_empty() && new.is_occupied())
            .count();
        assert_eq!(births, report.births);
        assert_eq!(report.occupied, world.occupied_count());
        assert_eq!(report.intents, report.births + report.contested);
    }
}

#[test]
fn test_crowded_torus_caps_births_at_free_cells() {
    // Targets come from the previous snapshot, where only one cell is free
    let normal = CellState::occupied(Phenotype::NORMAL, Environment::BASELINE);
    let mut grid = Grid::filled(5, 5, normal);
    grid.set(2, 2, CellState::empty(Environment::BASELINE));
    let params = SimulationParameters {
        pa: 0.0,
        ..Default::default()
    };
    let mut world =
        TumorWorld::from_grid(grid, params, Boundary::Toroidal, Environment::BASELINE, 4).unwrap();

    let report = run_tick(&mut world);
    assert!(report.births <= 1);
    assert!(world.occupied_count() <= 25);
}

#[test]
fn test_first_row_grows_into_second_row() {
    let mut config = small_config(13);
    config.grid.boundary = Boundary::Reservoir;
    config.grid.layout = Layout::FirstRow;
    config.params.pa = 0.0;
    let mut world = TumorWorld::new(&config).unwrap();

    let report = run_tick(&mut world);
    // Past the top edge lies supply, not room: every daughter lands in row 1
    assert!(report.births > 0);
    assert!(report.births <= config.grid.width);
    let width = world.grid.width;
    for (i, cell) in world.grid.iter().enumerate() {
        if cell.is_occupied() {
            assert!(i / width <= 1, "cell {} is beyond the second row", i);
        }
    }
    let second_row = world.grid.cells()[width..2 * width]
        .iter()
        .filter(|c| c.is_occupied())
        .count();
    assert_eq!(second_row, report.births);
}

#[test]
fn test_lone_cell_without_room_never_divides() {
    let normal = CellState::occupied(Phenotype::NORMAL, Environment::BASELINE);
    let mut grid = Grid::filled(3, 3, normal);
    grid.set(1, 1, CellState::occupied("AGH".parse().unwrap(), Environment::BASELINE));
    let params = SimulationParameters {
        pa: 0.0,
        ..Default::default()
    };
    let mut world =
        TumorWorld::from_grid(grid, params, Boundary::Toroidal, Environment::BASELINE, 17).unwrap();

    let report = run_tick(&mut world);
    assert_eq!(report.intents, 0);
    assert_eq!(report.births, 0);
}

#[test]
fn test_wrong_neighbor_count_is_an_error() {
    let states = vec![CellState::default(); 9];
    assert!(matches!(
        NeighborView::try_from_states(&states),
        Err(OncoError::NeighborCount(9))
    ));
    assert_eq!(MOORE_OFFSETS.len(), 8);
}

#[test]
fn test_toml_config_run() {
    let config = RunConfig::from_toml_str(
        r#"
        steps = 10
        seed = 42

        [grid]
        width = 16
        height = 12
        boundary = "toroidal"
        layout = { kind = "first_row" }
        "#,
    )
    .expect("Should parse config");

    let output = simulate(config, 5).expect("Run should succeed");
    assert_eq!(output.final_census.tick, 10);
    assert_eq!(output.history.len(), 3);
    assert_eq!(output.statistics.initial_occupied, 16);
    assert_eq!(
        output.final_census.empty + output.final_census.occupied,
        16 * 12
    );
}

#[test]
fn test_extinct_world_stays_empty() {
    let mut config = small_config(2);
    config.grid.layout = Layout::CenterSeed { radius: 0.0 };
    let mut world = TumorWorld::new(&config).unwrap();
    world.grid = Grid::filled(24, 24, CellState::empty(Environment::BASELINE));

    let report = run_tick(&mut world);
    assert_eq!(report.occupied, 0);
    assert_eq!(report.births, 0);
    assert_eq!(report.intents, 0);
}
