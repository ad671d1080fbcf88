//! Initial grid construction

use crate::cell::{CellState, Environment};
use crate::core::config::{GridConfig, Layout};
use crate::genetics::Phenotype;
use crate::spatial::grid::Grid;

/// Build the starting grid: every cell at `baseline`, normal cells placed
/// according to the layout
pub fn initial_grid(config: &GridConfig, baseline: Environment) -> Grid<CellState> {
    let mut grid = Grid::filled(config.width, config.height, CellState::empty(baseline));
    let normal = CellState::occupied(Phenotype::NORMAL, baseline);

    match config.layout {
        Layout::FirstRow => {
            for x in 0..config.width {
                grid.set(x, 0, normal);
            }
        }
        Layout::CenterSeed { radius } => {
            let cx = (config.width / 2) as f64;
            let cy = (config.height / 2) as f64;
            let r2 = radius * radius;
            for y in 0..config.height {
                for x in 0..config.width {
                    let dx = x as f64 - cx;
                    let dy = y as f64 - cy;
                    if dx * dx + dy * dy <= r2 {
                        grid.set(x, y, normal);
                    }
                }
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Boundary;

    fn config(layout: Layout) -> GridConfig {
        GridConfig {
            width: 11,
            height: 9,
            boundary: Boundary::Reservoir,
            layout,
        }
    }

    #[test]
    fn test_first_row_layout() {
        let grid = initial_grid(&config(Layout::FirstRow), Environment::BASELINE);
        assert_eq!(grid.iter().filter(|c| c.is_occupied()).count(), 11);
        assert!((0..11).all(|x| grid.get(x, 0).is_some_and(|c| c.is_occupied())));
        assert!(grid.get(0, 1).is_some_and(|c| c.is_empty()));
    }

    #[test]
    fn test_center_seed_zero_radius_is_single_cell() {
        let grid = initial_grid(&config(Layout::CenterSeed { radius: 0.0 }), Environment::BASELINE);
        assert_eq!(grid.iter().filter(|c| c.is_occupied()).count(), 1);
        assert!(grid.get(5, 4).is_some_and(|c| c.is_occupied()));
    }

    #[test]
    fn test_center_seed_radius_one_is_plus_shape() {
        let grid = initial_grid(&config(Layout::CenterSeed { radius: 1.0 }), Environment::BASELINE);
        assert_eq!(grid.iter().filter(|c| c.is_occupied()).count(), 5);
    }

    #[test]
    fn test_every_cell_starts_at_baseline() {
        let baseline = Environment::new(0.9, 0.8, 0.1);
        let grid = initial_grid(&config(Layout::FirstRow), baseline);
        assert!(grid.iter().all(|c| c.environment() == baseline));
        assert!(grid.iter().all(|c| c.phenotype() == Phenotype::NORMAL));
    }
}
