//! Population census of a grid

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::cell::{CellState, Environment};
use crate::core::types::Tick;
use crate::genetics::Phenotype;
use crate::spatial::grid::Grid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Census {
    pub tick: Tick,
    pub empty: usize,
    pub occupied: usize,
    /// Occupied cells per phenotype; every phenotype is listed, zeros included
    pub phenotypes: BTreeMap<Phenotype, usize>,
    /// Mean environment over all cells
    pub mean_environment: Environment,
}

impl Census {
    pub fn take(grid: &Grid<CellState>, tick: Tick) -> Self {
        let mut counts = [0usize; 8];
        let mut empty = 0;
        let (mut glucose, mut oxygen, mut acid) = (0.0, 0.0, 0.0);

        for cell in grid.iter() {
            if cell.is_occupied() {
                counts[cell.phenotype().index()] += 1;
            } else {
                empty += 1;
            }
            let env = cell.environment();
            glucose += env.glucose;
            oxygen += env.oxygen;
            acid += env.acid;
        }

        let n = grid.len().max(1) as f64;
        Self {
            tick,
            empty,
            occupied: grid.len() - empty,
            phenotypes: Phenotype::ALL.iter().map(|p| (*p, counts[p.index()])).collect(),
            mean_environment: Environment::new(glucose / n, oxygen / n, acid / n),
        }
    }

    pub fn count(&self, phenotype: Phenotype) -> usize {
        self.phenotypes.get(&phenotype).copied().unwrap_or(0)
    }

    /// Phenotype with the most cells, if any cell is occupied
    pub fn dominant(&self) -> Option<Phenotype> {
        self.phenotypes
            .iter()
            .filter(|(_, &n)| n > 0)
            .max_by_key(|(_, &n)| n)
            .map(|(p, _)| *p)
    }

    /// Occupied cells carrying at least one trait
    pub fn tumor_cells(&self) -> usize {
        self.occupied - self.count(Phenotype::NORMAL)
    }

    /// One-line summary for logs
    pub fn line(&self) -> String {
        let parts: Vec<String> = self
            .phenotypes
            .iter()
            .filter(|(_, &n)| n > 0)
            .map(|(p, n)| format!("{}={}", p, n))
            .collect();
        format!(
            "tick {}: {} occupied [{}] glucose={:.3} oxygen={:.3} acid={:.3}",
            self.tick,
            self.occupied,
            parts.join(" "),
            self.mean_environment.glucose,
            self.mean_environment.oxygen,
            self.mean_environment.acid,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Phenotype {
        s.parse().unwrap()
    }

    fn sample() -> Grid<CellState> {
        let mut grid = Grid::filled(3, 3, CellState::empty(Environment::new(1.0, 1.0, 0.0)));
        grid.set(0, 0, CellState::occupied(p("G"), Environment::new(0.0, 0.1, 0.9)));
        grid.set(1, 0, CellState::occupied(p("G"), Environment::new(0.0, 0.1, 0.9)));
        grid.set(2, 0, CellState::occupied(Phenotype::NORMAL, Environment::new(1.0, 1.0, 0.0)));
        grid
    }

    #[test]
    fn test_counts() {
        let census = Census::take(&sample(), 4);
        assert_eq!(census.tick, 4);
        assert_eq!(census.empty, 6);
        assert_eq!(census.occupied, 3);
        assert_eq!(census.count(p("G")), 2);
        assert_eq!(census.count(p("AGH")), 0);
        assert_eq!(census.phenotypes.len(), 8);
        assert_eq!(census.tumor_cells(), 2);
        assert_eq!(census.dominant(), Some(p("G")));
    }

    #[test]
    fn test_mean_environment() {
        let census = Census::take(&sample(), 0);
        assert!((census.mean_environment.glucose - 7.0 / 9.0).abs() < 1e-12);
        assert!((census.mean_environment.acid - 1.8 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_grid_has_no_dominant() {
        let grid = Grid::filled(3, 3, CellState::default());
        assert_eq!(Census::take(&grid, 0).dominant(), None);
    }

    #[test]
    fn test_json_keys_are_phenotype_names() {
        let json = serde_json::to_string(&Census::take(&sample(), 0)).unwrap();
        assert!(json.contains("\"normal\":1"));
        assert!(json.contains("\"G\":2"));
        let back: Census = serde_json::from_str(&json).unwrap();
        assert_eq!(back.count(p("G")), 2);
    }
}
