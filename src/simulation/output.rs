//! Run output and serialization

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::config::RunConfig;
use crate::simulation::census::Census;
use crate::simulation::tick::TickReport;

/// Complete output of a run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunOutput {
    pub config: RunConfig,
    /// Census every `report_every` ticks, starting with the initial grid
    pub history: Vec<Census>,
    pub final_census: Census,
    pub statistics: RunStats,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub ticks_simulated: u64,
    pub simulation_time_ms: u64,
    pub total_deaths: u64,
    pub total_births: u64,
    pub total_intents: u64,
    pub contested_intents: u64,
    pub peak_occupied: usize,
    pub initial_occupied: usize,
    pub final_occupied: usize,
    /// First tick after which no cell was left, if the population died out
    pub extinct_at: Option<u64>,
}

impl RunStats {
    pub fn record(&mut self, report: &TickReport) {
        self.ticks_simulated += 1;
        self.total_deaths += report.deaths as u64;
        self.total_births += report.births as u64;
        self.total_intents += report.intents as u64;
        self.contested_intents += report.contested as u64;
        self.peak_occupied = self.peak_occupied.max(report.occupied);
        self.final_occupied = report.occupied;
        if report.occupied == 0 && self.extinct_at.is_none() {
            self.extinct_at = Some(report.tick);
        }
    }
}

impl RunOutput {
    pub fn new(
        config: RunConfig,
        history: Vec<Census>,
        final_census: Census,
        mut statistics: RunStats,
        elapsed: Duration,
    ) -> Self {
        statistics.simulation_time_ms = elapsed.as_millis() as u64;
        Self {
            config,
            history,
            final_census,
            statistics,
        }
    }

    pub fn to_json(&self) -> crate::core::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        let dominant = self
            .final_census
            .dominant()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "none".to_string());
        format!(
            "Simulated {} ticks in {}ms\n\
             {} -> {} cells (peak {}), {} births, {} deaths, {} contested intents\n\
             Dominant phenotype: {}",
            self.statistics.ticks_simulated,
            self.statistics.simulation_time_ms,
            self.statistics.initial_occupied,
            self.statistics.final_occupied,
            self.statistics.peak_occupied,
            self.statistics.total_births,
            self.statistics.total_deaths,
            self.statistics.contested_intents,
            dominant,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_record_extinction_once() {
        let mut stats = RunStats::default();
        stats.record(&TickReport {
            tick: 0,
            deaths: 2,
            occupied: 0,
            ..Default::default()
        });
        stats.record(&TickReport {
            tick: 1,
            occupied: 0,
            ..Default::default()
        });
        assert_eq!(stats.extinct_at, Some(0));
        assert_eq!(stats.total_deaths, 2);
        assert_eq!(stats.ticks_simulated, 2);
    }

    #[test]
    fn test_stats_track_peak() {
        let mut stats = RunStats::default();
        for (tick, occupied) in [(0, 5), (1, 9), (2, 4)] {
            stats.record(&TickReport {
                tick,
                occupied,
                ..Default::default()
            });
        }
        assert_eq!(stats.peak_occupied, 9);
        assert_eq!(stats.final_occupied, 4);
        assert_eq!(stats.extinct_at, None);
    }
}
