//! Simulation configuration with documented constants
//!
//! Per-run constants of the transition rule live in [`SimulationParameters`];
//! the grid, seed and run length live in [`RunConfig`]. Both load from TOML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cell::Environment;
use crate::core::error::{OncoError, Result};

/// Constants of the per-cell transition rule
///
/// Immutable for the duration of a run. Defaults reproduce the reference run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Glucose diffusion/consumption ratio
    ///
    /// A normal cell consumes `1/dg²` of local glucose supply per tick,
    /// a glycolytic one `k/dg²`.
    pub dg: f64,

    /// Oxygen diffusion/consumption ratio
    ///
    /// Every occupied cell consumes `1/dc²`. The default (5) makes oxygen
    /// far scarcer than glucose inside a dense tumor.
    pub dc: f64,

    /// Glycolytic boost
    ///
    /// Multiplies glucose uptake, ATP yield from glucose, and acid output
    /// of glycolytic cells.
    pub k: f64,

    /// ATP threshold (alpha0)
    ///
    /// Cells producing less ATP than this starve. Division probability
    /// ramps linearly from 0 at `a0` to 1 at an ATP proxy of 1.
    pub a0: f64,

    /// Acid death threshold for normal cells (hN)
    #[serde(alias = "hN")]
    pub h_normal: f64,

    /// Acid death threshold for acid-resistant cells (hT)
    #[serde(alias = "hT")]
    pub h_resistant: f64,

    /// Probability that one mutation event happens per inheritance
    pub pa: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            dg: 1.3e2,
            dc: 5.0,
            k: 10.0,
            a0: 0.1,
            h_normal: 9.3e2,
            h_resistant: 8.6e3,
            pa: 1e-3,
        }
    }
}

impl SimulationParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate ranges the transition rule depends on
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("dg", self.dg),
            ("dc", self.dc),
            ("k", self.k),
            ("h_normal", self.h_normal),
            ("h_resistant", self.h_resistant),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(OncoError::InvalidParameter(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        // a0 == 1 would make the division ramp divide by zero
        if !(0.0..1.0).contains(&self.a0) {
            return Err(OncoError::InvalidParameter(format!(
                "a0 must be in [0, 1), got {}",
                self.a0
            )));
        }

        if !(0.0..=1.0).contains(&self.pa) {
            return Err(OncoError::InvalidParameter(format!(
                "pa must be in [0, 1], got {}",
                self.pa
            )));
        }

        Ok(())
    }

    /// Glucose consumed by an occupied cell per tick
    #[inline]
    pub fn glucose_uptake(&self, glycolytic: bool) -> f64 {
        let base = 1.0 / (self.dg * self.dg);
        if glycolytic {
            self.k * base
        } else {
            base
        }
    }

    /// Oxygen consumed by an occupied cell per tick
    #[inline]
    pub fn oxygen_uptake(&self) -> f64 {
        1.0 / (self.dc * self.dc)
    }

    /// Acid level at which death becomes certain
    #[inline]
    pub fn acid_threshold(&self, acid_resistant: bool) -> f64 {
        if acid_resistant {
            self.h_resistant
        } else {
            self.h_normal
        }
    }
}

/// What an off-grid neighbor slot reads as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Edges wrap around
    Toroidal,
    /// Off-grid slots are empty cells held at the baseline environment,
    /// a constant nutrient supply along the border
    #[default]
    Reservoir,
}

/// Initial placement of normal cells
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layout {
    /// The first row is filled with normal cells
    FirstRow,
    /// A disc of normal cells at the grid centre
    CenterSeed { radius: f64 },
}

impl Default for Layout {
    fn default() -> Self {
        Layout::CenterSeed { radius: 3.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub boundary: Boundary,
    pub layout: Layout,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            boundary: Boundary::default(),
            layout: Layout::default(),
        }
    }
}

/// Everything needed to reproduce a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub grid: GridConfig,

    /// Number of ticks to simulate
    pub steps: u64,

    /// Seed for every random draw of the run
    pub seed: u64,

    /// Minimum cell count before ticks are mapped in parallel
    ///
    /// Below this, rayon's scheduling overhead exceeds the per-cell work.
    /// The trajectory does not depend on this value.
    pub parallel_threshold: usize,

    /// Environment every cell starts with; also the reservoir supply level
    pub baseline: Environment,

    pub params: SimulationParameters,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            steps: 800,
            seed: 10,
            parallel_threshold: 4096,
            baseline: Environment::BASELINE,
            params: SimulationParameters::default(),
        }
    }
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: RunConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        self.params.validate()?;

        validate_dimensions(self.grid.width, self.grid.height)?;

        if let Layout::CenterSeed { radius } = self.grid.layout {
            if !(radius.is_finite() && radius >= 0.0) {
                return Err(OncoError::InvalidGrid(format!(
                    "seed radius must be non-negative, got {}",
                    radius
                )));
            }
        }

        validate_environment(&self.baseline, "baseline")
    }
}

/// Check that a grid is large enough for distinct Moore neighbors
pub fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    // Toroidal wrap on a 2-wide axis would make a cell its own neighbor twice
    if width < 3 || height < 3 {
        return Err(OncoError::InvalidGrid(format!(
            "grid must be at least 3x3, got {}x{}",
            width, height
        )));
    }
    Ok(())
}

/// Check that every metabolite level is finite and non-negative
pub fn validate_environment(env: &Environment, what: &str) -> Result<()> {
    if [env.glucose, env.oxygen, env.acid]
        .iter()
        .any(|v| !(v.is_finite() && *v >= 0.0))
    {
        return Err(OncoError::InvalidParameter(format!(
            "{} environment must be finite and non-negative, got {:?}",
            what, env
        )));
    }
    Ok(())
}
