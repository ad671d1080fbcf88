//! Per-cell state and the neighbor view handed to the transition rule

use serde::{Deserialize, Serialize};

use crate::core::error::{OncoError, Result};
use crate::core::types::{Offset, MOORE_OFFSETS};
use crate::genetics::Phenotype;

/// Local metabolite levels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub glucose: f64,
    pub oxygen: f64,
    pub acid: f64,
}

impl Environment {
    /// Fully supplied tissue: unit glucose and oxygen, no acid
    pub const BASELINE: Environment = Environment::new(1.0, 1.0, 0.0);

    pub const fn new(glucose: f64, oxygen: f64, acid: f64) -> Self {
        Self {
            glucose,
            oxygen,
            acid,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::BASELINE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupancy {
    Empty,
    Occupied,
}

/// A dividing cell's claim on one neighbor for its daughter
///
/// Valid for the tick it was published in only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Direction from the parent to the target cell
    pub target: Offset,
    /// Phenotype the daughter will have (already mutated)
    pub daughter: Phenotype,
}

/// State of one grid cell
///
/// Fields are private so an empty cell can never carry a phenotype or an
/// intent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellState {
    occupancy: Occupancy,
    phenotype: Phenotype,
    environment: Environment,
    intent: Option<Intent>,
}

impl CellState {
    pub fn empty(environment: Environment) -> Self {
        Self {
            occupancy: Occupancy::Empty,
            phenotype: Phenotype::NORMAL,
            environment,
            intent: None,
        }
    }

    pub fn occupied(phenotype: Phenotype, environment: Environment) -> Self {
        Self {
            occupancy: Occupancy::Occupied,
            phenotype,
            environment,
            intent: None,
        }
    }

    /// An occupied cell that has published a division intent
    pub fn dividing(phenotype: Phenotype, environment: Environment, intent: Intent) -> Self {
        Self {
            intent: Some(intent),
            ..Self::occupied(phenotype, environment)
        }
    }

    #[inline]
    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupancy == Occupancy::Empty
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupancy == Occupancy::Occupied
    }

    /// Phenotype of the occupant; `NORMAL` for empty cells
    #[inline]
    pub fn phenotype(&self) -> Phenotype {
        self.phenotype
    }

    #[inline]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    #[inline]
    pub fn intent(&self) -> Option<Intent> {
        self.intent
    }

    /// The same cell with its intent consumed
    #[must_use]
    pub fn settled(self) -> Self {
        Self {
            intent: None,
            ..self
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::empty(Environment::BASELINE)
    }
}

/// One neighbor as seen from the centre cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborSlot {
    /// Position of the neighbor relative to the centre cell
    pub offset: Offset,
    pub state: CellState,
    /// False for reservoir slots beyond the grid edge: they supply
    /// metabolites but no cell lives there to take a daughter
    pub on_grid: bool,
}

impl NeighborSlot {
    /// Whether a daughter could be placed here
    #[inline]
    pub fn accepts_daughter(&self) -> bool {
        self.on_grid && self.state.is_empty()
    }
}

/// The 8 Moore neighbors of a cell, in canonical order
///
/// Every slot carries its own relative offset, so intent validation never
/// depends on an external index table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborView {
    slots: [NeighborSlot; 8],
}

impl NeighborView {
    /// Build a view from on-grid states already in canonical Moore order
    pub fn from_states(states: [CellState; 8]) -> Self {
        Self::from_parts(states, [true; 8])
    }

    /// Build a view from states in canonical order, flagging which slots lie
    /// on the grid
    pub fn from_parts(states: [CellState; 8], on_grid: [bool; 8]) -> Self {
        let mut i = 0;
        let slots = states.map(|state| {
            let slot = NeighborSlot {
                offset: MOORE_OFFSETS[i],
                state,
                on_grid: on_grid[i],
            };
            i += 1;
            slot
        });
        Self { slots }
    }

    /// Build a view from slots in any order
    ///
    /// Fails unless there are exactly 8 slots covering all 8 Moore offsets.
    pub fn try_from_slots(slots: &[NeighborSlot]) -> Result<Self> {
        if slots.len() != 8 {
            return Err(OncoError::NeighborCount(slots.len()));
        }

        let mut states = [CellState::default(); 8];
        let mut on_grid = [true; 8];
        let mut seen = [false; 8];
        for slot in slots {
            let i = slot.offset.slot();
            if seen[i] {
                return Err(OncoError::InvalidOffset(slot.offset.dr(), slot.offset.dc()));
            }
            seen[i] = true;
            states[i] = slot.state;
            on_grid[i] = slot.on_grid;
        }
        // 8 distinct offsets out of 8 fill every position
        Ok(Self::from_parts(states, on_grid))
    }

    /// Build a view from a slice of states in canonical order
    pub fn try_from_states(states: &[CellState]) -> Result<Self> {
        let states: [CellState; 8] = states
            .try_into()
            .map_err(|_| OncoError::NeighborCount(states.len()))?;
        Ok(Self::from_states(states))
    }

    pub fn iter(&self) -> impl Iterator<Item = &NeighborSlot> {
        self.slots.iter()
    }

    /// The 4 orthogonal neighbors
    pub fn orthogonal(&self) -> impl Iterator<Item = &NeighborSlot> {
        self.slots.iter().filter(|s| s.offset.is_orthogonal())
    }

    pub fn get(&self, offset: Offset) -> &NeighborSlot {
        &self.slots[offset.slot()]
    }
}
