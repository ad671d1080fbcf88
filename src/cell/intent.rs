//! Settlement of division intents at an empty cell
//!
//! Parents pick their target independently, so several may claim the same
//! empty cell in one tick. The empty cell resolves the race on its own: it
//! collects every neighbor whose intent points back at it and admits one of
//! them uniformly at random. Losing daughters are dropped and parents are
//! never told the outcome.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cell::state::{Intent, NeighborSlot, NeighborView};
use crate::genetics::Phenotype;

/// True when the neighbor in `slot` has published an intent aimed at the
/// centre cell
///
/// The neighbor sits at `slot.offset` from the centre; its intent leads
/// `intent.target` further. The pair cancels exactly when the arrow lands on
/// the centre.
pub fn targets_centre(slot: &NeighborSlot) -> bool {
    match slot.state.intent() {
        Some(intent) => slot.state.is_occupied() && slot.offset.cancels(&intent.target),
        None => false,
    }
}

/// All intents aimed at the centre cell, in neighbor order
pub fn suitors(published: &NeighborView) -> Vec<Intent> {
    published
        .iter()
        .filter(|slot| targets_centre(slot))
        .filter_map(|slot| slot.state.intent())
        .collect()
}

/// Pick the daughter that settles the centre cell, if any
///
/// `published` must hold the neighbors' outputs from the current tick's
/// first phase.
pub fn settle<R: Rng + ?Sized>(published: &NeighborView, rng: &mut R) -> Option<Phenotype> {
    suitors(published).choose(rng).map(|intent| intent.daughter)
}
