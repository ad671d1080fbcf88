//! Trait mutation on inheritance
//!
//! With probability `pa` one mutation event fires, chosen uniformly among
//! gaining a trait, losing a trait, or switching one trait for another.
//! An event that cannot apply to the current phenotype leaves it unchanged.

use rand::seq::SliceRandom;
use rand::Rng;

use super::phenotype::{Phenotype, Trait};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationEvent {
    Gain,
    Lose,
    Switch,
}

impl MutationEvent {
    pub const ALL: [MutationEvent; 3] = [
        MutationEvent::Gain,
        MutationEvent::Lose,
        MutationEvent::Switch,
    ];

    /// Whether the event changes `phenotype` at all
    pub fn is_feasible(self, phenotype: Phenotype) -> bool {
        let n = phenotype.trait_count();
        match self {
            MutationEvent::Gain => n < 3,
            MutationEvent::Lose => n > 0,
            MutationEvent::Switch => n > 0 && n < 3,
        }
    }
}

/// Inherit `parent` with at most one mutation event
pub fn mutate<R: Rng + ?Sized>(parent: Phenotype, pa: f64, rng: &mut R) -> Phenotype {
    if !rng.gen_bool(pa.clamp(0.0, 1.0)) {
        return parent;
    }

    let event = MutationEvent::ALL[rng.gen_range(0..MutationEvent::ALL.len())];
    apply_event(parent, event, rng)
}

/// Apply one mutation event, drawing the affected traits from `rng`
pub fn apply_event<R: Rng + ?Sized>(
    phenotype: Phenotype,
    event: MutationEvent,
    rng: &mut R,
) -> Phenotype {
    if !event.is_feasible(phenotype) {
        return phenotype;
    }

    let present: Vec<Trait> = phenotype.present().collect();
    // Absent traits never include a trait removed in the same event,
    // since that trait was present
    let absent: Vec<Trait> = phenotype.absent().collect();

    match event {
        MutationEvent::Gain => match absent.choose(rng) {
            Some(&t) => phenotype.with(t),
            None => phenotype,
        },
        MutationEvent::Lose => match present.choose(rng) {
            Some(&t) => phenotype.without(t),
            None => phenotype,
        },
        MutationEvent::Switch => match (present.choose(rng), absent.choose(rng)) {
            (Some(&removed), Some(&added)) => phenotype.without(removed).with(added),
            _ => phenotype,
        },
    }
}
