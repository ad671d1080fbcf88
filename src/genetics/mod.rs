//! Heritable traits and their mutation

pub mod mutation;
pub mod phenotype;

pub use mutation::{mutate, MutationEvent};
pub use phenotype::{Phenotype, Trait};
