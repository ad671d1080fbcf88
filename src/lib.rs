//! Oncogrid - stochastic cellular automaton of tumor growth
//!
//! Cells on a 2D grid consume glucose and oxygen, release acid, die, divide
//! and mutate between heritable traits. Division races for the same empty
//! cell are settled in a second phase of every tick.

pub mod cell;
pub mod core;
pub mod genetics;
pub mod render;
pub mod simulation;
pub mod spatial;
