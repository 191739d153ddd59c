//! # Breeding
//!
//! The variation operators applied to the selected population each generation:
//! single-point crossover followed by uniform mutation.
pub mod crossover;
pub mod mutation;

pub use crossover::SinglePointCrossover;
pub use mutation::UniformMutation;
