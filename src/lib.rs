pub mod breeding;
pub mod config;
pub mod error;
pub mod evolution;
pub mod genotype;
pub mod population;
pub mod report;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{Evolution, EvolutionLauncher, EvolutionOptions, EvolutionResult, Objective};
pub use genotype::{GeneBounds, Genotype};
pub use population::Population;
pub use report::{GenerationReport, Reporter};
pub use rng::{RandomDraw, RandomNumberGenerator};
