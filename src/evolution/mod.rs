pub mod builder;
pub mod evaluator;
pub mod launcher;
pub mod objective;
pub mod options;

pub use builder::EvolutionLauncherBuilder;
pub use evaluator::evaluate;
pub use launcher::{Evolution, EvolutionLauncher, EvolutionResult, RunState};
pub use objective::Objective;
pub use options::{EvolutionOptions, LogLevel};
