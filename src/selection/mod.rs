//! # Selection
//!
//! Fitness-proportionate resampling of the working population and the elitism
//! guard that keeps the best genotype ever seen.
pub mod elitist;
pub mod roulette;

pub use elitist::{BestTracker, EliteOutcome};
pub use roulette::RouletteWheelSelection;
