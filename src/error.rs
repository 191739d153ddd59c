//! # Error Types
//!
//! This module defines the error type shared by every stage of a run. Configuration
//! problems are reported before the first generation starts; arithmetic problems
//! (a population without positive fitness mass, or an objective that broke its
//! positivity contract) abort the run at the stage where they are detected.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use simplega::error::{GeneticError, Result};
//!
//! fn checked_probability(p: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&p) {
//!         return Err(GeneticError::Configuration(format!("{} is not a probability", p)));
//!     }
//!     Ok(p)
//! }
//!
//! assert!(checked_probability(0.5).is_ok());
//! assert!(checked_probability(1.5).is_err());
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use simplega::error::{Result, ResultExt};
//!
//! fn parse_bound(token: &str) -> Result<f64> {
//!     token.parse::<f64>().context("Failed to parse bound")
//! }
//!
//! assert!(parse_bound("1.5").is_ok());
//! assert!(parse_bound("abc").is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use simplega::error::{GeneticError, OptionExt};
//!
//! fn first_fitness(fitness: &[f64]) -> simplega::error::Result<f64> {
//!     fitness.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(first_fitness(&[]).is_err());
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while configuring or running an evolution.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Malformed or mismatched bounds, zero sizes or probabilities outside `[0, 1]`.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The working population has no positive fitness mass to select from.
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    /// The objective returned a value that cannot be used as a selection weight.
    #[error("Objective contract violation: genotype {index} scored {value}, expected a finite value > 0")]
    ObjectiveContractViolation { index: usize, value: f64 },

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// The run was driven out of order, or continued after a failed generation.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

impl GeneticError {
    /// Returns `true` for errors caused by unusable fitness values.
    ///
    /// An objective contract violation poisons the following selection, so it is
    /// treated as the same class of failure as a selection arithmetic error.
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            GeneticError::Arithmetic(_) | GeneticError::ObjectiveContractViolation { .. }
        )
    }
}

/// A specialized Result type for genetic algorithm operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// This trait provides a convenient way to add context to errors when
/// converting from one error type to `GeneticError`.
pub trait ResultExt<T, E> {
    /// Adds context to an error.
    ///
    /// This method converts the error to a `GeneticError` with the provided context.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
