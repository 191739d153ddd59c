//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration of one run: the number
//! of generations, logging level, population size, number of genes, and the
//! crossover and mutation probabilities.
//!
//! ## Example
//!
//! ```rust
//! use simplega::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(200, LogLevel::Minimal, 30, 2, 0.7, 0.05);
//! assert!(custom_options.validate().is_ok());
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 50);
//! ```
//!
//! ### `LogLevel`
//!
//! - `Verbose`: a summary event per generation plus one event per member.
//! - `Minimal`: a summary event per generation.
//! - `None`: no per-generation events.

use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    log_level: LogLevel,
    population_size: usize,
    num_genes: usize,
    crossover_probability: f64,
    mutation_probability: f64,
}

impl EvolutionOptions {
    pub fn new(
        num_generations: usize,
        log_level: LogLevel,
        population_size: usize,
        num_genes: usize,
        crossover_probability: f64,
        mutation_probability: f64,
    ) -> Self {
        Self {
            num_generations,
            log_level,
            population_size,
            num_genes,
            crossover_probability,
            mutation_probability,
        }
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_num_genes(&self) -> usize {
        self.num_genes
    }

    pub fn get_crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the number of genes.
    pub fn set_num_genes(&mut self, num_genes: usize) {
        self.num_genes = num_genes;
    }

    pub fn set_crossover_probability(&mut self, probability: f64) {
        self.crossover_probability = probability;
    }

    pub fn set_mutation_probability(&mut self, probability: f64) {
        self.mutation_probability = probability;
    }

    /// Checks that the options describe a runnable evolution.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the population size, number of genes or
    /// number of generations is zero, or if a probability lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        if self.num_genes == 0 {
            return Err(GeneticError::Configuration(
                "Number of genes cannot be zero".to_string(),
            ));
        }
        if self.num_generations == 0 {
            return Err(GeneticError::Configuration(
                "Number of generations cannot be zero".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err(GeneticError::Configuration(format!(
                "Crossover probability must lie in [0, 1], got {}",
                self.crossover_probability
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(GeneticError::Configuration(format!(
                "Mutation probability must lie in [0, 1], got {}",
                self.mutation_probability
            )));
        }
        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simplega::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .num_generations(200)
    ///     .log_level(LogLevel::Minimal)
    ///     .population_size(20)
    ///     .num_genes(4)
    ///     .crossover_probability(0.9)
    ///     .mutation_probability(0.01)
    ///     .build();
    ///
    /// assert_eq!(options.get_num_genes(), 4);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: 1000,
            log_level: LogLevel::None,
            population_size: 50,
            num_genes: 3,
            crossover_probability: 0.8,
            mutation_probability: 0.15,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to the values of `EvolutionOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    log_level: Option<LogLevel>,
    population_size: Option<usize>,
    num_genes: Option<usize>,
    crossover_probability: Option<f64>,
    mutation_probability: Option<f64>,
}

impl EvolutionOptionsBuilder {
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn num_genes(mut self, value: usize) -> Self {
        self.num_genes = Some(value);
        self
    }

    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.crossover_probability = Some(value);
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            num_genes: self.num_genes.unwrap_or(defaults.num_genes),
            crossover_probability: self
                .crossover_probability
                .unwrap_or(defaults.crossover_probability),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(defaults.mutation_probability),
        }
    }
}
