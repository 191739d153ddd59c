//! # Reporting
//!
//! After each generation's elitism check the run hands a [`GenerationReport`] to a
//! [`Reporter`]. The crate ships a tracing-backed reporter, a text reporter that
//! writes comma separated progress records to any `Write` sink, and the no-op `()`.
//!
//! ## Example
//!
//! ```rust
//! use simplega::report::{CsvReporter, GenerationReport, Reporter};
//!
//! let mut reporter = CsvReporter::new(Vec::new());
//! reporter
//!     .report(&GenerationReport {
//!         generation: 1,
//!         best_fitness: 12.5,
//!         mean_fitness: 8.0,
//!         std_dev: 1.25,
//!     })
//!     .unwrap();
//!
//! let text = String::from_utf8(reporter.into_inner()).unwrap();
//! assert!(text.contains("    1, 12.500, 8.000, 1.250"));
//! ```

use std::io::Write;

use tracing::info;

use crate::{
    error::Result,
    evolution::EvolutionResult,
    population::Population,
};

/// Progress statistics of one generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationReport {
    pub generation: usize,
    /// Fitness of the archive, the best genotype seen so far.
    pub best_fitness: f64,
    pub mean_fitness: f64,
    /// Sample standard deviation of the working population's fitness.
    pub std_dev: f64,
}

impl GenerationReport {
    pub fn from_population(generation: usize, population: &Population) -> Self {
        let stats = population.fitness_stats();
        Self {
            generation,
            best_fitness: population.archive().fitness,
            mean_fitness: stats.mean,
            std_dev: stats.std_dev,
        }
    }
}

/// Receives progress records during a run and the result at its end.
pub trait Reporter {
    fn report(&mut self, report: &GenerationReport) -> Result<()>;

    fn finish(&mut self, _result: &EvolutionResult) -> Result<()> {
        Ok(())
    }
}

impl Reporter for () {
    fn report(&mut self, _report: &GenerationReport) -> Result<()> {
        Ok(())
    }
}

/// Collects every report in memory.
impl Reporter for Vec<GenerationReport> {
    fn report(&mut self, report: &GenerationReport) -> Result<()> {
        self.push(*report);
        Ok(())
    }
}

/// Emits one `info` event per generation and one for the final result.
#[derive(Debug, Clone, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, report: &GenerationReport) -> Result<()> {
        info!(
            generation = report.generation,
            best = report.best_fitness,
            average = report.mean_fitness,
            std_dev = report.std_dev,
            "Generation finished"
        );
        Ok(())
    }

    fn finish(&mut self, result: &EvolutionResult) -> Result<()> {
        info!(
            generations = result.generations,
            fitness = result.fitness,
            genes = ?result.genes,
            "Simulation completed"
        );
        Ok(())
    }
}

/// Writes a header, one `generation, best, average, stddev` line per generation
/// and the best member at the end.
///
/// Failures of the underlying writer surface as `GeneticError::Io`.
#[derive(Debug)]
pub struct CsvReporter<W: Write> {
    writer: W,
    header_written: bool,
}

impl<W: Write> CsvReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header_written: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_header(&mut self) -> Result<()> {
        if !self.header_written {
            writeln!(self.writer, "generation, best value, average fitness, standard deviation")?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl<W: Write> Reporter for CsvReporter<W> {
    fn report(&mut self, report: &GenerationReport) -> Result<()> {
        self.write_header()?;
        writeln!(
            self.writer,
            "{:>5}, {:.3}, {:.3}, {:.3}",
            report.generation, report.best_fitness, report.mean_fitness, report.std_dev
        )?;
        Ok(())
    }

    fn finish(&mut self, result: &EvolutionResult) -> Result<()> {
        self.write_header()?;
        writeln!(self.writer, "\nSimulation completed\nBest member:")?;
        for (i, gene) in result.genes.iter().enumerate() {
            writeln!(self.writer, "var({}) = {:.3}", i, gene)?;
        }
        writeln!(self.writer, "Best fitness = {:.3}", result.fitness)?;
        self.writer.flush()?;
        Ok(())
    }
}
