//! # Genotype
//!
//! A [`Genotype`] is one candidate solution: a fixed-length vector of real genes,
//! the inclusive bounds of each gene, its fitness and the selection statistics
//! derived from that fitness.

use crate::error::{GeneticError, Result};

/// An inclusive `(lower, upper)` bound pair for one gene.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneBounds {
    lower: f64,
    upper: f64,
}

impl GeneBounds {
    /// Creates a validated bound pair.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if either bound is not finite or if
    /// `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplega::genotype::GeneBounds;
    ///
    /// assert!(GeneBounds::new(0.0, 10.0).is_ok());
    /// assert!(GeneBounds::new(10.0, 0.0).is_err());
    /// ```
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        let bounds = Self { lower, upper };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns `true` if `value` lies within the bounds, endpoints included.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(GeneticError::Configuration(format!(
                "Gene bounds must be finite, got [{}, {}]",
                self.lower, self.upper
            )));
        }
        if self.lower > self.upper {
            return Err(GeneticError::Configuration(format!(
                "Lower bound {} exceeds upper bound {}",
                self.lower, self.upper
            )));
        }
        Ok(())
    }
}

/// One candidate solution.
///
/// `relative_fitness` and `cumulative_fitness` are only meaningful during the
/// selection pass that computed them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Genotype {
    pub gene: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    pub fitness: f64,
    pub relative_fitness: f64,
    pub cumulative_fitness: f64,
}

impl Genotype {
    /// Creates a genotype with the given genes and bounds and all fitness fields at zero.
    pub fn new(gene: Vec<f64>, bounds: &[GeneBounds]) -> Self {
        Self {
            gene,
            lower: bounds.iter().map(GeneBounds::lower).collect(),
            upper: bounds.iter().map(GeneBounds::upper).collect(),
            fitness: 0.0,
            relative_fitness: 0.0,
            cumulative_fitness: 0.0,
        }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.gene.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gene.is_empty()
    }

    /// Returns `true` if every gene lies within its own bounds.
    pub fn within_bounds(&self) -> bool {
        self.gene
            .iter()
            .zip(self.lower.iter().zip(&self.upper))
            .all(|(&g, (&lo, &hi))| lo <= g && g <= hi)
    }

    /// Copies genes and fitness from `other`, leaving bounds and selection statistics alone.
    pub(crate) fn copy_solution_from(&mut self, other: &Genotype) {
        self.gene.clone_from(&other.gene);
        self.fitness = other.fitness;
    }
}
