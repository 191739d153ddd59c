//! # Population
//!
//! The working population of a run plus the separately held archive genotype that
//! remembers the best solution seen so far. The archive never takes part in
//! selection, crossover or mutation.

use tracing::debug;

use crate::{
    error::{GeneticError, Result},
    genotype::{GeneBounds, Genotype},
    rng::RandomDraw,
};

/// Mean and sample standard deviation of the working population's fitness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessStats {
    pub mean: f64,
    pub std_dev: f64,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    members: Vec<Genotype>,
    archive: Genotype,
}

impl Population {
    /// Builds a population from existing genotypes.
    ///
    /// The archive starts as an unscored copy of the first member's bounds, with
    /// each gene at its lower bound.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if `members` is empty, or a `Configuration` error
    /// if the members do not all carry the same number of genes.
    pub fn from_members(members: Vec<Genotype>) -> Result<Self> {
        let first = members.first().ok_or(GeneticError::EmptyPopulation)?;
        let num_genes = first.len();
        if let Some(bad) = members.iter().position(|m| {
            m.len() != num_genes || m.lower.len() != num_genes || m.upper.len() != num_genes
        }) {
            return Err(GeneticError::Configuration(format!(
                "Genotype {} does not carry {} genes and bound pairs",
                bad, num_genes
            )));
        }

        let archive = Genotype {
            gene: first.lower.clone(),
            lower: first.lower.clone(),
            upper: first.upper.clone(),
            fitness: 0.0,
            relative_fitness: 0.0,
            cumulative_fitness: 0.0,
        };

        Ok(Self { members, archive })
    }

    pub fn members(&self) -> &[Genotype] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [Genotype] {
        &mut self.members
    }

    /// The best genotype seen so far.
    pub fn archive(&self) -> &Genotype {
        &self.archive
    }

    pub(crate) fn archive_mut(&mut self) -> &mut Genotype {
        &mut self.archive
    }

    /// Replaces the working genotypes wholesale. The size must not change.
    pub(crate) fn replace_members(&mut self, members: Vec<Genotype>) {
        debug_assert_eq!(members.len(), self.members.len());
        self.members = members;
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn fitness(&self) -> Vec<f64> {
        self.members.iter().map(|m| m.fitness).collect()
    }

    /// Mean and sample standard deviation (divisor `P - 1`) of the working fitness.
    ///
    /// The deviation of a single-member population is reported as `0`.
    pub fn fitness_stats(&self) -> FitnessStats {
        let n = self.members.len();
        if n == 0 {
            return FitnessStats {
                mean: 0.0,
                std_dev: 0.0,
            };
        }

        let mean = self.members.iter().map(|m| m.fitness / n as f64).sum::<f64>();
        let std_dev = if n > 1 {
            let sum_sq: f64 = self
                .members
                .iter()
                .map(|m| (m.fitness - mean).powi(2))
                .sum();
            (sum_sq / (n - 1) as f64).sqrt()
        } else {
            0.0
        };

        FitnessStats { mean, std_dev }
    }
}

/// Seeds a working population of `population_size` genotypes with genes drawn
/// uniformly within `bounds`.
///
/// Draws are consumed genotype by genotype, gene by gene.
///
/// # Errors
///
/// Returns a `Configuration` error if `bounds.len() != num_genes`, if either size is
/// zero, or if any bound pair is invalid.
pub fn initialize<R>(
    bounds: &[GeneBounds],
    num_genes: usize,
    population_size: usize,
    rng: &mut R,
) -> Result<Population>
where
    R: RandomDraw + ?Sized,
{
    if num_genes == 0 {
        return Err(GeneticError::Configuration(
            "Number of genes cannot be zero".to_string(),
        ));
    }
    if population_size == 0 {
        return Err(GeneticError::Configuration(
            "Population size cannot be zero".to_string(),
        ));
    }
    if bounds.len() != num_genes {
        return Err(GeneticError::Configuration(format!(
            "Expected {} bound pairs, got {}",
            num_genes,
            bounds.len()
        )));
    }
    for b in bounds {
        b.validate()?;
    }

    let members = (0..population_size)
        .map(|_| {
            let gene = bounds
                .iter()
                .map(|b| rng.uniform_between(b.lower(), b.upper()))
                .collect();
            Genotype::new(gene, bounds)
        })
        .collect();

    debug!(population_size, num_genes, "Initialized population");
    Population::from_members(members)
}
