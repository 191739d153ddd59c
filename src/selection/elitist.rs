use tracing::debug;

use crate::error::{GeneticError, OptionExt, Result};
use crate::genotype::Genotype;
use crate::population::Population;

/// What the per-generation elitism check did to the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EliteOutcome {
    /// The working population matched or beat the archive; member `index` was archived.
    Archived { index: usize },
    /// The archive was better; it overwrote the worst member at `index`.
    Reinjected { index: usize },
}

/// Keeps the best genotype ever seen in the population's archive.
///
/// The archive's fitness never decreases: a new best replaces it, and if a
/// generation falls short of it the archive is copied over that generation's
/// worst member so it keeps competing in the next selection.
#[derive(Debug, Clone, Default)]
pub struct BestTracker;

impl BestTracker {
    pub fn new() -> Self {
        Self
    }

    /// Copies the best working genotype into the archive.
    ///
    /// Used once, right after the initial evaluation. Ties keep the first member.
    pub fn capture_best(&self, population: &mut Population) -> Result<usize> {
        let (best, _) = best_and_worst(population.members())
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        let member = population.members()[best].clone();
        population.archive_mut().copy_solution_from(&member);
        debug!(index = best, fitness = member.fitness, "Captured first best");
        Ok(best)
    }

    /// Runs the per-generation elitism check against freshly evaluated fitness.
    pub fn preserve(&self, population: &mut Population) -> Result<EliteOutcome> {
        let (best, worst) = best_and_worst(population.members())
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        let best_fitness = population.members()[best].fitness;
        if best_fitness >= population.archive().fitness {
            let member = population.members()[best].clone();
            population.archive_mut().copy_solution_from(&member);
            debug!(index = best, fitness = best_fitness, "Archived generation best");
            Ok(EliteOutcome::Archived { index: best })
        } else {
            let archive = population.archive().clone();
            population.members_mut()[worst].copy_solution_from(&archive);
            debug!(
                index = worst,
                fitness = archive.fitness,
                "Reinjected archive over worst member"
            );
            Ok(EliteOutcome::Reinjected { index: worst })
        }
    }
}

/// Indices of the maximum and minimum fitness in one pass; ties keep the earliest index.
pub fn best_and_worst(members: &[Genotype]) -> Option<(usize, usize)> {
    let first = members.first()?;
    let (mut best, mut worst) = (0, 0);
    let (mut best_fitness, mut worst_fitness) = (first.fitness, first.fitness);

    for (i, member) in members.iter().enumerate().skip(1) {
        if member.fitness > best_fitness {
            best = i;
            best_fitness = member.fitness;
        }
        if member.fitness < worst_fitness {
            worst = i;
            worst_fitness = member.fitness;
        }
    }

    Some((best, worst))
}
