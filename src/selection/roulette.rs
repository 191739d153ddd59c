use tracing::trace;

use crate::error::{GeneticError, Result};
use crate::genotype::Genotype;
use crate::population::Population;
use crate::rng::RandomDraw;

/// A selection strategy that resamples the working population through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) draws
/// individuals with replacement, with probability proportional to their fitness.
/// Every draw produces one member of the next generation, so the population size
/// never changes.
///
/// This strategy requires a positive total fitness; fitness values are used
/// directly as selection weights.
///
/// # Examples
///
/// ```
/// use simplega::genotype::{GeneBounds, Genotype};
/// use simplega::population::Population;
/// use simplega::rng::RandomNumberGenerator;
/// use simplega::selection::RouletteWheelSelection;
/// use simplega::error::Result;
///
/// fn main() -> Result<()> {
///     let bounds = [GeneBounds::new(0.0, 10.0)?];
///     let members = [1.0, 2.0, 3.0]
///         .iter()
///         .map(|&x| {
///             let mut g = Genotype::new(vec![x], &bounds);
///             g.fitness = x;
///             g
///         })
///         .collect();
///     let mut population = Population::from_members(members)?;
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     RouletteWheelSelection::new().select(&mut population, &mut rng)?;
///
///     assert_eq!(population.len(), 3);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }

    /// Fills in `relative_fitness` and the running `cumulative_fitness` of every member.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` for an empty slice and an `Arithmetic` error if the
    /// total fitness is not positive or is NaN. Members are untouched on error.
    pub fn calculate_probabilities(&self, members: &mut [Genotype]) -> Result<()> {
        if members.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        // Weights are taken relative to the largest fitness so the sum cannot overflow
        let max = members
            .iter()
            .map(|m| m.fitness)
            .fold(f64::NEG_INFINITY, f64::max);
        let scale = if max > 0.0 { max } else { 1.0 };
        let total: f64 = members.iter().map(|m| m.fitness / scale).sum();
        if !(total > 0.0) {
            return Err(GeneticError::Arithmetic(format!(
                "Roulette wheel selection requires a positive total fitness, got {}",
                total * scale
            )));
        }

        let mut cumulative = 0.0;
        for member in members.iter_mut() {
            member.relative_fitness = (member.fitness / scale) / total;
            cumulative += member.relative_fitness;
            member.cumulative_fitness = cumulative;
        }

        Ok(())
    }

    /// Maps a draw `p` to the first member whose cumulative fitness exceeds it.
    ///
    /// Draws at or beyond the last cumulative value, which only rounding can
    /// produce, select the last member.
    pub fn select_index(members: &[Genotype], p: f64) -> usize {
        let idx = members.partition_point(|m| m.cumulative_fitness <= p);
        idx.min(members.len().saturating_sub(1))
    }

    /// Replaces the working population with `P` fitness-proportionate draws from it.
    ///
    /// Consumes exactly `P` draws from `rng`.
    ///
    /// # Errors
    ///
    /// See [`calculate_probabilities`](Self::calculate_probabilities). The population
    /// is left unchanged on error.
    pub fn select<R>(&self, population: &mut Population, rng: &mut R) -> Result<()>
    where
        R: RandomDraw + ?Sized,
    {
        self.calculate_probabilities(population.members_mut())?;

        let members = population.members();
        let selected: Vec<Genotype> = (0..members.len())
            .map(|_| {
                let p = rng.next_uniform();
                let idx = Self::select_index(members, p);
                trace!(p, idx, "Roulette draw");
                members[idx].clone()
            })
            .collect();

        population.replace_members(selected);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genotype::GeneBounds;
    use crate::rng::RandomNumberGenerator;

    fn scored(values: &[f64]) -> Vec<Genotype> {
        let bounds = [GeneBounds::new(0.0, 100.0).unwrap()];
        values
            .iter()
            .map(|&f| {
                let mut g = Genotype::new(vec![f], &bounds);
                g.fitness = f;
                g
            })
            .collect()
    }

    #[test]
    fn test_calculate_probabilities() {
        let mut members = scored(&[0.5, 0.8, 0.3, 0.9, 0.1]);
        let selection = RouletteWheelSelection::new();
        selection.calculate_probabilities(&mut members).unwrap();

        let relative_sum: f64 = members.iter().map(|m| m.relative_fitness).sum();
        assert!((relative_sum - 1.0).abs() < 1e-12);

        // Probabilities should be cumulative and the last one should be 1.0
        assert!((members[members.len() - 1].cumulative_fitness - 1.0).abs() < 1e-12);
        for i in 1..members.len() {
            assert!(members[i].cumulative_fitness >= members[i - 1].cumulative_fitness);
        }
        assert!((members[0].relative_fitness - 0.5 / 2.6).abs() < 1e-12);
    }

    #[test]
    fn test_select_index() {
        let mut members = scored(&[1.0, 1.0, 2.0]);
        RouletteWheelSelection::new()
            .calculate_probabilities(&mut members)
            .unwrap();
        // cumulative: 0.25, 0.5, 1.0
        assert_eq!(RouletteWheelSelection::select_index(&members, 0.0), 0);
        assert_eq!(RouletteWheelSelection::select_index(&members, 0.2499), 0);
        assert_eq!(RouletteWheelSelection::select_index(&members, 0.25), 1);
        assert_eq!(RouletteWheelSelection::select_index(&members, 0.5), 2);
        assert_eq!(RouletteWheelSelection::select_index(&members, 0.99), 2);
    }

    #[test]
    fn test_select_index_clamps_to_last() {
        let mut members = scored(&[1.0, 3.0]);
        RouletteWheelSelection::new()
            .calculate_probabilities(&mut members)
            .unwrap();
        members[1].cumulative_fitness = 0.999_999_9;
        assert_eq!(RouletteWheelSelection::select_index(&members, 0.999_999_95), 1);
        assert_eq!(RouletteWheelSelection::select_index(&members, 1.0), 1);
    }

    #[test]
    fn test_select_keeps_size() {
        let mut population = Population::from_members(scored(&[0.5, 0.8, 0.3, 0.9, 0.1])).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        RouletteWheelSelection::new()
            .select(&mut population, &mut rng)
            .unwrap();

        assert_eq!(population.len(), 5);
        // Every selected genotype is a copy of an original one
        for member in population.members() {
            assert_eq!(member.gene[0], member.fitness);
        }
    }

    #[test]
    fn test_select_zero_fitness() {
        let mut population = Population::from_members(scored(&[0.0, 0.0, 0.0])).unwrap();
        let before = population.clone();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let result = RouletteWheelSelection::new().select(&mut population, &mut rng);

        assert!(matches!(result, Err(GeneticError::Arithmetic(_))));
        assert_eq!(population, before);
    }

    #[test]
    fn test_select_nan_fitness() {
        let mut members = scored(&[1.0, 2.0]);
        members[0].fitness = f64::NAN;
        let result = RouletteWheelSelection::new().calculate_probabilities(&mut members);
        assert!(matches!(result, Err(GeneticError::Arithmetic(_))));
    }

    #[test]
    fn test_huge_fitness_does_not_overflow() {
        let mut members = scored(&[1.0, 1.0, 1.0, 1.0]);
        for m in members.iter_mut() {
            m.fitness = f64::MAX / 2.0;
        }
        RouletteWheelSelection::new()
            .calculate_probabilities(&mut members)
            .unwrap();

        for (i, m) in members.iter().enumerate() {
            assert!((m.relative_fitness - 0.25).abs() < 1e-12);
            assert!((m.cumulative_fitness - 0.25 * (i + 1) as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn test_negative_total_fitness() {
        let mut members = scored(&[1.0, 2.0]);
        members[0].fitness = -5.0;
        let result = RouletteWheelSelection::new().calculate_probabilities(&mut members);
        match result {
            Err(GeneticError::Arithmetic(msg)) => assert!(msg.ends_with("got -3")),
            _ => panic!("Expected Arithmetic error"),
        }
    }

    #[test]
    fn test_select_empty() {
        let mut members: Vec<Genotype> = Vec::new();
        let result = RouletteWheelSelection::new().calculate_probabilities(&mut members);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_selection_frequency_follows_fitness() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let mut hits = [0usize; 2];
        for _ in 0..2_000 {
            let mut population = Population::from_members(scored(&[1.0, 3.0])).unwrap();
            RouletteWheelSelection::new()
                .select(&mut population, &mut rng)
                .unwrap();
            for m in population.members() {
                hits[if m.fitness == 1.0 { 0 } else { 1 }] += 1;
            }
        }
        let share = hits[1] as f64 / (hits[0] + hits[1]) as f64;
        assert!((share - 0.75).abs() < 0.03, "share was {}", share);
    }
}
