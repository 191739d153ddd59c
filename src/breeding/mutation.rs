//! # UniformMutation
//!
//! Resets individual genes to a fresh uniform value inside their own bounds.
use tracing::trace;

use crate::{
    error::{GeneticError, Result},
    genotype::Genotype,
    rng::RandomDraw,
};

#[derive(Debug, Clone)]
pub struct UniformMutation {
    probability: f64,
}

impl UniformMutation {
    /// Creates a mutation operator resetting each gene with the given probability.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `probability` is outside `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GeneticError::Configuration(format!(
                "Mutation probability must lie in [0, 1], got {}",
                probability
            )));
        }
        Ok(Self { probability })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Visits every gene of every member and resamples it with the mutation probability.
    ///
    /// One decision draw is consumed per gene, followed immediately by one resample
    /// draw when the gene mutates. Genes without a matching bound pair are left
    /// alone and consume no draws. Fitness values are stale afterwards.
    ///
    /// Returns the number of genes that were resampled.
    pub fn apply<R>(&self, members: &mut [Genotype], rng: &mut R) -> usize
    where
        R: RandomDraw + ?Sized,
    {
        let mut mutated = 0;
        for (idx, member) in members.iter_mut().enumerate() {
            let bounds = member.lower.iter().zip(&member.upper);
            for (gene, (&lower, &upper)) in member.gene.iter_mut().zip(bounds) {
                if rng.next_uniform() < self.probability {
                    *gene = rng.uniform_between(lower, upper);
                    mutated += 1;
                }
            }
            trace!(idx, gene = ?member.gene, "Mutation pass");
        }
        mutated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genotype::GeneBounds;
    use crate::rng::RandomNumberGenerator;
    use std::collections::VecDeque;

    struct Scripted(VecDeque<f64>);

    impl RandomDraw for Scripted {
        fn next_uniform(&mut self) -> f64 {
            self.0.pop_front().expect("script exhausted")
        }
    }

    fn members(count: usize) -> Vec<Genotype> {
        let bounds = [
            GeneBounds::new(-1.0, 1.0).unwrap(),
            GeneBounds::new(10.0, 20.0).unwrap(),
        ];
        (0..count)
            .map(|_| Genotype::new(vec![0.0, 15.0], &bounds))
            .collect()
    }

    #[test]
    fn test_invalid_probability() {
        assert!(UniformMutation::new(2.0).is_err());
        assert!(UniformMutation::new(f64::NAN).is_err());
    }

    #[test]
    fn test_zero_probability_is_noop() {
        let mut pop = members(10);
        let before = pop.clone();
        let mut rng = RandomNumberGenerator::from_seed(5);

        let mutated = UniformMutation::new(0.0).unwrap().apply(&mut pop, &mut rng);

        assert_eq!(mutated, 0);
        assert_eq!(pop, before);
    }

    #[test]
    fn test_full_probability_resamples_every_gene() {
        let mut pop = members(10);
        let mut rng = RandomNumberGenerator::from_seed(5);

        let mutated = UniformMutation::new(1.0).unwrap().apply(&mut pop, &mut rng);

        assert_eq!(mutated, 20);
        for member in &pop {
            assert!(member.within_bounds());
        }
    }

    #[test]
    fn test_mutation_respects_bounds() {
        let mut pop = members(50);
        let mut rng = RandomNumberGenerator::from_seed(11);
        let mutation = UniformMutation::new(0.3).unwrap();
        for _ in 0..20 {
            mutation.apply(&mut pop, &mut rng);
        }
        assert!(pop.iter().all(Genotype::within_bounds));
    }

    #[test]
    fn test_resample_follows_its_decision_draw() {
        let mut pop = members(2);
        // Decision, resample, decision | decision, decision, resample
        let mut rng = Scripted(VecDeque::from(vec![0.1, 0.25, 0.9, 0.6, 0.4, 0.2]));

        let mutated = UniformMutation::new(0.5).unwrap().apply(&mut pop, &mut rng);

        assert_eq!(mutated, 2);
        // -1 + 0.25 * (1 - -1)
        assert_eq!(pop[0].gene, vec![-0.5, 15.0]);
        // 10 + 0.2 * (20 - 10)
        assert_eq!(pop[1].gene, vec![0.0, 12.0]);
        assert!(rng.0.is_empty());
    }

    #[test]
    fn test_genes_without_bounds_are_skipped() {
        let bounds = [GeneBounds::new(-1.0, 1.0).unwrap()];
        let mut pop = vec![Genotype::new(vec![0.0], &bounds)];
        pop[0].gene.push(7.0);
        let mut rng = Scripted(VecDeque::from(vec![0.0, 0.75]));

        let mutated = UniformMutation::new(1.0).unwrap().apply(&mut pop, &mut rng);

        assert_eq!(mutated, 1);
        assert_eq!(pop[0].gene, vec![0.5, 7.0]);
        assert!(rng.0.is_empty());
    }
}
