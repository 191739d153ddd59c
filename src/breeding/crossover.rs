//! # SinglePointCrossover
//!
//! Pairs up members of the freshly selected population and swaps the prefix of
//! their gene vectors in front of a random cut index.
use tracing::trace;

use crate::{
    error::{GeneticError, Result},
    genotype::Genotype,
    rng::RandomDraw,
};

#[derive(Debug, Clone)]
pub struct SinglePointCrossover {
    probability: f64,
}

impl SinglePointCrossover {
    /// Creates a crossover operator marking each member with the given probability.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `probability` is outside `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GeneticError::Configuration(format!(
                "Crossover probability must lie in [0, 1], got {}",
                probability
            )));
        }
        Ok(Self { probability })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Picks the cut index for a pair of `num_genes`-long vectors.
    ///
    /// Single-gene vectors cannot be cut. Two-gene vectors are always cut at 1
    /// without consuming a draw; longer ones draw uniformly from `[1, num_genes - 1]`.
    pub fn crossover_point<R>(num_genes: usize, rng: &mut R) -> Option<usize>
    where
        R: RandomDraw + ?Sized,
    {
        match num_genes {
            0 | 1 => None,
            2 => Some(1),
            n => Some(rng.index_between(1, n - 1)),
        }
    }

    /// Marks members with the crossover probability and crosses consecutive marked pairs.
    ///
    /// One marking draw is consumed per member, in order. A pair's cut index is drawn
    /// as soon as its second member is marked. An unpaired last member is left alone.
    /// Fitness values are not touched and are stale afterwards.
    ///
    /// Returns the number of pairs that exchanged genes.
    pub fn apply<R>(&self, members: &mut [Genotype], rng: &mut R) -> usize
    where
        R: RandomDraw + ?Sized,
    {
        let mut pending: Option<usize> = None;
        let mut crossed = 0;

        for idx in 0..members.len() {
            if rng.next_uniform() >= self.probability {
                continue;
            }

            match pending.take() {
                None => pending = Some(idx),
                Some(first) => {
                    let num_genes = members[first].len().min(members[idx].len());
                    if let Some(point) = Self::crossover_point(num_genes, rng) {
                        let (left, right) = members.split_at_mut(idx);
                        swap_prefix(&mut left[first], &mut right[0], point);
                        trace!(first, second = idx, point, "Crossed pair");
                        crossed += 1;
                    }
                }
            }
        }

        crossed
    }
}

/// Swaps genes at indices `[0, point)` between two genotypes.
///
/// Applying the same swap twice restores both gene vectors.
pub fn swap_prefix(a: &mut Genotype, b: &mut Genotype, point: usize) {
    a.gene[..point].swap_with_slice(&mut b.gene[..point]);
}
