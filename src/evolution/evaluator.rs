use tracing::warn;

use super::objective::Objective;
use crate::{
    error::{GeneticError, Result},
    population::Population,
};

/// Scores every working member with `objective` and stores the result as its fitness.
///
/// The archive is never evaluated. Scores are written only once every member has
/// produced a valid one, so a failed evaluation leaves all fitness values as they were.
///
/// # Errors
///
/// Returns `ObjectiveContractViolation` for the first member whose score is not a
/// finite, strictly positive number.
pub fn evaluate<O>(objective: &O, population: &mut Population) -> Result<()>
where
    O: Objective + ?Sized,
{
    let mut scores = Vec::with_capacity(population.len());
    for (index, member) in population.members().iter().enumerate() {
        let value = objective.score(&member.gene);
        if !(value > 0.0) || !value.is_finite() {
            warn!(index, value, "Objective returned an unusable score");
            return Err(GeneticError::ObjectiveContractViolation { index, value });
        }
        scores.push(value);
    }

    for (member, score) in population.members_mut().iter_mut().zip(scores) {
        member.fitness = score;
    }
    Ok(())
}
