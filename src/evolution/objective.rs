/// The function being maximized.
///
/// Scores must be finite and strictly positive: they are used directly as
/// roulette wheel weights. Any `Fn(&[f64]) -> f64` closure is an objective.
pub trait Objective {
    fn score(&self, genes: &[f64]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn score(&self, genes: &[f64]) -> f64 {
        self(genes)
    }
}
