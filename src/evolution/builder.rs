use crate::{
    error::{GeneticError, Result},
    genotype::GeneBounds,
};

use super::{EvolutionLauncher, EvolutionOptions, Objective};

/// Fluent construction of an [`EvolutionLauncher`].
///
/// Options default to `EvolutionOptions::default()`; the objective and the bounds
/// are required. When no explicit gene count was configured the builder takes it
/// from the number of bound pairs.
pub struct EvolutionLauncherBuilder<O>
where
    O: Objective,
{
    objective: Option<O>,
    options: Option<EvolutionOptions>,
    bounds: Option<Vec<GeneBounds>>,
}

impl<O> EvolutionLauncherBuilder<O>
where
    O: Objective,
{
    pub fn new() -> Self {
        Self {
            objective: None,
            options: None,
            bounds: None,
        }
    }

    pub fn with_objective(mut self, objective: O) -> Self {
        self.objective = Some(objective);
        self
    }

    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_bounds(mut self, bounds: Vec<GeneBounds>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<O>> {
        let objective = self.objective.ok_or_else(|| {
            GeneticError::Configuration("Objective must be specified".to_string())
        })?;
        let bounds = self.bounds.ok_or_else(|| {
            GeneticError::Configuration("Gene bounds must be specified".to_string())
        })?;
        let options = match self.options {
            Some(options) => options,
            None => {
                let mut options = EvolutionOptions::default();
                options.set_num_genes(bounds.len());
                options
            }
        };

        EvolutionLauncher::new(objective, options, bounds)
    }
}

impl<O> Default for EvolutionLauncherBuilder<O>
where
    O: Objective,
{
    fn default() -> Self {
        Self::new()
    }
}
