use tracing::{debug, info, instrument, trace};

use super::{
    evaluator::evaluate,
    objective::Objective,
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    breeding::{SinglePointCrossover, UniformMutation},
    error::{GeneticError, Result},
    genotype::GeneBounds,
    population::{self, Population},
    report::{GenerationReport, Reporter},
    rng::RandomDraw,
    selection::{BestTracker, RouletteWheelSelection},
};

/// The best genotype found by a run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    pub genes: Vec<f64>,
    pub fitness: f64,
    /// Number of generations that were run.
    pub generations: usize,
}

/// Where a run currently stands.
///
/// A generation cycles through `Selecting` to `Reporting`. A run that fails stays in
/// the state where the failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Uninitialized,
    Initialized,
    FirstEvaluated,
    BestCaptured,
    Selecting,
    Crossing,
    Mutating,
    Evaluating,
    EliteChecking,
    Reporting,
    Terminated,
}

/// A validated run configuration: objective, options and per-gene bounds.
///
/// The launcher holds no run state; each call to [`start`](Self::start) or
/// [`run`](Self::run) creates an independent [`Evolution`].
///
/// # Examples
///
/// ```
/// use simplega::{EvolutionLauncher, EvolutionOptions, GeneBounds, RandomNumberGenerator};
///
/// let options = EvolutionOptions::builder()
///     .num_generations(50)
///     .population_size(20)
///     .num_genes(2)
///     .build();
/// let bounds = vec![GeneBounds::new(0.0, 5.0).unwrap(), GeneBounds::new(1.0, 2.0).unwrap()];
/// let launcher = EvolutionLauncher::new(|g: &[f64]| g[0] + g[1], options, bounds).unwrap();
///
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let result = launcher.run(&mut rng, &mut ()).unwrap();
///
/// assert_eq!(result.generations, 50);
/// assert!(result.fitness > 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<O: Objective> {
    objective: O,
    options: EvolutionOptions,
    bounds: Vec<GeneBounds>,
    selection: RouletteWheelSelection,
    crossover: SinglePointCrossover,
    mutation: UniformMutation,
    tracker: BestTracker,
}

impl<O: Objective> EvolutionLauncher<O> {
    /// Creates a launcher after validating the options against the bounds.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the options are invalid, if the number of
    /// bound pairs differs from the number of genes, or if a bound pair is invalid.
    pub fn new(objective: O, options: EvolutionOptions, bounds: Vec<GeneBounds>) -> Result<Self> {
        options.validate()?;
        if bounds.len() != options.get_num_genes() {
            return Err(GeneticError::Configuration(format!(
                "Expected {} bound pairs, got {}",
                options.get_num_genes(),
                bounds.len()
            )));
        }
        for b in &bounds {
            b.validate()?;
        }

        Ok(Self {
            crossover: SinglePointCrossover::new(options.get_crossover_probability())?,
            mutation: UniformMutation::new(options.get_mutation_probability())?,
            selection: RouletteWheelSelection::new(),
            tracker: BestTracker::new(),
            objective,
            options,
            bounds,
        })
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn bounds(&self) -> &[GeneBounds] {
        &self.bounds
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Initializes and evaluates a population and captures its best member.
    ///
    /// The returned run is in [`RunState::BestCaptured`], ready for its first generation.
    pub fn start<'a, R>(&'a self, rng: &'a mut R) -> Result<Evolution<'a, O, R>>
    where
        R: RandomDraw + ?Sized,
    {
        debug!(state = ?RunState::Uninitialized, "Run state");
        let mut population = population::initialize(
            &self.bounds,
            self.options.get_num_genes(),
            self.options.get_population_size(),
            rng,
        )?;
        debug!(state = ?RunState::Initialized, "Run state");

        evaluate(&self.objective, &mut population)?;
        debug!(state = ?RunState::FirstEvaluated, "Run state");

        self.tracker.capture_best(&mut population)?;
        debug!(state = ?RunState::BestCaptured, "Run state");

        Ok(Evolution {
            launcher: self,
            rng,
            population,
            generation: 0,
            state: RunState::BestCaptured,
        })
    }

    /// Runs a full evolution and returns the best genotype found.
    #[instrument(level = "debug", skip_all, fields(
        generations = self.options.get_num_generations(),
        population_size = self.options.get_population_size()
    ))]
    pub fn run<R, Rep>(&self, rng: &mut R, reporter: &mut Rep) -> Result<EvolutionResult>
    where
        R: RandomDraw + ?Sized,
        Rep: Reporter + ?Sized,
    {
        self.start(rng)?.finish(reporter)
    }
}

/// One run in progress.
///
/// Owns the population and generation counter and borrows the random draw source
/// for the run's lifetime.
#[derive(Debug)]
pub struct Evolution<'a, O: Objective, R: RandomDraw + ?Sized> {
    launcher: &'a EvolutionLauncher<O>,
    rng: &'a mut R,
    population: Population,
    generation: usize,
    state: RunState,
}

impl<'a, O: Objective, R: RandomDraw + ?Sized> Evolution<'a, O, R> {
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Number of generations completed or in progress.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn is_finished(&self) -> bool {
        self.state == RunState::Terminated
    }

    /// The archive as a result snapshot.
    pub fn best(&self) -> EvolutionResult {
        let archive = self.population.archive();
        EvolutionResult {
            genes: archive.gene.clone(),
            fitness: archive.fitness,
            generations: self.generation,
        }
    }

    /// Runs one generation: select, cross over, mutate, evaluate, check elitism, report.
    ///
    /// Returns `Ok(None)` once the generation budget is spent, moving the run to
    /// [`RunState::Terminated`].
    ///
    /// # Errors
    ///
    /// Propagates the first failing stage's error and leaves the run in that stage.
    /// Advancing a failed run returns an `Evolution` error.
    pub fn advance<Rep>(&mut self, reporter: &mut Rep) -> Result<Option<GenerationReport>>
    where
        Rep: Reporter + ?Sized,
    {
        match self.state {
            RunState::BestCaptured | RunState::Reporting => {}
            RunState::Terminated => return Ok(None),
            state => {
                return Err(GeneticError::Evolution(format!(
                    "Cannot advance a run stopped in state {:?} at generation {}",
                    state, self.generation
                )))
            }
        }

        let launcher = self.launcher;
        if self.generation >= launcher.options().get_num_generations() {
            self.state = RunState::Terminated;
            debug!(generation = self.generation, "Run terminated");
            return Ok(None);
        }

        self.generation += 1;

        self.state = RunState::Selecting;
        launcher.selection.select(&mut self.population, self.rng)?;

        self.state = RunState::Crossing;
        launcher
            .crossover
            .apply(self.population.members_mut(), self.rng);

        self.state = RunState::Mutating;
        launcher
            .mutation
            .apply(self.population.members_mut(), self.rng);

        self.state = RunState::Evaluating;
        evaluate(&launcher.objective, &mut self.population)?;

        self.state = RunState::EliteChecking;
        launcher.tracker.preserve(&mut self.population)?;

        self.state = RunState::Reporting;
        let report = GenerationReport::from_population(self.generation, &self.population);
        self.log_generation(&report);
        reporter.report(&report)?;

        Ok(Some(report))
    }

    /// Runs the remaining generations and yields the archive.
    pub fn finish<Rep>(mut self, reporter: &mut Rep) -> Result<EvolutionResult>
    where
        Rep: Reporter + ?Sized,
    {
        while self.advance(reporter)?.is_some() {}

        let result = self.best();
        reporter.finish(&result)?;
        Ok(result)
    }

    fn log_generation(&self, report: &GenerationReport) {
        match self.launcher.options().get_log_level() {
            LogLevel::None => {}
            LogLevel::Minimal => info!(
                generation = report.generation,
                best = report.best_fitness,
                average = report.mean_fitness,
                std_dev = report.std_dev,
                "Generation finished"
            ),
            LogLevel::Verbose => {
                info!(
                    generation = report.generation,
                    best = report.best_fitness,
                    average = report.mean_fitness,
                    std_dev = report.std_dev,
                    "Generation finished"
                );
                for (index, member) in self.population.members().iter().enumerate() {
                    trace!(
                        generation = report.generation,
                        index,
                        fitness = member.fitness,
                        genes = ?member.gene,
                        "Member"
                    );
                }
            }
        }
    }
}
