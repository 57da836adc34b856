//! GA configuration.
//!
//! [`GaConfig`] holds every parameter that controls the evolutionary loop.
//! It is passed to [`super::RosterProblem::new`] and [`super::GaRunner::run`]
//! explicitly; nothing is global.

use serde::{Deserialize, Serialize};

use super::selection::Selection;

/// Configuration for the roster GA.
///
/// # Defaults
///
/// ```
/// use u_roster::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.generations, 50);
/// assert_eq!(config.days, 6);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_roster::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_selection(Selection::LegacyRoulette)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// ```
///
/// The struct also deserializes from JSON; missing fields take their
/// default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of individuals kept per generation.
    pub population_size: usize,

    /// Number of generations. The loop never stops early.
    pub generations: usize,

    /// Length of the planning window in days.
    pub days: usize,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Probability of crossing a parent pair (0.0–1.0).
    ///
    /// When crossover is not applied, both parents pass through unchanged.
    pub crossover_rate: f64,

    /// Probability of mutating an offspring, and the per-employee probability
    /// of a single flag flip once it is mutated (0.0–1.0).
    pub mutation_rate: f64,

    /// Random re-rolls tried before falling back to an exhaustive scan
    /// of eligible days or employees.
    pub max_sampling_attempts: usize,

    /// Parent pairs drawn per generation before the run gives up with
    /// [`crate::RosterError::AdmissionStalled`].
    pub max_breeding_attempts: usize,

    /// Whether to evaluate fitness in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            generations: 50,
            days: 6,
            selection: Selection::default(),
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            max_sampling_attempts: 64,
            max_breeding_attempts: 10_000,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the planning window length.
    pub fn with_days(mut self, days: usize) -> Self {
        self.days = days;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random re-roll budget.
    pub fn with_max_sampling_attempts(mut self, n: usize) -> Self {
        self.max_sampling_attempts = n;
        self
    }

    /// Sets the per-generation breeding budget.
    pub fn with_max_breeding_attempts(mut self, n: usize) -> Self {
        self.max_breeding_attempts = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if self.days == 0 {
            return Err("days must be at least 1".into());
        }
        if self.max_breeding_attempts == 0 {
            return Err("max_breeding_attempts must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err("crossover_rate must be within 0.0..=1.0".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be within 0.0..=1.0".into());
        }
        Ok(())
    }
}
