//! Generational loop.
//!
//! # Algorithm
//!
//! 1. Build `population_size` random valid individuals and score them.
//! 2. For each of `generations` iterations:
//!    - select two parents by the configured [`super::Selection`],
//!    - cross them with probability `crossover_rate` (else pass through),
//!    - mutate each offspring with probability `mutation_rate`,
//!    - admit only offspring that pass the validator,
//!    - repeat until the next population is full, trim the overshoot,
//!    - rescore the new population.
//! 3. Return the best individual seen in any generation.
//!
//! Each generation may draw at most `max_breeding_attempts` parent pairs;
//! past that the run fails with [`RosterError::AdmissionStalled`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::chromosome::RosterChromosome;
use super::config::GaConfig;
use super::problem::RosterProblem;
use super::selection::best_index;
use crate::error::{Result, RosterError};

/// Outcome of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best individual seen across all generations.
    pub best: RosterChromosome,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// Generation in which `best` first appeared (0 = initial population).
    pub best_generation: usize,
    /// Number of generations executed.
    pub generations: usize,
    /// Best fitness of each population, initial population first.
    pub fitness_history: Vec<f64>,
}

/// Runs the roster GA.
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG derived from `config.seed`.
    ///
    /// # Errors
    /// - [`RosterError::InvalidConfig`] if `config.validate()` fails.
    /// - [`RosterError::InitializationStalled`] from population init.
    /// - [`RosterError::AdmissionStalled`] if a generation cannot be filled.
    pub fn run(problem: &RosterProblem, config: &GaConfig) -> Result<GaResult> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA with a caller-supplied RNG.
    pub fn run_with_rng<R: Rng>(
        problem: &RosterProblem,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        config.validate().map_err(RosterError::InvalidConfig)?;
        info!(
            employees = problem.employee_ids().len(),
            days = problem.days(),
            population = config.population_size,
            generations = config.generations,
            "starting roster GA"
        );

        let mut population = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect::<Result<Vec<_>>>()?;
        let mut scores = problem.evaluate_population(&population, config.parallel);

        let mut tracker = BestTracker::default();
        tracker.observe(&population, &scores, 0);

        for generation in 0..config.generations {
            population = Self::breed(problem, config, &population, &scores, generation, rng)?;
            scores = problem.evaluate_population(&population, config.parallel);
            let generation_best = tracker.observe(&population, &scores, generation + 1);
            debug!(
                generation,
                best = generation_best,
                overall = tracker.best_fitness,
                "generation complete"
            );
        }

        let BestTracker {
            best,
            best_fitness,
            best_generation,
            history,
        } = tracker;
        // The initial population is never empty, so a best always exists.
        let best = best.ok_or_else(|| RosterError::InvalidConfig("empty population".into()))?;
        info!(best_fitness, best_generation, "roster GA finished");

        Ok(GaResult {
            best,
            best_fitness,
            best_generation,
            generations: config.generations,
            fitness_history: history,
        })
    }

    /// Fills the next population with valid offspring.
    fn breed<R: Rng>(
        problem: &RosterProblem,
        config: &GaConfig,
        population: &[RosterChromosome],
        scores: &[f64],
        generation: usize,
        rng: &mut R,
    ) -> Result<Vec<RosterChromosome>> {
        let target = config.population_size;
        let mut next = Vec::with_capacity(target + 1);
        let mut attempts = 0;

        while next.len() < target {
            if attempts >= config.max_breeding_attempts {
                return Err(RosterError::AdmissionStalled {
                    generation,
                    admitted: next.len(),
                    attempts,
                });
            }
            attempts += 1;

            let p1 = &population[config.selection.select(scores, rng)];
            let p2 = &population[config.selection.select(scores, rng)];

            let (c1, c2) = if rng.random_bool(config.crossover_rate) {
                problem.crossover(p1, p2, rng)
            } else {
                (p1.clone(), p2.clone())
            };

            for child in [c1, c2] {
                let child = if rng.random_bool(config.mutation_rate) {
                    match problem.mutate(&child, config.mutation_rate, rng) {
                        Ok(mutated) => mutated,
                        Err(e) => {
                            debug!(generation, error = %e, "offspring discarded");
                            continue;
                        }
                    }
                } else {
                    child
                };
                if problem.is_valid(&child) {
                    next.push(child);
                }
            }
        }

        next.truncate(target);
        debug!(generation, attempts, "population refilled");
        Ok(next)
    }
}

/// Best-so-far bookkeeping across generations.
#[derive(Default)]
struct BestTracker {
    best: Option<RosterChromosome>,
    best_fitness: f64,
    best_generation: usize,
    history: Vec<f64>,
}

impl BestTracker {
    /// Records a scored population; returns its best fitness.
    ///
    /// Only a strictly better score replaces the current best, so ties keep
    /// the earliest individual.
    fn observe(
        &mut self,
        population: &[RosterChromosome],
        scores: &[f64],
        generation: usize,
    ) -> f64 {
        let Some(idx) = best_index(scores) else {
            return f64::NEG_INFINITY;
        };
        let fitness = scores[idx];
        self.history.push(fitness);
        if self.best.is_none() || fitness > self.best_fitness {
            self.best = Some(population[idx].clone());
            self.best_fitness = fitness;
            self.best_generation = generation;
        }
        fitness
    }
}
