//! WFH rostering GA problem definition.
//!
//! Bridges domain models (`Employee`, `WfhConstraint`) to the chromosome
//! operators and defines the fitness function.
//!
//! # Fitness
//!
//! Higher is better; a perfectly balanced roster scores 0.
//!
//! ```text
//! mean  = max_wfh_per_day * days / employees
//! score = - Σ_day |day_total - max_wfh_per_day|
//!         - Σ_emp (wfh_count - mean)²
//! ```

use rand::Rng;
use rayon::prelude::*;

use super::chromosome::{RosterChromosome, flip_mutation, per_employee_crossover};
use super::config::GaConfig;
use crate::error::Result;
use crate::models::{Employee, Roster, WfhConstraint};

/// GA problem definition for WFH rostering.
///
/// # Example
/// ```
/// use u_roster::ga::{GaConfig, GaRunner, RosterProblem};
/// use u_roster::models::{Employee, WfhConstraint};
///
/// let employees: Vec<Employee> = (1..=10).map(|i| Employee::new(format!("E{i}"))).collect();
/// let config = GaConfig::default().with_seed(42);
/// let problem = RosterProblem::new(&employees, WfhConstraint::new(4, 3), &config);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert!(result.best.is_valid(problem.constraint()));
/// ```
#[derive(Debug, Clone)]
pub struct RosterProblem {
    employee_ids: Vec<String>,
    constraint: WfhConstraint,
    days: usize,
    max_sampling_attempts: usize,
}

impl RosterProblem {
    /// Creates a problem from domain models.
    ///
    /// Takes the planning window and the sampling budget from `config`.
    pub fn new(employees: &[Employee], constraint: WfhConstraint, config: &GaConfig) -> Self {
        Self {
            employee_ids: employees.iter().map(|e| e.id.clone()).collect(),
            constraint,
            days: config.days,
            max_sampling_attempts: config.max_sampling_attempts,
        }
    }

    /// Employee IDs in row order.
    pub fn employee_ids(&self) -> &[String] {
        &self.employee_ids
    }

    /// The active constraint.
    pub fn constraint(&self) -> &WfhConstraint {
        &self.constraint
    }

    /// Planning window length.
    pub fn days(&self) -> usize {
        self.days
    }

    /// Fair share of WFH days per employee.
    pub fn mean_wfh(&self) -> f64 {
        self.constraint.mean_wfh(self.days, self.employee_ids.len())
    }

    /// Builds one random initial individual.
    pub fn create_individual<R: Rng>(&self, rng: &mut R) -> Result<RosterChromosome> {
        RosterChromosome::random(
            self.employee_ids.len(),
            self.days,
            &self.constraint,
            self.max_sampling_attempts,
            rng,
        )
    }

    /// Scores one individual.
    pub fn evaluate(&self, individual: &RosterChromosome) -> f64 {
        let cap = self.constraint.max_wfh_per_day as f64;
        let mean = self.mean_wfh();

        let day_penalty: f64 = individual
            .day_totals()
            .iter()
            .map(|&t| (t as f64 - cap).abs())
            .sum();
        let balance_penalty: f64 = individual
            .wfh_counts()
            .iter()
            .map(|&n| (n as f64 - mean).powi(2))
            .sum();

        -(day_penalty + balance_penalty)
    }

    /// Scores a whole population, in order.
    ///
    /// Evaluation is read-only per individual, so the parallel path yields
    /// the same vector as the sequential one.
    pub fn evaluate_population(&self, population: &[RosterChromosome], parallel: bool) -> Vec<f64> {
        if parallel {
            population.par_iter().map(|ind| self.evaluate(ind)).collect()
        } else {
            population.iter().map(|ind| self.evaluate(ind)).collect()
        }
    }

    /// Per-employee crossover with repair.
    pub fn crossover<R: Rng>(
        &self,
        parent1: &RosterChromosome,
        parent2: &RosterChromosome,
        rng: &mut R,
    ) -> (RosterChromosome, RosterChromosome) {
        per_employee_crossover(parent1, parent2, self.constraint.max_wfh_per_day, rng)
    }

    /// Targeted repair followed by per-employee bit flips at `rate`.
    pub fn mutate<R: Rng>(
        &self,
        individual: &RosterChromosome,
        rate: f64,
        rng: &mut R,
    ) -> Result<RosterChromosome> {
        flip_mutation(
            individual,
            self.constraint.max_wfh_per_day,
            rate,
            self.max_sampling_attempts,
            rng,
        )
    }

    /// Admission check.
    pub fn is_valid(&self, individual: &RosterChromosome) -> bool {
        individual.is_valid(&self.constraint)
    }

    /// Re-keys an individual by employee ID.
    pub fn decode(&self, individual: &RosterChromosome) -> Roster {
        individual.to_roster(&self.employee_ids)
    }
}
