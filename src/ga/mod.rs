//! GA-based WFH roster optimization.
//!
//! A classic generational pipeline over binary employee × day chromosomes:
//! `init → evaluate → select → crossover → mutate → repair/validate → replace`,
//! repeated for a fixed number of generations.
//!
//! # Encoding
//!
//! One row per employee, one boolean per day. Valid individuals have at
//! least one WFH day per employee and exactly `max_wfh_per_day` WFH
//! employees per day.
//!
//! # Submodules
//!
//! - [`selection`]: Runtime-selectable parent selection
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"

mod chromosome;
mod config;
mod problem;
mod runner;
mod sampling;
pub mod selection;

pub use chromosome::{RosterChromosome, flip_mutation, per_employee_crossover, repair};
pub use config::GaConfig;
pub use problem::RosterProblem;
pub use runner::{GaResult, GaRunner};
pub use selection::{Selection, best_index};
