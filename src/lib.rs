//! Work-from-home roster optimization for the U-Engine ecosystem.
//!
//! Produces a weekly WFH roster: every employee gets at least one WFH day,
//! every day has exactly the configured number of WFH employees, and WFH
//! days are spread as evenly as possible.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Employee`, `WfhConstraint`, `Roster`,
//!   `ScheduleRecord`
//! - **`validation`**: Input checks (empty staff, missing constraint,
//!   duplicate IDs, infeasible caps)
//! - **`ga`**: Chromosome encoding, repair, operators, selection and the
//!   generational loop
//! - **`planner`**: Collaborator traits, in-memory stores, KPIs and the
//!   end-to-end planning service
//!
//! # Architecture
//!
//! This crate sits at Layer 3 (Frameworks) in the U-Engine ecosystem.
//! Storage and HTTP are left to the caller through the `planner` traits.
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"

pub mod error;
pub mod ga;
pub mod models;
pub mod planner;
pub mod validation;

pub use error::{Result, RosterError, StoreError};
