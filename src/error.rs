//! Error types for roster planning.
//!
//! Fatal input problems (`NoEmployees`, `NoConstraintConfigured`,
//! `InfeasibleConstraints`) are raised before any GA work starts. The
//! stall variants replace loops that would otherwise spin forever under
//! tight constraints.

use thiserror::Error;

use crate::validation::ValidationError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Errors raised while planning a roster.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    #[error("no employees available to schedule")]
    NoEmployees,

    #[error("no WFH constraint has been configured")]
    NoConstraintConfigured,

    #[error(
        "infeasible constraints: {employees} employees, {days} days, max {max_wfh_per_day} WFH per day"
    )]
    InfeasibleConstraints {
        employees: usize,
        days: usize,
        max_wfh_per_day: usize,
    },

    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("initialization stalled: no eligible {what} after {attempts} attempts")]
    InitializationStalled { what: &'static str, attempts: usize },

    #[error("repair exhausted: every day is at the cap, employee #{employee} has no WFH day")]
    RepairExhausted { employee: usize },

    #[error(
        "admission stalled in generation {generation}: {admitted} valid offspring after {attempts} breeding attempts"
    )]
    AdmissionStalled {
        generation: usize,
        admitted: usize,
        attempts: usize,
    },

    #[error("collaborator error: {0}")]
    Source(String),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised by a [`crate::planner::ScheduleStore`] for a single record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("invalid employee id: {0}")]
    UnknownEmployee(String),

    #[error("storage failure: {0}")]
    Backend(String),
}
