//! Roster planning service and its collaborators.
//!
//! Wraps the GA with the plumbing a deployment needs: fetching employees
//! and the active constraint, rejecting bad input, projecting the winning
//! roster onto dates, and storing the records.
//!
//! # KPI
//!
//! `RosterKpi` summarizes the stored roster: daily deviation from the cap
//! and the spread of WFH days across employees.

mod kpi;
mod service;
mod store;

pub use kpi::RosterKpi;
pub use service::{PlanOutcome, SUCCESS_MESSAGE, WfhPlanner};
pub use store::{
    ConstraintSource, EmployeeSource, InMemoryDirectory, InMemoryScheduleStore, ScheduleStore,
};
