//! Rostering domain models.
//!
//! Provides the data types consumed and produced by the WFH optimizer.
//!
//! | Type | Role |
//! |------|------|
//! | `Employee` | Person to roster (input) |
//! | `WfhConstraint` | Daily and per-employee WFH caps (input) |
//! | `Roster` | Winning employee × day assignment (output) |
//! | `ScheduleRecord` | Dated (employee, date, WFH) fact (persisted) |

mod constraint;
mod employee;
mod schedule;

pub use constraint::WfhConstraint;
pub use employee::Employee;
pub use schedule::{Roster, RosterEntry, ScheduleRecord, week_start};
