//! Roster (solution) model and its dated projection.
//!
//! A [`Roster`] is the winning individual re-keyed by employee ID: one
//! ordered row of WFH flags per employee, one flag per day of the planning
//! window. [`Roster::to_records`] projects it onto calendar dates for
//! persistence, one [`ScheduleRecord`] per (employee, day) pair.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A complete WFH roster for one planning window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Rows in employee order.
    pub entries: Vec<RosterEntry>,
}

/// One employee's WFH flags across the planning window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Employee ID.
    pub employee_id: String,
    /// WFH flag per day index (`true` = works from home).
    pub days: Vec<bool>,
}

/// A persisted (employee, date, WFH) fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// Employee ID.
    pub employee_id: String,
    /// Calendar date of the work day.
    pub work_date: NaiveDate,
    /// Whether the employee works from home on that date.
    pub is_wfh: bool,
}

impl RosterEntry {
    /// Creates a roster row.
    pub fn new(employee_id: impl Into<String>, days: Vec<bool>) -> Self {
        Self {
            employee_id: employee_id.into(),
            days,
        }
    }

    /// Number of WFH days in this row.
    #[inline]
    pub fn wfh_count(&self) -> usize {
        self.days.iter().filter(|&&d| d).count()
    }
}

impl ScheduleRecord {
    /// Creates a schedule record.
    pub fn new(employee_id: impl Into<String>, work_date: NaiveDate, is_wfh: bool) -> Self {
        Self {
            employee_id: employee_id.into(),
            work_date,
            is_wfh,
        }
    }
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row.
    pub fn add_entry(&mut self, entry: RosterEntry) {
        self.entries.push(entry);
    }

    /// Number of days in the planning window (0 for an empty roster).
    pub fn day_count(&self) -> usize {
        self.entries.first().map(|e| e.days.len()).unwrap_or(0)
    }

    /// Finds the row for an employee.
    pub fn entry_for(&self, employee_id: &str) -> Option<&RosterEntry> {
        self.entries.iter().find(|e| e.employee_id == employee_id)
    }

    /// WFH head count for a day index.
    pub fn wfh_on_day(&self, day: usize) -> usize {
        self.entries
            .iter()
            .filter(|e| e.days.get(day).copied().unwrap_or(false))
            .count()
    }

    /// Employees working from home on a day index, in roster order.
    pub fn employees_on_day(&self, day: usize) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.days.get(day).copied().unwrap_or(false))
            .map(|e| e.employee_id.as_str())
            .collect()
    }

    /// Projects the roster onto dates starting at `week_start`.
    ///
    /// Day index `i` maps to `week_start + i` days. Records are emitted
    /// employee by employee, days in order.
    pub fn to_records(&self, week_start: NaiveDate) -> Vec<ScheduleRecord> {
        self.entries
            .iter()
            .flat_map(|entry| {
                entry.days.iter().enumerate().map(move |(day, &is_wfh)| {
                    ScheduleRecord::new(
                        entry.employee_id.clone(),
                        week_start + Duration::days(day as i64),
                        is_wfh,
                    )
                })
            })
            .collect()
    }
}

/// Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}
