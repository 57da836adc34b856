//! WFH constraint record.
//!
//! A single active record drives each run: the exact number of employees
//! working from home per day, and a soft per-employee ceiling honoured
//! while building the initial population.
//!
//! # Feasibility
//!
//! "Every employee has at least one WFH day" and "every day has exactly
//! `max_wfh_per_day` WFH employees" can only hold together when
//! `max_wfh_per_day * days >= employees` and `max_wfh_per_day <= employees`.

use serde::{Deserialize, Serialize};

/// WFH rostering constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WfhConstraint {
    /// Rule label, for display only.
    pub rule_name: String,
    /// Exact number of WFH employees per day (hard target).
    pub max_wfh_per_day: usize,
    /// WFH days per employee honoured during construction (soft target).
    pub max_wfh_per_employee: usize,
}

impl WfhConstraint {
    /// Creates a constraint with the given daily and per-employee caps.
    pub fn new(max_wfh_per_day: usize, max_wfh_per_employee: usize) -> Self {
        Self {
            rule_name: String::new(),
            max_wfh_per_day,
            max_wfh_per_employee,
        }
    }

    /// Sets the rule label.
    pub fn with_rule_name(mut self, name: impl Into<String>) -> Self {
        self.rule_name = name.into();
        self
    }

    /// Fractional fair share of WFH days per employee.
    ///
    /// `max_wfh_per_day * days / employees`, not rounded. Returns 0.0 for
    /// an empty employee set.
    pub fn mean_wfh(&self, days: usize, employees: usize) -> f64 {
        if employees == 0 {
            return 0.0;
        }
        self.max_wfh_per_day as f64 * days as f64 / employees as f64
    }

    /// Smallest per-employee cap that still lets every day reach the
    /// daily target: `ceil(days * max_wfh_per_day / employees)`.
    ///
    /// Saturates at `usize::MAX` for absurdly large caps.
    pub fn min_feasible_per_employee(&self, days: usize, employees: usize) -> usize {
        if employees == 0 {
            return 0;
        }
        days.saturating_mul(self.max_wfh_per_day).div_ceil(employees)
    }

    /// Whether both hard invariants can hold simultaneously.
    pub fn is_feasible(&self, days: usize, employees: usize) -> bool {
        self.max_wfh_per_day <= employees && self.max_wfh_per_day.saturating_mul(days) >= employees
    }
}
