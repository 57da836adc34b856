//! Input validation for rostering problems.
//!
//! Checks the employee list and the constraint record before any GA work
//! starts. Detects:
//! - Empty employee set
//! - Missing constraint record
//! - Duplicate or blank employee IDs
//! - Zero caps
//! - Constraint sets that cannot satisfy both hard invariants

use std::collections::HashSet;

use crate::error::{Result, RosterError};
use crate::models::{Employee, WfhConstraint};

/// Structural validation result.
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two employees share the same ID.
    DuplicateId,
    /// An employee has an empty ID.
    BlankId,
    /// A constraint cap is zero.
    NonPositiveCap,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the structure of the rostering input.
///
/// Checks:
/// 1. No duplicate employee IDs
/// 2. No blank employee IDs
/// 3. Both constraint caps are positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(employees: &[Employee], constraint: &WfhConstraint) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for e in employees {
        if e.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankId,
                "Employee with blank ID",
            ));
        } else if !ids.insert(e.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", e.id),
            ));
        }
    }

    if constraint.max_wfh_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveCap,
            "max_wfh_per_day must be positive",
        ));
    }
    if constraint.max_wfh_per_employee == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveCap,
            "max_wfh_per_employee must be positive",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Full pre-run check, in the order the planner reports failures.
///
/// 1. [`RosterError::NoEmployees`]
/// 2. [`RosterError::NoConstraintConfigured`]
/// 3. [`RosterError::InvalidInput`] (structural errors from [`validate_input`])
/// 4. [`RosterError::InfeasibleConstraints`]
pub fn check_problem(
    employees: &[Employee],
    constraint: Option<&WfhConstraint>,
    days: usize,
) -> Result<()> {
    if employees.is_empty() {
        return Err(RosterError::NoEmployees);
    }
    let constraint = constraint.ok_or(RosterError::NoConstraintConfigured)?;
    validate_input(employees, constraint).map_err(RosterError::InvalidInput)?;

    if !constraint.is_feasible(days, employees.len()) {
        return Err(RosterError::InfeasibleConstraints {
            employees: employees.len(),
            days,
            max_wfh_per_day: constraint.max_wfh_per_day,
        });
    }
    Ok(())
}
