//! Employee model.
//!
//! Employees are supplied by an external directory. The optimizer only
//! cares about the identifier; the name is carried for display.

use serde::{Deserialize, Serialize};

/// An employee eligible for WFH rostering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

impl Employee {
    /// Creates a new employee with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Sets the employee name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
