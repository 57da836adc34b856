//! Collaborator seams: employee lookup, constraint lookup, record storage.
//!
//! The optimizer never talks to a database. Callers plug their own
//! implementations in; the in-memory ones here back tests and small tools.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::{Result, StoreError};
use crate::models::{Employee, ScheduleRecord, WfhConstraint};

/// Supplies the employees to roster, in a stable order.
pub trait EmployeeSource {
    /// All employees eligible for this run.
    fn employees(&self) -> Result<Vec<Employee>>;
}

/// Supplies the active WFH constraint.
pub trait ConstraintSource {
    /// The first configured constraint, or `None` if none exists.
    fn active_constraint(&self) -> Result<Option<WfhConstraint>>;
}

/// Persists and queries dated schedule records.
pub trait ScheduleStore {
    /// Stores one record.
    fn save(&mut self, record: ScheduleRecord) -> std::result::Result<(), StoreError>;

    /// Every stored record, in insertion order.
    fn all(&self) -> Vec<ScheduleRecord>;

    /// Stored records for one date, in insertion order.
    fn on_date(&self, date: NaiveDate) -> Vec<ScheduleRecord> {
        self.all()
            .into_iter()
            .filter(|r| r.work_date == date)
            .collect()
    }
}

/// In-memory employee and constraint directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    employees: Vec<Employee>,
    constraints: Vec<WfhConstraint>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee.
    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employees.push(employee);
        self
    }

    /// Adds several employees.
    pub fn with_employees(mut self, employees: impl IntoIterator<Item = Employee>) -> Self {
        self.employees.extend(employees);
        self
    }

    /// Adds a constraint record. The first one added is the active one.
    pub fn with_constraint(mut self, constraint: WfhConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

impl EmployeeSource for InMemoryDirectory {
    fn employees(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.clone())
    }
}

impl ConstraintSource for InMemoryDirectory {
    fn active_constraint(&self) -> Result<Option<WfhConstraint>> {
        Ok(self.constraints.first().cloned())
    }
}

/// In-memory record store that only accepts known employees.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScheduleStore {
    known: HashSet<String>,
    records: Vec<ScheduleRecord>,
}

impl InMemoryScheduleStore {
    /// Creates a store accepting records for the given employees.
    pub fn new(employees: &[Employee]) -> Self {
        Self {
            known: employees.iter().map(|e| e.id.clone()).collect(),
            records: Vec::new(),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ScheduleStore for InMemoryScheduleStore {
    fn save(&mut self, record: ScheduleRecord) -> std::result::Result<(), StoreError> {
        if !self.known.contains(&record.employee_id) {
            return Err(StoreError::UnknownEmployee(record.employee_id));
        }
        self.records.push(record);
        Ok(())
    }

    fn all(&self) -> Vec<ScheduleRecord> {
        self.records.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, d).unwrap()
    }

    #[test]
    fn test_directory_first_constraint_is_active() {
        let dir = InMemoryDirectory::new()
            .with_employee(Employee::new("E1"))
            .with_constraint(WfhConstraint::new(4, 3).with_rule_name("first"))
            .with_constraint(WfhConstraint::new(2, 2).with_rule_name("second"));

        assert_eq!(dir.employees().unwrap().len(), 1);
        assert_eq!(dir.active_constraint().unwrap().unwrap().rule_name, "first");
        assert!(InMemoryDirectory::new().active_constraint().unwrap().is_none());
    }

    #[test]
    fn test_store_rejects_unknown_employee() {
        let mut store = InMemoryScheduleStore::new(&[Employee::new("E1")]);
        assert!(store.save(ScheduleRecord::new("E1", date(2), true)).is_ok());
        let err = store
            .save(ScheduleRecord::new("E9", date(2), true))
            .unwrap_err();
        assert_eq!(err, StoreError::UnknownEmployee("E9".into()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_queries() {
        let mut store = InMemoryScheduleStore::new(&[Employee::new("E1"), Employee::new("E2")]);
        assert!(store.is_empty());
        store.save(ScheduleRecord::new("E1", date(2), true)).unwrap();
        store.save(ScheduleRecord::new("E1", date(3), false)).unwrap();
        store.save(ScheduleRecord::new("E2", date(2), false)).unwrap();

        assert_eq!(store.all().len(), 3);
        let monday = store.on_date(date(2));
        assert_eq!(monday.len(), 2);
        assert_eq!(monday[1].employee_id, "E2");
        assert!(store.on_date(date(9)).is_empty());
    }
}
