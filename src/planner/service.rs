//! End-to-end roster generation.
//!
//! # Flow
//!
//! 1. Fetch employees and the active constraint from the collaborators.
//! 2. Reject empty, missing, malformed or infeasible input up front. Warn
//!    when the per-employee cap is too low to fill every day.
//! 3. Run the GA.
//! 4. Project the winner onto the week containing `today` (Monday first)
//!    and hand every record to the store. Records the store refuses are
//!    logged and skipped; the rest are still saved.

use chrono::NaiveDate;
use tracing::{info, warn};

use super::kpi::RosterKpi;
use super::store::{ConstraintSource, EmployeeSource, ScheduleStore};
use crate::error::{Result, RosterError};
use crate::ga::{GaConfig, GaRunner, RosterProblem};
use crate::models::{Roster, week_start};
use crate::validation::check_problem;

/// Message returned on a successful run.
pub const SUCCESS_MESSAGE: &str = "Schedule generated successfully";

/// Result of one planning run.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    /// Human-readable status.
    pub message: String,
    /// The winning roster.
    pub roster: Roster,
    /// Fitness of the winning roster.
    pub best_fitness: f64,
    /// First date of the planned week.
    pub week_start: NaiveDate,
    /// Records accepted by the store.
    pub saved: usize,
    /// Records the store refused.
    pub skipped: usize,
    /// Quality summary of the roster.
    pub kpi: RosterKpi,
    /// Whether `max_wfh_per_employee` was too low to fill every day, so the
    /// fill pass had to exceed it.
    pub per_employee_cap_relaxed: bool,
}

/// Roster planning service.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_roster::ga::GaConfig;
/// use u_roster::models::{Employee, WfhConstraint};
/// use u_roster::planner::{InMemoryDirectory, InMemoryScheduleStore, ScheduleStore, WfhPlanner};
///
/// let employees: Vec<Employee> = (1..=10).map(|i| Employee::new(format!("E{i}"))).collect();
/// let directory = InMemoryDirectory::new()
///     .with_employees(employees.clone())
///     .with_constraint(WfhConstraint::new(4, 3));
/// let mut store = InMemoryScheduleStore::new(&employees);
///
/// let planner = WfhPlanner::new(GaConfig::default().with_seed(42));
/// let today = NaiveDate::from_ymd_opt(2024, 12, 4).unwrap();
/// let outcome = planner.generate(&directory, &directory, &mut store, today).unwrap();
///
/// assert_eq!(outcome.saved, 60);
/// assert_eq!(store.on_date(outcome.week_start).iter().filter(|r| r.is_wfh).count(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WfhPlanner {
    config: GaConfig,
}

impl WfhPlanner {
    /// Creates a planner with the given GA configuration.
    pub fn new(config: GaConfig) -> Self {
        Self { config }
    }

    /// The GA configuration in use.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Generates and stores a roster for the week containing `today`.
    pub fn generate<E, C, S>(
        &self,
        employees: &E,
        constraints: &C,
        store: &mut S,
        today: NaiveDate,
    ) -> Result<PlanOutcome>
    where
        E: EmployeeSource + ?Sized,
        C: ConstraintSource + ?Sized,
        S: ScheduleStore + ?Sized,
    {
        self.config.validate().map_err(RosterError::InvalidConfig)?;

        let staff = employees.employees()?;
        let constraint = constraints.active_constraint()?;
        check_problem(&staff, constraint.as_ref(), self.config.days)?;
        let constraint = constraint.ok_or(RosterError::NoConstraintConfigured)?;

        let needed = constraint.min_feasible_per_employee(self.config.days, staff.len());
        let per_employee_cap_relaxed = constraint.max_wfh_per_employee < needed;
        if per_employee_cap_relaxed {
            warn!(
                max_wfh_per_employee = constraint.max_wfh_per_employee,
                needed,
                "per-employee WFH cap too low, fill pass will exceed it"
            );
        }

        let monday = week_start(today);
        info!(
            employees = staff.len(),
            rule = %constraint.rule_name,
            week_start = %monday,
            "generating WFH roster"
        );

        let problem = RosterProblem::new(&staff, constraint.clone(), &self.config);
        let result = GaRunner::run(&problem, &self.config)?;
        let roster = problem.decode(&result.best);

        let mut saved = 0;
        let mut skipped = 0;
        for record in roster.to_records(monday) {
            let employee_id = record.employee_id.clone();
            match store.save(record) {
                Ok(()) => saved += 1,
                Err(e) => {
                    warn!(employee = %employee_id, error = %e, "schedule record not saved");
                    skipped += 1;
                }
            }
        }
        info!(saved, skipped, best_fitness = result.best_fitness, "WFH roster stored");

        Ok(PlanOutcome {
            message: SUCCESS_MESSAGE.to_string(),
            kpi: RosterKpi::calculate(&roster, &constraint),
            roster,
            best_fitness: result.best_fitness,
            week_start: monday,
            saved,
            skipped,
            per_employee_cap_relaxed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, WfhConstraint};
    use crate::planner::{InMemoryDirectory, InMemoryScheduleStore};

    fn staff(n: usize) -> Vec<Employee> {
        (1..=n).map(|i| Employee::new(format!("E{i}"))).collect()
    }

    fn today() -> NaiveDate {
        // Wednesday
        NaiveDate::from_ymd_opt(2024, 12, 4).unwrap()
    }

    fn planner() -> WfhPlanner {
        WfhPlanner::new(GaConfig::default().with_seed(42))
    }

    struct BrokenSource;

    impl EmployeeSource for BrokenSource {
        fn employees(&self) -> Result<Vec<Employee>> {
            Err(RosterError::Source("employee table unavailable".into()))
        }
    }

    #[test]
    fn test_generate_saves_full_week() {
        let employees = staff(10);
        let dir = InMemoryDirectory::new()
            .with_employees(employees.clone())
            .with_constraint(WfhConstraint::new(4, 3));
        let mut store = InMemoryScheduleStore::new(&employees);

        let outcome = planner().generate(&dir, &dir, &mut store, today()).unwrap();

        assert_eq!(outcome.message, SUCCESS_MESSAGE);
        assert_eq!(outcome.week_start, NaiveDate::from_ymd_opt(2024, 12, 2).unwrap());
        assert_eq!(outcome.saved, 60);
        assert_eq!(outcome.skipped, 0);
        assert_eq!(outcome.kpi.daily_deviation, 0);
        assert!(outcome.kpi.min_per_employee >= 1);
        assert!(!outcome.per_employee_cap_relaxed);

        for offset in 0..6 {
            let date = outcome.week_start + chrono::Duration::days(offset);
            let day = store.on_date(date);
            assert_eq!(day.len(), 10);
            assert_eq!(day.iter().filter(|r| r.is_wfh).count(), 4);
        }
        // Sunday is outside the six-day window
        let sunday = outcome.week_start + chrono::Duration::days(6);
        assert!(store.on_date(sunday).is_empty());
    }

    #[test]
    fn test_unknown_employees_skipped() {
        let employees = staff(10);
        let dir = InMemoryDirectory::new()
            .with_employees(employees.clone())
            .with_constraint(WfhConstraint::new(4, 3));
        // Store only knows the first eight employees
        let mut store = InMemoryScheduleStore::new(&employees[..8]);

        let outcome = planner().generate(&dir, &dir, &mut store, today()).unwrap();
        assert_eq!(outcome.saved, 48);
        assert_eq!(outcome.skipped, 12);
        assert!(store.all().iter().all(|r| r.employee_id != "E9" && r.employee_id != "E10"));
    }

    #[test]
    fn test_low_per_employee_cap_is_relaxed() {
        // 24 slots over 10 people: someone must take 3 days
        let employees = staff(10);
        let dir = InMemoryDirectory::new()
            .with_employees(employees.clone())
            .with_constraint(WfhConstraint::new(4, 1));
        let mut store = InMemoryScheduleStore::new(&employees);

        let outcome = planner().generate(&dir, &dir, &mut store, today()).unwrap();
        assert!(outcome.per_employee_cap_relaxed);
        assert_eq!(outcome.saved, 60);
        assert_eq!(outcome.kpi.daily_deviation, 0);
        assert!(outcome.kpi.max_per_employee > 1);
    }

    #[test]
    fn test_no_employees() {
        let dir = InMemoryDirectory::new().with_constraint(WfhConstraint::new(4, 3));
        let mut store = InMemoryScheduleStore::default();
        let err = planner().generate(&dir, &dir, &mut store, today()).unwrap_err();
        assert_eq!(err, RosterError::NoEmployees);
        assert!(store.is_empty());
    }

    #[test]
    fn test_no_constraint() {
        let dir = InMemoryDirectory::new().with_employees(staff(4));
        let mut store = InMemoryScheduleStore::default();
        let err = planner().generate(&dir, &dir, &mut store, today()).unwrap_err();
        assert_eq!(err, RosterError::NoConstraintConfigured);
    }

    #[test]
    fn test_infeasible_detected_up_front() {
        let dir = InMemoryDirectory::new()
            .with_employees(staff(30))
            .with_constraint(WfhConstraint::new(4, 6));
        let mut store = InMemoryScheduleStore::default();
        let err = planner().generate(&dir, &dir, &mut store, today()).unwrap_err();
        assert!(matches!(err, RosterError::InfeasibleConstraints { employees: 30, .. }));
    }

    #[test]
    fn test_source_error_propagates() {
        let dir = InMemoryDirectory::new().with_constraint(WfhConstraint::new(4, 3));
        let mut store = InMemoryScheduleStore::default();
        let err = planner()
            .generate(&BrokenSource, &dir, &mut store, today())
            .unwrap_err();
        assert!(matches!(err, RosterError::Source(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dir = InMemoryDirectory::new()
            .with_employees(staff(4))
            .with_constraint(WfhConstraint::new(4, 6));
        let mut store = InMemoryScheduleStore::default();
        let planner = WfhPlanner::new(GaConfig::default().with_days(0));
        let err = planner.generate(&dir, &dir, &mut store, today()).unwrap_err();
        assert!(matches!(err, RosterError::InvalidConfig(_)));
    }
}
