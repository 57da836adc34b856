//! Roster quality metrics (KPIs).
//!
//! Summarizes how well a roster meets the daily target and how evenly it
//! spreads WFH days.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Daily deviation | Σ \|day_total - max_wfh_per_day\| |
//! | Days on target | Days whose total equals the cap |
//! | Min / Max per employee | Extremes of WFH days per employee |
//! | Spread | max - min |
//! | Std deviation | Population std-dev of WFH days around the fair mean |

use std::collections::HashMap;

use crate::models::{Roster, WfhConstraint};

/// Roster performance indicators.
#[derive(Debug, Clone)]
pub struct RosterKpi {
    /// WFH head count per day index.
    pub wfh_per_day: Vec<usize>,
    /// WFH days per employee.
    pub wfh_by_employee: HashMap<String, usize>,
    /// Sum of absolute deviations from the daily cap.
    pub daily_deviation: usize,
    /// Number of days exactly at the cap.
    pub days_on_target: usize,
    /// Fewest WFH days of any employee.
    pub min_per_employee: usize,
    /// Most WFH days of any employee.
    pub max_per_employee: usize,
    /// Fair share `max_wfh_per_day * days / employees`.
    pub mean_wfh: f64,
    /// Std-dev of per-employee WFH days around `mean_wfh`.
    pub std_dev: f64,
}

impl RosterKpi {
    /// Computes KPIs for a roster under a constraint.
    pub fn calculate(roster: &Roster, constraint: &WfhConstraint) -> Self {
        let days = roster.day_count();
        let wfh_per_day: Vec<usize> = (0..days).map(|d| roster.wfh_on_day(d)).collect();

        let daily_deviation = wfh_per_day
            .iter()
            .map(|&t| t.abs_diff(constraint.max_wfh_per_day))
            .sum();
        let days_on_target = wfh_per_day
            .iter()
            .filter(|&&t| t == constraint.max_wfh_per_day)
            .count();

        let counts: Vec<usize> = roster.entries.iter().map(|e| e.wfh_count()).collect();
        let mean_wfh = constraint.mean_wfh(days, counts.len());
        let std_dev = if counts.is_empty() {
            0.0
        } else {
            let var: f64 = counts
                .iter()
                .map(|&n| (n as f64 - mean_wfh).powi(2))
                .sum::<f64>()
                / counts.len() as f64;
            var.sqrt()
        };

        Self {
            wfh_by_employee: roster
                .entries
                .iter()
                .map(|e| (e.employee_id.clone(), e.wfh_count()))
                .collect(),
            min_per_employee: counts.iter().copied().min().unwrap_or(0),
            max_per_employee: counts.iter().copied().max().unwrap_or(0),
            wfh_per_day,
            daily_deviation,
            days_on_target,
            mean_wfh,
            std_dev,
        }
    }

    /// Spread between the busiest and the least-served employee.
    pub fn spread(&self) -> usize {
        self.max_per_employee - self.min_per_employee
    }

    /// Whether every day is on target and the spread is within `max_spread`.
    pub fn meets_thresholds(&self, max_spread: usize) -> bool {
        self.daily_deviation == 0 && self.spread() <= max_spread
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RosterEntry;

    fn roster(layout: &[(&str, &str)]) -> Roster {
        let mut r = Roster::new();
        for (id, days) in layout {
            r.add_entry(RosterEntry::new(*id, days.chars().map(|c| c == '1').collect()));
        }
        r
    }

    #[test]
    fn test_balanced_roster() {
        let r = roster(&[("E1", "111000"), ("E2", "111000"), ("E3", "000111"), ("E4", "000111")]);
        let kpi = RosterKpi::calculate(&r, &WfhConstraint::new(2, 3));

        assert_eq!(kpi.wfh_per_day, vec![2; 6]);
        assert_eq!(kpi.daily_deviation, 0);
        assert_eq!(kpi.days_on_target, 6);
        assert_eq!(kpi.spread(), 0);
        assert!((kpi.mean_wfh - 3.0).abs() < 1e-10);
        assert!(kpi.std_dev.abs() < 1e-10);
        assert!(kpi.meets_thresholds(0));
    }

    #[test]
    fn test_skewed_roster() {
        let r = roster(&[("E1", "111"), ("E2", "100")]);
        let kpi = RosterKpi::calculate(&r, &WfhConstraint::new(1, 3));

        assert_eq!(kpi.wfh_per_day, vec![2, 1, 1]);
        assert_eq!(kpi.daily_deviation, 1);
        assert_eq!(kpi.days_on_target, 2);
        assert_eq!(kpi.wfh_by_employee["E1"], 3);
        assert_eq!(kpi.min_per_employee, 1);
        assert_eq!(kpi.max_per_employee, 3);
        // mean 1.5, deviations 1.5 and 0.5
        assert!((kpi.std_dev - (1.25f64).sqrt()).abs() < 1e-10);
        assert!(!kpi.meets_thresholds(5));
    }

    #[test]
    fn test_empty_roster() {
        let kpi = RosterKpi::calculate(&Roster::new(), &WfhConstraint::new(1, 1));
        assert!(kpi.wfh_per_day.is_empty());
        assert_eq!(kpi.spread(), 0);
        assert_eq!(kpi.std_dev, 0.0);
    }
}
