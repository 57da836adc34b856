//! Binary employee × day chromosome for WFH rostering.
//!
//! # Encoding
//!
//! One row per employee (in employee-list order), one boolean per day of
//! the planning window. `true` means the employee works from home that day.
//!
//! # Validity
//!
//! A chromosome is valid iff every row has at least one `true` and every
//! day column sums to exactly `max_wfh_per_day`. The per-employee cap is
//! only honoured while building the initial population.
//!
//! Operators never mutate their inputs; each returns a fresh chromosome.

use rand::Rng;

use super::sampling::sample_where;
use crate::error::{Result, RosterError};
use crate::models::{Roster, RosterEntry, WfhConstraint};

/// Employee × day WFH flag matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RosterChromosome {
    rows: Vec<Vec<bool>>,
}

impl RosterChromosome {
    /// All-office chromosome (every flag `false`).
    pub fn empty(employees: usize, days: usize) -> Self {
        Self {
            rows: vec![vec![false; days]; employees],
        }
    }

    /// Builds a chromosome from explicit rows.
    ///
    /// Rows are expected to share one length; the first row defines the
    /// day count.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    /// Rows in employee order.
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Number of employees (rows).
    #[inline]
    pub fn employee_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of days (columns).
    #[inline]
    pub fn day_count(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    /// Whether `employee` works from home on `day`.
    #[inline]
    pub fn is_wfh(&self, employee: usize, day: usize) -> bool {
        self.rows[employee][day]
    }

    /// WFH days of one employee (row sum).
    pub fn wfh_count(&self, employee: usize) -> usize {
        self.rows[employee].iter().filter(|&&d| d).count()
    }

    /// WFH head count of one day (column sum).
    pub fn day_total(&self, day: usize) -> usize {
        self.rows.iter().filter(|row| row[day]).count()
    }

    /// Row sums for every employee.
    pub fn wfh_counts(&self) -> Vec<usize> {
        (0..self.employee_count()).map(|e| self.wfh_count(e)).collect()
    }

    /// Column sums for every day.
    pub fn day_totals(&self) -> Vec<usize> {
        let mut totals = vec![0; self.day_count()];
        for row in &self.rows {
            for (day, &wfh) in row.iter().enumerate() {
                if wfh {
                    totals[day] += 1;
                }
            }
        }
        totals
    }

    /// Admission check: every employee has ≥1 WFH day and every day has
    /// exactly `max_wfh_per_day` WFH employees.
    pub fn is_valid(&self, constraint: &WfhConstraint) -> bool {
        if self.rows.iter().any(|row| !row.iter().any(|&d| d)) {
            return false;
        }
        self.day_totals()
            .iter()
            .all(|&total| total == constraint.max_wfh_per_day)
    }

    /// Re-keys the chromosome by employee ID.
    ///
    /// `employee_ids` must be in the same order used to build the rows.
    pub fn to_roster(&self, employee_ids: &[String]) -> Roster {
        let mut roster = Roster::new();
        for (id, row) in employee_ids.iter().zip(&self.rows) {
            roster.add_entry(RosterEntry::new(id.clone(), row.clone()));
        }
        roster
    }

    fn set(&mut self, employee: usize, day: usize, wfh: bool) {
        self.rows[employee][day] = wfh;
    }

    /// Builds one initial individual.
    ///
    /// # Algorithm
    /// 1. Fairness pass: each employee gets one random day whose column is
    ///    still below the daily cap.
    /// 2. Fill pass: each day is topped up to the cap with random employees
    ///    who are below `max_wfh_per_employee` and not yet WFH that day.
    ///    When nobody below the personal cap is left, the cap is relaxed
    ///    and any employee not yet WFH that day is taken.
    ///
    /// Random picks re-roll up to `attempts` times before scanning all
    /// eligible candidates.
    ///
    /// # Errors
    /// [`RosterError::InitializationStalled`] if no day (fairness pass) or
    /// no employee (fill pass) is eligible. Neither happens for feasible
    /// constraints.
    pub fn random<R: Rng>(
        employees: usize,
        days: usize,
        constraint: &WfhConstraint,
        attempts: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let cap = constraint.max_wfh_per_day;
        let mut ch = Self::empty(employees, days);
        let mut running = vec![0usize; employees];
        let mut totals = vec![0usize; days];

        for employee in 0..employees {
            let day = sample_where(days, attempts, rng, |d| totals[d] < cap).ok_or(
                RosterError::InitializationStalled {
                    what: "day",
                    attempts,
                },
            )?;
            ch.set(employee, day, true);
            totals[day] += 1;
            running[employee] += 1;
        }

        for day in 0..days {
            while totals[day] < cap {
                let picked = sample_where(employees, attempts, rng, |e| {
                    running[e] < constraint.max_wfh_per_employee && !ch.rows[e][day]
                })
                .or_else(|| sample_where(employees, 0, rng, |e| !ch.rows[e][day]));

                let employee = picked.ok_or(RosterError::InitializationStalled {
                    what: "employee",
                    attempts,
                })?;
                ch.set(employee, day, true);
                totals[day] += 1;
                running[employee] += 1;
            }
        }

        Ok(ch)
    }
}

// ======================== Repair ========================

/// Fair-distribution repair.
///
/// Every employee without a WFH day gets the first day (in order) whose
/// column is still below `max_wfh_per_day`. Over-full days and
/// over-allocated employees are left alone.
pub fn repair(chromosome: &RosterChromosome, max_wfh_per_day: usize) -> RosterChromosome {
    let mut out = chromosome.clone();
    let missing: Vec<usize> = (0..out.employee_count())
        .filter(|&e| out.wfh_count(e) == 0)
        .collect();

    for employee in missing {
        if let Some(day) = (0..out.day_count()).find(|&d| out.day_total(d) < max_wfh_per_day) {
            out.set(employee, day, true);
        }
    }
    out
}

// ======================== Crossover ========================

/// Per-employee single-point crossover followed by [`repair`].
///
/// Each employee row gets its own cut point in `[1, days - 1]`:
/// child 1 takes parent 1's prefix and parent 2's suffix, child 2 the
/// reverse. With fewer than two days no cut point exists and the parents
/// are returned unchanged.
pub fn per_employee_crossover<R: Rng>(
    p1: &RosterChromosome,
    p2: &RosterChromosome,
    max_wfh_per_day: usize,
    rng: &mut R,
) -> (RosterChromosome, RosterChromosome) {
    let days = p1.day_count();
    if days < 2 || p1.employee_count() != p2.employee_count() {
        return (p1.clone(), p2.clone());
    }

    let mut c1 = Vec::with_capacity(p1.employee_count());
    let mut c2 = Vec::with_capacity(p1.employee_count());
    for (r1, r2) in p1.rows.iter().zip(&p2.rows) {
        let point = rng.random_range(1..days);
        c1.push([&r1[..point], &r2[point..]].concat());
        c2.push([&r2[..point], &r1[point..]].concat());
    }

    (
        repair(&RosterChromosome::from_rows(c1), max_wfh_per_day),
        repair(&RosterChromosome::from_rows(c2), max_wfh_per_day),
    )
}

// ======================== Mutation ========================

/// Bit-flip mutation with a targeted pre-repair.
///
/// First every employee without a WFH day is given one random day whose
/// column is below `max_wfh_per_day`. Then each employee, with probability
/// `rate`, has one random day flipped.
///
/// # Errors
/// [`RosterError::RepairExhausted`] if an employee has no WFH day and
/// every column is already at the cap.
pub fn flip_mutation<R: Rng>(
    chromosome: &RosterChromosome,
    max_wfh_per_day: usize,
    rate: f64,
    attempts: usize,
    rng: &mut R,
) -> Result<RosterChromosome> {
    let mut out = chromosome.clone();
    let days = out.day_count();
    let missing: Vec<usize> = (0..out.employee_count())
        .filter(|&e| out.wfh_count(e) == 0)
        .collect();

    for employee in missing {
        let day = sample_where(days, attempts, rng, |d| out.day_total(d) < max_wfh_per_day)
            .ok_or(RosterError::RepairExhausted { employee })?;
        out.set(employee, day, true);
    }

    if days == 0 {
        return Ok(out);
    }
    for employee in 0..out.employee_count() {
        if rng.random_bool(rate) {
            let day = rng.random_range(0..days);
            let flipped = !out.is_wfh(employee, day);
            out.set(employee, day, flipped);
        }
    }
    Ok(out)
}
