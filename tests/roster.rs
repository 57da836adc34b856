use chrono::NaiveDate;
use u_roster::ga::{GaConfig, GaRunner, RosterChromosome, RosterProblem, Selection};
use u_roster::models::{Employee, WfhConstraint};
use u_roster::planner::{InMemoryDirectory, InMemoryScheduleStore, ScheduleStore, WfhPlanner};

fn staff(n: usize) -> Vec<Employee> {
    (1..=n).map(|i| Employee::new(format!("E{i}"))).collect()
}

fn rows(layout: &[&str]) -> RosterChromosome {
    RosterChromosome::from_rows(
        layout
            .iter()
            .map(|r| r.chars().map(|c| c == '1').collect())
            .collect(),
    )
}

#[test]
fn test_full_staff_every_day_is_found_immediately() {
    let config = GaConfig::default().with_seed(11);
    let constraint = WfhConstraint::new(4, 6);
    let problem = RosterProblem::new(&staff(4), constraint.clone(), &config);

    let result = GaRunner::run(&problem, &config).unwrap();
    assert_eq!(result.best, rows(&["111111"; 4]));
    assert_eq!(result.best_fitness, 0.0);
    assert_eq!(result.best_generation, 0);
}

#[test]
fn test_optimizer_beats_skewed_roster() {
    let config = GaConfig::default().with_seed(2024);
    let constraint = WfhConstraint::new(4, 3);
    let problem = RosterProblem::new(&staff(10), constraint.clone(), &config);

    // One employee home all week, another repaired up to a single day
    let skewed = rows(&[
        "111111", "100000", "100101", "100100", "010100", "010010", "010010", "001010",
        "001001", "001001",
    ]);
    assert!(problem.is_valid(&skewed));
    let skewed_score = problem.evaluate(&skewed);
    assert!((skewed_score + 16.4).abs() < 1e-9);

    let result = GaRunner::run(&problem, &config).unwrap();
    assert!(result.best.is_valid(&constraint));
    assert!(result.best_fitness > skewed_score);
    assert!(result.best.wfh_counts().iter().all(|&n| n >= 1));
}

#[test]
fn test_winners_satisfy_hard_invariants_across_seeds() {
    let constraint = WfhConstraint::new(3, 4);
    for seed in 0..8 {
        for selection in [Selection::Roulette, Selection::LegacyRoulette] {
            let config = GaConfig::default()
                .with_generations(15)
                .with_selection(selection)
                .with_seed(seed);
            let problem = RosterProblem::new(&staff(7), constraint.clone(), &config);
            let result = GaRunner::run(&problem, &config).unwrap();

            assert!(result.best.day_totals().iter().all(|&t| t == 3));
            assert!(result.best.wfh_counts().iter().all(|&n| n >= 1));
        }
    }
}

#[test]
fn test_large_staff_with_default_config() {
    for (n, constraint) in [(60, WfhConstraint::new(10, 1)), (100, WfhConstraint::new(17, 2))] {
        for seed in 0..5 {
            let config = GaConfig::default().with_seed(seed);
            let problem = RosterProblem::new(&staff(n), constraint.clone(), &config);
            let result = GaRunner::run(&problem, &config).unwrap();

            assert!(result.best.is_valid(&constraint));
            assert_eq!(result.fitness_history.len(), 51);
            assert!(result.best_fitness >= result.fitness_history[0]);
        }
    }
}

#[test]
fn test_evolution_reaches_balanced_optimum() {
    // Four employees on 3 days and six on 2 is the best split of 24 slots
    let optimum = -2.4;
    let constraint = WfhConstraint::new(4, 3);
    let mut reached = false;
    for seed in 0..6 {
        let config = GaConfig::default()
            .with_population_size(30)
            .with_generations(100)
            .with_seed(seed);
        let problem = RosterProblem::new(&staff(10), constraint.clone(), &config);
        let result = GaRunner::run(&problem, &config).unwrap();

        assert!(result.best_fitness >= result.fitness_history[0]);
        assert!(result.best_fitness <= optimum + 1e-9);
        if (result.best_fitness - optimum).abs() < 1e-9 {
            let mut counts = result.best.wfh_counts();
            counts.sort_unstable();
            assert_eq!(counts, vec![2, 2, 2, 2, 2, 2, 3, 3, 3, 3]);
            reached = true;
        }
    }
    assert!(reached);
}

#[test]
fn test_same_seed_same_roster() {
    let config = GaConfig::default().with_population_size(16).with_seed(77);
    let problem = RosterProblem::new(&staff(12), WfhConstraint::new(5, 3), &config);

    let a = GaRunner::run(&problem, &config).unwrap();
    let b = GaRunner::run(&problem, &config).unwrap();
    assert_eq!(a.best, b.best);
    assert_eq!(a.best_fitness, b.best_fitness);
}

#[test]
fn test_planner_with_json_config() {
    let config: GaConfig =
        serde_json::from_str(r#"{"population_size": 12, "generations": 20, "seed": 9}"#).unwrap();
    let employees = staff(10);
    let directory = InMemoryDirectory::new()
        .with_employees(employees.clone())
        .with_constraint(WfhConstraint::new(4, 3).with_rule_name("Default rotation"));
    let mut store = InMemoryScheduleStore::new(&employees);

    let today = NaiveDate::from_ymd_opt(2024, 11, 30).unwrap(); // Saturday
    let outcome = WfhPlanner::new(config)
        .generate(&directory, &directory, &mut store, today)
        .unwrap();

    assert_eq!(outcome.week_start, NaiveDate::from_ymd_opt(2024, 11, 25).unwrap());
    assert_eq!(store.all().len(), 60);
    assert_eq!(outcome.roster.entries.len(), 10);
    assert!(outcome.kpi.meets_thresholds(outcome.kpi.spread()));

    let saturday = store.on_date(today);
    assert_eq!(saturday.iter().filter(|r| r.is_wfh).count(), 4);
}
