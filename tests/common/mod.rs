//! Backend-independent checks, run once per solver backend.

#![allow(dead_code)]

use mip_bridge::{ConstraintSense, LinearExpr, ObjectiveSense, Solution, Solver, VarKind};

pub const TOLERANCE: f64 = 1e-6;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn x() -> LinearExpr {
    LinearExpr::term(1.0, 0)
}

fn k(value: f64) -> LinearExpr {
    LinearExpr::constant(value)
}

/// minimize x subject to x >= 5, x <= 10
fn solve_bounded_min(solver: &mut dyn Solver) -> Solution {
    solver.declare_variables(&[0.0], &[20.0], &[VarKind::Continuous]);
    solver.add_constraint(&x(), &k(5.0), ConstraintSense::GreaterEqual);
    solver.add_constraint(&x(), &k(10.0), ConstraintSense::LessEqual);
    solver.set_objective(&x(), ObjectiveSense::Minimize);
    solver.optimize()
}

pub fn check_minimize_with_bounds(solver: &mut dyn Solver) {
    let solution = solve_bounded_min(solver);
    assert!(solution.is_optimal(), "{}", solution.error_message());
    assert_eq!(solution.error_code(), 0);
    assert_close(solution.value(0).unwrap(), 5.0);
    assert_close(solution.objective(), 5.0);
}

pub fn check_value_count_matches_declaration(solver: &mut dyn Solver) {
    let lower = [0.0, -5.0, 0.0, 1.0];
    let upper = [4.0, 5.0, 1.0, 1.0];
    let kinds = [
        VarKind::Continuous,
        VarKind::Integer,
        VarKind::Binary,
        VarKind::Continuous,
    ];
    solver.declare_variables(&lower, &upper, &kinds);

    // Pin each variable to a distinct value so the order is observable
    for (index, target) in [3.5, -2.0, 1.0, 1.0].into_iter().enumerate() {
        solver.add_constraint(
            &LinearExpr::term(1.0, index),
            &k(target),
            ConstraintSense::Equal,
        );
    }
    let solution = solver.optimize();

    assert!(solution.is_optimal(), "{}", solution.error_message());
    assert_eq!(solution.values().len(), 4);
    assert_close(solution.value(0).unwrap(), 3.5);
    assert_close(solution.value(1).unwrap(), -2.0);
    assert_close(solution.value(2).unwrap(), 1.0);
    assert_close(solution.value(3).unwrap(), 1.0);
    assert!(solution.value(4).is_err());
}

/// 3x + 2 <= y - 1 with x, y in [0, 10]; maximizing x gives x = 7/3, y = 10.
pub fn check_two_sided_constraint_sign(solver: &mut dyn Solver) {
    solver.declare_variables(
        &[0.0, 0.0],
        &[10.0, 10.0],
        &[VarKind::Continuous, VarKind::Continuous],
    );
    solver.add_constraint(
        &LinearExpr::new(vec![3.0], vec![0], 2.0),
        &LinearExpr::new(vec![1.0], vec![1], -1.0),
        ConstraintSense::LessEqual,
    );
    solver.set_objective(&x(), ObjectiveSense::Maximize);
    let solution = solver.optimize();

    assert!(solution.is_optimal(), "{}", solution.error_message());
    assert_close(solution.value(0).unwrap(), 7.0 / 3.0);
    assert_close(solution.value(1).unwrap(), 10.0);
}

pub fn check_binary_maximized_to_one(solver: &mut dyn Solver) {
    // Declared bounds wider than [0, 1] must not leak through
    solver.declare_variables(&[0.0], &[5.0], &[VarKind::Binary]);
    solver.set_objective(&x(), ObjectiveSense::Maximize);
    let solution = solver.optimize();

    assert!(solution.is_optimal(), "{}", solution.error_message());
    assert_close(solution.value(0).unwrap(), 1.0);
    assert!(solution.is_one(0).unwrap());
}

pub fn check_integer_rounding(solver: &mut dyn Solver) {
    // maximize x subject to 2x <= 7, x integer
    solver.declare_variables(&[0.0], &[10.0], &[VarKind::Integer]);
    solver.add_constraint(
        &LinearExpr::term(2.0, 0),
        &k(7.0),
        ConstraintSense::LessEqual,
    );
    solver.set_objective(&x(), ObjectiveSense::Maximize);
    let solution = solver.optimize();

    assert!(solution.is_optimal(), "{}", solution.error_message());
    assert_close(solution.value(0).unwrap(), 3.0);
    assert!(solution.gap() <= 1e-4);
}

pub fn check_equality(solver: &mut dyn Solver) {
    solver.declare_variables(&[0.0], &[10.0], &[VarKind::Continuous]);
    solver.add_constraint(&x(), &k(7.0), ConstraintSense::Equal);
    solver.set_objective(&x(), ObjectiveSense::Minimize);
    let solution = solver.optimize();

    assert!(solution.is_optimal(), "{}", solution.error_message());
    assert_close(solution.value(0).unwrap(), 7.0);
}

pub fn check_unbounded_variable_bounds(solver: &mut dyn Solver) {
    solver.declare_variables(
        &[f64::NEG_INFINITY],
        &[f64::INFINITY],
        &[VarKind::Continuous],
    );
    solver.add_constraint(&x(), &k(-3.0), ConstraintSense::Equal);
    solver.set_objective(&x(), ObjectiveSense::Minimize);
    let solution = solver.optimize();

    assert!(solution.is_optimal(), "{}", solution.error_message());
    assert_close(solution.value(0).unwrap(), -3.0);
}

pub fn check_objective_constant(solver: &mut dyn Solver) {
    solver.declare_variables(&[0.0], &[4.0], &[VarKind::Continuous]);
    solver.set_objective(
        &LinearExpr::new(vec![2.0], vec![0], 10.0),
        ObjectiveSense::Maximize,
    );
    let solution = solver.optimize();

    assert!(solution.is_optimal(), "{}", solution.error_message());
    assert_close(solution.objective(), 18.0);
}

pub fn check_infeasible(solver: &mut dyn Solver) {
    solver.declare_variables(&[0.0], &[10.0], &[VarKind::Continuous]);
    solver.add_constraint(&x(), &k(5.0), ConstraintSense::GreaterEqual);
    solver.add_constraint(&x(), &k(2.0), ConstraintSense::LessEqual);
    solver.set_objective(&x(), ObjectiveSense::Minimize);
    let solution = solver.optimize();

    assert!(!solution.is_optimal());
    assert_ne!(solution.error_code(), 0);
    assert!(!solution.error_message().trim().is_empty());
}

pub fn check_unbounded_objective(solver: &mut dyn Solver) {
    solver.declare_variables(&[0.0], &[f64::INFINITY], &[VarKind::Continuous]);
    solver.set_objective(&x(), ObjectiveSense::Maximize);
    let solution = solver.optimize();

    assert!(!solution.is_optimal());
    assert!(!solution.is_ok());
    assert_ne!(solution.error_code(), 0);
    assert!(solution.values().is_empty());
    assert_ne!(solution.error_message(), mip_bridge::domain::solution::NO_ERROR_MESSAGE);
}

/// 2x <= x + 3 with x in [0, 10]; maximizing x gives 3.
pub fn check_same_variable_on_both_sides(solver: &mut dyn Solver) {
    solver.declare_variables(&[0.0], &[10.0], &[VarKind::Continuous]);
    solver.add_constraint(
        &LinearExpr::term(2.0, 0),
        &LinearExpr::new(vec![1.0], vec![0], 3.0),
        ConstraintSense::LessEqual,
    );
    solver.set_objective(&x(), ObjectiveSense::Maximize);
    let solution = solver.optimize();

    assert!(solution.is_optimal(), "{}", solution.error_message());
    assert_close(solution.value(0).unwrap(), 3.0);
}

pub fn check_rejected_constraint_fails_every_optimize(solver: &mut dyn Solver) {
    solver.declare_variables(&[0.0], &[10.0], &[VarKind::Continuous]);
    solver.add_constraint(
        &LinearExpr::term(1.0, 7),
        &k(1.0),
        ConstraintSense::LessEqual,
    );
    solver.set_objective(&x(), ObjectiveSense::Maximize);

    let first = solver.optimize();
    let second = solver.optimize();

    for solution in [&first, &second] {
        assert!(!solution.is_optimal());
        assert!(!solution.is_ok());
        assert!(solution.values().is_empty());
        assert!(solution.error_message().contains("out of bounds"));
    }
    assert_eq!(first, second);
}

pub fn check_reads_are_idempotent(solver: &mut dyn Solver) {
    let solution = solve_bounded_min(solver);

    let first = (
        solution.values().to_vec(),
        solution.objective(),
        solution.gap(),
        solution.is_optimal(),
        solution.error_code(),
        solution.error_message().to_string(),
    );
    let second = (
        solution.values().to_vec(),
        solution.objective(),
        solution.gap(),
        solution.is_optimal(),
        solution.error_code(),
        solution.error_message().to_string(),
    );
    assert_eq!(first, second);
    assert_eq!(solution.value(0), solution.value(0));
}

pub fn check_last_objective_wins(solver: &mut dyn Solver) {
    solver.declare_variables(&[0.0], &[20.0], &[VarKind::Continuous]);
    solver.add_constraint(&x(), &k(5.0), ConstraintSense::GreaterEqual);
    solver.add_constraint(&x(), &k(10.0), ConstraintSense::LessEqual);
    solver.set_objective(&x(), ObjectiveSense::Minimize);
    solver.set_objective(&x(), ObjectiveSense::Maximize);
    let solution = solver.optimize();

    assert!(solution.is_optimal(), "{}", solution.error_message());
    assert_close(solution.value(0).unwrap(), 10.0);
}

pub fn check_replaced_objective_drops_old_terms(solver: &mut dyn Solver) {
    // First objective pushes y up; the second one ignores y entirely
    solver.declare_variables(
        &[0.0, 0.0],
        &[1.0, 1.0],
        &[VarKind::Binary, VarKind::Binary],
    );
    solver.add_constraint(
        &LinearExpr::new(vec![1.0, 1.0], vec![0, 1], 0.0),
        &k(1.0),
        ConstraintSense::LessEqual,
    );
    solver.set_objective(&LinearExpr::term(1.0, 1), ObjectiveSense::Maximize);
    solver.set_objective(&LinearExpr::term(1.0, 0), ObjectiveSense::Maximize);
    let solution = solver.optimize();

    assert!(solution.is_optimal(), "{}", solution.error_message());
    assert_close(solution.value(0).unwrap(), 1.0);
    assert_close(solution.value(1).unwrap(), 0.0);
}

pub fn check_settings_do_not_change_result(solver: &mut dyn Solver) {
    solver.show_log(false);
    solver.set_time_limit(30.0);
    check_minimize_with_bounds(solver);
}

pub fn check_declaring_twice_is_reported(solver: &mut dyn Solver) {
    solver.declare_variables(&[0.0], &[1.0], &[VarKind::Continuous]);
    solver.declare_variables(&[0.0], &[1.0], &[VarKind::Continuous]);
    let solution = solver.optimize();

    assert!(!solution.is_optimal());
    assert!(!solution.is_ok());
    assert!(solution.error_message().contains("declared more than once"));
}
