//! Needs a Gurobi installation and license; run with
//! `--features gurobi-solver`.

#![cfg(feature = "gurobi-solver")]

mod common;

use mip_bridge::{GurobiSolver, Solver};

fn solver() -> GurobiSolver {
    common::init_logging();
    GurobiSolver::new().unwrap()
}

#[test]
fn test_minimize_with_bounds() {
    common::check_minimize_with_bounds(&mut solver());
}

#[test]
fn test_value_count_matches_declaration() {
    common::check_value_count_matches_declaration(&mut solver());
}

#[test]
fn test_two_sided_constraint_sign() {
    common::check_two_sided_constraint_sign(&mut solver());
}

#[test]
fn test_binary_maximized_to_one() {
    common::check_binary_maximized_to_one(&mut solver());
}

#[test]
fn test_integer_rounding() {
    common::check_integer_rounding(&mut solver());
}

#[test]
fn test_equality() {
    common::check_equality(&mut solver());
}

#[test]
fn test_unbounded_variable_bounds() {
    common::check_unbounded_variable_bounds(&mut solver());
}

#[test]
fn test_objective_constant() {
    common::check_objective_constant(&mut solver());
}

#[test]
fn test_infeasible() {
    common::check_infeasible(&mut solver());
}

#[test]
fn test_unbounded_objective() {
    common::check_unbounded_objective(&mut solver());
}

#[test]
fn test_same_variable_on_both_sides() {
    common::check_same_variable_on_both_sides(&mut solver());
}

#[test]
fn test_rejected_constraint_fails_every_optimize() {
    common::check_rejected_constraint_fails_every_optimize(&mut solver());
}

#[test]
fn test_reads_are_idempotent() {
    common::check_reads_are_idempotent(&mut solver());
}

#[test]
fn test_last_objective_wins() {
    common::check_last_objective_wins(&mut solver());
}

#[test]
fn test_replaced_objective_drops_old_terms() {
    common::check_replaced_objective_drops_old_terms(&mut solver());
}

#[test]
fn test_settings_do_not_change_result() {
    common::check_settings_do_not_change_result(&mut solver());
}

#[test]
fn test_declaring_twice_is_reported() {
    common::check_declaring_twice_is_reported(&mut solver());
}

#[test]
fn test_name() {
    assert_eq!(solver().name(), "Gurobi");
}
