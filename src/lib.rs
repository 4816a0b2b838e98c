//! # mip-bridge
//!
//! One interface for building and solving mixed-integer programs, with
//! interchangeable solver backends.
//!
//! Every backend implements [`Solver`]. A caller picks a backend once
//! (see [`create_solver`]), then issues the four-call protocol:
//! declare variables, add constraints, set the objective, optimize.
//!
//! ## Example
//!
//! ```no_run
//! use mip_bridge::{create_solver, ConstraintSense, LinearExpr, ObjectiveSense, SolverType, VarKind};
//!
//! fn main() -> Result<(), mip_bridge::MipError> {
//!     let mut solver = create_solver(SolverType::Highs)?;
//!
//!     // 0 <= x <= 10, continuous
//!     solver.declare_variables(&[0.0], &[10.0], &[VarKind::Continuous]);
//!
//!     // x >= 5
//!     solver.add_constraint(
//!         &LinearExpr::term(1.0, 0),
//!         &LinearExpr::constant(5.0),
//!         ConstraintSense::GreaterEqual,
//!     );
//!     solver.set_objective(&LinearExpr::term(1.0, 0), ObjectiveSense::Minimize);
//!
//!     let solution = solver.optimize();
//!     println!("x = {}", solution.value(0)?);
//!     Ok(())
//! }
//! ```
//!
//! The [`model`] module offers a higher-level builder on top of the same
//! contract.

pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod model;
pub mod models;

pub use config::SolverConfig;
pub use domain::solution::Solution;
pub use domain::solver::Solver;
pub use domain::solver_factory::{create_configured_solver, create_solver, SolverType};
pub use error::{MipError, Result};
pub use model::{Model, Var};
pub use models::{Constraint, ConstraintSense, LinearExpr, Objective, ObjectiveSense, VarKind};

#[cfg(feature = "highs-solver")]
pub use domain::solvers::HighsSolver;

#[cfg(feature = "gurobi-solver")]
pub use domain::solvers::GurobiSolver;
