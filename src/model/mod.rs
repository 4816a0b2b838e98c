//! Caller-side modelling layer.
//!
//! A [`Model`] collects variables, constraints and an objective in memory
//! and replays them against any [`Solver`] when optimized, so the same
//! model can be solved by several backends.

pub mod expr;
pub mod var;

use std::time::Duration;

use log::info;

use crate::domain::solution::Solution;
use crate::domain::solver::Solver;
use crate::domain::solver_factory::{create_solver, SolverType};
use crate::error::MipError;
use crate::models::{Constraint, LinearExpr, Objective, ObjectiveSense, VarKind};

pub use expr::{dot, sum, sum_col, sum_row, sum_vars};
pub use var::Var;

#[derive(Debug, Clone, Default)]
pub struct Model {
    vars: Vec<Var>,
    constrs: Vec<Constraint>,
    objective: Option<Objective>,
    show_log: Option<bool>,
    time_limit: Option<Duration>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the solver to print its own log (or not). Left to the solver's
    /// setting when never called.
    pub fn show_log(&mut self, should_show: bool) {
        self.show_log = Some(should_show);
    }

    pub fn set_time_limit(&mut self, limit: Duration) {
        self.time_limit = Some(limit);
    }

    pub fn add_var(&mut self, lower: f64, upper: f64, kind: VarKind) -> Var {
        let var = Var::new(self.vars.len(), lower, upper, kind);
        self.vars.push(var);
        var
    }

    pub fn add_binary_var(&mut self) -> Var {
        self.add_var(0.0, 1.0, VarKind::Binary)
    }

    pub fn add_var_vector(&mut self, num: usize, lower: f64, upper: f64, kind: VarKind) -> Vec<Var> {
        (0..num).map(|_| self.add_var(lower, upper, kind)).collect()
    }

    pub fn add_binary_var_vector(&mut self, num: usize) -> Vec<Var> {
        self.add_var_vector(num, 0.0, 1.0, VarKind::Binary)
    }

    /// `rows x cols` variables, declared row by row.
    pub fn add_var_matrix(
        &mut self,
        rows: usize,
        cols: usize,
        lower: f64,
        upper: f64,
        kind: VarKind,
    ) -> Vec<Vec<Var>> {
        (0..rows)
            .map(|_| self.add_var_vector(cols, lower, upper, kind))
            .collect()
    }

    pub fn add_binary_var_matrix(&mut self, rows: usize, cols: usize) -> Vec<Vec<Var>> {
        self.add_var_matrix(rows, cols, 0.0, 1.0, VarKind::Binary)
    }

    pub fn add_constr(&mut self, constr: Constraint) {
        self.constrs.push(constr);
    }

    /// Replace the objective.
    pub fn set_objective(&mut self, expr: impl Into<LinearExpr>, sense: ObjectiveSense) {
        self.objective = Some(Objective::new(expr.into(), sense));
    }

    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    pub fn num_constrs(&self) -> usize {
        self.constrs.len()
    }

    pub fn objective(&self) -> Option<&Objective> {
        self.objective.as_ref()
    }

    /// Solve with a fresh solver of the given type.
    pub fn optimize(&self, solver_type: SolverType) -> Result<Solution, MipError> {
        let mut solver = create_solver(solver_type)?;
        self.optimize_with(solver.as_mut())
    }

    /// Replay the model into `solver` and solve it.
    ///
    /// A solution carrying a backend error code is returned as
    /// [`MipError::Solve`]; a non-optimal solution without an error code
    /// (e.g. time limit with an incumbent) is returned as `Ok`.
    pub fn optimize_with(&self, solver: &mut dyn Solver) -> Result<Solution, MipError> {
        info!(
            "Optimizing model with {} variables and {} constraints using {}",
            self.vars.len(),
            self.constrs.len(),
            solver.name()
        );

        if let Some(should_show) = self.show_log {
            solver.show_log(should_show);
        }
        if let Some(limit) = self.time_limit.filter(|limit| !limit.is_zero()) {
            solver.set_time_limit(limit.as_secs_f64());
        }

        let lower: Vec<f64> = self.vars.iter().map(Var::lower).collect();
        let upper: Vec<f64> = self.vars.iter().map(Var::upper).collect();
        let kinds: Vec<VarKind> = self.vars.iter().map(Var::kind).collect();
        solver.declare_variables(&lower, &upper, &kinds);

        for constr in &self.constrs {
            solver.add_constraint(&constr.lhs, &constr.rhs, constr.sense);
        }

        if let Some(objective) = &self.objective {
            solver.set_objective(&objective.expr, objective.sense);
        }

        solver.optimize().into_result()
    }
}
