use log::{debug, error};

use crate::convert::to_backend_bound;
use crate::domain::solution::Solution;
use crate::domain::solver::Solver;
use crate::domain::validate::{check_declaration, check_indices, DeferredErrors, USAGE_ERROR_CODE};
use crate::error::MipError;
use crate::models::{ConstraintSense, LinearExpr, ObjectiveSense, VarKind};

use grb::prelude::*;

/// Code used for `grb` errors that do not come from the Gurobi C API.
const CLIENT_ERROR_CODE: i32 = -1;

const NO_MESSAGE: &str = "No error message provided by Gurobi";

/// Gurobi solver implementation
///
/// Gurobi takes both sides of a constraint as native linear expressions, so
/// no sign flipping happens here. Variables are opaque handles; `vars[i]`
/// is the handle of declared variable `i`.
pub struct GurobiSolver {
    model: Model,
    vars: Vec<Var>,
    declared: bool,
    num_constrs: usize,
    deferred: DeferredErrors,
}

impl GurobiSolver {
    pub fn new() -> Result<Self, MipError> {
        let mut env = Env::new("").map_err(init_error)?;

        // Console output stays off until show_log(true)
        env.set(param::OutputFlag, 0).map_err(init_error)?;

        let model = Model::with_env("mip", &env).map_err(init_error)?;

        Ok(GurobiSolver {
            model,
            vars: Vec::new(),
            declared: false,
            num_constrs: 0,
            deferred: DeferredErrors::default(),
        })
    }

    fn record(&mut self, err: grb::Error, operation: &str) {
        let (code, message) = error_parts(&err);
        self.deferred
            .record(code, format!("Failed to {}: {}", operation, message));
    }

    /// Resolve variable indices to handles and build the native expression.
    fn to_grb_expr(&self, expr: &LinearExpr) -> Result<Expr, MipError> {
        check_indices(expr, self.vars.len())?;
        Ok(expr.terms().fold(
            Expr::Constant(expr.constant_value()),
            |acc, (var, coeff)| acc + coeff * self.vars[var],
        ))
    }

    fn to_grb_expr_or_record(&mut self, expr: &LinearExpr, operation: &str) -> Option<Expr> {
        if !self.declared {
            self.deferred.record(
                USAGE_ERROR_CODE,
                format!("{} before variables were declared", operation),
            );
            return None;
        }
        match self.to_grb_expr(expr) {
            Ok(expr) => Some(expr),
            Err(err) => {
                self.deferred
                    .record(USAGE_ERROR_CODE, format!("{}: {}", operation, err));
                None
            }
        }
    }

    fn add_var(&mut self, index: usize, lower: f64, upper: f64, kind: VarKind) -> grb::Result<Var> {
        let name = format!("x{}", index);
        let lower = to_backend_bound(lower, grb::INFINITY);
        let upper = to_backend_bound(upper, grb::INFINITY);
        let model = &mut self.model;

        match kind {
            VarKind::Binary => add_binvar!(model, name: &name),
            VarKind::Integer => add_intvar!(model, name: &name, bounds: lower..upper),
            VarKind::Continuous => add_ctsvar!(model, name: &name, bounds: lower..upper),
        }
    }

    fn read_solution(&self, optimal: bool) -> grb::Result<Solution> {
        let values = self
            .vars
            .iter()
            .map(|var| self.model.get_obj_attr(attr::X, var))
            .collect::<grb::Result<Vec<f64>>>()?;
        let objective = self.model.get_attr(attr::ObjVal)?;

        // MIPGap only exists for models with integer variables
        let gap = self.model.get_attr(attr::MIPGap).unwrap_or(0.0);

        Ok(Solution::feasible(values, objective, gap, optimal))
    }
}

impl Solver for GurobiSolver {
    fn declare_variables(&mut self, lower: &[f64], upper: &[f64], kinds: &[VarKind]) {
        check_declaration(lower, upper, kinds);
        if self.declared {
            self.deferred
                .record(USAGE_ERROR_CODE, "variables were declared more than once");
            return;
        }
        self.declared = true;

        let mut vars = Vec::with_capacity(kinds.len());
        for (index, ((&lb, &ub), &kind)) in lower.iter().zip(upper).zip(kinds).enumerate() {
            match self.add_var(index, lb, ub, kind) {
                Ok(var) => vars.push(var),
                Err(err) => {
                    self.record(err, "add variable");
                    return;
                }
            }
        }
        self.vars = vars;

        if let Err(err) = self.model.update() {
            self.record(err, "update model after adding variables");
        }
        debug!("Gurobi: declared {} variables", self.vars.len());
    }

    fn add_constraint(&mut self, lhs: &LinearExpr, rhs: &LinearExpr, sense: ConstraintSense) {
        let (Some(lhs), Some(rhs)) = (
            self.to_grb_expr_or_record(lhs, "constraint"),
            self.to_grb_expr_or_record(rhs, "constraint"),
        ) else {
            return;
        };

        let constraint = match sense {
            ConstraintSense::Equal => c!(lhs == rhs),
            ConstraintSense::LessEqual => c!(lhs <= rhs),
            ConstraintSense::GreaterEqual => c!(lhs >= rhs),
        };

        let constraint_name = format!("c{}", self.num_constrs);
        self.num_constrs += 1;
        if let Err(err) = self.model.add_constr(&constraint_name, constraint) {
            self.record(err, "add constraint");
        }
    }

    fn set_objective(&mut self, expr: &LinearExpr, sense: ObjectiveSense) {
        let Some(expr) = self.to_grb_expr_or_record(expr, "objective") else {
            return;
        };

        let sense = match sense {
            ObjectiveSense::Maximize => ModelSense::Maximize,
            ObjectiveSense::Minimize => ModelSense::Minimize,
        };

        if let Err(err) = self.model.set_objective(expr, sense) {
            self.record(err, "set objective");
        }
    }

    fn show_log(&mut self, enabled: bool) {
        if let Err(err) = self.model.set_param(param::OutputFlag, i32::from(enabled)) {
            self.record(err, "set output flag");
        }
    }

    fn set_time_limit(&mut self, seconds: f64) {
        if let Err(err) = self.model.set_param(param::TimeLimit, seconds) {
            self.record(err, "set time limit");
        }
    }

    fn optimize(&mut self) -> Solution {
        if let Some(err) = self.deferred.first() {
            error!("Gurobi: [Code = {}] {}", err.code, err.message);
            return Solution::failed(err.code, err.message.clone(), NO_MESSAGE);
        }

        let result = self.model.optimize().and_then(|_| self.model.status());
        let status = match result {
            Ok(status) => status,
            Err(err) => return failed_solution(&err),
        };
        debug!("Gurobi: model status {:?}", status);

        let optimal = matches!(status, Status::Optimal);
        let sol_count = self.model.get_attr(attr::SolCount).unwrap_or(0);
        let incumbent = is_limit_status(status) && sol_count > 0;
        if !optimal && !incumbent {
            let message = format!("Gurobi model status: {:?}", status);
            let code = status as i32;
            error!("Gurobi: [Code = {}] {}", code, message);
            return Solution::failed(code, message, NO_MESSAGE);
        }

        match self.read_solution(optimal) {
            Ok(solution) => solution,
            Err(err) => failed_solution(&err),
        }
    }

    fn name(&self) -> &str {
        "Gurobi"
    }
}

/// Statuses where the solve stopped early; an incumbent found before
/// stopping is still reported as a solution.
fn is_limit_status(status: Status) -> bool {
    matches!(
        status,
        Status::TimeLimit
            | Status::NodeLimit
            | Status::IterationLimit
            | Status::SolutionLimit
            | Status::Interrupted
            | Status::SubOptimal
    )
}

fn error_parts(err: &grb::Error) -> (i32, String) {
    match err {
        grb::Error::FromAPI(message, code) => (*code as i32, message.clone()),
        other => (CLIENT_ERROR_CODE, other.to_string()),
    }
}

fn failed_solution(err: &grb::Error) -> Solution {
    let (code, message) = error_parts(err);
    error!("Gurobi: [Code = {}] {}", code, message);
    Solution::failed(code, message, NO_MESSAGE)
}

fn init_error(err: grb::Error) -> MipError {
    MipError::SolverInit {
        solver: "Gurobi".to_string(),
        details: err.to_string(),
    }
}
