use std::ffi::{c_void, CStr};

use log::{debug, error, warn};

use crate::convert::{column_bounds, row_bounds, to_dense_objective, to_single_sided};
use crate::domain::solution::Solution;
use crate::domain::solver::Solver;
use crate::domain::validate::{check_declaration, check_indices, DeferredErrors, USAGE_ERROR_CODE};
use crate::error::MipError;
use crate::models::{ConstraintSense, LinearExpr, ObjectiveSense, VarKind};

use highs_sys::{
    HighsInt, Highs_addCols, Highs_addRow, Highs_changeColIntegrality,
    Highs_changeColsCostByRange, Highs_changeObjectiveOffset, Highs_changeObjectiveSense,
    Highs_create, Highs_destroy, Highs_getDoubleInfoValue, Highs_getInfinity,
    Highs_getIntInfoValue, Highs_getModelStatus, Highs_getNumRow, Highs_getObjectiveValue,
    Highs_getSolution, Highs_run, Highs_setBoolOptionValue, Highs_setDoubleOptionValue,
    MODEL_STATUS_MODEL_EMPTY, MODEL_STATUS_OPTIMAL, MODEL_STATUS_REACHED_INTERRUPT,
    MODEL_STATUS_REACHED_ITERATION_LIMIT, MODEL_STATUS_REACHED_MEMORY_LIMIT,
    MODEL_STATUS_REACHED_SOLUTION_LIMIT, MODEL_STATUS_REACHED_TIME_LIMIT,
    SOLUTION_STATUS_FEASIBLE, STATUS_ERROR, STATUS_OK, VAR_TYPE_INTEGER,
};

const NO_MESSAGE: &str = "No error message provided by HiGHS";

/// HiGHS solver implementation
///
/// Columns are addressed by plain 0-based column numbers, so no handle
/// table is kept. Rows are single-sided: both sides of a constraint are
/// folded into one sparse row before reaching HiGHS.
pub struct HighsSolver {
    highs: *mut c_void,
    num_vars: usize,
    declared: bool,
    has_integers: bool,
    deferred: DeferredErrors,
}

impl HighsSolver {
    pub fn new() -> Result<Self, MipError> {
        let highs = unsafe { Highs_create() };
        if highs.is_null() {
            return Err(MipError::SolverInit {
                solver: "HiGHS".to_string(),
                details: "Highs_create returned a null instance".to_string(),
            });
        }

        let mut solver = HighsSolver {
            highs,
            num_vars: 0,
            declared: false,
            has_integers: false,
            deferred: DeferredErrors::default(),
        };
        solver.show_log(false);
        Ok(solver)
    }

    fn infinity(&self) -> f64 {
        unsafe { Highs_getInfinity(self.highs) }
    }

    fn check_status(&mut self, status: HighsInt, operation: &str) {
        if status == STATUS_ERROR {
            self.deferred
                .record(status, format!("HiGHS rejected {}", operation));
        } else if status != STATUS_OK {
            warn!("HiGHS returned warning status {} for {}", status, operation);
        }
    }

    fn check_model_ready(&mut self, operation: &str, expr: &LinearExpr) -> bool {
        if !self.declared {
            self.deferred.record(
                USAGE_ERROR_CODE,
                format!("{} before variables were declared", operation),
            );
            return false;
        }
        if let Err(err) = check_indices(expr, self.num_vars) {
            self.deferred
                .record(USAGE_ERROR_CODE, format!("{}: {}", operation, err));
            return false;
        }
        true
    }

    fn int_info(&self, name: &CStr) -> Option<HighsInt> {
        let mut value: HighsInt = 0;
        let status = unsafe { Highs_getIntInfoValue(self.highs, name.as_ptr(), &mut value) };
        (status == STATUS_OK).then_some(value)
    }

    fn double_info(&self, name: &CStr) -> Option<f64> {
        let mut value: f64 = 0.0;
        let status = unsafe { Highs_getDoubleInfoValue(self.highs, name.as_ptr(), &mut value) };
        (status == STATUS_OK).then_some(value)
    }

    fn column_values(&self) -> Vec<f64> {
        let num_rows = unsafe { Highs_getNumRow(self.highs) }.max(0) as usize;
        let mut col_value = vec![0.0; self.num_vars];
        let mut col_dual = vec![0.0; self.num_vars];
        let mut row_value = vec![0.0; num_rows];
        let mut row_dual = vec![0.0; num_rows];

        unsafe {
            Highs_getSolution(
                self.highs,
                col_value.as_mut_ptr(),
                col_dual.as_mut_ptr(),
                row_value.as_mut_ptr(),
                row_dual.as_mut_ptr(),
            );
        }
        col_value
    }

    fn mip_gap(&self) -> f64 {
        if !self.has_integers {
            return 0.0;
        }
        self.double_info(c"mip_gap")
            .filter(|gap| gap.is_finite())
            .unwrap_or(0.0)
    }
}

impl Solver for HighsSolver {
    fn declare_variables(&mut self, lower: &[f64], upper: &[f64], kinds: &[VarKind]) {
        check_declaration(lower, upper, kinds);
        if self.declared {
            self.deferred
                .record(USAGE_ERROR_CODE, "variables were declared more than once");
            return;
        }
        self.declared = true;
        self.num_vars = kinds.len();
        if kinds.is_empty() {
            return;
        }

        let infinity = self.infinity();
        let (col_lower, col_upper): (Vec<f64>, Vec<f64>) = lower
            .iter()
            .zip(upper)
            .zip(kinds)
            .map(|((&lb, &ub), &kind)| column_bounds(lb, ub, kind, infinity))
            .unzip();
        let costs = vec![0.0; self.num_vars];
        let starts: Vec<HighsInt> = vec![0; self.num_vars];
        let no_index: [HighsInt; 0] = [];
        let no_value: [f64; 0] = [];

        let status = unsafe {
            Highs_addCols(
                self.highs,
                self.num_vars as HighsInt,
                costs.as_ptr(),
                col_lower.as_ptr(),
                col_upper.as_ptr(),
                0,
                starts.as_ptr(),
                no_index.as_ptr(),
                no_value.as_ptr(),
            )
        };
        self.check_status(status, "column declaration");

        for (col, kind) in kinds.iter().enumerate() {
            if kind.is_integral() {
                self.has_integers = true;
                let status = unsafe {
                    Highs_changeColIntegrality(self.highs, col as HighsInt, VAR_TYPE_INTEGER)
                };
                self.check_status(status, "column integrality");
            }
        }

        debug!(
            "HiGHS: declared {} variables (integral: {})",
            self.num_vars, self.has_integers
        );
    }

    fn add_constraint(&mut self, lhs: &LinearExpr, rhs: &LinearExpr, sense: ConstraintSense) {
        if !self.check_model_ready("constraint", lhs) || !self.check_model_ready("constraint", rhs)
        {
            return;
        }

        // HiGHS rejects a row that names the same column twice
        let row = to_single_sided(lhs, rhs, sense).merged();
        let (lower, upper) = row_bounds(row.sense, row.rhs, self.infinity());
        let index: Vec<HighsInt> = row.indices.iter().map(|&i| i as HighsInt).collect();

        let status = unsafe {
            Highs_addRow(
                self.highs,
                lower,
                upper,
                index.len() as HighsInt,
                index.as_ptr(),
                row.coeffs.as_ptr(),
            )
        };
        self.check_status(status, "row");
    }

    fn set_objective(&mut self, expr: &LinearExpr, sense: ObjectiveSense) {
        if !self.check_model_ready("objective", expr) {
            return;
        }

        // Every column gets a cost so the previous objective is fully overwritten
        if self.num_vars > 0 {
            let costs = to_dense_objective(expr, self.num_vars);
            let status = unsafe {
                Highs_changeColsCostByRange(
                    self.highs,
                    0,
                    (self.num_vars - 1) as HighsInt,
                    costs.as_ptr(),
                )
            };
            self.check_status(status, "objective costs");
        }

        let status = unsafe { Highs_changeObjectiveOffset(self.highs, expr.constant_value()) };
        self.check_status(status, "objective offset");

        let status = unsafe { Highs_changeObjectiveSense(self.highs, sense.code() as HighsInt) };
        self.check_status(status, "objective sense");
    }

    fn show_log(&mut self, enabled: bool) {
        let status = unsafe {
            Highs_setBoolOptionValue(self.highs, c"output_flag".as_ptr(), HighsInt::from(enabled))
        };
        self.check_status(status, "option output_flag");
    }

    fn set_time_limit(&mut self, seconds: f64) {
        let status =
            unsafe { Highs_setDoubleOptionValue(self.highs, c"time_limit".as_ptr(), seconds) };
        self.check_status(status, "option time_limit");
    }

    fn optimize(&mut self) -> Solution {
        if let Some(err) = self.deferred.first() {
            error!("HiGHS: [Code = {}] {}", err.code, err.message);
            return Solution::failed(err.code, err.message.clone(), NO_MESSAGE);
        }

        let run_status = unsafe { Highs_run(self.highs) };
        let model_status = unsafe { Highs_getModelStatus(self.highs) };
        debug!(
            "HiGHS: run status {}, model status {}",
            run_status, model_status
        );

        // Nothing to decide; the objective is just its offset
        if model_status == MODEL_STATUS_MODEL_EMPTY && self.num_vars == 0 {
            let objective = unsafe { Highs_getObjectiveValue(self.highs) };
            return Solution::feasible(Vec::new(), objective, 0.0, true);
        }

        let optimal = run_status != STATUS_ERROR && model_status == MODEL_STATUS_OPTIMAL;
        let incumbent = run_status != STATUS_ERROR
            && is_limit_status(model_status)
            && self.int_info(c"primal_solution_status") == Some(SOLUTION_STATUS_FEASIBLE);

        if !optimal && !incumbent {
            let code = if run_status == STATUS_ERROR {
                run_status
            } else {
                model_status
            };
            let message = describe_model_status(model_status)
                .map(|text| format!("HiGHS model status: {}", text))
                .unwrap_or_default();
            error!("HiGHS: [Code = {}] {}", code, message);
            return Solution::failed(code, message, NO_MESSAGE);
        }

        let values = self.column_values();
        let objective = unsafe { Highs_getObjectiveValue(self.highs) };
        Solution::feasible(values, objective, self.mip_gap(), optimal)
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}

impl Drop for HighsSolver {
    fn drop(&mut self) {
        if !self.highs.is_null() {
            unsafe { Highs_destroy(self.highs) };
        }
    }
}

/// Human-readable text for a HiGHS model status code.
fn describe_model_status(status: HighsInt) -> Option<&'static str> {
    let text = match status {
        0 => "Not set",
        1 => "Load error",
        2 => "Model error",
        3 => "Presolve error",
        4 => "Solve error",
        5 => "Postsolve error",
        6 => "Model empty",
        7 => "Optimal",
        8 => "Infeasible",
        9 => "Primal infeasible or unbounded",
        10 => "Unbounded",
        11 => "Bound on objective reached",
        12 => "Target for objective reached",
        13 => "Time limit reached",
        14 => "Iteration limit reached",
        15 => "Unknown",
        16 => "Solution limit reached",
        17 => "Interrupted by user",
        18 => "Memory limit reached",
        _ => return None,
    };
    Some(text)
}

/// Statuses where the solve stopped early; a feasible point found before
/// stopping is a usable incumbent.
fn is_limit_status(status: HighsInt) -> bool {
    matches!(
        status,
        MODEL_STATUS_REACHED_TIME_LIMIT
            | MODEL_STATUS_REACHED_ITERATION_LIMIT
            | MODEL_STATUS_REACHED_SOLUTION_LIMIT
            | MODEL_STATUS_REACHED_INTERRUPT
            | MODEL_STATUS_REACHED_MEMORY_LIMIT
    )
}
