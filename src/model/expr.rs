//! Helpers for assembling expressions out of many variables.

use crate::model::var::Var;
use crate::models::LinearExpr;

/// Sum of the given expressions (or variables, or constants).
pub fn sum<I, E>(exprs: I) -> LinearExpr
where
    I: IntoIterator<Item = E>,
    E: Into<LinearExpr>,
{
    exprs
        .into_iter()
        .fold(LinearExpr::default(), |acc, e| acc + e.into())
}

pub fn sum_vars(vars: &[Var]) -> LinearExpr {
    sum(vars)
}

/// Sum of all variables in row `row` of a variable matrix.
pub fn sum_row(vars: &[Vec<Var>], row: usize) -> LinearExpr {
    sum(&vars[row])
}

/// Sum of all variables in column `col` of a variable matrix.
pub fn sum_col(vars: &[Vec<Var>], col: usize) -> LinearExpr {
    sum(vars.iter().map(|row| row[col]))
}

/// Dot product `sum(coeffs[i] * vars[i])`.
///
/// # Panics
///
/// Panics if `vars` and `coeffs` differ in length.
pub fn dot(vars: &[Var], coeffs: &[f64]) -> LinearExpr {
    assert_eq!(
        vars.len(),
        coeffs.len(),
        "number of vars ({}) and coeffs ({}) mismatch",
        vars.len(),
        coeffs.len(),
    );
    sum(vars.iter().zip(coeffs).map(|(var, &coeff)| var.mult(coeff)))
}
