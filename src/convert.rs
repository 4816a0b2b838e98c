use std::collections::HashMap;

use crate::models::{ConstraintSense, LinearExpr, VarKind};

/// Constraint in single-sided sparse form `sum(coeffs[i] * x[indices[i]]) sense rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseRow {
    pub indices: Vec<usize>,
    pub coeffs: Vec<f64>,
    pub sense: ConstraintSense,
    pub rhs: f64,
}

impl SparseRow {
    /// Sum the coefficients of repeated indices into one entry, keeping the
    /// order in which each index first appears. Needed by backends that
    /// reject rows naming a column twice.
    pub fn merged(self) -> SparseRow {
        let mut position: HashMap<usize, usize> = HashMap::with_capacity(self.indices.len());
        let mut indices = Vec::with_capacity(self.indices.len());
        let mut coeffs: Vec<f64> = Vec::with_capacity(self.coeffs.len());

        for (&index, &coeff) in self.indices.iter().zip(&self.coeffs) {
            match position.get(&index) {
                Some(&at) => coeffs[at] += coeff,
                None => {
                    position.insert(index, indices.len());
                    indices.push(index);
                    coeffs.push(coeff);
                }
            }
        }

        SparseRow {
            indices,
            coeffs,
            ..self
        }
    }
}

/// Move every variable term of `lhs sense rhs` to the left and every
/// constant to the right:
///
/// `L·x + l  sense  R·x + r`  becomes  `L·x - R·x  sense  r - l`.
///
/// Terms are concatenated, not merged, so duplicate indices stay separate.
pub fn to_single_sided(lhs: &LinearExpr, rhs: &LinearExpr, sense: ConstraintSense) -> SparseRow {
    let len = lhs.num_vars() + rhs.num_vars();
    let mut indices = Vec::with_capacity(len);
    let mut coeffs = Vec::with_capacity(len);

    indices.extend_from_slice(lhs.vars());
    coeffs.extend_from_slice(lhs.coeffs());

    indices.extend_from_slice(rhs.vars());
    coeffs.extend(rhs.coeffs().iter().map(|c| -c));

    SparseRow {
        indices,
        coeffs,
        sense,
        rhs: rhs.constant_value() - lhs.constant_value(),
    }
}

/// Row activity bounds `[lower, upper]` for a single-sided row, for
/// backends that store every row as a range.
pub fn row_bounds(sense: ConstraintSense, rhs: f64, infinity: f64) -> (f64, f64) {
    match sense {
        ConstraintSense::Equal => (rhs, rhs),
        ConstraintSense::LessEqual => (-infinity, rhs),
        ConstraintSense::GreaterEqual => (rhs, infinity),
    }
}

/// Replace an infinite bound with the backend's "unbounded" sentinel.
pub fn to_backend_bound(value: f64, infinity: f64) -> f64 {
    if value == f64::INFINITY {
        infinity
    } else if value == f64::NEG_INFINITY {
        -infinity
    } else {
        value
    }
}

/// Column bounds as the backend should receive them. Binary variables are
/// forced to `[0, 1]` for backends without a dedicated binary type.
pub fn column_bounds(lower: f64, upper: f64, kind: VarKind, infinity: f64) -> (f64, f64) {
    match kind {
        VarKind::Binary => (0.0, 1.0),
        VarKind::Continuous | VarKind::Integer => (
            to_backend_bound(lower, infinity),
            to_backend_bound(upper, infinity),
        ),
    }
}

/// Dense cost vector of length `num_vars`. Repeated indices add up.
pub fn to_dense_objective(expr: &LinearExpr, num_vars: usize) -> Vec<f64> {
    let mut costs = vec![0.0; num_vars];
    for (var, coeff) in expr.terms() {
        if let Some(cost) = costs.get_mut(var) {
            *cost += coeff;
        }
    }
    costs
}
