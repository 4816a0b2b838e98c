use std::ops::{Add, Mul};

use crate::models::{Constraint, LinearExpr, VarKind};

/// Decision variable created by a [`Model`](super::Model).
///
/// A `Var` is just its declaration index plus the bounds and kind it was
/// declared with; it is only meaningful for the model that created it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Var {
    index: usize,
    lower: f64,
    upper: f64,
    kind: VarKind,
}

impl Var {
    pub(crate) fn new(index: usize, lower: f64, upper: f64, kind: VarKind) -> Self {
        Var {
            index,
            lower,
            upper,
            kind,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn kind(&self) -> VarKind {
        self.kind
    }

    /// `coeff * self` as an expression.
    pub fn mult(self, coeff: f64) -> LinearExpr {
        LinearExpr::term(coeff, self.index)
    }

    pub fn leq(self, rhs: impl Into<LinearExpr>) -> Constraint {
        LinearExpr::from(self).leq(rhs)
    }

    pub fn geq(self, rhs: impl Into<LinearExpr>) -> Constraint {
        LinearExpr::from(self).geq(rhs)
    }

    pub fn equals(self, rhs: impl Into<LinearExpr>) -> Constraint {
        LinearExpr::from(self).equals(rhs)
    }
}

impl From<Var> for LinearExpr {
    fn from(var: Var) -> Self {
        LinearExpr::term(1.0, var.index)
    }
}

impl From<&Var> for LinearExpr {
    fn from(var: &Var) -> Self {
        LinearExpr::term(1.0, var.index)
    }
}

impl Mul<f64> for Var {
    type Output = LinearExpr;

    fn mul(self, coeff: f64) -> LinearExpr {
        self.mult(coeff)
    }
}

impl Mul<Var> for f64 {
    type Output = LinearExpr;

    fn mul(self, var: Var) -> LinearExpr {
        var.mult(self)
    }
}

impl Add<Var> for Var {
    type Output = LinearExpr;

    fn add(self, rhs: Var) -> LinearExpr {
        LinearExpr::from(self) + LinearExpr::from(rhs)
    }
}

impl Add<LinearExpr> for Var {
    type Output = LinearExpr;

    fn add(self, rhs: LinearExpr) -> LinearExpr {
        LinearExpr::from(self) + rhs
    }
}

impl Add<Var> for LinearExpr {
    type Output = LinearExpr;

    fn add(self, rhs: Var) -> LinearExpr {
        self + LinearExpr::from(rhs)
    }
}

impl Add<f64> for Var {
    type Output = LinearExpr;

    fn add(self, rhs: f64) -> LinearExpr {
        LinearExpr::from(self) + rhs
    }
}
