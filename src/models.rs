use serde::{Deserialize, Serialize};

// ---------- Contract-level types: owned & serde-friendly ----------

/// Kind of a decision variable.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VarKind {
    #[default]
    Continuous,
    Integer,
    Binary,
}

impl VarKind {
    /// Decode a single-character kind tag: `'I'` integer, `'B'` binary,
    /// anything else continuous.
    pub fn from_tag(tag: char) -> Self {
        match tag {
            'I' => VarKind::Integer,
            'B' => VarKind::Binary,
            _ => VarKind::Continuous,
        }
    }

    pub fn tag(self) -> char {
        match self {
            VarKind::Continuous => 'C',
            VarKind::Integer => 'I',
            VarKind::Binary => 'B',
        }
    }

    pub fn is_integral(self) -> bool {
        matches!(self, VarKind::Integer | VarKind::Binary)
    }
}

/// Relation between the two sides of a constraint.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintSense {
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = "<")]
    LessEqual,
    #[serde(rename = ">")]
    GreaterEqual,
}

impl ConstraintSense {
    /// Decode `'='`, `'<'` (meaning `<=`) or `'>'` (meaning `>=`).
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            '=' => Some(ConstraintSense::Equal),
            '<' => Some(ConstraintSense::LessEqual),
            '>' => Some(ConstraintSense::GreaterEqual),
            _ => None,
        }
    }

    pub fn tag(self) -> char {
        match self {
            ConstraintSense::Equal => '=',
            ConstraintSense::LessEqual => '<',
            ConstraintSense::GreaterEqual => '>',
        }
    }
}

/// Optimization direction, encoded as `1` (minimize) / `-1` (maximize).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ObjectiveSense {
    Minimize,
    Maximize,
}

impl ObjectiveSense {
    pub const MINIMIZE_CODE: i32 = 1;
    pub const MAXIMIZE_CODE: i32 = -1;

    pub fn code(self) -> i32 {
        match self {
            ObjectiveSense::Minimize => Self::MINIMIZE_CODE,
            ObjectiveSense::Maximize => Self::MAXIMIZE_CODE,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            Self::MINIMIZE_CODE => Some(ObjectiveSense::Minimize),
            Self::MAXIMIZE_CODE => Some(ObjectiveSense::Maximize),
            _ => None,
        }
    }
}

/// Sparse affine expression `sum(coeffs[i] * x[vars[i]]) + constant`.
///
/// Duplicate variable indices are kept as separate terms; how they combine
/// is up to the backend receiving the expression.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LinearExpr {
    pub(crate) coeffs: Vec<f64>,
    pub(crate) vars: Vec<usize>,
    pub(crate) constant: f64,
}

impl LinearExpr {
    /// Build an expression from parallel coefficient / index sequences.
    ///
    /// # Panics
    ///
    /// Panics if `coeffs` and `vars` differ in length.
    pub fn new(coeffs: Vec<f64>, vars: Vec<usize>, constant: f64) -> Self {
        assert_eq!(
            coeffs.len(),
            vars.len(),
            "expression has {} coefficients but {} variable indices",
            coeffs.len(),
            vars.len(),
        );
        LinearExpr {
            coeffs,
            vars,
            constant,
        }
    }

    /// Expression without variables.
    pub fn constant(value: f64) -> Self {
        LinearExpr {
            constant: value,
            ..Default::default()
        }
    }

    /// Single term `coeff * x[var]`.
    pub fn term(coeff: f64, var: usize) -> Self {
        LinearExpr {
            coeffs: vec![coeff],
            vars: vec![var],
            constant: 0.0,
        }
    }

    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn vars(&self) -> &[usize] {
        &self.vars
    }

    pub fn constant_value(&self) -> f64 {
        self.constant
    }

    /// Iterate `(variable index, coefficient)` pairs in insertion order.
    pub fn terms(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.vars.iter().copied().zip(self.coeffs.iter().copied())
    }

    /// Append the terms and constant of `other`.
    pub fn plus(mut self, other: &LinearExpr) -> Self {
        self.vars.extend_from_slice(&other.vars);
        self.coeffs.extend_from_slice(&other.coeffs);
        self.constant += other.constant;
        self
    }

    /// Scale every coefficient and the constant by `factor`.
    pub fn mult(mut self, factor: f64) -> Self {
        for coeff in self.coeffs.iter_mut() {
            *coeff *= factor;
        }
        self.constant *= factor;
        self
    }

    pub fn leq(self, rhs: impl Into<LinearExpr>) -> Constraint {
        Constraint::new(self, ConstraintSense::LessEqual, rhs.into())
    }

    pub fn geq(self, rhs: impl Into<LinearExpr>) -> Constraint {
        Constraint::new(self, ConstraintSense::GreaterEqual, rhs.into())
    }

    pub fn equals(self, rhs: impl Into<LinearExpr>) -> Constraint {
        Constraint::new(self, ConstraintSense::Equal, rhs.into())
    }
}

impl From<f64> for LinearExpr {
    fn from(value: f64) -> Self {
        LinearExpr::constant(value)
    }
}

impl std::ops::Add for LinearExpr {
    type Output = LinearExpr;

    fn add(self, rhs: LinearExpr) -> LinearExpr {
        self.plus(&rhs)
    }
}

impl std::ops::Add<f64> for LinearExpr {
    type Output = LinearExpr;

    fn add(mut self, rhs: f64) -> LinearExpr {
        self.constant += rhs;
        self
    }
}

impl std::ops::Mul<f64> for LinearExpr {
    type Output = LinearExpr;

    fn mul(self, rhs: f64) -> LinearExpr {
        self.mult(rhs)
    }
}

/// Two-sided linear constraint `lhs sense rhs`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Constraint {
    pub lhs: LinearExpr,
    pub sense: ConstraintSense,
    pub rhs: LinearExpr,
}

impl Constraint {
    pub fn new(lhs: LinearExpr, sense: ConstraintSense, rhs: LinearExpr) -> Self {
        Constraint { lhs, sense, rhs }
    }
}

/// Linear objective with a direction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Objective {
    pub expr: LinearExpr,
    pub sense: ObjectiveSense,
}

impl Objective {
    pub fn new(expr: LinearExpr, sense: ObjectiveSense) -> Self {
        Objective { expr, sense }
    }
}
