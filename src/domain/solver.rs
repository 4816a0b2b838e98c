use crate::domain::solution::Solution;
use crate::models::{ConstraintSense, LinearExpr, ObjectiveSense, VarKind};

/// Common interface for MIP solver backends
///
/// Every backend adapter owns exactly one native model. Calls follow a
/// fixed protocol: `declare_variables` once, then any number of
/// `add_constraint` calls and `set_objective`, then `optimize`. Logging
/// and time limit may be configured at any point before `optimize`.
///
/// Model-building calls never fail. Anything the backend rejects is
/// reported by the next `optimize` through the returned [`Solution`].
pub trait Solver {
    /// Declare all variables of the model at indices `0..lower.len()`
    ///
    /// # Arguments
    /// * `lower` - Lower bounds (may be `f64::NEG_INFINITY`)
    /// * `upper` - Upper bounds (may be `f64::INFINITY`)
    /// * `kinds` - Continuous, integer or binary per variable
    ///
    /// # Panics
    /// Panics if the three slices differ in length.
    fn declare_variables(&mut self, lower: &[f64], upper: &[f64], kinds: &[VarKind]);

    /// Append the constraint `lhs sense rhs`
    fn add_constraint(&mut self, lhs: &LinearExpr, rhs: &LinearExpr, sense: ConstraintSense);

    /// Replace the active objective
    fn set_objective(&mut self, expr: &LinearExpr, sense: ObjectiveSense);

    /// Enable or disable the backend's own console output
    fn show_log(&mut self, enabled: bool);

    /// Wall-clock budget for the next `optimize`, in seconds
    fn set_time_limit(&mut self, seconds: f64);

    /// Solve the current model
    ///
    /// # Returns
    /// A fresh solution; on success it holds one value per declared
    /// variable, in declaration order
    fn optimize(&mut self) -> Solution;

    /// Get the solver name for logging/debugging
    fn name(&self) -> &str;
}
