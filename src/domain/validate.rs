use log::warn;

use crate::error::MipError;
use crate::models::{LinearExpr, VarKind};

/// Error code for calls made out of protocol order (e.g. declaring twice,
/// or adding constraints before any variables exist).
pub const USAGE_ERROR_CODE: i32 = -2;

/// Fail fast when the parallel declaration slices disagree in length.
pub fn check_declaration(lower: &[f64], upper: &[f64], kinds: &[VarKind]) {
    assert!(
        lower.len() == upper.len() && upper.len() == kinds.len(),
        "variable declaration lengths differ (lower = {}, upper = {}, kinds = {})",
        lower.len(),
        upper.len(),
        kinds.len(),
    );
}

/// Check that every variable index in `expr` is below `num_vars`.
pub fn check_indices(expr: &LinearExpr, num_vars: usize) -> Result<(), MipError> {
    match expr.vars().iter().find(|&&var| var >= num_vars) {
        Some(&index) => Err(MipError::IndexOutOfBounds {
            index,
            len: num_vars,
        }),
        None => Ok(()),
    }
}

/// First failure seen while building a model, held back until `optimize`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeferredError {
    pub code: i32,
    pub message: String,
}

/// Keeps the first deferred error; later ones are only logged. The error
/// stays for the adapter's lifetime, so every `optimize` reports it.
#[derive(Debug, Default)]
pub struct DeferredErrors {
    first: Option<DeferredError>,
}

impl DeferredErrors {
    pub fn record(&mut self, code: i32, message: impl Into<String>) {
        let message = message.into();
        warn!("Deferring solver error [Code = {}] {}", code, message);
        if self.first.is_none() {
            self.first = Some(DeferredError { code, message });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub fn first(&self) -> Option<&DeferredError> {
        self.first.as_ref()
    }
}
