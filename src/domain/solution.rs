use serde::Serialize;

use crate::error::MipError;

/// Message stored on solutions that carry no backend failure.
pub const NO_ERROR_MESSAGE: &str = "No error";

/// Values at or below this are not considered "one" by [`Solution::is_one`].
const TINY_NUM: f64 = 0.01;

/// Result of one `optimize` call.
///
/// Built fresh by the adapter and never mutated afterwards; every accessor
/// reads stored data only.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Solution {
    values: Vec<f64>,
    objective: f64,
    gap: f64,
    optimal: bool,
    error_code: i32,
    error_message: String,
}

impl Solution {
    /// Solution holding a feasible point reported by the backend.
    pub fn feasible(values: Vec<f64>, objective: f64, gap: f64, optimal: bool) -> Self {
        Solution {
            values,
            objective,
            gap,
            optimal,
            error_code: 0,
            error_message: NO_ERROR_MESSAGE.to_string(),
        }
    }

    /// Solution for a failed solve. An empty message is replaced by
    /// `placeholder` so callers always get some text.
    pub fn failed(error_code: i32, error_message: impl Into<String>, placeholder: &str) -> Self {
        let mut error_message = error_message.into();
        if error_message.trim().is_empty() {
            error_message = placeholder.to_string();
        }
        Solution {
            values: Vec::new(),
            objective: 0.0,
            gap: 0.0,
            optimal: false,
            error_code,
            error_message,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value of the variable declared at `index`.
    pub fn value(&self, index: usize) -> Result<f64, MipError> {
        self.values
            .get(index)
            .copied()
            .ok_or(MipError::IndexOutOfBounds {
                index,
                len: self.values.len(),
            })
    }

    /// True when the value at `index` is above a small tolerance, i.e. a
    /// binary variable that was switched on.
    pub fn is_one(&self, index: usize) -> Result<bool, MipError> {
        Ok(self.value(index)? > TINY_NUM)
    }

    pub fn objective(&self) -> f64 {
        self.objective
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    pub fn is_optimal(&self) -> bool {
        self.optimal
    }

    pub fn error_code(&self) -> i32 {
        self.error_code
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// No backend failure was reported.
    pub fn is_ok(&self) -> bool {
        self.error_code == 0
    }

    /// Turn a failed solution into [`MipError::Solve`].
    pub fn into_result(self) -> Result<Solution, MipError> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(MipError::Solve {
                code: self.error_code,
                message: self.error_message,
            })
        }
    }
}
