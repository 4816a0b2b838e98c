use std::env;

use dotenv::dotenv;
use log::warn;

use crate::domain::solver_factory::SolverType;
use crate::error::MipError;

const SOLVER_VAR: &str = "MIP_SOLVER";
const SHOW_LOG_VAR: &str = "MIP_SHOW_LOG";
const TIME_LIMIT_VAR: &str = "MIP_TIME_LIMIT";

const DEFAULT_SOLVER: &str = "highs";

/// Solver selection and settings, read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub solver: SolverType,
    pub show_log: bool,
    /// Seconds; `None` means no limit
    pub time_limit: Option<f64>,
}

impl SolverConfig {
    /// Load `.env` (if present) and read `MIP_SOLVER`, `MIP_SHOW_LOG` and
    /// `MIP_TIME_LIMIT`.
    pub fn from_env() -> Result<Self, MipError> {
        dotenv().ok();

        let solver = env::var(SOLVER_VAR)
            .unwrap_or_else(|_| DEFAULT_SOLVER.to_string())
            .parse::<SolverType>()?;

        let show_log = env::var(SHOW_LOG_VAR)
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(false);

        let time_limit = env::var(TIME_LIMIT_VAR)
            .ok()
            .and_then(|v| match v.trim().parse::<f64>() {
                Ok(seconds) if seconds > 0.0 && seconds.is_finite() => Some(seconds),
                _ => {
                    warn!("Ignoring {}={:?}: expected positive seconds", TIME_LIMIT_VAR, v);
                    None
                }
            });

        Ok(SolverConfig {
            solver,
            show_log,
            time_limit,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
