use std::fmt;
use std::str::FromStr;

use log::info;

use crate::config::SolverConfig;
use crate::domain::solver::Solver;
use crate::error::MipError;

#[cfg(feature = "highs-solver")]
use crate::domain::solvers::HighsSolver;

#[cfg(feature = "gurobi-solver")]
use crate::domain::solvers::GurobiSolver;

/// Available solver backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverType {
    #[cfg(feature = "highs-solver")]
    Highs,
    #[cfg(feature = "gurobi-solver")]
    Gurobi,
}

impl SolverType {
    pub fn name(self) -> &'static str {
        match self {
            #[cfg(feature = "highs-solver")]
            SolverType::Highs => "HiGHS",
            #[cfg(feature = "gurobi-solver")]
            SolverType::Gurobi => "Gurobi",
        }
    }
}

impl fmt::Display for SolverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverType {
    type Err = MipError;

    /// Parse solver type from string (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            #[cfg(feature = "highs-solver")]
            "highs" => Ok(SolverType::Highs),
            #[cfg(feature = "gurobi-solver")]
            "gurobi" => Ok(SolverType::Gurobi),
            _ => Err(MipError::UnknownSolver(s.to_string())),
        }
    }
}

/// Create a solver instance based on the specified type
///
/// Fails when the backend session cannot be initialized (missing library,
/// license, out of memory).
pub fn create_solver(solver_type: SolverType) -> Result<Box<dyn Solver>, MipError> {
    info!("Creating {} solver", solver_type);
    match solver_type {
        #[cfg(feature = "highs-solver")]
        SolverType::Highs => Ok(Box::new(HighsSolver::new()?)),
        #[cfg(feature = "gurobi-solver")]
        SolverType::Gurobi => Ok(Box::new(GurobiSolver::new()?)),
    }
}

/// Create the configured solver with logging and time limit applied
pub fn create_configured_solver(config: &SolverConfig) -> Result<Box<dyn Solver>, MipError> {
    let mut solver = create_solver(config.solver)?;
    solver.show_log(config.show_log);
    if let Some(seconds) = config.time_limit {
        solver.set_time_limit(seconds);
    }
    Ok(solver)
}
