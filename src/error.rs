use thiserror::Error;

/// Result type for MIP layer operations
pub type Result<T> = std::result::Result<T, MipError>;

/// Errors that can occur when selecting, building or reading from a solver
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MipError {
    /// The backend session could not be created
    #[error("Failed to initialize {solver}: {details}")]
    SolverInit { solver: String, details: String },

    /// Solver name not recognised or backend not compiled in
    #[error("Unknown solver: {0}")]
    UnknownSolver(String),

    /// Variable index outside the declared range
    #[error("Index {index} out of bounds for {len} variables")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Backend reported a failure during optimization
    #[error("[Code = {code}] {message}")]
    Solve { code: i32, message: String },
}
