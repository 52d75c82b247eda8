//! Error types for the solver library

use thiserror::Error;

/// Error type returned by a solution function
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solution is still the generated placeholder
    #[error("{0} is not implemented yet")]
    NotImplemented(&'static str),
    /// Input doesn't match the structure the solution expects
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for dispatch through the registry
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solution registered for the given key
    #[error("No solution registered for year {year} day {day} part {part}")]
    NotFound { day: u8, part: u8, year: u16 },
    /// The solution ran and failed
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Only parts 1 and 2 exist
    #[error("Invalid part {0}: must be 1 or 2")]
    InvalidPart(u8),
    /// Days run from 1 to 31
    #[error("Invalid day {0}: must be between 1 and 31")]
    InvalidDay(u8),
}
