//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Input resolution error
    #[error("{0}")]
    Executor(#[from] ExecutorError),

    /// Solver error
    #[error("{key}: {source}")]
    Solver {
        key: aoc_solver::SolutionKey,
        #[source]
        source: aoc_solver::SolverError,
    },
}

/// Errors raised while resolving the puzzle input
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Session credential could not be loaded
    #[error("Cannot read session from {}: {source}", .path.display())]
    Session {
        path: PathBuf,
        #[source]
        source: SessionError,
    },

    /// Input fetch failed
    #[error("Input fetch failed for {year}/{day}: {source}")]
    InputFetch {
        year: u16,
        day: u8,
        #[source]
        source: aoc_http_client::AocError,
    },

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    ClientInit(#[source] aoc_http_client::AocError),
}

/// Session file errors
#[derive(Error, Debug)]
pub enum SessionError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not a JSON string
    #[error("expected a JSON string: {0}")]
    Json(#[from] serde_json::Error),

    /// File holds an empty string
    #[error("session is empty")]
    Empty,
}

/// Cache-specific errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cached file is not a JSON string
    #[error("Malformed cache entry: {0}")]
    Json(#[from] serde_json::Error),

    /// Cache directory creation failed
    #[error("Cache directory creation failed: {0}")]
    DirCreation(String),
}
