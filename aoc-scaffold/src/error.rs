//! Error types for the scaffold generator

use std::path::PathBuf;
use thiserror::Error;

/// Scaffold generation errors
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The registry has no marker line for the year
    #[error("No line containing `{marker}` in {}; add the marker before scaffolding this year", .path.display())]
    SentinelNotFound { marker: String, path: PathBuf },

    /// Reading the registry failed
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a generated file failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating the year directory failed
    #[error("Failed to create {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
