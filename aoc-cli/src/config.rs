//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::SessionError;
use aoc_solver::SolutionKey;
use std::fs;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Name of the session file inside the data directory
pub const SESSION_FILE_NAME: &str = "session.json";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Which solution part to run
    pub key: SolutionKey,
    /// Cache directory path
    pub data_dir: PathBuf,
    /// Session credential file, read only when a fetch is needed
    pub session_file: PathBuf,
    /// Server puzzle input is fetched from
    pub base_url: String,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Self {
        let data_dir = expand_tilde(&args.data_dir);
        let session_file = match args.session_file {
            Some(path) => expand_tilde(&path),
            None => data_dir.join(SESSION_FILE_NAME),
        };

        Config {
            key: SolutionKey::new(args.day, args.part, args.year),
            data_dir,
            session_file,
            base_url: args.base_url,
            quiet: args.quiet,
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Read the session credential, a JSON string, from `path`
///
/// The decoded value is returned in a zeroize-on-drop buffer.
pub fn read_session(path: &Path) -> Result<Zeroizing<String>, SessionError> {
    let content = Zeroizing::new(fs::read_to_string(path)?);
    let session: Zeroizing<String> = Zeroizing::new(serde_json::from_str(&content)?);
    if session.trim().is_empty() {
        return Err(SessionError::Empty);
    }
    Ok(session)
}
