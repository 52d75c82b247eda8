//! Line-level editing of the dispatch registry file
//!
//! The registry is kept as an ordered list of lines. Generated lines are
//! spliced in next to marker lines and the list is joined back with `\n`, so
//! everything else in the file, trailing newline included, is preserved.

use crate::error::ScaffoldError;
use crate::module::DayModule;
use std::fs;
use std::path::{Path, PathBuf};

/// Registry file relative to the solutions crate root
pub const REGISTRY_PATH: &str = "src/lib.rs";

/// Marker above which a year's module lines are collected
pub fn import_marker(year: u16) -> String {
    format!("<< INJECT {} IMPORT >>", year)
}

/// Marker below which a year's registration lines are collected
pub fn solution_marker(year: u16) -> String {
    format!("<< INJECT {} SOLUTION >>", year)
}

/// Where the generated lines landed, as line indices after the splice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Injection {
    /// Index of the new import line
    pub import_at: usize,
    /// Index of the part 1 registration; part 2 follows it
    pub registrations_at: usize,
}

/// The registry file as an ordered sequence of lines
#[derive(Debug, Clone)]
pub struct RegistryFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl RegistryFile {
    /// Split registry source into lines
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Self {
        Self {
            path: path.into(),
            lines: content.split('\n').map(str::to_owned).collect(),
        }
    }

    /// Read and split the registry at `path`
    pub fn read(path: &Path) -> Result<Self, ScaffoldError> {
        let content = fs::read_to_string(path).map_err(|source| ScaffoldError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(path, &content))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Index of the first line containing `marker`
    fn find(&self, marker: &str) -> Result<usize, ScaffoldError> {
        self.lines
            .iter()
            .position(|line| line.contains(marker))
            .ok_or_else(|| ScaffoldError::SentinelNotFound {
                marker: marker.to_string(),
                path: self.path.clone(),
            })
    }

    /// Insert the module's import line before its year's import marker and
    /// its two registration lines right after the solution marker
    ///
    /// Both markers are located before anything is inserted, so a missing
    /// marker leaves the lines untouched. Existing lines are never checked
    /// for duplicates.
    pub fn inject(&mut self, module: &DayModule) -> Result<Injection, ScaffoldError> {
        let mut import_at = self.find(&import_marker(module.year))?;
        let mut solution_idx = self.find(&solution_marker(module.year))?;

        self.lines.insert(import_at, module.import_line());
        if solution_idx >= import_at {
            solution_idx += 1;
        }

        let registrations_at = solution_idx + 1;
        let registrations = module.registration_lines();
        if registrations_at <= import_at {
            import_at += registrations.len();
        }
        for (offset, line) in registrations.into_iter().enumerate() {
            self.lines.insert(registrations_at + offset, line);
        }

        Ok(Injection {
            import_at,
            registrations_at,
        })
    }

    /// Join the lines back into file contents
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Overwrite the registry file with the current lines
    pub fn write(&self) -> Result<(), ScaffoldError> {
        fs::write(&self.path, self.render()).map_err(|source| ScaffoldError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
