//! Input cache for storing puzzle inputs locally

use crate::error::CacheError;
use std::fs;
use std::path::{Path, PathBuf};

/// File-based cache for puzzle inputs
///
/// Directory structure: `{data_dir}/{year}/{day}.json`, each file holding the
/// raw input as a single JSON string. Entries never expire.
pub struct InputCache {
    data_dir: PathBuf,
}

impl InputCache {
    /// Create a new input cache rooted at `data_dir`
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the cache path for a specific year/day
    pub fn cache_path(&self, year: u16, day: u8) -> PathBuf {
        self.year_dir(year).join(format!("{}.json", day))
    }

    fn year_dir(&self, year: u16) -> PathBuf {
        self.data_dir.join(year.to_string())
    }

    /// Read a cached input
    ///
    /// Fails when the file is absent, unreadable or not a JSON string; the
    /// caller treats every failure as a miss.
    pub fn get(&self, year: u16, day: u8) -> Result<String, CacheError> {
        read_json_string(&self.cache_path(year, day))
    }

    /// Store input in cache
    pub fn put(&self, year: u16, day: u8, input: &str) -> Result<(), CacheError> {
        let year_dir = self.year_dir(year);
        fs::create_dir_all(&year_dir)
            .map_err(|e| CacheError::DirCreation(format!("Failed to create {}: {}", year_dir.display(), e)))?;

        fs::write(self.cache_path(year, day), serde_json::to_string(input)?)?;
        Ok(())
    }
}

fn read_json_string(path: &Path) -> Result<String, CacheError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
