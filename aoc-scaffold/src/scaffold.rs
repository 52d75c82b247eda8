//! Writes a new solution module and registers it in the dispatch table

use crate::error::ScaffoldError;
use crate::module::DayModule;
use crate::registry::{Injection, REGISTRY_PATH, RegistryFile};
use std::fs;
use std::path::PathBuf;

/// Files touched by one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub module_path: PathBuf,
    pub registry_path: PathBuf,
    pub injection: Injection,
}

/// Scaffold generator rooted at a solutions crate
pub struct Scaffold {
    root: PathBuf,
}

impl Scaffold {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn module_path(&self, module: &DayModule) -> PathBuf {
        self.root.join(module.relative_path())
    }

    pub fn registry_path(&self) -> PathBuf {
        self.root.join(REGISTRY_PATH)
    }

    /// Write the module from the template and splice it into the registry
    ///
    /// The registry is spliced in memory first, so a missing marker aborts
    /// before anything is written. After that the module and the registry
    /// are written independently: if the registry write fails the module is
    /// left on disk unregistered. Running twice for the same day overwrites
    /// the module and registers it a second time.
    pub fn generate(&self, module: &DayModule) -> Result<Generated, ScaffoldError> {
        let registry_path = self.registry_path();
        let mut registry = RegistryFile::read(&registry_path)?;
        let injection = registry.inject(module)?;

        let module_path = self.module_path(module);
        if let Some(dir) = module_path.parent() {
            fs::create_dir_all(dir).map_err(|source| ScaffoldError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        fs::write(&module_path, module.render()).map_err(|source| ScaffoldError::Write {
            path: module_path.clone(),
            source,
        })?;
        tracing::info!(path = %module_path.display(), module = %module.name(), "module written");

        registry.write()?;
        tracing::info!(
            path = %registry_path.display(),
            import_line = injection.import_at + 1,
            registration_line = injection.registrations_at + 1,
            total_lines = registry.lines().len(),
            "registry updated"
        );

        Ok(Generated {
            module_path,
            registry_path,
            injection,
        })
    }
}
