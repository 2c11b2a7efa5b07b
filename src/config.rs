//! Configuration for Gradebook
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{GradebookError, Result};

/// Main configuration for a Gradebook instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all data files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── students.db      (records snapshot)
    ///     └── accounts.db      (login credentials snapshot)
    pub data_dir: PathBuf,

    /// File name of the records snapshot inside `data_dir`
    pub records_file: String,

    /// File name of the accounts snapshot inside `data_dir`
    pub accounts_file: String,

    // -------------------------------------------------------------------------
    // Registry Configuration
    // -------------------------------------------------------------------------
    /// Write the records snapshot after every insert/delete
    pub autosave: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./gradebook_data"),
            records_file: "students.db".to_string(),
            accounts_file: "accounts.db".to_string(),
            autosave: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full path of the records snapshot
    pub fn records_path(&self) -> PathBuf {
        self.data_dir.join(&self.records_file)
    }

    /// Full path of the accounts snapshot
    pub fn accounts_path(&self) -> PathBuf {
        self.data_dir.join(&self.accounts_file)
    }

    /// Check that the file names are usable
    pub fn validate(&self) -> Result<()> {
        if self.records_file.trim().is_empty() {
            return Err(GradebookError::Config("records file name is empty".to_string()));
        }
        if self.accounts_file.trim().is_empty() {
            return Err(GradebookError::Config("accounts file name is empty".to_string()));
        }
        if self.records_file == self.accounts_file {
            return Err(GradebookError::Config(format!(
                "records and accounts share the same file: {}",
                self.records_file
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all storage)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the records snapshot file name
    pub fn records_file(mut self, name: impl Into<String>) -> Self {
        self.config.records_file = name.into();
        self
    }

    /// Set the accounts snapshot file name
    pub fn accounts_file(mut self, name: impl Into<String>) -> Self {
        self.config.accounts_file = name.into();
        self
    }

    /// Enable or disable saving after every mutation
    pub fn autosave(mut self, enabled: bool) -> Self {
        self.config.autosave = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
