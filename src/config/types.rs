//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! The defaults reproduce a zero-flag run against the standard project
//! layout; docforge.toml and environment overrides layer on top.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Workspace paths
    pub paths: PathsConfig,

    /// External generator settings
    pub doxygen: DoxygenConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            doxygen: DoxygenConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    /// Returns `ForgeError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        if self.paths.source.as_os_str().is_empty() {
            return Err(crate::types::ForgeError::Config(
                "paths.source must not be empty".to_string(),
            ));
        }

        if self.paths.output.as_os_str().is_empty() {
            return Err(crate::types::ForgeError::Config(
                "paths.output must not be empty".to_string(),
            ));
        }

        if self.doxygen.binary.trim().is_empty() {
            return Err(crate::types::ForgeError::Config(
                "doxygen.binary must not be empty".to_string(),
            ));
        }

        // Catch malformed globs at load time, before a run gets underway
        self.doxygen.file_glob()?;

        Ok(())
    }
}

// =============================================================================
// Path Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Decompiled Java sources the reference is generated from (input)
    pub source: PathBuf,

    /// Destination for the generated HTML reference (output).
    /// Recreated from scratch on every run.
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(constants::paths::SOURCE_DIR),
            output: PathBuf::from(constants::paths::OUTPUT_DIR),
        }
    }
}

// =============================================================================
// Doxygen Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DoxygenConfig {
    /// Executable name resolved on PATH, or an absolute path
    pub binary: String,

    /// PROJECT_NAME tag in the rendered Doxyfile
    pub project_name: String,

    /// PROJECT_NUMBER tag in the rendered Doxyfile
    pub project_version: String,

    /// The single file glob the generator traverses, e.g. `*.java`
    pub file_pattern: String,

    /// Suppress the generator's per-file progress chatter
    /// (warnings still reach the terminal)
    pub quiet: bool,
}

impl Default for DoxygenConfig {
    fn default() -> Self {
        Self {
            binary: constants::doxygen::BINARY.to_string(),
            project_name: constants::doxygen::PROJECT_NAME.to_string(),
            project_version: constants::doxygen::PROJECT_VERSION.to_string(),
            file_pattern: constants::doxygen::FILE_PATTERN.to_string(),
            quiet: true,
        }
    }
}

impl DoxygenConfig {
    /// Compile the configured file pattern for local matching.
    /// Returns `ForgeError::Config` if the glob is malformed or empty.
    pub fn file_glob(&self) -> crate::types::Result<glob::Pattern> {
        if self.file_pattern.trim().is_empty() {
            return Err(crate::types::ForgeError::Config(
                "doxygen.file_pattern must not be empty".to_string(),
            ));
        }

        glob::Pattern::new(&self.file_pattern).map_err(|e| {
            crate::types::ForgeError::Config(format!(
                "doxygen.file_pattern '{}' is not a valid glob: {}",
                self.file_pattern, e
            ))
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
