//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Project config (docforge.toml in the project root)
//! 3. Environment variables (DOCFORGE_* prefix)
//!
//! CLI flags are applied by the commands themselves on top of the result.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::constants;
use crate::types::{ForgeError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for the current directory:
    /// defaults → docforge.toml → env vars
    pub fn load() -> Result<Config> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration for a specific project root
    pub fn load_from(root: &Path) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let project_path = Self::config_path(root);
        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        // Merge environment variables (e.g., DOCFORGE_PATHS_OUTPUT -> paths.output)
        figment = figment.merge(Env::prefixed(constants::ENV_PREFIX).split('_').lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ForgeError::Config(format!("Configuration error: {}", e)))?;

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    /// Get path to the project config file
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(constants::paths::CONFIG_FILE)
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Show config file path
    pub fn show_path(root: &Path) {
        let path = Self::config_path(root);
        let exists = if path.exists() { "✓" } else { "✗" };
        println!("{} {}", exists, path.display());
    }

    /// Show current effective configuration
    pub fn show_config(root: &Path, as_json: bool) -> Result<()> {
        let config = Self::load_from(root)?;

        if as_json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            // Pretty print in TOML format
            println!(
                "{}",
                toml::to_string_pretty(&config).map_err(|e| ForgeError::Config(e.to_string()))?
            );
        }

        Ok(())
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Write a commented default docforge.toml into the project root.
    /// Returns false if the file already exists and `force` is not set.
    pub fn init(root: &Path, force: bool) -> Result<bool> {
        let config_path = Self::config_path(root);
        if config_path.exists() && !force {
            debug!("Config exists, not overwriting: {}", config_path.display());
            return Ok(false);
        }

        fs::write(&config_path, Self::default_config())?;
        debug!("Created project config: {}", config_path.display());
        Ok(true)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Generate default config content (TOML)
    fn default_config() -> String {
        r#"# docforge configuration
# Defaults reproduce a zero-flag run; every key here is optional.

[paths]
# Decompiled Java sources the reference is generated from (input).
source = "decompiled"
# Destination for the generated HTML reference. Cleared and recreated on
# every run, so nothing else should live here.
output = "static/api"

[doxygen]
# Executable name resolved on PATH, or an absolute path.
binary = "doxygen"
project_name = "Server Modding API"
project_version = "unreleased"
# The single file glob doxygen traverses.
file_pattern = "*.java"
# Suppress doxygen's per-file chatter (warnings still reach the terminal).
quiet = true

# Environment overrides: DOCFORGE_PATHS_SOURCE, DOCFORGE_PATHS_OUTPUT,
# DOCFORGE_DOXYGEN_BINARY, DOCFORGE_DOXYGEN_QUIET.
"#
        .to_string()
    }
}
