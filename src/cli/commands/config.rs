//! Config Command
//!
//! Manage docforge configuration.
//!
//! Usage:
//!   docforge config show [-f json]
//!   docforge config path
//!   docforge config init [--force]

use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::types::Result;

/// Show merged effective configuration
pub fn show(format: &str) -> Result<()> {
    let root = std::env::current_dir()?;
    ConfigLoader::show_config(&root, format == "json")
}

/// Show configuration file path
pub fn path() -> Result<()> {
    let root = std::env::current_dir()?;
    ConfigLoader::show_path(&root);
    Ok(())
}

/// Write a commented default docforge.toml
pub fn init(force: bool) -> Result<()> {
    let root = std::env::current_dir()?;
    let config_path = ConfigLoader::config_path(&root);
    let out = Output::new();

    if ConfigLoader::init(&root, force)? {
        out.success(&format!("Wrote {}", config_path.display()));
    } else {
        out.warning(&format!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        ));
    }

    Ok(())
}
