//! Doxygen Invocation
//!
//! Locates the generator binary, probes its version, and runs it over a
//! rendered Doxyfile. Single-shot execution only: failures surface
//! immediately and nothing is retried.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::types::{ForgeError, Result};

pub struct DoxygenRunner {
    binary: String,
}

impl DoxygenRunner {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Probe `<binary> --version` and return the reported version string.
    /// A binary that does not resolve on PATH maps to `ToolMissing`.
    pub fn version(&self) -> Result<String> {
        debug!("Probing generator: {} --version", self.binary);

        let output = Command::new(&self.binary)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.classify_spawn_error(e))?;

        if !output.status.success() {
            return Err(ForgeError::tool_failed(&self.binary, output.status));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Run the generator with the Doxyfile as its sole argument.
    /// Stdio is inherited so warnings stream straight to the terminal.
    pub fn run(&self, doxyfile: &Path) -> Result<()> {
        info!("Running {} {}", self.binary, doxyfile.display());

        let status = Command::new(&self.binary)
            .arg(doxyfile)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| self.classify_spawn_error(e))?;

        if !status.success() {
            return Err(ForgeError::tool_failed(&self.binary, status));
        }

        Ok(())
    }

    fn classify_spawn_error(&self, err: io::Error) -> ForgeError {
        if err.kind() == io::ErrorKind::NotFound {
            ForgeError::tool_missing(&self.binary)
        } else {
            ForgeError::Io(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_maps_unresolved_binary_to_tool_missing() {
        let runner = DoxygenRunner::new("docforge-no-such-binary-a1b2c3");
        let err = runner.version().unwrap_err();
        assert!(matches!(err, ForgeError::ToolMissing { .. }));
        assert!(err.to_string().contains("docforge-no-such-binary-a1b2c3"));
    }

    #[test]
    fn test_run_maps_unresolved_binary_to_tool_missing() {
        let runner = DoxygenRunner::new("docforge-no-such-binary-a1b2c3");
        let err = runner.run(Path::new("Doxyfile")).unwrap_err();
        assert!(matches!(err, ForgeError::ToolMissing { .. }));
    }

    #[test]
    #[ignore = "requires doxygen installed"]
    fn test_version_reports_installed_generator() {
        let runner = DoxygenRunner::new("doxygen");
        let version = runner.version().unwrap();
        assert!(!version.is_empty());
    }
}
