//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//! Every failure here is terminal: the generator runs single-shot and
//! nothing is retried, so variants exist to carry remediation context
//! for the operator rather than routing decisions.
//!
//! ## Design Principles
//!
//! - Single unified error type (ForgeError) for the entire application
//! - Precondition failures name the missing piece and how to supply it
//! - No panic/unwrap - all errors propagate to the CLI boundary

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum ForgeError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Precondition Errors
    // -------------------------------------------------------------------------
    /// The generator executable did not resolve on PATH
    #[error("'{binary}' was not found on PATH. Install doxygen (e.g. 'apt install doxygen' or 'brew install doxygen') and re-run.")]
    ToolMissing { binary: String },

    /// The decompiled source tree is absent
    #[error("decompiled source directory not found: {}. Place the decompiled server sources there before generating; docforge never produces them itself.", path.display())]
    MissingSource { path: PathBuf },

    // -------------------------------------------------------------------------
    // Generation Errors
    // -------------------------------------------------------------------------
    /// The generator ran but reported failure
    #[error("'{binary}' failed with {status}")]
    ToolFailed { binary: String, status: ExitStatus },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ForgeError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl ForgeError {
    /// Create a missing-tool error
    pub fn tool_missing(binary: impl Into<String>) -> Self {
        Self::ToolMissing {
            binary: binary.into(),
        }
    }

    /// Create a missing-source error
    pub fn missing_source(path: impl Into<PathBuf>) -> Self {
        Self::MissingSource { path: path.into() }
    }

    /// Create a tool-failure error
    pub fn tool_failed(binary: impl Into<String>, status: ExitStatus) -> Self {
        Self::ToolFailed {
            binary: binary.into(),
            status,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
