//! docforge - Doxygen Driver for the Server API Reference
//!
//! Regenerates the browsable HTML API reference that the documentation site
//! serves, from a directory of decompiled Java server sources. docforge owns
//! the whole run: precondition checks, the clean-slate output reset, Doxyfile
//! synthesis, the doxygen invocation, and the final generated-file report.
//!
//! ## Core Behavior
//!
//! - **Fail-fast guards**: doxygen on PATH and the decompiled tree present,
//!   checked before anything on disk is touched
//! - **Clean-slate output**: the output directory is cleared and recreated on
//!   every run, so stale pages never survive
//! - **Transient Doxyfile**: the generator config is rendered fresh each run
//!   and removed again on success, failure, and unwind alike
//!
//! ## Quick Start
//!
//! ```ignore
//! use docforge::{ConfigLoader, GeneratePipeline};
//!
//! let root = std::env::current_dir()?;
//! let config = ConfigLoader::load_from(&root)?;
//! let outcome = GeneratePipeline::new(root, config).run()?;
//! println!("Done! Generated {} files.", outcome.files_generated);
//! ```
//!
//! ## Modules
//!
//! - [`doxygen`]: Doxyfile synthesis, generator invocation, the run pipeline
//! - [`scanner`]: exact recursive file counting
//! - [`config`]: layered configuration (defaults, docforge.toml, environment)
//! - [`cli`]: command implementations and console output

pub mod cli;
pub mod config;
pub mod constants;
pub mod doxygen;
pub mod scanner;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{ForgeError, Result};

// Generation
pub use doxygen::{Doxyfile, DoxygenRunner, GenerateOutcome, GeneratePipeline};
pub use scanner::FileScanner;
