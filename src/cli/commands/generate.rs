//! Generate Command
//!
//! Drives a full regeneration of the API reference: precondition guards,
//! destructive output reset, Doxyfile synthesis, doxygen invocation, and
//! the final generated-file report.

use std::path::PathBuf;

use tracing::debug;

use crate::config::ConfigLoader;
use crate::doxygen::GeneratePipeline;
use crate::types::Result;

/// Generate run options (CLI overrides applied on top of loaded config)
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Decompiled source directory override
    pub source: Option<PathBuf>,
    /// Output directory override
    pub output: Option<PathBuf>,
    /// Generator executable override
    pub doxygen_bin: Option<PathBuf>,
    /// Print the rendered Doxyfile instead of running
    pub dry_run: bool,
}

pub fn run(options: GenerateOptions) -> Result<()> {
    let GenerateOptions {
        source,
        output,
        doxygen_bin,
        dry_run,
    } = options;

    let root = std::env::current_dir()?;
    let mut config = ConfigLoader::load_from(&root)?;

    // CLI flags outrank file and environment configuration
    if let Some(source) = source {
        config.paths.source = source;
    }
    if let Some(output) = output {
        config.paths.output = output;
    }
    if let Some(bin) = doxygen_bin {
        config.doxygen.binary = bin.to_string_lossy().into_owned();
    }

    let pipeline = GeneratePipeline::new(root, config);

    if dry_run {
        debug!("Dry run requested, printing Doxyfile only");
        print!("{}", pipeline.render_doxyfile());
        return Ok(());
    }

    println!(
        "Regenerating API reference into {}...",
        pipeline.output_dir().display()
    );
    let outcome = pipeline.run()?;
    debug!("Reference written to {}", outcome.output_dir.display());
    println!("Done! Generated {} files.", outcome.files_generated);

    Ok(())
}
