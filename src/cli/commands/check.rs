//! Check Command
//!
//! Verifies both generation preconditions without touching anything on
//! disk. Fails with the same remediation messages a real run would print,
//! so operators can fix their environment before committing to one.

use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::doxygen::GeneratePipeline;
use crate::types::Result;

pub fn run() -> Result<()> {
    let root = std::env::current_dir()?;
    let config = ConfigLoader::load_from(&root)?;
    let pipeline = GeneratePipeline::new(root, config);
    let out = Output::new();

    let version = pipeline.check_tool()?;
    out.success(&format!("doxygen {}", version));

    let source = pipeline.check_source()?;
    let sources = pipeline.count_source_files()?;
    out.success(&format!(
        "{} ({} files matching {})",
        source.display(),
        sources,
        pipeline.config().doxygen.file_pattern
    ));

    Ok(())
}
