//! Clean Command
//!
//! Removes the generated reference output. The next generate run would
//! clear it anyway; clean restores the pre-generation working tree without
//! needing doxygen around.

use std::fs;

use crate::config::ConfigLoader;
use crate::doxygen::GeneratePipeline;
use crate::types::Result;

pub fn run() -> Result<()> {
    let root = std::env::current_dir()?;
    let config = ConfigLoader::load_from(&root)?;
    let pipeline = GeneratePipeline::new(root, config);

    let output = pipeline.output_dir();
    if output.exists() {
        // Show what is being deleted before it goes
        let files = pipeline.count_output_files();
        fs::remove_dir_all(&output)?;
        println!("✓ Removed {} ({} files)", output.display(), files);
    } else {
        println!("  Nothing to clean ({} does not exist)", output.display());
    }

    Ok(())
}
