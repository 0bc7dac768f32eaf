//! Status Command
//!
//! Informational snapshot of the generation workspace. Always exits 0 when
//! the configuration loads; missing pieces are reported, not failed on.

use chrono::{DateTime, Local};

use crate::config::ConfigLoader;
use crate::doxygen::GeneratePipeline;
use crate::scanner::FileScanner;
use crate::types::{ForgeError, Result};

pub fn run(format: &str) -> Result<()> {
    let json_output = format == "json";

    let root = std::env::current_dir()?;
    let config = ConfigLoader::load_from(&root)?;
    let pipeline = GeneratePipeline::new(root.clone(), config);

    let doxygen_version = pipeline.check_tool().ok();

    let source_dir = pipeline.source_dir();
    let source_files = source_dir
        .is_dir()
        .then(|| pipeline.count_source_files())
        .transpose()?;

    let output_dir = pipeline.output_dir();
    let output_files = output_dir.is_dir().then(|| pipeline.count_output_files());
    let generated_at = FileScanner::new(&output_dir).newest_mtime().map(|mtime| {
        DateTime::<Local>::from(mtime)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    });

    if json_output {
        let status = serde_json::json!({
            "root": root.display().to_string(),
            "doxygen": {
                "binary": pipeline.config().doxygen.binary,
                "available": doxygen_version.is_some(),
                "version": doxygen_version,
            },
            "source": {
                "path": pipeline.config().paths.source.display().to_string(),
                "exists": source_dir.is_dir(),
                "files": source_files,
            },
            "output": {
                "path": pipeline.config().paths.output.display().to_string(),
                "exists": output_dir.is_dir(),
                "files": output_files,
                "generated_at": generated_at,
            },
        });

        let json = serde_json::to_string_pretty(&status).map_err(ForgeError::Json)?;
        println!("{}", json);
    } else {
        let config = pipeline.config();

        println!("docforge Status");
        println!("══════════════════════════════════════");
        println!("Root: {}", root.display());
        println!();

        match &doxygen_version {
            Some(version) => println!("Doxygen: {} ({})", version, config.doxygen.binary),
            None => println!("Doxygen: not found ({})", config.doxygen.binary),
        }

        match source_files {
            Some(files) => println!(
                "Sources: {} ({} files matching {})",
                config.paths.source.display(),
                files,
                config.doxygen.file_pattern
            ),
            None => println!("Sources: missing ({})", config.paths.source.display()),
        }

        match output_files {
            Some(files) => {
                println!(
                    "Reference: {} ({} files)",
                    config.paths.output.display(),
                    files
                );
                if let Some(at) = &generated_at {
                    println!("Last generated: {}", at);
                }
            }
            None => println!(
                "Reference: not generated ({})",
                config.paths.output.display()
            ),
        }
    }

    Ok(())
}
