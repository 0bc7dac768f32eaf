//! Generation Pipeline
//!
//! The linear run behind `docforge generate`: two precondition guards, the
//! destructive output reset, Doxyfile synthesis, the doxygen invocation, and
//! the final generated-file count. Steps run strictly in that order so a
//! failed guard leaves the previous output untouched.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::Config;
use crate::constants;
use crate::doxygen::{Doxyfile, DoxygenRunner};
use crate::scanner::FileScanner;
use crate::types::{ForgeError, Result};

/// Outcome of a completed generation run
#[derive(Debug)]
pub struct GenerateOutcome {
    /// Files found under the output directory after the run, recursively
    pub files_generated: usize,
    /// The directory the reference was written to
    pub output_dir: PathBuf,
}

pub struct GeneratePipeline {
    root: PathBuf,
    config: Config,
    runner: DoxygenRunner,
}

impl GeneratePipeline {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        let runner = DoxygenRunner::new(&config.doxygen.binary);
        Self {
            root: root.into(),
            config,
            runner,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Input directory, resolved against the project root
    pub fn source_dir(&self) -> PathBuf {
        self.root.join(&self.config.paths.source)
    }

    /// Output directory, resolved against the project root
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.config.paths.output)
    }

    /// First guard: the generator must resolve and answer `--version`
    pub fn check_tool(&self) -> Result<String> {
        self.runner.version()
    }

    /// Second guard: the decompiled sources must be present
    pub fn check_source(&self) -> Result<PathBuf> {
        let source = self.source_dir();
        if source.is_dir() {
            Ok(source)
        } else {
            Err(ForgeError::missing_source(source))
        }
    }

    /// Count decompiled sources matching the configured file glob
    pub fn count_source_files(&self) -> Result<usize> {
        let pattern = self.config.doxygen.file_glob()?;
        Ok(FileScanner::new(self.source_dir()).with_pattern(pattern).count())
    }

    /// Count everything currently under the output directory
    pub fn count_output_files(&self) -> usize {
        FileScanner::new(self.output_dir()).count()
    }

    /// Render the Doxyfile exactly as a run would, without side effects
    pub fn render_doxyfile(&self) -> String {
        Doxyfile::from_config(&self.config, &self.source_dir(), &self.output_dir()).render()
    }

    /// Execute the full generation run
    pub fn run(&self) -> Result<GenerateOutcome> {
        // Both guards pass before anything on disk is touched
        let version = self.check_tool()?;
        debug!("Generator available: {} {}", self.runner.binary(), version);
        let source = self.check_source()?;

        // Clean slate: stale output from earlier runs never survives
        let output = self.output_dir();
        if output.exists() {
            info!("Clearing previous output: {}", output.display());
            fs::remove_dir_all(&output)?;
        }
        fs::create_dir_all(&output)?;

        // Transient Doxyfile in the project root; the guard removes it on
        // success, failure, and unwind alike
        let doxyfile = Doxyfile::from_config(&self.config, &source, &output);
        let mut temp = tempfile::Builder::new()
            .prefix(constants::doxygen::TEMP_PREFIX)
            .suffix(constants::doxygen::TEMP_SUFFIX)
            .tempfile_in(&self.root)?;
        temp.write_all(doxyfile.render().as_bytes())?;
        temp.flush()?;

        self.runner.run(temp.path())?;
        temp.close()?;

        let files_generated = FileScanner::new(&output).count();
        info!("Generation complete: {} files", files_generated);

        Ok(GenerateOutcome {
            files_generated,
            output_dir: output,
        })
    }
}
