//! Doxyfile Synthesis
//!
//! The transient `TAG = value` configuration handed to doxygen on each run.
//! The template is fixed: callers only supply the project identity, the two
//! directories, and the file glob. Rendered fresh every run, passed as the
//! generator's sole argument, and never read back.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Settings rendered into the temporary Doxyfile
#[derive(Debug, Clone)]
pub struct Doxyfile {
    /// PROJECT_NAME tag, quoted in the rendered output
    pub project_name: String,
    /// PROJECT_NUMBER tag
    pub project_version: String,
    /// INPUT tag, traversed recursively
    pub input_dir: PathBuf,
    /// OUTPUT_DIRECTORY tag
    pub output_dir: PathBuf,
    /// FILE_PATTERNS tag, the single traversed glob
    pub file_pattern: String,
    /// QUIET tag
    pub quiet: bool,
}

impl Doxyfile {
    /// Build settings from loaded configuration plus the resolved directories
    pub fn from_config(config: &Config, input_dir: &Path, output_dir: &Path) -> Self {
        Self {
            project_name: config.doxygen.project_name.clone(),
            project_version: config.doxygen.project_version.clone(),
            input_dir: input_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            file_pattern: config.doxygen.file_pattern.clone(),
            quiet: config.doxygen.quiet,
        }
    }

    /// Render the fixed template. Deterministic: the same settings always
    /// produce the same bytes.
    pub fn render(&self) -> String {
        let mut out = String::new();

        // Project identity
        tag(&mut out, "PROJECT_NAME", &quoted(&self.project_name));
        tag(&mut out, "PROJECT_NUMBER", &quoted(&self.project_version));
        // Paths are quoted too: INPUT is a list tag and an unquoted path with
        // spaces would be read as several entries
        tag(&mut out, "OUTPUT_DIRECTORY", &quoted(&self.output_dir.display().to_string()));

        // Input traversal: the whole decompiled tree, one extension
        tag(&mut out, "INPUT", &quoted(&self.input_dir.display().to_string()));
        tag(&mut out, "FILE_PATTERNS", &self.file_pattern);
        tag(&mut out, "RECURSIVE", "YES");

        // Decompiled output carries no doc comments, so document everything
        // that has a signature and keep the undocumented-warning noise off
        tag(&mut out, "EXTRACT_ALL", "YES");
        tag(&mut out, "EXTRACT_PRIVATE", "YES");
        tag(&mut out, "EXTRACT_STATIC", "YES");
        tag(&mut out, "OPTIMIZE_OUTPUT_JAVA", "YES");
        tag(&mut out, "JAVADOC_AUTOBRIEF", "YES");
        tag(&mut out, "WARN_IF_UNDOCUMENTED", "NO");
        tag(&mut out, "QUIET", yes_no(self.quiet));

        // Browsable HTML only, rooted directly at OUTPUT_DIRECTORY
        tag(&mut out, "GENERATE_HTML", "YES");
        tag(&mut out, "HTML_OUTPUT", ".");
        tag(&mut out, "GENERATE_TREEVIEW", "YES");
        tag(&mut out, "SEARCHENGINE", "YES");
        tag(&mut out, "GENERATE_LATEX", "NO");

        out
    }
}

fn tag(out: &mut String, key: &str, value: &str) {
    // 22-column key field, the alignment doxygen's own -g output uses
    let _ = writeln!(out, "{:<22}= {}", key, value);
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value)
}

fn yes_no(value: bool) -> &'static str {
    if value { "YES" } else { "NO" }
}
