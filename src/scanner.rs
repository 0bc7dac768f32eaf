//! Recursive file counting
//!
//! Backs the generated-file report and the status/check summaries. Counts
//! are exact: no ignore rules, hidden files included, so the numbers match
//! what `find <dir> -type f` shows an operator.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use ignore::WalkBuilder;

pub struct FileScanner {
    root: PathBuf,
    pattern: Option<glob::Pattern>,
}

impl FileScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            pattern: None,
        }
    }

    /// Restrict counting to file names matching a glob, e.g. `*.java`
    pub fn with_pattern(mut self, pattern: glob::Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Count regular files under the root. A missing root counts as zero.
    pub fn count(&self) -> usize {
        self.walk().filter(|path| self.matches(path)).count()
    }

    /// Modification time of the newest matching file, if any
    pub fn newest_mtime(&self) -> Option<SystemTime> {
        self.walk()
            .filter(|path| self.matches(path))
            .filter_map(|path| path.metadata().ok())
            .filter_map(|meta| meta.modified().ok())
            .max()
    }

    fn walk(&self) -> impl Iterator<Item = PathBuf> {
        WalkBuilder::new(&self.root)
            .hidden(false)
            .parents(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .follow_links(false)
            .build()
            .filter_map(|e| e.ok())
            .map(|entry| entry.into_path())
            .filter(|path| path.is_file())
    }

    fn matches(&self, path: &Path) -> bool {
        match &self.pattern {
            Some(pattern) => path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|name| pattern.matches(name))
                .unwrap_or(false),
            None => true,
        }
    }
}
