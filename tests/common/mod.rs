use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated project root plus a controlled PATH for fake generator binaries.
pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    bin_dir: PathBuf,
    observed: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("project");
        let bin_dir = tmp.path().join("bin");
        let observed = tmp.path().join("observed-listing.txt");
        fs::create_dir_all(&root).expect("create project root");
        fs::create_dir_all(&bin_dir).expect("create fake bin dir");

        Self {
            _tmp: tmp,
            root,
            bin_dir,
            observed,
        }
    }

    /// docforge invocation rooted at the project dir. The environment is
    /// cleared and PATH holds only the fake-bin directory, so nothing from
    /// the host machine leaks in.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("docforge").expect("binary under test");
        cmd.current_dir(&self.root)
            .env_clear()
            .env("PATH", &self.bin_dir);
        cmd
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.join("decompiled")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join("static/api")
    }

    /// Seed a small decompiled tree (two .java files, one extra non-source)
    pub fn seed_sources(&self) {
        write_file(
            &self.source_dir().join("net/server/Entity.java"),
            "public class Entity {}\n",
        );
        write_file(
            &self.source_dir().join("net/server/world/Chunk.java"),
            "public class Chunk {}\n",
        );
        write_file(&self.source_dir().join("net/server/assets.bin"), "binary\n");
    }

    /// Seed a stale pre-existing output file; returns its path
    pub fn seed_stale_output(&self) -> PathBuf {
        let stale = self.output_dir().join("stale.html");
        write_file(&stale, "old reference");
        stale
    }

    /// Install a fake doxygen: answers --version, records the listing of the
    /// output directory it sees at invocation time, then writes three files
    /// (one nested) the way a real run would.
    pub fn install_fake_doxygen(&self) {
        self.install_fake_doxygen_as("doxygen");
    }

    /// Same fake under an alternate executable name
    pub fn install_fake_doxygen_as(&self, name: &str) {
        let script = format!(
            r#"#!/bin/sh
PATH=/usr/bin:/bin
if [ "$1" = "--version" ]; then
    echo 1.9.8
    exit 0
fi
out=$(sed -n 's/^OUTPUT_DIRECTORY[[:space:]]*=[[:space:]]*//p' "$1" | sed 's/^"//; s/"$//')
ls -A "$out" > "{observed}" 2>/dev/null
mkdir -p "$out/search"
echo '<html>index</html>' > "$out/index.html"
echo '<html>classes</html>' > "$out/annotated.html"
echo 'var searchData=[];' > "$out/search/search.js"
exit 0
"#,
            observed = self.observed.display()
        );
        self.install_script(name, &script);
    }

    /// Install a fake doxygen that probes fine but fails the real run
    pub fn install_failing_doxygen(&self) {
        let script = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
    echo 1.9.8
    exit 0
fi
echo 'error during generation' >&2
exit 2
"#;
        self.install_script("doxygen", script);
    }

    /// What the fake generator saw in the output directory when it started
    pub fn observed_listing(&self) -> String {
        fs::read_to_string(&self.observed).expect("fake doxygen ran")
    }

    /// Whether the fake generator ran at all
    pub fn generator_ran(&self) -> bool {
        self.observed.exists()
    }

    /// Temp Doxyfiles left behind in the project root
    pub fn leftover_doxyfiles(&self) -> Vec<PathBuf> {
        fs::read_dir(&self.root)
            .expect("project root exists")
            .flatten()
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| n.starts_with("Doxyfile."))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Count regular files under a directory, recursively
    pub fn count_files(dir: &Path) -> usize {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => return 0,
        };
        entries
            .flatten()
            .map(|entry| {
                let path = entry.path();
                if path.is_dir() {
                    Self::count_files(&path)
                } else {
                    1
                }
            })
            .sum()
    }

    fn install_script(&self, name: &str, content: &str) {
        let path = self.bin_dir.join(name);
        fs::write(&path, content).expect("write fake binary");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("mark fake binary executable");
        }
    }
}

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write file");
}
