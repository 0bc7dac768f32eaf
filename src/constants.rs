//! Global Constants
//!
//! Centralized defaults for paths and the external generator.
//! All fixed names and magic values should be defined here with documentation.

/// Default workspace layout, relative to the project root
pub mod paths {
    /// Decompiled Java sources the reference is generated from
    pub const SOURCE_DIR: &str = "decompiled";

    /// Destination for the generated HTML reference, served by the site
    pub const OUTPUT_DIR: &str = "static/api";

    /// Project configuration file
    pub const CONFIG_FILE: &str = "docforge.toml";
}

/// External generator constants
pub mod doxygen {
    /// Executable resolved on PATH unless configured otherwise
    pub const BINARY: &str = "doxygen";

    /// The single file glob the generator traverses
    pub const FILE_PATTERN: &str = "*.java";

    /// PROJECT_NAME tag written into the rendered Doxyfile
    pub const PROJECT_NAME: &str = "Server Modding API";

    /// PROJECT_NUMBER tag written into the rendered Doxyfile
    pub const PROJECT_VERSION: &str = "unreleased";

    /// Name parts of the transient Doxyfile left in the project root while
    /// the generator runs
    pub const TEMP_PREFIX: &str = "Doxyfile.";
    pub const TEMP_SUFFIX: &str = ".tmp";
}

/// Prefix for environment variable configuration overrides
pub const ENV_PREFIX: &str = "DOCFORGE_";
