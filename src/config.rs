//! Configuration management for creformat.
//!
//! This module provides the [`Config`] struct which controls which files get
//! formatted and how the external formatter is invoked. Configuration can be
//! loaded from:
//! - TOML files (`creformat.toml`)
//! - CLI arguments (which override file settings)
//!
//! Config files are auto-discovered by searching parent directories from the
//! working directory up to the filesystem root, plus the user's home directory.
//!
//! The defaults reproduce the zero-argument behavior: format everything under
//! `source/` with extensions `c cpp cxx h hpp hxx m mm json cmake`, skipping
//! any path containing `vendor`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["creformat.toml"];

/// Extensions eligible for formatting when no overrides are given
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "c", "cpp", "cxx", "h", "hpp", "hxx", "m", "mm", "json", "cmake",
];

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    // Try HOME environment variable first (works on Unix and some Windows setups)
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Fallback for Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

// Serde default functions
fn default_root() -> PathBuf {
    PathBuf::from("source/")
}
fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()
}
fn default_exclude() -> Vec<String> {
    vec!["vendor".to_string()]
}
fn default_formatter() -> String {
    "clang-format".to_string()
}

/// Main configuration struct for creformat
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Root directory to walk for source files (default: `source/`)
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// File extensions eligible for formatting, with or without a leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Path substrings that exclude a file from formatting (default: `vendor`)
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// External formatter executable (default: `clang-format`)
    #[serde(default = "default_formatter")]
    pub formatter: String,

    /// Abort on the first non-zero formatter exit code (default: false)
    ///
    /// The lenient default matches the historical behavior: the exit code is
    /// not inspected and the progress line prints either way.
    #[serde(default)]
    pub fail_fast: bool,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    pub root: Option<PathBuf>,
    pub extensions: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub formatter: Option<String>,
    pub fail_fast: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root: default_root(),
            extensions: default_extensions(),
            exclude: default_exclude(),
            formatter: default_formatter(),
            fail_fast: false,
        }
    }
}

impl Config {
    /// Validate configuration values
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.extensions.is_empty() {
            return Some("extension list must not be empty".to_string());
        }
        if self.formatter.trim().is_empty() {
            return Some("formatter command must not be empty".to_string());
        }
        if self
            .extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').is_empty())
        {
            return Some("extension entries must not be empty".to_string());
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = &partial.root {
            self.root = v.clone();
        }
        if let Some(v) = &partial.extensions {
            self.extensions = v.clone();
        }
        if let Some(v) = &partial.exclude {
            self.exclude = v.clone();
        }
        if let Some(v) = &partial.formatter {
            self.formatter = v.clone();
        }
        if let Some(v) = partial.fail_fast {
            self.fail_fast = v;
        }
    }

    /// Discover config files from parent directories of a given path
    ///
    /// Searches from the path's directory up to the root, then adds home directory config.
    /// Returns list of config file paths in order of priority (least specific first).
    #[must_use]
    pub fn discover_config_files(start_path: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        // Add home directory config first (lowest priority)
        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        // Start from the path's parent directory (or the path itself if it's a directory)
        let start_dir = if start_path.is_file() {
            start_path.parent().map(Path::to_path_buf)
        } else if start_path.is_dir() {
            Some(start_path.to_path_buf())
        } else {
            // Path doesn't exist, use current directory
            std::env::current_dir().ok()
        };

        // Collect config files from parent directories (from root to current)
        if let Some(dir) = start_dir {
            let mut ancestors: Vec<PathBuf> = dir.ancestors().map(Path::to_path_buf).collect();
            // Reverse so we go from root to current (less specific to more specific)
            ancestors.reverse();

            for ancestor in ancestors {
                for config_name in CONFIG_FILE_NAMES {
                    let config_path = ancestor.join(config_name);
                    if config_path.is_file() && !config_files.contains(&config_path) {
                        config_files.push(config_path);
                    }
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Returns default config if no files found.
    #[must_use]
    pub fn from_discovered_files(start_path: &Path) -> Self {
        let config_files = Self::discover_config_files(start_path);

        if config_files.is_empty() {
            return Self::default();
        }

        let mut config = Self::default();
        for path in &config_files {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<PartialConfig>(&contents) {
                    Ok(partial) => config.apply_partial(&partial),
                    Err(e) => eprintln!("Warning: failed to parse {}: {e}", path.display()),
                },
                Err(e) => eprintln!("Warning: failed to read {}: {e}", path.display()),
            }
        }
        config
    }

    /// Check whether an extension (without leading dot) is in the allow-list
    ///
    /// List entries may be written with or without a leading dot.
    #[must_use]
    pub fn allows_extension(&self, ext: &str) -> bool {
        self.extensions
            .iter()
            .any(|allowed| allowed.strip_prefix('.').unwrap_or(allowed) == ext)
    }
}
