//! Source file discovery.
//!
//! Recursively walks the configured root directory and collects every file
//! whose extension is in the allow-list and whose path does not contain any
//! exclusion substring. The whole list is materialized before any formatting
//! starts, so the subsequent in-place rewrites cannot disturb the walk.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;

/// Collect all source files under `config.root`, in depth-first walk order
///
/// No sorting is applied; output order is whatever order the filesystem
/// yields entries in. A nonexistent or unreadable root produces an empty
/// list rather than an error.
#[must_use]
pub fn collect_source_files(config: &Config) -> Vec<PathBuf> {
    let mut files = Vec::new();

    // Note: WalkDir detects symlink loops when follow_links(true) and
    // returns errors for them. We skip errors via filter_map(ok), which also
    // makes a missing root yield an empty walk instead of failing.
    // max_depth prevents runaway traversal in pathological directory structures.
    for entry in WalkDir::new(&config.root)
        .follow_links(true)
        .max_depth(256)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        let path = entry.path();
        if path.is_file() && has_allowed_extension(path, config) && !is_excluded(path, config) {
            files.push(path.to_path_buf());
        }
    }

    files
}

/// Check if a file's extension is in the configured allow-list
fn has_allowed_extension(path: &Path, config: &Config) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| config.allows_extension(ext))
}

/// Check if a path contains any configured exclusion substring
///
/// Containment is over the full path string, so `vendor` skips both
/// `source/vendor/x.cpp` and `source/vendored_lib/y.cpp`.
fn is_excluded(path: &Path, config: &Config) -> bool {
    if config.exclude.is_empty() {
        return false;
    }

    let path_str = path.to_string_lossy();
    config.exclude.iter().any(|marker| path_str.contains(marker))
}
