//! creformat - Recursive clang-format runner for C-family source trees
//!
//! Walks a source directory, selects files by an extension allow-list,
//! skips vendored paths, and runs the external formatter on each file in
//! place, one at a time.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod process;
pub mod runner;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use discover::collect_source_files;
pub use error::Result;
pub use process::format_all;
pub use runner::{CommandRunner, FormatCommand, RunStatus, SystemRunner};
