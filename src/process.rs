//! The format loop.
//!
//! Consumes the discovered file list one entry at a time, invoking the
//! external formatter synchronously for each and reporting progress on the
//! supplied writer. There is no parallelism: each invocation is fully waited
//! before the next file starts.

use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::runner::{CommandRunner, FormatCommand};

/// Format every file in `files`, in order, printing one progress line each
///
/// In the default lenient mode the formatter's exit code is ignored and the
/// progress line prints whether or not the tool succeeded internally. With
/// `config.fail_fast` the first non-zero exit aborts the run before its
/// progress line. A spawn failure (formatter not installed) always aborts.
///
/// Returns the number of files processed.
pub fn format_all(
    files: &[PathBuf],
    config: &Config,
    runner: &dyn CommandRunner,
    out: &mut dyn Write,
) -> Result<usize> {
    let mut processed = 0;

    for path in files {
        let command = FormatCommand::for_file(&config.formatter, path);
        let status = runner.run(&command)?;

        if config.fail_fast && !status.success() {
            anyhow::bail!(
                "{} exited with {} while formatting {}",
                config.formatter,
                status
                    .code
                    .map_or_else(|| "a signal".to_string(), |c| format!("code {c}")),
                path.display()
            );
        }

        writeln!(out, "Formatted {}...", path.display())?;
        processed += 1;
    }

    Ok(processed)
}
