//! External formatter invocation.
//!
//! The formatter is driven through the [`CommandRunner`] trait so the format
//! loop can be exercised in tests with a fake runner that records invocations
//! instead of shelling out. The production implementation,
//! [`SystemRunner`], spawns the real process and blocks until it exits.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// One fully-assembled formatter invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatCommand {
    /// Executable name or path (e.g. `clang-format`)
    pub program: String,
    /// Arguments, including the target file as the final element
    pub args: Vec<OsString>,
}

impl FormatCommand {
    /// Build the invocation for a single file:
    /// `<formatter> --style=file -i --sort-includes <file>`
    ///
    /// `--style=file` asks the formatter to locate its own style config;
    /// `-i` rewrites the file in place.
    #[must_use]
    pub fn for_file(formatter: &str, file: &Path) -> Self {
        FormatCommand {
            program: formatter.to_string(),
            args: vec![
                OsString::from("--style=file"),
                OsString::from("-i"),
                OsString::from("--sort-includes"),
                file.as_os_str().to_os_string(),
            ],
        }
    }
}

/// Exit status of a completed invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// Exit code, or None if the process was terminated by a signal
    pub code: Option<i32>,
}

impl RunStatus {
    #[must_use]
    pub fn success(self) -> bool {
        self.code == Some(0)
    }
}

/// Capability to run a formatter invocation to completion
pub trait CommandRunner {
    /// Run the command synchronously and return its exit status
    ///
    /// Returns an error only if the process could not be spawned or waited
    /// on (e.g. the executable is missing); a formatter that runs and exits
    /// non-zero is reported through [`RunStatus`].
    fn run(&self, command: &FormatCommand) -> io::Result<RunStatus>;
}

/// Runner that spawns the real external process
///
/// The child's stdout is discarded so the console carries only our progress
/// lines; its stderr is inherited so formatter diagnostics still reach the
/// user.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &FormatCommand) -> io::Result<RunStatus> {
        let status = Command::new(&command.program)
            .args(&command.args)
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(RunStatus {
            code: status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_format_command_argument_order() {
        let cmd = FormatCommand::for_file("clang-format", Path::new("source/main.cpp"));

        assert_eq!(cmd.program, "clang-format");
        assert_eq!(
            cmd.args,
            vec![
                OsString::from("--style=file"),
                OsString::from("-i"),
                OsString::from("--sort-includes"),
                OsString::from("source/main.cpp"),
            ]
        );
    }

    #[test]
    fn test_format_command_custom_formatter() {
        let cmd = FormatCommand::for_file("clang-format-18", Path::new("a.h"));
        assert_eq!(cmd.program, "clang-format-18");
        assert_eq!(cmd.args.last(), Some(&OsString::from("a.h")));
    }

    #[test]
    fn test_run_status_success() {
        assert!(RunStatus { code: Some(0) }.success());
        assert!(!RunStatus { code: Some(1) }.success());
        assert!(!RunStatus { code: None }.success());
    }

    #[test]
    fn test_system_runner_missing_executable() {
        let runner = SystemRunner;
        let cmd = FormatCommand::for_file(
            "creformat-no-such-tool-xyz",
            &PathBuf::from("whatever.cpp"),
        );
        assert!(runner.run(&cmd).is_err());
    }
}
