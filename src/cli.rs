//! Command-line interface for creformat.
//!
//! Defines CLI arguments using clap builder API. Every option is an override
//! over the config-file/default values; running with no arguments reproduces
//! the original fixed behavior (walk `source/`, skip `vendor`, run
//! `clang-format` on everything eligible).

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Root directory to format (overrides config)
    pub root: Option<PathBuf>,

    /// Additional file extensions beyond the allow-list
    pub extensions: Vec<String>,

    /// Additional exclusion substrings beyond the configured ones
    pub exclude: Vec<String>,

    /// Formatter executable to invoke (overrides config)
    pub formatter: Option<String>,

    /// Abort on the first non-zero formatter exit code
    pub fail_fast: bool,

    /// List the files that would be formatted without invoking anything
    pub dry_run: bool,

    /// Explicit config file (overrides auto-discovery)
    pub config: Option<PathBuf>,

    /// Silent mode (suppress all output)
    pub silent: bool,

    /// Enable debug output
    pub debug: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("creformat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Recursive clang-format runner for C-family source trees")
        .arg(
            Arg::new("root")
                .help("Root directory to walk [default: source/]")
                .value_name("ROOT")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("extension")
                .short('x')
                .long("extension")
                .help("Additional eligible file extension (can be repeated, e.g. -x cc -x cu)")
                .value_name("EXT")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .help("Additional path substring to exclude (can be repeated) [default: vendor]")
                .value_name("SUBSTR")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("formatter")
                .long("formatter")
                .help("Formatter executable to invoke [default: clang-format]")
                .value_name("CMD"),
        )
        .arg(
            Arg::new("fail-fast")
                .long("fail-fast")
                .help("Abort on the first non-zero formatter exit code")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("List files that would be formatted, without invoking the formatter")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (no output, for scripting)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output (shows effective configuration)")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        root: matches.get_one::<PathBuf>("root").cloned(),
        extensions: matches
            .get_many::<String>("extension")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        exclude: matches
            .get_many::<String>("exclude")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        formatter: matches.get_one::<String>("formatter").cloned(),
        fail_fast: matches.get_flag("fail-fast"),
        dry_run: matches.get_flag("dry-run"),
        config: matches.get_one::<PathBuf>("config").cloned(),
        silent: matches.get_flag("silent"),
        debug: matches.get_flag("debug"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_builds() {
        let cmd = build_cli();
        // Just verify it builds without panic
        assert_eq!(cmd.get_name(), "creformat");
    }

    #[test]
    fn test_cli_defaults() {
        let args = parse_args_from(vec!["creformat"]);

        assert!(args.root.is_none());
        assert!(args.extensions.is_empty());
        assert!(args.exclude.is_empty());
        assert!(args.formatter.is_none());
        assert!(!args.fail_fast);
        assert!(!args.dry_run);
        assert!(args.config.is_none());
        assert!(!args.silent);
        assert!(!args.debug);
    }

    #[test]
    fn test_positional_root() {
        let args = parse_args_from(vec!["creformat", "engine/"]);
        assert_eq!(args.root, Some(PathBuf::from("engine/")));
    }

    #[test]
    fn test_repeated_extensions() {
        let args = parse_args_from(vec!["creformat", "-x", "cc", "-x", "cu"]);
        assert_eq!(args.extensions, vec!["cc", "cu"]);
    }

    #[test]
    fn test_repeated_excludes() {
        let args = parse_args_from(vec![
            "creformat",
            "--exclude",
            "generated",
            "-e",
            "third_party",
        ]);
        assert_eq!(args.exclude, vec!["generated", "third_party"]);
    }

    #[test]
    fn test_formatter_override() {
        let args = parse_args_from(vec!["creformat", "--formatter", "clang-format-18"]);
        assert_eq!(args.formatter, Some("clang-format-18".to_string()));
    }

    #[test]
    fn test_flags() {
        let args = parse_args_from(vec!["creformat", "--fail-fast", "-n", "-S", "-D"]);
        assert!(args.fail_fast);
        assert!(args.dry_run);
        assert!(args.silent);
        assert!(args.debug);
    }

    #[test]
    fn test_config_path() {
        let args = parse_args_from(vec!["creformat", "-c", "tools/creformat.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("tools/creformat.toml")));
    }
}
