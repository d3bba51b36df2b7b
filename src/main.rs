//! creformat - Recursive clang-format runner for C-family source trees

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io::{self, Write};

use creformat::{
    collect_source_files, format_all, parse_args, CliArgs, Config, Result, SystemRunner,
};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = parse_args();

    // Build effective configuration: defaults <- config files <- CLI
    let config = build_config(&args)?;

    // Collect all files to process before any invocation starts
    let files = collect_source_files(&config);

    if files.is_empty() {
        if !args.silent {
            eprintln!("No source files found under {}.", config.root.display());
        }
        return Ok(());
    }

    if args.dry_run {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for path in &files {
            writeln!(out, "{}", path.display())?;
        }
        return Ok(());
    }

    let runner = SystemRunner;
    if args.silent {
        format_all(&files, &config, &runner, &mut io::sink())?;
    } else {
        format_all(&files, &config, &runner, &mut io::stdout().lock())?;
    }

    Ok(())
}

/// Build configuration from CLI args and optional config file
///
/// With an explicit `--config` the file is loaded directly; otherwise config
/// files are auto-discovered from the root directory's ancestors (falling
/// back to the current directory when the root does not exist).
fn build_config(args: &CliArgs) -> Result<Config> {
    let discovery_start = args
        .root
        .clone()
        .unwrap_or_else(|| Config::default().root);

    let mut config = if let Some(config_path) = &args.config {
        // Explicit config file specified
        if args.debug {
            eprintln!(
                "[DEBUG] Using explicit config file: {}",
                config_path.display()
            );
        }
        Config::from_toml_file(config_path)?
    } else {
        // Auto-discover config files from parent directories
        if args.debug {
            let discovered = Config::discover_config_files(&discovery_start);
            if discovered.is_empty() {
                eprintln!("[DEBUG] No config files discovered");
            } else {
                eprintln!("[DEBUG] Discovered config files:");
                for f in &discovered {
                    eprintln!("[DEBUG]   - {}", f.display());
                }
            }
        }
        Config::from_discovered_files(&discovery_start)
    };

    // Override with CLI arguments
    if let Some(root) = &args.root {
        config.root = root.clone();
    }
    if let Some(formatter) = &args.formatter {
        config.formatter = formatter.clone();
    }
    if args.fail_fast {
        config.fail_fast = true;
    }
    // Repeatable options extend the configured lists rather than replacing them
    for ext in &args.extensions {
        config.extensions.push(ext.clone());
    }
    for marker in &args.exclude {
        config.exclude.push(marker.clone());
    }

    // Print final config in debug mode
    if args.debug {
        print_config_debug(&config);
    }

    // Validate configuration
    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}

/// Print configuration values in debug mode
fn print_config_debug(config: &Config) {
    eprintln!("[DEBUG] Configuration:");
    eprintln!("[DEBUG]   root: {}", config.root.display());
    eprintln!("[DEBUG]   extensions: {:?}", config.extensions);
    eprintln!("[DEBUG]   exclude: {:?}", config.exclude);
    eprintln!("[DEBUG]   formatter: {}", config.formatter);
    eprintln!("[DEBUG]   fail_fast: {}", config.fail_fast);
}
