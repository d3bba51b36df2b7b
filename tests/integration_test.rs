//! Integration tests for creformat
//!
//! These tests verify discovery and the format loop working together over a
//! real (temporary) directory tree, with a fake runner standing in for the
//! external formatter.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::cell::RefCell;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use creformat::{
    collect_source_files, format_all, CommandRunner, Config, FormatCommand, RunStatus,
};

/// Fake runner that records every invocation instead of shelling out
#[derive(Default)]
struct RecordingRunner {
    calls: RefCell<Vec<FormatCommand>>,
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &FormatCommand) -> io::Result<RunStatus> {
        self.calls.borrow_mut().push(command.clone());
        Ok(RunStatus { code: Some(0) })
    }
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"").unwrap();
}

fn config_rooted_at(root: &Path) -> Config {
    Config {
        root: root.to_path_buf(),
        ..Default::default()
    }
}

#[test]
fn test_discover_then_format_source_tree() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("engine/adelie.cxx"));
    touch(&dir.path().join("engine/adelie.hxx"));
    touch(&dir.path().join("engine/CMakeLists.cmake"));
    touch(&dir.path().join("engine/notes.md"));
    touch(&dir.path().join("vendor/imgui/imgui.cpp"));

    let config = config_rooted_at(dir.path());
    let files = collect_source_files(&config);

    // Markdown filtered by extension, vendor tree filtered by substring
    assert_eq!(files.len(), 3);

    let runner = RecordingRunner::default();
    let mut out = Vec::new();
    let processed = format_all(&files, &config, &runner, &mut out).unwrap();

    // Exactly one invocation and one progress line per discovered file
    assert_eq!(processed, files.len());
    assert_eq!(runner.calls.borrow().len(), files.len());

    let output = String::from_utf8(out).unwrap();
    assert_eq!(output.lines().count(), files.len());
    for (line, file) in output.lines().zip(&files) {
        assert_eq!(line, format!("Formatted {}...", file.display()));
    }
}

#[test]
fn test_every_invocation_targets_a_discovered_file() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("a.c"));
    touch(&dir.path().join("sub/b.mm"));

    let config = config_rooted_at(dir.path());
    let files = collect_source_files(&config);
    assert_eq!(files.len(), 2);

    let runner = RecordingRunner::default();
    format_all(&files, &config, &runner, &mut Vec::new()).unwrap();

    for (call, file) in runner.calls.borrow().iter().zip(&files) {
        assert_eq!(call.program, "clang-format");
        assert_eq!(
            call.args,
            vec![
                OsString::from("--style=file"),
                OsString::from("-i"),
                OsString::from("--sort-includes"),
                file.as_os_str().to_os_string(),
            ]
        );
    }
}

#[test]
fn test_nonexistent_root_formats_nothing() {
    let config = config_rooted_at(&PathBuf::from("/nonexistent/creformat/it"));
    let files = collect_source_files(&config);
    assert!(files.is_empty());

    let runner = RecordingRunner::default();
    let mut out = Vec::new();
    let processed = format_all(&files, &config, &runner, &mut out).unwrap();

    assert_eq!(processed, 0);
    assert!(runner.calls.borrow().is_empty());
    assert!(out.is_empty());
}

#[test]
fn test_additional_extensions_and_excludes() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("kernels/fft.cu"));
    touch(&dir.path().join("kernels/fft.cpp"));
    touch(&dir.path().join("generated/proto.cpp"));

    let mut config = config_rooted_at(dir.path());
    config.extensions.push("cu".to_string());
    config.exclude.push("generated".to_string());

    let mut files = collect_source_files(&config);
    files.sort();

    assert_eq!(
        files,
        vec![
            dir.path().join("kernels/fft.cpp"),
            dir.path().join("kernels/fft.cu"),
        ]
    );
}
