// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing flashtrie CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::marker::PhantomData;
use std::path::Path;
use std::process::{Command, Stdio};

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the flashtrie binary
pub fn flashtrie_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("flashtrie"));
    for var in ["FLASHTRIE_CONFIG", "FLASHTRIE_LOG", "NO_COLOR", "COLOR"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Create an extract command builder
pub fn extract() -> RunBuilder<Text> {
    RunBuilder::new("extract")
}

/// Create a list command builder
pub fn list() -> RunBuilder<Text> {
    RunBuilder::new("list")
}

/// Typestate markers for output mode
pub struct Text;
pub struct Json;

/// High-level command builder for fluent test assertions
pub struct RunBuilder<Mode = Text> {
    subcommand: &'static str,
    dir: Option<std::path::PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
    _mode: PhantomData<Mode>,
}

#[allow(dead_code)]
impl RunBuilder<Text> {
    fn new(subcommand: &'static str) -> Self {
        Self {
            subcommand,
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
            stdin: None,
            _mode: PhantomData,
        }
    }

    pub fn json(self) -> RunBuilder<Json> {
        RunBuilder {
            subcommand: self.subcommand,
            dir: self.dir,
            args: self.args,
            envs: self.envs,
            stdin: self.stdin,
            _mode: PhantomData,
        }
    }

    /// Expect exit code 0
    pub fn passes(self) -> RunAssert {
        run_exits(self.command(), 0)
    }

    /// Expect exit code 1 (nothing found)
    pub fn finds_nothing(self) -> RunAssert {
        run_exits(self.command(), 1)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(), code)
    }
}

#[allow(dead_code)]
impl RunBuilder<Json> {
    pub fn passes(self) -> serde_json::Value {
        parse_json(run_exits(self.command(), 0))
    }

    pub fn finds_nothing(self) -> serde_json::Value {
        parse_json(run_exits(self.command(), 1))
    }
}

fn parse_json(run: RunAssert) -> serde_json::Value {
    serde_json::from_slice(&run.output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout should be JSON: {}\nstdout: {}",
            e,
            String::from_utf8_lossy(&run.output.stdout)
        )
    })
}

#[allow(dead_code)]
impl<Mode: 'static> RunBuilder<Mode> {
    /// Set working directory
    pub fn pwd(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Add an inline keyword (`pattern` or `pattern=>value`)
    pub fn keyword(self, keyword: &str) -> Self {
        self.args(&["-k", keyword])
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Feed `input` on stdin
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Build the command without running it
    fn command(self) -> (Command, Option<String>) {
        let is_json = std::any::TypeId::of::<Mode>() == std::any::TypeId::of::<Json>();
        let mut cmd = flashtrie_cmd();
        cmd.arg(self.subcommand);

        if is_json {
            cmd.args(["-o", "json"]);
        }

        cmd.args(&self.args);

        match self.dir {
            Some(dir) => cmd.current_dir(dir),
            // Keep discovery away from any flashtrie.toml around the checkout.
            None => cmd.current_dir(std::env::temp_dir()),
        };

        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        (cmd, self.stdin)
    }
}

fn run_exits((mut cmd, stdin): (Command, Option<String>), code: i32) -> RunAssert {
    let output = match stdin {
        Some(input) => assert_cmd::Command::from_std(cmd)
            .write_stdin(input)
            .output()
            .expect("command should run"),
        None => cmd
            .stdin(Stdio::null())
            .output()
            .expect("command should run"),
    };
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Result of a run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    /// Prefer `stdout_eq` for strict matching.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary project directory with helper methods.
///
/// Reduces boilerplate by:
/// - Auto-creating parent directories
/// - Adding `version = 1` prefix to config
/// - Marking the directory as a git root so config discovery stops there
///
/// # Examples
///
/// ```ignore
/// let temp = Project::empty();
/// temp.config("[sources]\nlists = [\"cities.txt\"]");
/// temp.file("cities.txt", "NY=>new york\n");
/// extract().pwd(temp.path()).args(&["I love NY"]).passes();
/// ```
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project (git root, no config)
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write flashtrie.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        self.file("flashtrie.toml", &content);
    }

    /// Write a file, creating parent directories
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }
}
