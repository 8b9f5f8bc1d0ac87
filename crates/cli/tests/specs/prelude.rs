//! Shared helpers for CLI specs

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

pub use similar_asserts::assert_eq;

/// Three-stage raster pipeline used across specs
pub const REPROJECT_COMMAND: &str =
    "raster pipeline ! read in.tif ! reproject --dst-crs EPSG:4326 ! write --of COG out.tif";

/// Scratch directory the CLI runs in
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write an executable shell script
    pub fn script(&self, rel: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.file(rel, &format!("#!/bin/sh\n{}\n", body));
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    /// Run `gdalg parse` to produce a document at `rel`
    pub fn spec_from(&self, rel: &str, command: &str) -> PathBuf {
        self.gdalg().args(&["parse", command, "-o", rel]).passes();
        self.dir.path().join(rel)
    }

    pub fn gdalg(&self) -> CliBuilder {
        let mut cmd = assert_cmd::Command::cargo_bin("gdalg").unwrap();
        cmd.current_dir(self.dir.path())
            .env_remove("GDALG_STEP_MAPPING")
            .env_remove("GDALG_BIN")
            .env_remove("RUST_LOG");
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and require exit status zero
    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        if !run.output.status.success() {
            panic!(
                "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
                run.output.status,
                run.stdout(),
                run.stderr()
            );
        }
        run
    }

    /// Run and require a non-zero exit status
    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        if run.output.status.success() {
            panic!(
                "expected failure\nstdout:\n{}\nstderr:\n{}",
                run.stdout(),
                run.stderr()
            );
        }
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(needle),
            "stdout should contain {:?}\nstdout:\n{}",
            needle,
            stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(needle),
            "stderr should contain {:?}\nstderr:\n{}",
            needle,
            stderr
        );
        self
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).unwrap()
    }
}
