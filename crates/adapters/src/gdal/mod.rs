// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution of `gdal` command lines

mod process;

pub use process::{ProcessGdalAdapter, BIN_ENV, DEFAULT_BIN};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeGdalAdapter, GdalCall};

use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors from running the tool
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("failed to start {program}: {reason}")]
    Spawn { program: String, reason: String },
    #[error("command exited with {}: {stderr}", exit_label(.code))]
    Failed { code: Option<i32>, stderr: String },
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

/// How standard output should come back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Decoded as UTF-8, lossily
    Text,
    /// Bytes as written
    Raw,
}

/// One execution of the tool
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecRequest {
    /// Arguments after the program name
    pub args: Vec<String>,
    /// Extra environment for the process
    pub env: BTreeMap<String, String>,
    /// Written to standard input, which is otherwise closed
    pub stdin: Option<String>,
    /// Standard output passes through when `None`
    pub capture: Option<Capture>,
}

impl ExecRequest {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            ..Self::default()
        }
    }
}

/// Result of a successful execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecOutput {
    /// Nothing was captured
    Completed,
    Text(String),
    Raw(Vec<u8>),
}

impl ExecOutput {
    pub fn text(&self) -> Option<&str> {
        match self {
            ExecOutput::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            ExecOutput::Text(s) => Some(s.as_bytes()),
            ExecOutput::Raw(b) => Some(b),
            ExecOutput::Completed => None,
        }
    }
}

/// Adapter that runs the tool
#[async_trait]
pub trait GdalAdapter: Clone + Send + Sync + 'static {
    /// Run one request to completion
    async fn execute(&self, request: ExecRequest) -> Result<ExecOutput, AdapterError>;
}
