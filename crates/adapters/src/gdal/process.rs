// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess adapter

use super::{AdapterError, Capture, ExecOutput, ExecRequest, GdalAdapter};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Environment variable naming the tool binary
pub const BIN_ENV: &str = "GDALG_BIN";

pub const DEFAULT_BIN: &str = "gdal";

/// Runs the tool as a child process
#[derive(Clone)]
pub struct ProcessGdalAdapter {
    program: String,
}

impl ProcessGdalAdapter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program from `GDALG_BIN`, else `gdal` on the search path
    pub fn from_env() -> Self {
        match std::env::var(BIN_ENV) {
            Ok(program) if !program.is_empty() => Self::new(program),
            _ => Self::new(DEFAULT_BIN),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for ProcessGdalAdapter {
    fn default() -> Self {
        Self::from_env()
    }
}

#[async_trait]
impl GdalAdapter for ProcessGdalAdapter {
    async fn execute(&self, request: ExecRequest) -> Result<ExecOutput, AdapterError> {
        let mut command = Command::new(&self.program);
        command
            .args(&request.args)
            .envs(&request.env)
            .stdin(if request.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(if request.capture.is_some() {
                Stdio::piped()
            } else {
                Stdio::inherit()
            })
            .stderr(Stdio::piped());

        let mut child = command.spawn().map_err(|e| AdapterError::Spawn {
            program: self.program.clone(),
            reason: e.to_string(),
        })?;

        // Feed stdin concurrently so a chatty child cannot block on a full pipe
        let feeder = match (child.stdin.take(), request.stdin) {
            (Some(mut stdin), Some(payload)) => Some(tokio::spawn(async move {
                stdin.write_all(payload.as_bytes()).await?;
                stdin.shutdown().await
            })),
            _ => None,
        };

        let output = child.wait_with_output().await?;

        if let Some(feeder) = feeder {
            match feeder.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::debug!(error = %e, "child closed stdin early"),
                Err(e) => tracing::debug!(error = %e, "stdin writer did not finish"),
            }
        }

        if !output.status.success() {
            return Err(AdapterError::Failed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        Ok(match request.capture {
            None => ExecOutput::Completed,
            Some(Capture::Text) => ExecOutput::Text(String::from_utf8_lossy(&output.stdout).into_owned()),
            Some(Capture::Raw) => ExecOutput::Raw(output.stdout),
        })
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
