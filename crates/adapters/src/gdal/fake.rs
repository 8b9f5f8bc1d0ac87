// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake tool adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{AdapterError, Capture, ExecOutput, ExecRequest, GdalAdapter};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Recorded execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GdalCall {
    pub request: ExecRequest,
}

#[derive(Debug, Clone)]
enum Scripted {
    Output(ExecOutput),
    Failure { code: Option<i32>, stderr: String },
}

/// Fake tool adapter for testing
///
/// Replays scripted results in order. With nothing scripted, succeeds with
/// empty output in the requested capture mode.
#[derive(Clone, Default)]
pub struct FakeGdalAdapter {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    calls: Arc<Mutex<Vec<GdalCall>>>,
}

impl FakeGdalAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<GdalCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Queue a successful result
    pub fn respond_with(&self, output: ExecOutput) {
        self.script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Scripted::Output(output));
    }

    /// Queue a failed exit
    pub fn fail_with(&self, code: i32, stderr: &str) {
        self.script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Scripted::Failure {
                code: Some(code),
                stderr: stderr.to_string(),
            });
    }
}

#[async_trait]
impl GdalAdapter for FakeGdalAdapter {
    async fn execute(&self, request: ExecRequest) -> Result<ExecOutput, AdapterError> {
        let capture = request.capture;
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(GdalCall { request });

        let next = self.script.lock().unwrap_or_else(|e| e.into_inner()).pop_front();
        match next {
            Some(Scripted::Output(output)) => Ok(output),
            Some(Scripted::Failure { code, stderr }) => Err(AdapterError::Failed { code, stderr }),
            None => Ok(match capture {
                None => ExecOutput::Completed,
                Some(Capture::Text) => ExecOutput::Text(String::new()),
                Some(Capture::Raw) => ExecOutput::Raw(Vec::new()),
            }),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
