// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation runner

use crate::error::RunError;
use crate::request::build_request;
use gdalg_adapters::{ExecOutput, ExecRequest, GdalAdapter};
use gdalg_core::Invocation;
use gdalg_steps::StepTable;
use std::sync::Arc;

/// Runs invocations through an adapter
#[derive(Clone)]
pub struct Runner<G> {
    adapter: G,
    steps: Option<Arc<StepTable>>,
}

impl<G: GdalAdapter> Runner<G> {
    pub fn new(adapter: G) -> Self {
        Self {
            adapter,
            steps: None,
        }
    }

    /// Classify pipeline step names with `table`
    pub fn with_steps(mut self, table: Arc<StepTable>) -> Self {
        self.steps = Some(table);
        self
    }

    pub fn adapter(&self) -> &G {
        &self.adapter
    }

    /// The request `run` would send, without sending it
    pub fn plan(&self, invocation: &Invocation) -> Result<ExecRequest, RunError> {
        build_request(invocation, self.steps.as_deref())
    }

    /// Run an invocation to completion
    pub async fn run(&self, invocation: &Invocation) -> Result<ExecOutput, RunError> {
        let request = self.plan(invocation)?;
        let stages = invocation.jobs().len();

        let start = std::time::Instant::now();
        let result = self.adapter.execute(request).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => tracing::info!(stages, elapsed_ms, "invocation finished"),
            Err(e) => tracing::warn!(stages, elapsed_ms, error = %e, "invocation failed"),
        }
        Ok(result?)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
