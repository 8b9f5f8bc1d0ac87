// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::gdal::{AdapterError, ExecOutput, ExecRequest, GdalAdapter};
use async_trait::async_trait;
use tracing::Instrument;

/// Wrapper that adds tracing to any GdalAdapter
#[derive(Clone)]
pub struct TracedGdalAdapter<G> {
    inner: G,
}

impl<G> TracedGdalAdapter<G> {
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

#[async_trait]
impl<G: GdalAdapter> GdalAdapter for TracedGdalAdapter<G> {
    async fn execute(&self, request: ExecRequest) -> Result<ExecOutput, AdapterError> {
        let command = request
            .args
            .iter()
            .take(2)
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        let span = tracing::info_span!("gdal.execute", command = %command);

        async move {
            tracing::info!(
                args = request.args.len(),
                env_count = request.env.len(),
                stdin = request.stdin.is_some(),
                capture = ?request.capture,
                "starting"
            );

            // Precondition: there must be something to run
            if request.args.is_empty() {
                tracing::error!("empty argument vector");
                return Err(AdapterError::InvalidRequest(
                    "empty argument vector".to_string(),
                ));
            }
            tracing::debug!(argv = ?request.args, "argument vector");

            let start = std::time::Instant::now();
            let result = self.inner.execute(request).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(output) => tracing::info!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    captured_len = output.bytes().map(<[u8]>::len),
                    "completed"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "execution failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
