// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for running invocations

use gdalg_adapters::AdapterError;
use gdalg_core::RenderError;
use thiserror::Error;

/// Errors that can occur while running an invocation
#[derive(Debug, Error)]
pub enum RunError {
    #[error("cannot render command: {0}")]
    Render(#[from] RenderError),
    #[error(transparent)]
    Adapter(#[from] AdapterError),
}
