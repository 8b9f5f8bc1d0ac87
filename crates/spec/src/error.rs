// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use gdalg_core::RenderError;
use gdalg_rfc104::ParseError;
use thiserror::Error;

/// Errors that can occur while saving or loading a specification document
#[derive(Debug, Error)]
pub enum SpecError {
    /// Not JSON at all
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unrecognized specification format")]
    UnrecognizedFormat,
    #[error("format no longer supported: {0}")]
    UnsupportedLegacyFormat(String),
    /// Recognized shape, inconsistent contents
    #[error("invalid specification: {0}")]
    Validation(String),
    #[error("r_job_specs[[{index}]] {reason}")]
    InvalidJob { index: usize, reason: String },
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
