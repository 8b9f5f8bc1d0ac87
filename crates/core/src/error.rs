// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Construction and rendering errors

use thiserror::Error;

/// Errors raised immediately when building a job or pipeline
#[derive(Debug, Error, PartialEq)]
pub enum JobError {
    #[error("command path must not be empty")]
    EmptyCommandPath,
    #[error("invalid stream output format: {0:?} (expected \"text\" or \"raw\")")]
    InvalidStreamFormat(String),
    #[error("jobs[[{index}]] {reason}")]
    InvalidJob { index: usize, reason: String },
}

/// Errors raised only when a job or pipeline is rendered
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("cannot render an empty pipeline")]
    EmptyPipeline,
    #[error("cannot determine pipeline category from command path {0:?}")]
    UnknownCategory(Vec<String>),
    #[error("command path {path:?} needs a module and an operation")]
    CommandPathTooShort { path: Vec<String> },
}
