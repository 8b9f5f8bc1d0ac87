// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gdalg-engine: running jobs and pipelines

mod error;
mod request;
mod runner;

pub use error::RunError;
pub use request::{
    build_request, job_request, pipeline_request, with_stream_placeholders, CONFIG_FLAG,
};
pub use runner::Runner;
