// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gdalg-rfc104: GDAL command strings
//!
//! Renders jobs and pipelines as `gdal` CLI command strings
//! (`raster pipeline ! read in.tif ! write out.tif`) and parses such
//! strings back into jobs on a best-effort basis.

mod flags;
mod lexer;
mod parse;
mod quote;
mod render;

pub use flags::{flag_for, is_flag, name_for_flag, FLAG_PREFIX};
pub use lexer::{lex, tokenize, Token};
pub use parse::{
    infer_category, parse, parse_pipeline, step_to_job, ParseError, ParsedCommand, WRITE_STEP,
};
pub use quote::quote;
pub use render::{
    argument_tokens, format_argument, job_args, pipeline_args, render_pipeline,
    render_pipeline_with, render_step, step_tokens, Encoding, DELIMITER, PIPELINE_MARKER,
};
