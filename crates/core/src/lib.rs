// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gdalg-core: job and pipeline model
//!
//! This crate provides:
//! - [`Job`]: one command invocation as a plain value
//! - [`Pipeline`]: an ordered chain of jobs with copy-on-extend semantics
//! - [`Invocation`]: either of the two, for code that accepts both
//! - auto-wiring of stage inputs to upstream outputs

mod error;
mod invocation;
mod job;
mod pipeline;
mod value;

pub mod path;
pub mod wiring;

pub use error::{JobError, RenderError};
pub use invocation::Invocation;
pub use job::{is_positional, ArgMapping, ArgRule, Job, StreamFormat, POSITIONAL_ORDER};
pub use path::{is_virtual_path, Category, VSI_STDIN, VSI_STDOUT};
pub use pipeline::Pipeline;
pub use value::{ArgValue, Arguments, Scalar};
pub use wiring::{extend, extend_with};
