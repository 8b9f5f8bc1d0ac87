// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gdalg-spec: hybrid specification documents
//!
//! Persists pipelines as JSON documents that carry both a portable GDALG
//! command line and a lossless snapshot of every job.

mod document;
mod error;
mod io;
mod load;
mod snapshot;

pub use document::{
    to_spec, to_spec_with, GdalgSection, HybridSpec, Metadata, SpecOptions, FORMAT_VERSION,
    GDALG_TYPE, GDAL_VERSION_REQUIRED,
};
pub use error::SpecError;
pub use io::{load_spec, save_spec};
pub use load::{from_spec, from_str, LoadedSpec, SpecSource};
pub use snapshot::JobSnapshot;
