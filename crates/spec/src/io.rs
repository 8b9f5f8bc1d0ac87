// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reading and writing document files

use crate::document::HybridSpec;
use crate::error::SpecError;
use crate::load::{from_spec, LoadedSpec};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a document as pretty-printed JSON
pub fn save_spec(path: &Path, spec: &HybridSpec) -> Result<(), SpecError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, spec)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    tracing::info!(path = %path.display(), stages = spec.r_job_specs.len(), "saved specification");
    Ok(())
}

/// Read and load a document file
pub fn load_spec(path: &Path) -> Result<LoadedSpec, SpecError> {
    let file = File::open(path)?;
    let document: Value = serde_json::from_reader(BufReader::new(file))?;
    let loaded = from_spec(&document)?;
    tracing::info!(path = %path.display(), source = ?loaded.source, "loaded specification");
    Ok(loaded)
}

#[cfg(test)]
#[path = "io_tests.rs"]
mod tests;
