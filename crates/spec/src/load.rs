// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loading documents back into pipelines
//!
//! Shapes are tried in order:
//! 1. `gdalg` plus a non-empty `r_job_specs`: rebuilt from snapshots
//! 2. `gdalg` alone, or `type`/`command_line` at the root: parsed from the
//!    command line, losing arity metadata, configuration and environment
//! 3. a root `steps` array: rejected as a retired format
//!
//! Anything else is unrecognized.

use crate::document::{Metadata, GDALG_TYPE};
use crate::error::SpecError;
use crate::snapshot::JobSnapshot;
use gdalg_core::Pipeline;
use gdalg_rfc104::parse_pipeline;
use serde_json::{Map, Value};

/// Which part of the document the pipeline came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecSource {
    /// Structured snapshots, nothing lost
    Hybrid,
    /// Parsed command line only
    PortableOnly,
}

impl SpecSource {
    pub fn is_lossless(&self) -> bool {
        matches!(self, SpecSource::Hybrid)
    }
}

/// A loaded pipeline and how it was recovered
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSpec {
    pub pipeline: Pipeline,
    pub source: SpecSource,
    /// Absent for portable-only documents
    pub metadata: Option<Metadata>,
    /// The portable command line as stored
    pub command_line: String,
}

/// Load a document from JSON text
pub fn from_str(json: &str) -> Result<LoadedSpec, SpecError> {
    let document: Value = serde_json::from_str(json)?;
    from_spec(&document)
}

/// Load a document value
pub fn from_spec(document: &Value) -> Result<LoadedSpec, SpecError> {
    let root = document.as_object().ok_or(SpecError::UnrecognizedFormat)?;

    if let Some(gdalg) = root.get("gdalg") {
        let section = gdalg
            .as_object()
            .ok_or_else(|| SpecError::Validation("gdalg must be an object".to_string()))?;
        let command_line = command_line(section, "gdalg")?;
        let metadata = metadata(root);

        return match root.get("r_job_specs") {
            Some(Value::Array(specs)) if !specs.is_empty() => {
                load_snapshots(specs, metadata, command_line)
            }
            None | Some(Value::Null) | Some(Value::Array(_)) => {
                load_portable(command_line, metadata)
            }
            Some(_) => Err(SpecError::Validation(
                "r_job_specs must be an array".to_string(),
            )),
        };
    }

    if root.contains_key("type") && root.contains_key("command_line") {
        let command_line = command_line(root, "document")?;
        return load_portable(command_line, None);
    }

    if root.get("steps").is_some_and(Value::is_array) {
        return Err(SpecError::UnsupportedLegacyFormat(
            "root-level `steps` arrays were replaced by the gdalg/r_job_specs layout".to_string(),
        ));
    }

    Err(SpecError::UnrecognizedFormat)
}

fn command_line(section: &Map<String, Value>, what: &str) -> Result<String, SpecError> {
    match section.get("type") {
        Some(Value::String(kind)) if kind == GDALG_TYPE => {}
        Some(Value::String(kind)) => {
            return Err(SpecError::Validation(format!(
                "{} type is {:?}, expected {:?}",
                what, kind, GDALG_TYPE
            )))
        }
        // Type is optional inside the gdalg wrapper
        None if what == "gdalg" => {}
        _ => {
            return Err(SpecError::Validation(format!(
                "{} type must be {:?}",
                what, GDALG_TYPE
            )))
        }
    }

    match section.get("command_line") {
        Some(Value::String(line)) => Ok(line.clone()),
        Some(_) => Err(SpecError::Validation(format!(
            "{} command_line must be a string",
            what
        ))),
        None => Err(SpecError::Validation(format!(
            "{} is missing command_line",
            what
        ))),
    }
}

/// Metadata is informational; an unreadable section is dropped with a warning
fn metadata(root: &Map<String, Value>) -> Option<Metadata> {
    let value = root.get("metadata").filter(|v| !v.is_null())?;
    match serde_json::from_value(value.clone()) {
        Ok(metadata) => Some(metadata),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable metadata section");
            None
        }
    }
}

fn load_snapshots(
    specs: &[Value],
    metadata: Option<Metadata>,
    command_line: String,
) -> Result<LoadedSpec, SpecError> {
    let jobs = specs
        .iter()
        .enumerate()
        .map(|(i, value)| JobSnapshot::from_value(i + 1, value)?.to_job(i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    let mut pipeline = Pipeline::new(jobs);
    if let Some(meta) = &metadata {
        pipeline.name = meta.pipeline_name.clone();
        pipeline.description = meta.pipeline_description.clone();
    }

    tracing::debug!(stages = pipeline.len(), "loaded specification from job snapshots");
    Ok(LoadedSpec {
        pipeline,
        source: SpecSource::Hybrid,
        metadata,
        command_line,
    })
}

fn load_portable(command_line: String, metadata: Option<Metadata>) -> Result<LoadedSpec, SpecError> {
    let mut pipeline = parse_pipeline(&command_line)?;
    if let Some(meta) = &metadata {
        pipeline.name = meta.pipeline_name.clone();
        pipeline.description = meta.pipeline_description.clone();
    }

    tracing::warn!(
        stages = pipeline.len(),
        "no job snapshots; rebuilt pipeline from command line, arity metadata, \
         configuration options and environment are not recovered"
    );
    Ok(LoadedSpec {
        pipeline,
        source: SpecSource::PortableOnly,
        metadata,
        command_line,
    })
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
