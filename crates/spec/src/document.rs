// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hybrid specification document
//!
//! Three parts: a `gdalg` section any GDALG consumer can load on its own,
//! a `metadata` section, and `r_job_specs`, one structured snapshot per
//! pipeline stage for lossless reloading.

use crate::error::SpecError;
use crate::snapshot::JobSnapshot;
use chrono::{DateTime, NaiveDateTime, Utc};
use gdalg_core::path::TOOL_ROOT;
use gdalg_core::{ArgValue, Pipeline, Scalar};
use gdalg_rfc104::render_pipeline_with;
use gdalg_steps::StepTable;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// `type` of a streamed-algorithm document
pub const GDALG_TYPE: &str = "gdal_streamed_alg";

/// Version written to `metadata.format_version`
pub const FORMAT_VERSION: &str = "1.0.0";

/// Oldest tool release that loads the `gdalg` section
pub const GDAL_VERSION_REQUIRED: &str = "3.11";

/// Portable section, loadable by the tool itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdalgSection {
    #[serde(rename = "type")]
    pub kind: String,
    pub command_line: String,
    #[serde(default)]
    pub relative_paths_relative_to_this_file: bool,
}

impl GdalgSection {
    pub fn new(command_line: impl Into<String>) -> Self {
        Self {
            kind: GDALG_TYPE.to_string(),
            command_line: command_line.into(),
            relative_paths_relative_to_this_file: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub format_version: String,
    #[serde(default)]
    pub gdal_version_required: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_description: Option<String>,
    /// Unreadable timestamps load as `None`
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_timestamp"
    )]
    pub created_at: Option<DateTime<Utc>>,
    /// An empty array or `null` loads as no tags
    #[serde(default, deserialize_with = "tags_or_empty")]
    pub custom_tags: Map<String, Value>,
}

/// RFC 3339, or a naive `YYYY-MM-DD[T ]HH:MM:SS[.f]` taken as UTC
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(s) {
        return Some(at.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(|naive| naive.and_utc())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => {
            let parsed = parse_timestamp(&s);
            if parsed.is_none() {
                tracing::warn!(created_at = %s, "ignoring unreadable metadata timestamp");
            }
            parsed
        }
        Some(Value::Null) | None => None,
        Some(other) => {
            tracing::warn!(created_at = %other, "ignoring unreadable metadata timestamp");
            None
        }
    })
}

fn tags_or_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(tags) => Ok(tags),
        Value::Null => Ok(Map::new()),
        Value::Array(items) if items.is_empty() => Ok(Map::new()),
        other => Err(serde::de::Error::custom(format!(
            "custom_tags must be an object, got {}",
            other
        ))),
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION.to_string(),
            gdal_version_required: GDAL_VERSION_REQUIRED.to_string(),
            pipeline_name: None,
            pipeline_description: None,
            created_at: None,
            custom_tags: Map::new(),
        }
    }
}

/// The full document as written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridSpec {
    pub gdalg: GdalgSection,
    pub metadata: Metadata,
    pub r_job_specs: Vec<JobSnapshot>,
}

impl HybridSpec {
    pub fn to_value(&self) -> Result<Value, SpecError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_string_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Optional document fields supplied at save time
#[derive(Debug, Clone, Default)]
pub struct SpecOptions {
    /// Overrides the pipeline's own name
    pub name: Option<String>,
    /// Overrides the pipeline's own description
    pub description: Option<String>,
    pub custom_tags: Map<String, Value>,
    /// Defaults to now
    pub created_at: Option<DateTime<Utc>>,
}

impl SpecOptions {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn tag(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.custom_tags.insert(key.into(), value.into());
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }
}

fn is_finite(value: &ArgValue) -> bool {
    let finite = |s: &Scalar| !matches!(s, Scalar::Float(x) if !x.is_finite());
    match value {
        ArgValue::Scalar(s) => finite(s),
        ArgValue::List(items) => items.iter().all(finite),
        ArgValue::Null | ArgValue::Bool(_) => true,
    }
}

/// JSON has no NaN or infinity, so such values would reload as null
fn check_finite(pipeline: &Pipeline) -> Result<(), SpecError> {
    for (i, job) in pipeline.jobs().iter().enumerate() {
        if let Some((name, _)) = job.arguments.iter().find(|(_, v)| !is_finite(v)) {
            return Err(SpecError::Validation(format!(
                "r_job_specs[[{}]] argument {} is not a finite number",
                i + 1,
                name
            )));
        }
    }
    Ok(())
}

/// Build a document from a pipeline
///
/// Step names in the command line come from the process-wide step table.
pub fn to_spec(pipeline: &Pipeline, options: SpecOptions) -> Result<HybridSpec, SpecError> {
    to_spec_with(pipeline, options, &gdalg_steps::shared::shared())
}

/// Build a document, classifying step names with `table`
pub fn to_spec_with(
    pipeline: &Pipeline,
    options: SpecOptions,
    table: &StepTable,
) -> Result<HybridSpec, SpecError> {
    check_finite(pipeline)?;
    let rendered = render_pipeline_with(pipeline, table)?;
    let command_line = format!("{} {}", TOOL_ROOT, rendered);

    let metadata = Metadata {
        pipeline_name: options.name.or_else(|| pipeline.name.clone()),
        pipeline_description: options.description.or_else(|| pipeline.description.clone()),
        created_at: Some(options.created_at.unwrap_or_else(Utc::now)),
        custom_tags: options.custom_tags,
        ..Metadata::default()
    };

    tracing::debug!(
        stages = pipeline.len(),
        command_line = %command_line,
        "built specification"
    );

    Ok(HybridSpec {
        gdalg: GdalgSection::new(command_line),
        metadata,
        r_job_specs: pipeline.jobs().iter().map(JobSnapshot::from).collect(),
    })
}
