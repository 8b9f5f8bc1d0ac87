// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured job state stored alongside the command string

use crate::error::SpecError;
use gdalg_core::{ArgMapping, Arguments, Job};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Serializable copy of every field of a [`Job`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSnapshot {
    pub command_path: Vec<String>,
    #[serde(default)]
    pub arguments: Arguments,
    #[serde(default)]
    pub arg_mapping: Option<ArgMapping>,
    #[serde(default)]
    pub config_options: BTreeMap<String, String>,
    #[serde(default)]
    pub env_vars: BTreeMap<String, String>,
    #[serde(default)]
    pub stream_in: Option<String>,
    #[serde(default)]
    pub stream_out_format: Option<String>,
}

impl From<&Job> for JobSnapshot {
    fn from(job: &Job) -> Self {
        Self {
            command_path: job.command_path.clone(),
            arguments: job.arguments.clone(),
            arg_mapping: job.arg_mapping.clone(),
            config_options: job.config_options.clone(),
            env_vars: job.env_vars.clone(),
            stream_in: job.stream_in.clone(),
            stream_out_format: job.stream_out_format.map(|f| f.to_string()),
        }
    }
}

impl JobSnapshot {
    /// Decode the snapshot at 1-based `index` of an `r_job_specs` array
    pub fn from_value(index: usize, value: &Value) -> Result<Self, SpecError> {
        if !value.is_object() {
            return Err(SpecError::InvalidJob {
                index,
                reason: "must be a Job object".to_string(),
            });
        }
        serde_json::from_value(value.clone()).map_err(|e| SpecError::InvalidJob {
            index,
            reason: format!("must be a Job object: {}", e),
        })
    }

    /// Rebuild the job, validating the command path and stream format
    pub fn to_job(&self, index: usize) -> Result<Job, SpecError> {
        let invalid = |e: gdalg_core::JobError| SpecError::InvalidJob {
            index,
            reason: e.to_string(),
        };

        let mut job = Job::new(self.command_path.iter().cloned())
            .map_err(invalid)?
            .with_arguments(self.arguments.clone());
        job.arg_mapping = self.arg_mapping.clone();
        job.config_options = self.config_options.clone();
        job.env_vars = self.env_vars.clone();
        job.stream_in = self.stream_in.clone();
        if let Some(format) = &self.stream_out_format {
            job = job.with_stream_out(format).map_err(invalid)?;
        }
        Ok(job)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
