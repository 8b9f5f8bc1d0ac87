// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Turning invocations into execution requests
//!
//! A single job runs as `<module> <operation> [--config K=V]... <step body>`.
//! A chain runs as `<category> pipeline [--config K=V]... <step> ! <step>...`
//! with configuration, environment and stream directives merged across its
//! stages, later stages winning.

use crate::error::RunError;
use gdalg_adapters::{Capture, ExecRequest};
use gdalg_core::wiring::{INPUT_SLOTS, OUTPUT_SLOTS};
use gdalg_core::{path, ArgValue, Invocation, Job, Pipeline, StreamFormat, VSI_STDIN, VSI_STDOUT};
use gdalg_rfc104::{job_args, pipeline_args};
use gdalg_steps::StepTable;
use std::collections::BTreeMap;

/// Flag carrying one configuration option
pub const CONFIG_FLAG: &str = "--config";

fn capture_for(format: StreamFormat) -> Capture {
    match format {
        StreamFormat::Text => Capture::Text,
        StreamFormat::Raw => Capture::Raw,
    }
}

fn has_any(job: &Job, slots: &[&str]) -> bool {
    slots
        .iter()
        .any(|slot| job.arguments.get(slot).is_some_and(|v| !v.is_null()))
}

/// Point unset input/output slots at the standard streams
///
/// A job with a stream payload reads `/vsistdin/`; a job whose output is
/// captured writes `/vsistdout/`.
pub fn with_stream_placeholders(job: &Job) -> Job {
    let mut job = job.clone();
    if job.stream_in.is_some() && !has_any(&job, &INPUT_SLOTS) {
        job.arguments.insert("input", ArgValue::from(VSI_STDIN));
    }
    if job.stream_out_format.is_some() && !has_any(&job, &OUTPUT_SLOTS) {
        job.arguments.insert("output", ArgValue::from(VSI_STDOUT));
    }
    job
}

fn config_tokens(config: &BTreeMap<String, String>) -> Vec<String> {
    config
        .iter()
        .flat_map(|(key, value)| [CONFIG_FLAG.to_string(), format!("{}={}", key, value)])
        .collect()
}

/// Request for one job
pub fn job_request(job: &Job) -> Result<ExecRequest, RunError> {
    let job = with_stream_placeholders(job);
    let mut args = job_args(&job)?;
    let body = args.split_off(path::effective_path(&job.command_path).len());
    args.extend(config_tokens(&job.config_options));
    args.extend(body);

    Ok(ExecRequest {
        args,
        env: job.env_vars.clone(),
        stdin: job.stream_in.clone(),
        capture: job.stream_out_format.map(capture_for),
    })
}

/// Request for a whole chain
///
/// Step names are classified through `table` when one is given.
pub fn pipeline_request(pipeline: &Pipeline, table: Option<&StepTable>) -> Result<ExecRequest, RunError> {
    let jobs: Vec<Job> = pipeline.jobs().iter().map(with_stream_placeholders).collect();
    let prepared = Pipeline::new(jobs);

    let mut config = BTreeMap::new();
    let mut env = BTreeMap::new();
    let mut stdin = None;
    let mut capture = None;
    for job in prepared.jobs() {
        config.extend(job.config_options.clone());
        env.extend(job.env_vars.clone());
        if job.stream_in.is_some() {
            stdin = job.stream_in.clone();
        }
        if let Some(format) = job.stream_out_format {
            capture = Some(capture_for(format));
        }
    }

    let mut args = pipeline_args(&prepared, table)?;
    // after `<category> pipeline`
    let steps = args.split_off(2);
    args.extend(config_tokens(&config));
    args.extend(steps);

    Ok(ExecRequest {
        args,
        env,
        stdin,
        capture,
    })
}

/// Request for either shape of invocation
pub fn build_request(invocation: &Invocation, table: Option<&StepTable>) -> Result<ExecRequest, RunError> {
    let request = match invocation {
        Invocation::Single(job) => job_request(job)?,
        Invocation::Chain(pipeline) => pipeline_request(pipeline, table)?,
    };
    tracing::debug!(
        chain = invocation.is_chain(),
        args = request.args.len(),
        "built execution request"
    );
    Ok(request)
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
