// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job and pipeline rendering
//!
//! A job renders as one step: the leaf operation name, then flag
//! arguments in insertion order, then positional arguments in fixed
//! order. A pipeline joins its steps with ` ! ` behind a
//! `<category> pipeline` header.

use crate::flags::flag_for;
use crate::quote::quote;
use gdalg_core::{
    is_positional, path, ArgRule, ArgValue, Job, Pipeline, RenderError, Scalar, POSITIONAL_ORDER,
};
use gdalg_steps::StepTable;

/// Token separating pipeline steps
pub const DELIMITER: &str = "!";

/// Delimiter with its surrounding spaces, as written between steps
const STEP_SEPARATOR: &str = " ! ";

/// Keyword following the category in the pipeline header
pub const PIPELINE_MARKER: &str = "pipeline";

/// How value tokens are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Shell-quoted, for a single command string
    Shell,
    /// Verbatim, for an argument vector handed straight to a process
    Raw,
}

impl Encoding {
    fn apply(self, s: &str) -> String {
        match self {
            Encoding::Shell => quote(s),
            Encoding::Raw => s.to_string(),
        }
    }
}

/// Tokens for one flag argument, shell-quoted
///
/// - null and `false` produce nothing
/// - `true` produces the bare flag
/// - a scalar produces the flag and one value
/// - a list under a composite rule produces the flag and one comma-joined value
/// - any other list repeats the flag per element
pub fn format_argument(value: &ArgValue, name: &str, rule: Option<&ArgRule>) -> Vec<String> {
    argument_tokens(value, name, rule, Encoding::Shell)
}

pub fn argument_tokens(
    value: &ArgValue,
    name: &str,
    rule: Option<&ArgRule>,
    encoding: Encoding,
) -> Vec<String> {
    let flag = flag_for(name);
    match value {
        ArgValue::Null | ArgValue::Bool(false) => Vec::new(),
        ArgValue::Bool(true) => vec![flag],
        ArgValue::Scalar(s) => vec![flag, encoding.apply(&s.to_string())],
        ArgValue::List(items) if items.is_empty() => Vec::new(),
        ArgValue::List(items) if rule.is_some_and(ArgRule::is_composite) => {
            let joined = items
                .iter()
                .map(|s| encoding.apply(&s.to_string()))
                .collect::<Vec<_>>()
                .join(",");
            vec![flag, joined]
        }
        ArgValue::List(items) => items
            .iter()
            .flat_map(|s| [flag.clone(), encoding.apply(&s.to_string())])
            .collect(),
    }
}

fn positional_tokens(value: &ArgValue, encoding: Encoding) -> Vec<String> {
    let render = |s: &Scalar| encoding.apply(&s.to_string());
    match value {
        ArgValue::Scalar(s) => vec![render(s)],
        ArgValue::List(items) => items.iter().map(render).collect(),
        ArgValue::Null | ArgValue::Bool(_) => Vec::new(),
    }
}

/// Flags then positionals, without the step name
fn body_tokens(job: &Job, encoding: Encoding) -> Vec<String> {
    let mut tokens = Vec::new();
    for (name, value) in job.arguments.iter().filter(|(n, _)| !is_positional(n)) {
        tokens.extend(argument_tokens(value, name, job.rule(name), encoding));
    }
    for name in POSITIONAL_ORDER {
        if let Some(value) = job.arguments.get(name) {
            tokens.extend(positional_tokens(value, encoding));
        }
    }
    tokens
}

fn leaf_name(job: &Job) -> Result<&str, RenderError> {
    job.operation().ok_or_else(|| RenderError::CommandPathTooShort {
        path: job.command_path.clone(),
    })
}

/// Tokens for one step, named `step_name`
pub fn step_tokens(job: &Job, step_name: &str, encoding: Encoding) -> Vec<String> {
    let mut tokens = vec![step_name.to_string()];
    tokens.extend(body_tokens(job, encoding));
    tokens
}

/// Render a job as one pipeline step
pub fn render_step(job: &Job) -> Result<String, RenderError> {
    let name = leaf_name(job)?;
    Ok(step_tokens(job, name, Encoding::Shell).join(" "))
}

/// Render a pipeline as one command string, using leaf operation names
pub fn render_pipeline(pipeline: &Pipeline) -> Result<String, RenderError> {
    render_steps(pipeline, |job| leaf_name(job).map(String::from))
}

/// Render a pipeline with step names taken from a classification table
pub fn render_pipeline_with(pipeline: &Pipeline, table: &StepTable) -> Result<String, RenderError> {
    render_steps(pipeline, |job| classified_name(job, table))
}

fn classified_name(job: &Job, table: &StepTable) -> Result<String, RenderError> {
    let leaf = leaf_name(job)?;
    let module = job.module().unwrap_or_default();
    Ok(table.classify(module, leaf).to_string())
}

fn render_steps<F>(pipeline: &Pipeline, step_name: F) -> Result<String, RenderError>
where
    F: Fn(&Job) -> Result<String, RenderError>,
{
    let category = pipeline.category()?;
    let mut parts = vec![format!("{} {}", category, PIPELINE_MARKER)];
    for job in pipeline.jobs() {
        let name = step_name(job)?;
        tracing::debug!(job = %job, step = %name, "rendering step");
        parts.push(step_tokens(job, &name, Encoding::Shell).join(" "));
    }
    Ok(parts.join(STEP_SEPARATOR))
}

/// Argument vector for running a single job directly
///
/// `["raster", "convert", flags..., positionals...]`
pub fn job_args(job: &Job) -> Result<Vec<String>, RenderError> {
    leaf_name(job)?;
    let mut args: Vec<String> = path::effective_path(&job.command_path).to_vec();
    args.extend(body_tokens(job, Encoding::Raw));
    Ok(args)
}

/// Argument vector for running a pipeline
///
/// `["raster", "pipeline", step..., "!", step...]`
pub fn pipeline_args(pipeline: &Pipeline, table: Option<&StepTable>) -> Result<Vec<String>, RenderError> {
    let category = pipeline.category()?;
    let mut args = vec![category.to_string(), PIPELINE_MARKER.to_string()];
    for (i, job) in pipeline.jobs().iter().enumerate() {
        let name = match table {
            Some(table) => classified_name(job, table)?,
            None => leaf_name(job)?.to_string(),
        };
        if i > 0 {
            args.push(DELIMITER.to_string());
        }
        args.extend(step_tokens(job, &name, Encoding::Raw));
    }
    Ok(args)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
