// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command string to jobs
//!
//! Reconstruction is lossy. Argument values come back as strings, arity
//! metadata, configuration options and environment are never recovered,
//! and a flag directly followed by a positional takes that positional as
//! its value.

use crate::flags::{is_flag, name_for_flag};
use crate::lexer::{lex, Token};
use crate::render::{DELIMITER, PIPELINE_MARKER};
use gdalg_core::path::TOOL_ROOT;
use gdalg_core::{ArgValue, Arguments, Category, Job, JobError, Pipeline};
use thiserror::Error;

/// Step whose first positional is its output
pub const WRITE_STEP: &str = "write";

/// Step-name fragments that only occur in vector pipelines
const VECTOR_HINTS: &[&str] = &["sql", "layer", "geom", "filter", "concat", "feature", "ogr"];

/// Errors that can occur while parsing a command string
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("command string is empty")]
    EmptyCommand,
    #[error("step {index} is empty")]
    EmptyStep { index: usize },
    #[error("invalid job: {0}")]
    Job(#[from] JobError),
}

/// A command string split into steps
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCommand {
    /// Category named by the header, if there was one
    pub category: Option<Category>,
    pub steps: Vec<Vec<String>>,
}

impl ParsedCommand {
    /// Header category, or one inferred from step names
    pub fn category(&self) -> Category {
        self.category.unwrap_or_else(|| {
            infer_category(self.steps.iter().filter_map(|s| s.first().map(String::as_str)))
        })
    }
}

/// Split a command string into step token vectors
pub fn parse(command: &str) -> Result<ParsedCommand, ParseError> {
    let tokens = lex(command);
    if tokens.is_empty() {
        return Err(ParseError::EmptyCommand);
    }

    let (category, rest) = strip_header(&tokens);
    let rest = match rest.split_first() {
        Some((first, tail)) if first.is_bare(DELIMITER) => tail,
        _ => rest,
    };
    if rest.is_empty() {
        return Err(ParseError::EmptyCommand);
    }

    let mut steps = Vec::new();
    for (index, step) in rest.split(|t| t.is_bare(DELIMITER)).enumerate() {
        if step.is_empty() {
            return Err(ParseError::EmptyStep { index });
        }
        steps.push(step.iter().map(|t| t.text.clone()).collect());
    }

    Ok(ParsedCommand { category, steps })
}

/// Drop `[gdal] <category> pipeline` from the front
fn strip_header(tokens: &[Token]) -> (Option<Category>, &[Token]) {
    let body = match tokens.split_first() {
        Some((first, rest)) if first.is_bare(TOOL_ROOT) => rest,
        _ => tokens,
    };
    match body {
        [category, marker, rest @ ..] if !category.quoted && marker.is_bare(PIPELINE_MARKER) => {
            match category.text.parse::<Category>() {
                Ok(c) => (Some(c), rest),
                Err(_) => (None, tokens),
            }
        }
        _ => (None, tokens),
    }
}

/// Guess a category from step names
///
/// Substring matching against vector-only operation names. Operations
/// whose names overlap between categories classify as raster.
pub fn infer_category<'a, I>(step_names: I) -> Category
where
    I: IntoIterator<Item = &'a str>,
{
    let mut names = step_names.into_iter();
    if names.any(|name| VECTOR_HINTS.iter().any(|hint| name.contains(hint))) {
        Category::Vector
    } else {
        Category::Raster
    }
}

/// Rebuild a job from one step's tokens
///
/// `position` is the step's index in its pipeline.
pub fn step_to_job(tokens: &[String], category: Category, position: usize) -> Result<Job, ParseError> {
    let (step_name, rest) = tokens
        .split_first()
        .ok_or(ParseError::EmptyStep { index: position })?;

    let mut arguments = Arguments::new();
    let mut positionals = 0usize;
    let mut i = 0;
    while i < rest.len() {
        let token = &rest[i];
        if is_flag(token) {
            let (flag, inline) = match token.split_once('=') {
                Some((flag, value)) => (flag, Some(value.to_string())),
                None => (token.as_str(), None),
            };
            let name = name_for_flag(flag);
            let value = match inline {
                Some(value) => Some(value),
                None => match rest.get(i + 1) {
                    Some(next) if !is_flag(next) => {
                        i += 1;
                        Some(next.clone())
                    }
                    _ => None,
                },
            };
            match value {
                Some(value) => append_value(&mut arguments, &name, &value),
                None => {
                    arguments.insert(name, true);
                }
            }
        } else {
            positionals += 1;
            let slot = positional_slot(step_name, positionals, &arguments);
            arguments.insert(slot, token.clone());
        }
        i += 1;
    }

    tracing::debug!(
        position,
        step = %step_name,
        args = arguments.len(),
        "reconstructed step"
    );
    Ok(Job::new([category.as_str(), step_name.as_str()])?.with_arguments(arguments))
}

fn append_value(arguments: &mut Arguments, name: &str, value: &str) {
    let parsed: ArgValue = if value.contains(',') {
        value.split(',').map(String::from).collect::<Vec<_>>().into()
    } else {
        value.into()
    };

    let seen = arguments.get(name).is_some_and(|v| !v.is_null());
    if !seen {
        arguments.insert(name, parsed);
        return;
    }
    if let Some(existing) = arguments.get_mut(name) {
        match parsed {
            ArgValue::List(items) => items.into_iter().for_each(|item| existing.push(item)),
            ArgValue::Scalar(item) => existing.push(item),
            ArgValue::Null | ArgValue::Bool(_) => {}
        }
    }
}

fn positional_slot(step_name: &str, n: usize, arguments: &Arguments) -> String {
    let first = if step_name == WRITE_STEP { "output" } else { "input" };
    match n {
        1 => first.to_string(),
        2 if !arguments.contains("output") => "output".to_string(),
        n => format!("positional_{}", n),
    }
}

/// Parse a whole command string into a pipeline
pub fn parse_pipeline(command: &str) -> Result<Pipeline, ParseError> {
    let parsed = parse(command)?;
    let category = parsed.category();
    let jobs = parsed
        .steps
        .iter()
        .enumerate()
        .map(|(position, tokens)| step_to_job(tokens, category, position))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Pipeline::new(jobs))
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
