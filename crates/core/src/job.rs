// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job definitions
//!
//! A [`Job`] describes one invocation of the tool: which command, with which
//! arguments, under which configuration and environment. Jobs are plain
//! values. Building one never checks arguments against a schema; that
//! belongs to whatever generated the arguments.

use crate::error::JobError;
use crate::path::{self, Category};
use crate::pipeline::Pipeline;
use crate::value::{ArgValue, Arguments};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Argument names rendered without a flag, in rendering order
pub const POSITIONAL_ORDER: [&str; 5] = ["input", "src_dataset", "dataset", "output", "dest_dataset"];

/// Check whether an argument is rendered positionally
pub fn is_positional(name: &str) -> bool {
    POSITIONAL_ORDER.contains(&name)
}

/// How captured standard output should be returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamFormat {
    Text,
    Raw,
}

impl StreamFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamFormat::Text => "text",
            StreamFormat::Raw => "raw",
        }
    }
}

impl fmt::Display for StreamFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StreamFormat {
    type Err = JobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(StreamFormat::Text),
            "raw" => Ok(StreamFormat::Raw),
            other => Err(JobError::InvalidStreamFormat(other.to_string())),
        }
    }
}

/// Arity rule for one argument
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_count: Option<u32>,
}

impl ArgRule {
    /// A rule requiring exactly `n` values
    pub fn fixed(n: u32) -> Self {
        Self {
            min_count: Some(n),
            max_count: Some(n),
        }
    }

    /// Fixed arity greater than one: all values travel as one comma-joined token
    pub fn is_composite(&self) -> bool {
        matches!((self.min_count, self.max_count), (Some(min), Some(max)) if min == max && min > 1)
    }
}

/// Per-argument arity rules
pub type ArgMapping = BTreeMap<String, ArgRule>;

/// One command invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    /// Command hierarchy, e.g. `["raster", "convert"]`
    pub command_path: Vec<String>,
    pub arguments: Arguments,
    /// Arity metadata, used only to pick an encoding when rendering
    pub arg_mapping: Option<ArgMapping>,
    /// Tool configuration options (`--config KEY=VALUE`)
    pub config_options: BTreeMap<String, String>,
    /// Environment variables for the execution
    pub env_vars: BTreeMap<String, String>,
    /// Payload to feed through standard input
    pub stream_in: Option<String>,
    /// Capture standard output in this representation
    pub stream_out_format: Option<StreamFormat>,
    /// The chain this job was last extended into
    pub pipeline: Option<Pipeline>,
}

impl Job {
    /// Create a job for a command path
    pub fn new<I, S>(command_path: I) -> Result<Self, JobError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let command_path: Vec<String> = command_path.into_iter().map(Into::into).collect();
        if command_path.is_empty() {
            return Err(JobError::EmptyCommandPath);
        }
        Ok(Self {
            command_path,
            arguments: Arguments::new(),
            arg_mapping: None,
            config_options: BTreeMap::new(),
            env_vars: BTreeMap::new(),
            stream_in: None,
            stream_out_format: None,
            pipeline: None,
        })
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.arguments.insert(name, value);
        self
    }

    pub fn with_arguments(mut self, arguments: Arguments) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_arg_mapping(mut self, mapping: ArgMapping) -> Self {
        self.arg_mapping = Some(mapping);
        self
    }

    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config_options.insert(key.into(), value.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn with_stream_in(mut self, payload: impl Into<String>) -> Self {
        self.stream_in = Some(payload.into());
        self
    }

    pub fn with_stream_out_format(mut self, format: StreamFormat) -> Self {
        self.stream_out_format = Some(format);
        self
    }

    /// Set the stream output format from its string form
    pub fn with_stream_out(self, format: &str) -> Result<Self, JobError> {
        Ok(self.with_stream_out_format(format.parse()?))
    }

    /// Module segment, e.g. `raster`
    pub fn module(&self) -> Option<&str> {
        path::module_of(&self.command_path)
    }

    /// Leaf operation name, e.g. `convert`
    pub fn operation(&self) -> Option<&str> {
        path::operation_of(&self.command_path)
    }

    pub fn category(&self) -> Option<Category> {
        path::category_of(&self.command_path)
    }

    /// Arity rule for an argument, if metadata is attached
    pub fn rule(&self, name: &str) -> Option<&ArgRule> {
        self.arg_mapping.as_ref().and_then(|m| m.get(name))
    }

    pub fn input(&self) -> Option<&str> {
        self.arguments.get("input").and_then(ArgValue::as_str)
    }

    pub fn output(&self) -> Option<&str> {
        self.arguments.get("output").and_then(ArgValue::as_str)
    }

    /// The job without its chain reference
    pub fn detached(&self) -> Job {
        Job {
            pipeline: None,
            ..self.clone()
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command_path.join(" "))
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
