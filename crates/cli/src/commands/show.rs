// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gdalg show <spec>` - Describe a specification

use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use gdalg_core::Job;
use gdalg_rfc104::render_step;
use gdalg_spec::{load_spec, LoadedSpec, SpecSource};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct ShowArgs {
    /// Specification document
    pub spec: PathBuf,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct StageSummary {
    command: String,
    step: String,
    config_options: usize,
    env_vars: usize,
}

impl From<&Job> for StageSummary {
    fn from(job: &Job) -> Self {
        Self {
            command: job.command_path.join(" "),
            step: render_step(job).unwrap_or_else(|e| format!("<{}>", e)),
            config_options: job.config_options.len(),
            env_vars: job.env_vars.len(),
        }
    }
}

#[derive(Serialize)]
struct SpecSummary {
    source: &'static str,
    lossless: bool,
    name: Option<String>,
    description: Option<String>,
    created_at: Option<String>,
    command_line: String,
    stages: Vec<StageSummary>,
}

impl From<&LoadedSpec> for SpecSummary {
    fn from(loaded: &LoadedSpec) -> Self {
        Self {
            source: match loaded.source {
                SpecSource::Hybrid => "hybrid",
                SpecSource::PortableOnly => "portable-only",
            },
            lossless: loaded.source.is_lossless(),
            name: loaded.pipeline.name.clone(),
            description: loaded.pipeline.description.clone(),
            created_at: loaded
                .metadata
                .as_ref()
                .and_then(|m| m.created_at)
                .map(|t| t.to_rfc3339()),
            command_line: loaded.command_line.clone(),
            stages: loaded.pipeline.jobs().iter().map(StageSummary::from).collect(),
        }
    }
}

impl fmt::Display for SpecSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quality = if self.lossless { "lossless" } else { "lossy" };
        writeln!(f, "Source: {} ({})", self.source, quality)?;
        if let Some(name) = &self.name {
            writeln!(f, "Name: {}", name)?;
        }
        if let Some(description) = &self.description {
            writeln!(f, "Description: {}", description)?;
        }
        if let Some(created_at) = &self.created_at {
            writeln!(f, "Created: {}", created_at)?;
        }
        writeln!(f, "Command line: {}", self.command_line)?;
        writeln!(f, "Stages: {}", self.stages.len())?;
        for (i, stage) in self.stages.iter().enumerate() {
            write!(f, "  {}. {:<20} {}", i + 1, stage.command, stage.step)?;
            if stage.config_options > 0 || stage.env_vars > 0 {
                write!(f, "  [config: {}, env: {}]", stage.config_options, stage.env_vars)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn handle(args: ShowArgs) -> Result<()> {
    let loaded = load_spec(&args.spec)?;
    output::print(&SpecSummary::from(&loaded), args.format)
}
