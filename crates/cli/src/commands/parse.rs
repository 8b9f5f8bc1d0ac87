// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gdalg parse <command>` - Build a specification from a command line

use anyhow::Result;
use clap::Args;
use gdalg_rfc104::parse_pipeline;
use gdalg_spec::{save_spec, to_spec, SpecOptions};
use std::path::PathBuf;

#[derive(Args)]
pub struct ParseArgs {
    /// Command line (e.g., "raster pipeline ! read in.tif ! write out.tif")
    pub command: String,

    /// Write the document here instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pipeline name
    #[arg(long)]
    pub name: Option<String>,

    /// Pipeline description
    #[arg(long)]
    pub description: Option<String>,

    /// Custom tag (key=value)
    #[arg(short = 't', long = "tag", value_parser = parse_key_val)]
    pub tags: Vec<(String, String)>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid key=value: no `=` found in `{s}`"))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

pub fn handle(args: ParseArgs) -> Result<()> {
    let pipeline = parse_pipeline(&args.command)?;

    let mut options = SpecOptions::default();
    if let Some(name) = args.name {
        options = options.name(name);
    }
    if let Some(description) = args.description {
        options = options.description(description);
    }
    for (key, value) in args.tags {
        options = options.tag(key, value);
    }

    let spec = to_spec(&pipeline, options)?;
    match args.output {
        Some(path) => {
            save_spec(&path, &spec)?;
            println!("Wrote {} ({} stages)", path.display(), spec.r_job_specs.len());
        }
        None => println!("{}", spec.to_string_pretty()?),
    }
    Ok(())
}
