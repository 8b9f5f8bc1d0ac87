// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gdalg render <spec>` - Print a specification as a command line

use anyhow::Result;
use clap::Args;
use gdalg_rfc104::{render_pipeline, render_pipeline_with};
use gdalg_spec::load_spec;
use std::path::PathBuf;

#[derive(Args)]
pub struct RenderArgs {
    /// Specification document
    pub spec: PathBuf,

    /// Name steps by their operation instead of their pipeline step
    #[arg(long)]
    pub leaf_names: bool,

    /// Print the command line stored in the document
    #[arg(long, conflicts_with = "leaf_names")]
    pub stored: bool,
}

pub fn handle(args: RenderArgs) -> Result<()> {
    let loaded = load_spec(&args.spec)?;

    let line = if args.stored {
        loaded.command_line
    } else if args.leaf_names {
        render_pipeline(&loaded.pipeline)?
    } else {
        render_pipeline_with(&loaded.pipeline, &gdalg_steps::shared::shared())?
    };
    println!("{}", line);
    Ok(())
}
