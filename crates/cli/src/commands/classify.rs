// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gdalg classify <module> <operation>`

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Command module (e.g., "raster")
    pub module: String,

    /// Operation within the module (e.g., "convert")
    pub operation: String,
}

pub fn handle(args: ClassifyArgs) -> Result<()> {
    let table = gdalg_steps::shared::shared();
    println!("{}", table.classify(&args.module, &args.operation));
    Ok(())
}
