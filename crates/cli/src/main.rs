// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gdalg - GDAL pipeline specifications

mod commands;
mod output;
mod steps;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{classify, parse, render, run, show};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gdalg",
    version,
    about = "gdalg - Build, convert and run GDAL pipeline specifications"
)]
struct Cli {
    /// Step classification overrides (TOML)
    #[arg(long, global = true, env = steps::STEPS_ENV, value_name = "FILE")]
    steps: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the command line for a specification
    Render(render::RenderArgs),
    /// Turn a command line into a specification
    Parse(parse::ParseArgs),
    /// Describe a specification
    Show(show::ShowArgs),
    /// Print the pipeline step name for an operation
    Classify(classify::ClassifyArgs),
    /// Run a specification with the gdal tool
    Run(run::RunArgs),
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    let table = steps::load(cli.steps.as_deref())?;
    gdalg_steps::shared::reload(table);

    match cli.command {
        Commands::Render(args) => render::handle(args),
        Commands::Parse(args) => parse::handle(args),
        Commands::Show(args) => show::handle(args),
        Commands::Classify(args) => classify::handle(args),
        Commands::Run(args) => run::handle(args).await,
    }
}
