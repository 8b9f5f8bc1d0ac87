// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gdalg run <spec>` - Run a specification

use anyhow::Result;
use clap::Args;
use gdalg_adapters::{ExecOutput, ExecRequest, ProcessGdalAdapter, TracedGdalAdapter};
use gdalg_core::{Invocation, Pipeline};
use gdalg_engine::Runner;
use gdalg_rfc104::{quote, DELIMITER};
use gdalg_spec::load_spec;
use std::io::Write;
use std::path::PathBuf;

#[derive(Args)]
pub struct RunArgs {
    /// Specification document
    pub spec: PathBuf,

    /// Print the command instead of running it
    #[arg(long)]
    pub dry_run: bool,
}

/// A one-stage document runs as a plain command rather than a pipeline
fn invocation_for(pipeline: Pipeline) -> Invocation {
    match pipeline.jobs() {
        [job] => Invocation::Single(job.clone()),
        _ => Invocation::Chain(pipeline),
    }
}

/// Shell-ready rendering of a request, environment first
fn command_line(program: &str, request: &ExecRequest) -> String {
    let env = request
        .env
        .iter()
        .map(|(key, value)| format!("{}={}", key, quote(value)));
    let args = request.args.iter().map(|arg| {
        if arg == DELIMITER {
            arg.clone()
        } else {
            quote(arg)
        }
    });
    env.chain(std::iter::once(quote(program)))
        .chain(args)
        .collect::<Vec<_>>()
        .join(" ")
}

pub async fn handle(args: RunArgs) -> Result<()> {
    let loaded = load_spec(&args.spec)?;
    let invocation = invocation_for(loaded.pipeline);

    let adapter = TracedGdalAdapter::new(ProcessGdalAdapter::from_env());
    let runner = Runner::new(adapter).with_steps(gdalg_steps::shared::shared());

    if args.dry_run {
        let request = runner.plan(&invocation)?;
        println!("{}", command_line(runner.adapter().inner().program(), &request));
        if let Some(stdin) = &request.stdin {
            eprintln!("stdin: {} bytes", stdin.len());
        }
        return Ok(());
    }

    match runner.run(&invocation).await? {
        ExecOutput::Completed => {}
        ExecOutput::Text(text) => print!("{}", text),
        ExecOutput::Raw(bytes) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
