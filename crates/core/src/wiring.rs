// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Auto-wiring when a job is appended to a chain
//!
//! The previous stage's output becomes the new stage's input unless the
//! caller already chose a concrete input. Streaming placeholders on either
//! side mean the stages talk through a stream, so nothing is copied.

use crate::error::JobError;
use crate::job::Job;
use crate::path::is_virtual_path;
use crate::pipeline::Pipeline;
use crate::value::{ArgValue, Arguments, Scalar};

/// Input argument names, in preference order
pub const INPUT_SLOTS: [&str; 3] = ["input", "dataset", "src_dataset"];

/// Output argument names, in preference order
pub const OUTPUT_SLOTS: [&str; 2] = ["output", "dest_dataset"];

/// Append a new command to the chain `existing` represents
///
/// Returns a job mirroring `existing` whose `pipeline` is the extended chain.
pub fn extend<I, S>(existing: &Job, command_path: I, arguments: Arguments) -> Result<Job, JobError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let next = Job::new(command_path)?.with_arguments(arguments);
    Ok(extend_with(existing, next))
}

/// Append a fully built job to the chain `existing` represents
pub fn extend_with(existing: &Job, next: Job) -> Job {
    let chain = existing
        .pipeline
        .clone()
        .unwrap_or_else(|| Pipeline::new(vec![existing.clone()]));

    let next = match chain.last() {
        Some(tail) => wire(tail, next),
        None => next,
    };

    let mut result = existing.detached();
    result.pipeline = Some(chain.with_job(next));
    result
}

/// Bind `tail`'s output to `next`'s input where appropriate
pub fn wire(tail: &Job, mut next: Job) -> Job {
    let Some(slot) = target_slot(&next) else {
        tracing::debug!(job = %next, "explicit input, not wiring");
        return next;
    };

    let Some(output) = concrete_output(tail) else {
        tracing::debug!(tail = %tail, job = %next, "no concrete upstream output");
        return next;
    };

    tracing::debug!(job = %next, slot, output, "wiring upstream output");
    next.arguments.insert(slot, output.to_string());
    next
}

/// Which input slot to fill, or `None` when a concrete input is set
fn target_slot(job: &Job) -> Option<&'static str> {
    let has_concrete = INPUT_SLOTS
        .iter()
        .filter_map(|slot| job.arguments.get(slot))
        .any(is_concrete);
    if has_concrete {
        return None;
    }

    // A slot already holding a placeholder, then one the metadata declares
    let slot = INPUT_SLOTS
        .iter()
        .find(|slot| job.arguments.get(slot).is_some_and(|v| !v.is_null()))
        .or_else(|| INPUT_SLOTS.iter().find(|slot| job.rule(slot).is_some()))
        .copied()
        .unwrap_or(INPUT_SLOTS[0]);
    Some(slot)
}

fn concrete_output(job: &Job) -> Option<&str> {
    OUTPUT_SLOTS
        .iter()
        .filter_map(|slot| job.arguments.get(slot).and_then(ArgValue::as_str))
        .find(|path| !is_virtual_path(path))
}

fn is_concrete(value: &ArgValue) -> bool {
    match value {
        ArgValue::Null | ArgValue::Bool(_) => false,
        ArgValue::Scalar(s) => scalar_is_concrete(s),
        ArgValue::List(items) => items.iter().any(scalar_is_concrete),
    }
}

fn scalar_is_concrete(value: &Scalar) -> bool {
    match value {
        Scalar::Str(s) => !s.is_empty() && !is_virtual_path(s),
        Scalar::Int(_) | Scalar::Float(_) => true,
    }
}

#[cfg(test)]
#[path = "wiring_tests.rs"]
mod tests;
