// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single job or a chain of jobs

use crate::job::Job;
use crate::pipeline::Pipeline;
use crate::wiring;

/// What a caller hands to rendering or execution
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Single(Job),
    Chain(Pipeline),
}

impl Invocation {
    /// The stages, in order
    pub fn jobs(&self) -> &[Job] {
        match self {
            Invocation::Single(job) => std::slice::from_ref(job),
            Invocation::Chain(pipeline) => pipeline.jobs(),
        }
    }

    pub fn is_chain(&self) -> bool {
        matches!(self, Invocation::Chain(_))
    }

    /// Append a job, wiring it to the current last stage
    pub fn then(self, next: Job) -> Invocation {
        let pipeline = match self {
            Invocation::Single(job) => Pipeline::new(vec![job]),
            Invocation::Chain(pipeline) => pipeline,
        };
        let next = match pipeline.last() {
            Some(tail) => wiring::wire(tail, next),
            None => next,
        };
        Invocation::Chain(pipeline.with_job(next))
    }

    pub fn into_pipeline(self) -> Pipeline {
        match self {
            Invocation::Single(job) => Pipeline::new(vec![job]),
            Invocation::Chain(pipeline) => pipeline,
        }
    }
}

/// A job carrying a chain stands for the whole chain
impl From<Job> for Invocation {
    fn from(job: Job) -> Self {
        match job.pipeline {
            Some(pipeline) => Invocation::Chain(pipeline),
            None => Invocation::Single(job),
        }
    }
}

impl From<Pipeline> for Invocation {
    fn from(pipeline: Pipeline) -> Self {
        Invocation::Chain(pipeline)
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
