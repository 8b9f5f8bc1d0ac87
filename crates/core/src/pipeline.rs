// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline definitions

use crate::error::{JobError, RenderError};
use crate::job::Job;
use crate::path::Category;

/// An ordered chain of jobs
///
/// Stages never carry their own chain reference. Extending a pipeline
/// returns a new value and leaves the original untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipeline {
    jobs: Vec<Job>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Pipeline {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs: jobs.into_iter().map(|j| j.detached()).collect(),
            name: None,
            description: None,
        }
    }

    /// Build a pipeline from fallible stages, reporting the first bad index
    pub fn try_from_stages<I, E>(stages: I) -> Result<Self, JobError>
    where
        I: IntoIterator<Item = Result<Job, E>>,
        E: std::fmt::Display,
    {
        let jobs = stages
            .into_iter()
            .enumerate()
            .map(|(index, stage)| {
                stage.map_err(|e| JobError::InvalidJob {
                    index: index + 1,
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(jobs))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn first(&self) -> Option<&Job> {
        self.jobs.first()
    }

    pub fn last(&self) -> Option<&Job> {
        self.jobs.last()
    }

    /// A copy of this pipeline with one more stage
    pub fn with_job(&self, job: Job) -> Pipeline {
        let mut jobs = Vec::with_capacity(self.jobs.len() + 1);
        jobs.extend(self.jobs.iter().cloned());
        jobs.push(job.detached());
        Pipeline {
            jobs,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    /// The category selecting raster or vector pipeline framing
    ///
    /// Decided by the first stage alone.
    pub fn category(&self) -> Result<Category, RenderError> {
        let first = self.first().ok_or(RenderError::EmptyPipeline)?;
        first
            .category()
            .ok_or_else(|| RenderError::UnknownCategory(first.command_path.clone()))
    }
}

impl From<Vec<Job>> for Pipeline {
    fn from(jobs: Vec<Job>) -> Self {
        Pipeline::new(jobs)
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
