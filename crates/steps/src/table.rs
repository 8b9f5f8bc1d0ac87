// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step-classification table
//!
//! Maps a (module, operation) pair to the step name used when that command
//! appears as a pipeline stage. Unknown pairs classify as the operation
//! itself, so lookup never fails.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Mapping generated from the tool's algorithm listing
const GENERATED: &str = include_str!("../data/steps.toml");

/// Errors that can occur while loading a table
#[derive(Debug, Error)]
pub enum StepTableError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// module -> operation -> step name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepTable {
    modules: BTreeMap<String, BTreeMap<String, String>>,
}

impl StepTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `[module] operation = "step"` document
    pub fn from_toml(content: &str) -> Result<Self, StepTableError> {
        Ok(toml::from_str(content)?)
    }

    /// The table compiled into this build
    ///
    /// Falls back to [`StepTable::minimal`] if the embedded mapping is unusable.
    pub fn builtin() -> Self {
        match Self::from_toml(GENERATED) {
            Ok(table) if !table.is_empty() => table,
            Ok(_) => {
                tracing::warn!("generated step mapping is empty, using minimal defaults");
                Self::minimal()
            }
            Err(e) => {
                tracing::warn!(error = %e, "generated step mapping is invalid, using minimal defaults");
                Self::minimal()
            }
        }
    }

    /// Read a generated mapping from disk
    ///
    /// A missing file is not an error: the minimal defaults are used instead.
    pub fn load_generated(path: &Path) -> Result<Self, StepTableError> {
        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "generated step mapping not found, using minimal defaults"
            );
            return Ok(Self::minimal());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Read a user override file
    pub fn load_overrides(path: &Path) -> Result<Self, StepTableError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Hardcoded fallback covering the read/write framing steps
    pub fn minimal() -> Self {
        let mut table = Self::new();
        for module in ["raster", "vector"] {
            table.insert(module, "read", "read");
            table.insert(module, "write", "write");
            table.insert(module, "info", "read");
            table.insert(module, "convert", "write");
        }
        table
    }

    pub fn is_empty(&self) -> bool {
        self.modules.values().all(BTreeMap::is_empty)
    }

    pub fn insert(
        &mut self,
        module: impl Into<String>,
        operation: impl Into<String>,
        step: impl Into<String>,
    ) {
        self.modules
            .entry(module.into())
            .or_default()
            .insert(operation.into(), step.into());
    }

    /// Layer `overrides` on top, overrides winning on collision
    pub fn merge(mut self, overrides: &StepTable) -> Self {
        for (module, ops) in &overrides.modules {
            let entry = self.modules.entry(module.clone()).or_default();
            for (op, step) in ops {
                entry.insert(op.clone(), step.clone());
            }
        }
        self
    }

    pub fn lookup(&self, module: &str, operation: &str) -> Option<&str> {
        self.modules
            .get(module)
            .and_then(|ops| ops.get(operation))
            .map(String::as_str)
    }

    /// Step name for a command, or the operation itself when unmapped
    pub fn classify<'a>(&'a self, module: &str, operation: &'a str) -> &'a str {
        self.lookup(module, operation).unwrap_or(operation)
    }
}

/// Free-function form of [`StepTable::classify`]
pub fn classify<'a>(table: &'a StepTable, module: &str, operation: &'a str) -> &'a str {
    table.classify(module, operation)
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
