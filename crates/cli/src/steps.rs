// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step table assembly

use anyhow::{Context, Result};
use gdalg_steps::StepTable;
use std::path::Path;

/// Environment variable naming an overrides file
pub const STEPS_ENV: &str = "GDALG_STEP_MAPPING";

/// Builtin mapping with optional overrides applied on top
pub fn load(overrides: Option<&Path>) -> Result<StepTable> {
    let table = StepTable::builtin();
    let Some(path) = overrides else {
        return Ok(table);
    };

    let overrides = StepTable::load_overrides(path)
        .with_context(|| format!("failed to load step mapping {}", path.display()))?;
    tracing::debug!(path = %path.display(), "applied step mapping overrides");
    Ok(table.merge(&overrides))
}

#[cfg(test)]
#[path = "steps_tests.rs"]
mod tests;
