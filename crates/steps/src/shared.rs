// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide step table for application entry points
//!
//! Library code takes a `&StepTable` explicitly. This cache exists for
//! binaries that want one table per process without threading it through.

use crate::table::StepTable;
use std::sync::{Arc, LazyLock, RwLock};

static SHARED: LazyLock<RwLock<Arc<StepTable>>> =
    LazyLock::new(|| RwLock::new(Arc::new(StepTable::builtin())));

/// The current process-wide table, built from the builtin mapping on first use
pub fn shared() -> Arc<StepTable> {
    Arc::clone(&SHARED.read().unwrap_or_else(|e| e.into_inner()))
}

/// Replace the process-wide table
pub fn reload(table: StepTable) {
    *SHARED.write().unwrap_or_else(|e| e.into_inner()) = Arc::new(table);
}

/// Restore the builtin mapping
pub fn reset() {
    reload(StepTable::builtin());
}
