// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command path helpers and virtual dataset locations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Optional leading segment naming the tool itself
pub const TOOL_ROOT: &str = "gdal";

/// Standard input streaming marker
pub const VSI_STDIN: &str = "/vsistdin/";

/// Standard output streaming marker
pub const VSI_STDOUT: &str = "/vsistdout/";

/// Top-level pipeline category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Raster,
    Vector,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Raster => "raster",
            Category::Vector => "vector",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raster" => Ok(Category::Raster),
            "vector" => Ok(Category::Vector),
            other => Err(other.to_string()),
        }
    }
}

/// Path segments with a leading `gdal` root removed
pub fn effective_path(path: &[String]) -> &[String] {
    match path.split_first() {
        Some((first, rest)) if first == TOOL_ROOT => rest,
        _ => path,
    }
}

/// The module segment (`raster`, `vector`, ...)
pub fn module_of(path: &[String]) -> Option<&str> {
    effective_path(path).first().map(String::as_str)
}

/// The leaf operation name, if the path has at least module + operation
pub fn operation_of(path: &[String]) -> Option<&str> {
    let path = effective_path(path);
    if path.len() < 2 {
        return None;
    }
    path.last().map(String::as_str)
}

/// The pipeline category for a path, if its module is one
pub fn category_of(path: &[String]) -> Option<Category> {
    module_of(path).and_then(|m| m.parse().ok())
}

/// Check whether a dataset location is a streaming placeholder
///
/// Only the stdin/stdout markers and `-` count. Other VSI paths
/// (`/vsimem/`, `/vsis3/`, ...) name real data.
pub fn is_virtual_path(path: &str) -> bool {
    let trimmed = path.trim_end_matches('/');
    path == "-" || trimmed == "/vsistdin" || trimmed == "/vsistdout"
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
