// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Common Test Report Format (CTRF) types.
//!
//! Serializes to the shape in docs/specs/ctrf.schema.json.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Tool name used when none is configured.
pub const DEFAULT_TOOL_NAME: &str = "junit-to-ctrf";

/// Root CTRF document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub results: Results,
}

/// Everything under `results`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Results {
    pub tool: Tool,
    pub summary: Summary,
    pub tests: Vec<Test>,
    /// Omitted entirely when there are no environment properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<BTreeMap<String, String>>,
}

/// The tool that produced the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
}

/// Aggregate counters over all tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub tests: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub pending: usize,
    pub other: usize,
    /// Run start, epoch milliseconds (not tracked, always 0).
    pub start: u64,
    /// Run stop, epoch milliseconds (not tracked, always 0).
    pub stop: u64,
}

impl Summary {
    /// Count tests by status in one pass.
    pub fn from_tests(tests: &[Test]) -> Self {
        let mut summary = Summary {
            tests: tests.len(),
            ..Default::default()
        };
        for test in tests {
            match test.status {
                Status::Passed => summary.passed += 1,
                Status::Failed => summary.failed += 1,
                Status::Skipped => summary.skipped += 1,
                Status::Pending => summary.pending += 1,
                Status::Other => summary.other += 1,
            }
        }
        summary
    }
}

/// Test result status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Failed,
    Skipped,
    Pending,
    Other,
}

/// A single normalized test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    pub name: String,
    pub status: Status,
    /// Milliseconds.
    pub duration: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    #[serde(default)]
    pub suite: String,
}

#[cfg(test)]
#[path = "ctrf_tests.rs"]
mod tests;
