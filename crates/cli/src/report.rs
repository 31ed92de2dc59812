// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CTRF report assembly.

use std::collections::BTreeMap;

use crate::ctrf::{DEFAULT_TOOL_NAME, Report, Results, Summary, Test, Tool};

/// Assemble a report from already-classified tests.
///
/// An empty `environment` is left out of the report.
pub fn build_report(
    tests: Vec<Test>,
    tool_name: Option<&str>,
    environment: &BTreeMap<String, String>,
) -> Report {
    let tool = Tool {
        name: tool_name
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_TOOL_NAME)
            .to_string(),
    };

    Report {
        results: Results {
            tool,
            summary: Summary::from_tests(&tests),
            tests,
            environment: (!environment.is_empty()).then(|| environment.clone()),
        },
    }
}

/// Parse `KEY=VALUE` environment properties, splitting on the first `=`.
///
/// Entries without `=` are skipped with a warning. Later keys win.
pub fn parse_env_props<S: AsRef<str>>(props: &[S]) -> BTreeMap<String, String> {
    let mut environment = BTreeMap::new();
    for prop in props {
        let prop = prop.as_ref();
        match prop.split_once('=') {
            Some((key, value)) => {
                environment.insert(key.to_string(), value.to_string());
            }
            None => {
                tracing::warn!("ignoring environment property without '=': {}", prop);
            }
        }
    }
    environment
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
