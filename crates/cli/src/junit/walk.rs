// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite tree walking.
//!
//! Flattens a [`Document`] into one [`RawTestCase`] per `<testcase>`, each
//! tagged with the name of its nearest named enclosing suite.

use super::case::{Outcome, RawTestCase};
use super::document::{CaseNode, Document, Root, SuiteNode};

/// Test cases gathered from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Walk {
    pub cases: Vec<RawTestCase>,
    /// False when the root was neither `<testsuites>` with suites nor `<testsuite>`.
    pub suites_found: bool,
}

/// Collect every test case in the document.
///
/// Within a suite, its own test cases come before those of nested suites.
pub fn walk(document: &Document) -> Walk {
    let mut cases = Vec::new();
    let suites_found = match &document.root {
        Root::Suites(suites) if !suites.is_empty() => {
            for suite in suites {
                walk_suite(suite, suite.name.as_deref(), &mut cases);
            }
            true
        }
        Root::Suite(suite) => {
            walk_suite(suite, suite.name.as_deref(), &mut cases);
            true
        }
        Root::Suites(_) | Root::Other(_) => false,
    };

    Walk {
        cases,
        suites_found,
    }
}

/// Walk one suite; `suite_name` is the name its test cases are tagged with.
fn walk_suite(suite: &SuiteNode, suite_name: Option<&str>, cases: &mut Vec<RawTestCase>) {
    cases.extend(suite.cases.iter().map(|case| raw_case(case, suite_name)));

    for nested in &suite.suites {
        let nested_name = nested
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(suite_name);
        walk_suite(nested, nested_name, cases);
    }
}

fn raw_case(case: &CaseNode, suite_name: Option<&str>) -> RawTestCase {
    RawTestCase {
        suite: suite_name.map(str::to_string),
        classname: case.classname.clone(),
        name: case.name.clone(),
        time: case.time.clone(),
        file: case.file.clone(),
        lineno: case.lineno.clone(),
        outcome: Outcome::from_markers(case.failure.clone(), case.error.clone(), case.skipped),
    }
}

#[cfg(test)]
#[path = "walk_tests.rs"]
mod tests;
