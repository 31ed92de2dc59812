// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mapping raw JUnit test cases to CTRF tests.

use crate::ctrf::{Status, Test};
use crate::junit::{Outcome, RawTestCase};

/// Convert one raw test case into a CTRF test.
///
/// With `use_suite_name`, the test name is `"{suite}: {name}"`, where a
/// missing suite name is empty.
pub fn classify(case: &RawTestCase, use_suite_name: bool) -> Test {
    let name = case.name.as_deref().unwrap_or_default();
    let suite = case.suite.as_deref().unwrap_or_default();

    let fault = case.outcome.fault();
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());

    Test {
        name: display_name(suite, name, use_suite_name),
        status: status(&case.outcome),
        duration: duration_ms(case.time.as_deref()),
        file_path: case.file.clone(),
        line: case.lineno.as_deref().and_then(parse_line),
        message: fault.and_then(|f| non_empty(&f.message)),
        trace: fault.and_then(|f| non_empty(&f.trace)),
        suite: suite.to_string(),
    }
}

/// Status for an outcome. Errors count as failures.
pub fn status(outcome: &Outcome) -> Status {
    match outcome {
        Outcome::Failed(_) | Outcome::Errored(_) => Status::Failed,
        Outcome::Skipped => Status::Skipped,
        Outcome::Passed => Status::Passed,
    }
}

fn display_name(suite: &str, name: &str, use_suite_name: bool) -> String {
    if use_suite_name {
        format!("{suite}: {name}")
    } else {
        name.to_string()
    }
}

/// Convert a seconds value to whole milliseconds, rounding half up.
///
/// Missing, unparseable, negative, or non-finite values are 0.
pub fn duration_ms(time: Option<&str>) -> u64 {
    let seconds = time.and_then(parse_leading_float).unwrap_or(0.0);
    let millis = (seconds * 1000.0).round();
    if millis.is_finite() && millis > 0.0 {
        millis as u64
    } else {
        0
    }
}

/// Parse the longest numeric prefix of `s` (so `"1.5s"` is 1.5).
fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let candidate_len = s
        .find(|c: char| !matches!(c, '0'..='9' | '.' | '+' | '-' | 'e' | 'E'))
        .unwrap_or(s.len());

    (1..=candidate_len)
        .rev()
        .find_map(|len| s[..len].parse::<f64>().ok())
}

/// Parse a line number from its leading digits.
fn parse_line(lineno: &str) -> Option<u64> {
    let s = lineno.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let digits = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..digits].parse().ok()
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
