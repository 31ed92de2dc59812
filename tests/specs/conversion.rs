//! Behavioral specs for JUnit to CTRF conversion.
//!
//! Covers suite traversal, status classification, duration rounding,
//! and how multiple matched files combine into one report.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const MATH_REPORT: &str = r#"{
  "results": {
    "tool": {
      "name": "junit-to-ctrf"
    },
    "summary": {
      "tests": 4,
      "passed": 1,
      "failed": 2,
      "skipped": 1,
      "pending": 0,
      "other": 0,
      "start": 0,
      "stop": 0
    },
    "tests": [
      {
        "name": "Math: adds",
        "status": "passed",
        "duration": 10,
        "filePath": "src/math.test.js",
        "line": 12,
        "suite": "Math"
      },
      {
        "name": "Math: subtracts",
        "status": "failed",
        "duration": 20,
        "filePath": "src/math.test.js",
        "line": 18,
        "message": "expected 1 to equal 2",
        "trace": "AssertionError: expected 1 to equal 2\n    at Context.<anonymous> (src/math.test.js:19:12)",
        "suite": "Math"
      },
      {
        "name": "Math: divides",
        "status": "failed",
        "duration": 44,
        "message": "division by zero",
        "trace": "RangeError: division by zero\n    at divide (src/math.js:7:11)",
        "suite": "Math"
      },
      {
        "name": "Math: multiplies",
        "status": "skipped",
        "duration": 0,
        "suite": "Math"
      }
    ]
  }
}
"#;

fn names(report: &serde_json::Value) -> Vec<String> {
    report["results"]["tests"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Full Report
// =============================================================================

/// > Failures and errors are failed, skipped is skipped, anything else passed
#[test]
fn converts_math_fixture() {
    convert("reports/*.xml")
        .pwd(fixture("math"))
        .args(&["-o", "-"])
        .passes()
        .stdout_eq(MATH_REPORT);
}

/// > The written file and stdout carry the same document
#[test]
fn written_file_matches_stdout() {
    let temp = Project::from_fixture("math");
    convert("reports/*.xml").pwd(temp.path()).passes();

    assert_eq!(temp.read("ctrf/ctrf-report.json"), MATH_REPORT);
}

// =============================================================================
// Suite Traversal
// =============================================================================

/// > Nested suites name their own cases; files are read in sorted path order
#[test]
fn nested_suites_across_files() {
    let run = convert("test-results/**/*.xml")
        .pwd(fixture("nested"))
        .args(&["-o", "-"])
        .passes();
    let report = run.stdout_json();

    assert_eq!(
        names(&report),
        [
            "api: creates a user",
            "api: rejects duplicates",
            "unit: parses empty input",
            "lexer: tokenizes numbers",
        ]
    );

    let tests = &report["results"]["tests"];
    assert_eq!(tests[0]["duration"], 1250);
    assert_eq!(tests[1]["duration"], 500);
    assert_eq!(tests[1]["message"], "status 500");
    assert_eq!(tests[3]["suite"], "lexer");
    assert_eq!(report["results"]["summary"]["tests"], 4);
    assert_eq!(report["results"]["summary"]["failed"], 1);
}

/// > A single `*` does not cross directory boundaries
#[test]
fn single_star_stays_in_one_directory() {
    let report = convert("test-results/*/junit.xml")
        .pwd(fixture("nested"))
        .args(&["-o", "-"])
        .passes()
        .stdout_json();
    assert_eq!(report["results"]["summary"]["tests"], 4);

    convert("test-results/*.xml")
        .pwd(fixture("nested"))
        .args(&["-o", "-"])
        .passes()
        .stderr_has("no files found matching the pattern");
}

/// > An unnamed suite inherits the name of the nearest named ancestor
#[test]
fn unnamed_suite_inherits_parent_name() {
    let temp = Project::empty();
    temp.file(
        "junit.xml",
        r#"<testsuites>
  <testsuite name="outer">
    <testsuite>
      <testcase name="inner case" time="0.1"/>
    </testsuite>
  </testsuite>
</testsuites>"#,
    );

    let report = convert("junit.xml")
        .pwd(temp.path())
        .args(&["-o", "-"])
        .passes()
        .stdout_json();
    assert_eq!(names(&report), ["outer: inner case"]);
    assert_eq!(report["results"]["tests"][0]["suite"], "outer");
}

/// > --no-use-suite-name keeps the bare test name
#[test]
fn bare_names_without_suite_prefix() {
    let report = convert("reports/junit.xml")
        .pwd(fixture("math"))
        .args(&["-o", "-", "--no-use-suite-name"])
        .passes()
        .stdout_json();
    assert_eq!(
        names(&report),
        ["adds", "subtracts", "divides", "multiplies"]
    );
    assert_eq!(report["results"]["tests"][0]["suite"], "Math");
}

/// > -u false is the same as --no-use-suite-name
#[test]
fn use_suite_name_false() {
    let report = convert("reports/junit.xml")
        .pwd(fixture("math"))
        .args(&["-o", "-", "-u", "false"])
        .passes()
        .stdout_json();
    assert_eq!(names(&report)[0], "adds");
}

// =============================================================================
// Warnings
// =============================================================================

/// > Files without a testsuites or testsuite root contribute nothing
#[test]
fn file_without_suites_warns() {
    let temp = Project::from_fixture("no-suites");
    temp.file(
        "reports/junit.xml",
        r#"<testsuite name="S"><testcase name="t"/></testsuite>"#,
    );

    let report = convert("reports/*.xml")
        .pwd(temp.path())
        .args(&["-o", "-"])
        .passes()
        .stderr_has("warning: no test suites found in reports/coverage.xml")
        .stdout_json();
    assert_eq!(names(&report), ["S: t"]);
}

/// > Zero test cases across all files writes no report
#[test]
fn zero_test_cases_writes_nothing() {
    let temp = Project::from_fixture("no-suites");
    convert("reports/*.xml")
        .pwd(temp.path())
        .passes()
        .stderr_has("warning: no test cases found in files matching: reports/*.xml")
        .stdout_has(predicates::str::contains("Writing CTRF report").not());
    assert!(!temp.exists("ctrf"));
}

/// > Every matched file is parsed, whatever its extension
#[test]
fn broad_pattern_reads_non_xml_files() {
    convert("test-results/**/*")
        .pwd(fixture("nested"))
        .args(&["-o", "-"])
        .exits(1)
        .stderr_has("coverage.txt");
}
