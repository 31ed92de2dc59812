// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JUnit to CTRF conversion.
//!
//! Resolves a glob pattern, reads every matched report, classifies the
//! test cases, and assembles one CTRF report. Writing the report is a
//! separate step so callers can use the report value directly.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::classify::classify;
use crate::ctrf::Report;
use crate::error::{Error, Result};
use crate::{glob, loader, report};

/// Default location of the written report.
pub const DEFAULT_OUTPUT_PATH: &str = "ctrf/ctrf-report.json";

/// Conversion settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Tool name recorded in the report (defaults to `junit-to-ctrf`).
    pub tool_name: Option<String>,
    /// Environment properties; left out of the report when empty.
    pub environment: BTreeMap<String, String>,
    /// Prefix test names with their suite name.
    pub use_suite_name: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            tool_name: None,
            environment: BTreeMap::new(),
            use_suite_name: true,
        }
    }
}

/// A non-fatal condition met during conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The pattern matched no files.
    NoFilesMatched { pattern: String },
    /// A file had neither a `<testsuites>` nor a `<testsuite>` root.
    NoSuitesFound { path: PathBuf },
    /// Files matched but held no test cases; no report is produced.
    NoTestCases { pattern: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::NoFilesMatched { pattern } => {
                write!(f, "no files found matching the pattern: {}", pattern)
            }
            Warning::NoSuitesFound { path } => {
                write!(f, "no test suites found in {}", path.display())
            }
            Warning::NoTestCases { pattern } => {
                write!(f, "no test cases found in files matching: {}", pattern)
            }
        }
    }
}

/// Outcome of a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The report, or `None` when there was nothing to convert.
    pub report: Option<Report>,
    /// Number of files read.
    pub files: usize,
    pub warnings: Vec<Warning>,
}

/// Convert every JUnit report matching `pattern` into one CTRF report.
///
/// Any unreadable or malformed file fails the whole conversion.
pub fn convert(pattern: &str, options: &ConvertOptions) -> Result<Conversion> {
    if pattern.trim().is_empty() {
        return Err(Error::Argument("pattern must not be empty".to_string()));
    }

    let paths = glob::resolve(pattern)?;
    if paths.is_empty() {
        return Ok(nothing_to_convert(
            0,
            vec![Warning::NoFilesMatched {
                pattern: pattern.to_string(),
            }],
        ));
    }
    tracing::info!("found {} JUnit report files", paths.len());

    let loaded = loader::load_files(&paths)?;

    let mut warnings: Vec<Warning> = loaded
        .iter()
        .filter(|file| !file.walk.suites_found)
        .map(|file| Warning::NoSuitesFound {
            path: file.path.clone(),
        })
        .collect();
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let tests: Vec<_> = loaded
        .iter()
        .flat_map(|file| &file.walk.cases)
        .map(|case| classify(case, options.use_suite_name))
        .collect();

    if tests.is_empty() {
        warnings.push(Warning::NoTestCases {
            pattern: pattern.to_string(),
        });
        return Ok(nothing_to_convert(paths.len(), warnings));
    }

    tracing::info!("converted {} test cases", tests.len());
    let report = report::build_report(tests, options.tool_name.as_deref(), &options.environment);
    Ok(Conversion {
        report: Some(report),
        files: paths.len(),
        warnings,
    })
}

fn nothing_to_convert(files: usize, warnings: Vec<Warning>) -> Conversion {
    if let Some(last) = warnings.last() {
        tracing::warn!("{}", last);
    }
    Conversion {
        report: None,
        files,
        warnings,
    }
}

/// Serialize a report as 2-space indented JSON with a trailing newline.
pub fn write_report_to<W: Write>(writer: &mut W, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    Ok(())
}

/// Write a report to `path`, creating parent directories as needed.
pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    let io_error = |source: std::io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| Error::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let file = std::fs::File::create(path).map_err(io_error)?;
    let mut writer = std::io::BufWriter::new(file);
    write_report_to(&mut writer, report)?;
    writer.flush().map_err(io_error)?;
    tracing::debug!("wrote report to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
