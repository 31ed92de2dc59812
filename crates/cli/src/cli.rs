// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};

use crate::config::Config;
use crate::convert::{ConvertOptions, DEFAULT_OUTPUT_PATH};
use crate::report::parse_env_props;

/// Convert JUnit XML report(s) to CTRF
#[derive(Debug, Parser)]
#[command(name = "junit-to-ctrf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Glob pattern to match JUnit XML files (e.g., "test-results/**/*.xml")
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Output file for the CTRF report, or "-" for stdout [default: ctrf/ctrf-report.json]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Tool name
    #[arg(short, long, value_name = "NAME")]
    pub tool: Option<String>,

    /// Environment property (repeatable)
    #[arg(short, long = "env", value_name = "KEY=VALUE", action = ArgAction::Append)]
    pub env: Vec<String>,

    /// Use suite name in the test name [default: true]
    #[arg(
        short = 'u',
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub use_suite_name: Option<bool>,

    /// Do not use suite name in the test name
    #[arg(long, conflicts_with = "use_suite_name")]
    pub no_use_suite_name: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "CTRF_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Where the report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl Cli {
    /// Resolve the output target: flag, then config, then the default path.
    pub fn output_target(&self, config: &Config) -> OutputTarget {
        let path = self
            .output
            .clone()
            .or_else(|| config.report.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

        if path == Path::new("-") {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(path)
        }
    }

    /// Merge flags over config values over defaults.
    ///
    /// `--env` entries override config environment keys of the same name.
    pub fn convert_options(&self, config: &Config) -> ConvertOptions {
        let use_suite_name = if self.no_use_suite_name {
            Some(false)
        } else {
            self.use_suite_name
        };

        let mut environment = config.environment.clone();
        environment.extend(parse_env_props(&self.env));

        ConvertOptions {
            tool_name: self.tool.clone().or_else(|| config.report.tool.clone()),
            environment,
            use_suite_name: use_suite_name
                .or(config.report.use_suite_name)
                .unwrap_or(true),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
