// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file loading.
//!
//! Handles junit-to-ctrf.toml parsing with version validation and unknown
//! key warnings, plus discovery from the working directory upward.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Config file name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "junit-to-ctrf.toml";

/// The only config version understood.
pub const SUPPORTED_VERSION: i64 = 1;

const KNOWN_KEYS: &[&str] = &["version", "report", "environment"];
const KNOWN_REPORT_KEYS: &[&str] = &["output", "tool", "use_suite_name"];

/// Full configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Report settings.
    pub report: ReportConfig,

    /// Environment properties attached to every report.
    pub environment: BTreeMap<String, String>,
}

/// The `[report]` table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    /// Output path for the CTRF report.
    pub output: Option<PathBuf>,

    /// Tool name recorded in the report.
    pub tool: Option<String>,

    /// Prefix test names with their suite name.
    pub use_suite_name: Option<bool>,
}

/// Raw file layout; `environment` values are stringified after parsing.
#[derive(Deserialize)]
struct RawConfig {
    version: Option<i64>,

    #[serde(default)]
    report: Option<toml::Table>,

    #[serde(default)]
    environment: Option<toml::Table>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Load config from a file, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("failed to read {}: {}", path.display(), e),
        path: Some(path.to_path_buf()),
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let raw: RawConfig = toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = raw
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;
    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})",
            version, SUPPORTED_VERSION
        )));
    }

    for key in raw.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let report = match raw.report {
        Some(table) => {
            for key in table.keys() {
                if !KNOWN_REPORT_KEYS.contains(&key.as_str()) {
                    warn_unknown_key(path, &format!("report.{}", key));
                }
            }
            toml::Value::Table(table)
                .try_into::<ReportConfig>()
                .map_err(|e| config_error(format!("report: {}", e)))?
        }
        None => ReportConfig::default(),
    };

    let mut environment = BTreeMap::new();
    for (key, value) in raw.environment.unwrap_or_default() {
        let value = match value {
            toml::Value::String(s) => s,
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            toml::Value::Boolean(b) => b.to_string(),
            other => {
                return Err(config_error(format!(
                    "environment.{}: expected a string, found {}",
                    key,
                    other.type_str()
                )));
            }
        };
        environment.insert(key, value);
    }

    Ok(Config {
        version,
        report,
        environment,
    })
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "junit-to-ctrf: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

/// Find junit-to-ctrf.toml in `start_dir` or an ancestor.
///
/// The search stops after the first directory containing `.git`.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Load the explicit config file, or a discovered one, or the defaults.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    let path = match explicit {
        Some(path) if !path.exists() => {
            return Err(Error::Config {
                message: format!("config file not found: {}", path.display()),
                path: Some(path.to_path_buf()),
            });
        }
        Some(path) => Some(path.to_path_buf()),
        None => find_config(cwd),
    };

    match path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load(&path)
        }
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
