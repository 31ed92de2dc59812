// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob pattern resolution.
//!
//! Walks from the literal directory prefix of a pattern with the `ignore`
//! crate and keeps regular files the pattern matches. `*` stays within one
//! path component, `**` spans directories.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use ignore::WalkBuilder;

use crate::error::{Error, Result};

const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// Compile a pattern into a matcher.
pub fn build_matcher(pattern: &str) -> Result<GlobMatcher> {
    let glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| Error::Pattern {
            pattern: pattern.to_string(),
            message: e.kind().to_string(),
        })?;
    Ok(glob.compile_matcher())
}

/// Resolve a pattern to the files it matches, sorted by path.
///
/// A pattern without glob metacharacters names a single file.
pub fn resolve(pattern: &str) -> Result<Vec<PathBuf>> {
    if !pattern.contains(GLOB_META) {
        let path = PathBuf::from(pattern);
        return Ok(if path.is_file() { vec![path] } else { Vec::new() });
    }

    let matcher = build_matcher(pattern)?;
    let base = literal_base(pattern);
    let root = if base.is_empty() { Path::new(".") } else { Path::new(base) };
    if !root.is_dir() {
        tracing::debug!("pattern base {} is not a directory", root.display());
        return Ok(Vec::new());
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(true)
        .follow_links(true)
        .max_depth(max_depth(pattern, base));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("walk error: {}", err);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        // Relative patterns match against paths without the walk's "./" root.
        let candidate = if base.is_empty() {
            path.strip_prefix(".").unwrap_or(path)
        } else {
            path
        };
        if matcher.is_match(candidate) {
            files.push(candidate.to_path_buf());
        }
    }

    files.sort();
    tracing::debug!("pattern {} matched {} files", pattern, files.len());
    Ok(files)
}

/// The directory prefix of `pattern` before its first glob metacharacter.
fn literal_base(pattern: &str) -> &str {
    let first_meta = pattern.find(GLOB_META).unwrap_or(pattern.len());
    match pattern[..first_meta].rfind('/') {
        Some(0) => "/",
        Some(i) => &pattern[..i],
        None => "",
    }
}

/// Depth below `base` a match can be at, or `None` when `**` is present.
fn max_depth(pattern: &str, base: &str) -> Option<usize> {
    if pattern.contains("**") {
        return None;
    }
    let rest = pattern[base.len()..].trim_start_matches('/');
    Some(rest.split('/').filter(|c| !c.is_empty()).count())
}

#[cfg(test)]
#[path = "glob_tests.rs"]
mod tests;
