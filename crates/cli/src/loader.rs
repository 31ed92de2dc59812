// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading JUnit report files.
//!
//! Files are read and parsed in parallel on the rayon pool. Results keep
//! the order of the input paths, and the first failure aborts the batch.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::junit::{self, Walk};

/// Test cases read from one report file.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub walk: Walk,
}

/// Read and walk one report file.
pub fn load_file(path: &Path) -> Result<LoadedFile> {
    tracing::debug!("reading JUnit report {}", path.display());
    let xml = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = junit::parse(&xml).map_err(|e| Error::Xml {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let walk = junit::walk(&document);
    tracing::debug!("{}: {} test cases", path.display(), walk.cases.len());
    Ok(LoadedFile {
        path: path.to_path_buf(),
        walk,
    })
}

/// Read every file, in input order.
pub fn load_files(paths: &[PathBuf]) -> Result<Vec<LoadedFile>> {
    paths.par_iter().map(|path| load_file(path)).collect()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
