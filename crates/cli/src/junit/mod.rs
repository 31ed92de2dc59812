// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JUnit XML report reading.

pub mod case;
pub mod document;
pub mod walk;

pub use case::{Fault, Outcome, RawTestCase};
pub use document::{Document, DocumentError, Root, parse};
pub use walk::{Walk, walk};
