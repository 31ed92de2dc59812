// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flattened JUnit test case records.

/// Detail attached to a `<failure>` or `<error>` element.
///
/// Attributes missing from the element are empty strings, not `None`:
/// the element's presence is what matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fault {
    /// The `message` attribute.
    pub message: String,
    /// The `type` attribute.
    pub kind: String,
    /// Text content of the element (usually a stack trace).
    pub trace: String,
}

impl Fault {
    /// Fill each empty field from `fallback`.
    fn or(self, fallback: Fault) -> Fault {
        let pick = |own: String, other: String| if own.is_empty() { other } else { own };
        Fault {
            message: pick(self.message, fallback.message),
            kind: pick(self.kind, fallback.kind),
            trace: pick(self.trace, fallback.trace),
        }
    }
}

/// How a test case ended, decided once while reading the document.
///
/// Precedence when a test case carries several markers:
/// failure, then error, then skipped. A failure with an empty message
/// or body takes those from the error, when there is one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    Passed,
    Failed(Fault),
    Errored(Fault),
    Skipped,
}

impl Outcome {
    /// Resolve an outcome from the markers found under a `<testcase>`.
    pub fn from_markers(failure: Option<Fault>, error: Option<Fault>, skipped: bool) -> Self {
        match (failure, error) {
            (Some(failure), Some(error)) => Outcome::Failed(failure.or(error)),
            (Some(failure), None) => Outcome::Failed(failure),
            (None, Some(fault)) => Outcome::Errored(fault),
            (None, None) if skipped => Outcome::Skipped,
            (None, None) => Outcome::Passed,
        }
    }

    /// The failure or error detail, if any.
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Outcome::Failed(fault) | Outcome::Errored(fault) => Some(fault),
            Outcome::Passed | Outcome::Skipped => None,
        }
    }
}

/// One `<testcase>` element tagged with its enclosing suite name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTestCase {
    /// Name of the nearest named enclosing suite.
    pub suite: Option<String>,
    pub classname: Option<String>,
    pub name: Option<String>,
    /// Duration in seconds, as written in the report.
    pub time: Option<String>,
    pub file: Option<String>,
    pub lineno: Option<String>,
    pub outcome: Outcome,
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;
