// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed JUnit XML document.
//!
//! Reads the JUnit report schema (`testsuites` / `testsuite` / `testcase`
//! with `failure` / `error` / `skipped` markers) into a tree with an explicit
//! field for everything the converter understands. Any other element is
//! skipped along with its subtree. Failure and error bodies keep their
//! whitespace.

use quick_xml::Reader;
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};

use super::case::Fault;

const TAG_REPORT: &[u8] = b"testsuites";
const TAG_TEST_SUITE: &[u8] = b"testsuite";
const TAG_TEST_CASE: &[u8] = b"testcase";
const TAG_FAILURE: &[u8] = b"failure";
const TAG_ERROR: &[u8] = b"error";
const TAG_SKIPPED: &[u8] = b"skipped";

/// Errors raised while reading a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error("malformed attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("document has no root element")]
    NoRoot,

    #[error("unexpected end of file inside <{0}>")]
    UnexpectedEof(String),
}

/// A parsed JUnit report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Root,
}

/// The document's root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Root {
    /// `<testsuites>` wrapping zero or more suites.
    Suites(Vec<SuiteNode>),
    /// A bare `<testsuite>`.
    Suite(SuiteNode),
    /// Any other root element, by name.
    Other(String),
}

/// A `<testsuite>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteNode {
    pub name: Option<String>,
    /// Direct `<testcase>` children, in document order.
    pub cases: Vec<CaseNode>,
    /// Direct nested `<testsuite>` children, in document order.
    pub suites: Vec<SuiteNode>,
}

/// A `<testcase>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseNode {
    pub classname: Option<String>,
    pub name: Option<String>,
    pub time: Option<String>,
    pub file: Option<String>,
    pub lineno: Option<String>,
    /// First `<failure>` child.
    pub failure: Option<Fault>,
    /// First `<error>` child.
    pub error: Option<Fault>,
    /// Whether a `<skipped>` child is present.
    pub skipped: bool,
}

type ParseResult<T> = std::result::Result<T, DocumentError>;

/// Parse a JUnit XML report.
pub fn parse(xml: &str) -> ParseResult<Document> {
    let mut reader = Reader::from_str(xml.trim_start_matches('\u{feff}'));

    let mut root = None;
    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(e) => {
                let node = read_root(&mut reader, &e, false)?;
                root.get_or_insert(node);
            }
            Event::Empty(e) => {
                let node = read_root(&mut reader, &e, true)?;
                root.get_or_insert(node);
            }
            // Declarations, comments, processing instructions, stray text
            _ => {}
        }
    }

    root.map(|root| Document { root }).ok_or(DocumentError::NoRoot)
}

fn read_root(reader: &mut Reader<&[u8]>, start: &BytesStart, empty: bool) -> ParseResult<Root> {
    match start.local_name().as_ref() {
        TAG_REPORT => {
            let mut suites = Vec::new();
            if !empty {
                read_children(reader, TAG_REPORT, |reader, e, empty| {
                    if e.local_name().as_ref() == TAG_TEST_SUITE {
                        suites.push(read_suite(reader, e, empty)?);
                    } else if !empty {
                        skip(reader, e)?;
                    }
                    Ok(())
                })?;
            }
            Ok(Root::Suites(suites))
        }
        TAG_TEST_SUITE => Ok(Root::Suite(read_suite(reader, start, empty)?)),
        other => {
            if !empty {
                skip(reader, start)?;
            }
            Ok(Root::Other(String::from_utf8_lossy(other).into_owned()))
        }
    }
}

fn read_suite(reader: &mut Reader<&[u8]>, start: &BytesStart, empty: bool) -> ParseResult<SuiteNode> {
    let mut suite = SuiteNode {
        name: attr(start, b"name")?,
        ..Default::default()
    };
    if empty {
        return Ok(suite);
    }

    read_children(reader, TAG_TEST_SUITE, |reader, e, empty| {
        match e.local_name().as_ref() {
            TAG_TEST_CASE => suite.cases.push(read_case(reader, e, empty)?),
            TAG_TEST_SUITE => suite.suites.push(read_suite(reader, e, empty)?),
            _ if !empty => skip(reader, e)?,
            _ => {}
        }
        Ok(())
    })?;

    tracing::trace!(
        "read suite {:?}: {} cases, {} nested suites",
        suite.name,
        suite.cases.len(),
        suite.suites.len()
    );
    Ok(suite)
}

fn read_case(reader: &mut Reader<&[u8]>, start: &BytesStart, empty: bool) -> ParseResult<CaseNode> {
    let mut case = CaseNode {
        classname: attr(start, b"classname")?,
        name: attr(start, b"name")?,
        time: attr(start, b"time")?,
        file: attr(start, b"file")?,
        lineno: attr(start, b"lineno")?,
        ..Default::default()
    };
    if empty {
        return Ok(case);
    }

    read_children(reader, TAG_TEST_CASE, |reader, e, empty| {
        match e.local_name().as_ref() {
            TAG_FAILURE => {
                let fault = read_fault(reader, e, empty)?;
                case.failure.get_or_insert(fault);
            }
            TAG_ERROR => {
                let fault = read_fault(reader, e, empty)?;
                case.error.get_or_insert(fault);
            }
            TAG_SKIPPED => {
                case.skipped = true;
                if !empty {
                    skip(reader, e)?;
                }
            }
            _ if !empty => skip(reader, e)?,
            _ => {}
        }
        Ok(())
    })?;

    Ok(case)
}

fn read_fault(reader: &mut Reader<&[u8]>, start: &BytesStart, empty: bool) -> ParseResult<Fault> {
    let mut fault = Fault {
        message: attr(start, b"message")?.unwrap_or_default(),
        kind: attr(start, b"type")?.unwrap_or_default(),
        trace: String::new(),
    };
    if empty {
        return Ok(fault);
    }

    let tag = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let mut has_cdata = false;
    loop {
        match reader.read_event()? {
            Event::Text(text) => fault.trace.push_str(&text.unescape()?),
            Event::CData(data) => {
                has_cdata = true;
                fault.trace.push_str(&String::from_utf8_lossy(&data));
            }
            Event::Start(e) => skip(reader, &e)?,
            Event::End(_) => break,
            Event::Eof => return Err(DocumentError::UnexpectedEof(tag)),
            _ => {}
        }
    }
    // Body text is kept as written; whitespace-only text counts as no body.
    if !has_cdata && fault.trace.trim().is_empty() {
        fault.trace.clear();
    }
    Ok(fault)
}

/// Visit each child element of an open element until its end tag.
///
/// The visitor receives the child's start tag and whether it was
/// self-closing; a non-empty child must be consumed through its end tag.
fn read_children<'a, F>(reader: &mut Reader<&'a [u8]>, tag: &[u8], mut visit: F) -> ParseResult<()>
where
    F: FnMut(&mut Reader<&'a [u8]>, &BytesStart<'a>, bool) -> ParseResult<()>,
{
    loop {
        match reader.read_event()? {
            Event::Start(e) => visit(reader, &e, false)?,
            Event::Empty(e) => visit(reader, &e, true)?,
            Event::End(_) => return Ok(()),
            Event::Eof => {
                return Err(DocumentError::UnexpectedEof(
                    String::from_utf8_lossy(tag).into_owned(),
                ));
            }
            _ => {}
        }
    }
}

/// Consume an element's subtree through its matching end tag.
fn skip(reader: &mut Reader<&[u8]>, start: &BytesStart) -> ParseResult<()> {
    reader.read_to_end(start.name())?;
    Ok(())
}

/// Read an attribute by name, unescaped.
fn attr(start: &BytesStart, key: &[u8]) -> ParseResult<Option<String>> {
    for attribute in start.attributes() {
        let attribute = attribute?;
        if attribute.key.local_name().as_ref() == key {
            return Ok(Some(attribute.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
