// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain-text instance and matching formats.
//!
//! # Instance
//!
//! ```text
//! 3            n
//! 1 2 3        hospital 1, most preferred first
//! 1 3 2        hospital 2
//! 2 1 3        hospital 3
//! 3 2 1        student 1
//! 1 3 2        student 2
//! 2 1 3        student 3
//! ```
//!
//! The size line must hold exactly one integer. Each preference line is
//! validated as it is read, so a short or malformed line is attributed to the
//! participant it belongs to. Blank lines are skipped anywhere; lines after
//! the last student are ignored.
//!
//! # Matching
//!
//! One `<hospital> <student>` line per hospital. Written in ascending hospital
//! order; read in any order.
//!
//! Parsing works on `&str`; the `read_*` helpers pull a whole reader into
//! memory first, which costs nothing extra since the parsed instance holds
//! every value anyway.

use std::io::{self, Read, Write};

use serde::Serialize;
use thiserror::Error;

use crate::matching::{ClaimedMatching, Matching};
use crate::preferences::{
    checked_size, PreferenceError, PreferenceInstance, PreferenceTable, TableBuilder,
};
use crate::types::Side;
use crate::verify::{verify, Verdict};

/// A matching file line that is not two integers.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchingFormatError {
    #[error("line {line} format is incorrect: '{content}'")]
    MalformedLine { line: usize, content: String },
}

/// Failure to read a document from a reader.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Instance(#[from] PreferenceError),
    #[error(transparent)]
    Matching(#[from] MatchingFormatError),
}

/// Non-blank lines with their 1-based line numbers.
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

fn parse_size(line: &str) -> Result<usize, PreferenceError> {
    let mut tokens = line.split_ascii_whitespace();
    let token = tokens.next().ok_or(PreferenceError::MissingSize)?;
    if tokens.next().is_some() {
        return Err(PreferenceError::InvalidSize {
            token: line.trim().to_string(),
        });
    }
    let size = token
        .parse::<i64>()
        .map_err(|_| PreferenceError::InvalidSize {
            token: token.to_string(),
        })?;
    checked_size(size)
}

fn parse_table<'a, I>(lines: &mut I, side: Side, size: usize) -> Result<PreferenceTable, PreferenceError>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut builder = TableBuilder::new(side, size);
    let mut values = Vec::with_capacity(size);

    while !builder.is_complete() {
        let Some((_, line)) = lines.next() else {
            break;
        };
        values.clear();
        for token in line.split_ascii_whitespace() {
            let value = token
                .parse::<i64>()
                .map_err(|_| PreferenceError::InvalidToken {
                    side,
                    participant: builder.next_participant(),
                    token: token.to_string(),
                })?;
            values.push(value);
        }
        builder.push_row(values.iter().copied())?;
    }
    builder.finish()
}

/// Parse and validate an instance.
///
/// ```
/// use stable_match::format::parse_instance;
///
/// let instance = parse_instance("2\n1 2\n2 1\n1 2\n2 1\n").unwrap();
/// assert_eq!(instance.size(), 2);
///
/// let err = parse_instance("3\n1 2\n").unwrap_err();
/// assert_eq!(err.to_string(), "not enough values for hospital 1");
/// ```
pub fn parse_instance(text: &str) -> Result<PreferenceInstance, PreferenceError> {
    let mut lines = content_lines(text);
    let size = match lines.next() {
        Some((_, line)) => parse_size(line)?,
        None => return Err(PreferenceError::MissingSize),
    };
    let hospitals = parse_table(&mut lines, Side::Hospital, size)?;
    let students = parse_table(&mut lines, Side::Student, size)?;
    Ok(PreferenceInstance::from_tables(hospitals, students))
}

/// Read and validate an instance from any reader.
pub fn read_instance<R: Read>(mut reader: R) -> Result<PreferenceInstance, FormatError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_instance(&text)?)
}

/// Write `instance` in the text format.
pub fn write_instance<W: Write>(mut writer: W, instance: &PreferenceInstance) -> io::Result<()> {
    writeln!(writer, "{}", instance.size())?;
    let lists = instance
        .hospitals()
        .lists()
        .chain(instance.students().lists());
    for list in lists {
        for (position, id) in list.iter().enumerate() {
            if position > 0 {
                writer.write_all(b" ")?;
            }
            write!(writer, "{}", id)?;
        }
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

fn parse_pair(line: &str) -> Option<(i64, i64)> {
    let mut tokens = line.split_ascii_whitespace();
    let hospital = tokens.next()?.parse().ok()?;
    let student = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((hospital, student))
}

/// Parse claimed `(hospital, student)` pairs. Only the line syntax is checked
/// here; bijection checks belong to [`validate_matching`](crate::validate_matching).
pub fn parse_matching(text: &str) -> Result<ClaimedMatching, MatchingFormatError> {
    content_lines(text)
        .map(|(number, line)| {
            parse_pair(line).ok_or_else(|| MatchingFormatError::MalformedLine {
                line: number,
                content: line.trim().to_string(),
            })
        })
        .collect()
}

pub fn read_matching<R: Read>(mut reader: R) -> Result<ClaimedMatching, FormatError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_matching(&text)?)
}

/// Write one `<hospital> <student>` line per hospital, ascending.
pub fn write_matching<W: Write>(mut writer: W, matching: &Matching) -> io::Result<()> {
    for (hospital, student) in matching.pairs() {
        writeln!(writer, "{} {}", hospital, student)?;
    }
    writer.flush()
}

/// Verify a matching document against an instance document.
///
/// Every parse failure becomes [`Verdict::Invalid`]: instance problems are
/// reported before matching problems.
pub fn verify_documents(instance_text: &str, matching_text: &str) -> Verdict {
    let instance = match parse_instance(instance_text) {
        Ok(instance) => instance,
        Err(err) => return Verdict::Invalid(err.into()),
    };
    let claimed = match parse_matching(matching_text) {
        Ok(claimed) => claimed,
        Err(err) => return Verdict::Invalid(err.into()),
    };
    verify(&instance, &claimed)
}
