// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared vocabulary types.
//!
//! Participant ids are 1-based `usize` values everywhere in the public API,
//! matching the persisted file formats. Storage inside the crate is zero-based
//! `u32`; conversions happen at the API boundary.

use serde::Serialize;
use std::fmt;

/// One of the two universes being matched.
///
/// Every algorithm in the crate is written in terms of a proposing side and a
/// receiving side, so the same code runs hospital-proposing and
/// student-proposing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Hospital,
    Student,
}

impl Side {
    /// The other side of the market.
    pub fn opposite(self) -> Side {
        match self {
            Side::Hospital => Side::Student,
            Side::Student => Side::Hospital,
        }
    }

    /// Lowercase name, as used in diagnostics ("hospital 3 has ...").
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Hospital => "hospital",
            Side::Student => "student",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a 1-based public id into a zero-based index, if it lies in `[1, n]`.
#[inline]
pub(crate) fn to_index(id: usize, n: usize) -> Option<usize> {
    if (1..=n).contains(&id) {
        Some(id - 1)
    } else {
        None
    }
}

/// Convert a zero-based index into a 1-based public id.
#[inline]
pub(crate) fn to_id(index: u32) -> usize {
    index as usize + 1
}
