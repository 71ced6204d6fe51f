// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::stability::BlockingPair;
use super::validity::MatchingError;
use crate::format::MatchingFormatError;
use crate::preferences::PreferenceError;

/// Why a verification input was rejected before stability was examined.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "source", content = "error", rename_all = "snake_case")]
pub enum InvalidReason {
    /// The preference instance itself is malformed.
    #[error(transparent)]
    Instance(#[from] PreferenceError),
    /// The matching text could not be read as pairs.
    #[error(transparent)]
    Format(#[from] MatchingFormatError),
    /// The pairs do not form a bijection.
    #[error(transparent)]
    Matching(#[from] MatchingError),
}

/// Outcome of one verification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", content = "detail", rename_all = "snake_case")]
pub enum Verdict {
    /// A bijection with no blocking pair.
    Stable,
    Invalid(InvalidReason),
    Unstable(BlockingPair),
}

impl Verdict {
    pub fn is_stable(&self) -> bool {
        matches!(self, Verdict::Stable)
    }

    /// True unless the input was rejected as malformed.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Verdict::Invalid(_))
    }

    pub fn blocking_pair(&self) -> Option<BlockingPair> {
        match self {
            Verdict::Unstable(pair) => Some(*pair),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Stable => f.write_str("VALID STABLE"),
            Verdict::Invalid(reason) => write!(f, "INVALID - {}", reason),
            Verdict::Unstable(pair) => write!(
                f,
                "UNSTABLE, {} prefer each other over their current matches.",
                pair
            ),
        }
    }
}
