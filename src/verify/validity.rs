// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bijection checks for claimed matchings.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::matching::{ClaimedMatching, Matching};
use crate::types::to_index;

/// A claimed matching that is not a bijection over `[1, n]`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchingError {
    #[error("hospital {hospital} is matched more than once")]
    DuplicateHospital { hospital: i64 },
    #[error("not all hospitals are matched (expected {expected}, found {found})")]
    WrongCardinality { expected: usize, found: usize },
    #[error("hospital {hospital} is out of range")]
    HospitalOutOfRange { hospital: i64 },
    #[error("student {student} is out of range")]
    StudentOutOfRange { hospital: i64, student: i64 },
    /// `first` and `second` are the hospitals both claiming the student.
    #[error("student {student} is matched more than once")]
    DuplicateStudent { student: i64, first: i64, second: i64 },
    #[error("student {student} is not matched")]
    UnmatchedStudent { student: usize },
}

fn in_range(id: i64, n: usize) -> Option<usize> {
    usize::try_from(id).ok().and_then(|id| to_index(id, n))
}

/// Turn claimed pairs into a [`Matching`], or report the first violation.
///
/// Checks run in a fixed order and stop at the first failure:
/// repeated hospital keys (input order), entry count, id ranges, repeated
/// students, student coverage. Range and duplicate checks visit entries in
/// ascending hospital order so the reported id does not depend on line order.
pub fn validate_matching(claimed: &ClaimedMatching, n: usize) -> Result<Matching, MatchingError> {
    let mut seen = HashSet::with_capacity(claimed.len());
    for &(hospital, _) in claimed.pairs() {
        if !seen.insert(hospital) {
            return Err(MatchingError::DuplicateHospital { hospital });
        }
    }

    if claimed.len() != n {
        return Err(MatchingError::WrongCardinality {
            expected: n,
            found: claimed.len(),
        });
    }

    let mut entries = claimed.pairs().to_vec();
    entries.sort_unstable_by_key(|&(hospital, _)| hospital);

    let mut indexed = Vec::with_capacity(n);
    for &(hospital, student) in &entries {
        let h = in_range(hospital, n).ok_or(MatchingError::HospitalOutOfRange { hospital })?;
        let s = in_range(student, n).ok_or(MatchingError::StudentOutOfRange { hospital, student })?;
        indexed.push((h, s));
    }

    let mut hospital_of: Vec<Option<u32>> = vec![None; n];
    let mut student_of = vec![0u32; n];
    for &(h, s) in &indexed {
        if let Some(first) = hospital_of[s] {
            return Err(MatchingError::DuplicateStudent {
                student: s as i64 + 1,
                first: i64::from(first) + 1,
                second: h as i64 + 1,
            });
        }
        hospital_of[s] = Some(h as u32);
        student_of[h] = s as u32;
    }

    if let Some(student) = hospital_of.iter().position(Option::is_none) {
        return Err(MatchingError::UnmatchedStudent {
            student: student + 1,
        });
    }

    Ok(Matching::from_hospital_view(student_of))
}
