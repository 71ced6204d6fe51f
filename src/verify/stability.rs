// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Blocking-pair search.
//!
//! For each hospital, only the students it ranks above its current partner
//! can form a blocking pair with it, so the walk down its list stops at that
//! partner. For each such student the same early exit applies from the
//! student's side. Total work is bounded by the combined length of all lists,
//! O(n²).

use std::fmt;

use serde::Serialize;

use crate::matching::Matching;
use crate::preferences::PreferenceInstance;

/// A hospital and a student who both prefer each other to their partners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BlockingPair {
    pub hospital: usize,
    pub student: usize,
}

impl fmt::Display for BlockingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hospital {} and Student {}", self.hospital, self.student)
    }
}

/// Find the first blocking pair, scanning hospitals in ascending id order.
///
/// # Panics
/// Panics if `matching` and `instance` have different sizes. A matching
/// produced by [`validate_matching`](super::validate_matching) against
/// `instance.size()` always has the right size.
pub fn check_stability(
    instance: &PreferenceInstance,
    matching: &Matching,
) -> Result<(), BlockingPair> {
    assert_eq!(
        instance.size(),
        matching.size(),
        "matching size does not match the instance"
    );

    let hospitals = instance.hospitals();
    let students = instance.students();

    for hospital in 0..instance.size() {
        let current = matching.student_at(hospital);
        for &student in hospitals.row(hospital) {
            if student == current {
                break;
            }
            let rival = matching.hospital_at(student as usize);
            for &candidate in students.row(student as usize) {
                if candidate as usize == hospital {
                    return Err(BlockingPair {
                        hospital: hospital + 1,
                        student: student as usize + 1,
                    });
                }
                if candidate == rival {
                    break;
                }
            }
        }
    }
    Ok(())
}
