//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the hand-computed fixtures used across the test suites.

#![doc(hidden)]

use crate::matching::ClaimedMatching;
use crate::preferences::PreferenceInstance;

/// Build an instance from 1-based slices, panicking on invalid input.
pub fn instance(hospitals: &[&[usize]], students: &[&[usize]]) -> PreferenceInstance {
    PreferenceInstance::new(
        hospitals.iter().map(|row| row.to_vec()).collect(),
        students.iter().map(|row| row.to_vec()).collect(),
    )
    .expect("fixture must be a valid instance")
}

/// Build a claimed matching from `(hospital, student)` pairs.
pub fn claimed(pairs: &[(i64, i64)]) -> ClaimedMatching {
    pairs.iter().copied().collect()
}

/// n = 2, everyone's first choice agrees: the matching is `{1→1, 2→2}`.
pub fn two_by_two() -> PreferenceInstance {
    instance(&[&[1, 2], &[2, 1]], &[&[1, 2], &[2, 1]])
}

/// n = 3 instance with a displacement chain.
///
/// Hospital-proposing trace (queue order 1, 2, 3):
///
/// ```text
/// h1 → s1  accepted
/// h2 → s1  s1 prefers h2, h1 freed
/// h3 → s2  accepted
/// h1 → s2  s2 prefers h1, h3 freed
/// h3 → s1  s1 prefers h3, h2 freed
/// h2 → s3  accepted
/// ```
///
/// Result `{1→2, 2→3, 3→1}` after 6 proposals and 3 displacements. It is
/// the only stable matching of this instance.
pub fn rejection_chain() -> PreferenceInstance {
    instance(
        &[&[1, 2, 3], &[1, 3, 2], &[2, 1, 3]],
        &[&[3, 2, 1], &[1, 3, 2], &[2, 1, 3]],
    )
}

/// Expected hospital → student pairs for [`rejection_chain`].
pub const REJECTION_CHAIN_MATCHING: [(usize, usize); 3] = [(1, 2), (2, 3), (3, 1)];
