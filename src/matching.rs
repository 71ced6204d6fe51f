// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matchings: trusted and claimed.
//!
//! [`Matching`] is a complete hospital ↔ student bijection. Only the matcher
//! and the validator can construct one, so holding a `Matching` is proof that
//! the bijection checks passed. [`ClaimedMatching`] is the untrusted form read
//! from disk: an ordered list of raw `(hospital, student)` pairs that may be
//! partial, repeated or out of range.

use crate::contracts::check_bijection;
use crate::types::{to_id, to_index, Side};

/// A perfect matching between `n` hospitals and `n` students.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matching {
    student_of: Vec<u32>,
    hospital_of: Vec<u32>,
}

impl Matching {
    /// Build from the hospital → student view (zero-based).
    ///
    /// The caller guarantees `student_of` is a permutation of `0..n`.
    pub(crate) fn from_hospital_view(student_of: Vec<u32>) -> Self {
        let mut hospital_of = vec![0u32; student_of.len()];
        for (hospital, &student) in student_of.iter().enumerate() {
            hospital_of[student as usize] = hospital as u32;
        }
        check_bijection(&student_of, &hospital_of);
        Self {
            student_of,
            hospital_of,
        }
    }

    /// Build from the student → hospital view (zero-based).
    pub(crate) fn from_student_view(hospital_of: Vec<u32>) -> Self {
        let mut student_of = vec![0u32; hospital_of.len()];
        for (student, &hospital) in hospital_of.iter().enumerate() {
            student_of[hospital as usize] = student as u32;
        }
        check_bijection(&student_of, &hospital_of);
        Self {
            student_of,
            hospital_of,
        }
    }

    /// The matching of the empty instance.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of matched pairs (equal to `n`).
    pub fn size(&self) -> usize {
        self.student_of.len()
    }

    pub fn is_empty(&self) -> bool {
        self.student_of.is_empty()
    }

    pub fn student_for(&self, hospital: usize) -> Option<usize> {
        to_index(hospital, self.size()).map(|h| to_id(self.student_of[h]))
    }

    pub fn hospital_for(&self, student: usize) -> Option<usize> {
        to_index(student, self.size()).map(|s| to_id(self.hospital_of[s]))
    }

    /// Partner of participant `id` on `side`.
    pub fn partner(&self, side: Side, id: usize) -> Option<usize> {
        match side {
            Side::Hospital => self.student_for(id),
            Side::Student => self.hospital_for(id),
        }
    }

    /// `(hospital, student)` pairs in ascending hospital order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.student_of
            .iter()
            .enumerate()
            .map(|(hospital, &student)| (hospital + 1, to_id(student)))
    }

    #[inline]
    pub(crate) fn student_at(&self, hospital: usize) -> u32 {
        self.student_of[hospital]
    }

    #[inline]
    pub(crate) fn hospital_at(&self, student: usize) -> u32 {
        self.hospital_of[student]
    }
}

/// An untrusted list of `(hospital, student)` pairs, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClaimedMatching {
    pairs: Vec<(i64, i64)>,
}

impl ClaimedMatching {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, hospital: i64, student: i64) {
        self.pairs.push((hospital, student));
    }

    pub fn pairs(&self) -> &[(i64, i64)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromIterator<(i64, i64)> for ClaimedMatching {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl From<&Matching> for ClaimedMatching {
    fn from(matching: &Matching) -> Self {
        matching
            .pairs()
            .map(|(hospital, student)| (hospital as i64, student as i64))
            .collect()
    }
}
