// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validated preference data.
//!
//! A [`PreferenceInstance`] can only be obtained through validation, so the
//! matcher and the verifier never see a list that is not a permutation of
//! `[1, n]`. Each side is stored as one flat, zero-based `n * n` table: row `p`
//! holds participant `p`'s ranking, most preferred first.
//!
//! Validation walks each row position by position and stops at the first
//! defect, so the reported error always names the earliest problem in the
//! input: hospitals are checked before students, lower ids before higher ones.

use crate::types::{to_id, to_index, Side};
use serde::Serialize;
use thiserror::Error;

/// Largest accepted instance size.
///
/// Both tables together hold `2 * n * n` entries; beyond this bound an
/// instance cannot be held in memory on any realistic machine.
pub const MAX_SIZE: usize = 1 << 16;

/// A malformed preference instance.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreferenceError {
    /// The input has no size token at all.
    #[error("missing or invalid n")]
    MissingSize,
    /// The size token is not a single integer.
    #[error("missing or invalid n ('{token}')")]
    InvalidSize { token: String },
    #[error("n cannot be negative (got {size})")]
    NegativeSize { size: i64 },
    #[error("n = {size} exceeds the supported maximum of {max}", max = MAX_SIZE)]
    SizeTooLarge { size: i64 },
    /// A row (or a whole line) has fewer than `n` values.
    #[error("not enough values for {side} {participant}")]
    NotEnoughValues { side: Side, participant: usize },
    #[error("{side} {participant} has out-of-range value {value}")]
    OutOfRange {
        side: Side,
        participant: usize,
        value: i64,
    },
    #[error("{side} {participant} has duplicate value {value}")]
    Duplicate {
        side: Side,
        participant: usize,
        value: i64,
    },
    #[error("{side} {participant} has {found} values, expected {expected}")]
    TooManyValues {
        side: Side,
        participant: usize,
        expected: usize,
        found: usize,
    },
    #[error("{side} {participant} has non-integer value '{token}'")]
    InvalidToken {
        side: Side,
        participant: usize,
        token: String,
    },
    #[error("expected {expected} {side} preference lists, found {found}")]
    WrongListCount {
        side: Side,
        expected: usize,
        found: usize,
    },
}

/// Check a declared size and convert it to `usize`.
pub(crate) fn checked_size(size: i64) -> Result<usize, PreferenceError> {
    if size < 0 {
        return Err(PreferenceError::NegativeSize { size });
    }
    match usize::try_from(size) {
        Ok(n) if n <= MAX_SIZE => Ok(n),
        _ => Err(PreferenceError::SizeTooLarge { size }),
    }
}

/// Incremental, row-at-a-time validator for one side's table.
///
/// Used by both the in-memory constructors and the text codec, so a file and
/// a `Vec<Vec<_>>` are held to exactly the same rules.
pub(crate) struct TableBuilder {
    side: Side,
    size: usize,
    entries: Vec<u32>,
    // stamps[v] == p + 1 means value v was already seen in row p.
    stamps: Vec<u32>,
    rows: usize,
}

impl TableBuilder {
    pub(crate) fn new(side: Side, size: usize) -> Self {
        debug_assert!(size <= MAX_SIZE);
        Self {
            side,
            size,
            entries: Vec::new(),
            stamps: Vec::new(),
            rows: 0,
        }
    }

    /// 1-based id of the participant whose row comes next.
    pub(crate) fn next_participant(&self) -> usize {
        self.rows + 1
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.rows == self.size
    }

    /// Validate one row and append it.
    pub(crate) fn push_row<I>(&mut self, values: I) -> Result<(), PreferenceError>
    where
        I: IntoIterator<Item = i64>,
    {
        let participant = self.next_participant();
        if self.rows == self.size {
            return Err(PreferenceError::WrongListCount {
                side: self.side,
                expected: self.size,
                found: participant,
            });
        }
        if self.stamps.is_empty() {
            self.stamps = vec![0; self.size];
            self.entries.reserve(self.size);
        }

        let stamp = participant as u32;
        let mut found = 0usize;
        for value in values {
            found += 1;
            if found > self.size {
                continue;
            }
            let index = usize::try_from(value)
                .ok()
                .and_then(|id| to_index(id, self.size))
                .ok_or(PreferenceError::OutOfRange {
                    side: self.side,
                    participant,
                    value,
                })?;
            if self.stamps[index] == stamp {
                return Err(PreferenceError::Duplicate {
                    side: self.side,
                    participant,
                    value,
                });
            }
            self.stamps[index] = stamp;
            self.entries.push(index as u32);
        }

        if found < self.size {
            return Err(PreferenceError::NotEnoughValues {
                side: self.side,
                participant,
            });
        }
        if found > self.size {
            return Err(PreferenceError::TooManyValues {
                side: self.side,
                participant,
                expected: self.size,
                found,
            });
        }

        self.rows += 1;
        Ok(())
    }

    /// Finish the table; a missing row is reported for its participant.
    pub(crate) fn finish(self) -> Result<PreferenceTable, PreferenceError> {
        if self.rows < self.size {
            return Err(PreferenceError::NotEnoughValues {
                side: self.side,
                participant: self.next_participant(),
            });
        }
        Ok(PreferenceTable {
            side: self.side,
            size: self.size,
            entries: self.entries,
        })
    }
}

fn build_table<I, R>(side: Side, size: usize, rows: I) -> Result<PreferenceTable, PreferenceError>
where
    I: IntoIterator<Item = R>,
    I::IntoIter: ExactSizeIterator,
    R: IntoIterator<Item = i64>,
{
    let rows = rows.into_iter();
    if rows.len() > size {
        return Err(PreferenceError::WrongListCount {
            side,
            expected: size,
            found: rows.len(),
        });
    }
    let mut builder = TableBuilder::new(side, size);
    for row in rows {
        builder.push_row(row)?;
    }
    builder.finish()
}

/// One side's validated preference lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceTable {
    side: Side,
    size: usize,
    entries: Vec<u32>,
}

impl PreferenceTable {
    /// Which side these preferences belong to.
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Preference list of participant `id` (1-based).
    pub fn list(&self, id: usize) -> Option<PreferenceList<'_>> {
        to_index(id, self.size).map(|index| PreferenceList {
            owner: id,
            entries: self.row(index),
        })
    }

    /// All lists in ascending participant order.
    pub fn lists(&self) -> impl Iterator<Item = PreferenceList<'_>> + '_ {
        (0..self.size).map(move |index| PreferenceList {
            owner: index + 1,
            entries: self.row(index),
        })
    }

    /// Zero-based row of participant `index`.
    #[inline]
    pub(crate) fn row(&self, index: usize) -> &[u32] {
        &self.entries[index * self.size..(index + 1) * self.size]
    }
}

/// Borrowed view of one participant's ranking, yielding 1-based ids.
#[derive(Debug, Clone, Copy)]
pub struct PreferenceList<'a> {
    owner: usize,
    entries: &'a [u32],
}

impl<'a> PreferenceList<'a> {
    /// Id of the participant holding this list.
    pub fn owner(&self) -> usize {
        self.owner
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counterpart at zero-based `rank`.
    pub fn get(&self, rank: usize) -> Option<usize> {
        self.entries.get(rank).map(|&index| to_id(index))
    }

    /// Counterparts from most to least preferred.
    pub fn iter(&self) -> impl Iterator<Item = usize> + 'a {
        self.entries.iter().map(|&index| to_id(index))
    }

    /// Zero-based rank of `counterpart` by linear scan.
    pub fn position(&self, counterpart: usize) -> Option<usize> {
        self.iter().position(|id| id == counterpart)
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

/// A validated preference instance of size `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceInstance {
    size: usize,
    hospitals: PreferenceTable,
    students: PreferenceTable,
}

impl PreferenceInstance {
    /// Validate 1-based preference lists; `n` is the number of hospital lists.
    ///
    /// ```
    /// use stable_match::PreferenceInstance;
    ///
    /// let instance = PreferenceInstance::new(
    ///     vec![vec![1, 2], vec![2, 1]],
    ///     vec![vec![1, 2], vec![2, 1]],
    /// ).unwrap();
    /// assert_eq!(instance.size(), 2);
    /// ```
    pub fn new(
        hospitals: Vec<Vec<usize>>,
        students: Vec<Vec<usize>>,
    ) -> Result<Self, PreferenceError> {
        let size = hospitals.len();
        if size > MAX_SIZE {
            return Err(PreferenceError::SizeTooLarge {
                size: i64::try_from(size).unwrap_or(i64::MAX),
            });
        }
        let widen = |row: &Vec<usize>| {
            row.iter()
                .map(|&value| i64::try_from(value).unwrap_or(i64::MAX))
                .collect::<Vec<_>>()
        };
        let hospitals = build_table(Side::Hospital, size, hospitals.iter().map(widen))?;
        let students = build_table(Side::Student, size, students.iter().map(widen))?;
        Ok(Self::from_tables(hospitals, students))
    }

    /// Validate raw, possibly malformed rows against a declared size.
    pub fn from_raw(
        size: i64,
        hospitals: &[Vec<i64>],
        students: &[Vec<i64>],
    ) -> Result<Self, PreferenceError> {
        let size = checked_size(size)?;
        let hospitals = build_table(
            Side::Hospital,
            size,
            hospitals.iter().map(|row| row.iter().copied()),
        )?;
        let students = build_table(
            Side::Student,
            size,
            students.iter().map(|row| row.iter().copied()),
        )?;
        Ok(Self::from_tables(hospitals, students))
    }

    /// The instance with `n = 0`.
    pub fn empty() -> Self {
        Self::from_tables(
            PreferenceTable {
                side: Side::Hospital,
                size: 0,
                entries: Vec::new(),
            },
            PreferenceTable {
                side: Side::Student,
                size: 0,
                entries: Vec::new(),
            },
        )
    }

    pub(crate) fn from_tables(hospitals: PreferenceTable, students: PreferenceTable) -> Self {
        debug_assert_eq!(hospitals.size, students.size);
        debug_assert_eq!(hospitals.side, Side::Hospital);
        debug_assert_eq!(students.side, Side::Student);
        Self {
            size: hospitals.size,
            hospitals,
            students,
        }
    }

    /// Number of participants on each side.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn hospitals(&self) -> &PreferenceTable {
        &self.hospitals
    }

    pub fn students(&self) -> &PreferenceTable {
        &self.students
    }

    pub fn table(&self, side: Side) -> &PreferenceTable {
        match side {
            Side::Hospital => &self.hospitals,
            Side::Student => &self.students,
        }
    }

    /// Preference list of participant `id` on `side`.
    pub fn list(&self, side: Side, id: usize) -> Option<PreferenceList<'_>> {
        self.table(side).list(id)
    }
}
