// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverse preference lookup.
//!
//! A [`RankTable`] answers "where does `c` sit in `p`'s list" in O(1), which is
//! what the receiving side needs on every contested proposal. It is the exact
//! inverse of a [`PreferenceTable`]: `rank[p][list[p][i]] == i`.

use crate::preferences::PreferenceTable;
use crate::types::{to_index, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    side: Side,
    size: usize,
    ranks: Vec<u32>,
}

impl RankTable {
    /// Invert every list of `table`. O(n) per participant.
    pub fn new(table: &PreferenceTable) -> Self {
        let size = table.size();
        let mut ranks = vec![0u32; size * size];
        for participant in 0..size {
            let row = &mut ranks[participant * size..(participant + 1) * size];
            for (position, &counterpart) in table.row(participant).iter().enumerate() {
                row[counterpart as usize] = position as u32;
            }
        }
        Self { side: table.side(), size, ranks }
    }

    /// Side whose preferences this table inverts.
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Zero-based rank of `counterpart` in `participant`'s list (1-based ids).
    pub fn rank(&self, participant: usize, counterpart: usize) -> Option<usize> {
        let p = to_index(participant, self.size)?;
        let c = to_index(counterpart, self.size)?;
        Some(self.rank_at(p, c) as usize)
    }

    /// Whether `participant` strictly prefers `a` over `b` (1-based ids).
    ///
    /// Lists are strict total orders, so `prefers(p, a, a)` is false and
    /// exactly one of `prefers(p, a, b)` / `prefers(p, b, a)` holds for `a != b`.
    pub fn prefers(&self, participant: usize, a: usize, b: usize) -> Option<bool> {
        Some(self.rank(participant, a)? < self.rank(participant, b)?)
    }

    #[inline]
    pub(crate) fn rank_at(&self, participant: usize, counterpart: usize) -> u32 {
        self.ranks[participant * self.size + counterpart]
    }
}
