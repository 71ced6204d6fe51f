// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Proposal-based stable matching (Gale–Shapley).
//!
//! The proposing side walks its lists from the top; the receiving side keeps
//! whichever suitor it ranks higher. Free proposers wait in a FIFO queue that
//! starts in id order, which makes the run fully deterministic: the same
//! instance always yields the same matching and the same [`MatchStats`].
//!
//! Hospital-proposing (the default) yields the hospital-optimal stable
//! matching; student-proposing yields the student-optimal one. Both produce a
//! complete [`Matching`] for every valid instance, after at most `n²`
//! proposals.
//!
//! # Example
//!
//! ```
//! use stable_match::{stable_match, testing::two_by_two};
//!
//! let matching = stable_match(&two_by_two()).unwrap();
//! assert_eq!(matching.pairs().collect::<Vec<_>>(), vec![(1, 1), (2, 2)]);
//! ```

use std::collections::VecDeque;

use serde::Serialize;
use thiserror::Error;

use crate::contracts::{
    check_next_choice, check_proposal_bound, check_rank_inverse, check_working_matching,
};
use crate::matching::Matching;
use crate::preferences::{PreferenceError, PreferenceInstance, PreferenceTable};
use crate::rank::RankTable;
use crate::types::Side;

/// Why a matching could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The raw input failed preference validation.
    #[error(transparent)]
    Preference(#[from] PreferenceError),
    /// A proposer exhausted its list without being matched. Unreachable for a
    /// validated instance; reported instead of producing a partial matching.
    #[error("{side} {participant} is unmatched after exhausting its preference list")]
    Incomplete { side: Side, participant: usize },
}

/// Counters collected during one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MatchStats {
    /// Total proposals made.
    pub proposals: u64,
    /// Proposals accepted by a free receiver.
    pub accepted: u64,
    /// Proposals that replaced the receiver's current partner.
    pub displacements: u64,
    /// Proposals turned down in favour of the current partner.
    pub rejections: u64,
}

/// Gale–Shapley matcher, parameterized by the proposing side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matcher {
    proposer: Side,
}

impl Matcher {
    /// Hospital-proposing matcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose which side makes the proposals.
    pub fn proposer(mut self, side: Side) -> Self {
        self.proposer = side;
        self
    }

    pub fn proposing_side(&self) -> Side {
        self.proposer
    }

    /// Compute a stable matching.
    pub fn run(&self, instance: &PreferenceInstance) -> Result<Matching, MatchError> {
        self.run_with_stats(instance).map(|(matching, _)| matching)
    }

    /// Compute a stable matching and report proposal counters.
    pub fn run_with_stats(
        &self,
        instance: &PreferenceInstance,
    ) -> Result<(Matching, MatchStats), MatchError> {
        let mut engine = Proposals::new(
            self.proposer,
            instance.table(self.proposer),
            instance.table(self.proposer.opposite()),
        );
        while engine.step().is_some() {}
        engine.finish()
    }
}

/// Hospital-proposing stable matching of a validated instance.
pub fn stable_match(instance: &PreferenceInstance) -> Result<Matching, MatchError> {
    Matcher::new().run(instance)
}

/// Validate raw rows, then run hospital-proposing matching.
pub fn match_raw(
    size: i64,
    hospitals: &[Vec<i64>],
    students: &[Vec<i64>],
) -> Result<Matching, MatchError> {
    let instance = PreferenceInstance::from_raw(size, hospitals, students)?;
    stable_match(&instance)
}

/// What happened to one queue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Stale queue entry or exhausted list.
    Skipped,
    Accepted,
    Displaced,
    Rejected,
}

/// Working state of one run. Owned exclusively by that run.
struct Proposals<'a> {
    side: Side,
    size: usize,
    prefs: &'a PreferenceTable,
    ranks: RankTable,
    next_choice: Vec<u32>,
    by_proposer: Vec<Option<u32>>,
    by_receiver: Vec<Option<u32>>,
    free: VecDeque<u32>,
    stats: MatchStats,
}

impl<'a> Proposals<'a> {
    fn new(side: Side, prefs: &'a PreferenceTable, receivers: &PreferenceTable) -> Self {
        let size = prefs.size();
        let ranks = RankTable::new(receivers);
        check_rank_inverse(receivers, &ranks);

        Self {
            side,
            size,
            prefs,
            ranks,
            next_choice: vec![0; size],
            by_proposer: vec![None; size],
            by_receiver: vec![None; size],
            free: (0..size as u32).collect(),
            stats: MatchStats::default(),
        }
    }

    /// Process the next free proposer; `None` once the queue is empty.
    fn step(&mut self) -> Option<Outcome> {
        let proposer = self.free.pop_front()? as usize;

        // Stale entry: the proposer was re-enqueued and matched since.
        if self.by_proposer[proposer].is_some() {
            return Some(Outcome::Skipped);
        }
        let next = self.next_choice[proposer] as usize;
        if next >= self.size {
            return Some(Outcome::Skipped);
        }

        let receiver = self.prefs.row(proposer)[next];
        self.next_choice[proposer] += 1;
        self.stats.proposals += 1;

        let outcome = match self.by_receiver[receiver as usize] {
            None => {
                self.link(proposer as u32, receiver);
                self.stats.accepted += 1;
                Outcome::Accepted
            }
            Some(current) => {
                let r = receiver as usize;
                if self.ranks.rank_at(r, proposer) < self.ranks.rank_at(r, current as usize) {
                    self.by_proposer[current as usize] = None;
                    self.link(proposer as u32, receiver);
                    self.free.push_back(current);
                    self.stats.displacements += 1;
                    Outcome::Displaced
                } else {
                    self.free.push_back(proposer as u32);
                    self.stats.rejections += 1;
                    Outcome::Rejected
                }
            }
        };
        Some(outcome)
    }

    #[inline]
    fn link(&mut self, proposer: u32, receiver: u32) {
        self.by_proposer[proposer as usize] = Some(receiver);
        self.by_receiver[receiver as usize] = Some(proposer);
    }

    fn finish(self) -> Result<(Matching, MatchStats), MatchError> {
        check_next_choice(&self.next_choice, self.size);
        check_proposal_bound(self.stats.proposals, self.size);
        check_working_matching(&self.by_proposer, &self.by_receiver);

        let partners = self
            .by_proposer
            .iter()
            .enumerate()
            .map(|(proposer, partner)| {
                partner.ok_or(MatchError::Incomplete {
                    side: self.side,
                    participant: proposer + 1,
                })
            })
            .collect::<Result<Vec<u32>, _>>()?;

        let matching = match self.side {
            Side::Hospital => Matching::from_hospital_view(partners),
            Side::Student => Matching::from_student_view(partners),
        };
        Ok((matching, self.stats))
    }
}
