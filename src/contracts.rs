//! Runtime contracts for the matching engine.
//!
//! Debug-mode assertions over the invariants the matcher relies on. These
//! contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Are independent of the verifier: they guard the engine's own
//!    bookkeeping, while `verify` re-derives correctness from the output
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function                  | Invariant                                      |
//! |------------------------------------|------------------------------------------------|
//! | `check_rank_inverse`               | `rank[p][list[p][i]] == i`                     |
//! | `check_next_choice`                | proposal pointers stay within `0..=n`          |
//! | `check_proposal_bound`             | at most `n²` proposals in total                |
//! | `check_working_matching`           | both working views describe the same pairs     |
//! | `check_bijection`                  | final matching is a permutation in both views  |
//!
//! # Usage
//!
//! ```ignore
//! use stable_match::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_bijection(&student_of, &hospital_of);
//!
//! // In release builds, this is a no-op
//! ```

use crate::preferences::PreferenceTable;
use crate::rank::RankTable;

// ============================================================================
// RANK TABLE CONTRACTS
// ============================================================================

/// Check that `ranks` is the inverse of `table`.
///
/// # Panics (debug builds only)
/// Panics if any `(participant, position)` pair disagrees.
#[inline]
pub fn check_rank_inverse(table: &PreferenceTable, ranks: &RankTable) {
    debug_assert_eq!(
        table.size(),
        ranks.size(),
        "Contract violation: rank table size {} != preference table size {}",
        ranks.size(),
        table.size()
    );

    for participant in 0..table.size() {
        for (position, &counterpart) in table.row(participant).iter().enumerate() {
            debug_assert_eq!(
                ranks.rank_at(participant, counterpart as usize) as usize,
                position,
                "Contract violation: rank[{}][{}] != {}",
                participant,
                counterpart,
                position
            );
        }
    }
}

// ============================================================================
// PROPOSAL CONTRACTS
// ============================================================================

/// Check that no proposal pointer ran past the end of its list.
#[inline]
pub fn check_next_choice(next_choice: &[u32], n: usize) {
    for (proposer, &next) in next_choice.iter().enumerate() {
        debug_assert!(
            next as usize <= n,
            "Contract violation: proposer {} pointer {} > n {}",
            proposer,
            next,
            n
        );
    }
}

/// Check the `n²` proposal bound.
///
/// Every `(proposer, receiver)` pair is attempted at most once, so the total
/// can never exceed the combined length of all proposer lists.
#[inline]
pub fn check_proposal_bound(proposals: u64, n: usize) {
    debug_assert!(
        proposals <= (n as u64) * (n as u64),
        "Contract violation: {} proposals exceed n² = {}",
        proposals,
        (n as u64) * (n as u64)
    );
}

// ============================================================================
// MATCHING CONTRACTS
// ============================================================================

/// Check that the proposer and receiver views of a working matching agree.
#[inline]
pub fn check_working_matching(by_proposer: &[Option<u32>], by_receiver: &[Option<u32>]) {
    debug_assert_eq!(
        by_proposer.len(),
        by_receiver.len(),
        "Contract violation: working matching views have different lengths"
    );

    for (proposer, partner) in by_proposer.iter().enumerate() {
        if let Some(receiver) = partner {
            debug_assert_eq!(
                by_receiver.get(*receiver as usize).copied().flatten(),
                Some(proposer as u32),
                "Contract violation: proposer {} holds receiver {} but not vice versa",
                proposer,
                receiver
            );
        }
    }
    for (receiver, partner) in by_receiver.iter().enumerate() {
        if let Some(proposer) = partner {
            debug_assert_eq!(
                by_proposer.get(*proposer as usize).copied().flatten(),
                Some(receiver as u32),
                "Contract violation: receiver {} holds proposer {} but not vice versa",
                receiver,
                proposer
            );
        }
    }
}

/// Check that a complete matching is a bijection in both directions.
#[inline]
pub fn check_bijection(student_of: &[u32], hospital_of: &[u32]) {
    debug_assert_eq!(
        student_of.len(),
        hospital_of.len(),
        "Contract violation: {} hospitals but {} students",
        student_of.len(),
        hospital_of.len()
    );

    for (hospital, &student) in student_of.iter().enumerate() {
        debug_assert_eq!(
            hospital_of.get(student as usize).copied(),
            Some(hospital as u32),
            "Contract violation: hospital {} -> student {} is not mirrored",
            hospital,
            student
        );
    }
}
