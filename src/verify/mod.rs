// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: independent validity and stability checks.
//!
//! Nothing here trusts the matcher. A claimed matching goes through two
//! stages:
//!
//! 1. **Validity** ([`validate_matching`]) turns untrusted pairs into a
//!    [`Matching`](crate::Matching), which is only constructible for a
//!    bijection over `[1, n]`.
//!
//! 2. **Stability** ([`check_stability`]) searches for a blocking pair using
//!    the raw preference lists, not the matcher's rank tables.
//!
//! [`verify`] runs both and folds the outcome into a single [`Verdict`].
//! Every failure is a value; nothing in this module panics on bad input.

mod stability;
mod validity;
mod verdict;

pub use stability::{check_stability, BlockingPair};
pub use validity::{validate_matching, MatchingError};
pub use verdict::{InvalidReason, Verdict};

use crate::matching::ClaimedMatching;
use crate::preferences::PreferenceInstance;

/// Check that `claimed` is a valid, stable matching for `instance`.
///
/// ```
/// use stable_match::{stable_match, verify, ClaimedMatching, Verdict};
/// use stable_match::testing::rejection_chain;
///
/// let instance = rejection_chain();
/// let matching = stable_match(&instance).unwrap();
/// assert_eq!(verify(&instance, &ClaimedMatching::from(&matching)), Verdict::Stable);
/// ```
pub fn verify(instance: &PreferenceInstance, claimed: &ClaimedMatching) -> Verdict {
    let matching = match validate_matching(claimed, instance.size()) {
        Ok(matching) => matching,
        Err(err) => return Verdict::Invalid(err.into()),
    };
    match check_stability(instance, &matching) {
        Ok(()) => Verdict::Stable,
        Err(pair) => Verdict::Unstable(pair),
    }
}
