//! Hospital/residents stable matching with an independent verifier.
//!
//! Given `n` hospitals and `n` students, each ranking every member of the
//! other side, this crate computes a perfect stable matching with
//! proposal-based Gale–Shapley and, separately, checks that a claimed
//! matching is a bijection with no blocking pair.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  format.rs   │────▶│ preferences │────▶│   rank.rs    │
//! │ (parse/write │     │ (validated  │     │ (RankTable,  │
//! │  text files) │     │  instance)  │     │  O(1) lookup)│
//! └──────────────┘     └─────────────┘     └──────────────┘
//!        │                   │                    │
//!        │                   ▼                    ▼
//!        │            ┌─────────────┐     ┌──────────────┐
//!        │            │  verify/    │     │  matcher.rs  │
//!        └───────────▶│ (validity,  │     │ (Gale–Shapley│
//!                     │  stability) │     │  + stats)    │
//!                     └─────────────┘     └──────────────┘
//!                            │                    │
//!                            ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    matching.rs                      │
//! │  (Matching: only built from a proven bijection)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The matcher and the verifier never call each other. The verifier walks
//! the raw preference lists rather than the matcher's rank tables, so a bug
//! in one cannot hide a bug in the other.
//!
//! # Modules
//!
//! | Module        | Role                                              |
//! |---------------|---------------------------------------------------|
//! | `preferences` | Permutation checks, `PreferenceInstance`          |
//! | `rank`        | Inverse preference tables                         |
//! | `matcher`     | Proposal loop, parameterized by proposing side    |
//! | `matching`    | `Matching` and untrusted `ClaimedMatching`        |
//! | `verify`      | Bijection checks, blocking-pair search, `Verdict` |
//! | `format`      | Text codecs for instances and matchings           |
//! | `generate`    | Seeded random and worst-case instances            |
//! | `contracts`   | Debug-only invariant checks                       |
//!
//! # Usage
//!
//! ```
//! use stable_match::{format, verify, ClaimedMatching, Matcher, Verdict};
//!
//! let instance = format::parse_instance("2\n1 2\n2 1\n2 1\n1 2\n").unwrap();
//! let matching = Matcher::new().run(&instance).unwrap();
//! assert_eq!(matching.pairs().collect::<Vec<_>>(), vec![(1, 1), (2, 2)]);
//!
//! let verdict = verify(&instance, &ClaimedMatching::from(&matching));
//! assert_eq!(verdict, Verdict::Stable);
//! ```
//!
//! The library never logs, prints or touches the file system; the
//! `stable-match` binary does all of that.

// Module declarations
pub mod contracts;
pub mod format;
pub mod generate;
mod matcher;
mod matching;
mod preferences;
mod rank;
pub mod testing;
mod types;
mod verify;

// Re-exports for public API
pub use matcher::{match_raw, stable_match, MatchError, MatchStats, Matcher};
pub use matching::{ClaimedMatching, Matching};
pub use preferences::{PreferenceError, PreferenceInstance, PreferenceList, PreferenceTable, MAX_SIZE};
pub use rank::RankTable;
pub use types::Side;
pub use verify::{
    check_stability, validate_matching, verify, BlockingPair, InvalidReason, MatchingError,
    Verdict,
};
