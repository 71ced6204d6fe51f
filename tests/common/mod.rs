//! Shared test utilities and fixtures.

#![allow(dead_code)]

use stable_match::format::{parse_instance, write_instance};
use stable_match::{ClaimedMatching, PreferenceInstance};

// Re-export canonical fixtures from stable_match::testing
pub use stable_match::testing::{
    claimed, instance, rejection_chain, two_by_two, REJECTION_CHAIN_MATCHING,
};

// ============================================================================
// TEXT FIXTURES
// ============================================================================

/// [`rejection_chain`] in the instance text format.
pub const REJECTION_CHAIN_TEXT: &str = "3\n1 2 3\n1 3 2\n2 1 3\n3 2 1\n1 3 2\n2 1 3\n";

/// Hospital-proposing result for [`REJECTION_CHAIN_TEXT`].
pub const REJECTION_CHAIN_OUT: &str = "1 2\n2 3\n3 1\n";

// ============================================================================
// HELPERS
// ============================================================================

/// Render an instance to its text form.
pub fn instance_text(instance: &PreferenceInstance) -> String {
    let mut out = Vec::new();
    write_instance(&mut out, instance).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("instance text is ASCII")
}

/// Parse text that is known to be a valid instance.
pub fn parse(text: &str) -> PreferenceInstance {
    parse_instance(text).expect("fixture must parse")
}

/// Claimed matching from 1-based `student_of` (index `h - 1` holds h's student).
pub fn claimed_from_assignment(student_of: &[usize]) -> ClaimedMatching {
    student_of
        .iter()
        .enumerate()
        .map(|(h, &s)| (h as i64 + 1, s as i64))
        .collect()
}
