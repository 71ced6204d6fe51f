//! Verifier properties, differential against the oracles.

use proptest::prelude::*;
use stable_match::format::{parse_instance, parse_matching, verify_documents, write_matching};
use stable_match::{verify, BlockingPair, ClaimedMatching, Verdict};

use crate::common::{claimed_from_assignment, instance_text};
use crate::oracles::{oracle_blocking_pairs, oracle_is_bijection};
use crate::{instance_strategy, instance_with_assignment};

proptest! {
    /// Property: on perfect matchings, the verdict agrees with the oracle and
    /// the reported pair is the first one in scan order.
    #[test]
    fn prop_stability_matches_oracle((instance, assignment) in instance_with_assignment(6)) {
        let verdict = verify(&instance, &claimed_from_assignment(&assignment));
        let expected = oracle_blocking_pairs(&instance, &assignment);
        match expected.first() {
            None => prop_assert_eq!(verdict, Verdict::Stable),
            Some(&(hospital, student)) => {
                prop_assert_eq!(verdict, Verdict::Unstable(BlockingPair { hospital, student }));
            }
        }
    }

    /// Property: arbitrary pairs are rejected exactly when they are not a bijection.
    #[test]
    fn prop_validity_matches_oracle(
        instance in instance_strategy(5),
        pairs in prop::collection::vec((-1i64..7, -1i64..7), 0..8),
    ) {
        let claimed: ClaimedMatching = pairs.into_iter().collect();
        let verdict = verify(&instance, &claimed);
        prop_assert_eq!(verdict.is_valid(), oracle_is_bijection(&claimed, instance.size()));
    }

    /// Property: verification of arbitrary text never panics.
    #[test]
    fn prop_verify_documents_total(instance_src in ".{0,64}", matching_src in ".{0,64}") {
        let _ = verify_documents(&instance_src, &matching_src);
    }

    /// Property: digit-heavy text exercises the size and row checks without panicking.
    #[test]
    fn prop_numeric_text_total(text in "[0-9 \n-]{0,80}") {
        let verdict = verify_documents(&text, &text);
        if verdict.is_stable() {
            prop_assert!(parse_instance(&text).is_ok());
        }
    }

    /// Property: instances survive write then parse.
    #[test]
    fn prop_instance_text_round_trip(instance in instance_strategy(8)) {
        prop_assert_eq!(parse_instance(&instance_text(&instance)).unwrap(), instance);
    }

    /// Property: a written matching reads back as the same claimed pairs.
    #[test]
    fn prop_matching_text_round_trip(instance in instance_strategy(8)) {
        let matching = stable_match::stable_match(&instance).unwrap();
        let mut out = Vec::new();
        write_matching(&mut out, &matching).unwrap();
        let parsed = parse_matching(std::str::from_utf8(&out).unwrap()).unwrap();
        prop_assert_eq!(parsed, ClaimedMatching::from(&matching));
    }
}
