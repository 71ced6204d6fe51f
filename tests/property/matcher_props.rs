//! Matcher properties: stability, optimality, determinism, bounds.

use proptest::prelude::*;
use stable_match::generate::random_instance;
use stable_match::{verify, ClaimedMatching, Matcher, Side, Verdict};

use crate::instance_strategy;
use crate::oracles::{oracle_blocking_pairs, oracle_optimal_for};

fn student_of(matching: &stable_match::Matching) -> Vec<usize> {
    matching.pairs().map(|(_, s)| s).collect()
}

proptest! {
    /// Property: the verifier accepts every matcher output.
    #[test]
    fn prop_matcher_output_verifies(instance in instance_strategy(12)) {
        let matching = Matcher::new().run(&instance).unwrap();
        prop_assert_eq!(matching.size(), instance.size());
        prop_assert_eq!(verify(&instance, &ClaimedMatching::from(&matching)), Verdict::Stable);
    }

    /// Property: student-proposing runs are stable too.
    #[test]
    fn prop_student_proposing_is_stable(instance in instance_strategy(12)) {
        let matching = Matcher::new().proposer(Side::Student).run(&instance).unwrap();
        prop_assert!(oracle_blocking_pairs(&instance, &student_of(&matching)).is_empty());
    }

    /// Property: hospital-proposing gives every hospital its best stable partner,
    /// and student-proposing does the same for students.
    #[test]
    fn prop_proposing_side_is_optimal(instance in instance_strategy(6)) {
        let hospital_run = Matcher::new().run(&instance).unwrap();
        prop_assert_eq!(student_of(&hospital_run), oracle_optimal_for(&instance, Side::Hospital));

        let student_run = Matcher::new().proposer(Side::Student).run(&instance).unwrap();
        prop_assert_eq!(student_of(&student_run), oracle_optimal_for(&instance, Side::Student));
    }

    /// Property: same instance, same matching, same counters.
    #[test]
    fn prop_matcher_is_deterministic(instance in instance_strategy(10)) {
        let first = Matcher::new().run_with_stats(&instance).unwrap();
        let second = Matcher::new().run_with_stats(&instance).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: between n and n² proposals, and the counters partition them.
    #[test]
    fn prop_proposal_bounds(n in 0usize..60, seed in any::<u64>()) {
        let instance = random_instance(n, seed).unwrap();
        let (matching, stats) = Matcher::new().run_with_stats(&instance).unwrap();
        let n = n as u64;
        prop_assert!(stats.proposals >= n);
        prop_assert!(stats.proposals <= n * n);
        prop_assert_eq!(stats.accepted, n);
        prop_assert_eq!(stats.proposals, stats.accepted + stats.displacements + stats.rejections);
        prop_assert!(verify(&instance, &ClaimedMatching::from(&matching)).is_stable());
    }
}
