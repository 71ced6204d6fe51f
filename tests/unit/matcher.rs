//! Matcher behaviour through the public API.

use crate::common::{claimed_from_assignment, instance, rejection_chain, REJECTION_CHAIN_MATCHING};
use stable_match::generate::{identical_instance, random_instance};
use stable_match::{stable_match, verify, ClaimedMatching, Matcher, Side, Verdict};

fn pairs(matching: &stable_match::Matching) -> Vec<(usize, usize)> {
    matching.pairs().collect()
}

#[test]
fn proposing_side_picks_its_optimal_matching() {
    // Two stable matchings: hospitals get first choices in one, students in the other.
    let prefs = instance(&[&[1, 2], &[2, 1]], &[&[2, 1], &[1, 2]]);

    let hospital_optimal = Matcher::new().run(&prefs).unwrap();
    assert_eq!(pairs(&hospital_optimal), vec![(1, 1), (2, 2)]);

    let student_optimal = Matcher::new().proposer(Side::Student).run(&prefs).unwrap();
    assert_eq!(pairs(&student_optimal), vec![(1, 2), (2, 1)]);

    for matching in [&hospital_optimal, &student_optimal] {
        assert_eq!(verify(&prefs, &ClaimedMatching::from(matching)), Verdict::Stable);
    }
}

#[test]
fn latin_square_needs_one_proposal_each() {
    let prefs = instance(
        &[&[1, 2, 3], &[2, 3, 1], &[3, 1, 2]],
        &[&[2, 3, 1], &[3, 1, 2], &[1, 2, 3]],
    );

    let (matching, stats) = Matcher::new().run_with_stats(&prefs).unwrap();
    assert_eq!(pairs(&matching), vec![(1, 1), (2, 2), (3, 3)]);
    assert_eq!(stats.proposals, 3);

    let (matching, stats) = Matcher::new()
        .proposer(Side::Student)
        .run_with_stats(&prefs)
        .unwrap();
    assert_eq!(pairs(&matching), vec![(1, 3), (2, 1), (3, 2)]);
    assert_eq!(stats.proposals, 3);
}

#[test]
fn stats_add_up() {
    let instance = random_instance(60, 21).unwrap();
    let (_, stats) = Matcher::new().run_with_stats(&instance).unwrap();
    assert_eq!(
        stats.proposals,
        stats.accepted + stats.displacements + stats.rejections
    );
    // Every receiver is accepted free exactly once.
    assert_eq!(stats.accepted, 60);
}

#[test]
fn worst_case_proposal_count() {
    let (matching, stats) = Matcher::new()
        .run_with_stats(&identical_instance(25).unwrap())
        .unwrap();
    assert_eq!(stats.proposals, 25 * 26 / 2);
    assert_eq!(
        ClaimedMatching::from(&matching),
        claimed_from_assignment(&(1..=25).collect::<Vec<_>>())
    );
}

#[test]
fn repeated_runs_agree() {
    let instance = rejection_chain();
    let first = stable_match(&instance).unwrap();
    for _ in 0..3 {
        assert_eq!(stable_match(&instance).unwrap(), first);
    }
    assert_eq!(pairs(&first), REJECTION_CHAIN_MATCHING.to_vec());
}

#[test]
fn stats_serialize() {
    let (_, stats) = Matcher::new().run_with_stats(&rejection_chain()).unwrap();
    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(json["proposals"], 6);
    assert_eq!(json["displacements"], 3);
}
