//! Claimed-matching validation scenarios, in the order checks are applied.

use crate::common::{claimed, rejection_chain, two_by_two};
use stable_match::{validate_matching, verify, InvalidReason, MatchingError, Verdict};

fn invalid(pairs: &[(i64, i64)]) -> MatchingError {
    match verify(&rejection_chain(), &claimed(pairs)) {
        Verdict::Invalid(InvalidReason::Matching(err)) => err,
        other => panic!("expected a matching error, got {other}"),
    }
}

#[test]
fn duplicate_hospital_beats_every_other_check() {
    let err = invalid(&[(2, 9), (2, 1)]);
    assert_eq!(err, MatchingError::DuplicateHospital { hospital: 2 });
}

#[test]
fn too_few_and_too_many_entries() {
    assert_eq!(
        invalid(&[(1, 1), (2, 2)]),
        MatchingError::WrongCardinality {
            expected: 3,
            found: 2
        }
    );
    assert_eq!(
        invalid(&[(1, 1), (2, 2), (3, 3), (4, 1)]),
        MatchingError::WrongCardinality {
            expected: 3,
            found: 4
        }
    );
}

#[test]
fn smallest_out_of_range_hospital_is_reported() {
    // Hospital ids 0 and 5 are both out of range; 0 sorts first.
    assert_eq!(
        invalid(&[(5, 1), (0, 2), (1, 3)]),
        MatchingError::HospitalOutOfRange { hospital: 0 }
    );
}

#[test]
fn student_zero_is_out_of_range() {
    assert_eq!(
        invalid(&[(1, 1), (2, 0), (3, 3)]),
        MatchingError::StudentOutOfRange {
            hospital: 2,
            student: 0
        }
    );
}

#[test]
fn repeated_student() {
    let err = invalid(&[(1, 3), (2, 1), (3, 3)]);
    assert_eq!(
        err,
        MatchingError::DuplicateStudent {
            student: 3,
            first: 1,
            second: 3
        }
    );
    assert_eq!(err.to_string(), "student 3 is matched more than once");
}

#[test]
fn validated_matching_exposes_both_directions() {
    let matching = validate_matching(&claimed(&[(2, 1), (1, 2)]), 2).unwrap();
    assert_eq!(matching.student_for(1), Some(2));
    assert_eq!(matching.hospital_for(1), Some(2));
    assert_eq!(matching.student_for(3), None);
}

#[test]
fn invalid_verdict_text() {
    let verdict = verify(&two_by_two(), &claimed(&[(1, 1)]));
    assert_eq!(
        verdict.to_string(),
        "INVALID - not all hospitals are matched (expected 2, found 1)"
    );
}
