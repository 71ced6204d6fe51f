//! Text codec behaviour on realistic files.

use crate::common::{
    claimed, instance_text, parse, rejection_chain, REJECTION_CHAIN_OUT, REJECTION_CHAIN_TEXT,
};
use stable_match::format::{
    parse_instance, parse_matching, read_instance, verify_documents, write_matching,
    MatchingFormatError,
};
use stable_match::{stable_match, InvalidReason, PreferenceError, Side, Verdict};

#[test]
fn windows_line_endings_parse() {
    let text = REJECTION_CHAIN_TEXT.replace('\n', "\r\n");
    assert_eq!(parse(&text), rejection_chain());
}

#[test]
fn extra_spacing_is_tolerated() {
    let text = "  3 \n1   2 3\n\t1 3 2\n2 1 3  \n3 2 1\n1 3 2\n2 1 3";
    assert_eq!(parse(text), rejection_chain());
}

#[test]
fn written_instance_parses_back() {
    let instance = stable_match::generate::random_instance(17, 3).unwrap();
    assert_eq!(parse(&instance_text(&instance)), instance);
}

#[test]
fn size_line_with_trailing_token_is_invalid() {
    let err = parse_instance("3 x\n").unwrap_err();
    assert_eq!(err.to_string(), "missing or invalid n ('3 x')");
}

#[test]
fn oversized_n_is_rejected_before_reading_lists() {
    let err = parse_instance("100000000\n1\n").unwrap_err();
    assert!(matches!(err, PreferenceError::SizeTooLarge { size: 100_000_000 }));
}

#[test]
fn student_defect_reported_after_valid_hospitals() {
    let text = "2\n1 2\n2 1\n1 2\n2 3\n";
    let err = parse_instance(text).unwrap_err();
    assert_eq!(
        err,
        PreferenceError::OutOfRange {
            side: Side::Student,
            participant: 2,
            value: 3
        }
    );
    assert_eq!(err.to_string(), "student 2 has out-of-range value 3");
}

#[test]
fn matching_written_in_hospital_order() {
    let matching = stable_match(&rejection_chain()).unwrap();
    let mut out = Vec::new();
    write_matching(&mut out, &matching).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), REJECTION_CHAIN_OUT);
}

#[test]
fn matching_parse_keeps_input_order_and_duplicates() {
    let parsed = parse_matching("3 1\n1 2\n3 3\n").unwrap();
    assert_eq!(parsed, claimed(&[(3, 1), (1, 2), (3, 3)]));
}

#[test]
fn malformed_matching_line_reports_line_number() {
    let err = parse_matching("1 2\n\n2 three\n").unwrap_err();
    assert_eq!(
        err,
        MatchingFormatError::MalformedLine {
            line: 3,
            content: "2 three".to_string()
        }
    );
    assert_eq!(err.to_string(), "line 3 format is incorrect: '2 three'");
}

#[test]
fn read_instance_from_reader() {
    let instance = read_instance(REJECTION_CHAIN_TEXT.as_bytes()).unwrap();
    assert_eq!(instance, rejection_chain());
}

#[test]
fn document_verdicts() {
    assert_eq!(
        verify_documents(REJECTION_CHAIN_TEXT, REJECTION_CHAIN_OUT),
        Verdict::Stable
    );

    let verdict = verify_documents(REJECTION_CHAIN_TEXT, "1 1\n2 2\n3 3\n");
    assert!(matches!(verdict, Verdict::Unstable(_)));

    let verdict = verify_documents("", REJECTION_CHAIN_OUT);
    assert_eq!(
        verdict,
        Verdict::Invalid(InvalidReason::Instance(PreferenceError::MissingSize))
    );
    assert_eq!(verdict.to_string(), "INVALID - missing or invalid n");
}
