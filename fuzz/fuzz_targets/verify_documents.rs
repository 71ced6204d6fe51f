// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full text verification: instance and matching documents together.
//!
//! The verifier is the component that judges untrusted output, so it must
//! return a verdict for every input. A reported blocking pair must really
//! block.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stable_match::format::{parse_instance, verify_documents};
use stable_match::{Side, Verdict};

#[derive(Debug, Arbitrary)]
struct Documents<'a> {
    instance: &'a str,
    matching: &'a str,
}

fuzz_target!(|docs: Documents<'_>| {
    let verdict = verify_documents(docs.instance, docs.matching);

    if let Verdict::Unstable(pair) = verdict {
        let instance = parse_instance(docs.instance).expect("unstable implies a valid instance");
        let hospital_list = instance.list(Side::Hospital, pair.hospital).unwrap();
        let student_list = instance.list(Side::Student, pair.student).unwrap();
        assert!(hospital_list.position(pair.student).is_some());
        assert!(student_list.position(pair.hospital).is_some());
    }
});
