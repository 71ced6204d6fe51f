// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Instance parsing under adversarial text.
//!
//! A hostile instance file should produce a `PreferenceError`, never a panic
//! and never an allocation sized by an unchecked `n`. Anything that parses
//! must be a real instance: every list a permutation, and writing it back out
//! must reproduce an equal instance.

#![no_main]

use libfuzzer_sys::fuzz_target;
use stable_match::format::{parse_instance, write_instance};
use stable_match::Side;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(instance) = parse_instance(text) else {
        return;
    };

    let n = instance.size();
    for side in [Side::Hospital, Side::Student] {
        for list in instance.table(side).lists() {
            let mut ids = list.to_vec();
            ids.sort_unstable();
            assert!(ids.iter().copied().eq(1..=n), "{side} {} is not a permutation", list.owner());
        }
    }

    let mut out = Vec::new();
    write_instance(&mut out, &instance).unwrap();
    let reparsed = parse_instance(std::str::from_utf8(&out).unwrap()).unwrap();
    assert_eq!(reparsed, instance);
});
