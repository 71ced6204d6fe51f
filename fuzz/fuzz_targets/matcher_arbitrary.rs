// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matcher on arbitrary raw rows.
//!
//! Raw rows go through `match_raw`, so most inputs exercise validation. The
//! ones that survive must produce a perfect matching the verifier calls
//! stable, whichever side proposes.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stable_match::{match_raw, verify, ClaimedMatching, Matcher, PreferenceInstance, Side, Verdict};

#[derive(Debug)]
struct RawInstance {
    size: i64,
    hospitals: Vec<Vec<i64>>,
    students: Vec<Vec<i64>>,
    student_proposes: bool,
}

impl<'a> Arbitrary<'a> for RawInstance {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        // Mostly well-formed permutations, so the matcher itself gets exercised.
        let size = u.int_in_range(-1..=12)?;
        let n = size.max(0) as usize;
        let mut rows = |u: &mut arbitrary::Unstructured<'a>| -> arbitrary::Result<Vec<Vec<i64>>> {
            let count = if u.ratio(1, 8)? { u.int_in_range(0..=n + 1)? } else { n };
            let mut out = Vec::with_capacity(count);
            for _ in 0..count {
                let mut row: Vec<i64> = (1..=n as i64).collect();
                for i in (1..row.len()).rev() {
                    row.swap(i, u.int_in_range(0..=i)?);
                }
                if u.ratio(1, 16)? {
                    let value = u.int_in_range(-2..=n as i64 + 2)?;
                    match row.first_mut() {
                        Some(first) => *first = value,
                        None => row.push(value),
                    }
                }
                out.push(row);
            }
            Ok(out)
        };
        let hospitals = rows(u)?;
        let students = rows(u)?;
        Ok(Self {
            size,
            hospitals,
            students,
            student_proposes: u.arbitrary()?,
        })
    }
}

fuzz_target!(|raw: RawInstance| {
    let hospital_run = match_raw(raw.size, &raw.hospitals, &raw.students);
    let Ok(instance) = PreferenceInstance::from_raw(raw.size, &raw.hospitals, &raw.students) else {
        assert!(hospital_run.is_err());
        return;
    };

    let side = if raw.student_proposes { Side::Student } else { Side::Hospital };
    let matching = Matcher::new().proposer(side).run(&instance).unwrap();
    assert_eq!(matching.size(), instance.size());
    assert_eq!(verify(&instance, &ClaimedMatching::from(&matching)), Verdict::Stable);
    assert_eq!(hospital_run.unwrap(), Matcher::new().run(&instance).unwrap());
});
