// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Instance generators for benchmarks and tests.
//!
//! Generated rows still go through the table builder, so a generated instance
//! is validated exactly like a parsed one.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::preferences::{PreferenceError, PreferenceInstance, TableBuilder, MAX_SIZE};
use crate::types::Side;

fn check_size(n: usize) -> Result<(), PreferenceError> {
    if n > MAX_SIZE {
        return Err(PreferenceError::SizeTooLarge {
            size: i64::try_from(n).unwrap_or(i64::MAX),
        });
    }
    Ok(())
}

/// Every list an independent uniform shuffle of `[1, n]`.
///
/// The same `(n, seed)` always yields the same instance.
///
/// ```
/// use stable_match::generate::random_instance;
///
/// let a = random_instance(50, 7).unwrap();
/// let b = random_instance(50, 7).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn random_instance(n: usize, seed: u64) -> Result<PreferenceInstance, PreferenceError> {
    check_size(n)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut row: Vec<i64> = (1..=n as i64).collect();

    let mut tables = [Side::Hospital, Side::Student].map(|side| TableBuilder::new(side, n));
    for builder in &mut tables {
        for _ in 0..n {
            row.shuffle(&mut rng);
            builder.push_row(row.iter().copied())?;
        }
    }
    let [hospitals, students] = tables;
    Ok(PreferenceInstance::from_tables(
        hospitals.finish()?,
        students.finish()?,
    ))
}

/// Everyone ranks the other side in id order.
///
/// Hospital-proposing runs on this instance are the slowest possible:
/// hospital `h` is rejected by every student below `h`, for `n(n+1)/2`
/// proposals in total, and the result is the identity matching.
pub fn identical_instance(n: usize) -> Result<PreferenceInstance, PreferenceError> {
    check_size(n)?;
    let row: Vec<i64> = (1..=n as i64).collect();
    let mut hospitals = TableBuilder::new(Side::Hospital, n);
    let mut students = TableBuilder::new(Side::Student, n);
    for _ in 0..n {
        hospitals.push_row(row.iter().copied())?;
        students.push_row(row.iter().copied())?;
    }
    Ok(PreferenceInstance::from_tables(
        hospitals.finish()?,
        students.finish()?,
    ))
}
