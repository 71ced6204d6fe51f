// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the stable-match proposal loop.
//!
//! This standalone crate restates the matcher's core over fixed-size arrays
//! (zero-based ids, `n <= MAX_N`) and proves, for every instance of that
//! size, the properties the main crate only tests.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Rank inversion**: `rank[p][list[p][i]] == i` for every permutation table
//! 2. **Termination bound**: at most `n²` proposals
//! 3. **Perfect**: every hospital ends matched, no student twice
//! 4. **Stable**: the result has no blocking pair

/// Largest instance explored by the proofs.
pub const MAX_N: usize = 3;

pub type Table = [[u8; MAX_N]; MAX_N];

// ============================================================================
// PURE ALGORITHMS (mirrors src/rank.rs and src/matcher.rs)
// ============================================================================

/// Is `row[..n]` a permutation of `0..n`?
pub fn is_permutation(row: &[u8; MAX_N], n: usize) -> bool {
    let mut seen = [false; MAX_N];
    for &value in &row[..n] {
        let value = value as usize;
        if value >= n || seen[value] {
            return false;
        }
        seen[value] = true;
    }
    true
}

pub fn is_valid_table(table: &Table, n: usize) -> bool {
    table[..n].iter().all(|row| is_permutation(row, n))
}

/// `rank[p][c]` = position of `c` in `p`'s list.
pub fn invert(table: &Table, n: usize) -> Table {
    let mut rank = [[0u8; MAX_N]; MAX_N];
    for p in 0..n {
        for (i, &c) in table[p][..n].iter().enumerate() {
            rank[p][c as usize] = i as u8;
        }
    }
    rank
}

/// Hospital-proposing Gale–Shapley. Returns `(student_of, proposals)`.
///
/// A slot holds `u8::MAX` while unmatched.
pub fn propose(hospitals: &Table, students: &Table, n: usize) -> ([u8; MAX_N], usize) {
    const FREE: u8 = u8::MAX;
    let student_rank = invert(students, n);

    let mut next = [0usize; MAX_N];
    let mut student_of = [FREE; MAX_N];
    let mut hospital_of = [FREE; MAX_N];
    let mut queue = [0u8; MAX_N * MAX_N + MAX_N];
    let (mut head, mut tail) = (0, 0);
    for h in 0..n {
        queue[tail] = h as u8;
        tail += 1;
    }

    let mut proposals = 0;
    while head < tail {
        let h = queue[head] as usize;
        head += 1;
        if student_of[h] != FREE || next[h] >= n {
            continue;
        }
        let s = hospitals[h][next[h]] as usize;
        next[h] += 1;
        proposals += 1;

        let current = hospital_of[s];
        if current == FREE {
            student_of[h] = s as u8;
            hospital_of[s] = h as u8;
        } else if student_rank[s][h] < student_rank[s][current as usize] {
            student_of[current as usize] = FREE;
            student_of[h] = s as u8;
            hospital_of[s] = h as u8;
            queue[tail] = current;
            tail += 1;
        } else {
            queue[tail] = h as u8;
            tail += 1;
        }
    }
    (student_of, proposals)
}

/// Does some pair prefer each other to their partners?
pub fn has_blocking_pair(hospitals: &Table, students: &Table, student_of: &[u8; MAX_N], n: usize) -> bool {
    let hospital_rank = invert(hospitals, n);
    let student_rank = invert(students, n);
    let mut hospital_of = [0u8; MAX_N];
    for h in 0..n {
        hospital_of[student_of[h] as usize] = h as u8;
    }
    for h in 0..n {
        for s in 0..n {
            let hospital_wants = hospital_rank[h][s] < hospital_rank[h][student_of[h] as usize];
            let student_wants = student_rank[s][h] < student_rank[s][hospital_of[s] as usize];
            if hospital_wants && student_wants {
                return true;
            }
        }
    }
    false
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_table(n: usize) -> Table {
        let table: Table = kani::any();
        kani::assume(is_valid_table(&table, n));
        table
    }

    fn any_size() -> usize {
        let n: usize = kani::any();
        kani::assume(n <= MAX_N);
        n
    }

    /// Verify the rank table inverts every valid preference table.
    #[kani::proof]
    #[kani::unwind(4)]
    fn verify_rank_inverse() {
        let n = any_size();
        let table = any_table(n);
        let rank = invert(&table, n);
        for p in 0..n {
            for i in 0..n {
                kani::assert(
                    rank[p][table[p][i] as usize] as usize == i,
                    "rank must invert the preference list",
                );
            }
        }
    }

    /// Verify the proposal loop yields a perfect, stable matching within n² proposals.
    #[kani::proof]
    #[kani::unwind(13)] // queue holds at most n² + n entries
    fn verify_proposals_stable() {
        let n = any_size();
        let hospitals = any_table(n);
        let students = any_table(n);

        let (student_of, proposals) = propose(&hospitals, &students, n);

        kani::assert(proposals <= n * n, "at most n² proposals");
        kani::assert(
            is_permutation(&student_of, n),
            "every hospital matched to a distinct student",
        );
        kani::assert(
            !has_blocking_pair(&hospitals, &students, &student_of, n),
            "result must be stable",
        );
    }

    /// Verify an empty instance needs no proposals.
    #[kani::proof]
    fn verify_empty_instance() {
        let table = [[0u8; MAX_N]; MAX_N];
        let (_, proposals) = propose(&table, &table, 0);
        kani::assert(proposals == 0, "n = 0 makes no proposals");
    }
}
