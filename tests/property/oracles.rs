//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations: every check is a direct reading
//! of its definition, with no early exits and no rank tables. Exponential
//! where enumeration is needed, so only used for small `n`.

use std::collections::HashSet;

use stable_match::{ClaimedMatching, PreferenceInstance, Side};

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

fn position(instance: &PreferenceInstance, side: Side, id: usize, other: usize) -> usize {
    instance
        .list(side, id)
        .and_then(|list| list.position(other))
        .expect("ids come from the instance")
}

/// Every blocking pair of a perfect matching, in the order the stability
/// checker scans: hospitals ascending, then each hospital's list order.
///
/// `student_of[h - 1]` is hospital `h`'s student.
pub fn oracle_blocking_pairs(
    instance: &PreferenceInstance,
    student_of: &[usize],
) -> Vec<(usize, usize)> {
    let n = instance.size();
    let mut hospital_of = vec![0; n + 1];
    for (h, &s) in student_of.iter().enumerate() {
        hospital_of[s] = h + 1;
    }

    let mut pairs = Vec::new();
    for h in 1..=n {
        let list = instance.list(Side::Hospital, h).expect("hospital exists");
        for s in list.iter() {
            let current_s = student_of[h - 1];
            let current_h = hospital_of[s];
            let hospital_wants = position(instance, Side::Hospital, h, s)
                < position(instance, Side::Hospital, h, current_s);
            let student_wants = position(instance, Side::Student, s, h)
                < position(instance, Side::Student, s, current_h);
            if hospital_wants && student_wants {
                pairs.push((h, s));
            }
        }
    }
    pairs
}

/// Is `claimed` a bijection between `[1, n]` and `[1, n]`?
pub fn oracle_is_bijection(claimed: &ClaimedMatching, n: usize) -> bool {
    let range = 1..=n as i64;
    let hospitals: HashSet<i64> = claimed.pairs().iter().map(|&(h, _)| h).collect();
    let students: HashSet<i64> = claimed.pairs().iter().map(|&(_, s)| s).collect();
    claimed.len() == n
        && hospitals.len() == n
        && students.len() == n
        && hospitals.iter().all(|h| range.contains(h))
        && students.iter().all(|s| range.contains(s))
}

/// All permutations of `[1, n]`, i.e. all perfect matchings.
pub fn all_assignments(n: usize) -> Vec<Vec<usize>> {
    fn extend(prefix: &mut Vec<usize>, used: &mut [bool], out: &mut Vec<Vec<usize>>) {
        if prefix.len() == used.len() {
            out.push(prefix.clone());
            return;
        }
        for s in 0..used.len() {
            if !used[s] {
                used[s] = true;
                prefix.push(s + 1);
                extend(prefix, used, out);
                prefix.pop();
                used[s] = false;
            }
        }
    }
    let mut out = Vec::new();
    extend(&mut Vec::with_capacity(n), &mut vec![false; n], &mut out);
    out
}

/// All stable matchings, by exhaustive enumeration.
pub fn oracle_stable_matchings(instance: &PreferenceInstance) -> Vec<Vec<usize>> {
    all_assignments(instance.size())
        .into_iter()
        .filter(|assignment| oracle_blocking_pairs(instance, assignment).is_empty())
        .collect()
}

/// The matching that gives every participant on `side` its best partner
/// across all stable matchings (`student_of` form).
pub fn oracle_optimal_for(instance: &PreferenceInstance, side: Side) -> Vec<usize> {
    let stable = oracle_stable_matchings(instance);
    let n = instance.size();
    let mut student_of = vec![0; n];
    match side {
        Side::Hospital => {
            for h in 1..=n {
                student_of[h - 1] = stable
                    .iter()
                    .map(|m| m[h - 1])
                    .min_by_key(|&s| position(instance, Side::Hospital, h, s))
                    .expect("a stable matching always exists");
            }
        }
        Side::Student => {
            for s in 1..=n {
                let h = stable
                    .iter()
                    .map(|m| m.iter().position(|&x| x == s).expect("perfect") + 1)
                    .min_by_key(|&h| position(instance, Side::Student, s, h))
                    .expect("a stable matching always exists");
                student_of[h - 1] = s;
            }
        }
    }
    student_of
}

// =============================================================================
// ORACLE SELF-CHECKS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stable_match::testing::{instance, rejection_chain};

    #[test]
    fn enumerates_factorial_assignments() {
        assert_eq!(all_assignments(0), vec![Vec::<usize>::new()]);
        assert_eq!(all_assignments(3).len(), 6);
        assert_eq!(all_assignments(5).len(), 120);
    }

    #[test]
    fn rejection_chain_has_one_stable_matching() {
        assert_eq!(oracle_stable_matchings(&rejection_chain()), vec![vec![2, 3, 1]]);
    }

    #[test]
    fn optimal_matchings_differ_by_side() {
        let prefs = instance(&[&[1, 2], &[2, 1]], &[&[2, 1], &[1, 2]]);
        assert_eq!(oracle_optimal_for(&prefs, Side::Hospital), vec![1, 2]);
        assert_eq!(oracle_optimal_for(&prefs, Side::Student), vec![2, 1]);
    }
}
