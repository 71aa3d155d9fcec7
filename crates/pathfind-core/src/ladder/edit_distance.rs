//! Case-insensitive Levenshtein distance
//!
//! Insert, delete and substitute all cost 1. Strings are compared as Unicode
//! scalar values after lowercase folding, and lengths are character counts.

/// Lowercase-fold a string into characters, with the same rule as
/// [`Dictionary`](crate::ladder::Dictionary) normalization
fn fold(s: &str) -> Vec<char> {
    s.to_lowercase().chars().collect()
}

/// Edit distance between two strings, ignoring case
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(&fold(a), &fold(b))
}

/// True iff `edit_distance(a, b) <= d`.
///
/// Rejects on the length gap before doing any table work, and answers `d <= 1`
/// with linear scans.
pub fn edit_distance_within(a: &str, b: &str, d: usize) -> bool {
    within(&fold(a), &fold(b), d)
}

/// Word ladder adjacency: `edit_distance_within(a, b, 1)`
pub fn is_adjacent(a: &str, b: &str) -> bool {
    edit_distance_within(a, b, 1)
}

fn within(a: &[char], b: &[char], d: usize) -> bool {
    let (la, lb) = (a.len(), b.len());

    if la.abs_diff(lb) > d {
        return false;
    }
    if la == 0 {
        return lb <= d;
    }
    if lb == 0 {
        return la <= d;
    }

    match d {
        0 => a == b,
        1 if la == lb => at_most_one_mismatch(a.iter(), b.iter()),
        1 => {
            let (shorter, longer) = if la < lb { (a, b) } else { (b, a) };
            one_skip_subsequence(shorter, longer)
        }
        _ => levenshtein(a, b) <= d,
    }
}

/// Positional comparison of two equal-length sequences, stopping at the
/// second mismatch.
pub(crate) fn at_most_one_mismatch<T: PartialEq>(
    a: impl IntoIterator<Item = T>,
    b: impl IntoIterator<Item = T>,
) -> bool {
    let mut mismatches = 0;
    for (x, y) in a.into_iter().zip(b) {
        if x != y {
            mismatches += 1;
            if mismatches > 1 {
                return false;
            }
        }
    }
    true
}

/// `shorter` is `longer` with exactly one character removed.
///
/// Requires `longer.len() == shorter.len() + 1`.
fn one_skip_subsequence(shorter: &[char], longer: &[char]) -> bool {
    let (mut i, mut j) = (0, 0);
    let mut skipped = false;

    while i < shorter.len() && j < longer.len() {
        if shorter[i] == longer[j] {
            i += 1;
        } else {
            if skipped {
                return false;
            }
            skipped = true;
        }
        j += 1;
    }
    true
}

/// Two-row dynamic programming table, sized by the shorter input
fn levenshtein(a: &[char], b: &[char]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let substitution = prev[j] + usize::from(lc != sc);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}
