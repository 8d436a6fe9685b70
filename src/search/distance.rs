//! Levenshtein edit distance
//!
//! Single-row dynamic-programming implementation; insertion, deletion, and
//! substitution each cost 1. Operates on `char`s, so the inputs are expected
//! to already be normalized.

/// Compute the Levenshtein distance between two strings.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let b_chars: Vec<char> = b.chars().collect();

    // costs[j] holds the distance between the first i chars of `a` and the
    // first j chars of `b` from the previous row, updated in place.
    let mut costs: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut prev_diagonal = costs[0];
        costs[0] = i + 1;

        for (j, &cb) in b_chars.iter().enumerate() {
            let substitution = if ca == cb {
                prev_diagonal
            } else {
                prev_diagonal + 1
            };
            prev_diagonal = costs[j + 1];
            costs[j + 1] = substitution.min(costs[j] + 1).min(prev_diagonal + 1);
        }
    }

    costs[b_chars.len()]
}
