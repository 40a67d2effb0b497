//! Levenshtein edit distance for typo-tolerant matching.

/// Compute the Levenshtein distance between two strings.
///
/// Returns the minimum number of single-character insertions, deletions and
/// substitutions needed to turn `a` into `b`. Strings are compared as
/// sequences of `char`s, not grapheme clusters.
///
/// Uses the full `(len(b) + 1) x (len(a) + 1)` table, so cost is
/// O(len(a) * len(b)) in both time and space. Callers only pass short UI
/// tokens (a query word and a title word), never free text.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // matrix[i][j]: cost of turning the first j chars of `a` into the first i chars of `b`
    let mut matrix = vec![vec![0usize; a.len() + 1]; b.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=b.len() {
        for j in 1..=a.len() {
            matrix[i][j] = if b[i - 1] == a[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                1 + matrix[i - 1][j - 1] // substitution
                    .min(matrix[i][j - 1]) // insertion
                    .min(matrix[i - 1][j]) // deletion
            };
        }
    }

    matrix[b.len()][a.len()]
}
