/// Levenshtein distance with a cutoff: returns `cutoff + 1` as soon as the
/// distance provably exceeds `cutoff`, skipping the rest of the matrix. Rows
/// whose running minimum passes the cutoff abort the computation early.
pub fn levenshtein_within(a: &str, b: &str, cutoff: usize) -> usize {
    if a == b {
        return 0;
    }
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.len().abs_diff(b_chars.len()) > cutoff {
        return cutoff + 1;
    }

    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, char_a) in a_chars.iter().enumerate() {
        let mut current = Vec::with_capacity(b_chars.len() + 1);
        current.push(i + 1);
        let mut row_min = i + 1;
        for (j, char_b) in b_chars.iter().enumerate() {
            let insertions = current[j] + 1;
            let deletions = previous[j + 1] + 1;
            let substitutions = previous[j] + usize::from(char_a != char_b);
            let cost = insertions.min(deletions).min(substitutions);
            current.push(cost);
            row_min = row_min.min(cost);
        }
        if row_min > cutoff {
            return cutoff + 1;
        }
        previous = current;
    }

    previous[b_chars.len()]
}
