//! Edit-distance-tolerant substring scoring.

/// Score of a pattern against a candidate string, in [0, 1].
///
/// 1.0 means the pattern occurs verbatim (any position); lower scores allow
/// edits, computed as `1 - d / pattern_len` where `d` is the smallest edit
/// distance between the pattern and any substring of the candidate.
/// Comparison is case-insensitive. The position of the best window does not
/// influence the score.
pub fn substring_score(pattern: &str, candidate: &str) -> f64 {
    if pattern.is_empty() {
        return 1.0;
    }
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    let candidate: Vec<char> = candidate.to_lowercase().chars().collect();

    let d = windowed_edit_distance(&pattern, &candidate);
    let len = pattern.len() as f64;
    (1.0 - d as f64 / len).max(0.0)
}

/// Case-insensitive exact substring containment, used by `=` anchors.
pub fn contains_exact(candidate: &str, anchor: &str) -> bool {
    if anchor.is_empty() {
        return true;
    }
    candidate.to_lowercase().contains(&anchor.to_lowercase())
}

/// Smallest Levenshtein distance between `pattern` and any substring of
/// `candidate` (semi-global alignment: skipping candidate prefix and suffix
/// is free).
fn windowed_edit_distance(pattern: &[char], candidate: &[char]) -> usize {
    if candidate.is_empty() {
        return pattern.len();
    }

    // prev[i] = cost of matching pattern[..i] ending anywhere so far.
    let mut prev: Vec<usize> = (0..=pattern.len()).collect();
    let mut curr = vec![0usize; pattern.len() + 1];

    let mut best = prev[pattern.len()];
    for &c in candidate {
        curr[0] = 0; // free to start a window at any candidate position
        for i in 1..=pattern.len() {
            let substitution = prev[i - 1] + usize::from(pattern[i - 1] != c);
            let deletion = prev[i] + 1;
            let insertion = curr[i - 1] + 1;
            curr[i] = substitution.min(deletion).min(insertion);
        }
        best = best.min(curr[pattern.len()]); // free to end a window here
        std::mem::swap(&mut prev, &mut curr);
    }
    best
}
