//! Levenshtein distance calculation for spelling correction.

use std::cmp::min;

/// Lowercase both inputs and return them as character vectors, longer first.
fn folded_pair(s1: &str, s2: &str) -> (Vec<char>, Vec<char>) {
    let a: Vec<char> = s1.to_lowercase().chars().collect();
    let b: Vec<char> = s2.to_lowercase().chars().collect();
    if a.len() >= b.len() { (a, b) } else { (b, a) }
}

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character edits (insertions, deletions
/// or substitutions) required to change one word into the other. Comparison is
/// case-insensitive. Only two rows of the dynamic-programming table are kept,
/// each as wide as the shorter string.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let (long, short) = folded_pair(s1, s2);

    if short.is_empty() {
        return long.len();
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, &ca) in long.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &cb) in short.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };

            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[short.len()]
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
///
/// Returns `None` as soon as the distance is known to exceed `threshold`, which
/// makes filtering a large candidate list much cheaper than computing every
/// distance in full. Whenever the distance is within the threshold the result
/// equals [`levenshtein_distance`].
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let (long, short) = folded_pair(s1, s2);

    // Early termination if length difference exceeds threshold
    if long.len() - short.len() > threshold {
        return None;
    }

    if short.is_empty() {
        return Some(long.len());
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, &ca) in long.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut min_in_row = curr_row[0];

        for (j, &cb) in short.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };

            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );

            min_in_row = min(min_in_row, curr_row[j + 1]);
        }

        // Row minima never decrease, so the final distance is at least this.
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[short.len()];
    if distance <= threshold {
        Some(distance)
    } else {
        None
    }
}
