//! Palindrome fitness rule.
//!
//! Two cursors walk inward from both ends: +1 for every matching pair, -1
//! for every mismatch (an odd-length chromosome's middle gene matches
//! itself). From where the front cursor stopped, every remaining gene equal
//! to its successor costs -1.

use crate::genetics::alphabet::Gene;

/// Score a chromosome. Higher is closer to a palindrome without repeats.
pub fn score(genes: &[Gene]) -> i32 {
    let mut fitness = 0;

    let mut start = 0;
    let mut end = genes.len();
    // `end` is one past the back cursor
    while start < end {
        if genes[start] == genes[end - 1] {
            fitness += 1;
        } else {
            fitness -= 1;
        }
        start += 1;
        end -= 1;
    }

    while start + 1 < genes.len() {
        if genes[start] == genes[start + 1] {
            fitness -= 1;
        }
        start += 1;
    }

    fitness
}
