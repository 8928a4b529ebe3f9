//! Path cost and heuristic functions
//!
//! g(n) accumulates transformation cost, h(n) estimates the remaining cost,
//! and f(n) = g(n) + h(n) orders the A* frontier.

/// Cost and heuristic functions shared by the search strategies
///
/// Implementations must be pure: the same inputs always give the same result.
pub trait CostModel: Send + Sync {
    /// Accumulated cost after taking one more step from `cost_so_far`
    fn g(&self, cost_so_far: u32) -> u32;

    /// Estimated remaining cost from `current` to `target`
    fn h(&self, current: &str, target: &str) -> u32;

    /// Total estimated cost through `current`
    fn f(&self, g: u32, current: &str, target: &str) -> u32 {
        g + self.h(current, target)
    }
}

/// Unit cost per transformation with a letter-mismatch heuristic
///
/// Each transformation fixes at most one mismatched position, so the Hamming
/// distance never overestimates and never drops by more than one per edge
/// (admissible and consistent).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HammingCost;

impl CostModel for HammingCost {
    #[inline]
    fn g(&self, cost_so_far: u32) -> u32 {
        cost_so_far + 1
    }

    #[inline]
    fn h(&self, current: &str, target: &str) -> u32 {
        hamming_distance(current, target) as u32
    }
}

/// Number of positions at which two words differ
///
/// Compares character by character; callers pass equal-length words.
///
/// # Examples
/// ```
/// use word_ladder::core::hamming_distance;
///
/// assert_eq!(hamming_distance("cold", "warm"), 4);
/// assert_eq!(hamming_distance("cat", "cot"), 1);
/// assert_eq!(hamming_distance("dog", "dog"), 0);
/// ```
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}

/// True when both words have the same length and differ in exactly one position
#[must_use]
pub fn differs_by_one(a: &str, b: &str) -> bool {
    let mut changed = 0;
    let mut left = a.chars();
    let mut right = b.chars();

    loop {
        match (left.next(), right.next()) {
            (None, None) => return changed == 1,
            (Some(x), Some(y)) => {
                if x != y {
                    changed += 1;
                    if changed > 1 {
                        return false;
                    }
                }
            }
            _ => return false,
        }
    }
}
