//! Pair-sum search: find two positions whose values add up to a target.
//!
//! The answer is the pair a quadratic scan over `(i, j)`, `i < j`, ascending
//! in `i` then `j`, would report first. Instead of scanning every pair we
//! index positions by value once and then, for each `i`, look up the first
//! position after `i` holding the complement `target - nums[i]`. The result
//! is identical to the quadratic scan even when several pairs qualify.

use std::collections::HashMap;

use crate::error::{SolveError, SolveResult};
use crate::traits::Exercise;

const NAME: &str = "two_sum";

/// Return `(i, j)` with `i < j` and `nums[i] + nums[j] == target`.
///
/// Among all qualifying pairs the one with the smallest `i`, then the
/// smallest `j`, is returned.
///
/// # Errors
/// [`SolveError::InvalidInput`] if `nums` has fewer than two values or no
/// pair sums to `target`.
///
/// ```
/// assert_eq!(leet_kernels::find(&[2, 7, 11, 15], 9).unwrap(), (0, 1));
/// ```
pub fn find(nums: &[i64], target: i64) -> SolveResult<(usize, usize)> {
    if nums.len() < 2 {
        return Err(SolveError::invalid(
            NAME,
            format!("need at least two values, got {}", nums.len()),
        ));
    }

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("two_sum_find", len = nums.len(), target);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    // Positions are pushed in ascending order, so every list is sorted.
    let mut positions: HashMap<i64, Vec<usize>> = HashMap::with_capacity(nums.len());
    for (idx, &value) in nums.iter().enumerate() {
        positions.entry(value).or_default().push(idx);
    }

    for (i, &value) in nums.iter().enumerate() {
        // An overflowing complement is outside i64 and cannot be present.
        let Some(complement) = target.checked_sub(value) else {
            continue;
        };
        let Some(candidates) = positions.get(&complement) else {
            continue;
        };
        let after = candidates.partition_point(|&p| p <= i);
        if let Some(&j) = candidates.get(after) {
            #[cfg(feature = "tracing")]
            tracing::debug!(i, j, "pair found");
            return Ok((i, j));
        }
    }

    Err(SolveError::invalid(NAME, "no two sum solution"))
}

/// Pair-sum instance for use with [`Runner`](crate::engine::Runner).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwoSumProblem {
    pub nums: Vec<i64>,
    pub target: i64,
}

impl TwoSumProblem {
    pub fn new(nums: impl Into<Vec<i64>>, target: i64) -> Self {
        Self {
            nums: nums.into(),
            target,
        }
    }
}

impl Exercise for TwoSumProblem {
    type Output = (usize, usize);

    fn name(&self) -> &'static str {
        NAME
    }

    fn solve(&self) -> SolveResult<Self::Output> {
        find(&self.nums, self.target)
    }

    fn check(&self, &(i, j): &Self::Output) -> bool {
        i < j
            && j < self.nums.len()
            && (self.nums[i] as i128) + (self.nums[j] as i128) == self.target as i128
    }
}
