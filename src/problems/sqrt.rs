//! Floor square root by binary search.

use crate::error::{SolveError, SolveResult};
use crate::traits::Exercise;

const NAME: &str = "sqrt";

/// Largest `r` with `r * r <= x`.
///
/// Bisects the bracket `[1, x]`. Squares are taken in `i128`, so the whole
/// `i64` range is safe.
///
/// # Errors
/// [`SolveError::InvalidInput`] for negative `x`.
///
/// ```
/// use leet_kernels::isqrt;
///
/// assert_eq!(isqrt(8).unwrap(), 2);
/// assert_eq!(isqrt(9).unwrap(), 3);
/// ```
pub fn isqrt(x: i64) -> SolveResult<i64> {
    if x < 0 {
        return Err(SolveError::invalid(NAME, format!("negative input {x}")));
    }
    if x == 0 {
        return Ok(0);
    }

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("isqrt", x);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let target = x as i128;
    let (mut lo, mut hi) = (1i64, x);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let square = (mid as i128) * (mid as i128);
        match square.cmp(&target) {
            std::cmp::Ordering::Equal => return Ok(mid),
            std::cmp::Ordering::Less => lo = mid + 1,
            std::cmp::Ordering::Greater => hi = mid - 1,
        }
    }

    // Loop exit: hi*hi < x < lo*lo with lo == hi + 1.
    Ok(hi)
}

/// Floor square root instance for use with [`Runner`](crate::engine::Runner).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SqrtProblem {
    pub x: i64,
}

impl SqrtProblem {
    pub fn new(x: i64) -> Self {
        Self { x }
    }
}

impl Exercise for SqrtProblem {
    type Output = i64;

    fn name(&self) -> &'static str {
        NAME
    }

    fn solve(&self) -> SolveResult<Self::Output> {
        isqrt(self.x)
    }

    fn check(&self, &r: &Self::Output) -> bool {
        let (r, x) = (r as i128, self.x as i128);
        r >= 0 && r * r <= x && x < (r + 1) * (r + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        let expected = [0, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3];
        for (x, &r) in expected.iter().enumerate() {
            assert_eq!(isqrt(x as i64), Ok(r), "isqrt({x})");
        }
    }

    #[test]
    fn perfect_squares_and_their_neighbours() {
        assert_eq!(isqrt(16), Ok(4));
        assert_eq!(isqrt(15), Ok(3));
        assert_eq!(isqrt(17), Ok(4));
        assert_eq!(isqrt(2_147_395_600), Ok(46_340));
        assert_eq!(isqrt(2_147_483_647), Ok(46_340));
    }

    #[test]
    fn top_of_range() {
        assert_eq!(isqrt(i64::MAX), Ok(3_037_000_499));
        let r = 3_037_000_499i64;
        assert_eq!(isqrt(r * r), Ok(r));
        assert_eq!(isqrt(r * r - 1), Ok(r - 1));
    }

    #[test]
    fn negative_is_invalid_input() {
        let err = isqrt(-1).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(isqrt(i64::MIN).is_err());
    }

    #[test]
    fn check_rejects_wrong_roots() {
        let p = SqrtProblem::new(8);
        assert!(p.check(&2));
        assert!(!p.check(&3));
        assert!(!p.check(&1));
        assert!(!p.check(&-2));
    }
}
