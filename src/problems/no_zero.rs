//! Split a positive integer into two positive, zero-digit-free summands.
//!
//! Candidates `a = 1, 2, ...` are tried in order with `b = n - a`; the first
//! pair where neither summand contains a `0` digit wins. If the scan comes
//! up empty the fixed fallback `(1, n - 1)` is reported instead, tagged as
//! such so callers can tell it apart from a real answer.

use crate::error::{SolveError, SolveResult};
use crate::traits::Exercise;
use crate::utils::is_zero_free;

const NAME: &str = "no_zero";

/// Outcome of [`split`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Split {
    /// `a + b == n`, both positive and zero-digit-free, smallest such `a`.
    Found { a: u64, b: u64 },
    /// No candidate qualified; `(1, n - 1)` is returned as a placeholder.
    Fallback { a: u64, b: u64 },
}

impl Split {
    /// The two summands, regardless of how they were obtained.
    pub fn pair(&self) -> (u64, u64) {
        match *self {
            Split::Found { a, b } | Split::Fallback { a, b } => (a, b),
        }
    }

    /// True when no zero-free split was found and the placeholder was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Split::Fallback { .. })
    }
}

/// Split `n` into `a + b` with `a, b > 0` and no zero digit in either.
///
/// # Errors
/// [`SolveError::InvalidInput`] when `n == 0`.
///
/// ```
/// use leet_kernels::{split, Split};
///
/// assert_eq!(split(2).unwrap(), Split::Found { a: 1, b: 1 });
/// assert_eq!(split(11).unwrap(), Split::Found { a: 2, b: 9 });
/// ```
pub fn split(n: u64) -> SolveResult<Split> {
    if n == 0 {
        return Err(SolveError::invalid(NAME, "n must be positive"));
    }

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("no_zero_split", n);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    for a in 1..n {
        let b = n - a;
        if is_zero_free(a) && is_zero_free(b) {
            return Ok(Split::Found { a, b });
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(n, "no zero-free split, using fallback");
    Ok(Split::Fallback { a: 1, b: n - 1 })
}

/// Zero-free split instance for use with [`Runner`](crate::engine::Runner).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoZeroProblem {
    pub n: u64,
}

impl NoZeroProblem {
    pub fn new(n: u64) -> Self {
        Self { n }
    }
}

impl Exercise for NoZeroProblem {
    type Output = Split;

    fn name(&self) -> &'static str {
        NAME
    }

    fn solve(&self) -> SolveResult<Self::Output> {
        split(self.n)
    }

    fn check(&self, output: &Self::Output) -> bool {
        match *output {
            Split::Found { a, b } => {
                a > 0
                    && b > 0
                    && a.checked_add(b) == Some(self.n)
                    && is_zero_free(a)
                    && is_zero_free(b)
            }
            // The placeholder promises only its shape.
            Split::Fallback { a, b } => a == 1 && b == self.n.saturating_sub(1),
        }
    }
}
