//! Core trait definition shared by every kernel.
//!
//! To run a kernel through [`Runner`](crate::engine::Runner), implement
//! [`Exercise`] for a struct that captures one instance (a sequence and a
//! target, a single integer, ...).
//!
//! The trait encodes two things:
//! - how to compute the answer, failing with
//!   [`SolveError::InvalidInput`](crate::error::SolveError) when the
//!   precondition does not hold;
//! - how to recognise a correct answer, so the runner can re-check outputs.

use std::fmt;

use crate::error::SolveResult;

/// A single, fixed instance of an algorithmic kernel.
///
/// Implementations must be pure: calling [`solve`](Exercise::solve) twice on
/// the same instance yields the same result, and nothing is shared between
/// instances. That makes every implementation safe to solve from several
/// threads at once.
pub trait Exercise {
    /// Value produced on success.
    type Output: Clone + PartialEq + fmt::Debug;

    /// Short stable identifier, used in spans and error messages.
    fn name(&self) -> &'static str;

    /// Compute the answer for this instance.
    fn solve(&self) -> SolveResult<Self::Output>;

    /// Postcondition: does `output` answer this instance correctly?
    ///
    /// Only meaningful for outputs of a successful [`solve`](Exercise::solve).
    fn check(&self, output: &Self::Output) -> bool;
}

impl<E: Exercise + ?Sized> Exercise for &E {
    type Output = E::Output;

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self) -> SolveResult<Self::Output> {
        (**self).solve()
    }

    fn check(&self, output: &Self::Output) -> bool {
        (**self).check(output)
    }
}
