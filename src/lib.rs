//! Verified algorithmic kernels
//!
//! Three small, independent, pure kernels:
//! - pair-sum search ([`find`]): two positions whose values add up to a target,
//! - floor square root ([`isqrt`]) by binary search,
//! - zero-free splitting ([`split`]): `n = a + b` with no `0` digit in `a` or `b`.
//!
//! ## Core idea
//! 1. Each kernel is a plain function returning a [`SolveResult`].
//! 2. Each kernel also has a problem struct implementing [`Exercise`], which
//!    adds a postcondition check.
//! 3. [`Runner`] solves an instance and, when asked, re-checks the answer
//!    before handing it back; [`solve_all`](engine::solve_all) does the same
//!    for a batch.
//!
//! ## Quick start
//! ```
//! use leet_kernels::{problems::sqrt::SqrtProblem, Runner};
//!
//! assert_eq!(leet_kernels::find(&[2, 7, 11, 15], 9).unwrap(), (0, 1));
//!
//! let root = Runner::new(SqrtProblem::new(15)).run().unwrap();
//! assert_eq!(root, 3);
//! ```
//!
//! Invalid input (a sequence without a qualifying pair, a negative radicand,
//! `n == 0`) is reported as [`SolveError::InvalidInput`]; nothing panics.

pub mod builder;
pub mod engine;
pub mod error;
pub mod problems;
pub mod traits;
pub mod utils;

pub use crate::builder::RunnerBuilder;
pub use crate::engine::Runner;
pub use crate::error::{SolveError, SolveResult};
pub use crate::problems::no_zero::{split, Split};
pub use crate::problems::sqrt::isqrt;
pub use crate::problems::two_sum::find;
pub use crate::traits::Exercise;
