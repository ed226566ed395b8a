//! Kernel implementations.
//!
//! Each module exposes a free function and a problem struct implementing
//! [`Exercise`](crate::traits::Exercise):
//! - [`two_sum`] : pair-sum search, [`two_sum::find`].
//! - [`sqrt`]    : floor square root, [`sqrt::isqrt`].
//! - [`no_zero`] : zero-free integer split, [`no_zero::split`].

pub mod no_zero;
pub mod sqrt;
pub mod two_sum;
