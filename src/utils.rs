//! Decimal digit helper.

/// Returns true if the decimal representation of `n` has no `0` digit.
///
/// Digits are peeled off least-significant first; the first zero rejects.
/// `0` itself has no digits to peel and is reported as zero-free.
#[inline]
pub fn is_zero_free(mut n: u64) -> bool {
    while n > 0 {
        if n % 10 == 0 {
            return false;
        }
        n /= 10;
    }
    true
}
