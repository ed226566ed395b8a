//! Example: floor square root by binary search.
//!
//! Run with:
//! `cargo run --example sqrt`

use leet_kernels::isqrt;

fn main() {
    for x in [0, 1, 4, 8, 9, 15, 16, 2_147_483_647, i64::MAX] {
        match isqrt(x) {
            Ok(r) => println!("isqrt({x}) = {r}"),
            Err(err) => println!("{err}"),
        }
    }
    if let Err(err) = isqrt(-4) {
        println!("{err}");
    }
}
