//! Example: splitting integers into zero-free summands.
//!
//! Run with:
//! `cargo run --example no_zero`

use leet_kernels::{split, Split};

fn main() {
    for n in [1, 2, 11, 101, 1010, 1237, 10_000] {
        match split(n) {
            Ok(Split::Found { a, b }) => println!("{n} = {a} + {b}"),
            Ok(Split::Fallback { a, b }) => println!("{n}: no split found, fallback ({a}, {b})"),
            Err(err) => println!("{err}"),
        }
    }
}
