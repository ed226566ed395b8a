//! Example: pair-sum search.
//!
//! Run with:
//! `cargo run --example two_sum`

use leet_kernels::{problems::two_sum::TwoSumProblem, Runner};

fn main() {
    let nums = vec![2, 7, 11, 15];
    let target = 9;

    let runner = Runner::with_verify(TwoSumProblem::new(nums.clone(), target), true);
    match runner.run() {
        Ok((i, j)) => {
            println!("[{i}, {j}]");
            println!("{} + {} = {target}", nums[i], nums[j]);
        }
        Err(err) => eprintln!("{err}"),
    }

    // No pair sums to 100: reported, not panicked.
    if let Err(err) = leet_kernels::find(&nums, 100) {
        println!("target 100: {err}");
    }
}
