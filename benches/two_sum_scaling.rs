use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use leet_kernels::find;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_values(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len)
        .map(|_| rng.gen_range(-1_000_000_000..1_000_000_000))
        .collect()
}

fn bench_two_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_sum_scaling");
    for &len in &[1_000usize, 10_000, 100_000] {
        group.bench_function(format!("len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    let nums = random_values(&mut rng, len);
                    // Pair sits at the far end so the whole input is scanned.
                    let target = nums[len - 2] + nums[len - 1];
                    (nums, target)
                },
                |(nums, target)| criterion::black_box(find(&nums, target)),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_two_sum);
criterion_main!(benches);
