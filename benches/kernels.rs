use criterion::{black_box, criterion_group, criterion_main, Criterion};
use leet_kernels::{isqrt, split};

fn bench_isqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("isqrt");
    for &x in &[8i64, 2_147_483_647, i64::MAX] {
        group.bench_function(format!("x_{x}"), |b| b.iter(|| isqrt(black_box(x))));
    }
    group.finish();
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("no_zero_split");
    // 1010 and 100_010 force long runs of rejected candidates.
    for &n in &[1237u64, 1010, 100_010] {
        group.bench_function(format!("n_{n}"), |b| b.iter(|| split(black_box(n))));
    }
    group.finish();
}

criterion_group!(benches, bench_isqrt, bench_split);
criterion_main!(benches);
