//! Matcher and presenter benchmarks.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `match/tier` | `find_match` cost for each tier, including a miss |
//! | `match/input_len` | Miss cost as input length grows |
//! | `sample` | Sampling without replacement from growing pools |
//! | `present` | Full submit + re-sample through the presenter |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench matcher_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fmv_core::{find_match, sample_without_replacement, Catalog, Presentation, Presenter};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

fn tier_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("match/tier");
    for (name, input) in [
        ("exact", "anxious"),
        ("contains", "i have been feeling overwhelmed at work"),
        ("synonym", "a little stressed about tomorrow"),
        ("miss", "nothing in particular"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| find_match(black_box(input)))
        });
    }
    group.finish();
}

fn input_len_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("match/input_len");
    for len in [16usize, 256, 4096] {
        let input = "x".repeat(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
            b.iter(|| find_match(black_box(input)))
        });
    }
    group.finish();
}

fn sample_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    let mut rng = StdRng::seed_from_u64(0);
    for pool_len in [2usize, 100, 10_000] {
        let pool: Vec<u32> = (0..pool_len as u32).collect();
        group.bench_with_input(BenchmarkId::from_parameter(pool_len), &pool, |b, pool| {
            b.iter(|| sample_without_replacement(black_box(pool), 3, &mut rng))
        });
    }
    group.finish();
}

fn present_bench(c: &mut Criterion) {
    let mut presenter = Presenter::with_rng(Catalog::builtin(), StdRng::seed_from_u64(1));
    let mut shown: Option<Presentation> = None;
    c.bench_function("present/submit_then_more", |b| {
        b.iter(|| {
            presenter.submit(black_box("feeling sad"), &mut shown);
            presenter.request_more(&mut shown)
        })
    });
}

criterion_group!(benches, tier_bench, input_len_bench, sample_bench, present_bench);
criterion_main!(benches);
