//! Criterion benchmarks for the Monte Carlo pricing engine.
//!
//! Benchmarks cover:
//! - Normal draw generation (single vs batch)
//! - European call/put pricing with varying simulation counts
//! - Serial vs parallel terminal-price transform
//! - Histogram binning and closed-form reference prices

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_pricing::analytical::black_scholes;
use pricer_pricing::mc::{MonteCarloPricer, PricingParameters};
use pricer_pricing::rng::{NormalSource, PricerRng};
use pricer_pricing::stats::Histogram;

fn params(n: usize) -> PricingParameters {
    PricingParameters::new(100.0, 105.0, 0.05, 0.2, 1.0, n).unwrap()
}

/// Benchmark RNG generation (foundation for MC simulations).
fn bench_rng_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("normal_samples", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = PricerRng::from_seed(42);
                b.iter(|| {
                    let mut sum = 0.0;
                    for _ in 0..n {
                        sum += rng.gen_normal();
                    }
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("normal_batch", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = PricerRng::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_normal(&mut buffer).unwrap();
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark a full pricing run with varying simulation counts.
fn bench_mc_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("mc_pricing");
    group.sample_size(30);

    let pricer = MonteCarloPricer::new();
    for n in [1_000, 10_000, 100_000, 1_000_000] {
        let params = params(n);
        group.bench_with_input(BenchmarkId::new("european", n), &params, |b, params| {
            let mut rng = PricerRng::from_seed(42);
            b.iter(|| pricer.price(black_box(params), &mut rng).unwrap())
        });
    }

    group.finish();
}

/// Serial transform (threshold above n) vs parallel transform.
fn bench_parallel_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_threshold");
    group.sample_size(30);

    let params = params(1_000_000);
    let serial = MonteCarloPricer::new().with_parallel_threshold(usize::MAX);
    let parallel = MonteCarloPricer::new().with_parallel_threshold(0);

    group.bench_function("serial", |b| {
        let mut rng = PricerRng::from_seed(7);
        b.iter(|| serial.price(black_box(&params), &mut rng).unwrap())
    });
    group.bench_function("parallel", |b| {
        let mut rng = PricerRng::from_seed(7);
        b.iter(|| parallel.price(black_box(&params), &mut rng).unwrap())
    });

    group.finish();
}

fn bench_histogram(c: &mut Criterion) {
    let (sample, _) = MonteCarloPricer::new()
        .price(&params(100_000), &mut PricerRng::from_seed(1))
        .unwrap();

    c.bench_function("histogram_50_bins", |b| {
        b.iter(|| Histogram::from_samples(black_box(sample.as_slice()), 50).unwrap())
    });
    c.bench_function("black_scholes_reference", |b| {
        let params = params(1);
        b.iter(|| black_scholes(black_box(&params)))
    });
}

criterion_group!(
    benches,
    bench_rng_generation,
    bench_mc_pricing,
    bench_parallel_threshold,
    bench_histogram
);
criterion_main!(benches);
