//! Benchmarks comparing BigRatio vs num-bigint/num-rational
//!
//! Run with: cargo bench --bench ratio_benchmarks
//!
//! BigRatio reduces with a plain Euclidean GCD on every operation; these
//! benchmarks keep an eye on what that costs against num-rational, and on the
//! conversions num-rational has no counterpart for.

use big_ratio::{BigRatio, RoundMode};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;

// ============================================================================
// BASIC OPERATIONS BENCHMARKS
// ============================================================================

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    let test_cases = vec![
        ("small", (6i64, 8i64)),
        ("medium", (123456i64, -789012i64)),
        ("coprime", (999983i64, 999979i64)), // Two large primes
    ];

    for (name, (n, d)) in test_cases {
        group.bench_with_input(BenchmarkId::new("BigRatio", name), &(n, d), |b, &(n, d)| {
            b.iter(|| {
                let r = BigRatio::from_i64(black_box(n), black_box(d)).unwrap();
                black_box(r);
            })
        });

        group.bench_with_input(
            BenchmarkId::new("num-rational", name),
            &(n, d),
            |b, &(n, d)| {
                b.iter(|| {
                    let r =
                        BigRational::new(black_box(BigInt::from(n)), black_box(BigInt::from(d)));
                    black_box(r);
                })
            },
        );
    }

    group.finish();
}

fn bench_from_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_f64");

    let test_cases = vec![
        ("small", 0.5),
        ("medium", 0.22314355131420976),
        ("tiny", 0.00001),
        ("subnormal", 5e-324),
    ];

    for (name, value) in test_cases {
        group.bench_with_input(BenchmarkId::new("BigRatio", name), &value, |b, &val| {
            b.iter(|| {
                let r = BigRatio::from_f64(black_box(val)).unwrap();
                black_box(r);
            })
        });

        group.bench_with_input(BenchmarkId::new("num-rational", name), &value, |b, &val| {
            b.iter(|| {
                let r = BigRational::from_float(black_box(val)).unwrap();
                black_box(r);
            })
        });
    }

    group.finish();
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let test_cases = vec![
        ("small", (2i64, 3i64), (7i64, 8i64)),
        ("large", (999999i64, 1000000i64), (999998i64, 1000001i64)),
    ];

    for (name, (n1, d1), (n2, d2)) in test_cases {
        let pair = (BigRatio::from_i64(n1, d1).unwrap(), BigRatio::from_i64(n2, d2).unwrap());

        group.bench_with_input(BenchmarkId::new("BigRatio_add", name), &pair, |b, (r1, r2)| {
            b.iter(|| black_box(r1.add(black_box(r2))))
        });
        group.bench_with_input(BenchmarkId::new("BigRatio_mul", name), &pair, |b, (r1, r2)| {
            b.iter(|| black_box(r1.mul(black_box(r2))))
        });
        group.bench_with_input(BenchmarkId::new("BigRatio_div", name), &pair, |b, (r1, r2)| {
            b.iter(|| black_box(r1.div(black_box(r2)).unwrap()))
        });

        let num_pair = (
            BigRational::new(BigInt::from(n1), BigInt::from(d1)),
            BigRational::new(BigInt::from(n2), BigInt::from(d2)),
        );

        group.bench_with_input(
            BenchmarkId::new("num-rational_add", name),
            &num_pair,
            |b, (r1, r2)| b.iter(|| black_box(r1 + black_box(r2))),
        );
        group.bench_with_input(
            BenchmarkId::new("num-rational_mul", name),
            &num_pair,
            |b, (r1, r2)| b.iter(|| black_box(r1 * black_box(r2))),
        );
        group.bench_with_input(
            BenchmarkId::new("num-rational_div", name),
            &num_pair,
            |b, (r1, r2)| b.iter(|| black_box(r1 / black_box(r2))),
        );
    }

    group.finish();
}

fn bench_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");

    let test_cases = vec![
        ("similar", (1i64, 2i64), (1i64, 3i64)),
        ("large_diff", (1i64, 1000000i64), (999999i64, 1000000i64)),
    ];

    for (name, (n1, d1), (n2, d2)) in test_cases {
        let pair = (BigRatio::from_i64(n1, d1).unwrap(), BigRatio::from_i64(n2, d2).unwrap());

        group.bench_with_input(BenchmarkId::new("BigRatio", name), &pair, |b, (r1, r2)| {
            b.iter(|| black_box(r1.gt(black_box(r2))))
        });

        let num_pair = (
            BigRational::new(BigInt::from(n1), BigInt::from(d1)),
            BigRational::new(BigInt::from(n2), BigInt::from(d2)),
        );

        group.bench_with_input(
            BenchmarkId::new("num-rational_gt", name),
            &num_pair,
            |b, (r1, r2)| b.iter(|| black_box(r1 > black_box(r2))),
        );
    }

    group.finish();
}

// ============================================================================
// CONVERSIONS
// ============================================================================

fn bench_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("round");
    let value = BigRatio::from_f64(-0.22314355131420976).unwrap();

    for decimals in [2u32, 18] {
        let denom = BigUint::from(10u32).pow(decimals);
        group.bench_with_input(
            BenchmarkId::new("down", decimals),
            &denom,
            |b, denom| b.iter(|| black_box(value.round(black_box(denom), RoundMode::Down).unwrap())),
        );
        group.bench_with_input(
            BenchmarkId::new("up", decimals),
            &denom,
            |b, denom| b.iter(|| black_box(value.round(black_box(denom), RoundMode::Up).unwrap())),
        );
    }

    group.finish();
}

fn bench_decimal_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_strings");
    let value = BigRatio::from_i64(-22, 7).unwrap();

    for decimals in [4u32, 18, 60] {
        group.bench_with_input(BenchmarkId::new("render", decimals), &decimals, |b, &d| {
            b.iter(|| black_box(value.to_decimal_string(black_box(d))))
        });

        let rendered = value.to_decimal_string(decimals);
        group.bench_with_input(BenchmarkId::new("parse", decimals), &rendered, |b, s| {
            b.iter(|| black_box(BigRatio::parse_decimal_str(black_box(s)).unwrap()))
        });
    }

    group.finish();
}

// ============================================================================
// REPEATED OPERATIONS (Real-world workload)
// ============================================================================

/// Compound 0.01% daily interest over a year on 10^18 base units.
fn bench_compounding(c: &mut Criterion) {
    let mut group = c.benchmark_group("compounding");
    let rate = BigRatio::from_i64(10001, 10000).unwrap();

    group.bench_function("BigRatio_loop", |b| {
        b.iter(|| {
            let mut balance = BigRatio::one_e18();
            for _ in 0..black_box(365) {
                balance = balance.mul(&rate);
            }
            black_box(balance.to_bigint_with_decimals(0))
        })
    });

    group.bench_function("BigRatio_pow", |b| {
        b.iter(|| {
            let factor = rate.pow(&BigInt::from(black_box(365))).unwrap();
            black_box(BigRatio::one_e18().mul(&factor).to_bigint_with_decimals(0))
        })
    });

    group.finish();
}

// ============================================================================
// BENCHMARK GROUPS
// ============================================================================

criterion_group!(
    basic_ops,
    bench_construction,
    bench_from_f64,
    bench_arithmetic,
    bench_comparison
);

criterion_group!(conversions, bench_round, bench_decimal_strings);

criterion_group!(real_world, bench_compounding);

criterion_main!(basic_ops, conversions, real_world);
