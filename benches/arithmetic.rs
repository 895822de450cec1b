//! Benchmarks for arithmetic operations

extern crate criterion;
extern crate decimath;
extern crate oorandom;

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use decimath::{calculator, Decimal, RoundingMode, Zero};

mod common;
use common::*;

criterion_main!(
    arithmetic,
    strings,
);

criterion_group!(
    name = arithmetic;
    config = Criterion::default()
                       .sample_size(300);
    targets =
        bench_addition,
        bench_multiplication,
        bench_division,
        bench_rounding,
        bench_allocation,
);

criterion_group!(
    name = strings;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(7));
    targets =
        bench_parsing,
        bench_calculator_sum,
);


const SEED: u64 = 7238269155957952517;

fn random_pairs(decs: &[Decimal], seed: u64, count: usize) -> Vec<(&Decimal, &Decimal)> {
    let mut lhs = RandomIterator::new_with_seed(decs, seed);
    let mut rhs = RandomIterator::new_with_seed(decs, seed.rotate_left(17));
    (0..count).map(|_| (lhs.next(), rhs.next())).collect()
}

fn bench_addition(c: &mut Criterion) {
    let decs = collect_decimals(&random_decimal_strings(SEED, 500, 40));
    let pairs = random_pairs(&decs, SEED, 1000);

    c.bench_function("addition-random-pairs", |b| {
        b.iter(|| {
            for &(x, y) in pairs.iter() {
                black_box(x + y);
            }
        })
    });
}

fn bench_multiplication(c: &mut Criterion) {
    let decs = collect_decimals(&random_decimal_strings(SEED ^ 1, 500, 40));
    let pairs = random_pairs(&decs, SEED, 1000);

    c.bench_function("multiplication-random-pairs", |b| {
        b.iter(|| {
            for &(x, y) in pairs.iter() {
                black_box(x * y);
            }
        })
    });
}

fn bench_division(c: &mut Criterion) {
    let decs: Vec<Decimal> = collect_decimals(&random_decimal_strings(SEED ^ 2, 500, 30))
        .into_iter()
        .filter(|d| !d.is_zero())
        .collect();
    let pairs = random_pairs(&decs, SEED, 1000);

    for precision in [2u64, 14, 50] {
        c.bench_function(&format!("division-precision-{}", precision), |b| {
            b.iter(|| {
                for &(x, y) in pairs.iter() {
                    let _ = black_box(x.div_to_scale(y, precision));
                }
            })
        });
    }
}

fn bench_rounding(c: &mut Criterion) {
    let decs = collect_decimals(&random_decimal_strings(SEED ^ 3, 1000, 60));

    c.bench_function("round-half-even-2", |b| {
        b.iter(|| {
            for x in decs.iter() {
                black_box(x.round(2, RoundingMode::HalfEven));
            }
        })
    });
}

fn bench_allocation(c: &mut Criterion) {
    let amounts = collect_decimals(&random_decimal_strings(SEED ^ 4, 100, 20));
    let ratios: Vec<Decimal> = (1..=7).map(Decimal::from).collect();

    c.bench_function("allocate-seven-ways", |b| {
        b.iter(|| {
            for amount in amounts.iter() {
                let _ = black_box(amount.allocate(&ratios));
            }
        })
    });
}

fn bench_parsing(c: &mut Criterion) {
    let src = random_decimal_strings(SEED ^ 5, 1000, 80);

    c.bench_function("parse-decimal-strings", |b| {
        b.iter(|| {
            for s in src.iter() {
                black_box(s.parse::<Decimal>().unwrap());
            }
        })
    });
}

fn bench_calculator_sum(c: &mut Criterion) {
    let src = random_decimal_strings(SEED ^ 6, 1000, 20);

    c.bench_function("calculator-sum-1000", |b| {
        b.iter(|| black_box(calculator::sum(src.iter()).unwrap()))
    });
}
