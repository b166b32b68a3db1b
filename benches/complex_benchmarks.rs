// File: benches/complex_benchmarks.rs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use diffcomplex::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Operands {
    Finite,
    Infinite,
    ZeroDivisor,
}

impl Operands {
    pub fn name(&self) -> &'static str {
        match self {
            Operands::Finite => "finite",
            Operands::Infinite => "infinite",
            Operands::ZeroDivisor => "zero_divisor",
        }
    }

    pub fn all_types() -> Vec<Operands> {
        vec![Operands::Finite, Operands::Infinite, Operands::ZeroDivisor]
    }

    // Pairs chosen so the infinite and zero cases take the recovery paths.
    pub fn pair(&self) -> (Complex<f64>, Complex<f64>) {
        match self {
            Operands::Finite => (Complex::new(1.25, -3.5), Complex::new(0.75, 2.0)),
            Operands::Infinite => (
                Complex::new(f64::INFINITY, f64::NAN),
                Complex::new(0.75, 2.0),
            ),
            Operands::ZeroDivisor => (Complex::new(1.25, -3.5), Complex::new(0.0, 0.0)),
        }
    }
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    for operands in Operands::all_types() {
        let (lhs, rhs) = operands.pair();
        group.bench_with_input(
            BenchmarkId::new("multiply", operands.name()),
            &(lhs, rhs),
            |b, &(lhs, rhs)| b.iter(|| multiply(black_box(lhs), black_box(rhs))),
        );
        group.bench_with_input(
            BenchmarkId::new("divide", operands.name()),
            &(lhs, rhs),
            |b, &(lhs, rhs)| b.iter(|| divide(black_box(lhs), black_box(rhs))),
        );
    }
    group.finish();
}

fn bench_pullbacks(c: &mut Criterion) {
    let mut group = c.benchmark_group("pullbacks");
    let (lhs, rhs) = Operands::Finite.pair();
    let seed = Complex::new(1.0, 0.0);
    for op in Operator::all() {
        group.bench_with_input(BenchmarkId::new("vjp", op.symbol()), &op, |b, op| {
            b.iter(|| {
                let (value, pullback) = op.vjp(black_box(lhs), black_box(rhs));
                (value, pullback(black_box(seed)))
            })
        });
    }
    group.finish();
}

criterion_group!(complex_benches, bench_arithmetic, bench_pullbacks);
criterion_main!(complex_benches);
