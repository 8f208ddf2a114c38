//! Benchmarks for characteristic polynomials, minimal polynomials and
//! Jordan forms.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cayley_eigen::{characteristic_polynomial, jordan_form, minimal_polynomial, EngineConfig};
use cayley_linalg::DenseMatrix;
use cayley_rings::rationals::Q;

/// A dense matrix with small deterministic entries.
fn dense_matrix(n: usize) -> DenseMatrix<Q> {
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| Q::from_integer(((i * 7 + j * 3) % 11) as i64 - 5))
                .collect()
        })
        .collect();
    DenseMatrix::from_rows(rows)
}

/// A single nilpotent Jordan block of size `n` shifted by 2.
fn jordan_block(n: usize) -> DenseMatrix<Q> {
    let mut m = DenseMatrix::identity(n).scale(&Q::from_integer(2));
    for i in 0..n.saturating_sub(1) {
        m[(i, i + 1)] = Q::from_integer(1);
    }
    m
}

fn bench_characteristic_polynomial(c: &mut Criterion) {
    let mut group = c.benchmark_group("charpoly");

    for size in [2, 4, 6, 8] {
        let a = dense_matrix(size);
        group.bench_with_input(BenchmarkId::new("bareiss", size), &size, |b, _| {
            b.iter(|| black_box(characteristic_polynomial(&a)))
        });
    }

    group.finish();
}

fn bench_minimal_polynomial(c: &mut Criterion) {
    let mut group = c.benchmark_group("minpoly");
    let config = EngineConfig::default();

    for size in [2, 4, 6] {
        let a = jordan_block(size);
        group.bench_with_input(BenchmarkId::new("jordan_block", size), &size, |b, _| {
            b.iter(|| black_box(minimal_polynomial(&a, &config)))
        });
    }

    group.finish();
}

fn bench_jordan_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("jordan");
    let config = EngineConfig::default();

    for size in [2, 4, 6] {
        let a = jordan_block(size);
        group.bench_with_input(BenchmarkId::new("chains", size), &size, |b, _| {
            b.iter(|| black_box(jordan_form(&a, &config)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_characteristic_polynomial,
    bench_minimal_polynomial,
    bench_jordan_form
);
criterion_main!(benches);
