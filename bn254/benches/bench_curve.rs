use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kzg10_algebra::{CurveGroup, PairingEngine};
use kzg10_bn254::{Bn254, Fr, G1, G2};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn bench_scalar_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_mul");

    let mut rng = SmallRng::seed_from_u64(42);
    let scalar: Fr = rng.random();

    group.bench_function("G1", |b| {
        b.iter(|| black_box(G1::generator()).mul_scalar(black_box(scalar)));
    });
    group.bench_function("G2", |b| {
        b.iter(|| black_box(G2::generator()).mul_scalar(black_box(scalar)));
    });

    group.finish();
}

fn bench_g1_msm(c: &mut Criterion) {
    let mut group = c.benchmark_group("G1_MSM");

    let g1 = G1::generator();
    let mut rng = SmallRng::seed_from_u64(42);

    // Commitment sizes are powers of two in practice
    for size in [1, 4, 16, 64, 256, 1024, 4096].iter() {
        let points: Vec<G1> = (0..*size).map(|_| g1.mul_scalar(rng.random())).collect();
        let scalars: Vec<Fr> = (0..*size).map(|_| rng.random()).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| G1::multi_exp(black_box(&points), black_box(&scalars)));
        });
    }

    group.finish();
}

fn bench_pairing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pairing");

    let g1 = G1::generator();
    let g2 = G2::generator();
    let mut rng = SmallRng::seed_from_u64(42);

    group.bench_function("single_pairing", |b| {
        b.iter(|| Bn254::pairing(black_box(g1), black_box(g2)));
    });

    // A single opening check is a product of two pairings
    for size in [2, 4, 8].iter() {
        let pairs: Vec<(G1, G2)> = (0..*size)
            .map(|_| (g1.mul_scalar(rng.random()), g2.mul_scalar(rng.random())))
            .collect();

        group.bench_with_input(BenchmarkId::new("multi_pairing", size), size, |b, _| {
            b.iter(|| Bn254::multi_pairing(black_box(&pairs)));
        });
    }

    group.finish();
}

criterion_group!(curve_benches, bench_scalar_mul, bench_g1_msm, bench_pairing);
criterion_main!(curve_benches);
