use criterion::*;

use lamport_ots::{DigestAlgorithm, LamportOts};

const MESSAGE: &[u8] = b"Kryptografia post-kwantowa 2026";

fn keygen(c: &mut Criterion) {
    let mut group = c.benchmark_group("Lamport KeyGen");
    for algorithm in DigestAlgorithm::ALL {
        let lamport = LamportOts::new(algorithm);
        group.bench_function(BenchmarkId::new("full", algorithm), |b| {
            b.iter(|| lamport.generate_keys())
        });
        group.bench_function(BenchmarkId::new("seed", algorithm), |b| {
            b.iter(|| lamport.generate_keys_with_seed())
        });
    }
    group.finish();
}

fn sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("Lamport Sign");
    for algorithm in DigestAlgorithm::ALL {
        let lamport = LamportOts::new(algorithm);
        let (private_key, _) = lamport.generate_keys();
        let (seed, _) = lamport.generate_keys_with_seed();

        group.bench_function(BenchmarkId::new("full", algorithm), |b| {
            b.iter(|| lamport.sign(black_box(MESSAGE), &private_key).unwrap())
        });
        group.bench_function(BenchmarkId::new("seed", algorithm), |b| {
            b.iter(|| {
                lamport
                    .sign_with_seed(black_box(MESSAGE), seed.as_slice())
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("Lamport Verify");
    for algorithm in DigestAlgorithm::ALL {
        let lamport = LamportOts::new(algorithm);
        let (private_key, public_key) = lamport.generate_keys();
        let signature = lamport.sign(MESSAGE, &private_key).unwrap();

        group.bench_function(BenchmarkId::from_parameter(algorithm), |b| {
            b.iter(|| lamport.verify(black_box(MESSAGE), &signature, &public_key))
        });
    }
    group.finish();
}

criterion_group!(lamport, keygen, sign, verify);
criterion_main!(lamport);
