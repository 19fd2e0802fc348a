use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use karatsuba::{schoolbook_mul, BigInt, KaratsubaConfig};
use rand::{Rng, SeedableRng};

fn random_bigint(rng: &mut rand_chacha::ChaCha8Rng, size: usize) -> BigInt {
    let mut digits = vec![0; size];
    for x in digits.iter_mut() {
        *x = rng.gen();
    }
    let negative = rng.gen();
    BigInt::from_digits(digits, negative)
}

fn bench_schoolbook_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_bigint(&mut rng, 1000);
    let b = random_bigint(&mut rng, 1000);
    c.bench_function("schoolbook_mul_1k", |bench| {
        bench.iter(|| schoolbook_mul(&a, &b))
    });
}

fn bench_karatsuba_cutoffs(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_bigint(&mut rng, 1000);
    let b = random_bigint(&mut rng, 1000);
    let mut group = c.benchmark_group("karatsuba_mul_1k");
    for &cutoff in &[1usize, 8, 32, 64] {
        let config = KaratsubaConfig::new().with_cutoff(cutoff).sequential();
        group.bench_with_input(BenchmarkId::new("cutoff", cutoff), &config, |bench, config| {
            bench.iter(|| config.multiply(&a, &b))
        });
    }
    group.finish();
}

fn bench_karatsuba_mul_10k(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_bigint(&mut rng, 10000);
    let b = random_bigint(&mut rng, 10000);
    let sequential = KaratsubaConfig::new().with_cutoff(32).sequential();
    c.bench_function("karatsuba_mul_10k_sequential", |bench| {
        bench.iter(|| sequential.multiply(&a, &b));
    });
    let parallel = KaratsubaConfig::new().with_cutoff(32);
    c.bench_function("karatsuba_mul_10k_parallel", |bench| {
        bench.iter(|| parallel.multiply(&a, &b));
    });
}

fn bench_add_assign(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let mut a = random_bigint(&mut rng, 1000);
    let b = random_bigint(&mut rng, 1000);
    c.bench_function("add_assign", |bench| {
        bench.iter(|| a += &b);
    });
}

fn bench_decimal(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_bigint(&mut rng, 100);
    let text = a.to_decimal_string();
    c.bench_function("to_decimal_string_100", |bench| {
        bench.iter(|| black_box(&a).to_decimal_string());
    });
    c.bench_function("from_decimal_str_100", |bench| {
        bench.iter(|| BigInt::from_decimal_str(black_box(&text)));
    });
}

fn configured() -> Criterion {
    Criterion::default().sample_size(10)
}
criterion_group!(
    name = benches;
    config = configured();
    targets =
        bench_schoolbook_mul,
        bench_karatsuba_cutoffs,
        bench_karatsuba_mul_10k,
        bench_add_assign,
        bench_decimal,
);
criterion_main!(benches);
