use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use rnokpp::*;

fn generator() -> Generator {
    Generator::with_today(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()).unwrap()
}

fn bench_is_valid(c: &mut Criterion) {
    c.bench_function("is_valid", |b| {
        b.iter(|| black_box(is_valid(black_box("3652504575"))));
    });
}

fn bench_get_details(c: &mut Criterion) {
    c.bench_function("get_details", |b| {
        b.iter(|| black_box(get_details(black_box("3652504575"))));
    });
    c.bench_function("get_details_invalid", |b| {
        b.iter(|| black_box(get_details(black_box("1234567890"))));
    });
}

fn bench_generate(c: &mut Criterion) {
    let generator = generator();
    let birthday = NaiveDate::from_ymd_opt(1990, 3, 8).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("generate", |b| {
        b.iter(|| black_box(generator.generate(&mut rng, black_box(birthday), Gender::Male)));
    });
}

fn bench_generate_random_batch(c: &mut Criterion) {
    let generator = generator();
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("generate_random_1000", |b| {
        b.iter(|| {
            let batch: Vec<String> = generator.generate_random_n(&mut rng, 1000).collect();
            black_box(batch)
        });
    });
}

criterion_group!(
    benches,
    bench_is_valid,
    bench_get_details,
    bench_generate,
    bench_generate_random_batch,
);
criterion_main!(benches);
