use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand_core::OsRng;
use randpass::{build_alphabet, generate_with, Category, PasswordConfig, Sampling};

const SAMPLINGS: [Sampling; 2] = [Sampling::Modulo, Sampling::Rejection];

fn bench_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate/length");

    for length in [16i64, 64, 1024] {
        let config = PasswordConfig::with_length(length);
        for sampling in SAMPLINGS {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", sampling), length),
                &config,
                |b, config| b.iter(|| generate_with(black_box(config), sampling, &mut OsRng)),
            );
        }
    }

    group.finish();
}

/// Rejection rate depends on 256 % n: 6/256 at n = 10, 22/256 at 26,
/// 8/256 at 62 and 1/256 at 85.
fn bench_alphabet_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate/alphabet");

    let base = PasswordConfig::with_length(256);
    let configs = [
        base.exclude(Category::Lower)
            .exclude(Category::Upper)
            .exclude(Category::Symbols),
        base.exclude(Category::Upper)
            .exclude(Category::Digits)
            .exclude(Category::Symbols),
        base.exclude(Category::Symbols),
        base,
    ];

    for config in configs {
        let size = build_alphabet(&config).len();
        for sampling in SAMPLINGS {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", sampling), size),
                &config,
                |b, config| b.iter(|| generate_with(black_box(config), sampling, &mut OsRng)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_length, bench_alphabet_size);
criterion_main!(benches);
