use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bingo_cards::{generate_cards, CardRng, WordPool};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for pool_size in [24usize, 100, 1_000] {
        let pool = WordPool::new((0..pool_size).map(|i| format!("word {i}")));
        group.bench_with_input(BenchmarkId::from_parameter(pool_size), &pool, |b, pool| {
            let mut rng = CardRng::new(42);
            b.iter(|| generate_cards(black_box(pool), 100, None::<()>, (), &mut rng))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
