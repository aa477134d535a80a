use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use market_watchlist::constants::SERIES_POINTS;
use market_watchlist::series::{self, Trend};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_series_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_generation");
    group.throughput(Throughput::Elements(SERIES_POINTS as u64));

    group.bench_function("generate", |b| {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        b.iter(|| series::generate(192.42, Trend::Up, &mut rng));
    });

    group.finish();
}

criterion_group!(benches, bench_series_generation);
criterion_main!(benches);
