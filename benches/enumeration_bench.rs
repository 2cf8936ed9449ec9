//! Performance benchmarks

use combinator::Combinator;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_enumeration(c: &mut Criterion) {
    c.bench_function("iterate_L=8_M=3", |b| {
        b.iter(|| {
            let combinator = Combinator::new(black_box(8), black_box(3)).unwrap();
            black_box(combinator.count());
        });
    });

    c.bench_function("drain_all_L=8_M=3", |b| {
        b.iter(|| {
            let mut combinator = Combinator::new(black_box(8), black_box(3)).unwrap();
            black_box(combinator.drain_all());
        });
    });
}

criterion_group!(benches, benchmark_enumeration);
criterion_main!(benches);
