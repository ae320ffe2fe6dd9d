use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wordfill_core::*;

fn bench_generate(c: &mut Criterion) {
    let words = WordList::embedded();
    let mut group = c.benchmark_group("generate");

    for (name, config) in [
        ("default", PuzzleConfig::default()),
        ("wide_pool", PuzzleConfig::new(3, 4).with_shuffled_options(true)),
    ] {
        group.bench_function(name, |b| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                RandomPuzzleGenerator::new(seed)
                    .generate_from(black_box(&words), config)
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let puzzle = RandomPuzzleGenerator::new(1)
        .generate("mountain", PuzzleConfig::default())
        .unwrap();

    c.bench_function("place_retract", |b| {
        b.iter(|| {
            let mut session = PlaySession::new(puzzle.clone());
            let slot = session.puzzle().blank_run().start();
            session.place(0, slot).unwrap();
            session.retract(black_box(slot)).unwrap()
        })
    });
}

criterion_group!(benches, bench_generate, bench_session);
criterion_main!(benches);
