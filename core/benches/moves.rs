use criterion::{Criterion, criterion_group, criterion_main};
use sleigh_core::*;
use std::hint::black_box;

/// A wide open level with the only present in the far corner.
fn open_field(size: usize) -> Level {
    let mut rows = vec![vec![LevelCell::Empty; size]; size];
    rows[0][0] = LevelCell::Santa;
    rows[size - 1][size - 1] = LevelCell::Present;
    Level::new(rows).unwrap()
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_catalog", |b| {
        b.iter(|| Catalog::from_sources(black_box(LEVEL_SOURCES)).unwrap())
    });
}

fn bench_back_and_forth(c: &mut Criterion) {
    for size in [8, 32] {
        let level = open_field(size);
        c.bench_function(&format!("move_back_and_forth_{size}x{size}"), |b| {
            let mut attempt = LevelAttempt::new(&level);
            b.iter(|| {
                attempt.move_to(black_box((0, 1))).unwrap();
                attempt.move_to(black_box((0, 0))).unwrap();
            })
        });
    }
}

fn bench_full_walk(c: &mut Criterion) {
    let level = open_field(16);
    c.bench_function("walk_to_present_16x16", |b| {
        b.iter(|| {
            let mut attempt = LevelAttempt::new(&level);
            for column in 1..16 {
                attempt.move_to((0, column)).unwrap();
            }
            for row in 1..16 {
                attempt.move_to((row, 15)).unwrap();
            }
            assert!(attempt.is_complete());
        })
    });
}

criterion_group!(benches, bench_parse, bench_back_and_forth, bench_full_walk);
criterion_main!(benches);
