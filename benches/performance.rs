// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for chordal
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Tone and interval arithmetic
//! - Chord construction and rendering
//! - Chord transposition and classification

use chordal::{Chord, Interval, Tone};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark tone/interval arithmetic over the whole octave
fn bench_tone_arithmetic(c: &mut Criterion) {
    c.bench_function("tone_differences_12x12", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for a in Tone::ALL {
                for t in Tone::ALL {
                    total += (black_box(a) - black_box(t)).semitones() as u32;
                }
            }
            black_box(total)
        })
    });

    c.bench_function("tone_plus_interval", |b| {
        b.iter(|| {
            let mut tone = Tone::C;
            for n in 0..12 {
                tone = tone + Interval::new(black_box(n * 7));
            }
            black_box(tone)
        })
    });
}

/// Benchmark chord construction by size
fn bench_chord_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("chord_build");

    for size in [2usize, 4, 8, 12].iter() {
        let notes: Vec<Tone> = Tone::ALL[1..*size].to_vec();
        group.bench_with_input(BenchmarkId::new("new", size), &notes, |b, notes| {
            b.iter(|| Chord::new(Tone::C, black_box(notes).iter().copied()))
        });
    }

    group.finish();
}

/// Benchmark operations on a built chord
fn bench_chord_ops(c: &mut Criterion) {
    let chord = match Chord::new(Tone::C, [Tone::E, Tone::G, Tone::As, Tone::D]) {
        Ok(chord) => chord,
        Err(e) => panic!("benchmark chord invalid: {}", e),
    };

    c.bench_function("chord_transposed", |b| {
        b.iter(|| black_box(&chord).transposed(black_box(5)))
    });

    c.bench_function("chord_quality", |b| {
        b.iter(|| black_box(&chord).quality())
    });

    c.bench_function("chord_to_string", |b| {
        b.iter(|| black_box(&chord).to_string())
    });

    c.bench_function("chord_without", |b| {
        b.iter(|| black_box(&chord).without(black_box(Tone::D)))
    });
}

criterion_group!(
    benches,
    bench_tone_arithmetic,
    bench_chord_build,
    bench_chord_ops,
);
criterion_main!(benches);
