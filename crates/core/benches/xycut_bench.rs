use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use pagecut_core::cut::partition;
use pagecut_core::model::Glyph;
use pagecut_core::tokenize::WordStrategy;

/// Lays out `words` five-character words on one line, word gaps of 4.
fn line_glyphs(words: usize) -> Vec<Glyph> {
    let mut glyphs = Vec::with_capacity(words * 5);
    let mut order = 0u32;
    let mut x = 0.0;
    for _ in 0..words {
        for _ in 0..5 {
            glyphs.push(Glyph::new((x, 0.0, x + 5.0, 10.0), "m", order));
            order += 1;
            x += 5.0;
        }
        x += 4.0;
    }
    glyphs
}

fn bench_word_partition(c: &mut Criterion) {
    let strategy = WordStrategy::default();
    for words in [60, 240] {
        let glyphs = line_glyphs(words);
        c.bench_function(&format!("word_partition_{}_words", words), |b| {
            b.iter(|| partition(1, black_box(glyphs.clone()), &strategy).unwrap());
        });
    }
}

criterion_group!(benches, bench_word_partition);
criterion_main!(benches);
