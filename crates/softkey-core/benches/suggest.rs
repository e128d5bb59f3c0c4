use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use softkey_core::{SuggestionTrie, WeightedTerm};

/// Synthetic vocabulary: every 3-letter stem over a small alphabet with a
/// spread of suffixes, so short prefixes hit wide subtrees.
fn vocabulary() -> Vec<WeightedTerm> {
    let alphabet = ['a', 'b', 'c', 'd', 'e', 'f'];
    let suffixes = ["", "s", "ed", "ing", "er", "est"];
    let mut words = Vec::new();
    let mut weight = 0u32;
    for a in alphabet {
        for b in alphabet {
            for c in alphabet {
                for suffix in suffixes {
                    weight = weight.wrapping_add(7919) % 10_000;
                    words.push(WeightedTerm::new(format!("{a}{b}{c}{suffix}"), weight));
                }
            }
        }
    }
    words
}

fn bench_load(c: &mut Criterion) {
    let words = vocabulary();
    c.bench_function("load_weighted_terms", |b| {
        b.iter(|| {
            let mut trie = SuggestionTrie::with_limit(12);
            trie.load_weighted_terms(words.iter().cloned());
            trie
        })
    });
}

fn bench_suggest(c: &mut Criterion) {
    let mut trie = SuggestionTrie::with_limit(12);
    trie.load_weighted_terms(vocabulary());

    let mut group = c.benchmark_group("suggestions_for_prefix");
    for prefix in ["a", "ab", "abc", "abcd", "zzz"] {
        group.bench_with_input(BenchmarkId::from_parameter(prefix), prefix, |b, p| {
            b.iter(|| trie.suggestions_for_prefix(p))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_load, bench_suggest);
criterion_main!(benches);
