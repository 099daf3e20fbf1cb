//! Benchmark tests for the per-turn NLU pipeline.
//!
//! The assistant runs normalize -> classify -> extract on every user turn,
//! so the whole pass has to stay comfortably under a millisecond to keep
//! the REPL feeling instant. These benchmarks measure each stage and the
//! combined pipeline over a rotating set of realistic utterances.

use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use scout_core::ConversationState;
use scout_nlu::{FilterExtractor, IntentClassifier, Normalizer};

/// Generate a realistic user turn. The phrasing varies by index so the
/// rule cascade gets exercised past its first few patterns.
fn generate_turn(index: usize) -> String {
    match index % 8 {
        0 => "find me some workshops about hiking tomorrow please".to_string(),
        1 => "are there any arc networking events this week?".to_string(),
        2 => "show me more events".to_string(),
        3 => "tell me more about event 2".to_string(),
        4 => "reset everything except my dates".to_string(),
        5 => "anything happening in Kensington next week".to_string(),
        6 => "I don't know, maybe something social?".to_string(),
        _ => format!("seminars at the library in {} days", (index % 14) + 1),
    }
}

fn bench_turn_pipeline(c: &mut Criterion) {
    let normalizer = Normalizer::default();
    let classifier = IntentClassifier::default();
    let extractor = FilterExtractor::default();

    // Pre-generate turns to exclude formatting time from measurements.
    let turns: Vec<String> = (0..1000).map(generate_turn).collect();

    let mut group = c.benchmark_group("nlu_turn");
    group.sample_size(200);
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("normalize", |b| {
        let mut idx = 0usize;
        b.iter(|| {
            let turn = &turns[idx % turns.len()];
            let tokens = normalizer.normalize(turn);
            idx += 1;
            tokens
        });
    });

    group.bench_function("classify", |b| {
        let mut idx = 0usize;
        b.iter(|| {
            let turn = &turns[idx % turns.len()];
            let tokens = normalizer.normalize(turn);
            let intent = classifier.classify(turn, &tokens, ConversationState::Searching);
            idx += 1;
            intent
        });
    });

    group.bench_function("full_pipeline", |b| {
        let mut idx = 0usize;
        b.iter(|| {
            let turn = &turns[idx % turns.len()];
            let tokens = normalizer.normalize(turn);
            let intent = classifier.classify(turn, &tokens, ConversationState::Searching);
            let delta = extractor.extract(turn, &tokens);
            idx += 1;
            (intent, delta)
        });
    });

    group.finish();

    // Standalone p95 measurement with explicit assertion.
    let target = Duration::from_millis(1);
    let mut times = Vec::with_capacity(turns.len());
    for turn in &turns {
        let start = std::time::Instant::now();
        let tokens = normalizer.normalize(turn);
        let _intent = classifier.classify(turn, &tokens, ConversationState::Searching);
        let _delta = extractor.extract(turn, &tokens);
        times.push(start.elapsed());
    }

    times.sort();
    let p95 = times[949];
    let median = times[499];
    let max = *times.last().unwrap();

    eprintln!("\n=== NLU turn pipeline latency (1000 turns) ===");
    eprintln!("Median:  {:?}", median);
    eprintln!("p95:     {:?} (target: {:?})", p95, target);
    eprintln!("Max:     {:?}", max);

    assert!(
        p95 < target,
        "NLU pipeline p95 {:?} exceeds target {:?}",
        p95,
        target
    );
}

criterion_group!(benches, bench_turn_pipeline);
criterion_main!(benches);
