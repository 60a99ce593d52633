use criterion::{black_box, criterion_group, criterion_main, Criterion};

use visema_lipsync_core::{Config, LipSyncEngine, ProviderOptions, TimedPhoneme};
use visema_test_fixtures::ScriptedProvider;

fn long_sequence(phonemes: usize) -> Vec<TimedPhoneme> {
    let symbols = ["m", "i", "ɑ", "s", "u", "t", "eɪ", "l"];
    (0..phonemes)
        .map(|i| {
            let start = i as f32 * 0.08;
            TimedPhoneme::new(symbols[i % symbols.len()], start, start + 0.08)
        })
        .collect()
}

fn bench_tick(c: &mut Criterion) {
    let mut engine = LipSyncEngine::new(
        Config::default(),
        Box::new(ScriptedProvider::new(long_sequence(200))),
    );
    engine.prepare("benchmark utterance", 16.0, &ProviderOptions::default());
    engine.confirm_start();

    c.bench_function("engine_tick_60hz", |b| {
        b.iter(|| {
            let pose = engine.tick(black_box(1.0 / 60.0));
            black_box(pose);
        })
    });
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
