//! Benchmark tests for easing and transition sampling.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;
use switchkit_core::{Easing, Transition};

fn bench_easing_apply(c: &mut Criterion) {
    c.bench_function("easing_linear", |b| {
        b.iter(|| Easing::Linear.apply(black_box(0.37)))
    });

    c.bench_function("easing_ease_in_out", |b| {
        b.iter(|| Easing::EaseInOut.apply(black_box(0.37)))
    });
}

fn bench_transition_tick(c: &mut Criterion) {
    c.bench_function("transition_tick", |b| {
        let mut transition = Transition::new(2.0, 78.0, Duration::from_millis(200));
        transition.tick(Duration::ZERO);
        let mut now = Duration::ZERO;
        b.iter(|| {
            now += Duration::from_micros(16_667);
            black_box(transition.tick(now))
        });
    });
}

fn bench_transition_restart(c: &mut Criterion) {
    c.bench_function("transition_restart_from_live", |b| {
        b.iter(|| {
            let mut transition =
                Transition::new(black_box(40.0), black_box(78.0), Duration::from_millis(200));
            transition.tick(Duration::ZERO)
        });
    });
}

criterion_group!(
    benches,
    bench_easing_apply,
    bench_transition_tick,
    bench_transition_restart,
);
criterion_main!(benches);
