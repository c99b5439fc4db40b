use criterion::{black_box, criterion_group, criterion_main, Criterion};
use oration::engine::PerformanceEngine;
use oration::options::Options;
use oration::rig::head_pose;
use oration::script::Script;
use web_time::{Duration, Instant};

fn script_sample_benchmark(c: &mut Criterion) {
    let script = Script::standard();
    c.bench_function("script_sample", |b| {
        b.iter(|| black_box(script.sample(black_box(81.0))))
    });
}

fn engine_tick_benchmark(c: &mut Criterion) {
    let start = Instant::now();
    let mut engine =
        PerformanceEngine::with_standard_script(Options::default(), start);

    // Warm through the intro so ticks exercise the main-phase path.
    let mut t = 0.0;
    while t < 10.0 {
        t += 1.0 / 60.0;
        let _ = engine.tick(start + Duration::from_secs_f64(t));
    }

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            t += 1.0 / 60.0;
            black_box(engine.tick(start + Duration::from_secs_f64(t)))
        })
    });
}

fn head_pose_benchmark(c: &mut Criterion) {
    let start = Instant::now();
    let mut engine =
        PerformanceEngine::with_standard_script(Options::default(), start);
    let snapshot = engine.tick(start + Duration::from_secs_f64(10.0));

    c.bench_function("head_pose", |b| {
        b.iter(|| black_box(head_pose(black_box(&snapshot))))
    });
}

criterion_group!(
    benches,
    script_sample_benchmark,
    engine_tick_benchmark,
    head_pose_benchmark
);
criterion_main!(benches);
