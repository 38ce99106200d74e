use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pitchnav::harmonic::HarmonicJumpFilter;
use pitchnav::note::ActiveNote;
use pitchnav::pitch_map::{Direction, KeyId, Navigator, PitchMap};
use pitchnav::session::{DetectionStats, PitchSample, Session};

fn test_map(event_count: usize) -> PitchMap {
    let notes: Vec<(f64, f32)> = (0..event_count)
        .map(|i| (0.25 * i as f64, 220.0 * (1.0 + (i % 12) as f32 / 12.0)))
        .collect();
    PitchMap::from_frequencies(&notes).unwrap()
}

fn run_bootstrap_benchmark(id: &str, c: &mut Criterion, event_count: usize) {
    let map = test_map(event_count);
    let mut navigator = Navigator::new();
    let current_time = map.duration() * 0.9;
    c.bench_function(id, |b| {
        b.iter(|| {
            navigator.reset();
            navigator.navigate(&map, black_box(current_time), Direction::Forward);
        })
    });
}

fn navigation_benchmarks(c: &mut Criterion) {
    run_bootstrap_benchmark("Bootstrap, 100 events", c, 100);
    run_bootstrap_benchmark("Bootstrap, 10000 events", c, 10000);

    let map = test_map(1000);
    let mut navigator = Navigator::new();
    c.bench_function("Step, 1000 events", |b| {
        b.iter(|| {
            navigator.navigate(&map, black_box(0.0), Direction::Forward);
            navigator.navigate(&map, black_box(0.0), Direction::Backward);
        })
    });
}

fn filter_benchmarks(c: &mut Criterion) {
    let filter = HarmonicJumpFilter::new();
    let note = ActiveNote::live(KeyId::new("A4"), 440.0, 0.0);
    let mut stats = DetectionStats::new();
    c.bench_function("Harmonic jump filter", |b| {
        b.iter(|| {
            filter.is_harmonic_jump(black_box(880.0), Some(&note), black_box(0.02), &mut stats)
        })
    });

    let mut session = Session::new(test_map(100));
    let mut timestamp = 0.0;
    c.bench_function("Session, sustained note", |b| {
        b.iter(|| {
            timestamp += 0.01;
            session.push_sample(PitchSample::new(black_box(440.0), timestamp), |_| {})
        })
    });
}

criterion_group!(benches, navigation_benchmarks, filter_benchmarks);
criterion_main!(benches);
