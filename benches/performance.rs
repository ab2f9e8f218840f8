use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rslider::{Handle, SliderConfig, SliderState, SliderValue, TrackGeometry};

const TRACK: TrackGeometry = TrackGeometry {
    left: 0.0,
    width: 800.0,
};

fn bench_continuous_drag(c: &mut Criterion) {
    let mut state = SliderState::new(SliderConfig::single(0.0, 100.0)).unwrap();
    state.pointer_down(Handle::Single);

    c.bench_function("continuous_single_move", |b| {
        let mut x = 0.0f32;
        b.iter(|| {
            x = (x + 1.7) % 800.0;
            black_box(state.pointer_move(black_box(x), Some(TRACK)));
        })
    });
}

fn bench_discrete_range_drag(c: &mut Criterion) {
    let config = SliderConfig::range(0.0, 1000.0).discrete(5.0);
    let mut state = SliderState::new(config).unwrap();
    state.pointer_down(Handle::Upper);

    c.bench_function("discrete_range_move", |b| {
        let mut x = 0.0f32;
        b.iter(|| {
            x = (x + 3.3) % 800.0;
            black_box(state.pointer_move(black_box(x), Some(TRACK)));
        })
    });
}

fn bench_projection(c: &mut Criterion) {
    c.bench_function("track_segments_range", |b| {
        b.iter(|| {
            let segments = rslider::projection::track_segments(
                black_box(SliderValue::Range(20.0, 80.0)),
                0.0,
                100.0,
            );
            black_box(segments);
        })
    });
}

criterion_group!(
    benches,
    bench_continuous_drag,
    bench_discrete_range_drag,
    bench_projection
);
criterion_main!(benches);
