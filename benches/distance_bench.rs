//! Benchmarks for the sample operations and report rendering

use criterion::{Criterion, criterion_group, criterion_main};
use planar::{DistanceStyle, Point, SampleInputs, SampleReport};
use std::hint::black_box;

fn create_points(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| Point::new(i as f64 * 0.5, (count - i) as f64 * 1.25))
        .collect()
}

fn bench_distance(c: &mut Criterion) {
    c.bench_function("distance_single", |b| {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        b.iter(|| black_box(p1).distance(black_box(&p2)));
    });

    c.bench_function("distance_pairwise_100", |b| {
        let points = create_points(100);
        b.iter(|| {
            let mut total = 0.0;
            for p in &points {
                for q in &points {
                    total += p.distance(q);
                }
            }
            black_box(total)
        });
    });
}

fn bench_report(c: &mut Criterion) {
    let inputs = SampleInputs::default();

    c.bench_function("report_compute_and_render", |b| {
        b.iter(|| {
            let report = SampleReport::compute(black_box(&inputs));
            black_box(report.render(DistanceStyle::Shortest))
        });
    });

    c.bench_function("report_render_fixed", |b| {
        let report = SampleReport::compute(&inputs);
        b.iter(|| black_box(report.render(DistanceStyle::Fixed(6))));
    });
}

criterion_group!(benches, bench_distance, bench_report);
criterion_main!(benches);
