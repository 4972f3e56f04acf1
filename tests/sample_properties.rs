// Properties of the sample operations through the public API

use planar::{DistanceStyle, Point, SampleInputs, SampleReport, add};

#[test]
fn sum_of_one_and_two() {
    assert_eq!(add(1, 2), 3);
}

#[test]
fn addition_commutes() {
    let samples = [(-17_i64, 4_i64), (0, 0), (123_456, -654_321), (i64::MAX - 5, 5)];
    for (a, b) in samples {
        assert_eq!(add(a, b), add(b, a), "a={a} b={b}");
    }

    let reals = [(0.1_f64, 0.2_f64), (-1e20, 3.5), (f64::MAX / 2.0, 1.0)];
    for (a, b) in reals {
        assert_eq!(add(a, b), add(b, a), "a={a} b={b}");
    }
}

#[test]
fn three_four_five() {
    let p1 = Point::new(0.0, 0.0);
    let p2 = Point::new(3.0, 4.0);
    assert_eq!(p1.distance(&p2), 5.0);
    assert_eq!(p2.distance(&p1), 5.0);
}

#[test]
fn identity_and_symmetry() {
    let points = [
        Point::ORIGIN,
        Point::new(1.0, -1.0),
        Point::new(0.3, 0.7),
        Point::new(-250.125, 1e-3),
    ];
    for p in &points {
        assert_eq!(p.distance(p), 0.0);
        for q in &points {
            let forward = p.distance(q);
            let backward = q.distance(p);
            assert!((forward - backward).abs() <= f64::EPSILON * forward.max(1.0));
            assert!(forward >= 0.0);
        }
    }
}

#[test]
fn end_to_end_report() {
    let report = SampleReport::compute(&SampleInputs::default());
    assert_eq!(report.to_string(), "Sum: 3\nDistance: 5.0");
    assert_eq!(
        report.render(DistanceStyle::Fixed(6)),
        "Sum: 3\nDistance: 5.000000"
    );
}
