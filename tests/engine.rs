use nalgebra::Point2;
use page_detector::intersection_area;

fn square(x0: f32, y0: f32, side: f32) -> Vec<Point2<f32>> {
    vec![
        Point2::new(x0, y0),
        Point2::new(x0 + side, y0),
        Point2::new(x0 + side, y0 + side),
        Point2::new(x0, y0 + side),
    ]
}

/// Shoelace area, sign folded away, for cross-checking the engine.
fn shoelace(pts: &[Point2<f32>]) -> f64 {
    let n = pts.len();
    let mut acc = 0.0f64;
    for i in 0..n {
        let a = pts[i];
        let b = pts[(i + 1) % n];
        acc += f64::from(a.x) * f64::from(b.y) - f64::from(b.x) * f64::from(a.y);
    }
    (acc * 0.5).abs()
}

#[test]
fn shifted_unit_squares_overlap_by_a_quarter() {
    let a = square(0.0, 0.0, 1.0);
    let b = square(0.5, 0.5, 1.0);
    let area = intersection_area(&a, &b);
    assert!((area - 0.25).abs() < 1e-3, "area={area}");
}

#[test]
fn disjoint_squares_yield_zero() {
    let a = square(0.0, 0.0, 1.0);
    let b = square(2.0, 0.0, 1.0);
    let area = intersection_area(&a, &b);
    assert!(area.abs() < 1e-9, "area={area}");
}

#[test]
fn identical_squares_overlap_completely() {
    let a = square(0.0, 0.0, 1.0);
    let area = intersection_area(&a, &a);
    assert!((area - 1.0).abs() < 1e-3, "area={area}");
}

#[test]
fn rotated_square_inscribed_in_unit_square() {
    // Diamond touching the unit square's edge midpoints; shared boundary
    // points are exactly the case the coordinate perturbation untangles.
    let diamond = vec![
        Point2::new(0.5f32, 0.0),
        Point2::new(1.0, 0.5),
        Point2::new(0.5, 1.0),
        Point2::new(0.0, 0.5),
    ];
    let sq = square(0.0, 0.0, 1.0);
    let area = intersection_area(&diamond, &sq);
    assert!((area - 0.5).abs() / 0.5 < 1e-3, "area={area}");
}

#[test]
fn intersection_is_symmetric() {
    let pairs = [
        (square(0.0, 0.0, 1.0), square(0.5, 0.25, 2.0)),
        (square(-3.0, 1.0, 4.0), square(-1.0, 2.0, 1.5)),
        (
            vec![
                Point2::new(0.0f32, 0.0),
                Point2::new(3.0, 0.5),
                Point2::new(2.0, 2.5),
            ],
            square(0.5, 0.5, 2.0),
        ),
    ];
    for (a, b) in &pairs {
        let ab = intersection_area(a, b);
        let ba = intersection_area(b, a);
        assert!(
            (ab - ba).abs() <= 1e-6 * ab.abs().max(1.0),
            "asymmetric: {ab} vs {ba}"
        );
    }
}

#[test]
fn winding_direction_does_not_matter() {
    let a = square(0.0, 0.0, 2.0);
    let mut reversed = a.clone();
    reversed.reverse();
    let b = square(1.0, 1.0, 2.0);
    let cw = intersection_area(&reversed, &b);
    let ccw = intersection_area(&a, &b);
    assert!((cw - ccw).abs() < 1e-6, "cw={cw} ccw={ccw}");
    assert!((ccw - 1.0).abs() < 1e-3);
}

#[test]
fn self_intersection_matches_shoelace() {
    let triangle = vec![
        Point2::new(0.0f32, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(1.0, 2.0),
    ];
    let area = intersection_area(&triangle, &triangle);
    assert!((area - shoelace(&triangle)).abs() < 1e-3, "area={area}");
    assert!((area - 2.0).abs() < 1e-3);

    let pentagon = vec![
        Point2::new(0.0f32, 0.0),
        Point2::new(4.0, -1.0),
        Point2::new(6.0, 2.0),
        Point2::new(3.0, 5.0),
        Point2::new(-1.0, 3.0),
    ];
    let area = intersection_area(&pentagon, &pentagon);
    let expected = shoelace(&pentagon);
    assert!(
        (area - expected).abs() / expected < 1e-3,
        "area={area} expected={expected}"
    );
}

#[test]
fn contained_polygon_contributes_its_own_area() {
    let outer = square(0.0, 0.0, 10.0);
    let inner = square(2.0, 3.0, 2.0);
    let area = intersection_area(&outer, &inner);
    assert!((area - 4.0).abs() / 4.0 < 1e-3, "area={area}");
}

#[test]
fn non_convex_operands_are_supported() {
    // L-shaped hexagon covering 3 of the 4 quadrants of a 2x2 square.
    let ell = vec![
        Point2::new(0.0f32, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(2.0, 1.0),
        Point2::new(1.0, 1.0),
        Point2::new(1.0, 2.0),
        Point2::new(0.0, 2.0),
    ];
    let self_area = intersection_area(&ell, &ell);
    assert!((self_area - 3.0).abs() / 3.0 < 1e-3, "area={self_area}");

    // The upper-right unit square only touches the notch arm partially.
    let probe = square(0.5, 0.5, 1.0);
    let area = intersection_area(&ell, &probe);
    assert!((area - 0.75).abs() / 0.75 < 1e-3, "area={area}");
}

#[test]
fn degenerate_inputs_yield_zero() {
    let sq = square(0.0, 0.0, 1.0);
    let empty: Vec<Point2<f32>> = Vec::new();
    let one = vec![Point2::new(0.5f32, 0.5)];
    let two = vec![Point2::new(0.0f32, 0.0), Point2::new(1.0, 1.0)];

    assert_eq!(intersection_area(&empty, &sq), 0.0);
    assert_eq!(intersection_area(&sq, &empty), 0.0);
    assert_eq!(intersection_area(&one, &sq), 0.0);
    assert_eq!(intersection_area(&two, &sq), 0.0);
}

#[test]
fn flat_bounding_boxes_yield_zero() {
    let sq = square(0.0, 0.0, 1.0);
    let horizontal = vec![
        Point2::new(0.0f32, 0.5),
        Point2::new(0.5, 0.5),
        Point2::new(1.0, 0.5),
    ];
    let vertical = vec![
        Point2::new(0.5f32, 0.0),
        Point2::new(0.5, 0.5),
        Point2::new(0.5, 1.0),
    ];
    assert_eq!(intersection_area(&horizontal, &sq), 0.0);
    assert_eq!(intersection_area(&sq, &vertical), 0.0);
    assert_eq!(intersection_area(&horizontal, &vertical), 0.0);
}

#[test]
fn scaling_both_operands_scales_area_quadratically() {
    let a = square(0.0, 0.0, 2.0);
    let b = vec![
        Point2::new(1.0f32, 0.5),
        Point2::new(3.5, 1.0),
        Point2::new(2.0, 3.0),
    ];
    let base = intersection_area(&a, &b);
    assert!(base > 0.0);

    let factor = 3.0f32;
    let a_scaled: Vec<_> = a.iter().map(|p| Point2::new(p.x * factor, p.y * factor)).collect();
    let b_scaled: Vec<_> = b.iter().map(|p| Point2::new(p.x * factor, p.y * factor)).collect();
    let scaled = intersection_area(&a_scaled, &b_scaled);
    let expected = base * f64::from(factor) * f64::from(factor);
    assert!(
        (scaled - expected).abs() / expected < 1e-3,
        "scaled={scaled} expected={expected}"
    );
}

#[test]
fn repeated_calls_are_bitwise_deterministic() {
    let a = square(0.0, 0.0, 1.0);
    let b = square(0.25, 0.3, 1.0);
    let first = intersection_area(&a, &b);
    for _ in 0..8 {
        assert_eq!(intersection_area(&a, &b), first);
    }
}
