use nalgebra::{Point2, Rotation2, Vector2};
use page_detector::polygon::PolyRect;

fn unit_square() -> PolyRect {
    PolyRect::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(0.0, 1.0),
    ])
}

#[test]
fn square_has_zero_rectangularity_badness() {
    assert!(unit_square().max_cosine() < 1e-4);
}

#[test]
fn acute_sliver_scores_close_to_one() {
    // Strongly sheared parallelogram: corner angles near 0 and 180 degrees.
    let sliver = PolyRect::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(4.4, 0.1),
        Point2::new(0.4, 0.1),
    ]);
    assert!(sliver.max_cosine() > 0.9, "score={}", sliver.max_cosine());
}

#[test]
fn triangle_area_matches_shoelace() {
    let tri = PolyRect::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(1.0, 2.0),
    ]);
    assert!((tri.area() - 2.0).abs() < 1e-3, "area={}", tri.area());
    // Memoized read returns the identical value.
    assert_eq!(tri.area(), tri.area());
}

#[test]
fn degenerate_polygons_have_zero_area() {
    assert_eq!(PolyRect::new(Vec::new()).area(), 0.0);
    let two = PolyRect::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
    assert_eq!(two.area(), 0.0);
    assert_eq!(two.max_cosine(), 0.0);
}

#[test]
fn scaling_updates_area_and_centroid() {
    let mut sq = unit_square();
    assert!((sq.area() - 1.0).abs() < 1e-3);
    sq.scale(3.0);
    assert!((sq.area() - 9.0).abs() < 1e-2, "area={}", sq.area());
    let c = sq.centroid();
    assert!((c - Point2::new(1.5, 1.5)).norm() < 1e-5);

    sq.scale_around_center(0.5);
    let c2 = sq.centroid();
    assert!((c2 - Point2::new(1.5, 1.5)).norm() < 1e-4);
    assert!((sq.area() - 2.25).abs() < 1e-2, "area={}", sq.area());
    // Scaling preserves right angles.
    assert!(sq.max_cosine() < 1e-4);
}

#[test]
fn overlap_ratio_is_one_for_contained_polygons() {
    let mut outer = unit_square();
    outer.scale(10.0);
    let inner = PolyRect::new(vec![
        Point2::new(2.0, 2.0),
        Point2::new(5.0, 2.0),
        Point2::new(5.0, 6.0),
        Point2::new(2.0, 6.0),
    ]);
    let ratio = outer.overlap_ratio(&inner);
    assert!((ratio - 1.0).abs() < 1e-3, "ratio={ratio}");
    let disjoint = PolyRect::new(vec![
        Point2::new(20.0, 20.0),
        Point2::new(21.0, 20.0),
        Point2::new(21.0, 21.0),
        Point2::new(20.0, 21.0),
    ]);
    assert!(outer.overlap_ratio(&disjoint).abs() < 1e-9);
}

#[test]
fn convex_containment() {
    let sq = unit_square();
    assert!(sq.is_convex());
    assert!(sq.contains_point(Point2::new(0.5, 0.5)));
    assert!(sq.contains_point(Point2::new(0.01, 0.99)));
    assert!(!sq.contains_point(Point2::new(1.5, 0.5)));
    assert!(!sq.contains_point(Point2::new(-0.1, -0.1)));

    // Winding direction must not flip the verdict.
    let mut pts: Vec<Point2<f32>> = sq.points().to_vec();
    pts.reverse();
    let reversed = PolyRect::new(pts);
    assert!(reversed.contains_point(Point2::new(0.5, 0.5)));
    assert!(!reversed.contains_point(Point2::new(1.5, 0.5)));
}

#[test]
fn max_edge_length_of_a_right_triangle() {
    let tri = PolyRect::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(3.0, 0.0),
        Point2::new(3.0, 4.0),
    ]);
    assert!((tri.max_edge_length() - 5.0).abs() < 1e-5);
    assert_eq!(PolyRect::new(Vec::new()).max_edge_length(), 0.0);
}

#[test]
fn bounding_box_covers_the_points() {
    let tri = PolyRect::new(vec![
        Point2::new(-1.0, 2.0),
        Point2::new(3.0, 2.0),
        Point2::new(1.0, 5.0),
    ]);
    let bbox = tri.bounding_box();
    assert_eq!(bbox.origin, Point2::new(-1.0, 2.0));
    assert_eq!(bbox.size, Vector2::new(4.0, 3.0));

    // Misuse-shaped call: logged, but still returns the degenerate box.
    let empty = PolyRect::new(Vec::new());
    assert!(empty.bounding_box().is_degenerate());
}

#[test]
fn min_area_rect_recovers_a_rotated_page() {
    let rot = Rotation2::new(0.4f32);
    let corners = [
        Vector2::new(-2.0f32, -1.0),
        Vector2::new(2.0, -1.0),
        Vector2::new(2.0, 1.0),
        Vector2::new(-2.0, 1.0),
    ];
    let pts: Vec<Point2<f32>> = corners
        .iter()
        .map(|v| Point2::from(rot * v) + Vector2::new(10.0, 20.0))
        .collect();
    let poly = PolyRect::new(pts);
    let rect = poly.min_area_rotated_rect().expect("rect");
    assert!((rect.area() - 8.0).abs() < 1e-2, "area={}", rect.area());

    assert!(PolyRect::new(Vec::new()).min_area_rotated_rect().is_none());
}

#[test]
fn candidates_sort_ascending_by_area() {
    let mut polys = vec![
        PolyRect::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 3.0),
            Point2::new(0.0, 3.0),
        ]),
        unit_square(),
        PolyRect::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ]),
    ];
    polys.sort_by(PolyRect::compare_by_area);
    let areas: Vec<f64> = polys.iter().map(|p| p.area()).collect();
    assert!(areas[0] < areas[1] && areas[1] < areas[2], "areas={areas:?}");
}
