use nalgebra::Point2;

/// Convex hull via Andrew's monotone chain.
///
/// Returns the hull vertices in counter-clockwise order; the hull is
/// implicitly closed (first and last points differ). Inputs with fewer than
/// three points, or fully collinear inputs, return the surviving endpoints.
pub fn convex_hull(points: &[Point2<f32>]) -> Vec<Point2<f32>> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut sorted: Vec<Point2<f32>> = points.to_vec();
    sorted.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
    });

    let mut lower: Vec<Point2<f32>> = Vec::new();
    for &p in &sorted {
        while lower.len() >= 2 && cross(&lower[lower.len() - 2], &lower[lower.len() - 1], &p) <= 0.0
        {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point2<f32>> = Vec::new();
    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(&upper[upper.len() - 2], &upper[upper.len() - 1], &p) <= 0.0
        {
            upper.pop();
        }
        upper.push(p);
    }

    // The endpoint of each chain repeats the start of the other.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[inline]
fn cross(o: &Point2<f32>, a: &Point2<f32>, b: &Point2<f32>) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_points_are_excluded() {
        let points = vec![
            Point2::new(0.0f32, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 0.5),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let hull = convex_hull(&points);
        assert_eq!(hull.len(), 4);
        assert!(!hull.iter().any(|p| *p == Point2::new(0.5, 0.5)));
    }

    #[test]
    fn collinear_points_collapse_to_endpoints() {
        let points = vec![
            Point2::new(0.0f32, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        ];
        let hull = convex_hull(&points);
        assert_eq!(hull.len(), 2);
    }

    #[test]
    fn small_inputs_pass_through() {
        let points = vec![Point2::new(3.0f32, 4.0)];
        assert_eq!(convex_hull(&points).len(), 1);
        assert!(convex_hull(&[]).is_empty());
    }
}
