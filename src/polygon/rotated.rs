use super::hull::convex_hull;
use nalgebra::{Point2, Rotation2, Vector2};
use serde::Serialize;

/// Oriented rectangle: center, full extents along the local axes, and the
/// rotation of the local x-axis (radians, counter-clockwise).
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RotatedRect {
    pub center: Point2<f32>,
    pub size: Vector2<f32>,
    pub angle: f32,
}

impl RotatedRect {
    pub fn area(&self) -> f32 {
        self.size.x * self.size.y
    }

    /// The four corners in counter-clockwise order starting at the local
    /// (-x, -y) corner.
    pub fn corners(&self) -> [Point2<f32>; 4] {
        let rot = Rotation2::new(self.angle);
        let hx = self.size.x * 0.5;
        let hy = self.size.y * 0.5;
        let local = [
            Vector2::new(-hx, -hy),
            Vector2::new(hx, -hy),
            Vector2::new(hx, hy),
            Vector2::new(-hx, hy),
        ];
        local.map(|v| self.center + rot * v)
    }
}

/// Smallest-area rotated rectangle enclosing `points`, via rotating calipers
/// over the convex hull. The optimal rectangle shares an orientation with
/// some hull edge.
///
/// Returns `None` for empty input. Single points and collinear inputs yield
/// a degenerate (zero-extent) rectangle.
pub fn min_area_rect(points: &[Point2<f32>]) -> Option<RotatedRect> {
    let hull = convex_hull(points);
    match hull.len() {
        0 => return None,
        1 => {
            return Some(RotatedRect {
                center: hull[0],
                size: Vector2::zeros(),
                angle: 0.0,
            })
        }
        2 => {
            let d = hull[1] - hull[0];
            return Some(RotatedRect {
                center: nalgebra::center(&hull[0], &hull[1]),
                size: Vector2::new(d.norm(), 0.0),
                angle: d.y.atan2(d.x),
            });
        }
        _ => {}
    }

    let n = hull.len();
    let mut best: Option<RotatedRect> = None;
    let mut best_area = f32::INFINITY;

    for i in 0..n {
        let j = (i + 1) % n;
        let edge = hull[j] - hull[i];
        let len = edge.norm();
        if len < 1e-9 {
            continue;
        }
        let u = edge / len;
        let v = Vector2::new(-u.y, u.x);

        let mut min_u = f32::INFINITY;
        let mut max_u = f32::NEG_INFINITY;
        let mut min_v = f32::INFINITY;
        let mut max_v = f32::NEG_INFINITY;
        for p in &hull {
            let pu = p.coords.dot(&u);
            let pv = p.coords.dot(&v);
            min_u = min_u.min(pu);
            max_u = max_u.max(pu);
            min_v = min_v.min(pv);
            max_v = max_v.max(pv);
        }

        let width = max_u - min_u;
        let height = max_v - min_v;
        let area = width * height;
        if area < best_area {
            best_area = area;
            let cu = (min_u + max_u) * 0.5;
            let cv = (min_v + max_v) * 0.5;
            best = Some(RotatedRect {
                center: Point2::from(u * cu + v * cv),
                size: Vector2::new(width, height),
                angle: u.y.atan2(u.x),
            });
        }
    }

    best
}
