use super::{min_area_rect, Box2, RotatedRect};
use crate::angle::cosine_between;
use nalgebra::Point2;
use serde::Serialize;
use std::cell::OnceCell;
use std::cmp::Ordering;

/// One candidate page outline: an ordered, implicitly closed point sequence
/// with cached quality metrics.
///
/// Both cached scalars (`area`, `max_cosine`) are computed lazily and dropped
/// on every point mutation, so a stale metric can never be observed.
/// Polygons with fewer than 3 points are degenerate: their area and corner
/// metrics are 0.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PolyRect {
    pts: Vec<Point2<f32>>,
    #[serde(skip)]
    area: OnceCell<f64>,
    #[serde(skip)]
    max_cosine: OnceCell<f32>,
}

impl PolyRect {
    pub fn new(pts: Vec<Point2<f32>>) -> Self {
        Self {
            pts,
            area: OnceCell::new(),
            max_cosine: OnceCell::new(),
        }
    }

    pub fn points(&self) -> &[Point2<f32>] {
        &self.pts
    }

    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pts.len()
    }

    /// Rectangularity badness: the largest |cos| over all corner angles of
    /// the cyclic chain. 0 for a perfect rectangle, approaching 1 for a
    /// degenerate sliver. Degenerate polygons (< 3 points) score 0.
    pub fn max_cosine(&self) -> f32 {
        *self.max_cosine.get_or_init(|| self.compute_max_cosine())
    }

    fn compute_max_cosine(&self) -> f32 {
        let n = self.pts.len();
        if n < 3 {
            return 0.0;
        }
        let mut max_cosine = 0.0f32;
        for idx in 0..n {
            let corner = self.pts[idx];
            let prev = self.pts[(idx + n - 1) % n];
            let next = self.pts[(idx + 1) % n];
            let cosine = cosine_between(&(prev - corner), &(next - corner)).abs();
            max_cosine = max_cosine.max(cosine);
        }
        max_cosine
    }

    /// Polygon area via the self-overlap of the intersection engine: the
    /// intersection of a simple polygon with itself is the polygon. Memoized
    /// until the points change.
    pub fn area(&self) -> f64 {
        *self
            .area
            .get_or_init(|| self.intersection_area(self).abs())
    }

    /// Area common to this polygon and `other`, in the shared coordinate
    /// units. Not cached: it depends on the second operand.
    pub fn intersection_area(&self, other: &PolyRect) -> f64 {
        crate::intersect::intersection_area(&self.pts, &other.pts)
    }

    /// Intersection area normalized by the smaller of the two polygon areas.
    /// 1 when one polygon covers the other, 0 when disjoint.
    pub fn overlap_ratio(&self, other: &PolyRect) -> f64 {
        let denom = self.area().min(other.area());
        if denom <= 0.0 {
            return 0.0;
        }
        self.intersection_area(other) / denom
    }

    /// Multiplies every point by `factor` and drops the cached metrics.
    pub fn scale(&mut self, factor: f32) {
        for p in &mut self.pts {
            p.coords *= factor;
        }
        self.invalidate();
    }

    /// Scales every point about the centroid and drops the cached metrics.
    pub fn scale_around_center(&mut self, factor: f32) {
        let c = self.centroid();
        for p in &mut self.pts {
            *p = c + (*p - c) * factor;
        }
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.area = OnceCell::new();
        self.max_cosine = OnceCell::new();
    }

    /// Arithmetic mean of the points (not area-weighted). The centroid of an
    /// empty polygon is the origin.
    pub fn centroid(&self) -> Point2<f32> {
        if self.pts.is_empty() {
            return Point2::origin();
        }
        let sum = self
            .pts
            .iter()
            .fold(nalgebra::Vector2::zeros(), |acc, p| acc + p.coords);
        Point2::from(sum / self.pts.len() as f32)
    }

    /// Convex containment test: walks the cyclic edges and rejects as soon
    /// as the point switches sides.
    ///
    /// Precondition: the polygon must be convex. Checked by `debug_assert!`;
    /// call [`PolyRect::is_convex`] to validate untrusted input in release
    /// builds.
    pub fn contains_point(&self, p: Point2<f32>) -> bool {
        debug_assert!(
            self.is_convex(),
            "contains_point requires a convex polygon"
        );
        let n = self.pts.len();
        let mut last_sign = 0.0f32;
        for idx in 0..n {
            let a = self.pts[idx];
            let b = self.pts[(idx + 1) % n];
            let csign = (b - a).perp(&(p - a));
            if last_sign * csign < 0.0 {
                return false;
            }
            last_sign = csign;
        }
        true
    }

    /// True when all cyclic turns share a sign (collinear corners allowed).
    /// Degenerate polygons (< 3 points) are vacuously convex.
    pub fn is_convex(&self) -> bool {
        let n = self.pts.len();
        if n < 3 {
            return true;
        }
        let mut last_sign = 0.0f32;
        for idx in 0..n {
            let a = self.pts[idx];
            let b = self.pts[(idx + 1) % n];
            let c = self.pts[(idx + 2) % n];
            let turn = (b - a).perp(&(c - b));
            if last_sign * turn < 0.0 {
                return false;
            }
            if turn != 0.0 {
                last_sign = turn;
            }
        }
        true
    }

    /// Maximum Euclidean length among the cyclic edges.
    pub fn max_edge_length(&self) -> f32 {
        let n = self.pts.len();
        if n < 2 {
            return 0.0;
        }
        let mut max_len = 0.0f32;
        for idx in 0..n {
            let len = (self.pts[(idx + 1) % n] - self.pts[idx]).norm();
            max_len = max_len.max(len);
        }
        max_len
    }

    /// Axis-aligned box covering all points. Requesting the box of an empty
    /// polygon is misuse-shaped: it logs a warning and returns the
    /// degenerate box (the returned value is unaffected by the logging).
    pub fn bounding_box(&self) -> Box2 {
        if self.pts.is_empty() {
            log::warn!("bounding box requested for an empty polygon");
        }
        Box2::from_points(&self.pts)
    }

    /// Smallest-area rotated rectangle enclosing the polygon's convex hull.
    /// `None` for an empty polygon.
    pub fn min_area_rotated_rect(&self) -> Option<RotatedRect> {
        min_area_rect(&self.pts)
    }

    /// Total order by area, ascending. Suitable for `sort_by`.
    pub fn compare_by_area(p: &PolyRect, q: &PolyRect) -> Ordering {
        p.area().partial_cmp(&q.area()).unwrap_or(Ordering::Equal)
    }
}
