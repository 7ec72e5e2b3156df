use nalgebra::{Point2, Vector2};
use serde::Serialize;

/// Axis-aligned box described by its origin (minimum corner) and size.
///
/// A derived view over polygon points: recomputed on demand, never cached.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Box2 {
    pub origin: Point2<f32>,
    pub size: Vector2<f32>,
}

impl Box2 {
    pub fn new(origin: Point2<f32>, size: Vector2<f32>) -> Self {
        Self { origin, size }
    }

    /// Smallest axis-aligned box covering `pts`. Empty input yields the
    /// degenerate box at the origin.
    pub fn from_points(pts: &[Point2<f32>]) -> Self {
        let mut min = Point2::new(f32::INFINITY, f32::INFINITY);
        let mut max = Point2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        for p in pts {
            min = Point2::new(min.x.min(p.x), min.y.min(p.y));
            max = Point2::new(max.x.max(p.x), max.y.max(p.y));
        }
        if pts.is_empty() {
            return Self::default();
        }
        Self {
            origin: min,
            size: max - min,
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn area(&self) -> f32 {
        self.size.x * self.size.y
    }

    /// True when the box covers no area.
    pub fn is_degenerate(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }
}

impl Default for Box2 {
    fn default() -> Self {
        Self {
            origin: Point2::origin(),
            size: Vector2::zeros(),
        }
    }
}
