use nalgebra::{Point2, Vector3};
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;

/// Line segment produced by the extractor.
///
/// Derived quantities (normal-form line, length, orientation) are computed
/// lazily and cached; a `Segment` is immutable once built.
#[derive(Clone, Debug, Serialize)]
pub struct Segment {
    pub p0: Point2<f32>,
    pub p1: Point2<f32>,
    pub avg_mag: f32,
    pub strength: f32,
    #[serde(skip)]
    line: OnceCell<Vector3<f32>>,
    #[serde(skip)]
    length: OnceCell<f32>,
    #[serde(skip)]
    theta: OnceCell<f32>,
}

impl Segment {
    pub fn new(p0: Point2<f32>, p1: Point2<f32>, avg_mag: f32, strength: f32) -> Self {
        Self {
            p0,
            p1,
            avg_mag,
            strength,
            line: OnceCell::new(),
            length: OnceCell::new(),
            theta: OnceCell::new(),
        }
    }

    pub fn midpoint(&self) -> Point2<f32> {
        nalgebra::center(&self.p0, &self.p1)
    }

    fn compute_line(&self) -> Vector3<f32> {
        let a = self.p1.y - self.p0.y;
        let b = self.p0.x - self.p1.x;
        let c = self.p1.x * self.p0.y - self.p0.x * self.p1.y;
        let norm = (a * a + b * b).sqrt().max(1e-6);
        Vector3::new(a / norm, b / norm, c / norm)
    }

    /// Line representation: ax + by + c = 0, with sqrt(a^2+b^2)=1
    pub fn line(&self) -> Vector3<f32> {
        *self.line.get_or_init(|| self.compute_line())
    }

    pub fn length(&self) -> f32 {
        *self.length.get_or_init(|| (self.p1 - self.p0).norm())
    }

    /// Tangent orientation in radians.
    pub fn theta(&self) -> f32 {
        *self.theta.get_or_init(|| {
            let d = self.p1 - self.p0;
            d.y.atan2(d.x)
        })
    }
}

/// Options controlling region growth heuristics in the segment extractor.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LineOptions {
    /// Minimum gradient magnitude for seed pixels (Sobel units on [0,1] data).
    pub magnitude_threshold: f32,
    /// Orientation tolerance around the seed direction in degrees.
    pub angle_tolerance_deg: f32,
    /// Minimum accepted segment length in pixels at the working level.
    pub min_length_px: f32,
    /// Minimum fraction of region pixels aligned with the seed orientation.
    pub min_aligned_fraction: f32,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            magnitude_threshold: 0.05,
            angle_tolerance_deg: 22.5,
            min_length_px: 16.0,
            min_aligned_fraction: 0.6,
        }
    }
}
