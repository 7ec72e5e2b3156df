//! Angle and direction utilities shared by the extractor and the polygon
//! quality metrics.

use nalgebra::Vector2;

/// Normalizes an angle into the range [0, π).
#[inline]
pub fn normalize_half_pi(angle: f32) -> f32 {
    let mut norm = angle.rem_euclid(std::f32::consts::PI);
    if norm >= std::f32::consts::PI {
        norm -= std::f32::consts::PI;
    }
    if norm >= std::f32::consts::PI - 1e-6 {
        0.0
    } else {
        norm
    }
}

/// Computes the smallest unsigned angular difference between two angles,
/// treating antipodal directions as equivalent (i.e. π apart → 0).
#[inline]
pub fn angular_difference(a: f32, b: f32) -> f32 {
    let mut diff = (a - b).abs();
    if diff > std::f32::consts::PI {
        diff = diff.rem_euclid(std::f32::consts::PI);
    }
    if diff > std::f32::consts::FRAC_PI_2 {
        std::f32::consts::PI - diff
    } else {
        diff
    }
}

/// Cosine of the angle between two 2D vectors, clamped to [-1, 1].
/// Degenerate (near-zero) vectors are treated as unit length.
#[inline]
pub fn cosine_between(a: &Vector2<f32>, b: &Vector2<f32>) -> f32 {
    let na = a.norm().max(1e-6);
    let nb = b.norm().max(1e-6);
    (a.dot(b) / (na * nb)).clamp(-1.0, 1.0)
}
