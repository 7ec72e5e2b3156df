//! Merging of near-collinear segments into weighted line constraints.

use crate::segments::Segment;
use nalgebra::{Point2, Vector3};

const EPS: f32 = 1e-6;

/// Aggregated constraint built by merging near-collinear segments.
#[derive(Clone, Debug)]
pub struct Bundle {
    /// Normal form ax + by + c = 0 with sqrt(a^2+b^2)=1.
    pub line: Vector3<f32>,
    pub center: Point2<f32>,
    pub weight: f32,
}

impl Bundle {
    /// Unit tangent direction of the bundle line.
    pub fn tangent(&self) -> [f32; 2] {
        [-self.line.y, self.line.x]
    }

    /// Tangent orientation folded into [0, π).
    pub fn theta(&self) -> f32 {
        crate::angle::normalize_half_pi(self.line.x.atan2(-self.line.y))
    }
}

/// Group segments into bundled line constraints using orientation and offset
/// thresholds. Segments weaker than `min_weight` are dropped.
pub fn bundle_segments(
    segs: &[Segment],
    orientation_tol: f32,
    dist_tol: f32,
    min_weight: f32,
) -> Vec<Bundle> {
    let mut bundles: Vec<Bundle> = Vec::new();
    for seg in segs {
        let weight = seg.strength;
        if weight < min_weight {
            continue;
        }
        let line = seg.line();
        let mut placed = false;
        for existing in bundles.iter_mut() {
            let dot = existing.line.x * line.x + existing.line.y * line.y;
            // Flip to the same half-space before comparing offsets.
            let adj_line = if dot < 0.0 { -line } else { line };
            let dot_norm =
                (existing.line.x * adj_line.x + existing.line.y * adj_line.y).clamp(-1.0, 1.0);
            let angle = dot_norm.acos();
            let dist = (existing.line.z - adj_line.z).abs();
            if angle <= orientation_tol && dist <= dist_tol {
                merge_bundle(existing, &adj_line, seg, weight);
                placed = true;
                break;
            }
        }
        if !placed {
            bundles.push(Bundle {
                line,
                center: seg.midpoint(),
                weight,
            });
        }
    }
    bundles
}

fn merge_bundle(target: &mut Bundle, line: &Vector3<f32>, seg: &Segment, weight: f32) {
    let total = target.weight + weight;
    if total <= EPS {
        return;
    }

    target.line = (target.line * target.weight + line * weight) / total;
    let norm = (target.line.x * target.line.x + target.line.y * target.line.y)
        .sqrt()
        .max(EPS);
    target.line /= norm;

    let center = seg.midpoint();
    target.center = Point2::new(
        (target.center.x * target.weight + center.x * weight) / total,
        (target.center.y * target.weight + center.y * weight) / total,
    );
    target.weight = total;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal_segment(y: f32, x0: f32, x1: f32, strength: f32) -> Segment {
        Segment::new(Point2::new(x0, y), Point2::new(x1, y), 1.0, strength)
    }

    #[test]
    fn collinear_segments_merge_into_one_bundle() {
        let segs = vec![
            horizontal_segment(10.0, 0.0, 40.0, 40.0),
            horizontal_segment(10.3, 45.0, 90.0, 45.0),
        ];
        let bundles = bundle_segments(&segs, (5.0f32).to_radians(), 1.5, 1.0);
        assert_eq!(bundles.len(), 1);
        assert!((bundles[0].weight - 85.0).abs() < 1e-3);
        let t = bundles[0].tangent();
        assert!(t[0].abs() > 0.99, "tangent should stay horizontal: {t:?}");
    }

    #[test]
    fn distant_parallel_lines_stay_separate() {
        let segs = vec![
            horizontal_segment(10.0, 0.0, 40.0, 40.0),
            horizontal_segment(60.0, 0.0, 40.0, 40.0),
        ];
        let bundles = bundle_segments(&segs, (5.0f32).to_radians(), 1.5, 1.0);
        assert_eq!(bundles.len(), 2);
    }

    #[test]
    fn weak_segments_are_dropped() {
        let segs = vec![horizontal_segment(10.0, 0.0, 40.0, 0.5)];
        let bundles = bundle_segments(&segs, (5.0f32).to_radians(), 1.5, 3.0);
        assert!(bundles.is_empty());
    }
}
