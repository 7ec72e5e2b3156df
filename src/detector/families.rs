//! Dominant-orientation analysis: circular histogram over [0, π) and the
//! split of line bundles into two families.

use crate::angle::{angular_difference, normalize_half_pi};
use crate::segments::Bundle;

/// Fewer bundles than this per family cannot bound a quadrilateral.
const MIN_FAMILY: usize = 2;
const DEFAULT_BINS: usize = 36;

/// Circular histogram over [0, π) used to find dominant line orientations.
pub(super) struct OrientationHistogram {
    bins: Vec<f32>,
    bin_width: f32,
}

impl OrientationHistogram {
    pub(super) fn new(num_bins: usize) -> Self {
        assert!(
            num_bins > 0,
            "orientation histogram requires at least one bin"
        );
        OrientationHistogram {
            bins: vec![0.0; num_bins],
            bin_width: std::f32::consts::PI / num_bins as f32,
        }
    }

    pub(super) fn accumulate(&mut self, angle: f32, weight: f32) {
        if !angle.is_finite() {
            return;
        }
        let mut idx = (angle / self.bin_width) as usize;
        if idx >= self.bins.len() {
            idx = self.bins.len() - 1;
        }
        self.bins[idx] += weight.max(0.0);
    }

    /// Applies a circular [1, 2, 1]/4 smoothing kernel to reduce bin
    /// quantization noise.
    pub(super) fn smooth_121(&mut self) {
        let n = self.bins.len();
        if n <= 1 {
            return;
        }
        let mut smoothed = vec![0.0f32; n];
        for (i, dst) in smoothed.iter_mut().enumerate() {
            let prev = self.bins[(i + n - 1) % n];
            let curr = self.bins[i];
            let next = self.bins[(i + 1) % n];
            *dst = (prev + 2.0 * curr + next) * 0.25;
        }
        self.bins = smoothed;
    }

    /// Finds the two dominant peaks separated by at least `min_separation_rad`.
    pub(super) fn find_two_peaks(&self, min_separation_rad: f32) -> Option<(usize, usize)> {
        let first = self.argmax()?;
        if self.bins[first] <= 0.0 {
            return None;
        }

        let n = self.bins.len();
        let min_sep_bins = (min_separation_rad / self.bin_width).ceil().max(0.0) as usize;
        if min_sep_bins >= n {
            return None;
        }

        let mut suppressed = vec![false; n];
        for di in 0..=min_sep_bins {
            suppressed[(first + di) % n] = true;
            suppressed[(first + n - di) % n] = true;
        }

        let mut second_idx = None;
        let mut best_val = f32::MIN;
        for (i, &val) in self.bins.iter().enumerate() {
            if suppressed[i] || val <= 0.0 {
                continue;
            }
            if val > best_val {
                best_val = val;
                second_idx = Some(i);
            }
        }
        second_idx.map(|second| (first, second))
    }

    /// Refines the angle around a peak by a circular mean over a window.
    pub(super) fn refined_angle(&self, index: usize, half_window: usize) -> f32 {
        let n = self.bins.len();
        let mut sx = 0.0f32;
        let mut sy = 0.0f32;
        let mut total = 0.0f32;
        let half = half_window.min(n.saturating_sub(1));
        for offset in -(half as isize)..=(half as isize) {
            let idx = ((index as isize + offset).rem_euclid(n as isize)) as usize;
            let weight = self.bins[idx];
            if weight <= 0.0 {
                continue;
            }
            total += weight;
            let angle = ((idx as f32) + 0.5) * self.bin_width;
            // Doubling the angle maps the [0, π) circle onto a full turn.
            let doubled = angle * 2.0;
            sx += weight * doubled.cos();
            sy += weight * doubled.sin();
        }
        if total <= 0.0 || (sx * sx + sy * sy) <= 1e-12 {
            return ((index as f32) + 0.5) * self.bin_width;
        }
        let mut mean = 0.5 * sy.atan2(sx);
        if mean < 0.0 {
            mean += std::f32::consts::PI;
        }
        normalize_half_pi(mean)
    }

    fn argmax(&self) -> Option<usize> {
        let mut best_idx = None;
        let mut best_val = f32::MIN;
        for (i, &val) in self.bins.iter().enumerate() {
            if val > best_val {
                best_val = val;
                best_idx = Some(i);
            }
        }
        best_idx
    }
}

/// Bundle indices assigned to the two dominant orientation families.
pub(super) struct FamilySplit {
    pub theta_u: f32,
    pub theta_v: f32,
    pub u: Vec<usize>,
    pub v: Vec<usize>,
}

/// Splits bundles into two orientation families. `tol` is the assignment
/// tolerance around each family angle; peaks closer than `2 * tol` are
/// rejected as a single blurred family.
pub(super) fn split_families(bundles: &[Bundle], tol: f32) -> Option<FamilySplit> {
    let mut hist = OrientationHistogram::new(DEFAULT_BINS);
    let thetas: Vec<f32> = bundles.iter().map(|b| b.theta()).collect();
    for (bundle, &theta) in bundles.iter().zip(&thetas) {
        hist.accumulate(theta, bundle.weight.max(1.0));
    }
    hist.smooth_121();

    let (first_idx, second_idx) = hist.find_two_peaks(2.0 * tol)?;
    let theta_u = hist.refined_angle(first_idx, 1);
    let theta_v = hist.refined_angle(second_idx, 1);

    let mut u = Vec::new();
    let mut v = Vec::new();
    for (i, &theta) in thetas.iter().enumerate() {
        let du = angular_difference(theta, theta_u);
        let dv = angular_difference(theta, theta_v);
        if du < dv && du <= tol {
            u.push(i);
        } else if dv < du && dv <= tol {
            v.push(i);
        }
    }
    if u.len() < MIN_FAMILY || v.len() < MIN_FAMILY {
        log::debug!(
            "family split: insufficient support u={} v={}",
            u.len(),
            v.len()
        );
        return None;
    }

    Some(FamilySplit {
        theta_u,
        theta_v,
        u,
        v,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::Segment;
    use nalgebra::Point2;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn find_two_peaks_basic() {
        let mut hist = OrientationHistogram::new(12);
        hist.accumulate(0.0, 5.0);
        hist.accumulate(FRAC_PI_2, 4.0);
        hist.smooth_121();
        let (p0, p1) = hist.find_two_peaks((20.0f32).to_radians()).expect("peaks");
        assert_ne!(p0, p1);
    }

    #[test]
    fn single_orientation_has_no_second_peak() {
        let mut hist = OrientationHistogram::new(12);
        hist.accumulate(0.1, 5.0);
        hist.accumulate(0.12, 4.0);
        hist.smooth_121();
        assert!(hist.find_two_peaks((30.0f32).to_radians()).is_none());
    }

    #[test]
    fn refined_angle_interpolates() {
        let mut hist = OrientationHistogram::new(18);
        let bw = std::f32::consts::PI / 18.0;
        let target = bw * 4.3;
        hist.accumulate(target, 2.0);
        hist.accumulate(target + bw * 0.5, 1.0);
        hist.smooth_121();
        let refined = hist.refined_angle(4, 1);
        let expected = normalize_half_pi(target);
        assert!(
            (refined - expected).abs() < bw * 0.5,
            "refined={refined} expected={expected}"
        );
    }

    fn bundle_from(p0: (f32, f32), p1: (f32, f32)) -> Bundle {
        let seg = Segment::new(
            Point2::new(p0.0, p0.1),
            Point2::new(p1.0, p1.1),
            1.0,
            50.0,
        );
        Bundle {
            line: seg.line(),
            center: seg.midpoint(),
            weight: seg.strength,
        }
    }

    #[test]
    fn splits_horizontal_and_vertical_bundles() {
        let bundles = vec![
            bundle_from((0.0, 10.0), (100.0, 10.0)),
            bundle_from((0.0, 90.0), (100.0, 90.0)),
            bundle_from((10.0, 0.0), (10.0, 100.0)),
            bundle_from((90.0, 0.0), (90.0, 100.0)),
        ];
        let split = split_families(&bundles, (22.5f32).to_radians()).expect("split");
        assert_eq!(split.u.len(), 2);
        assert_eq!(split.v.len(), 2);
        let sep = angular_difference(split.theta_u, split.theta_v);
        assert!((sep - FRAC_PI_2).abs() < 0.2, "separation={sep}");
    }
}
