//! Parameter types configuring the detector stages.
//!
//! This module groups knobs for segment extraction, collinear bundling,
//! family assignment, and candidate filtering.
//!
//! Defaults aim for robust behaviour on document photos at common working
//! resolutions. For tuning, start with the segment magnitude threshold and
//! the area-ratio gates.

use crate::segments::LineOptions;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters controlling the candidate pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PageParams {
    /// Segment extraction knobs applied at the working resolution.
    pub lines: LineOptions,
    /// Collinear bundling applied to the extracted segments.
    pub bundling: BundlingParams,
    /// Strongest line bundles retained per orientation family.
    pub max_lines_per_family: usize,
    /// Maximum rectangularity badness (max corner |cos|) for a candidate.
    pub max_corner_cosine: f32,
    /// Minimum candidate area relative to the working image area.
    pub min_area_ratio: f64,
    /// Maximum candidate area relative to the working image area.
    pub max_area_ratio: f64,
    /// Minimum candidate edge span relative to the smaller image dimension.
    pub min_span_ratio: f32,
    /// Fraction of the working dimensions by which synthesized corners may
    /// overhang the frame (clipped pages still produce partial outlines).
    pub corner_margin: f32,
    /// Overlap ratio above which two candidates count as the same page.
    pub duplicate_overlap: f64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            lines: LineOptions::default(),
            bundling: BundlingParams::default(),
            max_lines_per_family: 6,
            max_corner_cosine: 0.4,
            min_area_ratio: 0.05,
            max_area_ratio: 0.95,
            min_span_ratio: 0.3,
            corner_margin: 0.05,
            duplicate_overlap: 0.9,
        }
    }
}

/// Bundling parameters shared by the detector stages.
///
/// - `orientation_tol_deg`: angular proximity used when aggregating lines.
/// - `merge_dist_px`: maximum |c| offset difference in the normal form
///   `ax + by + c = 0` to consider two constraints co-located.
/// - `min_weight`: minimum segment strength required to contribute.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BundlingParams {
    pub orientation_tol_deg: f32,
    pub merge_dist_px: f32,
    pub min_weight: f32,
}

impl Default for BundlingParams {
    fn default() -> Self {
        Self {
            orientation_tol_deg: 22.5,
            merge_dist_px: 2.5,
            min_weight: 3.0,
        }
    }
}
