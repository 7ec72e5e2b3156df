//! Serializable per-stage diagnostics for one detection run.

use crate::polygon::PolyRect;
use crate::types::PageResult;
use serde::Serialize;

/// One surviving candidate, summarized for reports.
#[derive(Clone, Debug, Serialize)]
pub struct CandidateDiagnostics {
    pub corners: Vec<[f32; 2]>,
    pub area: f64,
    pub max_cosine: f32,
}

/// Stage counts and timings collected while the pipeline runs.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DetectionDiagnostics {
    pub input_width: usize,
    pub input_height: usize,
    pub working_width: usize,
    pub working_height: usize,
    pub pyramid_levels: usize,
    pub pyramid_build_ms: f64,
    pub extract_ms: f64,
    pub bundling_ms: f64,
    pub synthesis_ms: f64,
    pub segments_total: usize,
    pub bundles_total: usize,
    pub family_u_count: usize,
    pub family_v_count: usize,
    /// Dominant family orientations, absent when no split was found.
    pub dominant_angles_deg: Option<[f32; 2]>,
    pub quads_synthesized: usize,
    pub quads_filtered: usize,
    pub duplicates_merged: usize,
    pub candidates: Vec<CandidateDiagnostics>,
    pub total_latency_ms: f64,
}

/// Full detection output: summary, ranked candidates (largest first, in
/// input coordinates) and the per-stage diagnostics.
#[derive(Clone, Debug, Serialize)]
pub struct DetailedDetection {
    pub result: PageResult,
    pub candidates: Vec<PolyRect>,
    pub diagnostics: DetectionDiagnostics,
}
