//! Detector pipeline driving page-candidate extraction end-to-end.

use super::families::{split_families, FamilySplit};
use super::params::PageParams;
use crate::diagnostics::{CandidateDiagnostics, DetailedDetection, DetectionDiagnostics};
use crate::image::ImageU8;
use crate::polygon::PolyRect;
use crate::pyramid::{Pyramid, PyramidOptions};
use crate::segments::{bundle_segments, extract_segments, Bundle};
use crate::types::PageResult;
use log::debug;
use nalgebra::{Point2, Vector3};
use std::time::Instant;

/// Rejects corner synthesis from nearly parallel line pairs.
const MIN_MEET_W: f32 = 1e-3;

/// Line-based page-boundary detector.
///
/// The detector is stateless between frames: every call works on its own
/// buffers, so one instance can serve multiple threads for disjoint images.
pub struct PageDetector {
    params: PageParams,
}

impl PageDetector {
    pub fn new(params: PageParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PageParams {
        &self.params
    }

    /// Ranked candidate page outlines (largest first) in input coordinates.
    ///
    /// `scale` is the working-resolution factor; it is snapped to the
    /// nearest power-of-two downscale.
    pub fn candidates(&self, image: ImageU8<'_>, scale: f32) -> Vec<PolyRect> {
        self.detect_with_diagnostics(image, scale).candidates
    }

    /// Runs the pipeline and summarizes the best candidate.
    pub fn detect(&self, image: ImageU8<'_>, scale: f32) -> PageResult {
        self.detect_with_diagnostics(image, scale).result
    }

    /// Runs the pipeline and reports per-stage diagnostics alongside the
    /// result.
    pub fn detect_with_diagnostics(&self, image: ImageU8<'_>, scale: f32) -> DetailedDetection {
        let t0 = Instant::now();
        let mut diag = DetectionDiagnostics {
            input_width: image.w,
            input_height: image.h,
            ..Default::default()
        };

        // 1) Working resolution via the pyramid.
        let levels = level_count_for_scale(scale);
        let t = Instant::now();
        let pyramid = Pyramid::build_u8(image.clone(), PyramidOptions::new(levels));
        diag.pyramid_build_ms = t.elapsed().as_secs_f64() * 1000.0;
        let working = pyramid.levels.last().expect("pyramid has at least one level");
        diag.pyramid_levels = levels;
        diag.working_width = working.w;
        diag.working_height = working.h;

        // 2) Line segments on the working level.
        let t = Instant::now();
        let segments = extract_segments(working, &self.params.lines);
        diag.extract_ms = t.elapsed().as_secs_f64() * 1000.0;
        diag.segments_total = segments.len();

        // 3) Collinear bundles.
        let t = Instant::now();
        let bundling = &self.params.bundling;
        let bundles = bundle_segments(
            &segments,
            bundling.orientation_tol_deg.to_radians(),
            bundling.merge_dist_px,
            bundling.min_weight,
        );
        diag.bundling_ms = t.elapsed().as_secs_f64() * 1000.0;
        diag.bundles_total = bundles.len();

        // 4) Two dominant orientation families.
        let tol = self.params.lines.angle_tolerance_deg.to_radians();
        let Some(split) = split_families(&bundles, tol) else {
            debug!(
                "PageDetector: no dominant line families (segments={} bundles={})",
                segments.len(),
                bundles.len()
            );
            diag.total_latency_ms = t0.elapsed().as_secs_f64() * 1000.0;
            return DetailedDetection {
                result: PageResult {
                    latency_ms: diag.total_latency_ms,
                    ..Default::default()
                },
                candidates: Vec::new(),
                diagnostics: diag,
            };
        };
        diag.family_u_count = split.u.len();
        diag.family_v_count = split.v.len();
        diag.dominant_angles_deg =
            Some([split.theta_u.to_degrees(), split.theta_v.to_degrees()]);

        // 5) Quadrilateral synthesis + filtering + de-duplication.
        let t = Instant::now();
        let mut candidates = self.synthesize_quads(&bundles, &split, working.w, working.h, &mut diag);
        self.deduplicate(&mut candidates, &mut diag);
        diag.synthesis_ms = t.elapsed().as_secs_f64() * 1000.0;

        // 6) Back to input coordinates.
        let upscale = image.w as f32 / working.w as f32;
        for poly in &mut candidates {
            poly.scale(upscale);
        }

        diag.candidates = candidates
            .iter()
            .map(|poly| CandidateDiagnostics {
                corners: poly.points().iter().map(|p| [p.x, p.y]).collect(),
                area: poly.area(),
                max_cosine: poly.max_cosine(),
            })
            .collect();

        diag.total_latency_ms = t0.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "PageDetector: segments={} bundles={} quads={} kept={} latency_ms={:.3}",
            diag.segments_total,
            diag.bundles_total,
            diag.quads_synthesized,
            candidates.len(),
            diag.total_latency_ms
        );

        let result = summarize(&candidates, image.w, image.h, diag.total_latency_ms);
        DetailedDetection {
            result,
            candidates,
            diagnostics: diag,
        }
    }

    /// Builds candidate quads from every pair of lines of each family and
    /// applies the geometric gates.
    fn synthesize_quads(
        &self,
        bundles: &[Bundle],
        split: &FamilySplit,
        width: usize,
        height: usize,
        diag: &mut DetectionDiagnostics,
    ) -> Vec<PolyRect> {
        let u_lines = strongest_lines(bundles, &split.u, self.params.max_lines_per_family);
        let v_lines = strongest_lines(bundles, &split.v, self.params.max_lines_per_family);

        let margin_x = self.params.corner_margin * width as f32;
        let margin_y = self.params.corner_margin * height as f32;
        let image_area = (width * height) as f64;
        let min_span = self.params.min_span_ratio * width.min(height) as f32;

        let mut kept = Vec::new();
        for (i, u1) in u_lines.iter().enumerate() {
            for u2 in &u_lines[i + 1..] {
                for (j, v1) in v_lines.iter().enumerate() {
                    for v2 in &v_lines[j + 1..] {
                        diag.quads_synthesized += 1;
                        let corners = [
                            meet(u1, v1),
                            meet(u1, v2),
                            meet(u2, v2),
                            meet(u2, v1),
                        ];
                        let mut pts = Vec::with_capacity(4);
                        for corner in corners {
                            let Some(p) = corner else {
                                break;
                            };
                            if p.x < -margin_x
                                || p.y < -margin_y
                                || p.x > width as f32 + margin_x
                                || p.y > height as f32 + margin_y
                            {
                                break;
                            }
                            pts.push(p);
                        }
                        if pts.len() < 4 {
                            continue;
                        }

                        let poly = PolyRect::new(pts);
                        if poly.max_cosine() > self.params.max_corner_cosine {
                            continue;
                        }
                        if poly.max_edge_length() < min_span {
                            continue;
                        }
                        let area_ratio = poly.area() / image_area;
                        if area_ratio < self.params.min_area_ratio
                            || area_ratio > self.params.max_area_ratio
                        {
                            continue;
                        }
                        kept.push(poly);
                    }
                }
            }
        }
        diag.quads_filtered = kept.len();
        kept
    }

    /// Sorts by area (largest first) and greedily drops candidates that
    /// mostly overlap an already-kept one.
    fn deduplicate(&self, candidates: &mut Vec<PolyRect>, diag: &mut DetectionDiagnostics) {
        candidates.sort_by(|a, b| PolyRect::compare_by_area(b, a));
        let mut kept: Vec<PolyRect> = Vec::new();
        for poly in candidates.drain(..) {
            let duplicate = kept
                .iter()
                .any(|k| k.overlap_ratio(&poly) > self.params.duplicate_overlap);
            if duplicate {
                diag.duplicates_merged += 1;
            } else {
                kept.push(poly);
            }
        }
        *candidates = kept;
    }
}

/// Best-candidate summary in input coordinates.
fn summarize(candidates: &[PolyRect], width: usize, height: usize, latency_ms: f64) -> PageResult {
    let Some(best) = candidates.first() else {
        return PageResult {
            latency_ms,
            ..Default::default()
        };
    };
    PageResult {
        found: true,
        corners: best.points().iter().map(|p| [p.x, p.y]).collect(),
        rectangularity: best.max_cosine(),
        area_ratio: (best.area() / (width * height) as f64) as f32,
        candidates: candidates.len(),
        latency_ms,
    }
}

/// Indices resolved to lines, strongest bundles first, capped at `limit`.
fn strongest_lines(bundles: &[Bundle], indices: &[usize], limit: usize) -> Vec<Vector3<f32>> {
    let mut order: Vec<usize> = indices.to_vec();
    order.sort_by(|a, b| {
        bundles[*b]
            .weight
            .partial_cmp(&bundles[*a].weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
        .into_iter()
        .take(limit)
        .map(|i| bundles[i].line)
        .collect()
}

/// Intersection of two homogeneous lines; `None` when nearly parallel.
fn meet(a: &Vector3<f32>, b: &Vector3<f32>) -> Option<Point2<f32>> {
    let h = a.cross(b);
    if h.z.abs() < MIN_MEET_W {
        return None;
    }
    Some(Point2::new(h.x / h.z, h.y / h.z))
}

/// Number of pyramid levels realizing the requested working scale, snapped
/// to powers of two.
fn level_count_for_scale(scale: f32) -> usize {
    if !(scale > 0.0) || scale >= 1.0 {
        return 1;
    }
    (-scale.log2()).round() as usize + 1
}
