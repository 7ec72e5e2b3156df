use serde::Serialize;

/// Summary of one detection run, describing the best-ranked candidate.
///
/// `corners` are in input-image coordinates and empty when `found` is false.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PageResult {
    pub found: bool,
    pub corners: Vec<[f32; 2]>,
    /// Rectangularity badness of the winner: max |cos| over its corner
    /// angles, 0 for a perfect rectangle.
    pub rectangularity: f32,
    /// Winner area relative to the input image area.
    pub area_ratio: f32,
    /// Number of candidates that survived filtering and de-duplication.
    pub candidates: usize,
    pub latency_ms: f64,
}
