//! Lightweight line-segment extraction for page edges.
//!
//! This module implements a fast, edge-based line-segment extractor tailored
//! for finding the long straight borders of a document page. The algorithm
//! performs:
//!
//! - Gradient computation (via `edges::sobel_gradients`), producing per-pixel
//!   `gx`, `gy` and magnitude.
//! - Region growing from seeds using orientation consistency: pixels whose
//!   gradient orientation is within a tolerance of the seed are grown into a
//!   region, while enforcing a minimum gradient magnitude.
//! - PCA line fitting: the pixel coordinates of a grown region are summarized
//!   online and a 2x2 covariance matrix is eigendecomposed to obtain the
//!   principal direction.
//! - Endpoint projection and normal form: by projecting region points onto the
//!   principal axis we obtain endpoints `p0` and `p1`. The line is available in
//!   normalized normal form `ax + by + c = 0` with `sqrt(a^2+b^2)=1`.
//! - Significance tests: a minimum region size, a minimum length, and a
//!   minimum fraction of pixels aligned with the seed orientation.
//!
//! Output segments carry `strength = length * avg_mag`, the saliency weight
//! used by bundling and family assignment downstream.
//!
//! Orientation is taken modulo pi (180°): a page border is the same line no
//! matter which side is brighter. See `angle::normalize_half_pi`.

mod extractor;
mod types;

pub mod bundling;

pub use bundling::{bundle_segments, Bundle};
pub use types::{LineOptions, Segment};

use crate::image::ImageF32;

/// Extract line segments from one grayscale level.
pub fn extract_segments(l: &ImageF32, options: &LineOptions) -> Vec<Segment> {
    extractor::LineExtractor::new(l, options).extract()
}
