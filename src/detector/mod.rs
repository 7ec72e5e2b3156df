//! Page detector orchestrating a line-based candidate pipeline.
//!
//! Overview
//! - Reduces the input to a working resolution with the grayscale pyramid
//!   (the requested scale is snapped to a power-of-two downscale).
//! - Extracts line segments on the working level with the region-growing
//!   extractor and merges near-collinear segments into weighted bundles.
//! - Splits the bundles into two dominant orientation families using a
//!   smoothed circular histogram over `[0, π)`.
//! - Synthesizes candidate quadrilaterals from pairs of lines of each family
//!   (homogeneous cross products), keeping quads whose corners fall inside
//!   the frame with a small margin.
//! - Filters candidates by rectangularity, relative area and edge span,
//!   de-duplicates by pairwise overlap ratio, and ranks the survivors by
//!   area, largest first.
//! - Rescales the winners back to input coordinates.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and CLI.
//! - `families` – dominant-orientation histogram and family assignment.
//! - `pipeline` – the main [`PageDetector`] implementation.
//!
//! Key Ideas
//! - A page border's orientation is ambiguous modulo π; the histogram and
//!   the family assignment work in `[0, π)`.
//! - All candidate ranking is built on the exact intersection engine:
//!   candidate area is the polygon's self-overlap and de-duplication uses
//!   the pairwise overlap ratio.

mod families;
mod pipeline;

pub mod params;

pub use params::{BundlingParams, PageParams};
pub use pipeline::PageDetector;
