//! Candidate polygon wrapper and derived quality metrics.
//!
//! [`PolyRect`] represents one candidate page outline (typically a
//! near-quadrilateral) and exposes the metrics the detector ranks and
//! filters by: rectangularity (max corner cosine), exact area via the
//! intersection engine, centroid, bounding boxes, convex containment and
//! pairwise overlap. Derived scalars are cached lazily and every point
//! mutation drops all caches.

mod bbox;
mod hull;
mod rect;
mod rotated;

pub use bbox::Box2;
pub use hull::convex_hull;
pub use rect::PolyRect;
pub use rotated::{min_area_rect, RotatedRect};
