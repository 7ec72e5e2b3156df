#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod image;
pub mod intersect;
pub mod polygon;
pub mod types;

// Lower-level building blocks, public for tools and experiments.
pub mod angle;
pub mod config;
pub mod edges;
pub mod pyramid;
pub mod segments;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{PageDetector, PageParams};
pub use crate::types::PageResult;

// Geometry core.
pub use crate::intersect::intersection_area;
pub use crate::polygon::{Box2, PolyRect, RotatedRect};

// Detailed reporting.
pub use crate::diagnostics::{DetailedDetection, DetectionDiagnostics};

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::polygon::PolyRect;
    pub use crate::{PageDetector, PageParams, PageResult};
}
