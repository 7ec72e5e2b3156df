//! Robust intersection area of two arbitrary polygons.
//!
//! Overview
//! - Both polygons are mapped into a shared integer coordinate frame: the
//!   union bounding box is rescaled onto a fixed gamut of 5×10⁸ units per
//!   axis, giving every edge test exact 64-bit integer arithmetic.
//! - The three least-significant bits of every scaled coordinate are replaced
//!   by a deterministic pattern distinguishing the two operands and the
//!   parity of each vertex index. This breaks exact coincidences (shared
//!   corners, touching or collinear edges) that would otherwise make the
//!   sign tests below ambiguous, while staying far below the resolution of
//!   the gamut.
//! - Every edge pair whose x- and y-ranges overlap is tested for a genuine
//!   crossing via four signed triangle areas; a crossing contributes two
//!   signed trapezoid areas (one per sub-segment entering the other polygon)
//!   and updates per-edge crossing counters.
//! - Two "inness" passes (one per operand) recover the contribution of edges
//!   that lie entirely inside the other polygon: a ray cast from the chain's
//!   first vertex fixes the initial inside count, which the crossing counters
//!   then propagate down the chain.
//! - The signed accumulator, divided by the product of the axis scales,
//!   yields the intersection area in the original coordinate units.
//!
//! The computation is a pure function of its inputs: all scale factors and
//! vertex tables live on the stack of one call, so concurrent calls on
//! independent polygon pairs need no synchronization. Degenerate inputs
//! (fewer than 3 points, zero-extent bounding boxes) yield area 0; the
//! routine never fails and never produces NaN or infinity.
//!
//! The jitter is deterministic by construction: identical inputs always map
//! to identical integer geometry and therefore identical results.

mod sweep;
mod vertex;

pub use sweep::intersection_area;
