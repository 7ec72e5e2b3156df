use super::vertex::{scaled_vertices, Frame, IPoint, Vertex, NOISE_A, NOISE_B};
use nalgebra::Point2;

/// Guards the crossing-ratio denominators against exact zero.
const RATIO_EPS: f64 = f64::EPSILON;
/// Guards the final gamut normalization against a zero scale product.
const SCALE_EPS: f64 = f32::MIN_POSITIVE as f64;

/// Computes the area common to both polygons, independent of vertex order or
/// winding direction.
///
/// Degenerate inputs (fewer than 3 points, a zero-extent bounding box on
/// either operand) yield 0. The result is deterministic: the symmetry
/// breaking applied to the scaled coordinates depends only on the operand
/// slot and vertex index.
pub fn intersection_area(a: &[Point2<f32>], b: &[Point2<f32>]) -> f64 {
    let Some(frame) = Frame::enclosing(a, b) else {
        return 0.0;
    };
    if a.len() < 3 || b.len() < 3 {
        log::debug!(
            "intersection_area: polygons need at least 3 points (got {} and {})",
            a.len(),
            b.len()
        );
        return 0.0;
    }
    let acc = Sweep::new(a, b, &frame).run();
    acc as f64 / (frame.scale[0] * frame.scale[1] + SCALE_EPS)
}

/// Working state of one intersection call: both scaled vertex chains and the
/// signed trapezoid accumulator, in gamut units.
struct Sweep {
    verts_a: Vec<Vertex>,
    verts_b: Vec<Vertex>,
    acc: i64,
}

impl Sweep {
    fn new(a: &[Point2<f32>], b: &[Point2<f32>], frame: &Frame) -> Self {
        Self {
            verts_a: scaled_vertices(a, frame, NOISE_A),
            verts_b: scaled_vertices(b, frame, NOISE_B),
            acc: 0,
        }
    }

    fn run(mut self) -> i64 {
        self.cross_pass();
        self.inness_pass(true);
        self.inness_pass(false);
        self.acc
    }

    /// Tests every range-overlapping edge pair for a genuine crossing and
    /// accumulates the two boundary contributions it induces.
    fn cross_pass(&mut self) {
        for ia in 0..self.verts_a.len() - 1 {
            for ib in 0..self.verts_b.len() - 1 {
                let a0 = self.verts_a[ia];
                let a1 = self.verts_a[ia + 1];
                let b0 = self.verts_b[ib];
                let b1 = self.verts_b[ib + 1];

                if !(a0.rx.overlaps(b0.rx) && a0.ry.overlaps(b0.ry)) {
                    continue;
                }

                // Endpoints of each segment must straddle the other's line.
                let s1 = -signed_area(a0.ip, b0.ip, b1.ip);
                let s2 = signed_area(a1.ip, b0.ip, b1.ip);
                if (s1 < 0) != (s2 < 0) {
                    continue;
                }
                let s3 = signed_area(b0.ip, a0.ip, a1.ip);
                let s4 = -signed_area(b1.ip, a0.ip, a1.ip);
                if (s3 < 0) != (s4 < 0) {
                    continue;
                }

                if s1 < 0 {
                    self.cross(
                        a0.ip, a1.ip, b0.ip, b1.ip, s1 as f64, s2 as f64, s3 as f64, s4 as f64,
                    );
                    self.verts_a[ia].in_count += 1;
                    self.verts_b[ib].in_count -= 1;
                } else {
                    self.cross(
                        b0.ip, b1.ip, a0.ip, a1.ip, s3 as f64, s4 as f64, s1 as f64, s2 as f64,
                    );
                    self.verts_a[ia].in_count -= 1;
                    self.verts_b[ib].in_count += 1;
                }
            }
        }
    }

    /// Splits both crossing edges at their common point and contributes the
    /// sub-segments that enter the other polygon.
    #[allow(clippy::too_many_arguments)]
    fn cross(&mut self, a: IPoint, b: IPoint, c: IPoint, d: IPoint, a1: f64, a2: f64, a3: f64, a4: f64) {
        let r1 = a1 / (a1 + a2 + RATIO_EPS);
        let r2 = a3 / (a3 + a4 + RATIO_EPS);

        contrib(
            &mut self.acc,
            a.x + (r1 * f64::from(b.x - a.x)).round() as i32,
            a.y + (r1 * f64::from(b.y - a.y)).round() as i32,
            b.x,
            b.y,
            1,
        );
        contrib(
            &mut self.acc,
            d.x,
            d.y,
            c.x + (r2 * f64::from(d.x - c.x)).round() as i32,
            c.y + (r2 * f64::from(d.y - c.y)).round() as i32,
            1,
        );
    }

    /// Recovers the contribution of chain edges lying inside the other
    /// polygon without crossing its boundary. A ray cast from the chain's
    /// first vertex fixes the initial inside count; the per-edge crossing
    /// counters propagate it down the chain.
    fn inness_pass(&mut self, a_is_chain: bool) {
        let (chain, other) = if a_is_chain {
            (&self.verts_a, &self.verts_b)
        } else {
            (&self.verts_b, &self.verts_a)
        };

        let p = chain[0].ip;
        let mut s = 0i32;
        for idx in (0..other.len() - 1).rev() {
            let e0 = other[idx];
            let e1 = other[idx + 1];
            if e0.rx.min < p.x && p.x < e0.rx.max {
                let sgn = 0 < signed_area(p, e0.ip, e1.ip);
                if sgn == (e0.ip.x < e1.ip.x) {
                    s += if sgn { -1 } else { 1 };
                }
            }
        }

        let mut acc = 0i64;
        for idx in 0..chain.len() - 1 {
            if s != 0 {
                let f = chain[idx].ip;
                let t = chain[idx + 1].ip;
                contrib(&mut acc, f.x, f.y, t.x, t.y, s);
            }
            s += chain[idx].in_count;
        }
        self.acc += acc;
    }
}

/// Signed trapezoid contribution of one directed boundary segment.
#[inline]
fn contrib(acc: &mut i64, fx: i32, fy: i32, tx: i32, ty: i32, w: i32) {
    *acc += i64::from(w) * i64::from(tx - fx) * i64::from(ty + fy) / 2;
}

/// Twice the signed area of the triangle (a, p, q), exact in 64-bit.
#[inline]
fn signed_area(a: IPoint, p: IPoint, q: IPoint) -> i64 {
    i64::from(p.x) * i64::from(q.y) - i64::from(p.y) * i64::from(q.x)
        + i64::from(a.x) * i64::from(p.y - q.y)
        + i64::from(a.y) * i64::from(q.x - p.x)
}
