//! Gnomonic (tangent-plane) projection.
//!
//! Star ↔ plane coordinates for a given tangent point, and the reverse
//! problem of finding the tangent point from a star and its plane
//! coordinates. Every routine comes in a spherical (`…s`) and a
//! direction-cosine (`…v`) form. Geometric trouble is reported through
//! [`TangentStatus`] or a solution count, never as an error.

use drishti_math::{Vector3, anp};

use crate::pipeline::RaDec;

/// Floor on the star/tangent-point cosine before it is treated as lying
/// on the plane limit.
const TINY: f64 = 1e-6;

/// Stand-in for the equatorial radius of a tangent point at a pole.
const POLE_RADIUS: f64 = 1e-20;

/// Where the star fell relative to the tangent plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TangentStatus {
    /// The star is in the tangent point's hemisphere.
    Ordinary,
    /// The star is within `TINY` of 90° from the tangent point.
    NearLimit,
    /// The antistar is on the tangent plane.
    AntistarOnPlane,
    /// The antistar is beyond the plane limit.
    AntistarBeyond,
}

impl TangentStatus {
    /// Numeric code: 0 ordinary, 1 near the limit, 2 antistar on the
    /// plane, 3 antistar beyond it.
    pub const fn code(self) -> u8 {
        match self {
            Self::Ordinary => 0,
            Self::NearLimit => 1,
            Self::AntistarOnPlane => 2,
            Self::AntistarBeyond => 3,
        }
    }

    pub const fn is_ordinary(self) -> bool {
        matches!(self, Self::Ordinary)
    }
}

/// Rectangular coordinates on the tangent plane (radians at the tangent
/// point).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneCoordinates {
    pub xi: f64,
    pub eta: f64,
    pub status: TangentStatus,
}

/// Tangent points solving the reverse problem. Zero, one or two of
/// the `solutions` are meaningful; see [`TangentPoints::useful`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentPoints<T> {
    pub solutions: [T; 2],
    pub count: usize,
}

impl<T> TangentPoints<T> {
    /// The solutions that actually exist.
    pub fn useful(&self) -> &[T] {
        &self.solutions[..self.count.min(2)]
    }
}

/// Classify the cosine `d` between star and tangent point, clamping it
/// away from zero.
fn classify(d: f64) -> (f64, TangentStatus) {
    if d > TINY {
        (d, TangentStatus::Ordinary)
    } else if d >= 0.0 {
        (TINY, TangentStatus::NearLimit)
    } else if d > -TINY {
        (-TINY, TangentStatus::AntistarOnPlane)
    } else {
        (d, TangentStatus::AntistarBeyond)
    }
}

/// Star `(a, b)` to plane coordinates about tangent point `(a0, b0)`.
pub fn tpxes(a: f64, b: f64, a0: f64, b0: f64) -> PlaneCoordinates {
    let (sb0, cb0) = b0.sin_cos();
    let (sb, cb) = b.sin_cos();
    let (sda, cda) = (a - a0).sin_cos();

    let (d, status) = classify(sb * sb0 + cb * cb0 * cda);
    PlaneCoordinates {
        xi: cb * sda / d,
        eta: (sb * cb0 - cb * sb0 * cda) / d,
        status,
    }
}

/// Star direction `v` to plane coordinates about tangent direction
/// `v0`. Both must be unit vectors.
pub fn tpxev(v: &Vector3, v0: &Vector3) -> PlaneCoordinates {
    let [x, y, z] = *v;
    let [mut x0, y0, z0] = *v0;

    let r2 = x0 * x0 + y0 * y0;
    let mut r = r2.sqrt();
    if r == 0.0 {
        r = POLE_RADIUS;
        x0 = r;
    }

    let w = x * x0 + y * y0;
    let (d, status) = classify(w + z * z0);
    let d = d * r;

    PlaneCoordinates {
        xi: (y * x0 - x * y0) / d,
        eta: (z * r2 - z0 * w) / d,
        status,
    }
}

/// Plane coordinates to star, spherical form.
pub fn tpsts(xi: f64, eta: f64, a0: f64, b0: f64) -> RaDec {
    let (sb0, cb0) = b0.sin_cos();
    let d = cb0 - eta * sb0;
    RaDec {
        ra: anp(xi.atan2(d) + a0),
        dec: (sb0 + eta * cb0).atan2(xi.hypot(d)),
    }
}

/// Plane coordinates to star, direction-cosine form. `v0` must be a
/// unit vector; the result is one.
pub fn tpstv(xi: f64, eta: f64, v0: &Vector3) -> Vector3 {
    let [mut x, y, z] = *v0;

    let mut r = x.hypot(y);
    if r == 0.0 {
        r = POLE_RADIUS;
        x = r;
    }

    let f = (1.0 + xi * xi + eta * eta).sqrt();
    [
        (x - (xi * y + eta * x * z) / r) / f,
        (y + (xi * x - eta * y * z) / r) / f,
        (z + eta * r) / f,
    ]
}

/// Tangent point(s) for star `(a, b)` with plane coordinates
/// `(xi, eta)`, spherical form.
///
/// One solution exists when the star's latitude is inside the circle
/// traced by the candidates, two when it is outside, none when the
/// plane coordinates are impossible for that star.
pub fn tpors(xi: f64, eta: f64, a: f64, b: f64) -> TangentPoints<RaDec> {
    let xi2 = xi * xi;
    let r = (1.0 + xi2 + eta * eta).sqrt();
    let (sb, cb) = b.sin_cos();
    let rsb = r * sb;
    let rcb = r * cb;
    let w2 = rcb * rcb - xi2;

    let empty = RaDec { ra: 0.0, dec: 0.0 };
    if w2 < 0.0 {
        return TangentPoints {
            solutions: [empty; 2],
            count: 0,
        };
    }

    let solve = |w: f64| {
        let s = rsb - eta * w;
        let c = rsb * eta + w;
        let w = if xi == 0.0 && w == 0.0 { 1.0 } else { w };
        RaDec {
            ra: anp(a - xi.atan2(w)),
            dec: s.atan2(c),
        }
    };

    let w = w2.sqrt();
    TangentPoints {
        solutions: [solve(w), solve(-w)],
        count: if rsb.abs() < 1.0 { 1 } else { 2 },
    }
}

/// Tangent point(s) for star direction `v` with plane coordinates
/// `(xi, eta)`, direction-cosine form. `v` must be a unit vector.
pub fn tporv(xi: f64, eta: f64, v: &Vector3) -> TangentPoints<Vector3> {
    let [x, y, z] = *v;
    let rxy2 = x * x + y * y;
    let xi2 = xi * xi;
    let eta2p1 = eta * eta + 1.0;
    let r = (xi2 + eta2p1).sqrt();
    let rsb = r * z;
    let rcb = r * rxy2.sqrt();
    let w2 = rcb * rcb - xi2;

    if w2 <= 0.0 {
        return TangentPoints {
            solutions: [[0.0; 3]; 2],
            count: 0,
        };
    }

    let solve = |w: f64| {
        let c = (rsb * eta + w) / (eta2p1 * (rxy2 * (w2 + xi2)).sqrt());
        [c * (x * w + y * xi), c * (y * w - x * xi), (rsb - eta * w) / eta2p1]
    };

    let w = w2.sqrt();
    TangentPoints {
        solutions: [solve(w), solve(-w)],
        count: if rsb.abs() < 1.0 { 1 } else { 2 },
    }
}
