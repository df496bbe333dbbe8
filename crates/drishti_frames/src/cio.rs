//! CIO locator s and the celestial-to-intermediate matrix.
//!
//! The CIO locator positions the Celestial Intermediate Origin on the
//! equator of the CIP. It is evaluated as a polynomial in t whose
//! coefficients carry periodic terms (orders 0 to 4), minus the product
//! `x·y/2` of the CIP coordinates.
//!
//! The IAU 2000 (`s00`) and IAU 2006 (`s06`) series share their periodic
//! arguments and most amplitudes; they differ in the polynomial and a few
//! leading terms.
//!
//! Sources: Capitaine N. et al., A&A 400, 1145 (2003) and A&A 412, 567
//! (2003); IERS Conventions 2003; Capitaine & Wallace, A&A 450, 855 (2006).
//! Public domain (IAU standard).

use drishti_math::constants::DAS2R;
use drishti_math::{IDENTITY, Matrix3, rotate_y, rotate_z};
use drishti_time::TwoPartTime;

use crate::fundamental::{FundamentalArguments, accumulate_terms};
use crate::nutation::{NutationSeries, pnm00b};

type Term = ([i32; 8], f64, f64);

/// Polynomial coefficients of s + XY/2, arcseconds, IAU 2006.
const SP06: [f64; 6] = [
    94.00e-6,
    3_808.65e-6,
    -122.68e-6,
    -72_574.11e-6,
    27.98e-6,
    15.62e-6,
];

/// Polynomial coefficients of s + XY/2, arcseconds, IAU 2000.
const SP00: [f64; 6] = [
    94.00e-6,
    3_808.35e-6,
    -119.94e-6,
    -72_574.09e-6,
    27.70e-6,
    15.61e-6,
];

/// Periodic terms of order t^0, arcseconds.
#[rustfmt::skip]
static S0: [Term; 33] = [
    ([  0,   0,   0,   0,   1,   0,   0,   0], -2640.73e-6,   0.39e-6),
    ([  0,   0,   0,   0,   2,   0,   0,   0],   -63.53e-6,   0.02e-6),
    ([  0,   0,   2,  -2,   3,   0,   0,   0],   -11.75e-6,  -0.01e-6),
    ([  0,   0,   2,  -2,   1,   0,   0,   0],   -11.21e-6,  -0.01e-6),
    ([  0,   0,   2,  -2,   2,   0,   0,   0],     4.57e-6,   0.00e-6),
    ([  0,   0,   2,   0,   3,   0,   0,   0],    -2.02e-6,   0.00e-6),
    ([  0,   0,   2,   0,   1,   0,   0,   0],    -1.98e-6,   0.00e-6),
    ([  0,   0,   0,   0,   3,   0,   0,   0],     1.72e-6,   0.00e-6),
    ([  0,   1,   0,   0,   1,   0,   0,   0],     1.41e-6,   0.01e-6),
    ([  0,   1,   0,   0,  -1,   0,   0,   0],     1.26e-6,   0.01e-6),
    ([  1,   0,   0,   0,  -1,   0,   0,   0],     0.63e-6,   0.00e-6),
    ([  1,   0,   0,   0,   1,   0,   0,   0],     0.63e-6,   0.00e-6),
    ([  0,   1,   2,  -2,   3,   0,   0,   0],    -0.46e-6,   0.00e-6),
    ([  0,   1,   2,  -2,   1,   0,   0,   0],    -0.45e-6,   0.00e-6),
    ([  0,   0,   4,  -4,   4,   0,   0,   0],    -0.36e-6,   0.00e-6),
    ([  0,   0,   1,  -1,   1,  -8,  12,   0],     0.24e-6,   0.12e-6),
    ([  0,   0,   2,   0,   0,   0,   0,   0],    -0.32e-6,   0.00e-6),
    ([  0,   0,   2,   0,   2,   0,   0,   0],    -0.28e-6,   0.00e-6),
    ([  1,   0,   2,   0,   3,   0,   0,   0],    -0.27e-6,   0.00e-6),
    ([  1,   0,   2,   0,   1,   0,   0,   0],    -0.26e-6,   0.00e-6),
    ([  0,   0,   2,  -2,   0,   0,   0,   0],     0.21e-6,   0.00e-6),
    ([  0,   1,  -2,   2,  -3,   0,   0,   0],    -0.19e-6,   0.00e-6),
    ([  0,   1,  -2,   2,  -1,   0,   0,   0],    -0.18e-6,   0.00e-6),
    ([  0,   0,   0,   0,   0,   8, -13,  -1],     0.10e-6,  -0.05e-6),
    ([  0,   0,   0,   2,   0,   0,   0,   0],    -0.15e-6,   0.00e-6),
    ([  2,   0,  -2,   0,  -1,   0,   0,   0],     0.14e-6,   0.00e-6),
    ([  0,   1,   2,  -2,   2,   0,   0,   0],     0.14e-6,   0.00e-6),
    ([  1,   0,   0,  -2,   1,   0,   0,   0],    -0.14e-6,   0.00e-6),
    ([  1,   0,   0,  -2,  -1,   0,   0,   0],    -0.14e-6,   0.00e-6),
    ([  0,   0,   4,  -2,   4,   0,   0,   0],    -0.13e-6,   0.00e-6),
    ([  0,   0,   2,  -2,   4,   0,   0,   0],     0.11e-6,   0.00e-6),
    ([  1,   0,  -2,   0,  -3,   0,   0,   0],    -0.11e-6,   0.00e-6),
    ([  1,   0,  -2,   0,  -1,   0,   0,   0],    -0.11e-6,   0.00e-6),
];

/// Order t^1, IAU 2006.
#[rustfmt::skip]
static S1_06: [Term; 3] = [
    ([  0,   0,   0,   0,   2,   0,   0,   0],    -0.07e-6,   3.57e-6),
    ([  0,   0,   0,   0,   1,   0,   0,   0],     1.73e-6,  -0.03e-6),
    ([  0,   0,   2,  -2,   3,   0,   0,   0],     0.00e-6,   0.48e-6),
];

/// Order t^1, IAU 2000.
#[rustfmt::skip]
static S1_00: [Term; 3] = [
    ([  0,   0,   0,   0,   2,   0,   0,   0],    -0.07e-6,   3.57e-6),
    ([  0,   0,   0,   0,   1,   0,   0,   0],     1.71e-6,  -0.03e-6),
    ([  0,   0,   2,  -2,   3,   0,   0,   0],     0.00e-6,   0.48e-6),
];

/// Order t^2, leading term, IAU 2006.
#[rustfmt::skip]
static S2_HEAD_06: [Term; 1] = [
    ([  0,   0,   0,   0,   1,   0,   0,   0],   743.52e-6,  -0.17e-6),
];

/// Order t^2, leading term, IAU 2000.
#[rustfmt::skip]
static S2_HEAD_00: [Term; 1] = [
    ([  0,   0,   0,   0,   1,   0,   0,   0],   743.53e-6,  -0.17e-6),
];

/// Order t^2, remaining terms (both models).
#[rustfmt::skip]
static S2_TAIL: [Term; 24] = [
    ([  0,   0,   2,  -2,   2,   0,   0,   0],    56.91e-6,   0.06e-6),
    ([  0,   0,   2,   0,   2,   0,   0,   0],     9.84e-6,  -0.01e-6),
    ([  0,   0,   0,   0,   2,   0,   0,   0],    -8.85e-6,   0.01e-6),
    ([  0,   1,   0,   0,   0,   0,   0,   0],    -6.38e-6,  -0.05e-6),
    ([  1,   0,   0,   0,   0,   0,   0,   0],    -3.07e-6,   0.00e-6),
    ([  0,   1,   2,  -2,   2,   0,   0,   0],     2.23e-6,   0.00e-6),
    ([  0,   0,   2,   0,   1,   0,   0,   0],     1.67e-6,   0.00e-6),
    ([  1,   0,   2,   0,   2,   0,   0,   0],     1.30e-6,   0.00e-6),
    ([  0,   1,  -2,   2,  -2,   0,   0,   0],     0.93e-6,   0.00e-6),
    ([  1,   0,   0,  -2,   0,   0,   0,   0],     0.68e-6,   0.00e-6),
    ([  0,   0,   2,  -2,   1,   0,   0,   0],    -0.55e-6,   0.00e-6),
    ([  1,   0,  -2,   0,  -2,   0,   0,   0],     0.53e-6,   0.00e-6),
    ([  0,   0,   0,   2,   0,   0,   0,   0],    -0.27e-6,   0.00e-6),
    ([  1,   0,   0,   0,   1,   0,   0,   0],    -0.27e-6,   0.00e-6),
    ([  1,   0,  -2,  -2,  -2,   0,   0,   0],    -0.26e-6,   0.00e-6),
    ([  1,   0,   0,   0,  -1,   0,   0,   0],    -0.25e-6,   0.00e-6),
    ([  1,   0,   2,   0,   1,   0,   0,   0],     0.22e-6,   0.00e-6),
    ([  2,   0,   0,  -2,   0,   0,   0,   0],    -0.21e-6,   0.00e-6),
    ([  2,   0,  -2,   0,  -1,   0,   0,   0],     0.20e-6,   0.00e-6),
    ([  0,   0,   2,   2,   2,   0,   0,   0],     0.17e-6,   0.00e-6),
    ([  2,   0,   2,   0,   2,   0,   0,   0],     0.13e-6,   0.00e-6),
    ([  2,   0,   0,   0,   0,   0,   0,   0],    -0.13e-6,   0.00e-6),
    ([  1,   0,   2,  -2,   2,   0,   0,   0],    -0.12e-6,   0.00e-6),
    ([  0,   0,   2,   0,   0,   0,   0,   0],    -0.11e-6,   0.00e-6),
];

/// Order t^3, IAU 2006.
#[rustfmt::skip]
static S3_06: [Term; 4] = [
    ([  0,   0,   0,   0,   1,   0,   0,   0],     0.30e-6, -23.42e-6),
    ([  0,   0,   2,  -2,   2,   0,   0,   0],    -0.03e-6,  -1.46e-6),
    ([  0,   0,   2,   0,   2,   0,   0,   0],    -0.01e-6,  -0.25e-6),
    ([  0,   0,   0,   0,   2,   0,   0,   0],     0.00e-6,   0.23e-6),
];

/// Order t^3, IAU 2000.
#[rustfmt::skip]
static S3_00: [Term; 4] = [
    ([  0,   0,   0,   0,   1,   0,   0,   0],     0.30e-6, -23.51e-6),
    ([  0,   0,   2,  -2,   2,   0,   0,   0],    -0.03e-6,  -1.39e-6),
    ([  0,   0,   2,   0,   2,   0,   0,   0],    -0.01e-6,  -0.24e-6),
    ([  0,   0,   0,   0,   2,   0,   0,   0],     0.00e-6,   0.22e-6),
];

/// Order t^4.
#[rustfmt::skip]
static S4: [Term; 1] = [
    ([  0,   0,   0,   0,   1,   0,   0,   0],    -0.26e-6,  -0.01e-6),
];

/// CIP coordinates and CIO locator, all radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CipCoordinates {
    pub x: f64,
    pub y: f64,
    pub s: f64,
}

/// One CIO locator series: polynomial plus periodic terms by order. Each
/// order lists its table in pieces, in table order.
struct LocatorSeries {
    sp: [f64; 6],
    orders: [&'static [&'static [Term]]; 5],
}

static IAU2006: LocatorSeries = LocatorSeries {
    sp: SP06,
    orders: [&[&S0], &[&S1_06], &[&S2_HEAD_06, &S2_TAIL], &[&S3_06], &[&S4]],
};

static IAU2000: LocatorSeries = LocatorSeries {
    sp: SP00,
    orders: [&[&S0], &[&S1_00], &[&S2_HEAD_00, &S2_TAIL], &[&S3_00], &[&S4]],
};

impl LocatorSeries {
    /// s given the CIP coordinates. Each periodic term is added straight
    /// into its polynomial coefficient, last term first.
    fn evaluate(&self, fa: &FundamentalArguments, x: f64, y: f64) -> f64 {
        let args = fa.cio();
        let mut w = self.sp;
        for (wk, pieces) in w.iter_mut().zip(self.orders) {
            for terms in pieces.iter().rev() {
                *wk = accumulate_terms(*wk, terms, &args);
            }
        }
        let t = fa.t;
        (w[0] + (w[1] + (w[2] + (w[3] + (w[4] + w[5] * t) * t) * t) * t) * t) * DAS2R - x * y / 2.0
    }
}

/// CIO locator s given the CIP coordinates, IAU 2006.
pub fn s06(tt: TwoPartTime, x: f64, y: f64) -> f64 {
    IAU2006.evaluate(&FundamentalArguments::new(tt.centuries_since_j2000()), x, y)
}

/// CIO locator s given the CIP coordinates, IAU 2000.
pub fn s00(tt: TwoPartTime, x: f64, y: f64) -> f64 {
    IAU2000.evaluate(&FundamentalArguments::new(tt.centuries_since_j2000()), x, y)
}

/// A bias-precession-nutation matrix with the CIP and CIO locator taken
/// from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CioFrame {
    pub rbpn: Matrix3,
    pub cip: CipCoordinates,
}

impl CioFrame {
    /// Equation of the origins of this frame.
    pub fn eo(&self) -> f64 {
        eors(&self.rbpn, self.cip.s)
    }
}

/// BPN matrix, CIP and CIO locator, IAU 2000B.
pub fn cio_frame00b(tt: TwoPartTime) -> CioFrame {
    let rbpn = pnm00b(tt);
    let (x, y) = bpn2xy(&rbpn);
    let fa = FundamentalArguments::new(tt.centuries_since_j2000());
    CioFrame {
        rbpn,
        cip: CipCoordinates {
            x,
            y,
            s: IAU2000.evaluate(&fa, x, y),
        },
    }
}

/// CIP x, y and the CIO locator s, IAU 2000B.
pub fn xys00b(tt: TwoPartTime) -> CipCoordinates {
    cio_frame00b(tt).cip
}

/// CIO locator s, IAU 2000B.
pub fn s00b(tt: TwoPartTime) -> f64 {
    xys00b(tt).s
}

/// Celestial-to-intermediate matrix, IAU 2000B.
pub fn c2i00b(tt: TwoPartTime) -> Matrix3 {
    let cip = xys00b(tt);
    c2ixys(cip.x, cip.y, cip.s)
}

/// CIP x, y from a bias-precession-nutation matrix.
pub fn bpn2xy(rbpn: &Matrix3) -> (f64, f64) {
    (rbpn[2][0], rbpn[2][1])
}

/// Celestial-to-intermediate matrix from CIP x, y and the CIO locator.
pub fn c2ixys(x: f64, y: f64, s: f64) -> Matrix3 {
    let r2 = x * x + y * y;
    let e = if r2 > 0.0 { y.atan2(x) } else { 0.0 };
    let d = (r2 / (1.0 - r2)).sqrt().atan();

    let mut r = IDENTITY;
    rotate_z(e, &mut r);
    rotate_y(d, &mut r);
    rotate_z(-(e + s), &mut r);
    r
}

/// Equation of the origins, given the NPB matrix and the CIO locator.
///
/// The result is the angle from the CIO to the equinox along the CIP
/// equator (ERA − GST).
pub fn eors(rnpb: &Matrix3, s: f64) -> f64 {
    let x = rnpb[2][0];
    let ax = x / (1.0 + rnpb[2][2]);
    let xs = 1.0 - ax * x;
    let ys = -ax * rnpb[2][1];
    let zs = -x;
    let p = rnpb[0][0] * xs + rnpb[0][1] * ys + rnpb[0][2] * zs;
    let q = rnpb[1][0] * xs + rnpb[1][1] * ys + rnpb[1][2] * zs;
    if p != 0.0 || q != 0.0 { s - q.atan2(p) } else { s }
}

impl NutationSeries {
    /// BPN matrix, CIP and CIO locator, IAU 2006/2000A.
    ///
    /// Nutation and s are evaluated from one set of fundamental arguments.
    pub fn cio_frame06a(&self, tt: TwoPartTime) -> CioFrame {
        let fa = FundamentalArguments::new(tt.centuries_since_j2000());
        let rbpn = self.pnm06a_with(tt, &fa);
        let (x, y) = bpn2xy(&rbpn);
        CioFrame {
            rbpn,
            cip: CipCoordinates {
                x,
                y,
                s: IAU2006.evaluate(&fa, x, y),
            },
        }
    }

    /// CIP x, y and the CIO locator s, IAU 2006/2000A.
    pub fn xys06a(&self, tt: TwoPartTime) -> CipCoordinates {
        self.cio_frame06a(tt).cip
    }

    /// CIO locator s, IAU 2006/2000A.
    pub fn s06a(&self, tt: TwoPartTime) -> f64 {
        self.xys06a(tt).s
    }

    /// Celestial-to-intermediate matrix, IAU 2006/2000A.
    pub fn c2i06a(&self, tt: TwoPartTime) -> Matrix3 {
        let cip = self.xys06a(tt);
        c2ixys(cip.x, cip.y, cip.s)
    }
}
