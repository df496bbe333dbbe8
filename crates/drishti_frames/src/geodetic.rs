//! Geodetic ↔ geocentric coordinates and observatory position/velocity.
//!
//! The geocentric → geodetic direction uses Fukushima's closed-form
//! method (one Halley step from a good starting point), which is exact
//! to round-off for every terrestrial and near-Earth position.
//!
//! Sources:
//! - Fukushima T., J. Geodesy 79, 689-693 (2006)
//! - Green R.M., Spherical Astronomy, CUP 1985, §4.5
//! - NIMA TR8350.2 (WGS84), Moritz H. (GRS80), NGA (WGS72)
//!
//! Public domain.

use std::f64::consts::FRAC_PI_2;

use drishti_math::constants::OM;
use drishti_math::{PosVel, Vector3, transpose_vec};
use serde::{Deserialize, Serialize};

use crate::error::FrameError;
use crate::rotation::pom00;

/// A reference ellipsoid: equatorial radius (metres) and flattening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    f: f64,
}

impl Ellipsoid {
    pub const WGS84: Self = Self {
        a: 6_378_137.0,
        f: 1.0 / 298.257_223_563,
    };
    pub const GRS80: Self = Self {
        a: 6_378_137.0,
        f: 1.0 / 298.257_222_101,
    };
    pub const WGS72: Self = Self {
        a: 6_378_135.0,
        f: 1.0 / 298.26,
    };

    /// Build an ellipsoid; `a` must be positive and `f` in `[0, 1)`.
    pub fn new(a: f64, f: f64) -> Result<Self, FrameError> {
        if a.is_nan() || a <= 0.0 {
            return Err(FrameError::BadRadius(a));
        }
        if !(0.0..1.0).contains(&f) {
            return Err(FrameError::BadFlattening(f));
        }
        Ok(Self { a, f })
    }

    pub fn equatorial_radius(&self) -> f64 {
        self.a
    }

    pub fn flattening(&self) -> f64 {
        self.f
    }
}

/// The standard ellipsoids by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceEllipsoid {
    #[default]
    Wgs84,
    Grs80,
    Wgs72,
}

impl ReferenceEllipsoid {
    pub const fn ellipsoid(self) -> Ellipsoid {
        match self {
            Self::Wgs84 => Ellipsoid::WGS84,
            Self::Grs80 => Ellipsoid::GRS80,
            Self::Wgs72 => Ellipsoid::WGS72,
        }
    }
}

/// Geodetic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    /// East longitude (radians).
    pub elong: f64,
    /// Geodetic latitude (radians).
    pub phi: f64,
    /// Height above the ellipsoid (metres).
    pub height: f64,
}

/// Geodetic to geocentric Cartesian (metres) on a given ellipsoid.
pub fn gd2gce(ellipsoid: &Ellipsoid, elong: f64, phi: f64, height: f64) -> Vector3 {
    let (sp, cp) = phi.sin_cos();
    let w = (1.0 - ellipsoid.f) * (1.0 - ellipsoid.f);
    // Positive for every flattening accepted by `Ellipsoid::new`.
    let d = cp * cp + w * sp * sp;
    let ac = ellipsoid.a / d.sqrt();
    let as_ = w * ac;

    let r = (ac + height) * cp;
    [r * elong.cos(), r * elong.sin(), (as_ + height) * sp]
}

/// Geocentric Cartesian (metres) to geodetic on a given ellipsoid.
pub fn gc2gde(ellipsoid: &Ellipsoid, xyz: &Vector3) -> Geodetic {
    let a = ellipsoid.a;
    let f = ellipsoid.f;

    let aeps2 = a * a * 1e-32;
    let e2 = (2.0 - f) * f;
    let e4t = e2 * e2 * 1.5;
    let ec2 = 1.0 - e2;
    let ec = ec2.sqrt();
    let b = a * ec;

    let [x, y, z] = *xyz;
    let p2 = x * x + y * y;
    let elong = if p2 > 0.0 { y.atan2(x) } else { 0.0 };
    let absz = z.abs();

    let (phi, height) = if p2 > aeps2 {
        let p = p2.sqrt();
        let s0 = absz / a;
        let pn = p / a;
        let zc = ec * s0;

        // Newton correction factors.
        let c0 = ec * pn;
        let c02 = c0 * c0;
        let c03 = c02 * c0;
        let s02 = s0 * s0;
        let s03 = s02 * s0;
        let a02 = c02 + s02;
        let a0 = a02.sqrt();
        let a03 = a02 * a0;
        let d0 = zc * a03 + e2 * s03;
        let f0 = pn * a03 - e2 * c03;

        // Halley correction factor.
        let b0 = e4t * s02 * c02 * pn * (a0 - ec);
        let s1 = d0 * f0 - b0 * s0;
        let cc = ec * (f0 * f0 - b0 * c0);

        let phi = (s1 / cc).atan();
        let s12 = s1 * s1;
        let cc2 = cc * cc;
        let height = (p * cc + absz * s1 - a * (ec2 * s12 + cc2).sqrt()) / (s12 + cc2).sqrt();
        (phi, height)
    } else {
        // Near the pole.
        (FRAC_PI_2, absz - b)
    };

    Geodetic {
        elong,
        phi: if z < 0.0 { -phi } else { phi },
        height,
    }
}

/// Geodetic to geocentric on a named ellipsoid.
pub fn gd2gc(ellipsoid: ReferenceEllipsoid, elong: f64, phi: f64, height: f64) -> Vector3 {
    gd2gce(&ellipsoid.ellipsoid(), elong, phi, height)
}

/// Geocentric to geodetic on a named ellipsoid.
pub fn gc2gd(ellipsoid: ReferenceEllipsoid, xyz: &Vector3) -> Geodetic {
    gc2gde(&ellipsoid.ellipsoid(), xyz)
}

/// Observatory position and velocity in CIRS-aligned axes (metres, m/s).
///
/// `theta` is the Earth rotation angle; `xp`, `yp` the polar motion and
/// `sp` the TIO locator. The velocity is the diurnal rotation only.
pub fn pvtob(elong: f64, phi: f64, hm: f64, xp: f64, yp: f64, sp: f64, theta: f64) -> PosVel {
    let xyzm = gd2gce(&Ellipsoid::WGS84, elong, phi, hm);
    let [x, y, z] = transpose_vec(&pom00(xp, yp, sp), &xyzm);

    let (s, c) = theta.sin_cos();
    PosVel {
        position: [c * x - s * y, s * x + c * y, z],
        velocity: [OM * (-s * x - c * y), OM * (c * x - s * y), 0.0],
    }
}
