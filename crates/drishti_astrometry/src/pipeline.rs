//! Catalog ↔ intermediate ↔ observed transformations for a prepared
//! set of [`AstrometryParameters`].
//!
//! Forward: space motion, solar light deflection, aberration, the BPN
//! rotation to CIRS, then Earth rotation, polar motion, diurnal
//! aberration and refraction to the observed frame. The inverse undoes
//! refraction and Earth rotation in closed form and inverts aberration
//! and light deflection by fixed-point iteration (two and five passes)
//! with no convergence test.

use drishti_math::{Vector3, anp, c2s, mat_vec, normalize, s2c, transpose_vec};

use crate::corrections::{CatalogStar, ab, ldsun, pmpx};
use crate::params::AstrometryParameters;

/// Floors on cos(altitude) and sin(altitude) for the refraction model.
const CELMIN: f64 = 1e-6;
const SELMIN: f64 = 0.05;

/// Aberration and light-deflection inversion passes.
const ABERRATION_PASSES: usize = 2;
const DEFLECTION_PASSES: usize = 5;

/// A right ascension and declination pair, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaDec {
    pub ra: f64,
    pub dec: f64,
}

/// An observed place. Azimuth is north through east; the hour angle
/// and right ascension are with respect to the CIO.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservedPlace {
    pub azimuth: f64,
    pub zenith_distance: f64,
    pub hour_angle: f64,
    pub declination: f64,
    pub right_ascension: f64,
}

/// Observed coordinates in any of the three forms [`atoiq`] accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObservedCoordinates {
    AzimuthZenith { azimuth: f64, zenith_distance: f64 },
    HourAngleDec { hour_angle: f64, declination: f64 },
    RaDec { ra: f64, dec: f64 },
}

fn radec(p: &Vector3) -> RaDec {
    let s = c2s(p);
    RaDec {
        ra: anp(s.theta),
        dec: s.phi,
    }
}

/// ICRS catalog star to CIRS.
pub fn atciq(star: &CatalogStar, astrom: &AstrometryParameters) -> RaDec {
    let pco = pmpx(star, astrom.pmt, &astrom.eb);
    let pnat = ldsun(&pco, &astrom.eh, astrom.em);
    let ppr = ab(&pnat, &astrom.v, astrom.em, astrom.bm1);
    radec(&mat_vec(&astrom.bpn, &ppr))
}

/// ICRS to CIRS for a source with no space motion and no parallax.
pub fn atciqz(ra: f64, dec: f64, astrom: &AstrometryParameters) -> RaDec {
    let pco = s2c(ra, dec);
    let pnat = ldsun(&pco, &astrom.eh, astrom.em);
    let ppr = ab(&pnat, &astrom.v, astrom.em, astrom.bm1);
    radec(&mat_vec(&astrom.bpn, &ppr))
}

/// Invert a direction-to-direction correction by fixed-point passes.
///
/// Each pass applies `forward` to the current estimate and subtracts the
/// resulting shift from `target`.
fn invert(target: &Vector3, passes: usize, forward: impl Fn(&Vector3) -> Vector3) -> Vector3 {
    let mut d = [0.0; 3];
    let mut estimate = *target;
    for _ in 0..passes {
        let before = normalize(&std::array::from_fn(|i| target[i] - d[i])).unit;
        let after = forward(&before);
        d = std::array::from_fn(|i| after[i] - before[i]);
        estimate = normalize(&std::array::from_fn(|i| target[i] - d[i])).unit;
    }
    estimate
}

/// CIRS to ICRS astrometric place (the inverse of [`atciqz`]).
pub fn aticq(ri: f64, di: f64, astrom: &AstrometryParameters) -> RaDec {
    let pi = s2c(ri, di);
    let ppr = transpose_vec(&astrom.bpn, &pi);

    let pnat = invert(&ppr, ABERRATION_PASSES, |p| ab(p, &astrom.v, astrom.em, astrom.bm1));
    let pco = invert(&pnat, DEFLECTION_PASSES, |p| ldsun(p, &astrom.eh, astrom.em));
    radec(&pco)
}

/// CIRS to observed place.
pub fn atioq(ri: f64, di: f64, astrom: &AstrometryParameters) -> ObservedPlace {
    // CIRS RA,Dec to Cartesian −HA,Dec.
    let [x, y, z] = s2c(ri - astrom.eral, di);

    // Polar motion.
    let (sx, cx) = astrom.xpl.sin_cos();
    let (sy, cy) = astrom.ypl.sin_cos();
    let xhd = cx * x + sx * z;
    let yhd = sx * sy * x + cy * y - cx * sy * z;
    let zhd = -sx * cy * x + sy * y + cx * cy * z;

    // Diurnal aberration.
    let f = 1.0 - astrom.diurab * yhd;
    let xhdt = f * xhd;
    let yhdt = f * (yhd + astrom.diurab);
    let zhdt = f * zhd;

    // Cartesian −HA,Dec to Cartesian Az,El (S=0, E=90).
    let xaet = astrom.sphi * xhdt - astrom.cphi * zhdt;
    let yaet = yhdt;
    let zaet = astrom.cphi * xhdt + astrom.sphi * zhdt;

    let azobs = if xaet != 0.0 || yaet != 0.0 {
        yaet.atan2(-xaet)
    } else {
        0.0
    };

    // Refraction: A·tan z + B·tan³ z with one Newton-Raphson step.
    let r = (xaet * xaet + yaet * yaet).sqrt().max(CELMIN);
    let z = zaet.max(SELMIN);
    let tz = r / z;
    let w = astrom.refb * tz * tz;
    let del = (astrom.refa + w) * tz / (1.0 + (astrom.refa + 3.0 * w) / (z * z));

    let cosdel = 1.0 - del * del / 2.0;
    let f = cosdel - del * z / r;
    let xaeo = xaet * f;
    let yaeo = yaet * f;
    let zaeo = cosdel * zaet + del * r;

    let zdobs = (xaeo * xaeo + yaeo * yaeo).sqrt().atan2(zaeo);

    // Az,El back to −HA,Dec.
    let v = [
        astrom.sphi * xaeo + astrom.cphi * zaeo,
        yaeo,
        -astrom.cphi * xaeo + astrom.sphi * zaeo,
    ];
    let s = c2s(&v);

    ObservedPlace {
        azimuth: anp(azobs),
        zenith_distance: zdobs,
        hour_angle: -s.theta,
        declination: s.phi,
        right_ascension: anp(astrom.eral + s.theta),
    }
}

/// Observed place to CIRS.
pub fn atoiq(observed: ObservedCoordinates, astrom: &AstrometryParameters) -> RaDec {
    let (sphi, cphi) = (astrom.sphi, astrom.cphi);

    // Cartesian Az,El (S=0, E=90).
    let [xaeo, yaeo, zaeo] = match observed {
        ObservedCoordinates::AzimuthZenith {
            azimuth,
            zenith_distance,
        } => {
            let ce = zenith_distance.sin();
            [-azimuth.cos() * ce, azimuth.sin() * ce, zenith_distance.cos()]
        }
        ObservedCoordinates::HourAngleDec {
            hour_angle,
            declination,
        } => to_az_el(hour_angle, declination, sphi, cphi),
        ObservedCoordinates::RaDec { ra, dec } => to_az_el(astrom.eral - ra, dec, sphi, cphi),
    };

    let az = if xaeo != 0.0 || yaeo != 0.0 {
        yaeo.atan2(xaeo)
    } else {
        0.0
    };

    let sz = (xaeo * xaeo + yaeo * yaeo).sqrt();
    let zdo = sz.atan2(zaeo);

    // Remove refraction with the same two-constant model.
    let tz = sz / zaeo.max(SELMIN);
    let dref = (astrom.refa + astrom.refb * tz * tz) * tz;
    let zdt = zdo + dref;

    // Az,ZD to Cartesian −HA,Dec.
    let ce = zdt.sin();
    let xaet = az.cos() * ce;
    let yaet = az.sin() * ce;
    let zaet = zdt.cos();
    let xmhda = sphi * xaet + cphi * zaet;
    let ymhda = yaet;
    let zmhda = -cphi * xaet + sphi * zaet;

    // Diurnal aberration.
    let f = 1.0 + astrom.diurab * ymhda;
    let xhd = f * xmhda;
    let yhd = f * (ymhda - astrom.diurab);
    let zhd = f * zmhda;

    // Polar motion.
    let (sx, cx) = astrom.xpl.sin_cos();
    let (sy, cy) = astrom.ypl.sin_cos();
    let v = [
        cx * xhd + sx * sy * yhd - sx * cy * zhd,
        cy * yhd + sy * zhd,
        sx * xhd - cx * sy * yhd + cx * cy * zhd,
    ];

    let s = c2s(&v);
    RaDec {
        ra: anp(astrom.eral + s.theta),
        dec: s.phi,
    }
}

/// Hour angle and declination to Cartesian Az,El (S=0, E=90).
fn to_az_el(ha: f64, dec: f64, sphi: f64, cphi: f64) -> Vector3 {
    let [xmhdo, ymhdo, zmhdo] = s2c(-ha, dec);
    [
        sphi * xmhdo - cphi * zmhdo,
        ymhdo,
        cphi * xmhdo + sphi * zmhdo,
    ]
}
