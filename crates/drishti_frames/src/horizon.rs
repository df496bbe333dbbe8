//! Horizon ↔ equatorial conversions for a fixed latitude.
//!
//! Azimuth is measured from north through east; all angles in radians.
//! These are pure geometry: no refraction or diurnal aberration.

use std::f64::consts::TAU;

/// Hour angle and declination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourAngleDec {
    pub ha: f64,
    pub dec: f64,
}

/// Azimuth and altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AzEl {
    pub az: f64,
    pub el: f64,
}

/// Horizon to equatorial: azimuth and altitude to hour angle and
/// declination at latitude `phi`.
pub fn ae2hd(az: f64, el: f64, phi: f64) -> HourAngleDec {
    let (sa, ca) = az.sin_cos();
    let (se, ce) = el.sin_cos();
    let (sp, cp) = phi.sin_cos();

    let x = -ca * ce * sp + se * cp;
    let y = -sa * ce;
    let z = ca * ce * cp + se * sp;

    let r = x.hypot(y);
    HourAngleDec {
        ha: if r != 0.0 { y.atan2(x) } else { 0.0 },
        dec: z.atan2(r),
    }
}

/// Equatorial to horizon. Azimuth is returned in `[0, 2π)`.
pub fn hd2ae(ha: f64, dec: f64, phi: f64) -> AzEl {
    let (sh, ch) = ha.sin_cos();
    let (sd, cd) = dec.sin_cos();
    let (sp, cp) = phi.sin_cos();

    let x = -ch * cd * sp + sd * cp;
    let y = -sh * cd;
    let z = ch * cd * cp + sd * sp;

    let r = x.hypot(y);
    let a = if r != 0.0 { y.atan2(x) } else { 0.0 };
    AzEl {
        az: if a < 0.0 { a + TAU } else { a },
        el: z.atan2(r),
    }
}

/// Parallactic angle for hour angle `ha`, declination `dec` and
/// latitude `phi`. Zero at the pole and the zenith.
pub fn hd2pa(ha: f64, dec: f64, phi: f64) -> f64 {
    let cp = phi.cos();
    let sqsz = cp * ha.sin();
    let cqsz = phi.sin() * dec.cos() - cp * dec.sin() * ha.cos();
    if sqsz != 0.0 || cqsz != 0.0 {
        sqsz.atan2(cqsz)
    } else {
        0.0
    }
}
