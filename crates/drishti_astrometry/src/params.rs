//! Star-independent astrometry parameters.
//!
//! Every assembler funnels through [`apcs`], so the fields shared by the
//! geocentric, intermediate and topocentric cases are computed by the
//! same code. The observed-frame fields (`along` … `refb`) are filled by
//! [`apco`] and [`apio`] only.

use drishti_ephem::EarthState;
use drishti_frames::{CipCoordinates, c2ixys, pvtob};
use drishti_math::constants::{AULT, CMPS, DAU, DAYSEC, DJ00, DJY};
use drishti_math::{
    IDENTITY, Matrix3, PosVel, Vector3, anpm, normalize, rotate_x, rotate_y, rotate_z,
    transpose_vec,
};
use drishti_time::TwoPartTime;

use crate::config::Site;
use crate::refraction::RefractionConstants;

/// Everything about the observer and the date that the catalog ↔
/// observed transformations need, independent of the star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstrometryParameters {
    /// Proper-motion interval: TDB − J2000.0 (Julian years).
    pub pmt: f64,
    /// Observer's barycentric position (au).
    pub eb: Vector3,
    /// Sun → observer unit vector.
    pub eh: Vector3,
    /// Sun → observer distance (au).
    pub em: f64,
    /// Observer's barycentric velocity in units of c.
    pub v: Vector3,
    /// Reciprocal of the Lorentz factor, sqrt(1 − |v|²).
    pub bm1: f64,
    /// Bias-precession-nutation matrix (GCRS → CIRS).
    pub bpn: Matrix3,
    /// Longitude + s' (radians).
    pub along: f64,
    /// Geodetic latitude (radians).
    pub phi: f64,
    /// Polar motion with respect to the local meridian (radians).
    pub xpl: f64,
    pub ypl: f64,
    pub sphi: f64,
    pub cphi: f64,
    /// Magnitude of the diurnal aberration vector.
    pub diurab: f64,
    /// Local Earth rotation angle (radians).
    pub eral: f64,
    /// Refraction constants (radians).
    pub refa: f64,
    pub refb: f64,
}

impl Default for AstrometryParameters {
    fn default() -> Self {
        Self {
            pmt: 0.0,
            eb: [0.0; 3],
            eh: [0.0; 3],
            em: 0.0,
            v: [0.0; 3],
            bm1: 1.0,
            bpn: IDENTITY,
            along: 0.0,
            phi: 0.0,
            xpl: 0.0,
            ypl: 0.0,
            sphi: 0.0,
            cphi: 1.0,
            diurab: 0.0,
            eral: 0.0,
            refa: 0.0,
            refb: 0.0,
        }
    }
}

/// Parameters for an observer anywhere in the solar system.
///
/// `observer` is the geocentric position (m) and velocity (m/s) of the
/// observer in GCRS axes; `earth` the Earth ephemeris at `tdb`. The
/// BPN matrix is set to identity.
pub fn apcs(tdb: TwoPartTime, observer: &PosVel, earth: &EarthState) -> AstrometryParameters {
    // Metres per second to au per day.
    let audms = DAU / DAYSEC;
    // Light time for 1 au in days.
    let cr = AULT / DAYSEC;

    let mut pb = [0.0; 3];
    let mut vb = [0.0; 3];
    let mut ph = [0.0; 3];
    for i in 0..3 {
        let dp = observer.position[i] / DAU;
        let dv = observer.velocity[i] / audms;
        pb[i] = earth.barycentric.position[i] + dp;
        vb[i] = earth.barycentric.velocity[i] + dv;
        ph[i] = earth.heliocentric.position[i] + dp;
    }

    let sun = normalize(&ph);
    let v = vb.map(|c| c * cr);
    let v2 = v[0] * v[0] + v[1] * v[1] + v[2] * v[2];

    AstrometryParameters {
        pmt: (tdb.whole - DJ00 + tdb.fraction) / DJY,
        eb: pb,
        eh: sun.unit,
        em: sun.modulus,
        v,
        bm1: (1.0 - v2).sqrt(),
        bpn: IDENTITY,
        ..AstrometryParameters::default()
    }
}

/// Parameters for a geocentric observer (ICRS ↔ GCRS).
pub fn apcg(tdb: TwoPartTime, earth: &EarthState) -> AstrometryParameters {
    apcs(tdb, &PosVel::default(), earth)
}

/// Parameters for a geocentric observer with the CIO-based BPN matrix
/// (ICRS ↔ CIRS).
pub fn apci(tdb: TwoPartTime, earth: &EarthState, cip: &CipCoordinates) -> AstrometryParameters {
    AstrometryParameters {
        bpn: c2ixys(cip.x, cip.y, cip.s),
        ..apcg(tdb, earth)
    }
}

/// Observed-frame quantities shared by [`apco`] and [`apio`].
struct LocalFrame {
    eral: f64,
    xpl: f64,
    ypl: f64,
    along: f64,
}

/// Solve the CIRS → apparent (HA, Dec) rotation for the local Earth
/// rotation angle and the polar motion in the local meridian.
fn local_frame(theta: f64, sp: f64, site: &Site) -> LocalFrame {
    let mut r = IDENTITY;
    rotate_z(theta + sp, &mut r);
    rotate_y(-site.xp, &mut r);
    rotate_x(-site.yp, &mut r);
    rotate_z(site.longitude, &mut r);

    let (a, b) = (r[0][0], r[0][1]);
    let eral = if a != 0.0 || b != 0.0 { b.atan2(a) } else { 0.0 };
    let xpl = r[0][2].atan2(a.hypot(b));
    let (c, d) = (r[1][2], r[2][2]);
    let ypl = if c != 0.0 || d != 0.0 { -c.atan2(d) } else { 0.0 };

    LocalFrame {
        eral,
        xpl,
        ypl,
        along: anpm(eral - theta),
    }
}

/// Parameters for a terrestrial observer (ICRS ↔ observed).
///
/// `theta` is the Earth rotation angle and `sp` the TIO locator. The
/// observer's diurnal velocity goes into the stellar aberration, so
/// `diurab` is left at zero.
pub fn apco(
    tdb: TwoPartTime,
    earth: &EarthState,
    cip: &CipCoordinates,
    theta: f64,
    sp: f64,
    site: &Site,
    refraction: RefractionConstants,
) -> AstrometryParameters {
    let local = local_frame(theta, sp, site);
    let bpn = c2ixys(cip.x, cip.y, cip.s);

    // Observer's geocentric position and velocity, CIRS then GCRS.
    let pvc = pvtob(site.longitude, site.latitude, site.height, site.xp, site.yp, sp, theta);
    let observer = PosVel {
        position: transpose_vec(&bpn, &pvc.position),
        velocity: transpose_vec(&bpn, &pvc.velocity),
    };

    AstrometryParameters {
        bpn,
        along: local.along,
        phi: site.latitude,
        xpl: local.xpl,
        ypl: local.ypl,
        sphi: site.latitude.sin(),
        cphi: site.latitude.cos(),
        diurab: 0.0,
        eral: local.eral,
        refa: refraction.refa,
        refb: refraction.refb,
        ..apcs(tdb, &observer, earth)
    }
}

/// Observed-frame parameters only (CIRS ↔ observed).
///
/// The geocentric fields keep their defaults; the diurnal aberration is
/// taken from the site's rotational velocity.
pub fn apio(sp: f64, theta: f64, site: &Site, refraction: RefractionConstants) -> AstrometryParameters {
    let local = local_frame(theta, sp, site);
    let pv = pvtob(site.longitude, site.latitude, site.height, site.xp, site.yp, sp, 0.0);

    AstrometryParameters {
        along: local.along,
        phi: site.latitude,
        xpl: local.xpl,
        ypl: local.ypl,
        sphi: site.latitude.sin(),
        cphi: site.latitude.cos(),
        diurab: pv.velocity[0].hypot(pv.velocity[1]) / CMPS,
        eral: local.eral,
        refa: refraction.refa,
        refb: refraction.refb,
        ..AstrometryParameters::default()
    }
}
