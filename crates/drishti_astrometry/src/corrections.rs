//! Star-dependent corrections: space motion and parallax, gravitational
//! light deflection, and stellar aberration.
//!
//! Source: Klioner S.A., AJ 125, 1580 (2003); Kaplan G.H., USNO
//! Circular 179 (2005). Public domain (IAU standard).

use drishti_math::constants::{AULT, DAS2R, DAU, DAYSEC, DJM, DJY, SRS};
use drishti_math::{Vector3, cross, dot, normalize};

/// Catalog entry: ICRS position at epoch J2000.0 plus space motion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CatalogStar {
    /// Right ascension (radians).
    pub ra: f64,
    /// Declination (radians).
    pub dec: f64,
    /// Proper motion in RA, dRA/dt (radians per Julian year).
    pub pm_ra: f64,
    /// Proper motion in Dec (radians per Julian year).
    pub pm_dec: f64,
    /// Parallax (arcseconds).
    pub parallax: f64,
    /// Radial velocity (km/s, positive receding).
    pub radial_velocity: f64,
}

impl CatalogStar {
    /// A star with no space motion.
    pub const fn fixed(ra: f64, dec: f64) -> Self {
        Self {
            ra,
            dec,
            pm_ra: 0.0,
            pm_dec: 0.0,
            parallax: 0.0,
            radial_velocity: 0.0,
        }
    }
}

/// Apply proper motion and parallax: the BCRS coordinate direction of
/// `star` seen from barycentric position `pob` (au) after `pmt` years.
///
/// The time interval includes the Roemer delay across the observer's
/// offset from the barycentre.
pub fn pmpx(star: &CatalogStar, pmt: f64, pob: &Vector3) -> Vector3 {
    // km/s to au/year.
    let vf = DAYSEC * DJM / DAU;
    // Light time for 1 au, Julian years.
    let aulty = AULT / DAYSEC / DJY;

    let (sr, cr) = star.ra.sin_cos();
    let (sd, cd) = star.dec.sin_cos();
    let (x, y, z) = (cr * cd, sr * cd, sd);
    let p = [x, y, z];

    let dt = pmt + dot(&p, pob) * aulty;

    // Space motion (radians per year).
    let pxr = star.parallax * DAS2R;
    let w = vf * star.radial_velocity * pxr;
    let pdz = star.pm_dec * z;
    let pm = [
        -star.pm_ra * y - pdz * cr + w * x,
        star.pm_ra * x - pdz * sr + w * y,
        star.pm_dec * cd + w * z,
    ];

    let moved: Vector3 = std::array::from_fn(|i| p[i] + dt * pm[i] - pxr * pob[i]);
    normalize(&moved).unit
}

/// Light deflection by one body.
///
/// `bm` is the body mass in solar masses, `p` the direction from the
/// observer to the source, `q` from the body to the source, `e` from
/// the body to the observer and `em` its distance (au). `dlim` floors
/// `q·(q + e)` so that a source behind the body is not over-deflected.
pub fn ld(bm: f64, p: &Vector3, q: &Vector3, e: &Vector3, em: f64, dlim: f64) -> Vector3 {
    let qpe = [q[0] + e[0], q[1] + e[1], q[2] + e[2]];
    let qdqpe = dot(q, &qpe);

    let w = bm * SRS / em / qdqpe.max(dlim);

    let eq = cross(e, q);
    let peq = cross(p, &eq);
    std::array::from_fn(|i| p[i] + w * peq[i])
}

/// Light deflection by the Sun for a source at infinity.
///
/// The limiter is 1e-6 at 1 au and shrinks with the square of the
/// observer's distance beyond that.
pub fn ldsun(p: &Vector3, e: &Vector3, em: f64) -> Vector3 {
    let dlim = 1e-6 / (em * em).max(1.0);
    ld(1.0, p, p, e, em, dlim)
}

/// Stellar aberration: natural direction `pnat` to proper direction,
/// for observer velocity `v` (units of c), Sun distance `s` (au) and
/// reciprocal Lorentz factor `bm1`.
///
/// Includes the first-order gravitational correction from the Sun's
/// potential at the observer.
pub fn ab(pnat: &Vector3, v: &Vector3, s: f64, bm1: f64) -> Vector3 {
    let pdv = dot(pnat, v);
    let w1 = 1.0 + pdv / (1.0 + bm1);
    let w2 = SRS / s;

    let p: Vector3 =
        std::array::from_fn(|i| pnat[i] * bm1 + w1 * v[i] + w2 * (v[i] - pdv * pnat[i]));
    normalize(&p).unit
}
