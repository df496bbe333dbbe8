//! EPV00-form series evaluation and the blob-loaded EPV00 tables.
//!
//! Each coordinate is `Σ a·cos(b + c·t)` over three polynomial orders
//! (t^0, t^1, t^2 multipliers), with `t` in Julian years of TDB since
//! J2000.0, referred to the J2000 ecliptic. The result is rotated into
//! BCRS-aligned axes by a fixed matrix.
//!
//! Source: Wallace P.T., EPV00 (SOFA), fitted to JPL DE405 over
//! 1900-2100. Public domain.

use std::path::Path;

use drishti_math::constants::{DJ00, DJY};
use drishti_math::{Matrix3, PosVel, Vector3, decode_triples, mat_vec, read_blob};
use drishti_time::TwoPartTime;

use crate::error::EphemerisError;
use crate::{EarthEphemeris, EarthState};

/// Terms of one coordinate and order: `[amplitude, phase, frequency]`.
pub type Terms<'a> = &'a [[f64; 3]];

/// Series for one body pair, indexed `[axis][order]`.
pub type SeriesSet<'a> = [[Terms<'a>; 3]; 3];

/// Ecliptic J2000 → BCRS (includes the frame bias).
#[rustfmt::skip]
const AM: Matrix3 = [
    [ 1.0,             0.000_000_211_284, -0.000_000_091_603],
    [-0.000_000_230_286, 0.917_482_137_087, -0.397_776_982_902],
    [ 0.0,             0.397_776_982_902,  0.917_482_137_087],
];

/// Years either side of J2000.0 inside which the fit is valid.
const VALID_YEARS: f64 = 100.0;

/// Add one coordinate's terms, all three orders, into a running value and
/// time derivative (per year).
fn accumulate_axis(acc: (f64, f64), orders: &[Terms<'_>; 3], t: f64, t2: f64) -> (f64, f64) {
    let (mut xyz, mut xyzd) = acc;

    for &[a, b, c] in orders[0] {
        let p = b + c * t;
        xyz += a * p.cos();
        xyzd -= a * c * p.sin();
    }
    for &[a, b, c] in orders[1] {
        let ct = c * t;
        let p = b + ct;
        let cp = p.cos();
        xyz += a * t * cp;
        xyzd += a * (cp - ct * p.sin());
    }
    for &[a, b, c] in orders[2] {
        let ct = c * t;
        let p = b + ct;
        let cp = p.cos();
        xyz += a * t2 * cp;
        xyzd += a * t * (2.0 * cp - ct * p.sin());
    }
    (xyz, xyzd)
}

/// Evaluate Sun→Earth and SSB→Sun series into an [`EarthState`].
///
/// The SSB→Sun terms continue the Sun→Earth sums, so the barycentric
/// coordinate is one running total rather than two added partials.
pub(crate) fn evaluate(sun_earth: &SeriesSet<'_>, ssb_sun: &SeriesSet<'_>, tdb: TwoPartTime) -> EarthState {
    let t = (tdb.whole - DJ00 + tdb.fraction) / DJY;
    let t2 = t * t;
    let in_range = t.abs() <= VALID_YEARS;
    if !in_range {
        log::warn!("Earth ephemeris evaluated at JD {:.1}, outside 1900-2100", tdb.jd());
    }

    let mut ph: Vector3 = [0.0; 3];
    let mut vh: Vector3 = [0.0; 3];
    let mut pb: Vector3 = [0.0; 3];
    let mut vb: Vector3 = [0.0; 3];
    for i in 0..3 {
        let helio = accumulate_axis((0.0, 0.0), &sun_earth[i], t, t2);
        ph[i] = helio.0;
        vh[i] = helio.1 / DJY;

        let bary = accumulate_axis(helio, &ssb_sun[i], t, t2);
        pb[i] = bary.0;
        vb[i] = bary.1 / DJY;
    }

    EarthState {
        heliocentric: PosVel {
            position: mat_vec(&AM, &ph),
            velocity: mat_vec(&AM, &vh),
        },
        barycentric: PosVel {
            position: mat_vec(&AM, &pb),
            velocity: mat_vec(&AM, &vb),
        },
        in_range,
    }
}

/// Blob file stems and value counts, `[axis][order]`.
const SUN_EARTH_FILES: [[(&str, usize); 3]; 3] = [
    [("E0X", 1503), ("E1X", 237), ("E2X", 15)],
    [("E0Y", 1503), ("E1Y", 240), ("E2Y", 15)],
    [("E0Z", 411), ("E1Z", 36), ("E2Z", 9)],
];
const SSB_SUN_FILES: [[(&str, usize); 3]; 3] = [
    [("S0X", 636), ("S1X", 150), ("S2X", 27)],
    [("S0Y", 639), ("S1Y", 150), ("S2Y", 27)],
    [("S0Z", 207), ("S1Z", 42), ("S2Z", 6)],
];

type OwnedSet = [[Vec<[f64; 3]>; 3]; 3];

/// The full EPV00 tables: 1,323 Sun→Earth and 628 SSB→Sun terms.
#[derive(Debug, Clone)]
pub struct Epv00Series {
    sun_earth: OwnedSet,
    ssb_sun: OwnedSet,
}

impl Epv00Series {
    /// Load the eighteen `E??.dat` / `S??.dat` blobs from a series directory.
    pub fn load(dir: &Path) -> Result<Self, EphemerisError> {
        let sun_earth = load_set(dir, &SUN_EARTH_FILES)?;
        let ssb_sun = load_set(dir, &SSB_SUN_FILES)?;
        log::debug!(
            "loaded EPV00 series: {} Sun-Earth, {} SSB-Sun terms",
            count(&sun_earth),
            count(&ssb_sun)
        );
        Ok(Self { sun_earth, ssb_sun })
    }

    /// Build from in-memory tables, `[axis][order]` rows of
    /// `[amplitude, phase, frequency]`.
    pub fn from_tables(sun_earth: OwnedSet, ssb_sun: OwnedSet) -> Self {
        Self { sun_earth, ssb_sun }
    }

    pub fn term_count(&self) -> usize {
        count(&self.sun_earth) + count(&self.ssb_sun)
    }
}

fn count(set: &OwnedSet) -> usize {
    set.iter().flatten().map(Vec::len).sum()
}

fn load_set(dir: &Path, files: &[[(&str, usize); 3]; 3]) -> Result<OwnedSet, EphemerisError> {
    let mut set: OwnedSet = Default::default();
    for (axis, row) in files.iter().enumerate() {
        for (order, &(stem, values)) in row.iter().enumerate() {
            let bytes = read_blob(&dir.join(format!("{stem}.dat")))?;
            set[axis][order] = decode_triples("EPV00", &bytes, values / 3)?;
        }
    }
    Ok(set)
}

fn borrow(set: &OwnedSet) -> SeriesSet<'_> {
    [0, 1, 2].map(|axis| [0, 1, 2].map(|order| set[axis][order].as_slice()))
}

impl EarthEphemeris for Epv00Series {
    fn earth_state(&self, tdb: TwoPartTime) -> EarthState {
        evaluate(&borrow(&self.sun_earth), &borrow(&self.ssb_sun), tdb)
    }
}
