//! TDB − TT.
//!
//! Two routes:
//! - [`FairheadSeries::dtdb`], the Fairhead & Bretagnon (1990) series
//!   with topocentric terms, loaded from the `FAIRHEAD.dat` blob
//! - [`tdb_minus_tt_approx`], the one-term closed form used with NAIF
//!   leapseconds kernels (~30 µs accuracy), for callers without the blob
//!
//! Sources: Fairhead L. & Bretagnon P., A&A 229, 240-247 (1990);
//! Moyer (1981) and Murray (1983) for the topocentric part; NAIF Time
//! Required Reading for the closed form. Public domain.

use std::path::Path;

use drishti_math::constants::{DAYSEC, DD2R, DJ00, DJM, TAU};
use drishti_math::{decode_triples, read_blob};

use crate::error::TimeError;
use crate::julian::TwoPartTime;

/// File name of the series blob inside a series directory.
pub const FAIRHEAD_FILE: &str = "FAIRHEAD.dat";

const ROWS: usize = 787;

/// Row ranges `[start, end)` of the T^0 … T^4 groups.
const GROUPS: [(usize, usize); 5] = [(0, 474), (474, 679), (679, 764), (764, 784), (784, 787)];

/// NAIF DELTET/K, seconds.
const NAIF_K: f64 = 1.657e-3;
/// NAIF DELTET/EB, Earth-Moon barycentre orbital eccentricity.
const NAIF_EB: f64 = 1.671e-2;
/// NAIF DELTET/M, mean anomaly at J2000 (rad) and its rate (rad/s).
const NAIF_M: [f64; 2] = [6.239_996, 1.990_968_71e-7];

/// Fairhead & Bretagnon TDB − TT series.
///
/// Each row is `(amplitude s, frequency rad/millennium, phase rad)`.
#[derive(Debug, Clone)]
pub struct FairheadSeries {
    rows: Vec<[f64; 3]>,
}

impl FairheadSeries {
    /// Decode the 787-row series from a little-endian blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TimeError> {
        let rows = decode_triples("FAIRHEAD", bytes, ROWS)?;
        log::debug!("decoded FAIRHEAD series: {} rows", rows.len());
        Ok(Self { rows })
    }

    /// Load `FAIRHEAD.dat` from a series directory.
    pub fn load(dir: &Path) -> Result<Self, TimeError> {
        let bytes = read_blob(&dir.join(FAIRHEAD_FILE))?;
        Self::from_bytes(&bytes)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// TDB − TT in seconds for an observer on the Earth.
    ///
    /// `tdb` may be TT without measurable loss. `ut` is the UT1 fraction
    /// of day, `elong` the east longitude (rad), `u` the distance from
    /// the spin axis and `v` the distance north of the equator (km).
    /// With `u = v = 0` the result is geocentric.
    pub fn dtdb(&self, tdb: TwoPartTime, ut: f64, elong: f64, u: f64, v: f64) -> f64 {
        let t = (tdb.whole - DJ00 + tdb.fraction) / DJM;
        let tsol = (ut % 1.0) * TAU + elong;

        // Fundamental arguments, degrees with arcsec/millennium rates.
        let w = t / 3600.0;
        let elsun = ((280.466_456_83 + 1_296_027_711.034_29 * w) % 360.0) * DD2R;
        let emsun = ((357.529_109_18 + 1_295_965_810.481 * w) % 360.0) * DD2R;
        let d = ((297.850_195_47 + 16_029_616_012.090 * w) % 360.0) * DD2R;
        let elj = ((34.351_518_74 + 109_306_899.894_53 * w) % 360.0) * DD2R;
        let els = ((50.077_444_30 + 44_046_398.470_38 * w) % 360.0) * DD2R;

        let wt = 0.000_29e-10 * u * (tsol + elsun - els).sin()
            + 0.001_00e-10 * u * (tsol - 2.0 * emsun).sin()
            + 0.001_33e-10 * u * (tsol - d).sin()
            + 0.001_33e-10 * u * (tsol + elsun - elj).sin()
            - 0.002_29e-10 * u * (tsol + 2.0 * elsun + emsun).sin()
            - 0.022_00e-10 * v * (elsun + emsun).cos()
            + 0.053_12e-10 * u * (tsol - emsun).sin()
            - 0.136_77e-10 * u * (tsol + 2.0 * elsun).sin()
            - 1.318_40e-10 * v * elsun.cos()
            + 3.176_79e-10 * u * tsol.sin();

        // Smallest terms first within each power of T.
        let mut wn = [0.0; 5];
        for (k, &(start, end)) in GROUPS.iter().enumerate() {
            wn[k] = self.rows[start..end]
                .iter()
                .rev()
                .map(|[a, f, p]| a * (f * t + p).sin())
                .sum();
        }
        let wf = t * (t * (t * (t * wn[4] + wn[3]) + wn[2]) + wn[1]) + wn[0];

        // JPL planetary masses instead of IAU.
        let wj = 0.000_65e-6 * (6_069.776_754 * t + 4.021_194).sin()
            + 0.000_33e-6 * (213.299_095 * t + 5.543_132).sin()
            - 0.001_96e-6 * (6_208.294_251 * t + 5.696_701).sin()
            - 0.001_73e-6 * (74.781_599 * t + 2.435_900).sin()
            + 0.036_38e-6 * t * t;

        wt + wf + wj
    }
}

/// Closed-form TDB − TT in seconds.
///
/// Formula: `K · sin(M + EB · sin M)` with `M = M0 + M1 · s`, where `s`
/// is TT seconds past J2000.
pub fn tdb_minus_tt_approx(tt: TwoPartTime) -> f64 {
    let s = tt.days_since_j2000() * DAYSEC;
    let m = NAIF_M[0] + NAIF_M[1] * s;
    let e = m + NAIF_EB * m.sin();
    NAIF_K * e.sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_bounded_by_amplitude() {
        for day in (0..3650).step_by(7) {
            let v = tdb_minus_tt_approx(TwoPartTime::new(DJ00, f64::from(day)));
            assert!(v.abs() <= NAIF_K + 1e-12, "day {day}: {v}");
        }
    }

    #[test]
    fn approx_near_j2000() {
        // M ≈ 6.24 rad at J2000, so TDB − TT ≈ −0.07 ms.
        let v = tdb_minus_tt_approx(TwoPartTime::j2000());
        assert!((v - (-7.3e-5)).abs() < 5e-6, "got {v}");
    }

    #[test]
    fn rejects_short_blob() {
        let err = FairheadSeries::from_bytes(&[0u8; 24]).unwrap_err();
        assert!(matches!(err, TimeError::Table(_)));
    }

    #[test]
    fn single_term_series() {
        // One T^0 term of 1 ms at zero frequency and phase π/2.
        let mut values = vec![0.0f64; ROWS * 3];
        values[0] = 1e-3;
        values[2] = std::f64::consts::FRAC_PI_2;
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        let series = FairheadSeries::from_bytes(&bytes).unwrap();
        assert_eq!(series.len(), ROWS);

        let dt = series.dtdb(TwoPartTime::j2000(), 0.0, 0.0, 0.0, 0.0);
        let wj = 0.000_65e-6 * 4.021_194f64.sin()
            + 0.000_33e-6 * 5.543_132f64.sin()
            - 0.001_96e-6 * 5.696_701f64.sin()
            - 0.001_73e-6 * 2.435_900f64.sin();
        assert!((dt - (1e-3 + wj)).abs() < 1e-15, "got {dt}");
    }
}
