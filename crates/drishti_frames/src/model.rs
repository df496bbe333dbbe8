//! Choice of precession-nutation model.
//!
//! Callers pick the model explicitly; there is no default. The full
//! IAU 2006/2000A model needs the loaded [`NutationSeries`], the
//! truncated IAU 2000B model runs from embedded tables alone.

use std::sync::Arc;

use drishti_math::{Matrix3, anpm};
use drishti_time::TwoPartTime;
use serde::{Deserialize, Serialize};

use crate::cio::{CioFrame, CipCoordinates, c2ixys, cio_frame00b};
use crate::nutation::{Nutation, NutationSeries, nut00b, pnm00b};
use crate::rotation::{era00, gst06};

/// Model selector as it appears in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NutationModelKind {
    /// IAU 2006 precession with IAU 2000A nutation (1,365 terms).
    #[serde(rename = "iau2006a")]
    Iau2006A,
    /// IAU 2000 precession with the 77-term IAU 2000B nutation.
    #[serde(rename = "iau2000b")]
    Iau2000B,
}

/// A precession-nutation model ready to evaluate.
#[derive(Debug, Clone)]
pub enum PrecessionNutationModel {
    Iau2006A(Arc<NutationSeries>),
    Iau2000B,
}

impl PrecessionNutationModel {
    pub fn kind(&self) -> NutationModelKind {
        match self {
            Self::Iau2006A(_) => NutationModelKind::Iau2006A,
            Self::Iau2000B => NutationModelKind::Iau2000B,
        }
    }

    /// Nutation in longitude and obliquity.
    pub fn nutation(&self, tt: TwoPartTime) -> Nutation {
        match self {
            Self::Iau2006A(series) => series.nut06a(tt),
            Self::Iau2000B => nut00b(tt),
        }
    }

    /// Bias-precession-nutation matrix, GCRS → true equator of date.
    pub fn bpn(&self, tt: TwoPartTime) -> Matrix3 {
        match self {
            Self::Iau2006A(series) => series.pnm06a(tt),
            Self::Iau2000B => pnm00b(tt),
        }
    }

    /// BPN matrix with its CIP and CIO locator, in one evaluation.
    ///
    /// IAU 2006/2000A pairs with the IAU 2006 locator and IAU 2000B with
    /// the IAU 2000 one.
    pub fn cio_frame(&self, tt: TwoPartTime) -> CioFrame {
        match self {
            Self::Iau2006A(series) => series.cio_frame06a(tt),
            Self::Iau2000B => cio_frame00b(tt),
        }
    }

    /// CIP coordinates and the CIO locator.
    pub fn cip(&self, tt: TwoPartTime) -> CipCoordinates {
        self.cio_frame(tt).cip
    }

    /// Celestial-to-intermediate matrix.
    pub fn c2i(&self, tt: TwoPartTime) -> Matrix3 {
        let cip = self.cip(tt);
        c2ixys(cip.x, cip.y, cip.s)
    }

    /// Greenwich apparent sidereal time, CIO based.
    pub fn gst(&self, ut1: TwoPartTime, tt: TwoPartTime) -> f64 {
        gst06(ut1, tt, &self.bpn(tt))
    }

    /// Equation of the origins, ERA − GST.
    pub fn equation_of_origins(&self, ut1: TwoPartTime, tt: TwoPartTime) -> f64 {
        anpm(era00(ut1) - self.gst(ut1, tt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use drishti_math::determinant;

    #[test]
    fn truncated_model_runs_without_tables() {
        let tt = TwoPartTime::new(2_453_736.0, 0.5);
        let model = PrecessionNutationModel::Iau2000B;
        assert_eq!(model.kind(), NutationModelKind::Iau2000B);
        assert_eq!(model.nutation(tt), nut00b(tt));

        let cip = model.cip(tt);
        let rbpn = model.bpn(tt);
        assert_eq!(cip.x, rbpn[2][0]);
        assert_abs_diff_eq!(determinant(&model.c2i(tt)), 1.0, epsilon = 1e-14);
        // s stays at the milliarcsecond level over this century.
        assert!(cip.s.abs() < 1e-7, "s = {}", cip.s);
    }

    #[test]
    fn truncated_model_uses_2000_locator() {
        let tt = TwoPartTime::new(2_456_384.5, 0.969_254_051);
        let frame = PrecessionNutationModel::Iau2000B.cio_frame(tt);
        assert_eq!(frame.rbpn, pnm00b(tt));
        assert_eq!(frame.cip.s, crate::cio::s00(tt, frame.cip.x, frame.cip.y));
        assert_ne!(frame.cip.s, crate::cio::s06(tt, frame.cip.x, frame.cip.y));
    }

    #[test]
    fn gst_matches_equinox_route() {
        let t = TwoPartTime::new(2_453_736.0, 0.5);
        let model = PrecessionNutationModel::Iau2000B;
        // The CIO route with 2000B agrees with gst00b at the mas level.
        let diff = model.gst(t, t) - crate::rotation::gst00b(t);
        assert!(diff.abs() < 1e-8, "diff = {diff}");
    }

    #[test]
    fn kind_deserializes() {
        let k: NutationModelKind = serde_json::from_str("\"iau2006a\"").unwrap();
        assert_eq!(k, NutationModelKind::Iau2006A);
        let k: NutationModelKind = serde_json::from_str("\"iau2000b\"").unwrap();
        assert_eq!(k, NutationModelKind::Iau2000B);
    }
}
