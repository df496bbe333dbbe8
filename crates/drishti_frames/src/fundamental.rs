//! Fundamental arguments of lunisolar and planetary theory.
//!
//! Every function takes `t`, TDB Julian centuries since J2000.0 (TT is
//! fine in practice), and returns radians. Angles are reduced with the
//! sign-preserving remainder, so some results are negative.
//!
//! Source: IERS Conventions 2003, eqs. 5.43 and 5.44 (Simon et al. 1994
//! for the Delaunay arguments, Souchay et al. 1999 for the planets).
//! Public domain.

use drishti_math::constants::{DAS2R, TAU, TURNAS};

/// Mean anomaly of the Moon.
pub fn fal03(t: f64) -> f64 {
    ((485_868.249_036
        + t * (1_717_915_923.217_8 + t * (31.879_2 + t * (0.051_635 + t * -0.000_244_70))))
        % TURNAS)
        * DAS2R
}

/// Mean anomaly of the Sun.
pub fn falp03(t: f64) -> f64 {
    ((1_287_104.793_048
        + t * (129_596_581.048_1 + t * (-0.553_2 + t * (0.000_136 + t * -0.000_011_49))))
        % TURNAS)
        * DAS2R
}

/// Mean longitude of the Moon minus mean longitude of the ascending node.
pub fn faf03(t: f64) -> f64 {
    ((335_779.526_232
        + t * (1_739_527_262.847_8 + t * (-12.751_2 + t * (-0.001_037 + t * 0.000_004_17))))
        % TURNAS)
        * DAS2R
}

/// Mean elongation of the Moon from the Sun.
pub fn fad03(t: f64) -> f64 {
    ((1_072_260.703_692
        + t * (1_602_961_601.209_0 + t * (-6.370_6 + t * (0.006_593 + t * -0.000_031_69))))
        % TURNAS)
        * DAS2R
}

/// Mean longitude of the Moon's ascending node.
pub fn faom03(t: f64) -> f64 {
    ((450_160.398_036
        + t * (-6_962_890.543_1 + t * (7.472_2 + t * (0.007_702 + t * -0.000_059_39))))
        % TURNAS)
        * DAS2R
}

/// General accumulated precession in longitude.
pub fn fapa03(t: f64) -> f64 {
    (0.024_381_750 + 0.000_005_386_91 * t) * t
}

pub fn fame03(t: f64) -> f64 {
    (4.402_608_842 + 2_608.790_314_157_4 * t) % TAU
}

pub fn fave03(t: f64) -> f64 {
    (3.176_146_697 + 1_021.328_554_621_1 * t) % TAU
}

pub fn fae03(t: f64) -> f64 {
    (1.753_470_314 + 628.307_584_999_1 * t) % TAU
}

pub fn fama03(t: f64) -> f64 {
    (6.203_480_913 + 334.061_242_670_0 * t) % TAU
}

pub fn faju03(t: f64) -> f64 {
    (0.599_546_497 + 52.969_096_264_1 * t) % TAU
}

pub fn fasa03(t: f64) -> f64 {
    (0.874_016_757 + 21.329_910_496_0 * t) % TAU
}

pub fn faur03(t: f64) -> f64 {
    (5.481_293_872 + 7.478_159_856_7 * t) % TAU
}

pub fn fane03(t: f64) -> f64 {
    (5.311_886_287 + 3.813_303_563_8 * t) % TAU
}

/// All fundamental arguments at one epoch.
///
/// Computed once per call and handed to every series evaluated for that
/// epoch, so nutation, the CIO locator and the equation of the equinoxes
/// see identical arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalArguments {
    /// TDB Julian centuries since J2000.0.
    pub t: f64,
    pub l: f64,
    pub lp: f64,
    pub f: f64,
    pub d: f64,
    pub om: f64,
    pub me: f64,
    pub ve: f64,
    pub ea: f64,
    pub ma: f64,
    pub ju: f64,
    pub sa: f64,
    pub ur: f64,
    pub ne: f64,
    pub pa: f64,
}

impl FundamentalArguments {
    pub fn new(t: f64) -> Self {
        Self {
            t,
            l: fal03(t),
            lp: falp03(t),
            f: faf03(t),
            d: fad03(t),
            om: faom03(t),
            me: fame03(t),
            ve: fave03(t),
            ea: fae03(t),
            ma: fama03(t),
            ju: faju03(t),
            sa: fasa03(t),
            ur: faur03(t),
            ne: fane03(t),
            pa: fapa03(t),
        }
    }

    /// The eight arguments multiplied by the CIO-locator and
    /// equation-of-equinoxes series: `l, l', F, D, Ω, L_Ve, L_E, p_A`.
    pub(crate) fn cio(&self) -> [f64; 8] {
        [
            self.l, self.lp, self.f, self.d, self.om, self.ve, self.ea, self.pa,
        ]
    }
}

/// Add `s·sin(a) + c·cos(a)` for each row of a term table to `acc`, last
/// row first, one term at a time.
pub(crate) fn accumulate_terms(acc: f64, terms: &[([i32; 8], f64, f64)], fa: &[f64; 8]) -> f64 {
    terms.iter().rev().fold(acc, |acc, (n, s, c)| {
        let mut a = 0.0;
        for (&k, &f) in n.iter().zip(fa) {
            a += f64::from(k) * f;
        }
        acc + (s * a.sin() + c * a.cos())
    })
}
