//! Earth rotation: ERA, sidereal time, polar motion and the
//! celestial-to-terrestrial matrix.
//!
//! Both the CIO-based route (ERA with the CIO locator) and the
//! equinox-based route (GST with the equation of the equinoxes) are
//! provided; they agree to the accuracy of the underlying models.
//!
//! Sources:
//! - Capitaine N., Guinot B. & McCarthy D.D., A&A 355, 398 (2000)
//! - Capitaine N., Wallace P.T. & Chapront J., A&A 432, 355 (2005)
//! - IERS Conventions 2003, ch. 5
//!
//! Public domain (IAU standard).

use drishti_math::constants::{DAS2R, DJ00, TAU};
use drishti_math::{IDENTITY, Matrix3, anp, anpm, mat_mul, rotate_x, rotate_y, rotate_z};
use drishti_time::TwoPartTime;

use crate::cio::{bpn2xy, eors, s06};
use crate::fundamental::{FundamentalArguments, accumulate_terms};
use crate::nutation::{NutationSeries, nut00b};
use crate::precession::{obl80, pr00};

/// Equation of the equinoxes complementary terms of order t^0, arcseconds.
#[rustfmt::skip]
static E0: [([i32; 8], f64, f64); 33] = [
    ([  0,   0,   0,   0,   1,   0,   0,   0],  2640.96e-6,  -0.39e-6),
    ([  0,   0,   0,   0,   2,   0,   0,   0],    63.52e-6,  -0.02e-6),
    ([  0,   0,   2,  -2,   3,   0,   0,   0],    11.75e-6,   0.01e-6),
    ([  0,   0,   2,  -2,   1,   0,   0,   0],    11.21e-6,   0.01e-6),
    ([  0,   0,   2,  -2,   2,   0,   0,   0],    -4.55e-6,   0.00e-6),
    ([  0,   0,   2,   0,   3,   0,   0,   0],     2.02e-6,   0.00e-6),
    ([  0,   0,   2,   0,   1,   0,   0,   0],     1.98e-6,   0.00e-6),
    ([  0,   0,   0,   0,   3,   0,   0,   0],    -1.72e-6,   0.00e-6),
    ([  0,   1,   0,   0,   1,   0,   0,   0],    -1.41e-6,  -0.01e-6),
    ([  0,   1,   0,   0,  -1,   0,   0,   0],    -1.26e-6,  -0.01e-6),
    ([  1,   0,   0,   0,  -1,   0,   0,   0],    -0.63e-6,   0.00e-6),
    ([  1,   0,   0,   0,   1,   0,   0,   0],    -0.63e-6,   0.00e-6),
    ([  0,   1,   2,  -2,   3,   0,   0,   0],     0.46e-6,   0.00e-6),
    ([  0,   1,   2,  -2,   1,   0,   0,   0],     0.45e-6,   0.00e-6),
    ([  0,   0,   4,  -4,   4,   0,   0,   0],     0.36e-6,   0.00e-6),
    ([  0,   0,   1,  -1,   1,  -8,  12,   0],    -0.24e-6,  -0.12e-6),
    ([  0,   0,   2,   0,   0,   0,   0,   0],     0.32e-6,   0.00e-6),
    ([  0,   0,   2,   0,   2,   0,   0,   0],     0.28e-6,   0.00e-6),
    ([  1,   0,   2,   0,   3,   0,   0,   0],     0.27e-6,   0.00e-6),
    ([  1,   0,   2,   0,   1,   0,   0,   0],     0.26e-6,   0.00e-6),
    ([  0,   0,   2,  -2,   0,   0,   0,   0],    -0.21e-6,   0.00e-6),
    ([  0,   1,  -2,   2,  -3,   0,   0,   0],     0.19e-6,   0.00e-6),
    ([  0,   1,  -2,   2,  -1,   0,   0,   0],     0.18e-6,   0.00e-6),
    ([  0,   0,   0,   0,   0,   8, -13,  -1],    -0.10e-6,   0.05e-6),
    ([  0,   0,   0,   2,   0,   0,   0,   0],     0.15e-6,   0.00e-6),
    ([  2,   0,  -2,   0,  -1,   0,   0,   0],    -0.14e-6,   0.00e-6),
    ([  1,   0,   0,  -2,   1,   0,   0,   0],     0.14e-6,   0.00e-6),
    ([  0,   1,   2,  -2,   2,   0,   0,   0],    -0.14e-6,   0.00e-6),
    ([  1,   0,   0,  -2,  -1,   0,   0,   0],     0.14e-6,   0.00e-6),
    ([  0,   0,   4,  -2,   4,   0,   0,   0],     0.13e-6,   0.00e-6),
    ([  0,   0,   2,  -2,   4,   0,   0,   0],    -0.11e-6,   0.00e-6),
    ([  1,   0,  -2,   0,  -3,   0,   0,   0],     0.11e-6,   0.00e-6),
    ([  1,   0,  -2,   0,  -1,   0,   0,   0],     0.11e-6,   0.00e-6),
];

/// Order t^1.
#[rustfmt::skip]
static E1: [([i32; 8], f64, f64); 1] = [
    ([  0,   0,   0,   0,   1,   0,   0,   0],    -0.87e-6,   0.00e-6),
];

/// Earth rotation angle, IAU 2000.
///
/// `ut1` may be split either way; the smaller part is reduced separately
/// to keep precision.
pub fn era00(ut1: TwoPartTime) -> f64 {
    let (d1, d2) = if ut1.whole < ut1.fraction {
        (ut1.whole, ut1.fraction)
    } else {
        (ut1.fraction, ut1.whole)
    };
    let t = d1 + (d2 - DJ00);

    // Fractional part of T (days).
    let f = d1 % 1.0 + d2 % 1.0;

    anp(TAU * (f + 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * t))
}

/// Greenwich mean sidereal time, consistent with IAU 2000 precession.
pub fn gmst00(ut1: TwoPartTime, tt: TwoPartTime) -> f64 {
    let t = tt.centuries_since_j2000();
    anp(era00(ut1)
        + (0.014_506
            + (4_612.157_399_66 + (1.396_677_21 + (-0.000_093_44 + 0.000_018_82 * t) * t) * t)
                * t)
            * DAS2R)
}

/// Greenwich mean sidereal time, consistent with IAU 2006 precession.
pub fn gmst06(ut1: TwoPartTime, tt: TwoPartTime) -> f64 {
    let t = tt.centuries_since_j2000();
    anp(era00(ut1)
        + (0.014_506
            + (4_612.156_534
                + (1.391_581_7 + (-0.000_000_44 + (-0.000_029_956 + -0.000_000_036_8 * t) * t) * t)
                    * t)
                * t)
            * DAS2R)
}

/// Complementary terms of the equation of the equinoxes, IAU 2000.
pub fn eect00(tt: TwoPartTime) -> f64 {
    eect00_with(&FundamentalArguments::new(tt.centuries_since_j2000()))
}

fn eect00_with(fa: &FundamentalArguments) -> f64 {
    let args = fa.cio();
    let s0 = accumulate_terms(0.0, &E0, &args);
    let s1 = accumulate_terms(0.0, &E1, &args);
    (s0 + s1 * fa.t) * DAS2R
}

/// Equation of the equinoxes, given the mean obliquity and nutation in
/// longitude.
pub fn ee00(tt: TwoPartTime, epsa: f64, dpsi: f64) -> f64 {
    dpsi * epsa.cos() + eect00(tt)
}

/// Equation of the equinoxes, IAU 2000B.
pub fn ee00b(tt: TwoPartTime) -> f64 {
    let epsa = obl80(tt) + pr00(tt).depspr;
    ee00(tt, epsa, nut00b(tt).dpsi)
}

/// Greenwich apparent sidereal time, IAU 2000B.
///
/// UT1 stands in for TT, which costs under 0.1 µas.
pub fn gst00b(ut1: TwoPartTime) -> f64 {
    anp(gmst00(ut1, ut1) + ee00b(ut1))
}

/// Greenwich apparent sidereal time from a given NPB matrix, IAU 2006.
pub fn gst06(ut1: TwoPartTime, tt: TwoPartTime, rnpb: &Matrix3) -> f64 {
    let (x, y) = bpn2xy(rnpb);
    let s = s06(tt, x, y);
    anp(era00(ut1) - eors(rnpb, s))
}

/// TIO locator s', IAU 2000.
pub fn sp00(tt: TwoPartTime) -> f64 {
    -47e-6 * tt.centuries_since_j2000() * DAS2R
}

/// Polar-motion matrix, IAU 2000.
///
/// `xp`, `yp` are the pole coordinates and `sp` the TIO locator.
pub fn pom00(xp: f64, yp: f64, sp: f64) -> Matrix3 {
    let mut r = IDENTITY;
    rotate_z(sp, &mut r);
    rotate_y(-xp, &mut r);
    rotate_x(-yp, &mut r);
    r
}

/// Celestial-to-terrestrial matrix, CIO based.
pub fn c2tcio(rc2i: &Matrix3, era: f64, rpom: &Matrix3) -> Matrix3 {
    let mut r = *rc2i;
    rotate_z(era, &mut r);
    mat_mul(rpom, &r)
}

/// Celestial-to-terrestrial matrix, equinox based.
pub fn c2teqx(rbpn: &Matrix3, gst: f64, rpom: &Matrix3) -> Matrix3 {
    let mut r = *rbpn;
    rotate_z(gst, &mut r);
    mat_mul(rpom, &r)
}

impl NutationSeries {
    /// Equation of the equinoxes, IAU 2000A.
    pub fn ee00a(&self, tt: TwoPartTime) -> f64 {
        let fa = FundamentalArguments::new(tt.centuries_since_j2000());
        let epsa = obl80(tt) + pr00(tt).depspr;
        self.nut00a_with(&fa).dpsi * epsa.cos() + eect00_with(&fa)
    }

    /// Greenwich apparent sidereal time, IAU 2000A.
    pub fn gst00a(&self, ut1: TwoPartTime, tt: TwoPartTime) -> f64 {
        anp(gmst00(ut1, tt) + self.ee00a(tt))
    }

    /// Greenwich apparent sidereal time, IAU 2006/2000A.
    pub fn gst06a(&self, ut1: TwoPartTime, tt: TwoPartTime) -> f64 {
        gst06(ut1, tt, &self.pnm06a(tt))
    }

    /// Equation of the equinoxes, IAU 2006/2000A.
    pub fn ee06a(&self, tt: TwoPartTime) -> f64 {
        let zero = TwoPartTime::new(0.0, 0.0);
        anpm(self.gst06a(zero, tt) - gmst06(zero, tt))
    }

    /// Celestial-to-terrestrial matrix, IAU 2006/2000A, CIO based.
    pub fn c2t06a(&self, tt: TwoPartTime, ut1: TwoPartTime, xp: f64, yp: f64) -> Matrix3 {
        let rc2i = self.c2i06a(tt);
        let rpom = pom00(xp, yp, sp00(tt));
        c2tcio(&rc2i, era00(ut1), &rpom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const RNPB: Matrix3 = [
        [0.999_998_944_047_610_360_8, -0.133_288_176_124_001_151_8e-2, -0.579_076_743_473_008_509_7e-3],
        [0.133_285_825_430_895_445_3e-2, 0.999_999_110_904_450_594_4, -0.409_778_271_040_155_575_9e-4],
        [0.579_130_847_216_815_332_0e-3, 0.402_059_566_159_399_439_6e-4, 0.999_999_831_495_457_236_5],
    ];

    const RPOM: Matrix3 = [
        [0.999_999_999_999_967_470_5, -0.136_717_458_072_884_703_1e-10, 0.255_060_237_999_997_272_3e-6],
        [0.141_462_494_795_702_972_1e-10, 0.999_999_999_998_269_495_4, -0.186_035_924_699_886_633_8e-5],
        [-0.255_060_237_974_121_527_5e-6, 0.186_035_924_700_241_392_3e-5, 0.999_999_999_998_236_965_8],
    ];

    const DEC_2005: TwoPartTime = TwoPartTime::new(2_453_736.0, 0.5);

    fn assert_matrix(m: &Matrix3, expected: [[f64; 3]; 3], eps: f64) {
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(m[i][j], expected[i][j], epsilon = eps);
            }
        }
    }

    #[test]
    fn earth_rotation_angle() {
        let era = era00(TwoPartTime::new(2_454_388.0, 0.5));
        assert_abs_diff_eq!(era, 0.402_283_724_002_815_810_2, epsilon = 1e-12);
        let swapped = era00(TwoPartTime::new(0.5, 2_454_388.0));
        assert_abs_diff_eq!(era, swapped, epsilon = 1e-12);
    }

    #[test]
    fn mean_sidereal_time() {
        assert_abs_diff_eq!(gmst00(DEC_2005, DEC_2005), 1.754_174_972_210_740_592, epsilon = 1e-12);
        assert_abs_diff_eq!(gmst06(DEC_2005, DEC_2005), 1.754_174_971_870_091_203, epsilon = 1e-12);
    }

    #[test]
    fn complementary_terms() {
        let e = eect00(TwoPartTime::new(2_400_000.5, 53_736.0));
        assert_abs_diff_eq!(e, 0.204_608_500_488_512_526_4e-8, epsilon = 1e-20);
    }

    #[test]
    fn equation_of_equinoxes() {
        let ee = ee00(DEC_2005, 0.409_078_976_335_650_990_0, -0.963_090_910_711_558_239_3e-5);
        assert_abs_diff_eq!(ee, -0.883_419_323_536_796_547_9e-5, epsilon = 1e-18);
        assert_abs_diff_eq!(ee00b(DEC_2005), -0.883_570_006_000_303_283_1e-5, epsilon = 1e-18);
    }

    #[test]
    fn apparent_sidereal_time() {
        assert_abs_diff_eq!(gst00b(DEC_2005), 1.754_166_136_510_680_589, epsilon = 1e-12);
        assert_abs_diff_eq!(
            gst06(DEC_2005, DEC_2005, &RNPB),
            1.754_166_138_018_167_568,
            epsilon = 1e-12
        );
    }

    #[test]
    fn tio_locator() {
        let sp = sp00(TwoPartTime::new(2_400_000.5, 52_541.0));
        assert_abs_diff_eq!(sp, -0.621_669_846_998_101_930_9e-11, epsilon = 1e-22);
    }

    #[test]
    fn polar_motion_matrix() {
        let r = pom00(2.550_602_38e-7, 1.860_359_247e-6, -0.136_717_458_072_889_146_0e-10);
        assert_matrix(
            &r,
            [
                [0.999_999_999_999_967_472_1, -0.136_717_458_072_884_698_9e-10, 0.255_060_237_999_997_234_5e-6],
                [0.141_462_494_795_702_980_1e-10, 0.999_999_999_998_269_531_7, -0.186_035_924_699_886_638_9e-5],
                [-0.255_060_237_974_121_502_1e-6, 0.186_035_924_700_241_402_1e-5, 0.999_999_999_998_237_003_9],
            ],
            1e-12,
        );
    }

    #[test]
    fn celestial_to_terrestrial_cio() {
        let rc2i = [
            [0.999_999_832_303_716_473_8, 0.558_152_627_171_430_368_3e-9, -0.579_130_847_707_344_390_3e-3],
            [-0.238_426_622_752_472_227_3e-7, 0.999_999_999_191_740_429_6, -0.402_059_495_503_070_412_5e-4],
            [0.579_130_847_216_815_332_0e-3, 0.402_059_566_159_399_439_6e-4, 0.999_999_831_495_457_236_5],
        ];
        let r = c2tcio(&rc2i, 1.752_833_255_303_07, &RPOM);
        assert_matrix(
            &r,
            [
                [-0.181_033_212_830_711_043_9, 0.983_476_980_693_847_014_9, 0.655_553_563_868_546_687_4e-4],
                [-0.983_476_813_413_599_665_7, -0.181_033_220_364_944_836_7, 0.574_980_111_614_110_652_8e-3],
                [0.577_347_401_408_140_707_6e-3, 0.396_183_239_177_265_894_4e-4, 0.999_999_832_550_169_196_9],
            ],
            1e-12,
        );
    }

    #[test]
    fn celestial_to_terrestrial_equinox() {
        let r = c2teqx(&RNPB, 1.754_166_138_040_730_516, &RPOM);
        assert_matrix(
            &r,
            [
                [-0.181_033_212_852_868_573_0, 0.983_476_980_689_768_507_1, 0.655_553_563_998_263_444_9e-4],
                [-0.983_476_813_409_521_125_7, -0.181_033_220_387_102_380_0, 0.574_980_111_612_643_896_2e-3],
                [0.577_347_401_408_153_946_7e-3, 0.396_183_239_176_864_087_1e-4, 0.999_999_832_550_169_196_9],
            ],
            1e-12,
        );
    }
}
