//! Nutation, IAU 2000A/2000B and the IAU 2006 adjustment.
//!
//! - [`NutationSeries`]: the full MHB2000 series (678 luni-solar and
//!   687 planetary terms) loaded from `LUNISOLAR-NUT.dat` and
//!   `PLANETARY-NUT.dat`
//! - [`nut00b`]: the 77-term truncation with fixed planetary offsets,
//!   accurate to about 1 mas over 1995-2050
//!
//! Every series is summed from the last term to the first.
//!
//! Sources:
//! - Mathews P.M., Herring T.A. & Buffett B.A., J. Geophys. Res. 107 (2002)
//! - McCarthy D.D. & Luzum B.J., Celest. Mech. 85, 37 (2003)
//! - Capitaine N., Wallace P.T. & Chapront J., A&A 432, 355 (2005)
//!
//! Public domain (IAU standard).

use std::path::Path;

use drishti_math::constants::{DAS2R, DMAS2R, TAU, TURNAS};
use drishti_math::{IDENTITY, LeReader, Matrix3, mat_mul, read_blob, rotate_x, rotate_z};
use drishti_time::TwoPartTime;

use crate::error::FrameError;
use crate::fundamental::FundamentalArguments;
use crate::precession::{bp00, fw2m, obl06, obl80, pfw06, pr00};

/// File names of the full nutation series inside a series directory.
pub const LUNISOLAR_FILE: &str = "LUNISOLAR-NUT.dat";
pub const PLANETARY_FILE: &str = "PLANETARY-NUT.dat";

pub(crate) const LUNISOLAR_ROWS: usize = 678;
pub(crate) const PLANETARY_ROWS: usize = 687;
/// 5 × i32 + 6 × f64.
pub(crate) const LUNISOLAR_RECORD: usize = 68;
/// 17 × i32.
pub(crate) const PLANETARY_RECORD: usize = 68;

/// Series coefficients are in units of 0.1 µas.
const U2R: f64 = DAS2R / 1e7;

/// Fixed planetary offsets standing in for the planetary series in 2000B.
const DPPLAN: f64 = -0.135 * DMAS2R;
const DEPLAN: f64 = 0.388 * DMAS2R;

/// Nutation in longitude and obliquity (radians).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Nutation {
    pub dpsi: f64,
    pub deps: f64,
}

/// One luni-solar term: multipliers of `l, l', F, D, Ω` and the
/// coefficients `sp, spt, cp, ce, cet, se`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunisolarTerm {
    pub mult: [i32; 5],
    pub coef: [f64; 6],
}

/// One planetary term: 13 argument multipliers and `sp, cp, se, ce`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetaryTerm {
    pub mult: [i32; 13],
    pub coef: [i32; 4],
}

/// Luni-solar terms of IAU 2000B, units of 0.1 µas.
#[rustfmt::skip]
static NUT00B: [([i32; 5], [f64; 6]); 77] = [
    ([ 0,  0,  0,  0,  1], [ -172064161.0,     -174666.0,       33386.0,    92052331.0,        9086.0,       15377.0]),
    ([ 0,  0,  2, -2,  2], [  -13170906.0,       -1675.0,      -13696.0,     5730336.0,       -3015.0,       -4587.0]),
    ([ 0,  0,  2,  0,  2], [   -2276413.0,        -234.0,        2796.0,      978459.0,        -485.0,        1374.0]),
    ([ 0,  0,  0,  0,  2], [    2074554.0,         207.0,        -698.0,     -897492.0,         470.0,        -291.0]),
    ([ 0,  1,  0,  0,  0], [    1475877.0,       -3633.0,       11817.0,       73871.0,        -184.0,       -1924.0]),
    ([ 0,  1,  2, -2,  2], [    -516821.0,        1226.0,        -524.0,      224386.0,        -677.0,        -174.0]),
    ([ 1,  0,  0,  0,  0], [     711159.0,          73.0,        -872.0,       -6750.0,           0.0,         358.0]),
    ([ 0,  0,  2,  0,  1], [    -387298.0,        -367.0,         380.0,      200728.0,          18.0,         318.0]),
    ([ 1,  0,  2,  0,  2], [    -301461.0,         -36.0,         816.0,      129025.0,         -63.0,         367.0]),
    ([ 0, -1,  2, -2,  2], [     215829.0,        -494.0,         111.0,      -95929.0,         299.0,         132.0]),
    ([ 0,  0,  2, -2,  1], [     128227.0,         137.0,         181.0,      -68982.0,          -9.0,          39.0]),
    ([-1,  0,  2,  0,  2], [     123457.0,          11.0,          19.0,      -53311.0,          32.0,          -4.0]),
    ([-1,  0,  0,  2,  0], [     156994.0,          10.0,        -168.0,       -1235.0,           0.0,          82.0]),
    ([ 1,  0,  0,  0,  1], [      63110.0,          63.0,          27.0,      -33228.0,           0.0,          -9.0]),
    ([-1,  0,  0,  0,  1], [     -57976.0,         -63.0,        -189.0,       31429.0,           0.0,         -75.0]),
    ([-1,  0,  2,  2,  2], [     -59641.0,         -11.0,         149.0,       25543.0,         -11.0,          66.0]),
    ([ 1,  0,  2,  0,  1], [     -51613.0,         -42.0,         129.0,       26366.0,           0.0,          78.0]),
    ([-2,  0,  2,  0,  1], [      45893.0,          50.0,          31.0,      -24236.0,         -10.0,          20.0]),
    ([ 0,  0,  0,  2,  0], [      63384.0,          11.0,        -150.0,       -1220.0,           0.0,          29.0]),
    ([ 0,  0,  2,  2,  2], [     -38571.0,          -1.0,         158.0,       16452.0,         -11.0,          68.0]),
    ([ 0, -2,  2, -2,  2], [      32481.0,           0.0,           0.0,      -13870.0,           0.0,           0.0]),
    ([-2,  0,  0,  2,  0], [     -47722.0,           0.0,         -18.0,         477.0,           0.0,         -25.0]),
    ([ 2,  0,  2,  0,  2], [     -31046.0,          -1.0,         131.0,       13238.0,         -11.0,          59.0]),
    ([ 1,  0,  2, -2,  2], [      28593.0,           0.0,          -1.0,      -12338.0,          10.0,          -3.0]),
    ([-1,  0,  2,  0,  1], [      20441.0,          21.0,          10.0,      -10758.0,           0.0,          -3.0]),
    ([ 2,  0,  0,  0,  0], [      29243.0,           0.0,         -74.0,        -609.0,           0.0,          13.0]),
    ([ 0,  0,  2,  0,  0], [      25887.0,           0.0,         -66.0,        -550.0,           0.0,          11.0]),
    ([ 0,  1,  0,  0,  1], [     -14053.0,         -25.0,          79.0,        8551.0,          -2.0,         -45.0]),
    ([-1,  0,  0,  2,  1], [      15164.0,          10.0,          11.0,       -8001.0,           0.0,          -1.0]),
    ([ 0,  2,  2, -2,  2], [     -15794.0,          72.0,         -16.0,        6850.0,         -42.0,          -5.0]),
    ([ 0,  0, -2,  2,  0], [      21783.0,           0.0,          13.0,        -167.0,           0.0,          13.0]),
    ([ 1,  0,  0, -2,  1], [     -12873.0,         -10.0,         -37.0,        6953.0,           0.0,         -14.0]),
    ([ 0, -1,  0,  0,  1], [     -12654.0,          11.0,          63.0,        6415.0,           0.0,          26.0]),
    ([-1,  0,  2,  2,  1], [     -10204.0,           0.0,          25.0,        5222.0,           0.0,          15.0]),
    ([ 0,  2,  0,  0,  0], [      16707.0,         -85.0,         -10.0,         168.0,          -1.0,          10.0]),
    ([ 1,  0,  2,  2,  2], [      -7691.0,           0.0,          44.0,        3268.0,           0.0,          19.0]),
    ([-2,  0,  2,  0,  0], [     -11024.0,           0.0,         -14.0,         104.0,           0.0,           2.0]),
    ([ 0,  1,  2,  0,  2], [       7566.0,         -21.0,         -11.0,       -3250.0,           0.0,          -5.0]),
    ([ 0,  0,  2,  2,  1], [      -6637.0,         -11.0,          25.0,        3353.0,           0.0,          14.0]),
    ([ 0, -1,  2,  0,  2], [      -7141.0,          21.0,           8.0,        3070.0,           0.0,           4.0]),
    ([ 0,  0,  0,  2,  1], [      -6302.0,         -11.0,           2.0,        3272.0,           0.0,           4.0]),
    ([ 1,  0,  2, -2,  1], [       5800.0,          10.0,           2.0,       -3045.0,           0.0,          -1.0]),
    ([ 2,  0,  2, -2,  2], [       6443.0,           0.0,          -7.0,       -2768.0,           0.0,          -4.0]),
    ([-2,  0,  0,  2,  1], [      -5774.0,         -11.0,         -15.0,        3041.0,           0.0,          -5.0]),
    ([ 2,  0,  2,  0,  1], [      -5350.0,           0.0,          21.0,        2695.0,           0.0,          12.0]),
    ([ 0, -1,  2, -2,  1], [      -4752.0,         -11.0,          -3.0,        2719.0,           0.0,          -3.0]),
    ([ 0,  0,  0, -2,  1], [      -4940.0,         -11.0,         -21.0,        2720.0,           0.0,          -9.0]),
    ([-1, -1,  0,  2,  0], [       7350.0,           0.0,          -8.0,         -51.0,           0.0,           4.0]),
    ([ 2,  0,  0, -2,  1], [       4065.0,           0.0,           6.0,       -2206.0,           0.0,           1.0]),
    ([ 1,  0,  0,  2,  0], [       6579.0,           0.0,         -24.0,        -199.0,           0.0,           2.0]),
    ([ 0,  1,  2, -2,  1], [       3579.0,           0.0,           5.0,       -1900.0,           0.0,           1.0]),
    ([ 1, -1,  0,  0,  0], [       4725.0,           0.0,          -6.0,         -41.0,           0.0,           3.0]),
    ([-2,  0,  2,  0,  2], [      -3075.0,           0.0,          -2.0,        1313.0,           0.0,          -1.0]),
    ([ 3,  0,  2,  0,  2], [      -2904.0,           0.0,          15.0,        1233.0,           0.0,           7.0]),
    ([ 0, -1,  0,  2,  0], [       4348.0,           0.0,         -10.0,         -81.0,           0.0,           2.0]),
    ([ 1, -1,  2,  0,  2], [      -2878.0,           0.0,           8.0,        1232.0,           0.0,           4.0]),
    ([ 0,  0,  0,  1,  0], [      -4230.0,           0.0,           5.0,         -20.0,           0.0,          -2.0]),
    ([-1, -1,  2,  2,  2], [      -2819.0,           0.0,           7.0,        1207.0,           0.0,           3.0]),
    ([-1,  0,  2,  0,  0], [      -4056.0,           0.0,           5.0,          40.0,           0.0,          -2.0]),
    ([ 0, -1,  2,  2,  2], [      -2647.0,           0.0,          11.0,        1129.0,           0.0,           5.0]),
    ([-2,  0,  0,  0,  1], [      -2294.0,           0.0,         -10.0,        1266.0,           0.0,          -4.0]),
    ([ 1,  1,  2,  0,  2], [       2481.0,           0.0,          -7.0,       -1062.0,           0.0,          -3.0]),
    ([ 2,  0,  0,  0,  1], [       2179.0,           0.0,          -2.0,       -1129.0,           0.0,          -2.0]),
    ([-1,  1,  0,  1,  0], [       3276.0,           0.0,           1.0,          -9.0,           0.0,           0.0]),
    ([ 1,  1,  0,  0,  0], [      -3389.0,           0.0,           5.0,          35.0,           0.0,          -2.0]),
    ([ 1,  0,  2,  0,  0], [       3339.0,           0.0,         -13.0,        -107.0,           0.0,           1.0]),
    ([-1,  0,  2, -2,  1], [      -1987.0,           0.0,          -6.0,        1073.0,           0.0,          -2.0]),
    ([ 1,  0,  0,  0,  2], [      -1981.0,           0.0,           0.0,         854.0,           0.0,           0.0]),
    ([-1,  0,  0,  1,  0], [       4026.0,           0.0,        -353.0,        -553.0,           0.0,        -139.0]),
    ([ 0,  0,  2,  1,  2], [       1660.0,           0.0,          -5.0,        -710.0,           0.0,          -2.0]),
    ([-1,  0,  2,  4,  2], [      -1521.0,           0.0,           9.0,         647.0,           0.0,           4.0]),
    ([-1,  1,  0,  1,  1], [       1314.0,           0.0,           0.0,        -700.0,           0.0,           0.0]),
    ([ 0, -2,  2, -2,  1], [      -1283.0,           0.0,           0.0,         672.0,           0.0,           0.0]),
    ([ 1,  0,  2,  2,  1], [      -1331.0,           0.0,           8.0,         663.0,           0.0,           4.0]),
    ([-2,  0,  2,  2,  2], [       1383.0,           0.0,          -2.0,        -594.0,           0.0,          -2.0]),
    ([-1,  0,  0,  0,  2], [       1405.0,           0.0,           4.0,        -610.0,           0.0,           2.0]),
    ([ 1,  1,  2, -2,  2], [       1290.0,           0.0,           0.0,        -556.0,           0.0,           0.0]),
];

fn lunisolar_sum<'a>(
    terms: impl DoubleEndedIterator<Item = (&'a [i32; 5], &'a [f64; 6])>,
    args: [f64; 5],
    t: f64,
) -> Nutation {
    let (mut dp, mut de) = (0.0, 0.0);
    for (mult, c) in terms.rev() {
        let arg: f64 = mult
            .iter()
            .zip(args)
            .map(|(&k, a)| f64::from(k) * a)
            .sum::<f64>()
            % TAU;
        let (s, co) = arg.sin_cos();
        dp += (c[0] + c[1] * t) * s + c[2] * co;
        de += (c[3] + c[4] * t) * co + c[5] * s;
    }
    Nutation {
        dpsi: dp * U2R,
        deps: de * U2R,
    }
}

/// Nutation, IAU 2000B.
pub fn nut00b(tt: TwoPartTime) -> Nutation {
    let t = tt.centuries_since_j2000();

    let args = [
        ((485_868.249_036 + 1_717_915_923.217_8 * t) % TURNAS) * DAS2R,
        ((1_287_104.793_05 + 129_596_581.048_1 * t) % TURNAS) * DAS2R,
        ((335_779.526_232 + 1_739_527_262.847_8 * t) % TURNAS) * DAS2R,
        ((1_072_260.703_69 + 1_602_961_601.209_0 * t) % TURNAS) * DAS2R,
        ((450_160.398_036 - 6_962_890.543_1 * t) % TURNAS) * DAS2R,
    ];

    let ls = lunisolar_sum(NUT00B.iter().map(|(m, c)| (m, c)), args, t);
    Nutation {
        dpsi: ls.dpsi + DPPLAN,
        deps: ls.deps + DEPLAN,
    }
}

/// Nutation matrix from mean obliquity and nutation components.
pub fn numat(epsa: f64, dpsi: f64, deps: f64) -> Matrix3 {
    let mut r = IDENTITY;
    rotate_x(epsa, &mut r);
    rotate_z(-dpsi, &mut r);
    rotate_x(-(epsa + deps), &mut r);
    r
}

/// Precession-nutation products of the IAU 2000 models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecessionNutation {
    /// Mean obliquity (IAU 1980 plus the 2000 rate correction).
    pub epsa: f64,
    /// Frame bias.
    pub rb: Matrix3,
    /// Precession.
    pub rp: Matrix3,
    /// Bias-precession.
    pub rbp: Matrix3,
    /// Nutation.
    pub rn: Matrix3,
    /// GCRS → true equator and equinox of date.
    pub rbpn: Matrix3,
}

/// Bias, precession and nutation matrices for a given nutation, IAU 2000.
pub fn pn00(tt: TwoPartTime, nutation: Nutation) -> PrecessionNutation {
    let epsa = obl80(tt) + pr00(tt).depspr;
    let bp = bp00(tt);
    let rn = numat(epsa, nutation.dpsi, nutation.deps);
    PrecessionNutation {
        epsa,
        rb: bp.rb,
        rp: bp.rp,
        rbp: bp.rbp,
        rn,
        rbpn: mat_mul(&rn, &bp.rbp),
    }
}

/// Bias-precession-nutation matrix, IAU 2000B.
pub fn pnm00b(tt: TwoPartTime) -> Matrix3 {
    pn00(tt, nut00b(tt)).rbpn
}

/// The full IAU 2000A nutation series.
#[derive(Debug, Clone)]
pub struct NutationSeries {
    lunisolar: Vec<LunisolarTerm>,
    planetary: Vec<PlanetaryTerm>,
}

impl NutationSeries {
    /// Decode both series from their little-endian blobs.
    pub fn from_bytes(lunisolar: &[u8], planetary: &[u8]) -> Result<Self, FrameError> {
        let mut r = LeReader::new("LUNISOLAR-NUT", lunisolar, LUNISOLAR_RECORD, LUNISOLAR_ROWS)?;
        let lunisolar = (0..LUNISOLAR_ROWS)
            .map(|_| {
                let mult = [r.i32(), r.i32(), r.i32(), r.i32(), r.i32()];
                let coef = [r.f64(), r.f64(), r.f64(), r.f64(), r.f64(), r.f64()];
                LunisolarTerm { mult, coef }
            })
            .collect::<Vec<_>>();

        let mut r = LeReader::new("PLANETARY-NUT", planetary, PLANETARY_RECORD, PLANETARY_ROWS)?;
        let planetary = (0..PLANETARY_ROWS)
            .map(|_| {
                let mut mult = [0i32; 13];
                mult.iter_mut().for_each(|m| *m = r.i32());
                let coef = [r.i32(), r.i32(), r.i32(), r.i32()];
                PlanetaryTerm { mult, coef }
            })
            .collect::<Vec<_>>();

        log::debug!(
            "decoded nutation series: {} luni-solar, {} planetary terms",
            lunisolar.len(),
            planetary.len()
        );
        Ok(Self {
            lunisolar,
            planetary,
        })
    }

    /// Load both blobs from a series directory.
    pub fn load(dir: &Path) -> Result<Self, FrameError> {
        let ls = read_blob(&dir.join(LUNISOLAR_FILE))?;
        let pl = read_blob(&dir.join(PLANETARY_FILE))?;
        Self::from_bytes(&ls, &pl)
    }

    pub fn lunisolar_terms(&self) -> &[LunisolarTerm] {
        &self.lunisolar
    }

    pub fn planetary_terms(&self) -> &[PlanetaryTerm] {
        &self.planetary
    }

    /// IAU 2000A nutation from precomputed fundamental arguments.
    pub fn nut00a_with(&self, fa: &FundamentalArguments) -> Nutation {
        let t = fa.t;

        // Luni-solar part: MHB2000 l' and D, IERS 2003 for the rest.
        let elp = ((1_287_104.793_05
            + t * (129_596_581.048_1 + t * (-0.553_2 + t * (0.000_136 + t * -0.000_011_49))))
            % TURNAS)
            * DAS2R;
        let d = ((1_072_260.703_69
            + t * (1_602_961_601.209_0 + t * (-6.370_6 + t * (0.006_593 + t * -0.000_031_69))))
            % TURNAS)
            * DAS2R;
        let ls = lunisolar_sum(
            self.lunisolar.iter().map(|term| (&term.mult, &term.coef)),
            [fa.l, elp, fa.f, d, fa.om],
            t,
        );

        // Planetary part: MHB2000 linear arguments for the Moon.
        let args = [
            (2.355_555_98 + 8_328.691_426_955_4 * t) % TAU,
            (1.627_905_234 + 8_433.466_158_131 * t) % TAU,
            (5.198_466_741 + 7_771.377_146_812_1 * t) % TAU,
            (2.182_439_20 - 33.757_045 * t) % TAU,
            fa.me,
            fa.ve,
            fa.ea,
            fa.ma,
            fa.ju,
            fa.sa,
            fa.ur,
            (5.321_159_000 + 3.812_777_400_0 * t) % TAU,
            fa.pa,
        ];
        let (mut dp, mut de) = (0.0, 0.0);
        for term in self.planetary.iter().rev() {
            let arg: f64 = term
                .mult
                .iter()
                .zip(args)
                .map(|(&k, a)| f64::from(k) * a)
                .sum::<f64>()
                % TAU;
            let (s, c) = arg.sin_cos();
            let [sp, cp, se, ce] = term.coef.map(f64::from);
            dp += sp * s + cp * c;
            de += se * s + ce * c;
        }

        Nutation {
            dpsi: ls.dpsi + dp * U2R,
            deps: ls.deps + de * U2R,
        }
    }

    /// Nutation, IAU 2000A.
    pub fn nut00a(&self, tt: TwoPartTime) -> Nutation {
        self.nut00a_with(&FundamentalArguments::new(tt.centuries_since_j2000()))
    }

    /// IAU 2000A nutation with the IAU 2006 adjustments, from
    /// precomputed fundamental arguments.
    pub fn nut06a_with(&self, fa: &FundamentalArguments) -> Nutation {
        // Secular J2 decrease.
        let fj2 = -2.7774e-6 * fa.t;
        let n = self.nut00a_with(fa);
        Nutation {
            dpsi: n.dpsi + n.dpsi * (0.4697e-6 + fj2),
            deps: n.deps + n.deps * fj2,
        }
    }

    /// Nutation, IAU 2000A adjusted for IAU 2006 precession.
    pub fn nut06a(&self, tt: TwoPartTime) -> Nutation {
        self.nut06a_with(&FundamentalArguments::new(tt.centuries_since_j2000()))
    }

    /// Bias-precession-nutation matrix, IAU 2006/2000A, from precomputed
    /// fundamental arguments.
    pub(crate) fn pnm06a_with(&self, tt: TwoPartTime, fa: &FundamentalArguments) -> Matrix3 {
        let fw = pfw06(tt);
        let n = self.nut06a_with(fa);
        fw2m(fw.gamb, fw.phib, fw.psib + n.dpsi, fw.epsa + n.deps)
    }

    /// Bias-precession-nutation matrix GCRS → true of date, IAU 2006/2000A.
    pub fn pnm06a(&self, tt: TwoPartTime) -> Matrix3 {
        self.pnm06a_with(tt, &FundamentalArguments::new(tt.centuries_since_j2000()))
    }

    /// Nutation matrix, IAU 2006/2000A.
    pub fn num06a(&self, tt: TwoPartTime) -> Matrix3 {
        let n = self.nut06a(tt);
        numat(obl06(tt), n.dpsi, n.deps)
    }

    /// Precession-nutation products using IAU 2000A nutation.
    pub fn pn00a(&self, tt: TwoPartTime) -> PrecessionNutation {
        pn00(tt, self.nut00a(tt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use drishti_math::{BlobError, determinant, transpose};

    #[test]
    fn nutation_2000b() {
        let n = nut00b(TwoPartTime::new(2_453_736.0, 0.5));
        assert_abs_diff_eq!(n.dpsi, -0.963_255_229_114_836_278_3e-5, epsilon = 1e-13);
        assert_abs_diff_eq!(n.deps, 0.406_319_710_662_115_936_7e-4, epsilon = 1e-13);
    }

    #[test]
    fn nutation_matrix() {
        let r = numat(
            0.409_078_976_335_650_990_0,
            -0.963_090_910_711_558_239_3e-5,
            0.406_323_917_400_167_882_6e-4,
        );
        let expected = [
            [0.999_999_999_953_622_794_9, 0.883_623_932_023_625_057_7e-5, 0.383_083_344_745_825_190_8e-5],
            [-0.883_608_365_701_668_858_8e-5, 0.999_999_999_135_465_495_9, -0.406_324_086_536_185_769_8e-4],
            [-0.383_119_248_183_338_522_6e-5, 0.406_323_748_021_693_415_9e-4, 0.999_999_999_167_166_040_7],
        ];
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(r[i][j], expected[i][j], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn truncated_bpn_is_rotation() {
        let tt = TwoPartTime::new(2_453_736.0, 0.5);
        let pn = pn00(tt, nut00b(tt));
        assert_abs_diff_eq!(determinant(&pn.rbpn), 1.0, epsilon = 1e-14);
        let back = mat_mul(&transpose(&pn.rbpn), &pn.rbpn);
        for i in 0..3 {
            for j in 0..3 {
                let id = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(back[i][j], id, epsilon = 1e-14);
            }
        }
        assert_eq!(pnm00b(tt), pn.rbpn);
    }

    fn one_term_blobs() -> (Vec<u8>, Vec<u8>) {
        // A single luni-solar term in Ω with 1 mas in each coefficient of
        // sin/cos, everything else zero.
        let mut ls = Vec::with_capacity(LUNISOLAR_ROWS * LUNISOLAR_RECORD);
        for i in 0..LUNISOLAR_ROWS {
            let mult = if i == 0 { [0, 0, 0, 0, 1] } else { [0; 5] };
            let coef = if i == 0 {
                [1e4, 0.0, 0.0, 1e4, 0.0, 0.0]
            } else {
                [0.0; 6]
            };
            mult.iter().for_each(|m: &i32| ls.extend(m.to_le_bytes()));
            coef.iter().for_each(|c: &f64| ls.extend(c.to_le_bytes()));
        }
        let pl = vec![0u8; PLANETARY_ROWS * PLANETARY_RECORD];
        (ls, pl)
    }

    #[test]
    fn synthetic_series() {
        let (ls, pl) = one_term_blobs();
        let series = NutationSeries::from_bytes(&ls, &pl).unwrap();
        assert_eq!(series.lunisolar_terms().len(), LUNISOLAR_ROWS);
        assert_eq!(series.planetary_terms().len(), PLANETARY_ROWS);

        let fa = FundamentalArguments::new(0.1);
        let n = series.nut00a_with(&fa);
        let om = fa.om % TAU;
        assert_abs_diff_eq!(n.dpsi, DMAS2R * om.sin(), epsilon = 1e-18);
        assert_abs_diff_eq!(n.deps, DMAS2R * om.cos(), epsilon = 1e-18);
    }

    #[test]
    fn rejects_truncated_blob() {
        let (ls, pl) = one_term_blobs();
        let err = NutationSeries::from_bytes(&ls[..ls.len() - 4], &pl).unwrap_err();
        assert!(matches!(err, FrameError::Table(BlobError::Size { .. })));
    }
}
