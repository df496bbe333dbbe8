//! Integration tests for the one-shot composites with the full models
//! (require the IAU 2000A nutation and EPV00 blobs).

use std::path::PathBuf;

use approx::assert_abs_diff_eq;
use drishti_astrometry::{
    CatalogStar, Environment, EnvironmentConfig, ObservedCoordinates, Site, Weather,
};
use drishti_frames::{LUNISOLAR_FILE, PLANETARY_FILE};
use drishti_math::{determinant, mat_mul, transpose};
use drishti_time::TwoPartTime;

const TDB_2012: TwoPartTime = TwoPartTime::new(2_456_165.5, 0.401_182_685);
const UTC_2013: TwoPartTime = TwoPartTime::new(2_456_384.5, 0.969_254_051);

fn full_environment() -> Option<Environment> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/series");
    for file in [LUNISOLAR_FILE, PLANETARY_FILE, "E0X.dat", "S2Z.dat"] {
        if !dir.join(file).exists() {
            eprintln!("Skipping: {file} not found in {}", dir.display());
            return None;
        }
    }
    Some(Environment::from_config(&EnvironmentConfig::full(dir)).expect("should load series"))
}

fn site() -> Site {
    Site {
        longitude: -0.527_800_806,
        latitude: -1.234_585_6,
        height: 2738.0,
        xp: 2.472_307_37e-7,
        yp: 1.826_404_64e-6,
        dut1: 0.155_067_5,
    }
}

fn weather() -> Weather {
    Weather {
        pressure: 731.0,
        temperature: 12.8,
        humidity: 0.59,
        wavelength: 0.55,
    }
}

fn star() -> CatalogStar {
    CatalogStar {
        ra: 2.71,
        dec: 0.174,
        pm_ra: 1e-5,
        pm_dec: 5e-6,
        parallax: 0.1,
        radial_velocity: 55.0,
    }
}

#[test]
fn intermediate_parameters() {
    let Some(env) = full_environment() else { return };
    let prepared = env.apci13(TDB_2012);
    let a = prepared.params;

    assert_abs_diff_eq!(a.pmt, 12.651_337_940_273_785_08, epsilon = 1e-11);
    let eb = [0.901_310_874_734_064_475_5, -0.417_402_664_040_611_995_7, -0.180_982_287_786_781_777_1];
    let eh = [0.894_002_542_925_549_954_9, -0.411_093_026_833_189_631_8, -0.178_218_900_601_974_985_0];
    let v = [0.428_963_891_294_134_112_5e-4, 0.811_503_403_240_504_213_2e-4, 0.351_755_513_553_647_027_9e-4];
    for i in 0..3 {
        assert_abs_diff_eq!(a.eb[i], eb[i], epsilon = 1e-12);
        assert_abs_diff_eq!(a.eh[i], eh[i], epsilon = 1e-12);
        assert_abs_diff_eq!(a.v[i], v[i], epsilon = 1e-16);
    }
    assert_abs_diff_eq!(a.em, 1.010_465_295_964_664_178, epsilon = 1e-12);
    assert_abs_diff_eq!(a.bm1, 0.999_999_995_168_601_314_2, epsilon = 1e-12);

    assert_abs_diff_eq!(a.bpn[0][0], 0.999_999_206_037_676_171_0, epsilon = 1e-12);
    assert_abs_diff_eq!(a.bpn[1][0], 0.412_424_486_010_603_715_7e-7, epsilon = 1e-12);
    assert_abs_diff_eq!(a.bpn[2][0], 0.126_012_857_105_170_967_0e-2, epsilon = 1e-12);
    assert_abs_diff_eq!(a.bpn[0][1], -0.128_229_198_722_213_069_0e-7, epsilon = 1e-12);
    assert_abs_diff_eq!(a.bpn[1][1], 0.999_999_999_745_683_532_5, epsilon = 1e-12);
    assert_abs_diff_eq!(a.bpn[2][1], -0.225_528_882_942_052_493_5e-4, epsilon = 1e-12);
    assert_abs_diff_eq!(a.bpn[0][2], -0.126_012_857_166_137_455_9e-2, epsilon = 1e-12);
    assert_abs_diff_eq!(a.bpn[1][2], 0.225_528_542_295_339_549_4e-4, epsilon = 1e-12);
    assert_abs_diff_eq!(a.bpn[2][2], 0.999_999_205_783_360_434_3, epsilon = 1e-12);

    assert_abs_diff_eq!(prepared.eo, -0.002_900_618_712_657_375_647, epsilon = 1e-14);

    // The BPN matrix is a rotation.
    let rrt = mat_mul(&a.bpn, &transpose(&a.bpn));
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(rrt[i][j], expected, epsilon = 1e-14);
        }
    }
    assert_abs_diff_eq!(determinant(&a.bpn), 1.0, epsilon = 1e-14);
}

#[test]
fn catalog_to_intermediate() {
    let Some(env) = full_environment() else { return };
    let ci = env.atci13(&star(), TDB_2012);
    assert_abs_diff_eq!(ci.place.ra, 2.710_121_572_968_696_744, epsilon = 1e-12);
    assert_abs_diff_eq!(ci.place.dec, 0.172_937_136_721_953_913_7, epsilon = 1e-12);
    assert_abs_diff_eq!(ci.eo, -0.002_900_618_712_657_375_647, epsilon = 1e-14);
}

#[test]
fn intermediate_to_catalog() {
    let Some(env) = full_environment() else { return };
    let c = env.atic13(2.710_121_572_969_038_991, 0.172_937_136_721_823_043_8, TDB_2012);
    assert_abs_diff_eq!(c.place.ra, 2.710_126_504_531_716_819, epsilon = 1e-12);
    assert_abs_diff_eq!(c.place.dec, 0.174_063_253_762_703_448_2, epsilon = 1e-12);
    assert_abs_diff_eq!(c.eo, -0.002_900_618_712_657_375_647, epsilon = 1e-14);
}

#[test]
fn topocentric_parameters() {
    let Some(env) = full_environment() else { return };
    let prepared = env.apco13(UTC_2013, &site(), &weather()).unwrap();
    let a = prepared.params;
    assert_abs_diff_eq!(a.along, -0.527_800_806_029_599_573_4, epsilon = 1e-12);
    assert_abs_diff_eq!(a.xpl, 0.113_342_741_813_075_295_8e-5, epsilon = 1e-17);
    assert_abs_diff_eq!(a.ypl, 0.145_334_759_578_064_620_7e-5, epsilon = 1e-17);
    assert_abs_diff_eq!(a.eral, 2.617_608_909_189_664_000, epsilon = 1e-12);
    assert_abs_diff_eq!(a.refa, 0.201_418_778_594_039_692_1e-3, epsilon = 1e-15);
    assert_abs_diff_eq!(a.refb, -0.236_140_831_494_369_622_7e-6, epsilon = 1e-18);
    assert_eq!(a.diurab, 0.0);
    assert_abs_diff_eq!(prepared.eo, -0.003_020_548_354_802_412_839, epsilon = 1e-14);
}

#[test]
fn catalog_to_observed() {
    let Some(env) = full_environment() else { return };
    let o = env.atco13(&star(), UTC_2013, &site(), &weather()).unwrap();
    assert_abs_diff_eq!(o.place.azimuth, 0.092_517_744_854_855_152_07, epsilon = 1e-12);
    assert_abs_diff_eq!(o.place.zenith_distance, 1.407_661_405_256_499_357, epsilon = 1e-12);
    assert_abs_diff_eq!(o.place.hour_angle, -0.092_651_544_315_296_924_69, epsilon = 1e-12);
    assert_abs_diff_eq!(o.place.declination, 0.171_662_656_007_252_620_0, epsilon = 1e-12);
    assert_abs_diff_eq!(o.place.right_ascension, 2.710_260_453_504_961_012, epsilon = 1e-12);
    assert_abs_diff_eq!(o.eo, -0.003_020_548_354_802_412_839, epsilon = 1e-14);
}

#[test]
fn observed_to_catalog() {
    let Some(env) = full_environment() else { return };
    let inputs = [
        (
            ObservedCoordinates::RaDec {
                ra: 2.710_085_107_986_886_201,
                dec: 0.171_765_343_575_826_519_8,
            },
            0.174_169_650_089_539_856_2,
        ),
        (
            ObservedCoordinates::HourAngleDec {
                hour_angle: -0.092_476_198_797_820_061_06,
                declination: 0.171_765_343_575_826_519_8,
            },
            0.174_169_650_089_539_856_2,
        ),
        (
            ObservedCoordinates::AzimuthZenith {
                azimuth: 0.092_339_522_247_949_899_93,
                zenith_distance: 1.407_758_704_513_722_461,
            },
            0.174_169_650_089_539_856_5,
        ),
    ];
    for (observed, dec) in inputs {
        let c = env.atoc13(observed, UTC_2013, &site(), &weather()).unwrap();
        assert_abs_diff_eq!(c.ra, 2.709_956_744_659_734_086, epsilon = 1e-12);
        assert_abs_diff_eq!(c.dec, dec, epsilon = 1e-12);
    }
}

#[test]
fn catalog_observed_roundtrip_high_altitude() {
    let Some(env) = full_environment() else { return };
    // About 15° from the zenith at this instant.
    let site = site();
    let o = env
        .atco13(&CatalogStar::fixed(2.3, -1.0), UTC_2013, &site, &weather())
        .unwrap();
    assert!(o.place.zenith_distance < 1.2, "zd = {}", o.place.zenith_distance);
    let back = env
        .atoc13(
            ObservedCoordinates::AzimuthZenith {
                azimuth: o.place.azimuth,
                zenith_distance: o.place.zenith_distance,
            },
            UTC_2013,
            &site,
            &weather(),
        )
        .unwrap();
    // Sub-milliarcsecond.
    assert_abs_diff_eq!(back.ra, 2.3, epsilon = 5e-9);
    assert_abs_diff_eq!(back.dec, -1.0, epsilon = 5e-9);
}
