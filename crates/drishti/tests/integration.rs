//! Integration tests for the drishti facade.
//!
//! The global environment is shared by every test in this binary. It is
//! built from the full series when they are present and from the
//! embedded models otherwise.

use std::path::PathBuf;
use std::sync::Once;

use approx::assert_abs_diff_eq;
use drishti::*;
use drishti_math::anpm;

static INIT: Once = Once::new();

fn series_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/series")
}

fn ensure_init() {
    INIT.call_once(|| {
        let dir = series_dir();
        let config = if dir.join("LUNISOLAR-NUT.dat").exists() && dir.join("E0X.dat").exists() {
            EnvironmentConfig::full(dir)
        } else {
            eprintln!("Series not found in {}; using embedded models", dir.display());
            EnvironmentConfig::embedded()
        };
        init(&config).expect("environment init");
    });
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

fn date() -> UtcDate {
    "2013-04-02T23:15:43.55Z".parse().unwrap()
}

#[test]
fn is_initialized_after_init() {
    ensure_init();
    assert!(is_initialized());
    assert!(environment().is_ok());
}

#[test]
fn second_init_is_a_no_op() {
    ensure_init();
    let before = format!("{:?}", environment().unwrap());
    init(&EnvironmentConfig::embedded()).unwrap();
    assert_eq!(format!("{:?}", environment().unwrap()), before);
}

#[test]
fn observe_catalog_star() {
    ensure_init();
    let star = CatalogStar {
        ra: 2.71,
        dec: 0.174,
        pm_ra: 1e-5,
        pm_dec: 5e-6,
        parallax: 0.1,
        radial_velocity: 55.0,
    };
    let o = observe(&star, date(), &site(), &weather()).unwrap();
    // Either model set lands within 2 mas of the full-precision place.
    assert_abs_diff_eq!(o.azimuth, 0.092_517_744_854_855_152_07, epsilon = 1e-8);
    assert_abs_diff_eq!(o.zenith_distance, 1.407_661_405_256_499_357, epsilon = 1e-8);
    assert_abs_diff_eq!(o.right_ascension, 2.710_260_453_504_961_012, epsilon = 1e-8);
}

#[test]
fn observe_then_recover_catalog_place() {
    ensure_init();
    let star = CatalogStar::fixed(2.3, -1.0);
    let o = observe(&star, date(), &site(), &weather()).unwrap();
    let back = catalog_place(
        ObservedCoordinates::AzimuthZenith {
            azimuth: o.azimuth,
            zenith_distance: o.zenith_distance,
        },
        date(),
        &site(),
        &weather(),
    )
    .unwrap();
    assert_abs_diff_eq!(back.ra, 2.3, epsilon = 5e-9);
    assert_abs_diff_eq!(back.dec, -1.0, epsilon = 5e-9);
}

#[test]
fn sidereal_time_matches_local_rotation() {
    ensure_init();
    let last = local_apparent_sidereal_time(date(), &site()).unwrap();
    assert!((0.0..std::f64::consts::TAU).contains(&last));

    // LAST − local ERA is minus the equation of the origins.
    let env = environment().unwrap();
    let prepared = env.apco13(date().to_utc().unwrap(), &site(), &weather()).unwrap();
    assert_abs_diff_eq!(anpm(last - prepared.params.eral), -prepared.eo, epsilon = 1e-9);
}

#[test]
fn invalid_date_string() {
    assert!(matches!(
        "2013-04-02 23:15:43Z".parse::<UtcDate>(),
        Err(DrishtiError::DateParse(_))
    ));
}

#[test]
fn pre_1960_date_is_an_error() {
    ensure_init();
    let err = observe(
        &CatalogStar::fixed(1.0, 0.2),
        UtcDate::new(1950, 1, 1, 0, 0, 0.0),
        &site(),
        &weather(),
    )
    .unwrap_err();
    assert!(matches!(err, DrishtiError::Time(_)), "{err}");
}
