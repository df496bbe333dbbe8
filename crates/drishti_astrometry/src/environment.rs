//! Loaded models and the one-shot transformations built on them.
//!
//! An [`Environment`] owns the precession-nutation model and the Earth
//! ephemeris. It is built once, is [`Send`] + [`Sync`], and is shared by
//! reference:
//!
//! ```rust,ignore
//! let env = Arc::new(Environment::from_config(&config)?);
//! let handle = std::thread::spawn({
//!     let env = Arc::clone(&env);
//!     move || env.atci13(&star, tdb)
//! });
//! ```
//!
//! The observed-frame-only composites ([`apio13`], [`atio13`],
//! [`atoi13`]) need neither model nor ephemeris and are free functions.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use drishti_ephem::{CompactEarth, EarthEphemeris, Epv00Series};
use drishti_frames::{
    CipCoordinates, NutationModelKind, NutationSeries, PrecessionNutationModel, era00, sp00,
};
use drishti_time::{TwoPartTime, tai_to_tt, try_utc_to_tai, try_utc_to_ut1};

use crate::config::{EnvironmentConfig, EphemerisKind, Site, Weather};
use crate::corrections::CatalogStar;
use crate::error::AstrometryError;
use crate::params::{AstrometryParameters, apcg, apci, apco, apio};
use crate::pipeline::{ObservedCoordinates, ObservedPlace, RaDec, aticq, atciq, atioq, atoiq};

/// Parameters together with the equation of the origins (ERA − GST),
/// which converts CIO-based right ascensions to equinox-based ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prepared {
    pub params: AstrometryParameters,
    pub eo: f64,
}

/// A transformed place plus the equation of the origins in force.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<T> {
    pub place: T,
    pub eo: f64,
}

/// UTC converted to the scales the composites need.
struct Instants {
    tt: TwoPartTime,
    ut1: TwoPartTime,
}

fn instants(utc: TwoPartTime, site: &Site) -> Result<Instants, AstrometryError> {
    let tt = tai_to_tt(try_utc_to_tai(utc)?);
    let ut1 = try_utc_to_ut1(utc, site.dut1)?;
    Ok(Instants { tt, ut1 })
}

fn check_observer(site: &Site, weather: &Weather) -> Result<(), AstrometryError> {
    site.validate()?;
    weather.validate()
}

/// Precession-nutation model and Earth ephemeris.
pub struct Environment {
    model: PrecessionNutationModel,
    ephemeris: Arc<dyn EarthEphemeris>,
}

// The nutation tables are large; show the model kind only.
impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("nutation", &self.model.kind())
            .finish_non_exhaustive()
    }
}

impl Environment {
    pub fn new(model: PrecessionNutationModel, ephemeris: Arc<dyn EarthEphemeris>) -> Self {
        Self { model, ephemeris }
    }

    /// IAU 2000B nutation with the compact Earth series. Needs no data
    /// files; good to a few tens of milliarcseconds.
    pub fn embedded() -> Self {
        Self::new(PrecessionNutationModel::Iau2000B, Arc::new(CompactEarth))
    }

    /// Validate `config` and load whatever series it names.
    pub fn from_config(config: &EnvironmentConfig) -> Result<Self, AstrometryError> {
        config.validate()?;
        let dir = config.series_dir.as_deref();
        let required = || {
            dir.ok_or(AstrometryError::InvalidConfig(
                "series_dir is required by the iau2006a model and the epv00 ephemeris",
            ))
        };

        let model = match config.nutation {
            NutationModelKind::Iau2006A => {
                PrecessionNutationModel::Iau2006A(Arc::new(NutationSeries::load(required()?)?))
            }
            NutationModelKind::Iau2000B => PrecessionNutationModel::Iau2000B,
        };
        let ephemeris: Arc<dyn EarthEphemeris> = match config.ephemeris {
            EphemerisKind::Epv00 => Arc::new(Epv00Series::load(required()?)?),
            EphemerisKind::Compact => Arc::new(CompactEarth),
        };

        log::debug!(
            "environment ready: nutation {:?}, ephemeris {:?}",
            config.nutation,
            config.ephemeris
        );
        Ok(Self::new(model, ephemeris))
    }

    pub fn model(&self) -> &PrecessionNutationModel {
        &self.model
    }

    pub fn ephemeris(&self) -> &dyn EarthEphemeris {
        self.ephemeris.as_ref()
    }

    /// CIP coordinates and the equation of the origins, both from one
    /// evaluation of the model's CIO frame.
    fn cip(&self, tt: TwoPartTime) -> (CipCoordinates, f64) {
        let frame = self.model.cio_frame(tt);
        (frame.cip, frame.eo())
    }

    /// Geocentric parameters (ICRS ↔ GCRS) at `tdb`.
    pub fn apcg13(&self, tdb: TwoPartTime) -> AstrometryParameters {
        apcg(tdb, &self.ephemeris.earth_state(tdb))
    }

    /// Geocentric CIO-based parameters (ICRS ↔ CIRS) at `tdb`.
    pub fn apci13(&self, tdb: TwoPartTime) -> Prepared {
        let earth = self.ephemeris.earth_state(tdb);
        let (cip, eo) = self.cip(tdb);
        Prepared {
            params: apci(tdb, &earth, &cip),
            eo,
        }
    }

    /// Topocentric parameters (ICRS ↔ observed) for a UTC instant.
    ///
    /// TT stands in for TDB; the difference is below 2 ms and has no
    /// astrometric effect at this level.
    pub fn apco13(
        &self,
        utc: TwoPartTime,
        site: &Site,
        weather: &Weather,
    ) -> Result<Prepared, AstrometryError> {
        check_observer(site, weather)?;
        let Instants { tt, ut1 } = instants(utc, site)?;

        let earth = self.ephemeris.earth_state(tt);
        let (cip, eo) = self.cip(tt);
        let params = apco(tt, &earth, &cip, era00(ut1), sp00(tt), site, weather.refraction());
        Ok(Prepared { params, eo })
    }

    /// ICRS catalog star to CIRS at `tdb`.
    pub fn atci13(&self, star: &CatalogStar, tdb: TwoPartTime) -> Placement<RaDec> {
        let prepared = self.apci13(tdb);
        Placement {
            place: atciq(star, &prepared.params),
            eo: prepared.eo,
        }
    }

    /// CIRS to ICRS astrometric place at `tdb`.
    pub fn atic13(&self, ri: f64, di: f64, tdb: TwoPartTime) -> Placement<RaDec> {
        let prepared = self.apci13(tdb);
        Placement {
            place: aticq(ri, di, &prepared.params),
            eo: prepared.eo,
        }
    }

    /// ICRS catalog star to observed place for a UTC instant.
    pub fn atco13(
        &self,
        star: &CatalogStar,
        utc: TwoPartTime,
        site: &Site,
        weather: &Weather,
    ) -> Result<Placement<ObservedPlace>, AstrometryError> {
        let prepared = self.apco13(utc, site, weather)?;
        let ci = atciq(star, &prepared.params);
        Ok(Placement {
            place: atioq(ci.ra, ci.dec, &prepared.params),
            eo: prepared.eo,
        })
    }

    /// Observed place to ICRS astrometric place for a UTC instant.
    pub fn atoc13(
        &self,
        observed: ObservedCoordinates,
        utc: TwoPartTime,
        site: &Site,
        weather: &Weather,
    ) -> Result<RaDec, AstrometryError> {
        let prepared = self.apco13(utc, site, weather)?;
        let ci = atoiq(observed, &prepared.params);
        Ok(aticq(ci.ra, ci.dec, &prepared.params))
    }
}

/// Observed-frame parameters (CIRS ↔ observed) for a UTC instant.
pub fn apio13(
    utc: TwoPartTime,
    site: &Site,
    weather: &Weather,
) -> Result<AstrometryParameters, AstrometryError> {
    check_observer(site, weather)?;
    let Instants { tt, ut1 } = instants(utc, site)?;
    Ok(apio(sp00(tt), era00(ut1), site, weather.refraction()))
}

/// CIRS to observed place for a UTC instant.
pub fn atio13(
    ri: f64,
    di: f64,
    utc: TwoPartTime,
    site: &Site,
    weather: &Weather,
) -> Result<ObservedPlace, AstrometryError> {
    let params = apio13(utc, site, weather)?;
    Ok(atioq(ri, di, &params))
}

/// Observed place to CIRS for a UTC instant.
pub fn atoi13(
    observed: ObservedCoordinates,
    utc: TwoPartTime,
    site: &Site,
    weather: &Weather,
) -> Result<RaDec, AstrometryError> {
    let params = apio13(utc, site, weather)?;
    Ok(atoiq(observed, &params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use drishti_frames::c2ixys;
    use drishti_time::TimeError;
    use std::path::PathBuf;

    const UTC: TwoPartTime = TwoPartTime::new(2_456_384.5, 0.969_254_051);

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
    fn environment_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Environment>();
    }

    #[test]
    fn debug_shows_model_kind() {
        let text = format!("{:?}", Environment::embedded());
        assert!(text.contains("Iau2000B"), "{text}");
    }

    #[test]
    fn embedded_config_needs_no_files() {
        let env = Environment::from_config(&EnvironmentConfig::embedded()).unwrap();
        assert_eq!(env.model().kind(), NutationModelKind::Iau2000B);
    }

    #[test]
    fn missing_series_is_an_error() {
        let config = EnvironmentConfig::full(PathBuf::from("/nonexistent/series"));
        let err = Environment::from_config(&config).unwrap_err();
        assert!(matches!(err, AstrometryError::Frames(_)), "{err}");
    }

    #[test]
    fn observed_frame_composite() {
        let a = apio13(UTC, &site(), &weather()).unwrap();
        assert_abs_diff_eq!(a.along, -0.527_800_806_029_599_573_3, epsilon = 1e-12);
        assert_abs_diff_eq!(a.xpl, 0.113_342_741_813_075_295_8e-5, epsilon = 1e-17);
        assert_abs_diff_eq!(a.ypl, 0.145_334_759_578_064_620_7e-5, epsilon = 1e-17);
        assert_abs_diff_eq!(a.diurab, 0.513_584_366_169_991_352_9e-6, epsilon = 1e-12);
        assert_abs_diff_eq!(a.eral, 2.617_608_909_189_664_000, epsilon = 1e-12);
        assert_abs_diff_eq!(a.refa, 0.201_418_778_594_039_692_1e-3, epsilon = 1e-15);
        assert_abs_diff_eq!(a.refb, -0.236_140_831_494_369_622_7e-6, epsilon = 1e-18);
    }

    #[test]
    fn intermediate_observed_composites() {
        let (ri, di) = (2.710_121_572_969_038_991, 0.172_937_136_721_823_043_8);
        let o = atio13(ri, di, UTC, &site(), &weather()).unwrap();
        assert_abs_diff_eq!(o.azimuth, 0.092_339_522_248_951_224_99, epsilon = 1e-12);
        assert_abs_diff_eq!(o.zenith_distance, 1.407_758_704_513_549_991, epsilon = 1e-12);
        assert_abs_diff_eq!(o.right_ascension, 2.710_085_107_988_480_746, epsilon = 1e-12);

        let ci = atoi13(
            ObservedCoordinates::AzimuthZenith {
                azimuth: 0.092_339_522_247_949_899_93,
                zenith_distance: 1.407_758_704_513_722_461,
            },
            UTC,
            &site(),
            &weather(),
        )
        .unwrap();
        assert_abs_diff_eq!(ci.ra, 2.710_121_574_448_138_676, epsilon = 1e-12);
        assert_abs_diff_eq!(ci.dec, 0.172_937_183_911_660_878_1, epsilon = 1e-12);
    }

    #[test]
    fn embedded_models_track_full_precision_result() {
        // Truncated nutation and the compact series stay within 1 mas
        // of the full-precision observed place.
        let env = Environment::embedded();
        let o = env.atco13(&star(), UTC, &site(), &weather()).unwrap();
        assert_abs_diff_eq!(o.place.azimuth, 0.092_517_744_854_855_152_07, epsilon = 1e-8);
        assert_abs_diff_eq!(o.place.zenith_distance, 1.407_661_405_256_499_357, epsilon = 1e-8);
        assert_abs_diff_eq!(o.place.hour_angle, -0.092_651_544_315_296_924_69, epsilon = 1e-8);
        assert_abs_diff_eq!(o.place.declination, 0.171_662_656_007_252_620_0, epsilon = 1e-8);
        assert_abs_diff_eq!(o.place.right_ascension, 2.710_260_453_504_961_012, epsilon = 1e-8);
        assert_abs_diff_eq!(o.eo, -0.003_020_548_354_802_412_839, epsilon = 2e-7);
    }

    #[test]
    fn embedded_catalog_to_intermediate_at_j2000() {
        let env = Environment::embedded();
        let tdb = TwoPartTime::new(2_451_545.0, 0.0);

        let origin = env.atci13(&CatalogStar::fixed(0.0, 0.0), tdb);
        assert_abs_diff_eq!(origin.place.ra, 6.283_168_539_248_76, epsilon = 1e-11);
        assert_abs_diff_eq!(origin.place.dec, -0.342_106_791_370_274_7e-4, epsilon = 1e-11);
        assert_abs_diff_eq!(origin.eo, 0.618_885_951_095_915_6e-4, epsilon = 1e-13);

        let ci = env.atci13(&star(), tdb);
        assert_abs_diff_eq!(ci.place.ra, 2.710_051_555_233_038, epsilon = 1e-11);
        assert_abs_diff_eq!(ci.place.dec, 0.173_991_055_458_299_6, epsilon = 1e-11);
        assert_eq!(ci.eo, origin.eo);
    }

    #[test]
    fn catalog_observed_roundtrip() {
        let env = Environment::embedded();
        let fixed = CatalogStar::fixed(2.71, 0.174);
        let o = env.atco13(&fixed, UTC, &site(), &weather()).unwrap();
        let back = env
            .atoc13(
                ObservedCoordinates::AzimuthZenith {
                    azimuth: o.place.azimuth,
                    zenith_distance: o.place.zenith_distance,
                },
                UTC,
                &site(),
                &weather(),
            )
            .unwrap();
        // Zenith distance is about 80.7° here, where the refraction
        // model's inverse is weakest.
        assert_abs_diff_eq!(back.ra, 2.71, epsilon = 2e-7);
        assert_abs_diff_eq!(back.dec, 0.174, epsilon = 2e-7);
    }

    #[test]
    fn intermediate_frame_comes_from_one_cio_evaluation() {
        let env = Environment::embedded();
        let tdb = TwoPartTime::new(2_456_165.5, 0.401_182_685);
        let frame = env.model().cio_frame(tdb);
        let prepared = env.apci13(tdb);
        assert_eq!(prepared.eo, frame.eo());
        assert_eq!(prepared.params.bpn, c2ixys(frame.cip.x, frame.cip.y, frame.cip.s));
    }

    #[test]
    fn intermediate_roundtrip_through_environment() {
        let env = Environment::embedded();
        let tdb = TwoPartTime::new(2_456_165.5, 0.401_182_685);
        let ci = env.atci13(&CatalogStar::fixed(1.0, 0.5), tdb);
        let back = env.atic13(ci.place.ra, ci.place.dec, tdb);
        assert_abs_diff_eq!(back.place.ra, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(back.place.dec, 0.5, epsilon = 1e-12);
        assert_eq!(ci.eo, back.eo);
    }

    #[test]
    fn pre_1960_utc_is_rejected() {
        let err = apio13(TwoPartTime::new(2_430_000.5, 0.0), &site(), &weather()).unwrap_err();
        assert!(
            matches!(err, AstrometryError::Time(TimeError::DateBeforeLeapSecondTable { .. })),
            "{err}"
        );
    }

    #[test]
    fn invalid_site_is_rejected() {
        let mut bad = site();
        bad.latitude = 3.0;
        let err = Environment::embedded().apco13(UTC, &bad, &weather()).unwrap_err();
        assert!(matches!(err, AstrometryError::InvalidConfig(_)));
    }
}
