use drishti_astrometry::{
    CatalogStar, ObservedCoordinates, ObservedPlace, RaDec, Site, Weather,
};
use drishti_math::anp;
use drishti_time::{tai_to_tt, try_utc_to_tai, try_utc_to_ut1};

use crate::date::UtcDate;
use crate::error::DrishtiError;
use crate::global::environment;

/// Observed place of a catalog star from `site` at `date`.
pub fn observe(
    star: &CatalogStar,
    date: UtcDate,
    site: &Site,
    weather: &Weather,
) -> Result<ObservedPlace, DrishtiError> {
    let env = environment()?;
    Ok(env.atco13(star, date.to_utc()?, site, weather)?.place)
}

/// ICRS astrometric place of an observed direction.
pub fn catalog_place(
    observed: ObservedCoordinates,
    date: UtcDate,
    site: &Site,
    weather: &Weather,
) -> Result<RaDec, DrishtiError> {
    let env = environment()?;
    Ok(env.atoc13(observed, date.to_utc()?, site, weather)?)
}

/// Local apparent sidereal time at `site` (radians, `[0, 2π)`).
///
/// Uses the global environment's precession-nutation model and the
/// site's UT1 − UTC.
pub fn local_apparent_sidereal_time(date: UtcDate, site: &Site) -> Result<f64, DrishtiError> {
    let env = environment()?;
    site.validate()?;
    let utc = date.to_utc()?;
    let tt = tai_to_tt(try_utc_to_tai(utc)?);
    let ut1 = try_utc_to_ut1(utc, site.dut1)?;
    Ok(anp(env.model().gst(ut1, tt) + site.longitude))
}
