//! Observer, weather and environment configuration.
//!
//! All three deserialize with serde and are checked with `validate()`
//! before use. Angles are radians, heights metres, UT1 − UTC seconds.

use std::f64::consts::{FRAC_PI_2, PI};
use std::path::PathBuf;

use drishti_frames::NutationModelKind;
use serde::{Deserialize, Serialize};

use crate::error::AstrometryError;
use crate::refraction::{RefractionConstants, refco};

/// Largest polar motion accepted, radians (about 2 arcseconds).
const MAX_POLAR_MOTION: f64 = 1e-5;

/// A terrestrial observing site.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Site {
    /// East longitude (radians).
    pub longitude: f64,
    /// Geodetic latitude, WGS84 (radians).
    pub latitude: f64,
    /// Height above the WGS84 ellipsoid (metres).
    #[serde(default)]
    pub height: f64,
    /// Polar motion x (radians).
    #[serde(default)]
    pub xp: f64,
    /// Polar motion y (radians).
    #[serde(default)]
    pub yp: f64,
    /// UT1 − UTC (seconds).
    #[serde(default)]
    pub dut1: f64,
}

impl Site {
    /// A site with no polar motion and UT1 = UTC.
    pub const fn new(longitude: f64, latitude: f64, height: f64) -> Self {
        Self {
            longitude,
            latitude,
            height,
            xp: 0.0,
            yp: 0.0,
            dut1: 0.0,
        }
    }

    pub fn validate(&self) -> Result<(), AstrometryError> {
        if !self.longitude.is_finite() || self.longitude.abs() > 2.0 * PI {
            return Err(AstrometryError::InvalidConfig(
                "longitude must be finite and within ±2π",
            ));
        }
        if !self.latitude.is_finite() || self.latitude.abs() > FRAC_PI_2 {
            return Err(AstrometryError::InvalidConfig(
                "latitude must be within ±π/2",
            ));
        }
        if !self.height.is_finite() {
            return Err(AstrometryError::InvalidConfig("height must be finite"));
        }
        let within = |pm: f64| pm.abs() <= MAX_POLAR_MOTION;
        if !(within(self.xp) && within(self.yp)) {
            return Err(AstrometryError::InvalidConfig(
                "polar motion must be below 1e-5 rad",
            ));
        }
        if self.dut1.is_nan() || self.dut1.abs() >= 1.0 {
            return Err(AstrometryError::InvalidConfig(
                "dut1 must be within ±1 s",
            ));
        }
        Ok(())
    }
}

/// Ambient conditions at the site.
///
/// The all-zero default has zero pressure and disables refraction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Weather {
    /// Pressure (hPa).
    pub pressure: f64,
    /// Temperature (°C).
    pub temperature: f64,
    /// Relative humidity (0-1).
    pub humidity: f64,
    /// Effective wavelength (µm).
    pub wavelength: f64,
}

impl Weather {
    pub fn validate(&self) -> Result<(), AstrometryError> {
        if !(0.0..=10_000.0).contains(&self.pressure) {
            return Err(AstrometryError::InvalidConfig(
                "pressure must be within 0..=10000 hPa",
            ));
        }
        if !(-150.0..=200.0).contains(&self.temperature) {
            return Err(AstrometryError::InvalidConfig(
                "temperature must be within -150..=200 °C",
            ));
        }
        if !(0.0..=1.0).contains(&self.humidity) {
            return Err(AstrometryError::InvalidConfig(
                "humidity must be within 0..=1",
            ));
        }
        if !(self.wavelength >= 0.0 && self.wavelength.is_finite()) {
            return Err(AstrometryError::InvalidConfig(
                "wavelength must be non-negative",
            ));
        }
        Ok(())
    }

    pub fn refraction(&self) -> RefractionConstants {
        refco(self.pressure, self.temperature, self.humidity, self.wavelength)
    }
}

/// Which Earth ephemeris an environment uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EphemerisKind {
    /// Full EPV00 tables loaded from the series directory.
    Epv00,
    /// Embedded compact series.
    Compact,
}

/// How to build an [`Environment`](crate::Environment).
///
/// The nutation model and ephemeris are always named explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Directory holding the series blobs.
    #[serde(default)]
    pub series_dir: Option<PathBuf>,
    pub nutation: NutationModelKind,
    pub ephemeris: EphemerisKind,
}

impl EnvironmentConfig {
    /// Configuration that needs no data files.
    pub fn embedded() -> Self {
        Self {
            series_dir: None,
            nutation: NutationModelKind::Iau2000B,
            ephemeris: EphemerisKind::Compact,
        }
    }

    /// Full-precision configuration reading blobs from `dir`.
    pub fn full(dir: PathBuf) -> Self {
        Self {
            series_dir: Some(dir),
            nutation: NutationModelKind::Iau2006A,
            ephemeris: EphemerisKind::Epv00,
        }
    }

    pub fn validate(&self) -> Result<(), AstrometryError> {
        let needs_dir = self.nutation == NutationModelKind::Iau2006A
            || self.ephemeris == EphemerisKind::Epv00;
        match &self.series_dir {
            Some(dir) if dir.as_os_str().is_empty() => Err(AstrometryError::InvalidConfig(
                "series_dir must not be empty",
            )),
            None if needs_dir => Err(AstrometryError::InvalidConfig(
                "series_dir is required by the iau2006a model and the epv00 ephemeris",
            )),
            _ => Ok(()),
        }
    }
}
