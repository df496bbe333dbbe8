//! Astronomical and numerical constants.
//!
//! Values follow the IAU 2009/2012 system of astronomical constants and
//! the IERS Conventions 2010. Public domain.

use std::f64::consts::PI;

/// 2π.
pub const TAU: f64 = std::f64::consts::TAU;

/// Radians to degrees.
pub const DR2D: f64 = 180.0 / PI;

/// Degrees to radians.
pub const DD2R: f64 = PI / 180.0;

/// Radians to arcseconds.
pub const DR2AS: f64 = 206_264.806_247_096_36;

/// Arcseconds to radians.
pub const DAS2R: f64 = 4.848_136_811_095_36e-6;

/// Seconds of time to radians.
pub const DS2R: f64 = 7.272_205_216_643_04e-5;

/// Arcseconds in a full circle.
pub const TURNAS: f64 = 1_296_000.0;

/// Milliarcseconds to radians.
pub const DMAS2R: f64 = DAS2R / 1e3;

/// Seconds per day.
pub const DAYSEC: f64 = 86_400.0;

/// Days per Julian year.
pub const DJY: f64 = 365.25;

/// Days per Julian century.
pub const DJC: f64 = 36_525.0;

/// Days per Julian millennium.
pub const DJM: f64 = 365_250.0;

/// Reference epoch J2000.0 as a Julian Date.
pub const DJ00: f64 = 2_451_545.0;

/// Julian Date of Modified Julian Date zero.
pub const DJM0: f64 = 2_400_000.5;

/// Modified Julian Date of J2000.0.
pub const DJM00: f64 = 51_544.5;

/// Modified Julian Date of 1977 Jan 1.0.
pub const DJM77: f64 = 43_144.0;

/// TT − TAI in seconds.
pub const TTMTAI: f64 = 32.184;

/// Astronomical unit in metres.
pub const DAU: f64 = 149_597_870.7e3;

/// Speed of light in m/s.
pub const CMPS: f64 = 299_792_458.0;

/// Light time for one au in seconds.
pub const AULT: f64 = DAU / CMPS;

/// Speed of light in au per day.
pub const DC: f64 = DAYSEC / AULT;

/// L_G = 1 − d(TT)/d(TCG).
pub const ELG: f64 = 6.969_290_134e-10;

/// L_B = 1 − d(TDB)/d(TCB).
pub const ELB: f64 = 1.550_519_768e-8;

/// TDB − TCB at 1977 Jan 1.0 TAI, in seconds.
pub const TDB0: f64 = -6.55e-5;

/// Schwarzschild radius of the Sun in au: 2 × 1.32712440041e20 / (2.99792458e8)² / 1.49597870700e11.
pub const SRS: f64 = 1.974_125_743_36e-8;

/// Earth rotation rate in radians per UT1 second.
pub const OM: f64 = 1.002_737_811_911_354_48 * TAU / DAYSEC;
