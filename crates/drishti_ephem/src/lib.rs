//! Earth position and velocity for drishti.
//!
//! This crate provides:
//! - The [`EarthEphemeris`] seam used by the astrometry layer
//! - [`Epv00Series`], the full EPV00 series loaded from blobs
//!   (~4.6 km in position, 1.4 mm/s in velocity against DE405)
//! - [`CompactEarth`], a small embedded series usable without data files
//!
//! Both return heliocentric and barycentric states in au and au/day,
//! in BCRS-aligned axes.

pub mod compact;
pub mod error;
pub mod series;

use drishti_math::PosVel;
use drishti_time::TwoPartTime;

pub use compact::CompactEarth;
pub use error::EphemerisError;
pub use series::Epv00Series;

/// Earth state at one TDB instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthState {
    /// Earth relative to the Sun (au, au/day).
    pub heliocentric: PosVel,
    /// Earth relative to the solar-system barycentre (au, au/day).
    pub barycentric: PosVel,
    /// Whether the date lies within 1900-2100, the span of the fit.
    pub in_range: bool,
}

/// Source of Earth positions and velocities.
///
/// Implementations are pure and shareable across threads.
pub trait EarthEphemeris: Send + Sync {
    fn earth_state(&self, tdb: TwoPartTime) -> EarthState;
}
