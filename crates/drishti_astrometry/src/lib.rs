//! Fundamental astrometry for drishti: catalog ↔ intermediate ↔ observed
//! places.
//!
//! This crate provides:
//! - [`AstrometryParameters`] and the assemblers that fill them for
//!   geocentric, intermediate, topocentric and observed-frame-only use
//! - Star-dependent corrections: space motion and parallax, solar light
//!   deflection, stellar aberration
//! - The forward and inverse transformations between ICRS, CIRS and the
//!   observed frame, including refraction
//! - Gnomonic tangent-plane projections
//! - [`Site`], [`Weather`] and [`EnvironmentConfig`], and the
//!   [`Environment`] that holds the loaded models
//!
//! The `…q` functions take prepared parameters and are cheap per star;
//! the `…13` composites assemble parameters and transform in one call.

pub mod config;
pub mod corrections;
pub mod environment;
pub mod error;
pub mod params;
pub mod pipeline;
pub mod refraction;
pub mod tangent;

pub use config::{EnvironmentConfig, EphemerisKind, Site, Weather};
pub use corrections::{CatalogStar, ab, ld, ldsun, pmpx};
pub use environment::{Environment, Placement, Prepared, apio13, atio13, atoi13};
pub use error::AstrometryError;
pub use params::{AstrometryParameters, apcg, apci, apco, apcs, apio};
pub use pipeline::{
    ObservedCoordinates, ObservedPlace, RaDec, aticq, atciq, atciqz, atioq, atoiq,
};
pub use refraction::{RefractionConstants, refco};
pub use tangent::{
    PlaneCoordinates, TangentPoints, TangentStatus, tpors, tporv, tpstv, tpsts, tpxes, tpxev,
};
