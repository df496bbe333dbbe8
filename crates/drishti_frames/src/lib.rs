//! Earth orientation for drishti: precession, nutation, the CIO locator,
//! Earth rotation, polar motion, geodesy and horizon coordinates.
//!
//! This crate provides:
//! - IAU 2006 precession (Fukushima-Williams angles) and the IAU 2000
//!   bias-precession products
//! - IAU 2000A nutation from the loaded [`NutationSeries`], and the
//!   embedded 77-term IAU 2000B truncation
//! - The CIO locators s00 and s06 and the celestial-to-intermediate matrix
//! - Earth rotation angle, mean and apparent sidereal time, the
//!   equation of the equinoxes and the equation of the origins
//! - Polar motion and the celestial-to-terrestrial matrix
//! - Geodetic ↔ geocentric conversion and observatory position/velocity
//!
//! All functions take TT (or UT1 where stated) as a [`TwoPartTime`].
//!
//! [`TwoPartTime`]: drishti_time::TwoPartTime

pub mod cio;
pub mod error;
pub mod fundamental;
pub mod geodetic;
pub mod horizon;
pub mod model;
pub mod nutation;
pub mod precession;
pub mod rotation;

pub use cio::{
    CioFrame, CipCoordinates, bpn2xy, c2i00b, c2ixys, cio_frame00b, eors, s00, s00b, s06, xys00b,
};
pub use error::FrameError;
pub use fundamental::{
    FundamentalArguments, fad03, fae03, faf03, faju03, fal03, falp03, fama03, fame03, fane03,
    faom03, fapa03, fasa03, faur03, fave03,
};
pub use geodetic::{
    Ellipsoid, Geodetic, ReferenceEllipsoid, gc2gd, gc2gde, gd2gc, gd2gce, pvtob,
};
pub use horizon::{AzEl, HourAngleDec, ae2hd, hd2ae, hd2pa};
pub use model::{NutationModelKind, PrecessionNutationModel};
pub use nutation::{
    LUNISOLAR_FILE, Nutation, NutationSeries, PLANETARY_FILE, PrecessionNutation, numat, nut00b,
    pn00, pnm00b,
};
pub use precession::{
    BiasPrecession, EulerAngles, FrameBias, FukushimaWilliams, PrecessionAngles2006,
    PrecessionRate, bi00, bp00, ecm06, fw2m, obl06, obl80, p06e, pb06, pfw06, pmat06, pr00,
};
pub use rotation::{
    c2tcio, c2teqx, era00, ee00, ee00b, eect00, gmst00, gmst06, gst00b, gst06, pom00, sp00,
};
