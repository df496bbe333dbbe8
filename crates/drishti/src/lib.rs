//! Convenience wrapper for the drishti astrometry engine.
//!
//! Provides a global environment and high-level functions that accept
//! UTC dates directly, removing the need to manage an `Environment`,
//! convert between time scales or prepare astrometry parameters.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use drishti::*;
//!
//! init(&EnvironmentConfig::full("data/series".into())).expect("environment init");
//!
//! let date: UtcDate = "2013-04-02T23:15:43.55Z".parse().unwrap();
//! let site = Site::new(-0.527_800_806, -1.234_585_6, 2738.0);
//! let weather = Weather { pressure: 731.0, temperature: 12.8, humidity: 0.59, wavelength: 0.55 };
//! let place = observe(&CatalogStar::fixed(2.76, 0.5), date, &site, &weather).unwrap();
//! println!("altitude: {:.4}°", 90.0 - place.zenith_distance.to_degrees());
//! ```

pub mod convenience;
pub mod date;
pub mod error;
pub mod global;

pub use convenience::{catalog_place, local_apparent_sidereal_time, observe};
pub use date::UtcDate;
pub use error::DrishtiError;
pub use global::{environment, init, is_initialized};

// Re-export the types the convenience functions take and return.
pub use drishti_astrometry::{
    CatalogStar, Environment, EnvironmentConfig, EphemerisKind, ObservedCoordinates,
    ObservedPlace, RaDec, Site, Weather,
};
pub use drishti_frames::NutationModelKind;
