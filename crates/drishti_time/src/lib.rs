//! Time-scale conversions (UTC/TAI/UT1/TT/TDB/TCB/TCG) and leap seconds.
//!
//! This crate provides:
//! - [`TwoPartTime`], the split Julian Date used by every conversion
//! - Julian Date ↔ Gregorian calendar conversion
//! - The ΔAT = TAI − UTC table with its pre-1972 drift terms
//! - The full chain of scale conversions, preserving the date split
//! - TDB − TT from the Fairhead & Bretagnon series or a closed form
//!
//! Dates before the first leap-second entry (1960) have no defined
//! ΔAT: [`delta_at`] returns NaN and conversions that depend on it
//! propagate NaN instead of failing.

pub mod error;
pub mod julian;
pub mod leap;
pub mod scales;
pub mod tdb;
pub mod utc;

pub use error::TimeError;
pub use julian::{Calendar, TwoPartTime, calendar_to_mjd, jd_to_calendar};
pub use leap::{LEAP_SECONDS, LeapSecond, delta_at, try_delta_at};
pub use scales::{
    tai_to_tt, tai_to_ut1, tai_to_utc, tcb_to_tdb, tcg_to_tt, tdb_to_tcb, tdb_to_tt, tt_to_tai,
    tt_to_tcg, tt_to_tdb, tt_to_ut1, try_tai_to_utc, try_ut1_to_utc, try_utc_to_tai, try_utc_to_ut1,
    ut1_to_tai, ut1_to_tt, ut1_to_utc, utc_to_tai, utc_to_ut1,
};
pub use tdb::{FAIRHEAD_FILE, FairheadSeries, tdb_minus_tt_approx};
pub use utc::{ClockTime, DateTime, TimeScale, d2dtf, dtf2d};
