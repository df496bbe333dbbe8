//! Calendar date plus clock time ↔ two-part Julian Date.
//!
//! For UTC the day containing a leap second is 86401 s long (86399 s
//! for a negative one), so `23:59:60.5` is a valid clock reading and
//! the fraction of day is scaled to the actual day length.

use drishti_math::constants::DAYSEC;

use crate::error::TimeError;
use crate::julian::{TwoPartTime, calendar_to_mjd, jd_to_calendar};
use crate::leap::try_delta_at;

/// Time scale of a calendar/clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeScale {
    Tai,
    Tcb,
    Tcg,
    Tdb,
    Tt,
    Ut1,
    Utc,
}

/// Hours, minutes and seconds within a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl ClockTime {
    pub const fn new(hour: u32, minute: u32, second: f64) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    pub const fn midnight() -> Self {
        Self::new(0, 0, 0.0)
    }
}

/// A calendar date with clock time, as produced by [`d2dtf`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub clock: ClockTime,
}

/// Seconds by which the UTC day starting at `jd0` (0h) differs from 86400.
///
/// The following day is found from the noon after `jd0`.
fn utc_day_excess(year: i32, month: u32, day: u32, jd0: TwoPartTime) -> Result<f64, TimeError> {
    let dat0 = try_delta_at(year, month, day, 0.0)?;
    let dat12 = try_delta_at(year, month, day, 0.5)?;
    let next = jd_to_calendar(TwoPartTime::new(jd0.whole, jd0.fraction + 1.5))?;
    let dat24 = try_delta_at(next.year, next.month, next.day, 0.0)?;
    Ok(dat24 - (2.0 * dat12 - dat0))
}

/// Calendar date and clock time to a two-part JD `(JD at 0h, fraction)`.
pub fn dtf2d(
    scale: TimeScale,
    year: i32,
    month: u32,
    day: u32,
    clock: ClockTime,
) -> Result<TwoPartTime, TimeError> {
    let mjd = calendar_to_mjd(year, month, day)?;
    let jd0 = TwoPartTime::from_mjd(mjd);

    let mut day_len = DAYSEC;
    let mut last_minute = 60.0;
    if scale == TimeScale::Utc {
        let dleap = utc_day_excess(year, month, day, jd0)?;
        day_len += dleap;
        if clock.hour == 23 && clock.minute == 59 {
            last_minute += dleap;
        }
    }

    let bad = || TimeError::BadClockTime {
        hour: clock.hour,
        minute: clock.minute,
        second: clock.second,
    };
    if clock.hour > 23 || clock.minute > 59 {
        return Err(bad());
    }
    if !(0.0..last_minute).contains(&clock.second) {
        return Err(bad());
    }

    let secs = 60.0 * (60.0 * f64::from(clock.hour) + f64::from(clock.minute)) + clock.second;
    Ok(TwoPartTime::new(jd0.whole + jd0.fraction, secs / day_len))
}

/// Two-part JD to calendar date and clock time.
///
/// For UTC an instant inside a leap second reports `second >= 60`.
pub fn d2dtf(scale: TimeScale, t: TwoPartTime) -> Result<DateTime, TimeError> {
    let cal = jd_to_calendar(t)?;

    let mut day_len = DAYSEC;
    if scale == TimeScale::Utc {
        let (big, small, _) = t.ordered();
        let midnight = TwoPartTime::new(big, small - cal.fraction);
        day_len += utc_day_excess(cal.year, cal.month, cal.day, midnight)?;
    }

    let secs = cal.fraction * day_len;
    let hour = ((secs / 3600.0).floor() as u32).min(23);
    let rest = secs - 3600.0 * f64::from(hour);
    let minute = ((rest / 60.0).floor() as u32).min(59);
    let second = rest - 60.0 * f64::from(minute);

    Ok(DateTime {
        year: cal.year,
        month: cal.month,
        day: cal.day,
        clock: ClockTime::new(hour, minute, second),
    })
}
