//! Two-part Julian Dates and Gregorian calendar conversion.
//!
//! The day-count algorithm is the integer formulation of
//! Fliegel & Van Flandern (1968); the fractional parts of a two-part
//! date are combined with Klein (2006) compensated summation so that a
//! date near a day boundary keeps sub-microsecond accuracy.

use drishti_math::constants::{DJ00, DJC, DJM, DJM0, DJY};

use crate::error::TimeError;

const DJMIN: f64 = -68_569.5;
const DJMAX: f64 = 1e9;
const IYMIN: i32 = -4799;
const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Julian Date split into two parts for precision.
///
/// The JD is `whole + fraction`. Either part may carry any share of the
/// date; the usual splits are (JD, 0), (2400000.5, MJD) and
/// (day number, fraction of day). Scale conversions apply their offsets
/// to the smaller-magnitude part and leave the larger one untouched, so
/// the caller's split survives a chain of conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPartTime {
    pub whole: f64,
    pub fraction: f64,
}

impl TwoPartTime {
    pub const fn new(whole: f64, fraction: f64) -> Self {
        Self { whole, fraction }
    }

    pub const fn from_jd(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    pub const fn from_mjd(mjd: f64) -> Self {
        Self::new(DJM0, mjd)
    }

    /// J2000.0 (2000 January 1.5).
    pub const fn j2000() -> Self {
        Self::new(DJ00, 0.0)
    }

    /// The Julian Date as a single `f64` (loses precision).
    pub fn jd(self) -> f64 {
        self.whole + self.fraction
    }

    pub fn mjd(self) -> f64 {
        (self.whole - DJM0) + self.fraction
    }

    /// Interval since J2000.0 in days.
    pub fn days_since_j2000(self) -> f64 {
        (self.whole - DJ00) + self.fraction
    }

    /// Interval since J2000.0 in Julian centuries.
    pub fn centuries_since_j2000(self) -> f64 {
        self.days_since_j2000() / DJC
    }

    /// Interval since J2000.0 in Julian years.
    pub fn years_since_j2000(self) -> f64 {
        self.days_since_j2000() / DJY
    }

    /// Interval since J2000.0 in Julian millennia.
    pub fn millennia_since_j2000(self) -> f64 {
        self.days_since_j2000() / DJM
    }

    /// Add `days` to the smaller-magnitude part.
    pub fn offset(self, days: f64) -> Self {
        if self.whole.abs() > self.fraction.abs() {
            Self::new(self.whole, self.fraction + days)
        } else {
            Self::new(self.whole + days, self.fraction)
        }
    }

    /// Both parts, larger magnitude first, plus whether they were swapped.
    pub(crate) fn ordered(self) -> (f64, f64, bool) {
        if self.whole.abs() >= self.fraction.abs() {
            (self.whole, self.fraction, false)
        } else {
            (self.fraction, self.whole, true)
        }
    }

    /// Rebuild from an ordered pair produced by [`Self::ordered`].
    pub(crate) fn reorder(big: f64, small: f64, swapped: bool) -> Self {
        if swapped {
            Self::new(small, big)
        } else {
            Self::new(big, small)
        }
    }

    pub(crate) fn nan() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }
}

/// Gregorian calendar date with a fraction of day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calendar {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Fraction of the day, in `[0, 1)`.
    pub fraction: f64,
}

/// ERFA-style round-half-away-from-zero.
fn dnint(a: f64) -> f64 {
    if a.abs() < 0.5 {
        0.0
    } else if a < 0.0 {
        (a - 0.5).ceil()
    } else {
        (a + 0.5).floor()
    }
}

/// Convert a two-part Julian Date to a Gregorian calendar date.
///
/// Valid from JD −68569.5 (−4900 March 1) to JD 1e9.
pub fn jd_to_calendar(t: TwoPartTime) -> Result<Calendar, TimeError> {
    let dj = t.whole + t.fraction;
    if !(DJMIN..=DJMAX).contains(&dj) {
        return Err(TimeError::DateOutOfRange(dj));
    }

    // Separate day and fraction (-0.5 <= fraction < 0.5).
    let d = dnint(t.whole);
    let f1 = t.whole - d;
    let mut jd = d as i64;
    let d = dnint(t.fraction);
    let f2 = t.fraction - d;
    jd += d as i64;

    // f1 + f2 + 0.5 with compensated summation.
    let mut s = 0.5;
    let mut cs = 0.0;
    for x in [f1, f2] {
        let t = s + x;
        cs += if s.abs() >= x.abs() {
            (s - t) + x
        } else {
            (x - t) + s
        };
        s = t;
        if s >= 1.0 {
            jd += 1;
            s -= 1.0;
        }
    }
    let mut f = s + cs;
    cs = f - s;

    if f < 0.0 {
        f = s + 1.0;
        cs += (1.0 - f) + s;
        s = f;
        f = s + cs;
        cs = f - s;
        jd -= 1;
    }

    // A fraction that rounds to 1.0 belongs to the next day.
    if (f - 1.0) >= -f64::EPSILON / 4.0 {
        let t = s - 1.0;
        cs += (s - t) - 1.0;
        s = t;
        f = s + cs;
        if -f64::EPSILON / 2.0 < f {
            jd += 1;
            f = f.max(0.0);
        }
    }

    let mut l = jd + 68_569;
    let n = (4 * l) / 146_097;
    l -= (146_097 * n + 3) / 4;
    let i = (4000 * (l + 1)) / 1_461_001;
    l -= (1461 * i) / 4 - 31;
    let k = (80 * l) / 2447;
    let day = (l - (2447 * k) / 80) as u32;
    l = k / 11;
    let month = (k + 2 - 12 * l) as u32;
    let year = (100 * (n - 49) + i + l) as i32;

    Ok(Calendar {
        year,
        month,
        day,
        fraction: f,
    })
}

pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let base = MONTH_DAYS[(month - 1) as usize];
    if month == 2 && is_leap_year(year) {
        base + 1
    } else {
        base
    }
}

/// Modified Julian Date at 0h of a Gregorian calendar date, without
/// validation.
pub(crate) fn mjd_at_midnight(year: i32, month: u32, day: u32) -> f64 {
    let im = month as i64;
    let my = (im - 14) / 12;
    let iypmy = year as i64 + my;
    ((1461 * (iypmy + 4800)) / 4 + (367 * (im - 2 - 12 * my)) / 12
        - (3 * ((iypmy + 4900) / 100)) / 4
        + day as i64
        - 2_432_076) as f64
}

/// Modified Julian Date at 0h of a Gregorian calendar date.
///
/// The full date is `2400000.5 + mjd`.
pub fn calendar_to_mjd(year: i32, month: u32, day: u32) -> Result<f64, TimeError> {
    if year < IYMIN {
        return Err(TimeError::BadYear(year));
    }
    if !(1..=12).contains(&month) {
        return Err(TimeError::BadMonth(month));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(TimeError::BadDay { year, month, day });
    }
    Ok(mjd_at_midnight(year, month, day))
}

impl Calendar {
    /// Two-part Julian Date `(2400000.5, MJD + fraction)`.
    pub fn to_two_part(&self) -> Result<TwoPartTime, TimeError> {
        let mjd = calendar_to_mjd(self.year, self.month, self.day)?;
        Ok(TwoPartTime::new(DJM0, mjd + self.fraction))
    }
}
