//! ΔAT = TAI − UTC.
//!
//! Source: IERS Bulletin C and the USNO table of TAI − UTC for the
//! pre-1972 rubber-second era. Public domain.

use crate::error::TimeError;
use crate::julian::{days_in_month, mjd_at_midnight};

/// A change in TAI − UTC taking effect at 0h on the first of a month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeapSecond {
    pub year: i32,
    pub month: u32,
    /// TAI − UTC in seconds (for pre-1972 rows, the value at the drift
    /// reference epoch).
    pub delta_at: f64,
}

const fn entry(year: i32, month: u32, delta_at: f64) -> LeapSecond {
    LeapSecond {
        year,
        month,
        delta_at,
    }
}

/// TAI − UTC changes, oldest first.
pub static LEAP_SECONDS: [LeapSecond; 42] = [
    entry(1960, 1, 1.417_818_0),
    entry(1961, 1, 1.422_818_0),
    entry(1961, 8, 1.372_818_0),
    entry(1962, 1, 1.845_858_0),
    entry(1963, 11, 1.945_858_0),
    entry(1964, 1, 3.240_130_0),
    entry(1964, 4, 3.340_130_0),
    entry(1964, 9, 3.440_130_0),
    entry(1965, 1, 3.540_130_0),
    entry(1965, 3, 3.640_130_0),
    entry(1965, 7, 3.740_130_0),
    entry(1965, 9, 3.840_130_0),
    entry(1966, 1, 4.313_170_0),
    entry(1968, 2, 4.213_170_0),
    entry(1972, 1, 10.0),
    entry(1972, 7, 11.0),
    entry(1973, 1, 12.0),
    entry(1974, 1, 13.0),
    entry(1975, 1, 14.0),
    entry(1976, 1, 15.0),
    entry(1977, 1, 16.0),
    entry(1978, 1, 17.0),
    entry(1979, 1, 18.0),
    entry(1980, 1, 19.0),
    entry(1981, 7, 20.0),
    entry(1982, 7, 21.0),
    entry(1983, 7, 22.0),
    entry(1985, 7, 23.0),
    entry(1988, 1, 24.0),
    entry(1990, 1, 25.0),
    entry(1991, 1, 26.0),
    entry(1992, 7, 27.0),
    entry(1993, 7, 28.0),
    entry(1994, 7, 29.0),
    entry(1996, 1, 30.0),
    entry(1997, 7, 31.0),
    entry(1999, 1, 32.0),
    entry(2006, 1, 33.0),
    entry(2009, 1, 34.0),
    entry(2012, 7, 35.0),
    entry(2015, 7, 36.0),
    entry(2017, 1, 37.0),
];

/// Pre-1972 drift: `(reference MJD, seconds per day)` for the first
/// rows of [`LEAP_SECONDS`].
#[rustfmt::skip]
static DRIFT: [(f64, f64); 14] = [
    (37_300.0, 0.001_296_0),
    (37_300.0, 0.001_296_0),
    (37_300.0, 0.001_296_0),
    (37_665.0, 0.001_123_2),
    (37_665.0, 0.001_123_2),
    (38_761.0, 0.001_296_0),
    (38_761.0, 0.001_296_0),
    (38_761.0, 0.001_296_0),
    (38_761.0, 0.001_296_0),
    (38_761.0, 0.001_296_0),
    (38_761.0, 0.001_296_0),
    (38_761.0, 0.001_296_0),
    (39_126.0, 0.002_592_0),
    (39_126.0, 0.002_592_0),
];

fn lookup(year: i32, month: u32, day: u32, fraction: f64) -> Result<f64, TimeError> {
    if !(1..=12).contains(&month) {
        return Err(TimeError::BadMonth(month));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(TimeError::BadDay { year, month, day });
    }
    if !(0.0..=1.0).contains(&fraction) {
        return Err(TimeError::BadFraction(fraction));
    }

    let key = 12 * i64::from(year) + i64::from(month);
    let Some(i) = LEAP_SECONDS
        .iter()
        .rposition(|e| key >= 12 * i64::from(e.year) + i64::from(e.month))
    else {
        return Err(TimeError::DateBeforeLeapSecondTable { year, month });
    };

    let mut da = LEAP_SECONDS[i].delta_at;
    if LEAP_SECONDS[i].year < 1972 {
        let (mjd_ref, rate) = DRIFT[i];
        da += (mjd_at_midnight(year, month, day) + fraction - mjd_ref) * rate;
    }
    Ok(da)
}

/// TAI − UTC in seconds for a UTC calendar date and fraction of day.
///
/// Returns NaN for dates before 1960 January 1 and for invalid dates;
/// callers check with `is_nan()` at their boundary.
pub fn delta_at(year: i32, month: u32, day: u32, fraction: f64) -> f64 {
    lookup(year, month, day, fraction).unwrap_or(f64::NAN)
}

/// Checked variant of [`delta_at`].
pub fn try_delta_at(year: i32, month: u32, day: u32, fraction: f64) -> Result<f64, TimeError> {
    lookup(year, month, day, fraction).inspect_err(|e| {
        if matches!(e, TimeError::DateBeforeLeapSecondTable { .. }) {
            log::warn!("no TAI-UTC for {year}-{month:02}-{day:02}: {e}");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn modern_values() {
        assert_eq!(delta_at(2003, 6, 1, 0.0), 32.0);
        assert_eq!(delta_at(2008, 1, 17, 0.0), 33.0);
        assert_eq!(delta_at(2017, 9, 1, 0.0), 37.0);
    }

    #[test]
    fn first_day_of_step() {
        assert_eq!(delta_at(2016, 12, 31, 0.99), 36.0);
        assert_eq!(delta_at(2017, 1, 1, 0.0), 37.0);
    }

    #[test]
    fn drift_era() {
        // 1965-01-01: 3.5401300 + (38761 - 38761) * 0.001296
        assert_abs_diff_eq!(delta_at(1965, 1, 1, 0.0), 3.540_130_0 + 0.0, epsilon = 1e-12);
        // Ten days later the drift term has grown.
        assert_abs_diff_eq!(
            delta_at(1965, 1, 11, 0.0),
            3.540_130_0 + 10.0 * 0.001_296_0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn before_table_is_nan() {
        assert!(delta_at(1959, 12, 31, 0.0).is_nan());
        assert!(matches!(
            try_delta_at(1959, 12, 31, 0.0),
            Err(TimeError::DateBeforeLeapSecondTable { year: 1959, .. })
        ));
    }

    #[test]
    fn invalid_inputs() {
        assert!(delta_at(2000, 0, 1, 0.0).is_nan());
        assert!(try_delta_at(2000, 2, 30, 0.0).is_err());
        assert!(try_delta_at(2000, 1, 1, 1.5).is_err());
    }

    #[test]
    fn table_is_ordered() {
        for w in LEAP_SECONDS.windows(2) {
            assert!((12 * w[0].year + w[0].month as i32) < 12 * w[1].year + w[1].month as i32);
        }
    }
}
