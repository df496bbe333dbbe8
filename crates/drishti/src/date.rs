//! UTC calendar dates.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use drishti_time::{ClockTime, TimeScale, TwoPartTime, d2dtf, dtf2d};

use crate::error::DrishtiError;

/// A UTC calendar date and clock time.
///
/// Parses from `YYYY-MM-DDTHH:MM:SS[.fff]Z`. Fields are checked only when
/// the date is converted, so 23:59:60 is accepted on days that end in a
/// leap second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub min: u32,
    pub sec: f64,
}

impl UtcDate {
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            min,
            sec,
        }
    }

    /// Two-part quasi-JD in UTC.
    pub fn to_utc(&self) -> Result<TwoPartTime, DrishtiError> {
        let clock = ClockTime::new(self.hour, self.min, self.sec);
        Ok(dtf2d(TimeScale::Utc, self.year, self.month, self.day, clock)?)
    }

    /// Calendar form of a two-part UTC quasi-JD.
    pub fn from_utc(utc: TwoPartTime) -> Result<Self, DrishtiError> {
        let dt = d2dtf(TimeScale::Utc, utc)?;
        Ok(Self::new(
            dt.year,
            dt.month,
            dt.day,
            dt.clock.hour,
            dt.clock.minute,
            dt.clock.second,
        ))
    }
}

impl Display for UtcDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
            self.year, self.month, self.day, self.hour, self.min, self.sec
        )
    }
}

fn field<T: FromStr>(part: Option<&str>, what: &'static str) -> Result<T, DrishtiError> {
    part.filter(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|p| p.parse().ok())
        .ok_or(DrishtiError::DateParse(what))
}

impl FromStr for UtcDate {
    type Err = DrishtiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s
            .trim()
            .strip_suffix('Z')
            .ok_or(DrishtiError::DateParse("missing trailing 'Z'"))?;
        let (date, time) = s
            .split_once('T')
            .ok_or(DrishtiError::DateParse("missing 'T' between date and time"))?;

        let mut d = date.split('-');
        let year = field(d.next(), "bad year")?;
        let month = field(d.next(), "bad month")?;
        let day = field(d.next(), "bad day")?;
        if d.next().is_some() {
            return Err(DrishtiError::DateParse("trailing date fields"));
        }

        let mut t = time.split(':');
        let hour = field(t.next(), "bad hour")?;
        let min = field(t.next(), "bad minute")?;
        let sec_text = t.next().ok_or(DrishtiError::DateParse("bad second"))?;
        if t.next().is_some() {
            return Err(DrishtiError::DateParse("trailing time fields"));
        }
        let (whole, frac) = sec_text.split_once('.').unwrap_or((sec_text, "0"));
        field::<u32>(Some(whole), "bad second")?;
        field::<u64>(Some(frac), "bad second")?;
        let sec = sec_text
            .parse()
            .map_err(|_| DrishtiError::DateParse("bad second"))?;

        Ok(Self::new(year, month, day, hour, min, sec))
    }
}
