//! Conversions between UTC, TAI, UT1, TT, TDB, TCB and TCG.
//!
//! Every function takes and returns a [`TwoPartTime`]. Offsets go into
//! the smaller-magnitude part, so a (day, fraction) split stays a
//! (day, fraction) split. Scales that need an externally supplied
//! offset (UT1 − UTC, UT1 − TAI, TT − UT1, TDB − TT) take it in
//! seconds.
//!
//! Sources: IAU 2006 Resolution B3 (TDB), IAU 2000 Resolution B1.9
//! (TT/TCG), IERS Conventions 2010 ch. 10. Public domain.

use drishti_math::constants::{DAYSEC, DJM0, DJM77, ELB, ELG, TDB0, TTMTAI};

use crate::error::TimeError;
use crate::julian::{TwoPartTime, jd_to_calendar, mjd_at_midnight};
use crate::leap::{delta_at, try_delta_at};

/// 1977 January 1.0 as a Julian Date.
const T77TD: f64 = DJM0 + DJM77;

/// TT − TAI in days.
const T77TF: f64 = TTMTAI / DAYSEC;

/// TDB − TCB at 1977 January 1.0, in days.
const TDB0D: f64 = TDB0 / DAYSEC;

/// Apply `f(big, small)` to produce a new smaller part.
fn on_small(t: TwoPartTime, f: impl Fn(f64, f64) -> f64) -> TwoPartTime {
    if t.whole.abs() > t.fraction.abs() {
        TwoPartTime::new(t.whole, f(t.whole, t.fraction))
    } else {
        TwoPartTime::new(f(t.fraction, t.whole), t.fraction)
    }
}

// ---------------------------------------------------------------------------
// Atomic and dynamical scales
// ---------------------------------------------------------------------------

pub fn tai_to_tt(tai: TwoPartTime) -> TwoPartTime {
    tai.offset(TTMTAI / DAYSEC)
}

pub fn tt_to_tai(tt: TwoPartTime) -> TwoPartTime {
    tt.offset(-TTMTAI / DAYSEC)
}

/// TT to TDB given TDB − TT in seconds.
pub fn tt_to_tdb(tt: TwoPartTime, tdb_minus_tt: f64) -> TwoPartTime {
    tt.offset(tdb_minus_tt / DAYSEC)
}

/// TDB to TT given TDB − TT in seconds.
pub fn tdb_to_tt(tdb: TwoPartTime, tdb_minus_tt: f64) -> TwoPartTime {
    tdb.offset(-tdb_minus_tt / DAYSEC)
}

/// TCB to TDB using the IAU 2006 defining relation.
pub fn tcb_to_tdb(tcb: TwoPartTime) -> TwoPartTime {
    on_small(tcb, |big, small| {
        let d = big - T77TD;
        small + TDB0D - (d + (small - T77TF)) * ELB
    })
}

/// TDB to TCB, the exact inverse of [`tcb_to_tdb`].
pub fn tdb_to_tcb(tdb: TwoPartTime) -> TwoPartTime {
    let elbb = ELB / (1.0 - ELB);
    on_small(tdb, |big, small| {
        let d = T77TD - big;
        let f = small - TDB0D;
        f - (d - (f - T77TF)) * elbb
    })
}

pub fn tcg_to_tt(tcg: TwoPartTime) -> TwoPartTime {
    let t77t = DJM77 + TTMTAI / DAYSEC;
    on_small(tcg, |big, small| {
        small - ((big - DJM0) + (small - t77t)) * ELG
    })
}

pub fn tt_to_tcg(tt: TwoPartTime) -> TwoPartTime {
    let t77t = DJM77 + TTMTAI / DAYSEC;
    let elgg = ELG / (1.0 - ELG);
    on_small(tt, |big, small| {
        small + ((big - DJM0) + (small - t77t)) * elgg
    })
}

// ---------------------------------------------------------------------------
// Universal time
// ---------------------------------------------------------------------------

/// TAI to UT1 given UT1 − TAI in seconds.
pub fn tai_to_ut1(tai: TwoPartTime, ut1_minus_tai: f64) -> TwoPartTime {
    tai.offset(ut1_minus_tai / DAYSEC)
}

/// UT1 to TAI given UT1 − TAI in seconds.
pub fn ut1_to_tai(ut1: TwoPartTime, ut1_minus_tai: f64) -> TwoPartTime {
    ut1.offset(-ut1_minus_tai / DAYSEC)
}

/// TT to UT1 given TT − UT1 (ΔT) in seconds.
pub fn tt_to_ut1(tt: TwoPartTime, tt_minus_ut1: f64) -> TwoPartTime {
    tt.offset(-tt_minus_ut1 / DAYSEC)
}

/// UT1 to TT given TT − UT1 (ΔT) in seconds.
pub fn ut1_to_tt(ut1: TwoPartTime, tt_minus_ut1: f64) -> TwoPartTime {
    ut1.offset(tt_minus_ut1 / DAYSEC)
}

// ---------------------------------------------------------------------------
// UTC
// ---------------------------------------------------------------------------

/// UTC to TAI.
///
/// UTC uses the quasi-JD convention: on a day ending in a leap second
/// the fraction runs from 0 to 1 over 86401 SI seconds. Before 1972 the
/// UTC second is itself rescaled by the drift rate.
pub fn utc_to_tai(utc: TwoPartTime) -> TwoPartTime {
    let (u1, u2, swapped) = utc.ordered();

    let Ok(cal) = jd_to_calendar(TwoPartTime::new(u1, u2)) else {
        return TwoPartTime::nan();
    };
    let dat0 = delta_at(cal.year, cal.month, cal.day, 0.0);
    let dat12 = delta_at(cal.year, cal.month, cal.day, 0.5);

    let Ok(tomorrow) = jd_to_calendar(TwoPartTime::new(u1 + 1.5, u2 - cal.fraction)) else {
        return TwoPartTime::nan();
    };
    let dat24 = delta_at(tomorrow.year, tomorrow.month, tomorrow.day, 0.0);

    // Separate the TAI-UTC change into per-day drift and any jump.
    let dlod = 2.0 * (dat12 - dat0);
    let dleap = dat24 - (dat0 + dlod);

    // Undo the leap-second spreading, then rescale pre-1972 seconds.
    let mut fd = cal.fraction * (DAYSEC + dleap) / DAYSEC;
    fd *= (DAYSEC + dlod) / DAYSEC;

    let z = mjd_at_midnight(cal.year, cal.month, cal.day);
    let mut a2 = DJM0 - u1;
    a2 += z;
    a2 += fd + dat0 / DAYSEC;

    TwoPartTime::reorder(u1, a2, swapped)
}

/// TAI to UTC, inverting [`utc_to_tai`] with two correction passes.
pub fn tai_to_utc(tai: TwoPartTime) -> TwoPartTime {
    let (a1, a2, swapped) = tai.ordered();

    let mut u2 = a2;
    for _ in 0..2 {
        let g = utc_to_tai(TwoPartTime::new(a1, u2));
        u2 += a1 - g.whole;
        u2 += a2 - g.fraction;
    }

    TwoPartTime::reorder(a1, u2, swapped)
}

/// UTC to UT1 given UT1 − UTC in seconds.
pub fn utc_to_ut1(utc: TwoPartTime, dut1: f64) -> TwoPartTime {
    let Ok(cal) = jd_to_calendar(utc) else {
        return TwoPartTime::nan();
    };
    let dat = delta_at(cal.year, cal.month, cal.day, 0.0);
    let dta = dut1 - dat;
    tai_to_ut1(utc_to_tai(utc), dta)
}

/// UT1 to UTC given UT1 − UTC in seconds.
///
/// Probes the days around the instant for a ΔAT step. Inside a UTC day
/// that ends with a leap second, UT1 − UTC is ramped across the day so
/// that a UT1 instant within the leap second lands on a UTC fraction
/// past the end of the day instead of aliasing into the next one.
pub fn ut1_to_utc(ut1: TwoPartTime, dut1: f64) -> TwoPartTime {
    let (u1, mut u2, swapped) = ut1.ordered();

    let mut duts = dut1;
    let mut dats1 = 0.0;

    for i in -1..=3 {
        let d2 = u2 + f64::from(i);
        let Ok(cal) = jd_to_calendar(TwoPartTime::new(u1, d2)) else {
            return TwoPartTime::nan();
        };
        let dats2 = delta_at(cal.year, cal.month, cal.day, 0.0);
        if dats2.is_nan() {
            return TwoPartTime::nan();
        }
        if i == -1 {
            dats1 = dats2;
        }
        let ddats = dats2 - dats1;

        if ddats.abs() >= 0.5 {
            // Make UT1-UTC the "before" value.
            if ddats * duts >= 0.0 {
                duts -= ddats;
            }

            // UT1 at the start of the UTC day that ends in the leap.
            let us1 = DJM0;
            let us2 = mjd_at_midnight(cal.year, cal.month, cal.day) - 1.0 + duts / DAYSEC;

            let du = (u1 - us1) + (u2 - us2);
            if du > 0.0 {
                let fd = du * DAYSEC / (DAYSEC + ddats);
                duts += ddats * fd.min(1.0);
            }
            break;
        }
        dats1 = dats2;
    }

    u2 -= duts / DAYSEC;
    TwoPartTime::reorder(u1, u2, swapped)
}

// ---------------------------------------------------------------------------
// Checked UTC conversions
// ---------------------------------------------------------------------------

/// Confirm ΔAT is defined for the UTC day containing `t`.
fn check_leap_table(t: TwoPartTime) -> Result<(), TimeError> {
    let cal = jd_to_calendar(t)?;
    try_delta_at(cal.year, cal.month, cal.day, 0.0).map(|_| ())
}

/// [`utc_to_tai`] that reports a date before 1960 as an error.
pub fn try_utc_to_tai(utc: TwoPartTime) -> Result<TwoPartTime, TimeError> {
    check_leap_table(utc)?;
    Ok(utc_to_tai(utc))
}

/// [`tai_to_utc`] that reports a date before 1960 as an error.
pub fn try_tai_to_utc(tai: TwoPartTime) -> Result<TwoPartTime, TimeError> {
    check_leap_table(tai.offset(-10.0 / DAYSEC))?;
    Ok(tai_to_utc(tai))
}

/// [`utc_to_ut1`] that reports a date before 1960 as an error.
pub fn try_utc_to_ut1(utc: TwoPartTime, dut1: f64) -> Result<TwoPartTime, TimeError> {
    check_leap_table(utc)?;
    Ok(utc_to_ut1(utc, dut1))
}

/// [`ut1_to_utc`] that reports a date before 1960 as an error.
pub fn try_ut1_to_utc(ut1: TwoPartTime, dut1: f64) -> Result<TwoPartTime, TimeError> {
    check_leap_table(ut1.offset(-1.0))?;
    Ok(ut1_to_utc(ut1, dut1))
}
