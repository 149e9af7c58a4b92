//! Julian Day values and the proleptic Gregorian calendar.
//!
//! A [`JulianDay`] is a continuous count of days anchored at noon, so every
//! civil midnight falls on a `.5` value. It is the only interchange format
//! between the two calendars: every conversion goes through it.

use crate::consts::{
    CENTURY_CYCLE, DAYS_PER_CENTURY, DAYS_PER_GREGORIAN_YEAR, DAYS_PER_QUAD,
    DAYS_PER_QUADRICENTENNIAL, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    GREGORIAN_DAYS_IN_MONTH, GREGORIAN_EPOCH, ISLAMIC_EPOCH, LEAP_YEAR_CYCLE,
};
use crate::prelude::*;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A Julian Day Number, possibly fractional.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianDay(f64);

impl JulianDay {
    /// 0001-01-01 in the proleptic Gregorian calendar, at midnight.
    pub const GREGORIAN_EPOCH: Self = Self(GREGORIAN_EPOCH);

    /// 1 Muharram 1 AH, at midnight.
    pub const ISLAMIC_EPOCH: Self = Self(ISLAMIC_EPOCH);

    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw day count
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// False for NaN and the infinities.
    #[inline]
    pub const fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// The civil day containing this instant, normalized to its midnight (`.5`) value.
    #[inline]
    pub fn midnight(self) -> Self {
        Self((self.0 - 0.5).floor() + 0.5)
    }

    /// Day of the week of the civil day containing this instant.
    ///
    /// Matches the ISO weekday of the proleptic Gregorian date with the same
    /// day number.
    #[allow(clippy::cast_possible_truncation)]
    pub fn weekday(self) -> Weekday {
        match ((self.0 + 1.5).floor() as i64).rem_euclid(7) {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }
}

// Helper functions

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn gregorian_days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= 12);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

/// Converts a proleptic Gregorian date to its Julian Day at midnight.
///
/// No validation is performed; years before 1 extrapolate backwards.
pub fn gregorian_to_julian(year: i32, month: u8, day: u8) -> JulianDay {
    let y = f64::from(year - 1);
    let leap_correction = if month <= FEBRUARY {
        0.0
    } else if is_gregorian_leap_year(year) {
        -1.0
    } else {
        -2.0
    };

    JulianDay(
        (GREGORIAN_EPOCH - 1.0)
            + DAYS_PER_GREGORIAN_YEAR * y
            + (y / 4.0).floor()
            - (y / 100.0).floor()
            + (y / 400.0).floor()
            + ((367.0 * f64::from(month) - 362.0) / 12.0).floor()
            + leap_correction
            + f64::from(day),
    )
}

/// Converts a Julian Day to a proleptic Gregorian `(year, month, day)`.
///
/// Fractional days resolve to the civil day that contains them.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn julian_to_gregorian(jd: JulianDay) -> (i32, u8, u8) {
    let wjd = jd.midnight().0;
    let depoch = (wjd - GREGORIAN_EPOCH) as i64;

    let quadricent = depoch.div_euclid(DAYS_PER_QUADRICENTENNIAL as i64);
    let dqc = depoch.rem_euclid(DAYS_PER_QUADRICENTENNIAL as i64);
    let cent = dqc.div_euclid(DAYS_PER_CENTURY as i64);
    let dcent = dqc.rem_euclid(DAYS_PER_CENTURY as i64);
    let quad = dcent.div_euclid(DAYS_PER_QUAD as i64);
    let dquad = dcent.rem_euclid(DAYS_PER_QUAD as i64);
    let yindex = dquad.div_euclid(DAYS_PER_GREGORIAN_YEAR as i64);

    let mut year = quadricent * 400 + cent * 100 + quad * 4 + yindex;
    // The last day of a leap cycle belongs to the year that is ending
    if !(cent == 4 || yindex == 4) {
        year += 1;
    }
    // Saturate so absurdly distant days still produce a (rejectable) year
    let year = i32::try_from(year).unwrap_or(if year < 0 { i32::MIN + 1 } else { i32::MAX });

    let yearday = wjd - gregorian_to_julian(year, 1, 1).0;
    let leapadj = if wjd < gregorian_to_julian(year, 3, 1).0 {
        0.0
    } else if is_gregorian_leap_year(year) {
        1.0
    } else {
        2.0
    };
    let month = (((yearday + leapadj) * 12.0 + 373.0) / 367.0).floor() as u8;
    let day = (wjd - gregorian_to_julian(year, month, 1).0 + 1.0) as u8;

    (year, month, day)
}
