//! Tabular Hijri calendar arithmetic.
//!
//! Years follow a fixed 30-year cycle of 11 leap years (see
//! [`LEAP_RESIDUES`]). Months alternate 30 and 29 days, with the leap day
//! added to Dhu al-Hijjah. This approximates the mean lunar year without
//! per-month tables and may differ from an observed calendar by ±1 day.
//!
//! The functions here never validate their input. Out-of-range values
//! extrapolate arithmetically; use [`HijriDate`](crate::HijriDate) for
//! checked construction.

use crate::consts::{
    DAYS_PER_HIJRI_CYCLE, DHU_AL_HIJJAH, HIJRI_COMMON_YEAR_DAYS, HIJRI_CYCLE_YEARS,
    HIJRI_LEAP_YEAR_DAYS, HIJRI_LONG_MONTH_DAYS, HIJRI_SHORT_MONTH_DAYS, ISLAMIC_EPOCH,
    LEAP_RESIDUES, MAX_MONTH, MEAN_HIJRI_MONTH,
};
use crate::julian::JulianDay;

/// Converts a Hijri date to its Julian Day at midnight.
pub fn hijri_to_julian(year: i32, month: u8, day: u8) -> JulianDay {
    let y = f64::from(year);
    JulianDay::new(
        f64::from(day)
            + (MEAN_HIJRI_MONTH * f64::from(i32::from(month) - 1)).ceil()
            + (y - 1.0) * f64::from(HIJRI_COMMON_YEAR_DAYS)
            + ((3.0 + 11.0 * y) / 30.0).floor()
            + ISLAMIC_EPOCH
            - 1.0,
    )
}

/// Converts a Julian Day to a Hijri `(year, month, day)`.
///
/// The month is located by converting day 1 of the candidate year back to a
/// Julian Day, which keeps the result an exact inverse of [`hijri_to_julian`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn julian_to_hijri(jd: JulianDay) -> (i32, u8, u8) {
    let jd = jd.value().floor() + 0.5;

    let year = ((30.0 * (jd - ISLAMIC_EPOCH) + 10_646.0) / DAYS_PER_HIJRI_CYCLE).floor() as i32;

    let year_start = hijri_to_julian(year, 1, 1).value();
    let month = ((jd - (29.0 + year_start)) / MEAN_HIJRI_MONTH).ceil() + 1.0;
    // Rounding can overshoot past the last month near year end
    let month = month.min(f64::from(MAX_MONTH)) as u8;

    let day = (jd - hijri_to_julian(year, month, 1).value() + 1.0) as u8;

    (year, month, day)
}

/// Whether `year` carries a leap day in the 30-year cycle.
pub fn is_leap_year(year: i32) -> bool {
    LEAP_RESIDUES.contains(&year.rem_euclid(HIJRI_CYCLE_YEARS))
}

/// 355 for leap years, 354 otherwise.
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        HIJRI_LEAP_YEAR_DAYS
    } else {
        HIJRI_COMMON_YEAR_DAYS
    }
}

/// 30 for odd months and for Dhu al-Hijjah in a leap year, 29 otherwise.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    if month % 2 == 1 || (month == DHU_AL_HIJJAH && is_leap_year(year)) {
        HIJRI_LONG_MONTH_DAYS
    } else {
        HIJRI_SHORT_MONTH_DAYS
    }
}

/// Total days in months `1..=month` of `year`.
pub fn days_elapsed_in_year(year: i32, month: u8) -> u16 {
    (1..=month).map(|m| u16::from(days_in_month(year, m))).sum()
}
