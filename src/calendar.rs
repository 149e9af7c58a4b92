//! Calendar systems a [`Date`](crate::Date) can be expressed in.

use crate::consts::{GREGORIAN_MONTH_NAMES, HIJRI_MONTH_NAMES};
use crate::hijri;
use crate::julian::{self, JulianDay};
use std::fmt::Debug;
use std::hash::Hash;

/// A calendar system reachable through Julian Days.
///
/// Implementors are zero-sized markers; all behavior lives in associated
/// functions operating on raw `(year, month, day)` values.
pub trait Calendar: Debug + Clone + Copy + PartialEq + Eq + PartialOrd + Ord + Hash {
    /// Human-readable name of the calendar.
    const NAME: &'static str;

    /// Month names, indexed by `month - 1`.
    const MONTH_NAMES: [&'static str; 12];

    fn is_leap_year(year: i32) -> bool;

    fn days_in_month(year: i32, month: u8) -> u8;

    fn to_julian_day(year: i32, month: u8, day: u8) -> JulianDay;

    fn from_julian_day(jd: JulianDay) -> (i32, u8, u8);

    fn days_in_year(year: i32) -> u16 {
        Self::days_elapsed_in_year(year, 12)
    }

    /// Total days in months `1..=month` of `year`.
    fn days_elapsed_in_year(year: i32, month: u8) -> u16 {
        (1..=month)
            .map(|m| u16::from(Self::days_in_month(year, m)))
            .sum()
    }

    /// Name of `month`, or `None` outside `1..=12`.
    fn month_name(month: u8) -> Option<&'static str> {
        Self::MONTH_NAMES.get(usize::from(month).checked_sub(1)?).copied()
    }
}

/// The proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Gregorian;

/// The tabular Hijri calendar with the civil epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hijri;

impl Calendar for Gregorian {
    const NAME: &'static str = "Gregorian";
    const MONTH_NAMES: [&'static str; 12] = GREGORIAN_MONTH_NAMES;

    fn is_leap_year(year: i32) -> bool {
        julian::is_gregorian_leap_year(year)
    }

    fn days_in_month(year: i32, month: u8) -> u8 {
        julian::gregorian_days_in_month(year, month)
    }

    fn to_julian_day(year: i32, month: u8, day: u8) -> JulianDay {
        julian::gregorian_to_julian(year, month, day)
    }

    fn from_julian_day(jd: JulianDay) -> (i32, u8, u8) {
        julian::julian_to_gregorian(jd)
    }
}

impl Calendar for Hijri {
    const NAME: &'static str = "Hijri";
    const MONTH_NAMES: [&'static str; 12] = HIJRI_MONTH_NAMES;

    fn is_leap_year(year: i32) -> bool {
        hijri::is_leap_year(year)
    }

    fn days_in_month(year: i32, month: u8) -> u8 {
        hijri::days_in_month(year, month)
    }

    fn to_julian_day(year: i32, month: u8, day: u8) -> JulianDay {
        hijri::hijri_to_julian(year, month, day)
    }

    fn from_julian_day(jd: JulianDay) -> (i32, u8, u8) {
        hijri::julian_to_hijri(jd)
    }

    fn days_in_year(year: i32) -> u16 {
        hijri::days_in_year(year)
    }

    fn days_elapsed_in_year(year: i32, month: u8) -> u16 {
        hijri::days_elapsed_in_year(year, month)
    }
}
