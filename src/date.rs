use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{debug, trace};

use crate::calendar::{Calendar, Gregorian, Hijri};
use crate::consts::{DATE_SEPARATOR, DAY_SEPARATOR, FIRST_MONTH, MAX_MONTH, MIN_DAY, MIN_MONTH_DAYS};
use crate::grid::MonthGrid;
use crate::julian::JulianDay;
use crate::types::{Day, Month, Year};
use crate::DateError;

/// A validated calendar date in calendar system `C`.
///
/// Dates in different calendars are different types; moving between them
/// goes through [`Date::convert`], which routes via the Julian Day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date<C: Calendar> {
    year:     Year,
    month:    Month,
    day:      Day,
    calendar: PhantomData<C>,
}

/// A date in the tabular Hijri calendar.
pub type HijriDate = Date<Hijri>;

/// A date in the proleptic Gregorian calendar.
pub type GregorianDate = Date<Gregorian>;

/// Error type for reading dates from strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing but whitespace.
    #[error("Empty date string")]
    EmptyInput,

    /// Not shaped like `DD, MonthName YYYY` or `YYYY-MM-DD`.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// The month name is not in the calendar's table.
    #[error("Unknown month name: {0}")]
    UnknownMonthName(String),

    /// Well-formed, but not a valid date.
    #[error(transparent)]
    Date(#[from] DateError),
}

impl<C: Calendar> Date<C> {
    /// Creates a date from explicit components.
    ///
    /// # Errors
    /// Returns the `DateError` for the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Self::validate(year, month, day).inspect_err(|err| {
            debug!(year, month, day, calendar = C::NAME, error = %err, "rejected date");
        })
    }

    /// Creates a date from already-validated parts, checking the day against the month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the day does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, DateError> {
        Self::new(year.get(), month.get(), day.get())
    }

    /// Today's date in this calendar, read from the host's local clock.
    ///
    /// # Errors
    /// Returns a `DateError` if the host date falls outside the supported years.
    pub fn today() -> Result<Self, DateError> {
        let now = chrono::Local::now().date_naive();
        trace!(%now, calendar = C::NAME, "read host date");
        Self::try_from(now)
    }

    fn validate(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_nz = Year::new(year)?;
        let month_nz = Month::new(month)?;
        let day_nz = Day::new::<C>(day, year, month)?;
        Ok(Self {
            year:     year_nz,
            month:    month_nz,
            day:      day_nz,
            calendar: PhantomData,
        })
    }

    /// Checked construction from the signed components produced by calendar arithmetic.
    fn from_raw((year, month, day): (i32, u8, u8)) -> Result<Self, DateError> {
        let year = Year::from_i32(year)?;
        Self::new(year.get(), month, day)
    }

    /// Returns the year as u16
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month as u8
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day as u8
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Components as a plain tuple: (year, month, day)
    pub const fn to_tuple(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// Name of this date's month in its calendar.
    pub fn month_name(&self) -> &'static str {
        self.month.name::<C>()
    }

    /// Julian Day of this date at midnight.
    pub fn to_julian_day(&self) -> JulianDay {
        C::to_julian_day(i32::from(self.year), self.month(), self.day())
    }

    /// The date in this calendar containing `jd`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if `jd` is not finite or falls outside
    /// years `1..=MAX_YEAR`.
    pub fn from_julian_day(jd: JulianDay) -> Result<Self, DateError> {
        if !jd.is_finite() {
            debug!(jd = jd.value(), calendar = C::NAME, "rejected non-finite julian day");
            return Err(DateError::InvalidYear(0));
        }
        Self::from_raw(C::from_julian_day(jd))
    }

    /// The same day expressed in calendar `D`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the day has no year in `1..=MAX_YEAR` in `D`.
    pub fn convert<D: Calendar>(&self) -> Result<Date<D>, DateError> {
        Date::<D>::from_julian_day(self.to_julian_day())
    }

    pub fn weekday(&self) -> Weekday {
        self.to_julian_day().weekday()
    }

    pub fn is_leap_year(&self) -> bool {
        C::is_leap_year(i32::from(self.year))
    }

    pub fn days_in_year(&self) -> u16 {
        C::days_in_year(i32::from(self.year))
    }

    pub fn days_in_month(&self) -> u8 {
        C::days_in_month(i32::from(self.year), self.month())
    }

    /// Days in this year's months up to and including the current one.
    pub fn days_elapsed_in_year(&self) -> u16 {
        C::days_elapsed_in_year(i32::from(self.year), self.month())
    }

    /// The following day.
    ///
    /// The month length is only consulted once the day passes 28, the
    /// shortest month in either calendar.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` when stepping past the last day of `MAX_YEAR`.
    pub fn next_day(&self) -> Result<Self, DateError> {
        let mut year = self.year();
        let mut month = self.month();
        let mut day = self.day() + 1;

        if day > MIN_MONTH_DAYS && day > self.days_in_month() {
            day = MIN_DAY;
            month += 1;
            if month > MAX_MONTH {
                month = FIRST_MONTH;
                year += 1;
            }
        }

        Self::new(year, month, day)
    }

    /// Advances the date by `days`, one day at a time.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the result would pass `MAX_YEAR`.
    pub fn add_days(&self, days: u32) -> Result<Self, DateError> {
        (0..days).try_fold(*self, |date, _| date.next_day())
    }

    /// Like [`add_days`](Self::add_days), returning `None` on overflow.
    pub fn checked_add_days(&self, days: u32) -> Option<Self> {
        self.add_days(days).ok()
    }

    /// Numeric `YYYY-MM-DD` form.
    pub fn to_iso_string(&self) -> String {
        format!(
            "{:04}{sep}{:02}{sep}{:02}",
            self.year(),
            self.month(),
            self.day(),
            sep = DATE_SEPARATOR
        )
    }
}

impl Date<Hijri> {
    /// Converts a proleptic Gregorian date.
    ///
    /// # Errors
    /// Returns a `DateError` if the Gregorian components are invalid or the
    /// day precedes 1 Muharram 1 AH.
    pub fn from_gregorian(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        GregorianDate::new(year, month, day)?.convert()
    }

    /// # Errors
    /// Returns `DateError::InvalidYear` for dates after 9999-12-31 in the Gregorian calendar.
    pub fn to_gregorian(&self) -> Result<GregorianDate, DateError> {
        self.convert()
    }

    /// Calendar grid of this date's month.
    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::for_month(self.year, self.month)
    }
}

impl Date<Gregorian> {
    /// # Errors
    /// Returns `DateError::InvalidYear` for dates before 1 Muharram 1 AH.
    pub fn to_hijri(&self) -> Result<HijriDate, DateError> {
        self.convert()
    }
}

/// Today's Hijri date from the host clock.
///
/// # Errors
/// See [`Date::today`].
pub fn today() -> Result<HijriDate, DateError> {
    HijriDate::today()
}

/// Converts a Gregorian date to the Hijri calendar.
///
/// # Errors
/// See [`HijriDate::from_gregorian`].
pub fn from_gregorian(year: u16, month: u8, day: u8) -> Result<HijriDate, DateError> {
    HijriDate::from_gregorian(year, month, day)
}

/// Converts a Hijri date to the Gregorian calendar.
///
/// # Errors
/// See [`HijriDate::to_gregorian`].
pub fn to_gregorian(date: &HijriDate) -> Result<GregorianDate, DateError> {
    date.to_gregorian()
}

/// Advances `date` by `days`.
///
/// # Errors
/// See [`Date::add_days`].
pub fn add_days<C: Calendar>(date: &Date<C>, days: u32) -> Result<Date<C>, DateError> {
    date.add_days(days)
}

/// `DD, MonthName YYYY`
impl<C: Calendar> fmt::Display for Date<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {} {}",
            self.day,
            DAY_SEPARATOR,
            self.month_name(),
            self.year
        )
    }
}

impl<C: Calendar> FromStr for Date<C> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        match trimmed.split_once(DAY_SEPARATOR) {
            Some((day, rest)) => Self::parse_long_form(day, rest),
            None => Self::parse_iso(trimmed),
        }
    }
}

impl<C: Calendar> Date<C> {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.trim()
            .parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_month_name(name: &str) -> Result<u8, ParseError> {
        C::MONTH_NAMES
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name))
            .and_then(|index| u8::try_from(index + 1).ok())
            .ok_or_else(|| ParseError::UnknownMonthName(name.to_owned()))
    }

    // DD, MonthName YYYY
    fn parse_long_form(day: &str, rest: &str) -> Result<Self, ParseError> {
        let (name, year) = rest
            .trim()
            .rsplit_once(char::is_whitespace)
            .ok_or_else(|| ParseError::InvalidFormat(rest.trim().to_owned()))?;

        let day = Self::parse_u8(day)?;
        let month = Self::parse_month_name(name.trim())?;
        let year = Self::parse_u16(year)?;

        Ok(Self::new(year, month, day)?)
    }

    // YYYY-MM-DD
    fn parse_iso(s: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        };

        let year = Self::parse_u16(year)?;
        let month = Self::parse_u8(month)?;
        let day = Self::parse_u8(day)?;

        Ok(Self::new(year, month, day)?)
    }
}

impl<C: Calendar> TryFrom<NaiveDate> for Date<C> {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let month = u8::try_from(date.month()).map_err(|_| DateError::InvalidMonth(0))?;
        let day = u8::try_from(date.day()).map_err(|_| DateError::InvalidDay {
            year: 0,
            month,
            day: 0,
        })?;
        Self::from_julian_day(Gregorian::to_julian_day(date.year(), month, day))
    }
}

impl<C: Calendar> serde::Serialize for Date<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, C: Calendar> serde::Deserialize<'de> for Date<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hijri(year: u16, month: u8, day: u8) -> HijriDate {
        HijriDate::new(year, month, day).unwrap()
    }

    fn gregorian(year: u16, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let date = hijri(1432, 7, 27);
        assert_eq!(date.year(), 1432);
        assert_eq!(date.month(), 7);
        assert_eq!(date.day(), 27);
        assert_eq!(date.to_tuple(), (1432, 7, 27));
        assert_eq!(date.month_name(), "Rajab");
    }

    #[test]
    fn test_new_invalid_components() {
        assert!(matches!(
            HijriDate::new(0, 1, 1),
            Err(DateError::InvalidYear(0))
        ));
        assert!(matches!(
            HijriDate::new(10000, 1, 1),
            Err(DateError::InvalidYear(10000))
        ));
        assert!(matches!(
            HijriDate::new(1432, 13, 1),
            Err(DateError::InvalidMonth(13))
        ));
        assert!(matches!(
            HijriDate::new(1432, 0, 1),
            Err(DateError::InvalidMonth(0))
        ));
        assert!(matches!(
            HijriDate::new(1432, 1, 0),
            Err(DateError::InvalidDay { day: 0, .. })
        ));
        assert!(matches!(
            HijriDate::new(1432, 1, 31),
            Err(DateError::InvalidDay { day: 31, .. })
        ));
        // Short month: day 30 does not exist
        assert!(matches!(
            HijriDate::new(1432, 2, 30),
            Err(DateError::InvalidDay {
                year: 1432,
                month: 2,
                day: 30
            })
        ));
    }

    #[test]
    fn test_from_parts() {
        let year = Year::new(1432).unwrap();
        let month = Month::new(2).unwrap();
        let day: Day = 30.try_into().unwrap();
        assert!(HijriDate::from_parts(year, month, day).is_err());

        let day: Day = 29.try_into().unwrap();
        assert_eq!(
            HijriDate::from_parts(year, month, day).unwrap(),
            hijri(1432, 2, 29)
        );
    }

    #[test]
    fn test_epoch_converts_to_gregorian() {
        let epoch = hijri(1, 1, 1);
        assert_eq!(epoch.to_julian_day().value(), 1_948_439.5);
        assert_eq!(epoch.to_gregorian().unwrap(), gregorian(622, 7, 19));
        assert_eq!(epoch.weekday(), Weekday::Fri);
    }

    #[test]
    fn test_from_gregorian() {
        assert_eq!(from_gregorian(2010, 12, 8).unwrap(), hijri(1432, 1, 1));
        assert_eq!(from_gregorian(2011, 3, 1).unwrap(), hijri(1432, 3, 25));
        assert_eq!(from_gregorian(2000, 1, 1).unwrap(), hijri(1420, 9, 24));
        assert_eq!(gregorian(2024, 1, 1).to_hijri().unwrap(), hijri(1445, 6, 19));
    }

    #[test]
    fn test_from_gregorian_before_epoch() {
        // 622-07-16 falls in year 0 of the Hijri calendar
        assert!(matches!(
            from_gregorian(622, 7, 16),
            Err(DateError::InvalidYear(0))
        ));
        assert!(matches!(
            from_gregorian(2011, 2, 29),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_to_gregorian_out_of_range() {
        // Hijri 9999 lands in Gregorian year 10323
        assert!(matches!(
            to_gregorian(&hijri(9999, 1, 1)),
            Err(DateError::InvalidYear(_))
        ));
    }

    #[test]
    fn test_from_julian_day_out_of_range() {
        let cases = [
            784_354_017_364.5,
            -784_354_017_364.5,
            1.0e300,
            -1.0e300,
            f64::NAN,
            f64::INFINITY,
            f64::NEG_INFINITY,
        ];

        for value in cases {
            let jd = JulianDay::new(value);
            assert!(
                matches!(GregorianDate::from_julian_day(jd), Err(DateError::InvalidYear(_))),
                "Gregorian from {value}"
            );
            assert!(
                matches!(HijriDate::from_julian_day(jd), Err(DateError::InvalidYear(_))),
                "Hijri from {value}"
            );
        }

        assert!(matches!(
            HijriDate::from_julian_day(JulianDay::new(f64::NAN)),
            Err(DateError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_julian_day_round_trip() {
        let date = hijri(1445, 12, 30);
        let jd = date.to_julian_day();
        assert_eq!(HijriDate::from_julian_day(jd).unwrap(), date);

        let fractional = JulianDay::new(jd.value() + 0.75);
        assert_eq!(HijriDate::from_julian_day(fractional).unwrap(), date);
    }

    #[test]
    fn test_round_trip_through_gregorian() {
        let mut date = hijri(1440, 1, 1);
        let end = hijri(1450, 1, 1);
        while date < end {
            let there = date.to_gregorian().unwrap();
            assert_eq!(there.to_hijri().unwrap(), date, "{date}");
            date = date.next_day().unwrap();
        }
    }

    #[test]
    fn test_calendar_queries() {
        let date = hijri(1432, 7, 27);
        assert!(!date.is_leap_year());
        assert_eq!(date.days_in_year(), 354);
        assert_eq!(date.days_in_month(), 30);
        assert_eq!(date.days_elapsed_in_year(), 207);

        let leap = hijri(1445, 12, 1);
        assert!(leap.is_leap_year());
        assert_eq!(leap.days_in_month(), 30);
        assert_eq!(leap.days_in_year(), 355);
    }

    #[test]
    fn test_add_days_within_month() {
        let date = hijri(1432, 7, 27);
        assert_eq!(add_days(&date, 2).unwrap(), hijri(1432, 7, 29));
        assert_eq!(date.add_days(0).unwrap(), date);
    }

    #[test]
    fn test_add_days_month_rollover() {
        // Rajab has 30 days, Sha'ban 29
        assert_eq!(hijri(1432, 7, 29).add_days(1).unwrap(), hijri(1432, 7, 30));
        assert_eq!(hijri(1432, 7, 29).add_days(2).unwrap(), hijri(1432, 8, 1));
        assert_eq!(hijri(1432, 8, 29).add_days(1).unwrap(), hijri(1432, 9, 1));
        assert_eq!(hijri(1432, 8, 28).add_days(1).unwrap(), hijri(1432, 8, 29));
    }

    #[test]
    fn test_add_days_year_rollover() {
        // 1432 is a common year: Dhu al-Hijjah has 29 days
        assert_eq!(hijri(1432, 12, 29).add_days(1).unwrap(), hijri(1433, 1, 1));
        // 1445 is a leap year
        assert_eq!(hijri(1445, 12, 29).add_days(1).unwrap(), hijri(1445, 12, 30));
        assert_eq!(hijri(1445, 12, 30).add_days(1).unwrap(), hijri(1446, 1, 1));
    }

    #[test]
    fn test_add_days_agrees_with_julian_days() {
        let start = hijri(1430, 11, 14);
        for days in [1, 29, 30, 59, 354, 355, 1000, 10_631] {
            let stepped = start.add_days(days).unwrap();
            let direct = HijriDate::from_julian_day(JulianDay::new(
                start.to_julian_day().value() + f64::from(days),
            ))
            .unwrap();
            assert_eq!(stepped, direct, "adding {days} days");
        }
    }

    #[test]
    fn test_add_days_gregorian() {
        assert_eq!(gregorian(2024, 2, 28).add_days(1).unwrap(), gregorian(2024, 2, 29));
        assert_eq!(gregorian(2023, 2, 28).add_days(1).unwrap(), gregorian(2023, 3, 1));
        assert_eq!(gregorian(1999, 12, 31).add_days(1).unwrap(), gregorian(2000, 1, 1));
    }

    #[test]
    fn test_add_days_overflow() {
        let last = hijri(9999, 12, 29);
        assert!(!last.is_leap_year());
        assert!(matches!(
            last.add_days(1),
            Err(DateError::InvalidYear(10000))
        ));
        assert_eq!(last.checked_add_days(1), None);
        assert_eq!(last.checked_add_days(0), Some(last));
    }

    #[test]
    fn test_display() {
        assert_eq!(hijri(1432, 7, 27).to_string(), "27, Rajab 1432");
        assert_eq!(hijri(1432, 9, 1).to_string(), "01, Ramadan 1432");
        assert_eq!(hijri(1, 1, 1).to_string(), "01, Muharram 0001");
        assert_eq!(gregorian(622, 7, 19).to_string(), "19, July 0622");
    }

    #[test]
    fn test_iso_string() {
        assert_eq!(hijri(1432, 7, 27).to_iso_string(), "1432-07-27");
        assert_eq!(hijri(1, 1, 1).to_iso_string(), "0001-01-01");
    }

    #[test]
    fn test_parse_long_form() {
        let date: HijriDate = "27, Rajab 1432".parse().unwrap();
        assert_eq!(date, hijri(1432, 7, 27));

        let date: HijriDate = " 1, dhu al-hijjah 1445 ".parse().unwrap();
        assert_eq!(date, hijri(1445, 12, 1));

        let date: GregorianDate = "19, July 0622".parse().unwrap();
        assert_eq!(date, gregorian(622, 7, 19));
    }

    #[test]
    fn test_parse_iso() {
        let date: HijriDate = "1432-07-27".parse().unwrap();
        assert_eq!(date, hijri(1432, 7, 27));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<HijriDate>(), Err(ParseError::EmptyInput));
        assert_eq!("   ".parse::<HijriDate>(), Err(ParseError::EmptyInput));
        assert!(matches!(
            "27, Rajjab 1432".parse::<HijriDate>(),
            Err(ParseError::UnknownMonthName(_))
        ));
        assert!(matches!(
            "1432-07".parse::<HijriDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1432-aa-01".parse::<HijriDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "27, Rajab".parse::<HijriDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert_eq!(
            "1432-02-30".parse::<HijriDate>(),
            Err(ParseError::Date(DateError::InvalidDay {
                year: 1432,
                month: 2,
                day: 30
            }))
        );
    }

    #[test]
    fn test_display_parse_round_trip() {
        for date in [hijri(1432, 7, 27), hijri(1, 1, 1), hijri(1445, 12, 30)] {
            assert_eq!(date.to_string().parse::<HijriDate>().unwrap(), date);
        }
    }

    #[test]
    fn test_serde() {
        let date = hijri(1432, 7, 27);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"27, Rajab 1432\"");

        let parsed: HijriDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);

        let parsed: HijriDate = serde_json::from_str("\"1432-07-27\"").unwrap();
        assert_eq!(parsed, date);

        assert!(serde_json::from_str::<HijriDate>("\"30, Safar 1432\"").is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(hijri(1432, 7, 27) < hijri(1432, 7, 28));
        assert!(hijri(1432, 7, 30) < hijri(1432, 8, 1));
        assert!(hijri(1431, 12, 29) < hijri(1432, 1, 1));
    }

    #[test]
    fn test_from_naive_date() {
        let naive = NaiveDate::from_ymd_opt(2010, 12, 8).unwrap();
        assert_eq!(HijriDate::try_from(naive).unwrap(), hijri(1432, 1, 1));
        assert_eq!(
            GregorianDate::try_from(naive).unwrap(),
            gregorian(2010, 12, 8)
        );
        assert_eq!(hijri(1432, 1, 1).weekday(), naive.weekday());
    }

    #[test]
    fn test_today_matches_host_clock() {
        let before = chrono::Local::now().date_naive();
        let today = today().unwrap();
        let after = chrono::Local::now().date_naive();

        let candidates = [
            HijriDate::try_from(before).unwrap(),
            HijriDate::try_from(after).unwrap(),
        ];
        assert!(candidates.contains(&today));
        assert!(today.year() > 1400);
    }
}
