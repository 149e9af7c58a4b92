//! Conversion between the Gregorian and the tabular Hijri calendars.
//!
//! Every conversion goes through a [`JulianDay`]. The Hijri side uses the
//! arithmetic 30-year cycle, so results can differ by a day from calendars
//! based on lunar observation.
//!
//! ```
//! use hijri_date::{GregorianDate, HijriDate};
//!
//! let date = HijriDate::new(1432, 7, 27)?;
//! assert_eq!(date.to_string(), "27, Rajab 1432");
//! assert_eq!(date.to_gregorian()?, GregorianDate::new(2011, 6, 29)?);
//! assert_eq!(date.add_days(2)?, HijriDate::new(1432, 7, 29)?);
//! # Ok::<(), hijri_date::DateError>(())
//! ```

mod calendar;
mod consts;
mod date;
mod grid;
pub mod hijri;
pub mod julian;
mod prelude;
mod types;

pub use calendar::{Calendar, Gregorian, Hijri};
pub use consts::*;
pub use date::{
    Date, GregorianDate, HijriDate, ParseError, add_days, from_gregorian, to_gregorian, today,
};
pub use grid::{MonthGrid, Week, render_month_grid, saturday_index, start_index};
pub use julian::JulianDay;
pub use types::{Day, Month, Year};

use crate::prelude::*;

/// A year, month or day outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateError {
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
}

impl std::error::Error for DateError {}
