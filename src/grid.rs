//! Text calendar of a single Hijri month.
//!
//! Weeks start on Saturday. Columns are indexed 0 (Saturday) through
//! 6 (Friday).

use std::fmt;
use std::iter;

use chrono::Weekday;

use crate::DateError;
use crate::calendar::Hijri;
use crate::consts::{DAYS_PER_WEEK, GRID_CELL_GAP, GRID_CELL_WIDTH, GRID_WEEKDAY_NAMES};
use crate::hijri::{days_elapsed_in_year, days_in_month, hijri_to_julian};
use crate::types::{Month, Year};

/// One week of the grid; `None` marks a blank cell.
pub type Week = [Option<u8>; DAYS_PER_WEEK as usize];

/// Layout of a Hijri month on a Saturday-first week grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonthGrid {
    year:        Year,
    month:       Month,
    start_index: u8,
    days:        u8,
}

/// Column of `weekday` when weeks start on Saturday.
#[allow(clippy::cast_possible_truncation)]
pub fn saturday_index(weekday: Weekday) -> u8 {
    // ISO numbering runs Monday = 1 ..= Sunday = 7
    ((weekday.number_from_monday() + 1) % u32::from(DAYS_PER_WEEK)) as u8
}

/// Column of day 1 of `month`.
///
/// The first month takes the weekday of 1 Muharram's Gregorian equivalent;
/// later months offset it by the days elapsed before them.
#[allow(clippy::cast_possible_truncation)]
pub fn start_index(year: i32, month: u8) -> u8 {
    let first_of_year = saturday_index(hijri_to_julian(year, 1, 1).weekday());
    if month <= 1 {
        return first_of_year;
    }
    let elapsed = days_elapsed_in_year(year, month - 1);
    ((u16::from(first_of_year) + elapsed) % u16::from(DAYS_PER_WEEK)) as u8
}

impl MonthGrid {
    /// # Errors
    /// Returns `DateError::InvalidYear` or `DateError::InvalidMonth` for out-of-range input.
    pub fn new(year: u16, month: u8) -> Result<Self, DateError> {
        Ok(Self::for_month(Year::new(year)?, Month::new(month)?))
    }

    pub(crate) fn for_month(year: Year, month: Month) -> Self {
        let y = i32::from(year);
        Self {
            year,
            month,
            start_index: start_index(y, month.get()),
            days: days_in_month(y, month.get()),
        }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Number of blank cells before day 1.
    pub const fn start_index(&self) -> u8 {
        self.start_index
    }

    /// Length of the month.
    pub const fn days(&self) -> u8 {
        self.days
    }

    /// Weeks of the month, padded with `None` before day 1 and after the last day.
    pub fn rows(&self) -> Vec<Week> {
        let cells: Vec<Option<u8>> = iter::repeat_n(None, usize::from(self.start_index))
            .chain((1..=self.days).map(Some))
            .collect();

        cells
            .chunks(usize::from(DAYS_PER_WEEK))
            .map(|chunk| {
                let mut week = [None; DAYS_PER_WEEK as usize];
                week[..chunk.len()].copy_from_slice(chunk);
                week
            })
            .collect()
    }
}

impl fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]", self.month.name::<Hijri>(), self.year)?;
        writeln!(f, "{}", GRID_WEEKDAY_NAMES.join(GRID_CELL_GAP))?;

        for week in self.rows() {
            let line = week
                .iter()
                .map(|cell| match cell {
                    Some(day) => format!("{day:>width$}", width = GRID_CELL_WIDTH),
                    None => " ".repeat(GRID_CELL_WIDTH),
                })
                .collect::<Vec<_>>()
                .join(GRID_CELL_GAP);
            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}

/// Renders the grid of `month` in `year` as text.
///
/// # Errors
/// See [`MonthGrid::new`].
pub fn render_month_grid(year: u16, month: u8) -> Result<String, DateError> {
    MonthGrid::new(year, month).map(|grid| grid.to_string())
}
