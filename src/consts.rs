/// Maximum valid year (inclusive), for either calendar
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (the twelfth month in both calendars)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// First month of the year
pub const FIRST_MONTH: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for Dhu al-Hijjah, which gains the leap day in the Hijri cycle
pub const DHU_AL_HIJJAH: u8 = 12;

/// Julian Day of 0001-01-01 (proleptic Gregorian) at midnight
pub const GREGORIAN_EPOCH: f64 = 1_721_425.5;
/// Julian Day of 1 Muharram 1 AH at midnight (civil epoch, 622-07-19 proleptic Gregorian)
pub const ISLAMIC_EPOCH: f64 = 1_948_439.5;

/// Days in 400 Gregorian years
pub(crate) const DAYS_PER_QUADRICENTENNIAL: f64 = 146_097.0;
/// Days in a Gregorian century not divisible by 400
pub(crate) const DAYS_PER_CENTURY: f64 = 36_524.0;
/// Days in four Julian-style years
pub(crate) const DAYS_PER_QUAD: f64 = 1_461.0;
/// Days in a common Gregorian year
pub(crate) const DAYS_PER_GREGORIAN_YEAR: f64 = 365.0;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Length of the Hijri leap cycle in years
pub const HIJRI_CYCLE_YEARS: i32 = 30;
/// Days in a 30-year Hijri cycle
pub(crate) const DAYS_PER_HIJRI_CYCLE: f64 = 10_631.0;
/// Mean Hijri month length used by the tabular month offset
pub(crate) const MEAN_HIJRI_MONTH: f64 = 29.5;

/// Years of the 30-year cycle (`year mod 30`) that carry a leap day
pub const LEAP_RESIDUES: [i32; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// Days in a common Hijri year
pub const HIJRI_COMMON_YEAR_DAYS: u16 = 354;
/// Days in a Hijri leap year
pub const HIJRI_LEAP_YEAR_DAYS: u16 = 355;
/// Length of odd-numbered Hijri months
pub const HIJRI_LONG_MONTH_DAYS: u8 = 30;
/// Length of even-numbered Hijri months
pub const HIJRI_SHORT_MONTH_DAYS: u8 = 29;
/// No month in either calendar is shorter than this
pub const MIN_MONTH_DAYS: u8 = 28;

/// Hijri month names, 1-indexed via `month - 1`
pub const HIJRI_MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Ula",
    "Jumada al-Akhirah",
    "Rajab",
    "Shaban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qidah",
    "Dhu al-Hijjah",
];

/// Gregorian month names, 1-indexed via `month - 1`
pub const GREGORIAN_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday column headings of the month grid, Saturday first
pub const GRID_WEEKDAY_NAMES: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];
/// Days per grid row
pub const DAYS_PER_WEEK: u8 = 7;
/// Width of a day cell in the month grid
pub const GRID_CELL_WIDTH: usize = 3;
/// Spaces between grid cells
pub const GRID_CELL_GAP: &str = "  ";

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the day and the month name in the long form
pub const DAY_SEPARATOR: char = ',';
