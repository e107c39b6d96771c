//! ISO-week and quarter arithmetic for the annual calendar.
//!
//! Two different week-anchoring formulas coexist here on purpose.
//! [`week_date_range`] anchors weeks at the year's first Monday on or
//! after January 1, while [`week_deadline`] uses a plain day-of-year
//! offset from January 1. They can disagree near year boundaries; the
//! reference behavior keeps both, and unifying them would change which
//! date is shown as a deadline versus which week a calendar highlights.

use jiff::civil::{Date, Weekday};
use jiff::Span;

use crate::error::{CadenceError, Result};
use crate::models::Quarter;

/// Number of weeks in the expanded annual calendar.
pub const WEEKS_PER_YEAR: u8 = 52;

/// Number of weeks per quarter.
pub const WEEKS_PER_QUARTER: u8 = 13;

/// Returns the ISO-8601 week number of the given date.
///
/// Weeks start on Monday and week 1 is the week containing the year's
/// first Thursday, so dates near a year boundary may belong to the
/// previous or next ISO year's week.
pub fn current_iso_week_number(today: Date) -> i8 {
    today.iso_week_date().week()
}

/// Returns the Monday-to-Sunday date sequence for a week of the year.
///
/// The first week is anchored at January 1 advanced to the first Monday
/// (January 1 itself when it already is a Monday; January 2 when January 1
/// is a Sunday); subsequent weeks add whole weeks from there.
pub fn week_date_range(year: i16, week_number: u8) -> Result<[Date; 7]> {
    let jan1 = Date::new(year, 1, 1)
        .map_err(|e| CadenceError::calendar(format!("invalid year {year}"), &e))?;

    let monday_offset = match jan1.weekday() {
        Weekday::Monday => 0,
        other => 8 - i64::from(other.to_monday_one_offset()),
    };

    let start = jan1
        .checked_add(Span::new().days(monday_offset + (i64::from(week_number) - 1) * 7))
        .map_err(|e| {
            CadenceError::calendar(format!("week {week_number} of {year} out of range"), &e)
        })?;

    let mut days = [start; 7];
    for i in 1..7 {
        days[i] = days[i - 1].tomorrow().map_err(|e| {
            CadenceError::calendar(format!("week {week_number} of {year} out of range"), &e)
        })?;
    }
    Ok(days)
}

/// Returns the deadline date for a week: day-of-year `(week-1)*7 + 5`.
///
/// This is the Friday of the week only in years where January 1 falls on
/// a Monday. It is intentionally not derived from [`week_date_range`].
pub fn week_deadline(year: i16, week_number: u8) -> Result<Date> {
    let jan1 = Date::new(year, 1, 1)
        .map_err(|e| CadenceError::calendar(format!("invalid year {year}"), &e))?;

    jan1.checked_add(Span::new().days((i64::from(week_number) - 1) * 7 + 4))
        .map_err(|e| {
            CadenceError::calendar(format!("week {week_number} of {year} out of range"), &e)
        })
}

/// Returns the inclusive week-number range covered by a quarter.
pub fn quarter_week_range(quarter: Quarter) -> (u8, u8) {
    let n = quarter.number();
    ((n - 1) * WEEKS_PER_QUARTER + 1, n * WEEKS_PER_QUARTER)
}
