//! Date helpers shared by the grid builder and the month state.
//!
//! All comparisons happen on [`NaiveDate`] values, so the calendar never
//! depends on the time of day or on the display locale.

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime};

use crate::error::{CalendarError, Result};

/// Parse an ISO 8601 date or date-time into a calendar day.
///
/// Plain dates are taken literally. Naive date-times are read as local wall
/// time and date-times carrying an offset are converted to the local day.
pub fn parse_iso_date(text: &str) -> Result<NaiveDate> {
    let text = text.trim();

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Ok(date_time.with_timezone(&Local).date_naive());
    }

    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M"))
        .map(|date_time| date_time.date())
        .map_err(|_| CalendarError::InvalidDate(text.to_string()))
}

/// Format a date the way the registration routes expect it (`2024-1-5`)
pub fn format_route_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// Format a date as `YYYY-MM-DD`
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Shift the month containing `date` by `offset` months and return its first day.
///
/// Returns `None` only when the result falls outside chrono's date range.
pub fn add_months(date: NaiveDate, offset: i32) -> Option<NaiveDate> {
    let first = first_of_month(date);
    let months = Months::new(offset.unsigned_abs());
    if offset >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    }
}

/// Days to walk back from `date` to reach the Monday on or before it.
///
/// Sunday counts as the seventh day of the week, so a month starting on a
/// Sunday begins its grid six days earlier rather than one day later.
pub fn weekday_offset_from_monday(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// First and last visible day of the grid for the month containing `date`.
///
/// The range runs from the Monday on or before the 1st to the Sunday on or
/// after the last day. `None` when either end falls outside chrono's range.
pub fn grid_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let first = first_of_month(date);
    let start = first.checked_sub_days(Days::new(u64::from(weekday_offset_from_monday(first))))?;
    let last = add_months(first, 1)?.pred_opt()?;
    let end = last.checked_add_days(Days::new(u64::from(6 - weekday_offset_from_monday(last))))?;
    Some((start, end))
}
