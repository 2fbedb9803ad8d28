//! Day and month shifts.
//!
//! The two families deliberately differ. Month shifts are calendar moves that
//! always land on the first instant of the target month, so there is never a
//! "February 30" to normalise. Day shifts add or subtract whole 24-hour
//! durations and keep the time of day, except across an offset transition,
//! where the wall clock moves by the offset change.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, TimeZone};

use crate::dst::{resolve_local, Edge};
use crate::error::{Result, TimeUtilError};

/// First instant of the month `months` months before the month of `t`.
///
/// When `months` reaches back past January the year rolls back:
/// `2023-01-14T12:45:53Z` two months ago is `2022-11-01T00:00:00Z`.
pub fn months_ago<Tz: TimeZone>(t: &DateTime<Tz>, months: u32) -> Result<DateTime<Tz>> {
    first_of_shifted_month(t, -i64::from(months))
}

/// First instant of the month `months` months after the month of `t`.
///
/// When `months` runs past December the year rolls over:
/// `2022-11-14T12:45:53Z` two months after is `2023-01-01T00:00:00Z`.
pub fn months_after<Tz: TimeZone>(t: &DateTime<Tz>, months: u32) -> Result<DateTime<Tz>> {
    first_of_shifted_month(t, i64::from(months))
}

fn first_of_shifted_month<Tz: TimeZone>(t: &DateTime<Tz>, delta: i64) -> Result<DateTime<Tz>> {
    let date = t.date_naive();
    // Months counted from year 0, January = 0.
    let index = i64::from(date.year()) * 12 + i64::from(date.month0()) + delta;
    let month = index.rem_euclid(12) as u32 + 1;
    let year = i32::try_from(index.div_euclid(12))
        .map_err(|_| TimeUtilError::OutOfRange(format!("{date} shifted by {delta} months")))?;

    if year != date.year() {
        log::trace!("shifting {date} by {delta} months carries into {year}");
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| TimeUtilError::OutOfRange(format!("{year}-{month:02}-01")))?;
    resolve_local(&t.timezone(), first.and_time(NaiveTime::MIN), Edge::Start)
}

/// `t` moved `days` whole 24-hour periods into the past.
pub fn days_ago<Tz: TimeZone>(t: &DateTime<Tz>, days: i64) -> Result<DateTime<Tz>> {
    t.clone()
        .checked_sub_signed(day_span(days)?)
        .ok_or_else(|| TimeUtilError::OutOfRange(format!("{} minus {days} days", t.naive_local())))
}

/// `t` moved `days` whole 24-hour periods into the future.
pub fn days_after<Tz: TimeZone>(t: &DateTime<Tz>, days: i64) -> Result<DateTime<Tz>> {
    t.clone()
        .checked_add_signed(day_span(days)?)
        .ok_or_else(|| TimeUtilError::OutOfRange(format!("{} plus {days} days", t.naive_local())))
}

fn day_span(days: i64) -> Result<TimeDelta> {
    TimeDelta::try_days(days)
        .ok_or_else(|| TimeUtilError::OutOfRange(format!("{days} days is not a representable duration")))
}
