//! Calendar period boundaries.
//!
//! Each function returns the first or last instant of the minute, hour, day or
//! month containing its input, in the input's own timezone. Larger units are
//! left untouched.
//!
//! The end-of-day/hour/minute functions write a fixed `59` seconds and
//! [`END_OF_UNIT_NANOS`]. [`end_of_month`] instead rolls over to the first
//! instant of the next month and steps back one [`TICK`], which handles month
//! lengths and leap years without a table. With a one-microsecond tick both
//! approaches agree on the last day of a month.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::dst::{resolve_local, Edge};
use crate::error::{Result, TimeUtilError};
use crate::shift::months_after;

/// Sub-second fraction of every end-of-unit boundary: `.999999`.
pub const END_OF_UNIT_NANOS: u32 = 999_999_000;

/// Smallest step used by the boundary functions.
pub const TICK: TimeDelta = TimeDelta::microseconds(1);

/// A calendar unit a datetime can be truncated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Minute,
    Hour,
    Day,
    Month,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::Minute, Unit::Hour, Unit::Day, Unit::Month];

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Month => "month",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = TimeUtilError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minute" => Ok(Unit::Minute),
            "hour" => Ok(Unit::Hour),
            "day" => Ok(Unit::Day),
            "month" => Ok(Unit::Month),
            _ => Err(TimeUtilError::InvalidUnit(format!("'{}'", s))),
        }
    }
}

/// Rebuild `date` at the given wall-clock time in the timezone of `t`.
fn local_at<Tz: TimeZone>(
    t: &DateTime<Tz>,
    date: NaiveDate,
    (hour, min, sec, nano): (u32, u32, u32, u32),
    edge: Edge,
) -> Result<DateTime<Tz>> {
    let naive = date
        .and_hms_nano_opt(hour, min, sec, nano)
        .ok_or_else(|| TimeUtilError::OutOfRange(format!("{date} {hour}:{min}:{sec}.{nano}")))?;
    resolve_local(&t.timezone(), naive, edge)
}

/// First instant of the month containing `t`.
///
/// `2022-04-07T13:25:33.79Z` becomes `2022-04-01T00:00:00Z`.
pub fn beginning_of_month<Tz: TimeZone>(t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let date = t.date_naive();
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .ok_or_else(|| TimeUtilError::OutOfRange(format!("first day of {date}")))?;
    local_at(t, first, (0, 0, 0, 0), Edge::Start)
}

/// First instant of the day containing `t`.
pub fn beginning_of_day<Tz: TimeZone>(t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    local_at(t, t.date_naive(), (0, 0, 0, 0), Edge::Start)
}

/// First instant of the hour containing `t` (`hh:00:00`).
pub fn beginning_of_hour<Tz: TimeZone>(t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    local_at(t, t.date_naive(), (t.hour(), 0, 0, 0), Edge::Start)
}

/// First instant of the minute containing `t` (`hh:mm:00`).
pub fn beginning_of_minute<Tz: TimeZone>(t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    local_at(t, t.date_naive(), (t.hour(), t.minute(), 0, 0), Edge::Start)
}

/// Last instant of the month containing `t`.
///
/// Computed as the first instant of the following month minus one [`TICK`],
/// so `2022-12-14T12:45:53Z` becomes `2022-12-31T23:59:59.999999Z`.
pub fn end_of_month<Tz: TimeZone>(t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    months_after(t, 1)?
        .checked_sub_signed(TICK)
        .ok_or_else(|| TimeUtilError::OutOfRange(format!("end of month for {}", t.naive_local())))
}

/// Last instant of the day containing `t` (`23:59:59.999999`).
pub fn end_of_day<Tz: TimeZone>(t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    local_at(t, t.date_naive(), (23, 59, 59, END_OF_UNIT_NANOS), Edge::End)
}

/// Last instant of the hour containing `t` (`hh:59:59.999999`).
pub fn end_of_hour<Tz: TimeZone>(t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    local_at(t, t.date_naive(), (t.hour(), 59, 59, END_OF_UNIT_NANOS), Edge::End)
}

/// Last instant of the minute containing `t` (`hh:mm:59.999999`).
pub fn end_of_minute<Tz: TimeZone>(t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    local_at(
        t,
        t.date_naive(),
        (t.hour(), t.minute(), 59, END_OF_UNIT_NANOS),
        Edge::End,
    )
}

/// Dispatch to the `beginning_of_*` function for `unit`.
pub fn beginning_of<Tz: TimeZone>(unit: Unit, t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    match unit {
        Unit::Minute => beginning_of_minute(t),
        Unit::Hour => beginning_of_hour(t),
        Unit::Day => beginning_of_day(t),
        Unit::Month => beginning_of_month(t),
    }
}

/// Dispatch to the `end_of_*` function for `unit`.
pub fn end_of<Tz: TimeZone>(unit: Unit, t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    match unit {
        Unit::Minute => end_of_minute(t),
        Unit::Hour => end_of_hour(t),
        Unit::Day => end_of_day(t),
        Unit::Month => end_of_month(t),
    }
}

/// Both boundaries of the `unit` containing `t`, as `(beginning, end)`.
pub fn bounds_of<Tz: TimeZone>(unit: Unit, t: &DateTime<Tz>) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
    Ok((beginning_of(unit, t)?, end_of(unit, t)?))
}
