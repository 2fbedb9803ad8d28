//! String-level entry points shared by the language bindings.
//!
//! Datetimes come in as RFC 3339 text (or a naive `YYYY-MM-DDTHH:MM:SS[.f]`
//! read as UTC), are optionally converted into an IANA timezone, run through
//! one [`Operation`], and go back out as RFC 3339 text.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::boundary::{self, Unit};
use crate::error::{Result, TimeUtilError};
use crate::shift;

/// One of the truncation or shift operations, with its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "arg", rename_all = "kebab-case")]
pub enum Operation {
    BeginningOf(Unit),
    EndOf(Unit),
    MonthsAgo(u32),
    MonthsAfter(u32),
    DaysAgo(i64),
    DaysAfter(i64),
}

impl Operation {
    /// Build an operation from its kebab-case name and a textual argument.
    ///
    /// # Errors
    ///
    /// Returns [`TimeUtilError::InvalidOperation`] for an unknown name or a
    /// non-integer count, [`TimeUtilError::InvalidUnit`] for a bad unit, and
    /// [`TimeUtilError::NegativeMonths`] for a negative month count.
    ///
    /// # Examples
    ///
    /// ```
    /// use timeutil::{Operation, Unit};
    ///
    /// assert_eq!(
    ///     Operation::from_parts("end-of", "month").unwrap(),
    ///     Operation::EndOf(Unit::Month)
    /// );
    /// assert!(Operation::from_parts("months-ago", "-1").is_err());
    /// ```
    pub fn from_parts(name: &str, arg: &str) -> Result<Self> {
        match name {
            "beginning-of" => Ok(Operation::BeginningOf(arg.parse()?)),
            "end-of" => Ok(Operation::EndOf(arg.parse()?)),
            "months-ago" => Operation::months_ago(parse_count(name, arg)?),
            "months-after" => Operation::months_after(parse_count(name, arg)?),
            "days-ago" => Ok(Operation::DaysAgo(parse_count(name, arg)?)),
            "days-after" => Ok(Operation::DaysAfter(parse_count(name, arg)?)),
            other => Err(TimeUtilError::InvalidOperation(format!("unknown operation '{}'", other))),
        }
    }

    /// `MonthsAgo` from a signed count, rejecting negatives.
    pub fn months_ago(months: i64) -> Result<Self> {
        month_count(months).map(Operation::MonthsAgo)
    }

    /// `MonthsAfter` from a signed count, rejecting negatives.
    pub fn months_after(months: i64) -> Result<Self> {
        month_count(months).map(Operation::MonthsAfter)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::BeginningOf(_) => "beginning-of",
            Operation::EndOf(_) => "end-of",
            Operation::MonthsAgo(_) => "months-ago",
            Operation::MonthsAfter(_) => "months-after",
            Operation::DaysAgo(_) => "days-ago",
            Operation::DaysAfter(_) => "days-after",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::BeginningOf(unit) | Operation::EndOf(unit) => {
                write!(f, "{} {}", self.name(), unit)
            }
            Operation::MonthsAgo(n) | Operation::MonthsAfter(n) => write!(f, "{} {}", self.name(), n),
            Operation::DaysAgo(n) | Operation::DaysAfter(n) => write!(f, "{} {}", self.name(), n),
        }
    }
}

fn parse_count(name: &str, arg: &str) -> Result<i64> {
    arg.trim()
        .parse()
        .map_err(|_| TimeUtilError::InvalidOperation(format!("{name} expects an integer, got '{arg}'")))
}

fn month_count(months: i64) -> Result<u32> {
    if months < 0 {
        return Err(TimeUtilError::NegativeMonths(months));
    }
    u32::try_from(months).map_err(|_| TimeUtilError::OutOfRange(format!("{months} months")))
}

/// Run `op` on `t`.
pub fn apply<T: TimeZone>(op: Operation, t: &DateTime<T>) -> Result<DateTime<T>> {
    match op {
        Operation::BeginningOf(unit) => boundary::beginning_of(unit, t),
        Operation::EndOf(unit) => boundary::end_of(unit, t),
        Operation::MonthsAgo(n) => shift::months_ago(t, n),
        Operation::MonthsAfter(n) => shift::months_after(t, n),
        Operation::DaysAgo(n) => shift::days_ago(t, n),
        Operation::DaysAfter(n) => shift::days_after(t, n),
    }
}

/// Parse `datetime`, run `op` on it and format the result.
///
/// Without `timezone` the operation runs in the offset written in `datetime`.
/// With an IANA `timezone` the instant is first converted into that zone, so
/// boundaries follow its wall clock and DST rules.
///
/// # Examples
///
/// ```
/// use timeutil::{apply_rfc3339, Operation, Unit};
///
/// let end = apply_rfc3339(Operation::EndOf(Unit::Month), "2022-12-14T12:45:53Z", None).unwrap();
/// assert_eq!(end, "2022-12-31T23:59:59.999999Z");
/// ```
pub fn apply_rfc3339(op: Operation, datetime: &str, timezone: Option<&str>) -> Result<String> {
    let dt = parse_datetime(datetime)?;
    match timezone {
        Some(name) => {
            let tz = parse_timezone(name)?;
            Ok(format_rfc3339(&apply(op, &dt.with_timezone(&tz))?))
        }
        None => Ok(format_rfc3339(&apply(op, &dt)?)),
    }
}

/// Parse an RFC 3339 datetime, keeping its offset.
///
/// A naive `YYYY-MM-DDTHH:MM:SS[.f]` without an offset is read as UTC.
pub fn parse_datetime(s: &str) -> Result<DateTime<FixedOffset>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc().fixed_offset())
        .map_err(|e| TimeUtilError::InvalidDatetime(format!("'{}': {}", s, e)))
}

/// Parse an IANA timezone name such as `America/New_York`.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| TimeUtilError::InvalidTimezone(format!("'{}'", s)))
}

/// RFC 3339 with `Z` for a zero offset and only as many fractional digits as needed.
pub fn format_rfc3339<T: TimeZone>(dt: &DateTime<T>) -> String
where
    T::Offset: fmt::Display,
{
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
