//! Method-call access to the boundary and shift functions.

use chrono::{DateTime, TimeZone};

use crate::boundary::{self, Unit};
use crate::error::Result;
use crate::shift;

/// Extension trait exposing every operation as a method on [`DateTime`].
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use timeutil::CalendarExt;
///
/// let t = Utc.with_ymd_and_hms(2023, 1, 14, 12, 45, 53).unwrap();
/// assert_eq!(
///     t.months_ago(2).unwrap(),
///     Utc.with_ymd_and_hms(2022, 11, 1, 0, 0, 0).unwrap()
/// );
/// ```
pub trait CalendarExt: Sized {
    fn beginning_of_month(&self) -> Result<Self>;
    fn beginning_of_day(&self) -> Result<Self>;
    fn beginning_of_hour(&self) -> Result<Self>;
    fn beginning_of_minute(&self) -> Result<Self>;
    fn end_of_month(&self) -> Result<Self>;
    fn end_of_day(&self) -> Result<Self>;
    fn end_of_hour(&self) -> Result<Self>;
    fn end_of_minute(&self) -> Result<Self>;
    fn beginning_of(&self, unit: Unit) -> Result<Self>;
    fn end_of(&self, unit: Unit) -> Result<Self>;
    fn months_ago(&self, months: u32) -> Result<Self>;
    fn months_after(&self, months: u32) -> Result<Self>;
    fn days_ago(&self, days: i64) -> Result<Self>;
    fn days_after(&self, days: i64) -> Result<Self>;
}

impl<Tz: TimeZone> CalendarExt for DateTime<Tz> {
    fn beginning_of_month(&self) -> Result<Self> {
        boundary::beginning_of_month(self)
    }

    fn beginning_of_day(&self) -> Result<Self> {
        boundary::beginning_of_day(self)
    }

    fn beginning_of_hour(&self) -> Result<Self> {
        boundary::beginning_of_hour(self)
    }

    fn beginning_of_minute(&self) -> Result<Self> {
        boundary::beginning_of_minute(self)
    }

    fn end_of_month(&self) -> Result<Self> {
        boundary::end_of_month(self)
    }

    fn end_of_day(&self) -> Result<Self> {
        boundary::end_of_day(self)
    }

    fn end_of_hour(&self) -> Result<Self> {
        boundary::end_of_hour(self)
    }

    fn end_of_minute(&self) -> Result<Self> {
        boundary::end_of_minute(self)
    }

    fn beginning_of(&self, unit: Unit) -> Result<Self> {
        boundary::beginning_of(unit, self)
    }

    fn end_of(&self, unit: Unit) -> Result<Self> {
        boundary::end_of(unit, self)
    }

    fn months_ago(&self, months: u32) -> Result<Self> {
        shift::months_ago(self, months)
    }

    fn months_after(&self, months: u32) -> Result<Self> {
        shift::months_after(self, months)
    }

    fn days_ago(&self, days: i64) -> Result<Self> {
        shift::days_ago(self, days)
    }

    fn days_after(&self, days: i64) -> Result<Self> {
        shift::days_after(self, days)
    }
}
