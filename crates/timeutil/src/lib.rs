//! # timeutil
//!
//! Calendar period boundaries and day/month shifts for `chrono` datetimes.
//!
//! Every function takes a `DateTime<Tz>` for any [`chrono::TimeZone`] and
//! returns a new one in the same zone. Nothing is mutated and no zone
//! conversion happens.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use timeutil::{beginning_of_month, end_of_month};
//!
//! let t = Utc.with_ymd_and_hms(2023, 1, 14, 12, 45, 53).unwrap();
//! assert_eq!(
//!     beginning_of_month(&t).unwrap(),
//!     Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
//! );
//! assert_eq!(
//!     end_of_month(&t).unwrap().to_rfc3339(),
//!     "2023-01-31T23:59:59.999999+00:00"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`boundary`] — first/last instant of the enclosing minute, hour, day or month
//! - [`shift`] — calendar month shifts and 24-hour day shifts
//! - [`dst`] — placing rebuilt wall-clock times around DST transitions
//! - [`text`] — RFC 3339 string entry points used by the bindings
//! - [`ext`] — the [`CalendarExt`] method-call trait
//! - [`error`] — Error types

pub mod boundary;
pub mod dst;
pub mod error;
pub mod ext;
pub mod shift;
pub mod text;

pub use boundary::{
    beginning_of, beginning_of_day, beginning_of_hour, beginning_of_minute, beginning_of_month,
    bounds_of, end_of, end_of_day, end_of_hour, end_of_minute, end_of_month, Unit,
    END_OF_UNIT_NANOS, TICK,
};
pub use error::TimeUtilError;
pub use ext::CalendarExt;
pub use shift::{days_after, days_ago, months_after, months_ago};
pub use text::{apply, apply_rfc3339, Operation};
