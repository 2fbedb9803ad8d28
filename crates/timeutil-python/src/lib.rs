//! # timeutil-python
//!
//! Python bindings for timeutil, built with PyO3.
//!
//! Exposes the following functions to Python as the `timeutil._native` module.
//! Datetimes are passed and returned as RFC 3339 strings.
//!
//! - `beginning_of(unit, datetime, timezone=None)` -- start of the enclosing unit
//! - `end_of(unit, datetime, timezone=None)` -- end of the enclosing unit
//! - `bounds_of(unit, datetime, timezone=None)` -- `(start, end)` tuple
//! - `months_ago` / `months_after(datetime, months, timezone=None)` -- month shifts
//! - `days_ago` / `days_after(datetime, days, timezone=None)` -- 24-hour day shifts

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use timeutil::{apply_rfc3339, Operation, TimeUtilError, Unit};

fn to_py_err(e: TimeUtilError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn run(op: Operation, datetime: &str, timezone: Option<&str>) -> PyResult<String> {
    apply_rfc3339(op, datetime, timezone).map_err(to_py_err)
}

fn parse_unit(unit: &str) -> PyResult<Unit> {
    unit.parse().map_err(to_py_err)
}

/// Start of the minute, hour, day or month containing a datetime.
///
/// Args:
///     unit: One of "minute", "hour", "day", "month".
///     datetime: RFC 3339 datetime string (e.g., "2023-01-14T12:45:53Z").
///     timezone: Optional IANA timezone to evaluate in (e.g., "Europe/Paris").
///         Defaults to the offset written in `datetime`.
///
/// Returns:
///     The boundary as an RFC 3339 string.
///
/// Raises:
///     ValueError: If the unit, datetime or timezone is invalid.
#[pyfunction]
#[pyo3(signature = (unit, datetime, timezone=None))]
fn beginning_of(unit: &str, datetime: &str, timezone: Option<&str>) -> PyResult<String> {
    run(Operation::BeginningOf(parse_unit(unit)?), datetime, timezone)
}

/// End of the minute, hour, day or month containing a datetime.
///
/// Day, hour and minute ends carry a `.999999` fraction; the end of a month is
/// one microsecond before the next month begins.
///
/// Raises:
///     ValueError: If the unit, datetime or timezone is invalid.
#[pyfunction]
#[pyo3(signature = (unit, datetime, timezone=None))]
fn end_of(unit: &str, datetime: &str, timezone: Option<&str>) -> PyResult<String> {
    run(Operation::EndOf(parse_unit(unit)?), datetime, timezone)
}

/// Both boundaries of the unit containing a datetime, as `(start, end)`.
#[pyfunction]
#[pyo3(signature = (unit, datetime, timezone=None))]
fn bounds_of(unit: &str, datetime: &str, timezone: Option<&str>) -> PyResult<(String, String)> {
    let unit = parse_unit(unit)?;
    Ok((
        run(Operation::BeginningOf(unit), datetime, timezone)?,
        run(Operation::EndOf(unit), datetime, timezone)?,
    ))
}

/// First instant of the month `months` months before the datetime's month.
///
/// Raises:
///     ValueError: If `months` is negative or the datetime/timezone is invalid.
#[pyfunction]
#[pyo3(signature = (datetime, months, timezone=None))]
fn months_ago(datetime: &str, months: i64, timezone: Option<&str>) -> PyResult<String> {
    run(Operation::months_ago(months).map_err(to_py_err)?, datetime, timezone)
}

/// First instant of the month `months` months after the datetime's month.
///
/// Raises:
///     ValueError: If `months` is negative or the datetime/timezone is invalid.
#[pyfunction]
#[pyo3(signature = (datetime, months, timezone=None))]
fn months_after(datetime: &str, months: i64, timezone: Option<&str>) -> PyResult<String> {
    run(Operation::months_after(months).map_err(to_py_err)?, datetime, timezone)
}

/// The datetime moved `days` 24-hour periods into the past.
#[pyfunction]
#[pyo3(signature = (datetime, days, timezone=None))]
fn days_ago(datetime: &str, days: i64, timezone: Option<&str>) -> PyResult<String> {
    run(Operation::DaysAgo(days), datetime, timezone)
}

/// The datetime moved `days` 24-hour periods into the future.
#[pyfunction]
#[pyo3(signature = (datetime, days, timezone=None))]
fn days_after(datetime: &str, days: i64, timezone: Option<&str>) -> PyResult<String> {
    run(Operation::DaysAfter(days), datetime, timezone)
}

/// The native extension module, exposed as `timeutil._native`.
#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(beginning_of, m)?)?;
    m.add_function(wrap_pyfunction!(end_of, m)?)?;
    m.add_function(wrap_pyfunction!(bounds_of, m)?)?;
    m.add_function(wrap_pyfunction!(months_ago, m)?)?;
    m.add_function(wrap_pyfunction!(months_after, m)?)?;
    m.add_function(wrap_pyfunction!(days_ago, m)?)?;
    m.add_function(wrap_pyfunction!(days_after, m)?)?;
    Ok(())
}
