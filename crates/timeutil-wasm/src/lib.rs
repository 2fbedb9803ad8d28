//! WASM bindings for timeutil.
//!
//! Exposes the boundary and shift operations to JavaScript via `wasm-bindgen`.
//! Datetimes cross the boundary as RFC 3339 strings; batches cross as JSON
//! strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p timeutil-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/timeutil-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/timeutil_wasm.wasm
//! ```

use serde::{Deserialize, Serialize};
use timeutil::{apply_rfc3339, Operation, Unit};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// One entry of a batch request: an operation plus the datetime to run it on.
#[derive(Deserialize)]
struct BatchRequest {
    operation: Operation,
    datetime: String,
    #[serde(default)]
    timezone: Option<String>,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
enum BatchResult {
    Ok(String),
    Error(String),
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn run(op: Operation, datetime: &str, timezone: Option<&str>) -> Result<String, String> {
    apply_rfc3339(op, datetime, timezone).map_err(|e| e.to_string())
}

fn parse_unit(unit: &str) -> Result<Unit, String> {
    unit.parse::<Unit>().map_err(|e| e.to_string())
}

/// Run every request in a JSON array, collecting per-entry results.
///
/// A malformed array fails as a whole; a failing entry only fails its own slot.
fn run_batch(requests_json: &str) -> Result<String, String> {
    let requests: Vec<BatchRequest> = serde_json::from_str(requests_json)
        .map_err(|e| format!("Invalid batch JSON: {}", e))?;

    let results: Vec<BatchResult> = requests
        .iter()
        .map(|req| match run(req.operation, &req.datetime, req.timezone.as_deref()) {
            Ok(out) => BatchResult::Ok(out),
            Err(e) => BatchResult::Error(e),
        })
        .collect();

    serde_json::to_string(&results).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// First instant of the `unit` ("minute", "hour", "day" or "month") containing `datetime`.
///
/// `timezone` is an optional IANA zone to evaluate in; without it the offset
/// written in `datetime` is used.
#[wasm_bindgen(js_name = "beginningOf")]
pub fn beginning_of(unit: &str, datetime: &str, timezone: Option<String>) -> Result<String, JsValue> {
    let op = Operation::BeginningOf(parse_unit(unit).map_err(|e| JsValue::from_str(&e))?);
    run(op, datetime, timezone.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Last instant of the `unit` containing `datetime`.
#[wasm_bindgen(js_name = "endOf")]
pub fn end_of(unit: &str, datetime: &str, timezone: Option<String>) -> Result<String, JsValue> {
    let op = Operation::EndOf(parse_unit(unit).map_err(|e| JsValue::from_str(&e))?);
    run(op, datetime, timezone.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// First instant of the month `months` months before `datetime`'s month.
/// Negative counts are rejected.
#[wasm_bindgen(js_name = "monthsAgo")]
pub fn months_ago(datetime: &str, months: i32, timezone: Option<String>) -> Result<String, JsValue> {
    let op = Operation::months_ago(months.into()).map_err(|e| JsValue::from_str(&e.to_string()))?;
    run(op, datetime, timezone.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// First instant of the month `months` months after `datetime`'s month.
/// Negative counts are rejected.
#[wasm_bindgen(js_name = "monthsAfter")]
pub fn months_after(datetime: &str, months: i32, timezone: Option<String>) -> Result<String, JsValue> {
    let op = Operation::months_after(months.into()).map_err(|e| JsValue::from_str(&e.to_string()))?;
    run(op, datetime, timezone.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// `datetime` moved `days` 24-hour periods into the past.
#[wasm_bindgen(js_name = "daysAgo")]
pub fn days_ago(datetime: &str, days: i32, timezone: Option<String>) -> Result<String, JsValue> {
    run(Operation::DaysAgo(days.into()), datetime, timezone.as_deref())
        .map_err(|e| JsValue::from_str(&e))
}

/// `datetime` moved `days` 24-hour periods into the future.
#[wasm_bindgen(js_name = "daysAfter")]
pub fn days_after(datetime: &str, days: i32, timezone: Option<String>) -> Result<String, JsValue> {
    run(Operation::DaysAfter(days.into()), datetime, timezone.as_deref())
        .map_err(|e| JsValue::from_str(&e))
}

/// Run a batch of operations.
///
/// `requests_json` is a JSON array of
/// `{"operation": {"op": "end-of", "arg": "month"}, "datetime": "...", "timezone": "..."}`
/// objects (`timezone` optional). Returns a JSON array with one
/// `{"ok": "<datetime>"}` or `{"error": "<message>"}` per request.
#[wasm_bindgen(js_name = "applyBatch")]
pub fn apply_batch(requests_json: &str) -> Result<String, JsValue> {
    run_batch(requests_json).map_err(|e| JsValue::from_str(&e))
}
