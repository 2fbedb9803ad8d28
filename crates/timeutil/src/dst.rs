//! DST handling for wall-clock boundaries rebuilt inside a zone.
//!
//! Truncations and month shifts compute a new local date-time and map it back
//! into the zone of their input. Around offset transitions that local time can
//! occur twice (fall back) or not at all (spring forward).

use chrono::{DateTime, MappedLocalTime, NaiveDateTime, Offset, TimeDelta, TimeZone};

use crate::boundary::TICK;
use crate::error::{Result, TimeUtilError};

/// Which side of a calendar period a rebuilt wall-clock time stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Edge {
    /// Earliest match in an overlap, first instant after a gap.
    #[default]
    Start,
    /// Latest match in an overlap, last instant before a gap.
    End,
}

/// Map the wall-clock time `naive` in `tz` to a concrete instant.
///
/// Unambiguous local times map directly. Ambiguous and skipped local times are
/// resolved toward `edge`, so that a period's start never lands after the
/// instants it contains and a period's end never lands before them.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime, edge: Edge) -> Result<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        MappedLocalTime::Single(dt) => Ok(dt),
        MappedLocalTime::Ambiguous(a, b) => {
            log::debug!("local time {naive} is ambiguous, taking the {edge:?} match");
            let (earliest, latest) = if a <= b { (a, b) } else { (b, a) };
            Ok(match edge {
                Edge::Start => earliest,
                Edge::End => latest,
            })
        }
        MappedLocalTime::None => resolve_gap(tz, naive, edge),
    }
}

/// Resolve a local time skipped by a forward transition.
///
/// `Start` lands on the transition itself, the first instant after the gap.
/// `End` lands one [`TICK`] before it, the last instant before the gap.
fn resolve_gap<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime, edge: Edge) -> Result<DateTime<Tz>> {
    let transition = gap_transition(tz, naive)?;
    let utc = match edge {
        Edge::Start => Some(transition),
        Edge::End => transition.checked_sub_signed(TICK),
    }
    .ok_or_else(|| out_of_range(&naive))?;

    let resolved = tz.from_utc_datetime(&utc);
    log::debug!(
        "local time {naive} falls in a DST gap, resolved to {} ({edge:?})",
        resolved.naive_local()
    );
    Ok(resolved)
}

/// UTC instant of the forward transition that skips `naive`.
///
/// The transition lies between `naive` read with the offset after the gap and
/// `naive` read with the offset before it. Zone transitions fall on whole
/// seconds, so a bisection over seconds pins it down.
fn gap_transition<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Result<NaiveDateTime> {
    // `naive` read as UTC is within a day of the real instant, so probes one
    // day out sit on either side of the transition.
    let day = TimeDelta::days(1);
    let before = naive.checked_sub_signed(day).ok_or_else(|| out_of_range(&naive))?;
    let after = naive.checked_add_signed(day).ok_or_else(|| out_of_range(&naive))?;
    let off_before = tz.offset_from_utc_datetime(&before).fix();
    let off_after = tz.offset_from_utc_datetime(&after).fix();
    if off_after.local_minus_utc() <= off_before.local_minus_utc() {
        return Err(out_of_range(&naive));
    }

    // Invariant: `lo` is still on the old offset, `hi` already past the transition.
    let secs = naive.and_utc().timestamp();
    let mut lo = secs - i64::from(off_after.local_minus_utc());
    let mut hi = secs - i64::from(off_before.local_minus_utc()) + 1;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if tz.offset_from_utc_datetime(&utc_at(mid, &naive)?).fix() == off_before {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    utc_at(hi, &naive)
}

fn utc_at(secs: i64, naive: &NaiveDateTime) -> Result<NaiveDateTime> {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| out_of_range(naive))
}

fn out_of_range(naive: &NaiveDateTime) -> TimeUtilError {
    TimeUtilError::OutOfRange(format!("cannot place {naive} in its timezone"))
}
