//! Boundaries and shifts in IANA timezones with DST transitions.

use chrono::DateTime;
use chrono_tz::America::{New_York, Sao_Paulo, St_Johns};
use chrono_tz::Australia::Lord_Howe;
use chrono_tz::Tz;
use timeutil::text::format_rfc3339;
use timeutil::{
    beginning_of_day, beginning_of_hour, beginning_of_month, days_after, days_ago, end_of_day,
    end_of_hour, end_of_month, months_after,
};

/// Parse an RFC 3339 instant and view it in `tz`.
fn at(tz: Tz, s: &str) -> DateTime<Tz> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&tz)
}

fn fmt(dt: DateTime<Tz>) -> String {
    format_rfc3339(&dt)
}

// ── Day shifts are durations ────────────────────────────────────────────────

#[test]
fn days_after_across_spring_forward_moves_wall_clock() {
    // 2024-03-10 02:00 EST -> 03:00 EDT: 24 hours after noon EST is 13:00 EDT.
    let t = at(New_York, "2024-03-09T12:00:00-05:00");
    assert_eq!(fmt(days_after(&t, 1).unwrap()), "2024-03-10T13:00:00-04:00");
}

#[test]
fn days_ago_across_fall_back_moves_wall_clock() {
    // 2024-11-03 02:00 EDT -> 01:00 EST.
    let t = at(New_York, "2024-11-03T12:00:00-05:00");
    assert_eq!(fmt(days_ago(&t, 1).unwrap()), "2024-11-02T13:00:00-04:00");
}

#[test]
fn days_shift_round_trips_across_transition() {
    let t = at(New_York, "2024-03-09T12:00:00-05:00");
    assert_eq!(days_ago(&days_after(&t, 30).unwrap(), 30).unwrap(), t);
}

// ── Boundaries follow the local offset ──────────────────────────────────────

#[test]
fn end_of_month_uses_offset_of_next_month() {
    let t = at(New_York, "2024-11-15T09:00:00-05:00");
    assert_eq!(fmt(end_of_month(&t).unwrap()), "2024-11-30T23:59:59.999999-05:00");
}

#[test]
fn end_of_month_spanning_transition() {
    // March starts in EST and ends in EDT.
    let t = at(New_York, "2024-03-01T09:00:00-05:00");
    assert_eq!(fmt(beginning_of_month(&t).unwrap()), "2024-03-01T00:00:00-05:00");
    assert_eq!(fmt(end_of_month(&t).unwrap()), "2024-03-31T23:59:59.999999-04:00");
}

#[test]
fn day_containing_spring_forward() {
    let t = at(New_York, "2024-03-10T15:00:00-04:00");
    assert_eq!(fmt(beginning_of_day(&t).unwrap()), "2024-03-10T00:00:00-05:00");
    assert_eq!(fmt(end_of_day(&t).unwrap()), "2024-03-10T23:59:59.999999-04:00");
}

#[test]
fn months_after_lands_in_new_offset() {
    let t = at(New_York, "2024-02-20T10:00:00-05:00");
    assert_eq!(fmt(months_after(&t, 2).unwrap()), "2024-04-01T00:00:00-04:00");
}

// ── Repeated hour (fall back) ───────────────────────────────────────────────

#[test]
fn repeated_hour_spans_both_passes() {
    // 01:30 EST is the second pass through 01:00-02:00 on 2024-11-03.
    let t = at(New_York, "2024-11-03T01:30:00-05:00");
    let start = beginning_of_hour(&t).unwrap();
    let end = end_of_hour(&t).unwrap();
    assert_eq!(fmt(start), "2024-11-03T01:00:00-04:00");
    assert_eq!(fmt(end), "2024-11-03T01:59:59.999999-05:00");
    assert!(start <= t && t <= end);
}

#[test]
fn first_pass_of_repeated_hour_is_inside_bounds() {
    let t = at(New_York, "2024-11-03T01:30:00-04:00");
    assert!(beginning_of_hour(&t).unwrap() <= t);
    assert!(t <= end_of_hour(&t).unwrap());
}

// ── Skipped midnight ────────────────────────────────────────────────────────

#[test]
fn skipped_midnight_starts_day_after_gap() {
    // Sao Paulo jumped from 00:00 -03 to 01:00 -02 on 2018-11-04.
    let t = at(Sao_Paulo, "2018-11-04T12:00:00-02:00");
    assert_eq!(fmt(beginning_of_day(&t).unwrap()), "2018-11-04T01:00:00-02:00");
}

#[test]
fn previous_day_ends_before_skipped_midnight() {
    let t = at(Sao_Paulo, "2018-11-03T12:00:00-03:00");
    assert_eq!(fmt(end_of_day(&t).unwrap()), "2018-11-03T23:59:59.999999-03:00");
}

// ── Half-hour transitions ───────────────────────────────────────────────────

#[test]
fn half_hour_gap_starts_hour_after_gap() {
    // Lord Howe Island moves 02:00 +10:30 -> 02:30 +11:00 on 2023-10-01.
    let t = at(Lord_Howe, "2023-10-01T02:45:00+11:00");
    let start = beginning_of_hour(&t).unwrap();
    assert_eq!(fmt(start), "2023-10-01T02:30:00+11:00");
    assert_eq!(fmt(end_of_hour(&t).unwrap()), "2023-10-01T02:59:59.999999+11:00");
}

// ── Gaps that do not start on a unit boundary ───────────────────────────────

#[test]
fn hour_starts_at_transition_inside_skipped_hour() {
    // St. John's jumped from 00:01 NST (-03:30) to 01:01 NDT (-02:30) on 2005-04-03.
    let t = at(St_Johns, "2005-04-03T01:22:00-02:30");
    let start = beginning_of_hour(&t).unwrap();
    let end = end_of_hour(&t).unwrap();
    assert_eq!(fmt(start), "2005-04-03T01:01:00-02:30");
    assert_eq!(fmt(end), "2005-04-03T01:59:59.999999-02:30");
    assert!(start <= t && t <= end);
    assert_eq!(beginning_of_hour(&start).unwrap(), start);
}

#[test]
fn hour_ends_just_before_mid_hour_gap() {
    let t = at(St_Johns, "2005-04-03T00:00:30-03:30");
    let end = end_of_hour(&t).unwrap();
    assert_eq!(fmt(beginning_of_hour(&t).unwrap()), "2005-04-03T00:00:00-03:30");
    assert_eq!(fmt(end), "2005-04-03T00:00:59.999999-03:30");
    assert!(t <= end);
    assert_eq!(end_of_hour(&end).unwrap(), end);
}

#[test]
fn day_with_mid_hour_gap_keeps_its_midnight() {
    let t = at(St_Johns, "2005-04-03T01:22:00-02:30");
    assert_eq!(fmt(beginning_of_day(&t).unwrap()), "2005-04-03T00:00:00-03:30");
    assert_eq!(fmt(end_of_day(&t).unwrap()), "2005-04-03T23:59:59.999999-02:30");
}
