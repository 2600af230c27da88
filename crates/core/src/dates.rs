// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Relative and future time expressions.
//!
//! Two deliberately different grammars:
//!
//! ```text
//! past (filters)       today | yesterday | <N>h ago | <N>d ago | <N>w ago | <N>mo ago
//! future (reminders)   tomorrow | <N>m | <N>h | <N>d | <N>w | <date-time>
//! ```
//!
//! Past expressions carry an `ago` suffix and support months; future
//! expressions carry no suffix, support minutes, and have no month unit.
//! Both are matched case-insensitively.

use chrono::{
    DateTime, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat,
    TimeZone, Utc,
};

use crate::clock::{ClockSource, SystemClock};
use crate::error::{Error, Result};

/// Hour of day used for `tomorrow`.
pub const TOMORROW_HOUR: u32 = 9;

/// Longest DST gap we step across when a local time does not exist.
const MAX_GAP_MINUTES: i64 = 180;

/// Naive date-time layouts accepted by the future-time fallback, interpreted
/// in local time.
const LOCAL_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// ISO date-time layouts carrying a numeric UTC offset. A trailing `Z` is
/// rewritten to `+00:00` before these are tried.
const OFFSET_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

/// Parse a past-looking expression like `"2d ago"` or `"yesterday"`.
///
/// Resolved against the system clock in the local timezone.
///
/// # Errors
///
/// Returns [`Error::InvalidDateFormat`] if the input matches no past grammar.
pub fn parse_relative_date(input: &str) -> Result<DateTime<Utc>> {
    parse_relative_date_with(input, &SystemClock)
}

/// Like [`parse_relative_date`], reading "now" from `clock`.
pub fn parse_relative_date_with<C: ClockSource>(input: &str, clock: &C) -> Result<DateTime<Utc>> {
    parse_relative_date_at(input, clock.now().with_timezone(&Local))
}

/// Resolve a past expression against `now`.
///
/// `today` and `yesterday` are midnight in `now`'s timezone. Hour, day and
/// week offsets are exact spans; month offsets are calendar arithmetic, with
/// the day clamped to the end of a shorter target month.
pub fn parse_relative_date_at<Tz: TimeZone>(input: &str, now: DateTime<Tz>) -> Result<DateTime<Utc>> {
    let invalid = || Error::InvalidDateFormat {
        input: input.to_string(),
    };

    let lowered = input.to_lowercase();
    match lowered.as_str() {
        "today" => return start_of_day(&now, 0).ok_or_else(invalid),
        "yesterday" => return start_of_day(&now, -1).ok_or_else(invalid),
        _ => {}
    }

    let offset = lowered
        .strip_suffix("ago")
        .map(str::trim_end)
        .ok_or_else(invalid)?;
    let (amount, unit) = split_amount_unit(offset).ok_or_else(invalid)?;

    let past = match unit {
        "h" => Duration::try_hours(amount).and_then(|d| now.checked_sub_signed(d)),
        "d" => Duration::try_days(amount).and_then(|d| now.checked_sub_signed(d)),
        "w" => Duration::try_weeks(amount).and_then(|d| now.checked_sub_signed(d)),
        "mo" => return months_before(&now, amount).ok_or_else(invalid),
        _ => None,
    };

    past.map(|t| t.with_timezone(&Utc)).ok_or_else(invalid)
}

/// Parse a future expression like `"30m"`, `"tomorrow"`, or an ISO date.
///
/// Resolved against the system clock in the local timezone. Returns epoch
/// milliseconds.
///
/// # Errors
///
/// Returns [`Error::InvalidTimeFormat`] if the input is neither a future
/// offset nor a recognizable date-time.
pub fn parse_future_time(input: &str) -> Result<i64> {
    parse_future_time_with(input, &SystemClock)
}

/// Like [`parse_future_time`], reading "now" from `clock`.
pub fn parse_future_time_with<C: ClockSource>(input: &str, clock: &C) -> Result<i64> {
    parse_future_time_at(input, clock.now().with_timezone(&Local))
}

/// Resolve a future expression against `now`.
///
/// `tomorrow` is always 09:00 on the next calendar day, not "24 hours from
/// now".
pub fn parse_future_time_at<Tz: TimeZone>(input: &str, now: DateTime<Tz>) -> Result<i64> {
    let invalid = || Error::InvalidTimeFormat {
        input: input.to_string(),
    };

    let lowered = input.to_lowercase();
    if lowered == "tomorrow" {
        return now
            .date_naive()
            .succ_opt()
            .and_then(|day| day.and_hms_opt(TOMORROW_HOUR, 0, 0))
            .and_then(|naive| resolve_local(&now.timezone(), naive))
            .map(|t| t.timestamp_millis())
            .ok_or_else(invalid);
    }

    if let Some((amount, unit)) = split_amount_unit(&lowered) {
        let span = match unit {
            "m" => Some(Duration::try_minutes(amount)),
            "h" => Some(Duration::try_hours(amount)),
            "d" => Some(Duration::try_days(amount)),
            "w" => Some(Duration::try_weeks(amount)),
            _ => None,
        };
        if let Some(span) = span {
            return span
                .and_then(|d| now.checked_add_signed(d))
                .map(|t| t.timestamp_millis())
                .ok_or_else(invalid);
        }
    }

    parse_datetime(input, &now.timezone())
        .map(|t| t.timestamp_millis())
        .ok_or_else(invalid)
}

/// Render an instant as millisecond-precision ISO-8601 in UTC
/// (`2025-01-01T00:00:00.000Z`).
pub fn to_iso8601(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a generic date-time string.
///
/// Strings with an explicit offset (`Z`, `+01:00` or `+0100`, with or
/// without seconds) are absolute; naive date-times are read in
/// `tz`; a bare `YYYY-MM-DD` is UTC midnight.
pub fn parse_datetime<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(input) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(t) = DateTime::parse_from_rfc2822(input) {
        return Some(t.with_timezone(&Utc));
    }
    let zoned = match input.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => input.to_string(),
    };
    for layout in OFFSET_LAYOUTS {
        if let Ok(t) = DateTime::parse_from_str(&zoned, layout) {
            return Some(t.with_timezone(&Utc));
        }
    }
    for layout in LOCAL_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, layout) {
            return resolve_local(tz, naive);
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .map(|day| day.and_time(NaiveTime::MIN).and_utc())
}

/// Split `"12mo"` into `(12, "mo")`. The amount is ASCII digits only.
fn split_amount_unit(s: &str) -> Option<(i64, &str)> {
    let num_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if num_end == 0 {
        return None;
    }
    let amount = s[..num_end].parse().ok()?;
    Some((amount, &s[num_end..]))
}

/// Midnight of the day `days` away from `now`'s local date.
fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>, days: i64) -> Option<DateTime<Utc>> {
    let day = now
        .date_naive()
        .checked_add_signed(Duration::try_days(days)?)?;
    resolve_local(&now.timezone(), day.and_time(NaiveTime::MIN))
}

/// Calendar month subtraction on the local wall time.
fn months_before<Tz: TimeZone>(now: &DateTime<Tz>, amount: i64) -> Option<DateTime<Utc>> {
    let months = Months::new(u32::try_from(amount).ok()?);
    let naive = now.naive_local().checked_sub_months(months)?;
    resolve_local(&now.timezone(), naive)
}

/// Map a local wall time to an instant.
///
/// Ambiguous times (DST fall-back) take the earliest instant. Times inside a
/// DST gap move forward to the first wall time that exists.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    if let Some(t) = tz.from_local_datetime(&naive).earliest() {
        return Some(t.with_timezone(&Utc));
    }
    (1..=MAX_GAP_MINUTES).find_map(|minutes| {
        let shifted = naive.checked_add_signed(Duration::try_minutes(minutes)?)?;
        tz.from_local_datetime(&shifted)
            .earliest()
            .map(|t| t.with_timezone(&Utc))
    })
}

#[cfg(test)]
#[path = "dates_tests.rs"]
mod tests;
