//! Timestamp formatting in the fixed display timezone.
//!
//! Every rendered time is converted to US Pacific (`America/Los_Angeles`)
//! before formatting, so two viewers in different timezones see the same
//! event times. Inputs may be UTC instants, offset instants, or ISO-8601
//! strings as returned by the database layer.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use chrono_tz::America::Los_Angeles;
use chrono_tz::Tz;

use crate::error::CoreError;
use crate::types::Timestamp;

/// The timezone every formatted value is rendered in.
pub const DISPLAY_TZ: Tz = Los_Angeles;

const DATE_FORMAT: &str = "%b %-d, %Y";
const TIME_FORMAT: &str = "%-I:%M %p";
const EVENT_CARD_DATE_FORMAT: &str = "%a, %b %-d";

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;
const SECS_PER_WEEK: i64 = 7 * SECS_PER_DAY;

// ---------------------------------------------------------------------------
// Input normalization
// ---------------------------------------------------------------------------

/// Anything that can be interpreted as a point in time.
pub trait AsTimestamp {
    fn as_timestamp(&self) -> Result<Timestamp, CoreError>;
}

impl AsTimestamp for Timestamp {
    fn as_timestamp(&self) -> Result<Timestamp, CoreError> {
        Ok(*self)
    }
}

impl AsTimestamp for DateTime<FixedOffset> {
    fn as_timestamp(&self) -> Result<Timestamp, CoreError> {
        Ok(self.with_timezone(&Utc))
    }
}

impl AsTimestamp for str {
    /// Accepts RFC 3339 (`2024-03-05T23:30:00Z`, `...+00:00`), a naive
    /// date-time taken as UTC (`2024-03-05T23:30:00`), or a bare date taken
    /// as UTC midnight (`2024-03-05`).
    fn as_timestamp(&self) -> Result<Timestamp, CoreError> {
        let raw = self.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(naive.and_utc());
        }
        if let Some(naive) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return Ok(naive.and_utc());
        }

        Err(CoreError::Validation(format!("Invalid timestamp '{raw}'")))
    }
}

impl AsTimestamp for String {
    fn as_timestamp(&self) -> Result<Timestamp, CoreError> {
        self.as_str().as_timestamp()
    }
}

fn in_display_tz<T: AsTimestamp + ?Sized>(value: &T) -> Result<DateTime<Tz>, CoreError> {
    Ok(value.as_timestamp()?.with_timezone(&DISPLAY_TZ))
}

// ---------------------------------------------------------------------------
// Absolute formats
// ---------------------------------------------------------------------------

/// Short date, e.g. `Mar 5, 2024`.
pub fn format_date<T: AsTimestamp + ?Sized>(value: &T) -> Result<String, CoreError> {
    Ok(in_display_tz(value)?.format(DATE_FORMAT).to_string())
}

/// Short time, e.g. `3:30 PM`.
pub fn format_time<T: AsTimestamp + ?Sized>(value: &T) -> Result<String, CoreError> {
    Ok(in_display_tz(value)?.format(TIME_FORMAT).to_string())
}

/// Combined date and time, e.g. `Mar 5, 2024, 3:30 PM`.
pub fn format_date_time<T: AsTimestamp + ?Sized>(value: &T) -> Result<String, CoreError> {
    let local = in_display_tz(value)?;
    Ok(format!(
        "{}, {}",
        local.format(DATE_FORMAT),
        local.format(TIME_FORMAT)
    ))
}

/// Two formatted times joined by a dash, e.g. `3:30 PM - 5:00 PM`.
pub fn format_time_range<A, B>(start: &A, end: &B) -> Result<String, CoreError>
where
    A: AsTimestamp + ?Sized,
    B: AsTimestamp + ?Sized,
{
    Ok(format!("{} - {}", format_time(start)?, format_time(end)?))
}

/// Date shown on event cards, including the weekday, e.g. `Tue, Mar 5`.
pub fn format_event_card_date<T: AsTimestamp + ?Sized>(value: &T) -> Result<String, CoreError> {
    Ok(in_display_tz(value)?
        .format(EVENT_CARD_DATE_FORMAT)
        .to_string())
}

// ---------------------------------------------------------------------------
// Relative formats
// ---------------------------------------------------------------------------

/// Relative "time ago" label measured against the host clock.
pub fn format_time_ago<T: AsTimestamp + ?Sized>(value: &T) -> Result<String, CoreError> {
    format_time_ago_at(value, Utc::now())
}

/// Relative "time ago" label measured against an explicit `now`.
///
/// Instants in the future are treated as "Just now".
pub fn format_time_ago_at<T: AsTimestamp + ?Sized>(
    value: &T,
    now: Timestamp,
) -> Result<String, CoreError> {
    let then = value.as_timestamp()?;
    let elapsed = (now - then).num_seconds();

    let label = if elapsed < SECS_PER_MINUTE {
        "Just now".to_string()
    } else if elapsed < SECS_PER_HOUR {
        format!("{}m ago", elapsed / SECS_PER_MINUTE)
    } else if elapsed < SECS_PER_DAY {
        format!("{}h ago", elapsed / SECS_PER_HOUR)
    } else if elapsed < SECS_PER_WEEK {
        format!("{}d ago", elapsed / SECS_PER_DAY)
    } else {
        format_date(&then)?
    };
    Ok(label)
}

// ---------------------------------------------------------------------------
// Calendar comparisons
// ---------------------------------------------------------------------------

/// Whether `value` falls on today's Pacific calendar date.
pub fn is_today<T: AsTimestamp + ?Sized>(value: &T) -> Result<bool, CoreError> {
    is_same_day(value, &Utc::now())
}

/// Whether both instants fall on the same Pacific calendar date.
pub fn is_same_day<A, B>(a: &A, b: &B) -> Result<bool, CoreError>
where
    A: AsTimestamp + ?Sized,
    B: AsTimestamp + ?Sized,
{
    Ok(in_display_tz(a)?.date_naive() == in_display_tz(b)?.date_naive())
}

/// Current instant as an RFC 3339 UTC string with millisecond precision.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
