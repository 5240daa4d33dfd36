//! Epoch-millisecond date and duration rendering.
//!
//! Both formatters use one fixed convention (en-US style, 12-hour clock) so
//! output never depends on the host locale. Dates are evaluated in the
//! formatter's configured UTC offset.
//!
//! # Examples
//!
//! ```
//! use chrono::FixedOffset;
//! use netrec_fmt::RawValue;
//! use netrec_fmt::format::temporal;
//!
//! let utc = FixedOffset::east_opt(0).unwrap();
//! assert_eq!(temporal::date_time(&RawValue::Number(0.0), utc), "01/01/70, 12:00:00 AM");
//!
//! assert_eq!(temporal::duration(&RawValue::Number(500.0)), "00:00.500");
//! assert_eq!(temporal::duration(&RawValue::Number(65000.0)), "01:05");
//! assert_eq!(temporal::duration(&RawValue::Number(3665000.0)), "1:01:05");
//! ```

use chrono::{DateTime, FixedOffset};

use crate::value::{RawValue, number_to_string};

/// `MM/DD/YY, hh:MM:SS AM` - month, day and two-digit year, 12-hour clock.
pub const DATE_TIME_PATTERN: &str = "%m/%d/%y, %I:%M:%S %p";

/// Output for timestamps that are non-numeric or outside the representable range.
pub const INVALID_DATE: &str = "Invalid Date";

/// Render epoch milliseconds as a date and time.
///
/// Fractional milliseconds are truncated. Values chrono cannot represent,
/// and anything that does not coerce to a number, render [`INVALID_DATE`].
pub fn date_time(value: &RawValue, offset: FixedOffset) -> String {
    let ms = value.to_number();
    if !ms.is_finite() {
        tracing::debug!(target: "netrec_fmt::format", { value = %value }, "non-numeric timestamp");
        return INVALID_DATE.to_string();
    }

    // Saturating cast; out-of-range values are rejected by chrono below.
    match DateTime::from_timestamp_millis(ms.trunc() as i64) {
        Some(utc) => utc
            .with_timezone(&offset)
            .format(DATE_TIME_PATTERN)
            .to_string(),
        None => {
            tracing::debug!(target: "netrec_fmt::format", { ms }, "timestamp out of range");
            INVALID_DATE.to_string()
        }
    }
}

/// Render a millisecond duration as `00:SS`, `MM:SS` or `H:MM:SS`.
///
/// The seconds field carries three fractional digits whenever the duration is
/// not a whole number of seconds. Minutes and hours are truncated, never
/// rounded: 7,199,999 ms is `1:59:59.999`, not `2:00:00`. Fractional
/// milliseconds are rounded to the nearest millisecond first.
///
/// Negative durations render with a leading `-`; non-numeric input renders `NaN`.
///
/// # Examples
///
/// ```
/// use netrec_fmt::RawValue;
/// use netrec_fmt::format::temporal::duration;
///
/// assert_eq!(duration(&RawValue::Number(59_999.0)), "00:59.999");
/// assert_eq!(duration(&RawValue::Number(7_199_999.0)), "1:59:59.999");
/// assert_eq!(duration(&RawValue::Number(-65_000.0)), "-01:05");
/// ```
pub fn duration(value: &RawValue) -> String {
    let ms = value.to_number().round();
    if !ms.is_finite() {
        return number_to_string(ms);
    }
    if ms < 0.0 {
        return format!("-{}", format_duration_ms(-ms as u64));
    }
    format_duration_ms(ms as u64)
}

fn format_duration_ms(total_ms: u64) -> String {
    let total_secs = total_ms / 1000;
    let frac_ms = total_ms % 1000;
    let total_mins = total_secs / 60;

    let secs = total_secs % 60;
    let secs = if frac_ms == 0 {
        format!("{:02}", secs)
    } else {
        format!("{:02}.{:03}", secs, frac_ms)
    };

    if total_secs < 60 {
        format!("00:{}", secs)
    } else if total_mins < 60 {
        format!("{:02}:{}", total_mins, secs)
    } else {
        format!("{}:{:02}:{}", total_mins / 60, total_mins % 60, secs)
    }
}
