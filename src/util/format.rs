//! Display formatting for prices and backend timestamps.
//!
//! Prices are rupiah with dot thousand separators. Timestamps arrive as
//! RFC 3339 strings (Laravel serialises with microseconds and a `Z`
//! suffix) with the occasional bare `Y-m-d H:i:s`; parse failures fall
//! back to showing the raw string rather than hiding the row.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Formats a rupiah amount, rounding to whole rupiah: `Rp 1.250.000`.
#[allow(clippy::cast_possible_truncation)]
pub fn format_price(value: f64) -> String {
    format!("Rp {}", group_thousands(value.round() as i64))
}

/// Groups an integer with dot thousand separators.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Parses a backend timestamp. Naive `Y-m-d H:i:s` values are assumed UTC.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let trimmed = raw.trim();
    if let Ok(moment) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Some(moment);
    }
    let naive = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    PrimitiveDateTime::parse(trimmed, naive)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

/// Formats a backend timestamp as `15 Jan 2025`, or echoes the raw string
/// when it does not parse.
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(moment) => date_label(moment),
        None => raw.to_owned(),
    }
}

/// Formats a backend timestamp as `15 Jan 2025, 10:30` (UTC), or echoes the
/// raw string when it does not parse.
pub fn format_datetime(raw: &str) -> String {
    let Some(moment) = parse_timestamp(raw) else {
        return raw.to_owned();
    };
    let format = format_description!("[day padding:none] [month repr:short] [year], [hour]:[minute]");
    moment.format(format).unwrap_or_else(|_| raw.to_owned())
}

/// Human-scale distance between two moments: `just now`, `5 minutes ago`,
/// `3 hours ago`, `2 days ago`, then the plain date beyond a week.
pub fn relative_time(now: OffsetDateTime, then: OffsetDateTime) -> String {
    let elapsed = now - then;
    let seconds = elapsed.whole_seconds();
    if seconds < 60 {
        return "just now".to_owned();
    }
    let minutes = elapsed.whole_minutes();
    if minutes < 60 {
        return count_ago(minutes, "minute");
    }
    let hours = elapsed.whole_hours();
    if hours < 24 {
        return count_ago(hours, "hour");
    }
    let days = elapsed.whole_days();
    if days < 7 {
        return count_ago(days, "day");
    }
    date_label(then)
}

/// `2025-01-15`, for export filenames.
pub fn iso_day(moment: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]");
    moment.format(format).unwrap_or_default()
}

/// Current moment. In the browser this reads the JS clock.
pub fn now_utc() -> OffsetDateTime {
    #[cfg(feature = "web")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let millis = js_sys::Date::now() as i128;
        OffsetDateTime::from_unix_timestamp_nanos(millis * 1_000_000)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
    #[cfg(not(feature = "web"))]
    {
        OffsetDateTime::now_utc()
    }
}

fn date_label(moment: OffsetDateTime) -> String {
    let format = format_description!("[day padding:none] [month repr:short] [year]");
    moment.format(format).unwrap_or_default()
}

fn count_ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
