use super::*;
use time::macros::datetime;

// ============================================================
// Prices
// ============================================================

#[test]
fn group_thousands_inserts_dots() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_000), "1.000");
    assert_eq!(group_thousands(85_000), "85.000");
    assert_eq!(group_thousands(1_250_000), "1.250.000");
}

#[test]
fn group_thousands_handles_negatives() {
    assert_eq!(group_thousands(-5_000), "-5.000");
}

#[test]
fn format_price_rounds_to_whole_rupiah() {
    assert_eq!(format_price(85_000.0), "Rp 85.000");
    assert_eq!(format_price(249_000.49), "Rp 249.000");
    assert_eq!(format_price(249_000.5), "Rp 249.001");
}

// ============================================================
// Timestamps
// ============================================================

#[test]
fn parse_timestamp_accepts_rfc3339_with_microseconds() {
    let moment = parse_timestamp("2025-01-15T10:30:00.000000Z");
    assert_eq!(moment, Some(datetime!(2025-01-15 10:30:00 UTC)));
}

#[test]
fn parse_timestamp_accepts_plain_rfc3339() {
    let moment = parse_timestamp("2025-01-15T10:30:00Z");
    assert_eq!(moment, Some(datetime!(2025-01-15 10:30:00 UTC)));
}

#[test]
fn parse_timestamp_assumes_utc_for_naive_values() {
    let moment = parse_timestamp("2025-01-15 10:30:00");
    assert_eq!(moment, Some(datetime!(2025-01-15 10:30:00 UTC)));
}

#[test]
fn parse_timestamp_rejects_garbage() {
    assert_eq!(parse_timestamp("yesterday"), None);
    assert_eq!(parse_timestamp(""), None);
}

#[test]
fn format_date_renders_short_form() {
    assert_eq!(format_date("2025-01-15T10:30:00.000000Z"), "15 Jan 2025");
    assert_eq!(format_date("2025-06-05T00:00:00Z"), "5 Jun 2025");
}

#[test]
fn format_date_echoes_unparseable_input() {
    assert_eq!(format_date("not a date"), "not a date");
}

#[test]
fn format_datetime_includes_time() {
    assert_eq!(
        format_datetime("2025-01-15T10:30:00Z"),
        "15 Jan 2025, 10:30"
    );
}

#[test]
fn iso_day_is_zero_padded() {
    assert_eq!(iso_day(datetime!(2025-01-05 08:00:00 UTC)), "2025-01-05");
}

// ============================================================
// Relative time
// ============================================================

#[test]
fn relative_time_buckets() {
    let now = datetime!(2025-01-15 12:00:00 UTC);
    assert_eq!(
        relative_time(now, datetime!(2025-01-15 11:59:30 UTC)),
        "just now"
    );
    assert_eq!(
        relative_time(now, datetime!(2025-01-15 11:59:00 UTC)),
        "1 minute ago"
    );
    assert_eq!(
        relative_time(now, datetime!(2025-01-15 11:15:00 UTC)),
        "45 minutes ago"
    );
    assert_eq!(
        relative_time(now, datetime!(2025-01-15 09:00:00 UTC)),
        "3 hours ago"
    );
    assert_eq!(
        relative_time(now, datetime!(2025-01-13 12:00:00 UTC)),
        "2 days ago"
    );
}

#[test]
fn relative_time_falls_back_to_date_beyond_a_week() {
    let now = datetime!(2025-01-15 12:00:00 UTC);
    assert_eq!(
        relative_time(now, datetime!(2025-01-01 12:00:00 UTC)),
        "1 Jan 2025"
    );
}

#[test]
fn relative_time_treats_future_as_just_now() {
    let now = datetime!(2025-01-15 12:00:00 UTC);
    assert_eq!(
        relative_time(now, datetime!(2025-01-15 12:05:00 UTC)),
        "just now"
    );
}
