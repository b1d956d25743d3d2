use super::*;

fn entry(id: i64, palette: &str, created_at: Option<&str>) -> HistoryEntry {
    HistoryEntry {
        id,
        palette_name: palette.into(),
        colors: Vec::new(),
        undertone: None,
        explanation: None,
        image_url: None,
        created_at: created_at.map(Into::into),
    }
}

// ============================================================================
// Phone sanitising
// ============================================================================

#[test]
fn keeps_only_digits() {
    assert_eq!(digits_only("0812-3456 78.90"), "081234567890");
}

#[test]
fn letters_vanish_entirely() {
    assert_eq!(digits_only("call me"), "");
}

// ============================================================================
// History summary
// ============================================================================

#[test]
fn an_empty_history_shows_dashes() {
    assert_eq!(
        history_summary(&[]),
        ("0".to_owned(), "-".to_owned(), "-".to_owned())
    );
}

#[test]
fn the_newest_entry_leads_the_summary() {
    let entries = [
        entry(7, "winter clear", Some("2025-03-02T08:00:00.000000Z")),
        entry(3, "autumn warm", Some("2025-01-15T08:00:00.000000Z")),
    ];
    let (total, palette, date) = history_summary(&entries);
    assert_eq!(total, "2");
    assert_eq!(palette, "winter clear");
    assert_eq!(date, "2 Mar 2025");
}

#[test]
fn a_dateless_entry_still_counts() {
    let (total, palette, date) = history_summary(&[entry(1, "summer cool", None)]);
    assert_eq!(total, "1");
    assert_eq!(palette, "summer cool");
    assert_eq!(date, "-");
}
