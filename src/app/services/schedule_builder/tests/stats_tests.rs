//! Tests for build statistics

use super::super::stats::BuildStats;

#[test]
fn test_day_row_rate() {
    let stats = BuildStats {
        rows_scanned: 8,
        day_rows: 6,
        rows_skipped: 2,
        cells_parsed: 20,
        sessions_parsed: 24,
    };

    assert_eq!(stats.day_row_rate(), 75.0);
    assert!(stats.found_sessions());
}

#[test]
fn test_empty_stats() {
    let stats = BuildStats::new();

    assert_eq!(stats.day_row_rate(), 0.0);
    assert!(!stats.found_sessions());
}
