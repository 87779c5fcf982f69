//! Golden-value tests for the year-range Vasthu scan.

use nila_base::TamilMonth;
use nila_date::CalendarDate;
use nila_engine::{day_info, scan_vasthu_days_in_year};

/// With the fixed tables, every Gregorian year contains exactly eight
/// Vasthu days, one per table-bearing Tamil month.
#[test]
fn scan_2025_exact_dates() {
    let found = scan_vasthu_days_in_year(2025);
    let got: Vec<_> = found.iter().map(|e| (e.date, e.month, e.day)).collect();
    let expected = [
        (CalendarDate::new(2025, 1, 23), TamilMonth::Thai, 10),
        (CalendarDate::new(2025, 3, 6), TamilMonth::Maasi, 22),
        (CalendarDate::new(2025, 4, 23), TamilMonth::Chithirai, 10),
        (CalendarDate::new(2025, 6, 4), TamilMonth::Vaikasi, 21),
        (CalendarDate::new(2025, 7, 26), TamilMonth::Aadi, 11),
        (CalendarDate::new(2025, 8, 22), TamilMonth::Avani, 6),
        (CalendarDate::new(2025, 10, 12), TamilMonth::Purattasi, 26),
        (CalendarDate::new(2025, 11, 24), TamilMonth::Karthigai, 8),
    ];
    assert_eq!(got, expected);
}

/// Leap year: the Maasi Vasthu day lands a calendar day earlier.
#[test]
fn scan_2024_leap_year_maasi() {
    let found = scan_vasthu_days_in_year(2024);
    assert_eq!(found.len(), 8);
    let maasi = found
        .iter()
        .find(|e| e.month == TamilMonth::Maasi)
        .expect("Maasi entry");
    assert_eq!(maasi.date, CalendarDate::new(2024, 3, 5));
    assert_eq!(maasi.day, 22);
}

/// The scan result is exactly the set of in-year dates whose day-info
/// reports a Vasthu day.
#[test]
fn scan_agrees_with_per_day_derivation() {
    let found = scan_vasthu_days_in_year(2024);
    let mut expected = Vec::new();
    let mut date = CalendarDate::new(2024, 1, 1);
    while date.year == 2024 {
        let info = day_info(date);
        if info.panchangam.is_vasthu_day {
            expected.push((date, info.tamil_date.month, info.tamil_date.day));
        }
        date = date.succ();
    }
    let got: Vec<_> = found.iter().map(|e| (e.date, e.month, e.day)).collect();
    assert_eq!(got, expected);
}

/// Entries carry the window strings of their month's table row.
#[test]
fn scan_entries_carry_time_windows() {
    let found = scan_vasthu_days_in_year(2025);
    let thai = &found[0];
    assert_eq!(thai.time, "10:48 AM - 11:24 AM");
    assert_eq!(thai.tamil_time, "காலை 10:48 - 11:24");
    for e in &found {
        assert!(e.date.year == 2025);
        assert!(!e.time.is_empty());
        assert!(!e.tamil_time.is_empty());
    }
}

/// Ascending, duplicate-free date order.
#[test]
fn scan_is_ordered() {
    let found = scan_vasthu_days_in_year(2026);
    for pair in found.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
}
