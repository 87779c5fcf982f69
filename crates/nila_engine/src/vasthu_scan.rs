//! Year-range Vasthu day scan.

use nila_base::vasthu_window_for;
use nila_date::CalendarDate;

use crate::panchangam_types::VasthuDayEntry;
use crate::tamil_date::resolve_tamil_date;

/// All Vasthu days within one Gregorian year, in ascending date order.
///
/// Scans every day from January 1 through December 31 inclusive and
/// collects the dates whose resolved Tamil day matches their month's
/// Vasthu entry. The window is exactly one Gregorian year: a Vasthu day
/// of a Tamil month spanning the year boundary can fall outside it and
/// would then only appear in the adjacent year's scan.
pub fn scan_vasthu_days_in_year(year: i32) -> Vec<VasthuDayEntry> {
    let mut found = Vec::new();
    let mut date = CalendarDate::new(year, 1, 1);
    while date.year == year {
        let tamil = resolve_tamil_date(date);
        if let Some(window) = vasthu_window_for(tamil.month) {
            if window.day == tamil.day {
                found.push(VasthuDayEntry {
                    date,
                    month: tamil.month,
                    day: tamil.day,
                    time: window.time,
                    tamil_time: window.tamil_time,
                });
            }
        }
        date = date.succ();
    }
    found
}
