//! Tamil month/day/year resolution from a Gregorian date.
//!
//! Month resolution walks the fixed start table: the Tamil month is the
//! latest table entry whose (month, day) start is at or before the input
//! under calendar ordering. January dates before the Thai start have no
//! such entry and stay in Margazhi, whose start lies in the previous
//! Gregorian year. The Tamil year increments at the Chithirai boundary.

use nila_base::{ALL_TAMIL_MONTHS, TAMIL_MONTH_STARTS};
use nila_date::CalendarDate;

use crate::panchangam_types::TamilDate;

/// Tamil month index for January dates before the Thai start.
const MARGAZHI: usize = 8;

/// Resolve the Tamil date for a Gregorian calendar date.
///
/// Total over any well-formed date; the Tamil day is always >= 1 and
/// resets to 1 on the day a Tamil month begins.
pub fn resolve_tamil_date(date: CalendarDate) -> TamilDate {
    let month_index = resolve_month_index(date);
    let (start_month, start_day) = TAMIL_MONTH_STARTS[month_index];

    // Anchor the month start at or before the input. Only the January
    // wrap into Margazhi reaches back into the previous Gregorian year.
    let mut start = CalendarDate::new(date.year, start_month, start_day);
    if start.day_number() > date.day_number() {
        start = CalendarDate::new(date.year - 1, start_month, start_day);
    }
    let day = (date.day_number() - start.day_number()) as u32 + 1;

    // The Tamil year changes at Chithirai (April 14).
    let (ny_month, ny_day) = TAMIL_MONTH_STARTS[0];
    let before_new_year = date.month < ny_month || (date.month == ny_month && date.day < ny_day);
    let year = if before_new_year {
        date.year - 79
    } else {
        date.year - 78
    };

    TamilDate {
        day,
        month: ALL_TAMIL_MONTHS[month_index],
        year,
    }
}

/// Index of the latest start-table entry at or before (month, day) in
/// calendar order.
fn resolve_month_index(date: CalendarDate) -> usize {
    let mut best: Option<usize> = None;
    for (i, &start) in TAMIL_MONTH_STARTS.iter().enumerate() {
        if start <= (date.month, date.day)
            && best.is_none_or(|b| TAMIL_MONTH_STARTS[b] < start)
        {
            best = Some(i);
        }
    }
    best.unwrap_or(MARGAZHI)
}
