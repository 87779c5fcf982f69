//! Fixed Vasthu-day table.
//!
//! Eight of the twelve Tamil months carry a Vasthu day: a single exact
//! Tamil day-of-month with an associated time window. A date is a Vasthu
//! day iff its resolved Tamil day equals the entry's day — never a range.

use serde::Serialize;

use crate::month::{TAMIL_MONTH_COUNT, TamilMonth};

/// Vasthu day and time window for one Tamil month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VasthuWindow {
    /// Tamil day-of-month the window falls on.
    pub day: u32,
    pub time: &'static str,
    pub tamil_time: &'static str,
}

/// Vasthu entry per Tamil month, indexed in Tamil month order. Months
/// without a Vasthu day hold `None`.
pub const VASTHU_DAYS: [Option<VasthuWindow>; TAMIL_MONTH_COUNT] = [
    // Chithirai
    Some(VasthuWindow {
        day: 10,
        time: "9:12 AM - 9:48 AM",
        tamil_time: "காலை 09:12 - 09:48",
    }),
    // Vaikasi
    Some(VasthuWindow {
        day: 21,
        time: "10:12 AM - 10:48 AM",
        tamil_time: "காலை 10:12 - 10:48",
    }),
    // Aani
    None,
    // Aadi
    Some(VasthuWindow {
        day: 11,
        time: "7:48 AM - 8:24 AM",
        tamil_time: "காலை 07:48 - 08:24",
    }),
    // Avani
    Some(VasthuWindow {
        day: 6,
        time: "3:36 PM - 4:12 PM",
        tamil_time: "மாலை 03:36 - 04:12",
    }),
    // Purattasi
    Some(VasthuWindow {
        day: 26,
        time: "10:12 AM - 10:48 AM",
        tamil_time: "காலை 10:12 - 10:48",
    }),
    // Aippasi
    None,
    // Karthigai
    Some(VasthuWindow {
        day: 8,
        time: "11:24 AM - 12:00 PM",
        tamil_time: "மதியம் 11:24 - 12:00",
    }),
    // Margazhi
    None,
    // Thai
    Some(VasthuWindow {
        day: 10,
        time: "10:48 AM - 11:24 AM",
        tamil_time: "காலை 10:48 - 11:24",
    }),
    // Maasi
    Some(VasthuWindow {
        day: 22,
        time: "10:48 AM - 11:24 AM",
        tamil_time: "காலை 10:48 - 11:24",
    }),
    // Panguni
    None,
];

/// Vasthu entry for a Tamil month, if that month has one.
pub const fn vasthu_window_for(month: TamilMonth) -> Option<VasthuWindow> {
    VASTHU_DAYS[month.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::ALL_TAMIL_MONTHS;

    #[test]
    fn eight_months_have_entries() {
        let count = VASTHU_DAYS.iter().flatten().count();
        assert_eq!(count, 8);
    }

    #[test]
    fn entry_days_are_plausible_tamil_days() {
        for w in VASTHU_DAYS.iter().flatten() {
            assert!((1..=32).contains(&w.day));
            assert!(!w.time.is_empty());
            assert!(!w.tamil_time.is_empty());
        }
    }

    #[test]
    fn known_entries() {
        let thai = vasthu_window_for(TamilMonth::Thai).unwrap();
        assert_eq!(thai.day, 10);
        assert_eq!(thai.time, "10:48 AM - 11:24 AM");

        let avani = vasthu_window_for(TamilMonth::Avani).unwrap();
        assert_eq!(avani.day, 6);

        assert!(vasthu_window_for(TamilMonth::Margazhi).is_none());
        assert!(vasthu_window_for(TamilMonth::Aani).is_none());
    }

    #[test]
    fn lookup_matches_table_order() {
        for m in ALL_TAMIL_MONTHS {
            assert_eq!(vasthu_window_for(m), VASTHU_DAYS[m.index() as usize]);
        }
    }
}
