//! Inauspicious time-window tables, fixed per weekday.
//!
//! Rahu Kalam, Yamagandam, and Gulikai are each a 7-entry table of textual
//! time ranges indexed Sunday=0 .. Saturday=6. The windows are the standard
//! fixed values; no per-date computation is involved.

use nila_date::Weekday;

/// Rahu Kalam window per weekday (Sunday-first).
pub const RAHU_KALAM: [&str; 7] = [
    "4:30 PM - 6:00 PM",
    "7:30 AM - 9:00 AM",
    "3:00 PM - 4:30 PM",
    "12:00 PM - 1:30 PM",
    "1:30 PM - 3:00 PM",
    "10:30 AM - 12:00 PM",
    "9:00 AM - 10:30 AM",
];

/// Yamagandam window per weekday (Sunday-first).
pub const YAMAGANDAM: [&str; 7] = [
    "12:00 PM - 1:30 PM",
    "10:30 AM - 12:00 PM",
    "9:00 AM - 10:30 AM",
    "7:30 AM - 9:00 AM",
    "6:00 AM - 7:30 AM",
    "3:00 PM - 4:30 PM",
    "1:30 PM - 3:00 PM",
];

/// Gulikai window per weekday (Sunday-first).
pub const GULIKAI: [&str; 7] = [
    "3:00 PM - 4:30 PM",
    "1:30 PM - 3:00 PM",
    "12:00 PM - 1:30 PM",
    "10:30 AM - 12:00 PM",
    "9:00 AM - 10:30 AM",
    "7:30 AM - 9:00 AM",
    "6:00 AM - 7:30 AM",
];

/// Rahu Kalam window for a weekday.
pub const fn rahu_kalam_on(weekday: Weekday) -> &'static str {
    RAHU_KALAM[weekday.index() as usize]
}

/// Yamagandam window for a weekday.
pub const fn yamagandam_on(weekday: Weekday) -> &'static str {
    YAMAGANDAM[weekday.index() as usize]
}

/// Gulikai window for a weekday.
pub const fn gulikai_on(weekday: Weekday) -> &'static str {
    GULIKAI[weekday.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use nila_date::ALL_WEEKDAYS;

    #[test]
    fn sunday_rahu_kalam() {
        assert_eq!(rahu_kalam_on(Weekday::Sunday), "4:30 PM - 6:00 PM");
    }

    #[test]
    fn monday_windows() {
        assert_eq!(rahu_kalam_on(Weekday::Monday), "7:30 AM - 9:00 AM");
        assert_eq!(yamagandam_on(Weekday::Monday), "10:30 AM - 12:00 PM");
        assert_eq!(gulikai_on(Weekday::Monday), "1:30 PM - 3:00 PM");
    }

    #[test]
    fn all_entries_are_ranges() {
        for w in ALL_WEEKDAYS {
            for s in [rahu_kalam_on(w), yamagandam_on(w), gulikai_on(w)] {
                assert!(s.contains(" - "), "{s}");
                assert!(s.ends_with('M'), "{s}");
            }
        }
    }
}
