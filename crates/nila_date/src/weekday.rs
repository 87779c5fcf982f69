//! Weekday enumeration with English/Tamil display names.
//!
//! Indexing follows the kalam lookup convention: Sunday = 0 .. Saturday = 6.

use serde::{Deserialize, Serialize};

/// The seven weekdays, Sunday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// All seven weekdays in order (index 0 = Sunday).
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Tamil name.
    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Sunday => "ஞாயிறு",
            Self::Monday => "திங்கள்",
            Self::Tuesday => "செவ்வாய்",
            Self::Wednesday => "புதன்",
            Self::Thursday => "வியாழன்",
            Self::Friday => "வெள்ளி",
            Self::Saturday => "சனி",
        }
    }

    /// Short English name, for calendar-grid headers.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Sunday => "Sun",
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
        }
    }

    /// Short Tamil name, for calendar-grid headers.
    pub const fn tamil_short_name(self) -> &'static str {
        match self {
            Self::Sunday => "ஞாயி",
            Self::Monday => "திங்",
            Self::Tuesday => "செவ்",
            Self::Wednesday => "புதன்",
            Self::Thursday => "வியா",
            Self::Friday => "வெள்",
            Self::Saturday => "சனி",
        }
    }

    /// 0-based index (Sunday=0 .. Saturday=6).
    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// All seven weekdays in order.
    pub const fn all() -> &'static [Weekday; 7] {
        &ALL_WEEKDAYS
    }
}

/// Weekday from a civil day number (1970-01-01 = Thursday).
pub const fn weekday_from_days(days: i64) -> Weekday {
    ALL_WEEKDAYS[(days + 4).rem_euclid(7) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_indices_sequential() {
        for (i, w) in ALL_WEEKDAYS.iter().enumerate() {
            assert_eq!(w.index() as usize, i);
        }
    }

    #[test]
    fn weekday_names_nonempty() {
        for w in ALL_WEEKDAYS {
            assert!(!w.name().is_empty());
            assert!(!w.tamil_name().is_empty());
            assert!(!w.short_name().is_empty());
            assert!(!w.tamil_short_name().is_empty());
        }
    }

    #[test]
    fn epoch_is_thursday() {
        assert_eq!(weekday_from_days(0), Weekday::Thursday);
    }

    #[test]
    fn weekday_wraps_before_epoch() {
        assert_eq!(weekday_from_days(-1), Weekday::Wednesday);
        assert_eq!(weekday_from_days(-4), Weekday::Sunday);
        assert_eq!(weekday_from_days(-5), Weekday::Saturday);
    }
}
