//! Calendar-only Gregorian date.
//!
//! `CalendarDate` is the canonical input type of the engine: year, month,
//! day, nothing else. No timezone, no time-of-day. The engine's contract
//! assumes well-formed values; only `FromStr` validates.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::civil;
use crate::error::DateError;
use crate::weekday::{Weekday, weekday_from_days};

/// A proleptic-Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    /// 1-based month (1 = January .. 12 = December).
    pub month: u32,
    /// 1-based day of month.
    pub day: u32,
}

impl CalendarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// 0-based month (0 = January .. 11 = December).
    pub const fn month0(&self) -> u32 {
        self.month - 1
    }

    /// Weekday of this date (Sunday=0 convention).
    pub const fn weekday(&self) -> Weekday {
        weekday_from_days(self.day_number())
    }

    /// 1-based ordinal day within the year (Jan 1 = 1).
    pub const fn day_of_year(&self) -> u32 {
        civil::day_of_year(self.year, self.month, self.day)
    }

    /// Days since 1970-01-01. Differences give exact elapsed calendar days.
    pub const fn day_number(&self) -> i64 {
        civil::days_from_civil(self.year, self.month, self.day)
    }

    /// The next calendar day.
    pub const fn succ(&self) -> Self {
        let mut year = self.year;
        let mut month = self.month;
        let mut day = self.day + 1;
        if day > civil::days_in_month(year, month) {
            day = 1;
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }
        Self { year, month, day }
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || DateError::InvalidFormat(s.to_string());
        let mut parts = s.splitn(3, '-');
        let year: i32 = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        let month: u32 = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        let day: u32 = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        if day < 1 || day > civil::days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_known_dates() {
        // Tamil New Year 2024 fell on a Sunday.
        assert_eq!(CalendarDate::new(2024, 4, 14).weekday(), Weekday::Sunday);
        assert_eq!(CalendarDate::new(2000, 1, 1).weekday(), Weekday::Saturday);
        assert_eq!(CalendarDate::new(1970, 1, 1).weekday(), Weekday::Thursday);
        assert_eq!(CalendarDate::new(2025, 1, 14).weekday(), Weekday::Tuesday);
    }

    #[test]
    fn succ_rolls_over_month_and_year() {
        assert_eq!(
            CalendarDate::new(2024, 2, 28).succ(),
            CalendarDate::new(2024, 2, 29)
        );
        assert_eq!(
            CalendarDate::new(2023, 2, 28).succ(),
            CalendarDate::new(2023, 3, 1)
        );
        assert_eq!(
            CalendarDate::new(2023, 12, 31).succ(),
            CalendarDate::new(2024, 1, 1)
        );
    }

    #[test]
    fn day_number_differences() {
        let chithirai = CalendarDate::new(2024, 4, 14);
        let panguni_end = CalendarDate::new(2024, 4, 13);
        assert_eq!(chithirai.day_number() - panguni_end.day_number(), 1);

        let margazhi_start = CalendarDate::new(2023, 12, 16);
        let jan5 = CalendarDate::new(2024, 1, 5);
        assert_eq!(jan5.day_number() - margazhi_start.day_number(), 20);
    }

    #[test]
    fn display_round_trip() {
        let d = CalendarDate::new(2024, 4, 14);
        assert_eq!(d.to_string(), "2024-04-14");
        assert_eq!("2024-04-14".parse::<CalendarDate>().unwrap(), d);
        assert_eq!("0037-01-02".parse::<CalendarDate>().unwrap().year, 37);
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(matches!(
            "2024/04/14".parse::<CalendarDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-13-01".parse::<CalendarDate>(),
            Err(DateError::InvalidMonth(13))
        ));
        assert!(matches!(
            "2023-02-29".parse::<CalendarDate>(),
            Err(DateError::InvalidDay { .. })
        ));
        assert!("".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn ordering_follows_calendar_order() {
        let a = CalendarDate::new(2024, 1, 31);
        let b = CalendarDate::new(2024, 2, 1);
        assert!(a < b);
    }
}
