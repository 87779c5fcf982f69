//! Types for Tamil date and panchangam derivation results.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use nila_base::{Festival, Nakshatram, TamilMonth, Tithi};
use nila_date::CalendarDate;

/// Resolved Tamil calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TamilDate {
    /// 1-based day within the Tamil month.
    pub day: u32,
    /// The Tamil month.
    pub month: TamilMonth,
    /// Tamil calendar year.
    pub year: i32,
}

impl TamilDate {
    /// 0-based Tamil month index (Chithirai=0 .. Panguni=11).
    pub const fn month_index(&self) -> u8 {
        self.month.index()
    }

    /// English month name.
    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Tamil month name.
    pub const fn tamil_month_name(&self) -> &'static str {
        self.month.tamil_name()
    }
}

impl Display for TamilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.day, self.month.name(), self.year)
    }
}

/// Panchangam record for a single day. Always fully populated; the only
/// optional fields are the Vasthu windows, present exactly when
/// `is_vasthu_day` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanchangamData {
    /// Tithi (lunar day name).
    pub tithi: Tithi,
    /// Nakshatram (lunar mansion).
    pub nakshatram: Nakshatram,
    /// Constant placeholder; not derived per date.
    pub yogam: &'static str,
    /// Constant placeholder; not derived per date.
    pub karanam: &'static str,
    /// Rahu Kalam window for the weekday.
    pub rahu_kalam: &'static str,
    /// Yamagandam window for the weekday.
    pub yamagandam: &'static str,
    /// Gulikai window for the weekday.
    pub gulikai: &'static str,
    /// Festivals falling on this Gregorian (month, day); usually empty.
    pub festivals: Vec<&'static Festival>,
    /// Whether this is the Vasthu day of its Tamil month.
    pub is_vasthu_day: bool,
    /// Vasthu time window (English). Present iff `is_vasthu_day`.
    pub vasthu_time: Option<&'static str>,
    /// Vasthu time window (Tamil). Present iff `is_vasthu_day`.
    pub tamil_vasthu_time: Option<&'static str>,
    /// Simplified muhurtham flag.
    pub is_auspicious: bool,
}

/// Everything the engine derives for one Gregorian date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayInfo {
    /// The input Gregorian date.
    pub date: CalendarDate,
    /// Resolved Tamil date.
    pub tamil_date: TamilDate,
    /// Derived panchangam record.
    pub panchangam: PanchangamData,
}

/// One Vasthu day found by a year scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VasthuDayEntry {
    /// Gregorian date of the Vasthu day.
    pub date: CalendarDate,
    /// Tamil month it belongs to.
    pub month: TamilMonth,
    /// Tamil day-of-month.
    pub day: u32,
    /// Time window (English).
    pub time: &'static str,
    /// Time window (Tamil).
    pub tamil_time: &'static str,
}
