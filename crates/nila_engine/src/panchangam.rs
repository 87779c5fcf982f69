//! Panchangam derivation: tithi, nakshatram, kalam windows, festivals,
//! Vasthu status, and the simplified auspiciousness flag for a date.

use nila_base::{
    festivals_on, gulikai_on, is_auspicious_combination, nakshatram_from_day_of_year,
    rahu_kalam_on, tithi_from_day_of_year, vasthu_window_for, yamagandam_on,
};
use nila_date::{CalendarDate, days_in_month};

use crate::panchangam_types::{DayInfo, PanchangamData};
use crate::tamil_date::resolve_tamil_date;

/// Fixed yogam label. Dynamic derivation is deliberately absent.
const YOGAM_PLACEHOLDER: &str = "Siddha";
/// Fixed karanam label. Dynamic derivation is deliberately absent.
const KARANAM_PLACEHOLDER: &str = "Bava";

/// Derive the full panchangam record for a Gregorian date.
///
/// Always returns a fully populated record; there is no failure path.
pub fn derive_panchangam(date: CalendarDate) -> PanchangamData {
    let doy = date.day_of_year();
    let tithi = tithi_from_day_of_year(doy);
    let nakshatram = nakshatram_from_day_of_year(doy);
    let weekday = date.weekday();

    let tamil_date = resolve_tamil_date(date);
    let vasthu = vasthu_window_for(tamil_date.month).filter(|w| w.day == tamil_date.day);

    PanchangamData {
        tithi,
        nakshatram,
        yogam: YOGAM_PLACEHOLDER,
        karanam: KARANAM_PLACEHOLDER,
        rahu_kalam: rahu_kalam_on(weekday),
        yamagandam: yamagandam_on(weekday),
        gulikai: gulikai_on(weekday),
        festivals: festivals_on(date.month, date.day),
        is_vasthu_day: vasthu.is_some(),
        vasthu_time: vasthu.map(|w| w.time),
        tamil_vasthu_time: vasthu.map(|w| w.tamil_time),
        is_auspicious: is_auspicious_combination(nakshatram, tithi),
    }
}

/// Tamil date plus panchangam for a Gregorian date.
pub fn day_info(date: CalendarDate) -> DayInfo {
    DayInfo {
        date,
        tamil_date: resolve_tamil_date(date),
        panchangam: derive_panchangam(date),
    }
}

/// Day info for every day of a Gregorian month, in date order.
///
/// One entry per calendar day; callers rendering a month grid combine
/// this with the first day's weekday for leading blanks.
pub fn month_days(year: i32, month: u32) -> Vec<DayInfo> {
    (1..=days_in_month(year, month))
        .map(|d| day_info(CalendarDate::new(year, month, d)))
        .collect()
}
