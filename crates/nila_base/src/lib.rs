//! Fixed calendar tables and name enumerations for the nila panchangam
//! engine.
//!
//! This crate provides:
//! - Tamil month, tithi, and nakshatram enumerations with English/Tamil names
//! - The approximate Tamil month-start table
//! - Weekday-indexed kalam time-window tables (Rahu Kalam, Yamagandam,
//!   Gulikai)
//! - The fixed festival and Vasthu-day tables
//! - The simplified muhurtham (auspiciousness) rule
//!
//! Everything here is read-only static data plus pure classification
//! functions. Tithi and nakshatram selection uses deterministic day-of-year
//! cycles, not lunar ephemeris; the tables are an approximation by design.

pub mod festival;
pub mod kalam;
pub mod month;
pub mod muhurtham;
pub mod nakshatram;
pub mod tithi;
pub mod vasthu;

pub use festival::{ALL_FESTIVALS, Festival, festivals_on};
pub use kalam::{GULIKAI, RAHU_KALAM, YAMAGANDAM, gulikai_on, rahu_kalam_on, yamagandam_on};
pub use month::{ALL_TAMIL_MONTHS, TAMIL_MONTH_COUNT, TAMIL_MONTH_STARTS, TamilMonth};
pub use muhurtham::{AUSPICIOUS_NAKSHATRAMS, is_auspicious_combination};
pub use nakshatram::{
    ALL_NAKSHATRAMS, NAKSHATRAM_COUNT, NAKSHATRAM_CYCLE_OFFSET, Nakshatram,
    nakshatram_from_day_of_year,
};
pub use tithi::{ALL_TITHIS, TITHI_COUNT, TITHI_CYCLE_OFFSET, Tithi, tithi_from_day_of_year};
pub use vasthu::{VASTHU_DAYS, VasthuWindow, vasthu_window_for};
