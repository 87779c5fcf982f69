//! Tamil date and panchangam derivation engine.
//!
//! Given a Gregorian calendar date, this crate derives:
//! - The approximate Tamil month/day/year (fixed month-start table)
//! - The day's panchangam record: tithi, nakshatram, kalam windows,
//!   festivals, Vasthu-day status, and the simplified auspiciousness flag
//! - All Vasthu days within a Gregorian year
//!
//! Every function is pure, total, and stateless: results depend only on
//! the input date, never on call order, and there is no I/O and no error
//! path. Tithi/nakshatram selection is a deterministic day-of-year cycle,
//! not lunar ephemeris — the engine is an approximation by design.

pub mod panchangam;
pub mod panchangam_types;
pub mod tamil_date;
pub mod vasthu_scan;

pub use panchangam::{day_info, derive_panchangam, month_days};
pub use panchangam_types::{DayInfo, PanchangamData, TamilDate, VasthuDayEntry};
pub use tamil_date::resolve_tamil_date;
pub use vasthu_scan::scan_vasthu_days_in_year;
