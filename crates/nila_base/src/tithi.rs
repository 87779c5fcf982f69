//! Tithi (lunar day) enumeration and its day-of-year cycle.
//!
//! The 16 tithi names cover the 15 lunar phases plus Purnima/Amavasya as
//! the full/new moon endpoints. Selection is a deterministic pseudo-cycle
//! over the Gregorian ordinal day — the same date always yields the same
//! tithi and consecutive days step by one — not a lunar-phase computation.
//! The +5 offset and mod-16 cycle are compatibility constants.

use serde::{Deserialize, Serialize};

/// Number of tithi names in the cycle.
pub const TITHI_COUNT: usize = 16;

/// Day-of-year offset of the tithi cycle.
pub const TITHI_CYCLE_OFFSET: u32 = 5;

/// The 16 tithis, Prathama-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tithi {
    Prathama,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashti,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    Purnima,
    Amavasya,
}

/// All 16 tithis in cycle order (index 0 = Prathama).
pub const ALL_TITHIS: [Tithi; TITHI_COUNT] = [
    Tithi::Prathama,
    Tithi::Dwitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashti,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
    Tithi::Purnima,
    Tithi::Amavasya,
];

impl Tithi {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prathama => "Prathama",
            Self::Dwitiya => "Dwitiya",
            Self::Tritiya => "Tritiya",
            Self::Chaturthi => "Chaturthi",
            Self::Panchami => "Panchami",
            Self::Shashti => "Shashti",
            Self::Saptami => "Saptami",
            Self::Ashtami => "Ashtami",
            Self::Navami => "Navami",
            Self::Dashami => "Dashami",
            Self::Ekadashi => "Ekadashi",
            Self::Dwadashi => "Dwadashi",
            Self::Trayodashi => "Trayodashi",
            Self::Chaturdashi => "Chaturdashi",
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
        }
    }

    /// Tamil name.
    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Prathama => "பிரதமை",
            Self::Dwitiya => "துவிதியை",
            Self::Tritiya => "திருதியை",
            Self::Chaturthi => "சதுர்த்தி",
            Self::Panchami => "பஞ்சமி",
            Self::Shashti => "சஷ்டி",
            Self::Saptami => "சப்தமி",
            Self::Ashtami => "அஷ்டமி",
            Self::Navami => "நவமி",
            Self::Dashami => "தசமி",
            Self::Ekadashi => "ஏகாதசி",
            Self::Dwadashi => "துவாதசி",
            Self::Trayodashi => "திரயோதசி",
            Self::Chaturdashi => "சதுர்தசி",
            Self::Purnima => "பௌர்ணமி",
            Self::Amavasya => "அமாவாசை",
        }
    }

    /// 0-based cycle index (Prathama=0 .. Amavasya=15).
    pub const fn index(self) -> u8 {
        match self {
            Self::Prathama => 0,
            Self::Dwitiya => 1,
            Self::Tritiya => 2,
            Self::Chaturthi => 3,
            Self::Panchami => 4,
            Self::Shashti => 5,
            Self::Saptami => 6,
            Self::Ashtami => 7,
            Self::Navami => 8,
            Self::Dashami => 9,
            Self::Ekadashi => 10,
            Self::Dwadashi => 11,
            Self::Trayodashi => 12,
            Self::Chaturdashi => 13,
            Self::Purnima => 14,
            Self::Amavasya => 15,
        }
    }

    /// All 16 tithis in cycle order.
    pub const fn all() -> &'static [Tithi; TITHI_COUNT] {
        &ALL_TITHIS
    }
}

/// Tithi for a 1-based Gregorian ordinal day of year.
pub const fn tithi_from_day_of_year(day_of_year: u32) -> Tithi {
    ALL_TITHIS[((day_of_year + TITHI_CYCLE_OFFSET) % TITHI_COUNT as u32) as usize]
}
