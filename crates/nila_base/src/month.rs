//! Tamil month enumeration and the approximate month-start table.
//!
//! Tamil months usually begin around the 14th-17th of a Gregorian month.
//! The start table below is the sole source of truth for month resolution;
//! no solar-transit computation is performed.

use serde::{Deserialize, Serialize};

/// Number of Tamil months.
pub const TAMIL_MONTH_COUNT: usize = 12;

/// The 12 Tamil months, Chithirai-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TamilMonth {
    Chithirai,
    Vaikasi,
    Aani,
    Aadi,
    Avani,
    Purattasi,
    Aippasi,
    Karthigai,
    Margazhi,
    Thai,
    Maasi,
    Panguni,
}

/// All 12 Tamil months in order (index 0 = Chithirai .. 11 = Panguni).
pub const ALL_TAMIL_MONTHS: [TamilMonth; TAMIL_MONTH_COUNT] = [
    TamilMonth::Chithirai,
    TamilMonth::Vaikasi,
    TamilMonth::Aani,
    TamilMonth::Aadi,
    TamilMonth::Avani,
    TamilMonth::Purattasi,
    TamilMonth::Aippasi,
    TamilMonth::Karthigai,
    TamilMonth::Margazhi,
    TamilMonth::Thai,
    TamilMonth::Maasi,
    TamilMonth::Panguni,
];

/// Approximate Gregorian (month, day) start of each Tamil month, indexed in
/// Tamil month order. Thai, Maasi, and Panguni start early in the following
/// Gregorian year relative to Chithirai.
pub const TAMIL_MONTH_STARTS: [(u32, u32); TAMIL_MONTH_COUNT] = [
    (4, 14),  // Chithirai
    (5, 15),  // Vaikasi
    (6, 15),  // Aani
    (7, 16),  // Aadi
    (8, 17),  // Avani
    (9, 17),  // Purattasi
    (10, 18), // Aippasi
    (11, 17), // Karthigai
    (12, 16), // Margazhi
    (1, 14),  // Thai
    (2, 13),  // Maasi
    (3, 14),  // Panguni
];

impl TamilMonth {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chithirai => "Chithirai",
            Self::Vaikasi => "Vaikasi",
            Self::Aani => "Aani",
            Self::Aadi => "Aadi",
            Self::Avani => "Avani",
            Self::Purattasi => "Purattasi",
            Self::Aippasi => "Aippasi",
            Self::Karthigai => "Karthigai",
            Self::Margazhi => "Margazhi",
            Self::Thai => "Thai",
            Self::Maasi => "Maasi",
            Self::Panguni => "Panguni",
        }
    }

    /// Tamil name.
    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Chithirai => "சித்திரை",
            Self::Vaikasi => "வைகாசி",
            Self::Aani => "ஆனி",
            Self::Aadi => "ஆடி",
            Self::Avani => "ஆவணி",
            Self::Purattasi => "புரட்டாசி",
            Self::Aippasi => "ஐப்பசி",
            Self::Karthigai => "கார்த்திகை",
            Self::Margazhi => "மார்கழி",
            Self::Thai => "தை",
            Self::Maasi => "மாசி",
            Self::Panguni => "பங்குனி",
        }
    }

    /// 0-based index (Chithirai=0 .. Panguni=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Chithirai => 0,
            Self::Vaikasi => 1,
            Self::Aani => 2,
            Self::Aadi => 3,
            Self::Avani => 4,
            Self::Purattasi => 5,
            Self::Aippasi => 6,
            Self::Karthigai => 7,
            Self::Margazhi => 8,
            Self::Thai => 9,
            Self::Maasi => 10,
            Self::Panguni => 11,
        }
    }

    /// Approximate Gregorian (month, day) start of this Tamil month.
    pub const fn start(self) -> (u32, u32) {
        TAMIL_MONTH_STARTS[self.index() as usize]
    }

    /// All 12 Tamil months in order.
    pub const fn all() -> &'static [TamilMonth; TAMIL_MONTH_COUNT] {
        &ALL_TAMIL_MONTHS
    }
}
