//! Nakshatram (lunar mansion) enumeration and its day-of-year cycle.
//!
//! The 27 nakshatrams from Ashwini to Revati. As with tithis, selection is
//! a deterministic pseudo-cycle over the Gregorian ordinal day, not a lunar
//! longitude computation. The +12 offset and mod-27 cycle are compatibility
//! constants.

use serde::{Deserialize, Serialize};

/// Number of nakshatrams.
pub const NAKSHATRAM_COUNT: usize = 27;

/// Day-of-year offset of the nakshatram cycle.
pub const NAKSHATRAM_CYCLE_OFFSET: u32 = 12;

/// The 27 nakshatrams, Ashwini-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatram {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Arudra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishaka,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatrams in order (index 0 = Ashwini .. 26 = Revati).
pub const ALL_NAKSHATRAMS: [Nakshatram; NAKSHATRAM_COUNT] = [
    Nakshatram::Ashwini,
    Nakshatram::Bharani,
    Nakshatram::Krittika,
    Nakshatram::Rohini,
    Nakshatram::Mrigashira,
    Nakshatram::Arudra,
    Nakshatram::Punarvasu,
    Nakshatram::Pushya,
    Nakshatram::Ashlesha,
    Nakshatram::Magha,
    Nakshatram::PurvaPhalguni,
    Nakshatram::UttaraPhalguni,
    Nakshatram::Hasta,
    Nakshatram::Chitra,
    Nakshatram::Swati,
    Nakshatram::Vishaka,
    Nakshatram::Anuradha,
    Nakshatram::Jyeshtha,
    Nakshatram::Mula,
    Nakshatram::PurvaAshadha,
    Nakshatram::UttaraAshadha,
    Nakshatram::Shravana,
    Nakshatram::Dhanishta,
    Nakshatram::Shatabhisha,
    Nakshatram::PurvaBhadrapada,
    Nakshatram::UttaraBhadrapada,
    Nakshatram::Revati,
];

impl Nakshatram {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Arudra => "Arudra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishaka => "Vishaka",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Tamil name.
    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Ashwini => "அஸ்வினி",
            Self::Bharani => "பரணி",
            Self::Krittika => "கிருத்திகை",
            Self::Rohini => "ரோகிணி",
            Self::Mrigashira => "மிருகசீரிஷம்",
            Self::Arudra => "திருவாதிரை",
            Self::Punarvasu => "புனர்பூசம்",
            Self::Pushya => "பூசம்",
            Self::Ashlesha => "ஆயில்யம்",
            Self::Magha => "மகம்",
            Self::PurvaPhalguni => "பூரம்",
            Self::UttaraPhalguni => "உத்திரம்",
            Self::Hasta => "அஸ்தம்",
            Self::Chitra => "சித்திரை",
            Self::Swati => "சுவாதி",
            Self::Vishaka => "விசாகம்",
            Self::Anuradha => "அனுஷம்",
            Self::Jyeshtha => "கேட்டை",
            Self::Mula => "மூலம்",
            Self::PurvaAshadha => "பூராடம்",
            Self::UttaraAshadha => "உத்திராடம்",
            Self::Shravana => "திருவோணம்",
            Self::Dhanishta => "அவிட்டம்",
            Self::Shatabhisha => "சதயம்",
            Self::PurvaBhadrapada => "பூரட்டாதி",
            Self::UttaraBhadrapada => "உத்திரட்டாதி",
            Self::Revati => "ரேவதி",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ashwini => 0,
            Self::Bharani => 1,
            Self::Krittika => 2,
            Self::Rohini => 3,
            Self::Mrigashira => 4,
            Self::Arudra => 5,
            Self::Punarvasu => 6,
            Self::Pushya => 7,
            Self::Ashlesha => 8,
            Self::Magha => 9,
            Self::PurvaPhalguni => 10,
            Self::UttaraPhalguni => 11,
            Self::Hasta => 12,
            Self::Chitra => 13,
            Self::Swati => 14,
            Self::Vishaka => 15,
            Self::Anuradha => 16,
            Self::Jyeshtha => 17,
            Self::Mula => 18,
            Self::PurvaAshadha => 19,
            Self::UttaraAshadha => 20,
            Self::Shravana => 21,
            Self::Dhanishta => 22,
            Self::Shatabhisha => 23,
            Self::PurvaBhadrapada => 24,
            Self::UttaraBhadrapada => 25,
            Self::Revati => 26,
        }
    }

    /// All 27 nakshatrams in order.
    pub const fn all() -> &'static [Nakshatram; NAKSHATRAM_COUNT] {
        &ALL_NAKSHATRAMS
    }
}

/// Nakshatram for a 1-based Gregorian ordinal day of year.
pub const fn nakshatram_from_day_of_year(day_of_year: u32) -> Nakshatram {
    ALL_NAKSHATRAMS[((day_of_year + NAKSHATRAM_CYCLE_OFFSET) % NAKSHATRAM_COUNT as u32) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nakshatram_indices_sequential() {
        for (i, n) in ALL_NAKSHATRAMS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn nakshatram_names_nonempty() {
        for n in ALL_NAKSHATRAMS {
            assert!(!n.name().is_empty());
            assert!(!n.tamil_name().is_empty());
        }
    }

    #[test]
    fn cycle_offset() {
        // Jan 1 (doy 1) sits at cycle index (1 + 12) % 27 = 13.
        assert_eq!(nakshatram_from_day_of_year(1), Nakshatram::Chitra);
        assert_eq!(nakshatram_from_day_of_year(14), Nakshatram::Revati);
        assert_eq!(nakshatram_from_day_of_year(15), Nakshatram::Ashwini);
    }

    #[test]
    fn cycle_steps_by_one() {
        for doy in 1..365 {
            let a = nakshatram_from_day_of_year(doy).index();
            let b = nakshatram_from_day_of_year(doy + 1).index();
            assert_eq!((a + 1) % NAKSHATRAM_COUNT as u8, b, "doy {doy}");
        }
    }

    #[test]
    fn cycle_period_is_27() {
        for doy in 1..100 {
            assert_eq!(
                nakshatram_from_day_of_year(doy),
                nakshatram_from_day_of_year(doy + 27)
            );
        }
    }
}
