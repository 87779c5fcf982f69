//! Simplified muhurtham (auspiciousness) rule.
//!
//! A day is marked auspicious when its nakshatram is one of the favorable
//! set (Rohini, Mrigashira, Uttara Phalguni, Hasta, Swati, Anuradha,
//! Uttara Ashadha, Shravana, Uttara Bhadrapada) and its tithi index is not
//! a multiple of four. This is a stand-in for traditional muhurtham
//! determination, preserved as-is.

use crate::nakshatram::Nakshatram;
use crate::tithi::Tithi;

/// Indices of the favorable nakshatrams.
pub const AUSPICIOUS_NAKSHATRAMS: [u8; 9] = [3, 4, 11, 12, 14, 16, 20, 21, 25];

/// Whether a (nakshatram, tithi) pair counts as auspicious.
pub fn is_auspicious_combination(nakshatram: Nakshatram, tithi: Tithi) -> bool {
    AUSPICIOUS_NAKSHATRAMS.contains(&nakshatram.index()) && tithi.index() % 4 != 0
}
