//! Fixed-date festival table.
//!
//! Festivals are keyed by Gregorian (month, day). A date may carry zero,
//! one, or several festivals; rows with the same key accumulate.

use serde::Serialize;

/// A festival name in both locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Festival {
    pub name: &'static str,
    pub tamil_name: &'static str,
}

/// All fixed-date festivals as (month, day, festival) rows.
pub static ALL_FESTIVALS: [(u32, u32, Festival); 7] = [
    (
        1,
        14,
        Festival {
            name: "Thai Pongal",
            tamil_name: "தைப்பொங்கல்",
        },
    ),
    (
        1,
        15,
        Festival {
            name: "Mattu Pongal",
            tamil_name: "மாட்டுப்பொங்கல்",
        },
    ),
    (
        4,
        14,
        Festival {
            name: "Tamil New Year",
            tamil_name: "தமிழ் புத்தாண்டு",
        },
    ),
    (
        5,
        1,
        Festival {
            name: "May Day",
            tamil_name: "மே தினம்",
        },
    ),
    (
        8,
        15,
        Festival {
            name: "Independence Day",
            tamil_name: "சுதந்திர தினம்",
        },
    ),
    (
        10,
        2,
        Festival {
            name: "Gandhi Jayanti",
            tamil_name: "காந்தி ஜெயந்தி",
        },
    ),
    (
        12,
        25,
        Festival {
            name: "Christmas",
            tamil_name: "கிறிஸ்துமஸ்",
        },
    ),
];

/// Festivals falling on a Gregorian (month, day), in table order.
pub fn festivals_on(month: u32, day: u32) -> Vec<&'static Festival> {
    ALL_FESTIVALS
        .iter()
        .filter(|(m, d, _)| *m == month && *d == day)
        .map(|(_, _, f)| f)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pongal_and_new_year() {
        let pongal = festivals_on(1, 14);
        assert_eq!(pongal.len(), 1);
        assert_eq!(pongal[0].name, "Thai Pongal");

        let new_year = festivals_on(4, 14);
        assert_eq!(new_year.len(), 1);
        assert_eq!(new_year[0].name, "Tamil New Year");
        assert_eq!(new_year[0].tamil_name, "தமிழ் புத்தாண்டு");
    }

    #[test]
    fn most_dates_have_none() {
        assert!(festivals_on(3, 3).is_empty());
        assert!(festivals_on(7, 21).is_empty());
    }

    #[test]
    fn keys_are_valid_dates() {
        for &(m, d, f) in &ALL_FESTIVALS {
            assert!((1..=12).contains(&m));
            assert!((1..=31).contains(&d));
            assert!(!f.name.is_empty());
            assert!(!f.tamil_name.is_empty());
        }
    }
}
