//! Rashi (zodiac sign) and DMS (degrees-minutes-seconds) computation.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each.
//! Given a sidereal longitude, we identify which rashi the point falls in
//! and express the position as degrees-minutes-seconds within that sign.
//!
//! 12 rashis of 30 deg each, starting from Mesha (Aries) at 0 deg.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Temperament triad of a rashi (chara / sthira / dvisvabhava).
///
/// Drives the navamsa starting sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignModality {
    /// Chara: Mesha, Karka, Tula, Makara.
    Movable,
    /// Sthira: Vrishabha, Simha, Vrischika, Kumbha.
    Fixed,
    /// Dvisvabhava: Mithuna, Kanya, Dhanu, Meena.
    Dual,
}

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi. This is the name carried in
    /// chart output.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi for a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Triad membership, cycling movable → fixed → dual from Mesha.
    pub const fn modality(self) -> SignModality {
        match self.index() % 3 {
            0 => SignModality::Movable,
            1 => SignModality::Fixed,
            _ => SignModality::Dual,
        }
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

impl Display for Rashi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.western_name())
    }
}

/// Degrees-minutes-seconds representation of an angle, whole units only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub deg: u16,
    /// Arc-minutes (0..59).
    pub min: u8,
    /// Arc-seconds (0..59), rounded.
    pub sec: u8,
}

impl Dms {
    /// Convert back to decimal degrees.
    pub fn to_degrees(self) -> f64 {
        self.deg as f64 + self.min as f64 / 60.0 + self.sec as f64 / 3600.0
    }
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:02}\"", self.deg, self.min, self.sec)
    }
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Seconds are rounded to the nearest whole second. A rounded value of 60
/// carries into the minutes, and 60 minutes carry into the degrees.
/// Negative input is converted by absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let whole = d.floor();
    let min_float = (d - whole) * 60.0;
    let min_floor = min_float.floor();
    let mut sec = ((min_float - min_floor) * 60.0).round() as u8;
    let mut min = min_floor as u8;
    let mut degrees = whole as u16;

    if sec >= 60 {
        sec = 0;
        min += 1;
    }
    if min >= 60 {
        min = 0;
        degrees += 1;
    }

    Dms {
        deg: degrees,
        min,
        sec,
    }
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// 0-based rashi index of a sidereal longitude: `floor(normalize(lon) / 30)`.
pub fn rashi_index_of(sidereal_lon_deg: f64) -> u8 {
    let lon = normalize_360(sidereal_lon_deg);
    // lon - (lon mod 30) is an exact multiple of 30, so the index always
    // agrees with degrees_in_rashi even where lon / 30 would round up.
    (((lon - lon % RASHI_SPAN) / RASHI_SPAN).round() as u8).min(11)
}

/// Degrees within the rashi: `normalize(lon) mod 30`, in [0, 30).
pub fn degrees_in_rashi(sidereal_lon_deg: f64) -> f64 {
    normalize_360(sidereal_lon_deg) % RASHI_SPAN
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let rashi_idx = rashi_index_of(sidereal_lon_deg);
    let degrees_in_rashi = degrees_in_rashi(sidereal_lon_deg);

    RashiInfo {
        rashi: Rashi::from_index(rashi_idx),
        rashi_index: rashi_idx,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}

/// Compute the n-th rashi from a given rashi (0-based indices, 1-based offset).
///
/// `nth_rashi_from(0, 1)` = 0 (same rashi), `nth_rashi_from(0, 9)` = 8.
pub fn nth_rashi_from(rashi_index: u8, offset: u8) -> u8 {
    ((rashi_index as u16 + offset as u16 + 11) % 12) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rashi::from_index(i as u8), *r);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Rashi::from_index(12), Rashi::Mesha);
        assert_eq!(Rashi::from_index(23), Rashi::Meena);
    }

    #[test]
    fn rashi_names_nonempty() {
        for r in ALL_RASHIS {
            assert!(!r.name().is_empty());
            assert!(!r.western_name().is_empty());
        }
    }

    #[test]
    fn modality_triads() {
        use SignModality::*;
        let expected = [
            Movable, Fixed, Dual, Movable, Fixed, Dual, Movable, Fixed, Dual, Movable, Fixed, Dual,
        ];
        for (r, m) in ALL_RASHIS.iter().zip(expected) {
            assert_eq!(r.modality(), m, "{}", r.name());
        }
    }

    #[test]
    fn deg_to_dms_zero() {
        let d = deg_to_dms(0.0);
        assert_eq!((d.deg, d.min, d.sec), (0, 0, 0));
    }

    #[test]
    fn deg_to_dms_known() {
        // 23.853 deg = 23 deg 51' 10.8" → 11"
        let d = deg_to_dms(23.853);
        assert_eq!((d.deg, d.min, d.sec), (23, 51, 11));
    }

    #[test]
    fn deg_to_dms_exact_minutes() {
        let d = deg_to_dms(10.5);
        assert_eq!((d.deg, d.min, d.sec), (10, 30, 0));
    }

    #[test]
    fn deg_to_dms_carries_seconds() {
        // 59.9999" rounds to 60" → carry into minutes
        let d = deg_to_dms(12.0 + 30.0 / 60.0 + 59.9999 / 3600.0);
        assert_eq!((d.deg, d.min, d.sec), (12, 31, 0));
    }

    #[test]
    fn deg_to_dms_carries_minutes() {
        // 12 deg 59' 59.9" → 13 deg 0' 0"
        let d = deg_to_dms(12.0 + 59.0 / 60.0 + 59.9 / 3600.0);
        assert_eq!((d.deg, d.min, d.sec), (13, 0, 0));
    }

    #[test]
    fn dms_display() {
        let d = Dms {
            deg: 7,
            min: 5,
            sec: 9,
        };
        assert_eq!(d.to_string(), "7°05'09\"");
    }

    #[test]
    fn rashi_boundary_0() {
        let info = rashi_from_longitude(0.0);
        assert_eq!(info.rashi, Rashi::Mesha);
        assert_eq!(info.rashi_index, 0);
        assert!(info.degrees_in_rashi.abs() < 1e-10);
    }

    #[test]
    fn rashi_boundary_30() {
        let info = rashi_from_longitude(30.0);
        assert_eq!(info.rashi, Rashi::Vrishabha);
        assert_eq!(info.rashi_index, 1);
        assert!(info.degrees_in_rashi.abs() < 1e-10);
    }

    #[test]
    fn rashi_all_boundaries() {
        for i in 0..12u8 {
            let lon = i as f64 * 30.0;
            let info = rashi_from_longitude(lon);
            assert_eq!(info.rashi_index, i, "boundary at {lon} deg");
        }
    }

    #[test]
    fn rashi_wrap_around() {
        let info = rashi_from_longitude(365.0);
        assert_eq!(info.rashi, Rashi::Mesha);
        assert!((info.degrees_in_rashi - 5.0).abs() < 1e-10);
    }

    #[test]
    fn rashi_negative() {
        let info = rashi_from_longitude(-10.0);
        assert_eq!(info.rashi, Rashi::Meena); // 350 deg
        assert!((info.degrees_in_rashi - 20.0).abs() < 1e-10);
    }

    #[test]
    fn rashi_dms_within_sign() {
        // 45.5 deg → Vrishabha, 15 deg 30' 0"
        let info = rashi_from_longitude(45.5);
        assert_eq!(info.dms.deg, 15);
        assert_eq!(info.dms.min, 30);
        assert_eq!(info.dms.sec, 0);
    }

    #[test]
    fn nth_rashi() {
        assert_eq!(nth_rashi_from(0, 1), 0);
        assert_eq!(nth_rashi_from(0, 2), 1);
        assert_eq!(nth_rashi_from(1, 9), 9);
        assert_eq!(nth_rashi_from(2, 5), 6);
        assert_eq!(nth_rashi_from(11, 12), 10);
    }
}
