//! Placement of a chart point: sign, house, DMS and nakshatra.
//!
//! Houses are whole-sign: house 1 is the ascendant's rashi and the
//! following rashis take houses 2..12 in zodiacal order.

use serde::{Deserialize, Serialize};

use crate::graha::Planet;
use crate::nakshatra::{NakshatraPlacement, nakshatra_from_longitude};
use crate::rashi::{Dms, Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// Whole-sign house number (1..=12) of `sign` counted from `asc_sign`.
///
/// `((sign - asc_sign + 12) mod 12) + 1`.
pub fn house_of(sign: u8, asc_sign: u8) -> u8 {
    ((sign % 12 + 12 - asc_sign % 12) % 12) + 1
}

/// One row of a chart's house table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HouseEntry {
    /// House number, 1-12.
    pub house: u8,
    /// 0-based rashi index occupying the house.
    pub sign: u8,
}

/// The 12 houses rooted at `asc_sign`. Index 0 is house 1.
pub fn house_table(asc_sign: u8) -> [HouseEntry; 12] {
    std::array::from_fn(|i| HouseEntry {
        house: i as u8 + 1,
        sign: ((asc_sign % 12) as usize + i) as u8 % 12,
    })
}

/// Complete placement of one chart point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPlacement {
    pub planet: Planet,
    /// Longitude in [0, 360).
    pub longitude: f64,
    /// 0-based rashi index (0 = Aries).
    pub sign: u8,
    pub sign_name: String,
    /// Degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
    /// DMS form of `degree_in_sign`.
    pub dms: Dms,
    /// House number relative to the chart's ascendant, 1-12.
    pub house: u8,
    pub nakshatra: NakshatraPlacement,
}

impl PlanetPlacement {
    /// The rashi as an enum.
    pub fn rashi(&self) -> Rashi {
        Rashi::from_index(self.sign)
    }
}

/// Place `planet` at `longitude`, numbering houses from `asc_sign`.
pub fn place(planet: Planet, longitude: f64, asc_sign: u8) -> PlanetPlacement {
    let longitude = normalize_360(longitude);
    let rashi = rashi_from_longitude(longitude);
    let nakshatra = nakshatra_from_longitude(longitude);

    PlanetPlacement {
        planet,
        longitude,
        sign: rashi.rashi_index,
        sign_name: rashi.rashi.western_name().to_string(),
        degree_in_sign: rashi.degrees_in_rashi,
        dms: rashi.dms,
        house: house_of(rashi.rashi_index, asc_sign),
        nakshatra: nakshatra.to_placement(),
    }
}
