//! D1 (Rashi) and D9 (Navamsha) chart assembly.
//!
//! Both charts share one assembly routine: resolve the ascendant's sign in
//! the target chart, root a whole-sign house table there, and place every
//! other point relative to it. The charts differ only in how a D1
//! longitude is mapped into the chart.

use kundali_base::{
    ALL_PLANETS, Planet, house_table, navamsa_display_longitude, navamsa_sign, normalize_360,
    place, rashi_index_of,
};

use crate::error::ChartError;
use crate::types::{ChartSlice, PlanetRaw};

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Varga {
    /// D1 Rashi chart.
    Rashi,
    /// D9 Navamsha chart.
    Navamsa,
}

impl Varga {
    /// Conventional D-number label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rashi => "D1",
            Self::Navamsa => "D9",
        }
    }

    /// Longitude used to place the ascendant in this chart.
    ///
    /// In D9 the ascendant is sign-only and sits at 0 deg of its navamsha sign.
    pub fn ascendant_longitude(self, d1_lon: f64) -> f64 {
        match self {
            Self::Rashi => normalize_360(d1_lon),
            Self::Navamsa => navamsa_sign(d1_lon) as f64 * 30.0,
        }
    }

    /// Longitude used to place a planet in this chart.
    ///
    /// D9 uses [`navamsa_display_longitude`]: only its sign is meaningful.
    pub fn point_longitude(self, d1_lon: f64) -> f64 {
        match self {
            Self::Rashi => normalize_360(d1_lon),
            Self::Navamsa => navamsa_display_longitude(d1_lon),
        }
    }
}

/// First longitude per planet, in traditional planet order.
fn ordered_points(planets: &[PlanetRaw]) -> Vec<(Planet, f64)> {
    let mut slots: [Option<f64>; ALL_PLANETS.len()] = [None; ALL_PLANETS.len()];
    for raw in planets {
        let slot = &mut slots[raw.planet.index() as usize];
        if slot.is_none() {
            *slot = Some(raw.longitude);
        }
    }
    ALL_PLANETS
        .iter()
        .zip(slots)
        .filter_map(|(&planet, lon)| lon.map(|l| (planet, l)))
        .collect()
}

/// Assemble one chart from provider longitudes.
///
/// Fails with [`ChartError::MissingAscendant`] when no Ascendant entry exists.
pub fn build_chart(planets: &[PlanetRaw], varga: Varga) -> Result<ChartSlice, ChartError> {
    let points = ordered_points(planets);
    let asc_d1 = points
        .iter()
        .find(|(p, _)| *p == Planet::Ascendant)
        .map(|&(_, lon)| lon)
        .ok_or(ChartError::MissingAscendant)?;

    let asc_lon = varga.ascendant_longitude(asc_d1);
    let asc_sign = rashi_index_of(asc_lon);

    let placements = points
        .iter()
        .filter(|(p, _)| *p != Planet::Ascendant)
        .map(|&(planet, lon)| place(planet, varga.point_longitude(lon), asc_sign))
        .collect();

    Ok(ChartSlice {
        ascendant: place(Planet::Ascendant, asc_lon, asc_sign),
        houses: house_table(asc_sign),
        planets: placements,
    })
}

/// D1 Rashi chart.
pub fn build_d1(planets: &[PlanetRaw]) -> Result<ChartSlice, ChartError> {
    build_chart(planets, Varga::Rashi)
}

/// D9 Navamsha chart.
pub fn build_d9(planets: &[PlanetRaw]) -> Result<ChartSlice, ChartError> {
    build_chart(planets, Varga::Navamsa)
}
