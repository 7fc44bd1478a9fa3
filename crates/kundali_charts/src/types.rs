//! Data model: provider input/output and assembled charts.
//!
//! All types are plain values created fresh per call. Field names are the
//! JSON contract consumed by downstream chat/UI layers.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use kundali_base::{HouseEntry, NodeType, Planet, PlanetPlacement, normalize_360};

use crate::error::ChartError;

/// Reference frame tag written into chart metadata.
pub const SIDEREAL_LAHIRI: &str = "sidereal-lahiri";

/// Birth moment and place, forwarded unchanged to the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    /// Local calendar date.
    pub date: NaiveDate,
    /// Local clock time.
    pub time: NaiveTime,
    /// Offset of local time from UTC, hours (e.g. 5.5 for IST).
    pub tz_offset_hours: f64,
    /// Geographic latitude in degrees, north positive.
    pub latitude: f64,
    /// Geographic longitude in degrees, east positive.
    pub longitude: f64,
    /// Lunar node model; `None` means [`NodeType::True`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<NodeType>,
}

impl BirthInput {
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        tz_offset_hours: f64,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            date,
            time,
            tz_offset_hours,
            latitude,
            longitude,
            node_type: None,
        }
    }

    /// Builder-style node type selection.
    pub fn with_node_type(mut self, node_type: NodeType) -> Self {
        self.node_type = Some(node_type);
        self
    }

    /// Node type with the default applied.
    pub fn effective_node_type(&self) -> NodeType {
        self.node_type.unwrap_or_default()
    }

    /// Range checks on the geographic and timezone fields.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ChartError::InvalidInput("latitude must be within [-90, 90]"));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ChartError::InvalidInput("longitude must be within [-180, 180]"));
        }
        if !self.tz_offset_hours.is_finite() || !(-14.0..=14.0).contains(&self.tz_offset_hours) {
            return Err(ChartError::InvalidInput(
                "timezone offset must be within [-14, 14] hours",
            ));
        }
        Ok(())
    }
}

/// One raw sidereal longitude from the provider. Not necessarily normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetRaw {
    pub planet: Planet,
    /// Sidereal (Lahiri) longitude in degrees.
    pub longitude: f64,
}

impl PlanetRaw {
    pub fn new(planet: Planet, longitude: f64) -> Self {
        Self { planet, longitude }
    }
}

/// Provider response for one birth input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreApiResponse {
    pub planets: Vec<PlanetRaw>,
    /// Ayanamsha in degrees, if the provider reports it.
    #[serde(default)]
    pub ayanamsha: Option<f64>,
    /// Twelve house cusp longitudes, passed through to metadata only.
    #[serde(default)]
    pub house_cusps: Option<[f64; 12]>,
}

impl CoreApiResponse {
    pub fn new(planets: Vec<PlanetRaw>) -> Self {
        Self {
            planets,
            ..Self::default()
        }
    }

    /// Longitude of the first entry for `planet`.
    pub fn longitude_of(&self, planet: Planet) -> Option<f64> {
        self.planets
            .iter()
            .find(|p| p.planet == planet)
            .map(|p| p.longitude)
    }

    pub fn contains(&self, planet: Planet) -> bool {
        self.planets.iter().any(|p| p.planet == planet)
    }
}

/// One divisional chart: ascendant, house table and planet placements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSlice {
    #[serde(rename = "asc")]
    pub ascendant: PlanetPlacement,
    /// Index 0 is house 1.
    pub houses: [HouseEntry; 12],
    /// Non-ascendant placements in traditional planet order.
    pub planets: Vec<PlanetPlacement>,
}

impl ChartSlice {
    /// Placement of `planet`, if present in this chart.
    pub fn planet(&self, planet: Planet) -> Option<&PlanetPlacement> {
        self.planets.iter().find(|p| p.planet == planet)
    }

    /// Planets occupying the given house (1-12).
    pub fn planets_in_house(&self, house: u8) -> impl Iterator<Item = &PlanetPlacement> {
        self.planets.iter().filter(move |p| p.house == house)
    }
}

/// Metadata describing how the charts were computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    /// Always [`SIDEREAL_LAHIRI`].
    pub system: String,
    pub ayanamsha: Option<f64>,
    pub node_type: NodeType,
    /// Provider house cusps, normalized to [0, 360).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_cusps: Option<[f64; 12]>,
}

impl ChartMeta {
    pub fn new(ayanamsha: Option<f64>, node_type: NodeType, house_cusps: Option<[f64; 12]>) -> Self {
        Self {
            system: SIDEREAL_LAHIRI.to_string(),
            ayanamsha,
            node_type,
            house_cusps: house_cusps.map(|c| c.map(normalize_360)),
        }
    }
}

/// Rashi (D1) and Navamsha (D9) charts for one birth input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VedicCharts {
    pub meta: ChartMeta,
    #[serde(rename = "D1")]
    pub d1: ChartSlice,
    #[serde(rename = "D9")]
    pub d9: ChartSlice,
}
