//! Chart points: the 9 grahas plus the ascendant (lagna).
//!
//! Identifiers are carried in chart output by their English names
//! (`"Sun"`, `"Ascendant"`); Sanskrit names are available for display.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A point placed in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
    Ascendant,
}

/// All chart points in traditional order, ascendant last.
pub const ALL_PLANETS: [Planet; 10] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
    Planet::Rahu,
    Planet::Ketu,
    Planet::Ascendant,
];

impl Planet {
    /// English name, as serialized.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
            Self::Ascendant => "Ascendant",
        }
    }

    /// Sanskrit name.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mars => "Mangal",
            Self::Mercury => "Buddh",
            Self::Jupiter => "Guru",
            Self::Venus => "Shukra",
            Self::Saturn => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
            Self::Ascendant => "Lagna",
        }
    }

    /// 0-based index into ALL_PLANETS.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rahu or Ketu.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// The opposite lunar node, if this is one.
    pub const fn opposite_node(self) -> Option<Planet> {
        match self {
            Self::Rahu => Some(Self::Ketu),
            Self::Ketu => Some(Self::Rahu),
            _ => None,
        }
    }
}

impl Display for Planet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Error for unknown chart point or node type names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName(pub String);

impl Display for UnknownName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown name: {}", self.0)
    }
}

impl std::error::Error for UnknownName {}

impl FromStr for Planet {
    type Err = UnknownName;

    /// Accepts English or Sanskrit names, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PLANETS
            .iter()
            .copied()
            .find(|p| {
                p.english_name().eq_ignore_ascii_case(s) || p.sanskrit_name().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// Which lunar node model the ephemeris source should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// True node: mean + short-period perturbation corrections.
    #[default]
    True,
    /// Mean node: smooth polynomial motion only.
    Mean,
}

impl NodeType {
    /// Wire name (`"true"` / `"mean"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::Mean => "mean",
        }
    }
}

impl Display for NodeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "true" => Ok(Self::True),
            "mean" => Ok(Self::Mean),
            _ => Err(UnknownName(s.to_string())),
        }
    }
}
