//! Vedic D1/D9 chart assembly.
//!
//! Fetches sidereal longitudes from an [`EphemerisProvider`], completes the
//! lunar node pair, and assembles Rashi (D1) and Navamsha (D9) charts with
//! whole-sign houses and nakshatra placements.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use kundali_charts::*;
//!
//! let config = ProviderConfig::load("provider.toml".as_ref())?.with_env_overrides()?;
//! let service = ChartService::from_config(&config)?;
//! let charts = service.build(&input).await?;
//! println!("{}", serde_json::to_string_pretty(&charts)?);
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod facade;
pub mod nodes;
pub mod provider;
pub mod types;

pub use chart::{Varga, build_chart, build_d1, build_d9};
pub use config::{ConfigError, ProviderConfig};
pub use error::{ChartError, ProviderError};
pub use facade::{ChartService, build_vedic_charts, charts_from_response};
pub use nodes::{NodeCoverage, derive_missing_node, node_coverage, with_derived_nodes};
pub use provider::{EphemerisProvider, FixedProvider, HttpProvider};
pub use types::{
    BirthInput, ChartMeta, ChartSlice, CoreApiResponse, PlanetRaw, SIDEREAL_LAHIRI, VedicCharts,
};

// Re-export placement types so callers don't need kundali_base directly.
pub use kundali_base::{Dms, HouseEntry, NakshatraPlacement, NodeType, Planet, PlanetPlacement};
