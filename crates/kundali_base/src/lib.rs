//! Vedic chart placement math on sidereal longitudes.
//!
//! This crate provides:
//! - Angle normalization and whole-second DMS conversion
//! - Rashi (sign), whole-sign house and nakshatra/pada lookup
//! - Navamsha (D9) sign mapping by sign triad
//!
//! Everything here is pure and total: no I/O, no errors, no shared state.

pub mod graha;
pub mod nakshatra;
pub mod navamsa;
pub mod placement;
pub mod rashi;
pub mod util;

pub use graha::{ALL_PLANETS, NodeType, Planet, UnknownName};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, NakshatraPlacement, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use navamsa::{
    NAVAMSA_DIVISIONS, NAVAMSA_SPAN, navamsa_display_longitude, navamsa_index, navamsa_sign,
    navamsa_start,
};
pub use placement::{HouseEntry, PlanetPlacement, house_of, house_table, place};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, SignModality, deg_to_dms, degrees_in_rashi,
    nth_rashi_from, rashi_from_longitude, rashi_index_of,
};
pub use util::normalize_360;
