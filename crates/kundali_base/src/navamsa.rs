//! Navamsha (D9) sign mapping.
//!
//! Each rashi is split into 9 navamshas of 3 deg 20'. The sequence of
//! target signs starts according to the triad of the natal rashi:
//! - movable (chara): the rashi itself
//! - fixed (sthira): the 9th rashi from it, `(rashi + 8) mod 12`
//! - dual (dvisvabhava): the 5th rashi from it, `(rashi + 4) mod 12`
//!
//! and advances one sign per navamsha.
//!
//! Only the navamsha *sign* is exact. [`navamsa_display_longitude`] is a
//! lossy convenience value for chart display and must not be fed into any
//! further subdivision.

use crate::rashi::{Rashi, SignModality, degrees_in_rashi, nth_rashi_from, rashi_index_of};

/// Number of navamshas per rashi.
pub const NAVAMSA_DIVISIONS: u8 = 9;

/// Span of one navamsha: 30/9 = 3.3333... degrees.
pub const NAVAMSA_SPAN: f64 = 30.0 / NAVAMSA_DIVISIONS as f64;

/// First navamsha sign for a natal rashi (0-based indices).
pub fn navamsa_start(rashi_index: u8) -> u8 {
    let rashi_index = rashi_index % 12;
    match Rashi::from_index(rashi_index).modality() {
        SignModality::Movable => rashi_index,
        SignModality::Fixed => nth_rashi_from(rashi_index, 9),
        SignModality::Dual => nth_rashi_from(rashi_index, 5),
    }
}

/// 0-based navamsha division within the rashi: `floor(deg_in_rashi * 9 / 30)`, 0..=8.
pub fn navamsa_index(sidereal_lon_deg: f64) -> u8 {
    let deg = degrees_in_rashi(sidereal_lon_deg);
    ((deg * NAVAMSA_DIVISIONS as f64 / 30.0).floor() as u8).min(NAVAMSA_DIVISIONS - 1)
}

/// Navamsha (D9) sign of a sidereal longitude, 0-based (0 = Mesha).
pub fn navamsa_sign(sidereal_lon_deg: f64) -> u8 {
    let start = navamsa_start(rashi_index_of(sidereal_lon_deg));
    (start + navamsa_index(sidereal_lon_deg)) % 12
}

/// Synthetic D9 longitude: the navamsha sign's start plus the offset inside
/// the natal navamsha division (0..3.333 deg).
///
/// Structural symmetry with D1 output only. It is NOT a true sub-degree
/// navamsha longitude.
pub fn navamsa_display_longitude(sidereal_lon_deg: f64) -> f64 {
    let remainder = degrees_in_rashi(sidereal_lon_deg) % NAVAMSA_SPAN;
    navamsa_sign(sidereal_lon_deg) as f64 * 30.0 + remainder
}
