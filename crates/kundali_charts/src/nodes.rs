//! Lunar node completion.
//!
//! Rahu and Ketu are always exactly opposite. When the provider supplies
//! only one of them the other is synthesized as `normalize(node + 180)`.
//! When both are supplied the provider values are used as-is.

use kundali_base::{Planet, normalize_360};

use crate::types::PlanetRaw;

/// Which nodes a provider response carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeCoverage {
    Both,
    OnlyRahu,
    OnlyKetu,
    Neither,
}

/// Classify the node entries present in `planets`.
pub fn node_coverage(planets: &[PlanetRaw]) -> NodeCoverage {
    let rahu = planets.iter().any(|p| p.planet == Planet::Rahu);
    let ketu = planets.iter().any(|p| p.planet == Planet::Ketu);
    match (rahu, ketu) {
        (true, true) => NodeCoverage::Both,
        (true, false) => NodeCoverage::OnlyRahu,
        (false, true) => NodeCoverage::OnlyKetu,
        (false, false) => NodeCoverage::Neither,
    }
}

/// Longitude of the node opposite to one at `node_lon`.
pub fn opposite_node_deg(node_lon: f64) -> f64 {
    normalize_360(node_lon + 180.0)
}

/// The missing node entry, if exactly one node is present.
pub fn derive_missing_node(planets: &[PlanetRaw]) -> Option<PlanetRaw> {
    let present = match node_coverage(planets) {
        NodeCoverage::OnlyRahu => Planet::Rahu,
        NodeCoverage::OnlyKetu => Planet::Ketu,
        NodeCoverage::Both | NodeCoverage::Neither => return None,
    };
    let source = planets.iter().find(|p| p.planet == present)?;
    let missing = present.opposite_node()?;
    Some(PlanetRaw::new(missing, opposite_node_deg(source.longitude)))
}

/// `planets` with the missing node appended, if one can be derived.
pub fn with_derived_nodes(planets: &[PlanetRaw]) -> Vec<PlanetRaw> {
    let mut out = planets.to_vec();
    out.extend(derive_missing_node(planets));
    out
}
