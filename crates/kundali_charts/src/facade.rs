//! Chart building entry points.
//!
//! Pipeline: validate input → provider fetch → node completion → D1 → D9.
//! The provider call is the only suspension point; everything after it is
//! pure. Any failure aborts the call; no partial charts are returned.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::chart::{Varga, build_d1, build_d9};
use crate::config::{ConfigError, ProviderConfig};
use crate::error::ChartError;
use crate::nodes::{NodeCoverage, node_coverage, with_derived_nodes};
use crate::provider::{EphemerisProvider, HttpProvider};
use crate::types::{BirthInput, ChartMeta, CoreApiResponse, VedicCharts};

/// Fetch longitudes for `input` and build its D1 and D9 charts.
pub async fn build_vedic_charts<P>(provider: &P, input: &BirthInput) -> Result<VedicCharts, ChartError>
where
    P: EphemerisProvider + ?Sized,
{
    input.validate()?;

    let node_type = input.effective_node_type();
    let request = input.clone().with_node_type(node_type);

    debug!(provider = provider.name(), %node_type, "fetching core longitudes");
    let response = provider.get_core(&request).await.map_err(|e| {
        warn!(provider = provider.name(), error = %e, "provider request failed");
        ChartError::from(e)
    })?;

    let charts = charts_from_response(&response, &request)?;
    info!(
        asc_sign = charts.d1.ascendant.sign,
        d9_asc_sign = charts.d9.ascendant.sign,
        planets = charts.d1.planets.len(),
        "built vedic charts"
    );
    Ok(charts)
}

/// Build charts from an already fetched provider response.
pub fn charts_from_response(
    response: &CoreApiResponse,
    input: &BirthInput,
) -> Result<VedicCharts, ChartError> {
    match node_coverage(&response.planets) {
        NodeCoverage::Both => {}
        NodeCoverage::OnlyRahu => debug!("deriving Ketu from Rahu"),
        NodeCoverage::OnlyKetu => debug!("deriving Rahu from Ketu"),
        NodeCoverage::Neither => warn!("provider response has no lunar nodes"),
    }
    let planets = with_derived_nodes(&response.planets);

    let d1 = build_d1(&planets)?;
    debug!(chart = Varga::Rashi.label(), asc_sign = d1.ascendant.sign, "assembled chart");
    let d9 = build_d9(&planets)?;
    debug!(chart = Varga::Navamsa.label(), asc_sign = d9.ascendant.sign, "assembled chart");

    Ok(VedicCharts {
        meta: ChartMeta::new(
            response.ayanamsha,
            input.effective_node_type(),
            response.house_cusps,
        ),
        d1,
        d9,
    })
}

/// Long-lived handle pairing a provider with the chart pipeline.
///
/// Cheap to clone; clones share the provider.
#[derive(Clone)]
pub struct ChartService {
    provider: Arc<dyn EphemerisProvider>,
}

impl std::fmt::Debug for ChartService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartService")
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl ChartService {
    pub fn new(provider: Arc<dyn EphemerisProvider>) -> Self {
        Self { provider }
    }

    /// Service backed by an [`HttpProvider`] built from `config`.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let provider =
            HttpProvider::new(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;
        Ok(Self::new(Arc::new(provider)))
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// See [`build_vedic_charts`].
    pub async fn build(&self, input: &BirthInput) -> Result<VedicCharts, ChartError> {
        build_vedic_charts(self.provider.as_ref(), input).await
    }
}
