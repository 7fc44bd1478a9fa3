//! Ephemeris provider capability.
//!
//! A provider turns a [`BirthInput`] into sidereal (Lahiri) longitudes for
//! the grahas and the ascendant. It is the only I/O boundary of chart
//! building.
//!
//! Contract:
//! - longitudes MUST already be sidereal; a tropical source subtracts the
//!   ayanamsha itself
//! - the response MUST contain an Ascendant entry
//! - it SHOULD contain Rahu and/or Ketu
//! - it MAY report the ayanamsha and 12 house cusps
//!
//! Implementations must be `Send + Sync` so one provider can serve
//! concurrent chart requests.

pub mod fixed;
pub mod http;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::{BirthInput, CoreApiResponse};

pub use fixed::FixedProvider;
pub use http::HttpProvider;

/// Source of raw sidereal longitudes.
#[async_trait]
pub trait EphemerisProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Fetch longitudes for one birth input.
    async fn get_core(&self, input: &BirthInput) -> Result<CoreApiResponse, ProviderError>;
}

#[async_trait]
impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Arc<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn get_core(&self, input: &BirthInput) -> Result<CoreApiResponse, ProviderError> {
        (**self).get_core(input).await
    }
}

#[async_trait]
impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn get_core(&self, input: &BirthInput) -> Result<CoreApiResponse, ProviderError> {
        (**self).get_core(input).await
    }
}
