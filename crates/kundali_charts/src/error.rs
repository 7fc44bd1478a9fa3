//! Error types for chart building.

use thiserror::Error;

/// Failures of the ephemeris provider.
///
/// Propagated unchanged through [`ChartError::Provider`]; the chart core
/// never retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// Transport failure (connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// The response body was not a valid core response.
    #[error("decode error: {0}")]
    Decode(String),

    /// The provider could not be constructed from its settings.
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    /// The provider has no data for this request.
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Errors from building Vedic charts. Every variant aborts the whole call.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from the ephemeris provider.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Provider response lacks an Ascendant entry.
    #[error("provider response has no Ascendant entry")]
    MissingAscendant,

    /// Birth input out of range.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
