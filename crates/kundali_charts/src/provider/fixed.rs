//! In-memory provider returning a preset response.
//!
//! Used as the test double for chart building and for serving charts from
//! longitudes computed elsewhere. Every call is recorded so tests can check
//! what was forwarded.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::EphemerisProvider;
use crate::error::ProviderError;
use crate::types::{BirthInput, CoreApiResponse};

/// Provider with a fixed outcome.
///
/// Clones share the recorded call log.
#[derive(Debug, Clone)]
pub struct FixedProvider {
    inner: Arc<Mutex<FixedProviderInner>>,
}

#[derive(Debug)]
struct FixedProviderInner {
    outcome: Result<CoreApiResponse, ProviderError>,
    calls: Vec<BirthInput>,
}

impl FixedProvider {
    /// Always answer with `response`.
    pub fn new(response: CoreApiResponse) -> Self {
        Self::with_outcome(Ok(response))
    }

    /// Always fail with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<CoreApiResponse, ProviderError>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FixedProviderInner {
                outcome,
                calls: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FixedProviderInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Inputs received so far, oldest first.
    pub fn calls(&self) -> Vec<BirthInput> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }
}

#[async_trait]
impl EphemerisProvider for FixedProvider {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn get_core(&self, input: &BirthInput) -> Result<CoreApiResponse, ProviderError> {
        let mut inner = self.lock();
        inner.calls.push(input.clone());
        inner.outcome.clone()
    }
}
