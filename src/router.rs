//! Region → provider adapter dispatch.
//!
//! Adapters are registered in a table keyed by the region they serve; adding
//! a region is one [`RegionRouter::register`] call and never touches
//! [`RegionRouter::resolve`].

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::config::{AirQualityConfig, ProviderConfig};
use crate::error::{AirQualityError, Result};
use crate::fetch::{BasicClient, HttpClient, UrlParam};
use crate::model::Region;
use crate::providers::{BusanSchema, ProviderAdapter, ProviderSchema, RegionalAdapter, SeoulSchema};

#[derive(Default)]
pub struct RegionRouter {
    adapters: BTreeMap<Region, Arc<dyn ProviderAdapter>>,
}

impl RegionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the production adapters for every integrated region.
    pub fn from_config(config: &AirQualityConfig) -> anyhow::Result<Self> {
        let mut router = Self::new();
        router.register(Arc::new(build_adapter::<SeoulSchema>(&config.seoul, config)?));
        router.register(Arc::new(build_adapter::<BusanSchema>(&config.busan, config)?));
        Ok(router)
    }

    /// Registers `adapter` under its own region, returning any adapter it replaces.
    pub fn register(&mut self, adapter: Arc<dyn ProviderAdapter>) -> Option<Arc<dyn ProviderAdapter>> {
        self.adapters.insert(adapter.region(), adapter)
    }

    pub fn with<A: ProviderAdapter + 'static>(mut self, adapter: A) -> Self {
        self.register(Arc::new(adapter));
        self
    }

    /// Returns the adapter serving `region`.
    ///
    /// # Errors
    ///
    /// [`AirQualityError::UnsupportedRegion`] carrying `region` verbatim when
    /// the token names no region or a region without a registered adapter.
    pub fn resolve(&self, region: &str) -> Result<Arc<dyn ProviderAdapter>> {
        let adapter = region
            .parse::<Region>()
            .ok()
            .and_then(|r| self.adapters.get(&r))
            .cloned()
            .ok_or_else(|| AirQualityError::unsupported(region))?;

        debug!(region, provider = adapter.provider(), "Region resolved");
        Ok(adapter)
    }

    pub fn regions(&self) -> Vec<Region> {
        self.adapters.keys().copied().collect()
    }

    pub fn adapters(&self) -> impl Iterator<Item = &Arc<dyn ProviderAdapter>> {
        self.adapters.values()
    }
}

fn build_adapter<S: ProviderSchema>(
    provider: &ProviderConfig,
    config: &AirQualityConfig,
) -> anyhow::Result<RegionalAdapter<S, Box<dyn HttpClient>>> {
    let basic = BasicClient::with_timeouts(config.timeout(), config.connect_timeout())?;
    let client: Box<dyn HttpClient> = match &provider.api_key {
        Some(key) => Box::new(UrlParam::new(basic, S::API_KEY_PARAM, key.clone())),
        None => Box::new(basic),
    };
    Ok(RegionalAdapter::new(provider.base_url.clone(), client))
}
