//! Provider adapters.
//!
//! Every regional authority is described by a [`ProviderSchema`]: where the
//! observation-slot key goes, how the envelope reports success, and how one
//! station row maps onto [`SubRegionReading`]. [`RegionalAdapter`] runs the
//! shared fetch → inspect → normalize algorithm for any schema, and is what
//! the router hands out as a [`ProviderAdapter`].

mod busan;
#[cfg(test)]
pub(crate) mod fixtures;
mod lenient;
mod seoul;

pub use busan::BusanSchema;
pub use seoul::SeoulSchema;

use async_trait::async_trait;
use chrono::{DateTime, DurationRound, FixedOffset, Offset, TimeDelta, Utc};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::{debug, info, warn};

use crate::error::{AirQualityError, Result};
use crate::fetch::{HttpClient, fetch_bytes};
use crate::model::{Region, RegionSnapshot, SubRegionReading};

/// What a provider's envelope says about the payload it wraps.
#[derive(Debug)]
pub enum Envelope<R> {
    /// The wrapper itself is absent.
    Missing,
    /// The provider reports a business-level failure.
    Rejected { code: String, message: String },
    /// The provider reports success; rows are in provider order.
    Accepted(Vec<R>),
}

/// Static description of one provider's API.
pub trait ProviderSchema: Send + Sync + 'static {
    /// Top-level JSON document.
    type Body: DeserializeOwned + Send;
    /// One station record.
    type Row: Send;

    const NAME: &'static str;
    const REGION: Region;
    /// Query parameter carrying the observation-slot key.
    const DATE_PARAM: &'static str;
    /// `chrono` format string for the observation-slot key.
    const DATE_FORMAT: &'static str;
    /// Query parameter carrying the API key, when one is configured.
    const API_KEY_PARAM: &'static str;
    /// Provider local time, seconds east of UTC.
    const UTC_OFFSET_SECS: i32 = 9 * 3600;
    /// Fixed query parameters sent with every request.
    const EXTRA_QUERY: &'static [(&'static str, &'static str)] = &[];

    fn open(body: Self::Body) -> Envelope<Self::Row>;

    fn to_reading(row: Self::Row) -> SubRegionReading;
}

/// A source of region snapshots.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn region(&self) -> Region;

    fn provider(&self) -> &'static str;

    /// Fetches the snapshot for the slot one hour before `now`.
    async fn fetch_snapshot_at(&self, now: DateTime<Utc>) -> Result<RegionSnapshot>;

    async fn fetch_snapshot(&self) -> Result<RegionSnapshot> {
        self.fetch_snapshot_at(Utc::now()).await
    }
}

/// The most recent slot a provider guarantees to have published: one hour
/// before `now`, truncated to the hour, in provider local time.
pub fn observation_slot(now: DateTime<Utc>, utc_offset_secs: i32) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(utc_offset_secs).unwrap_or_else(|| Utc.fix());
    let slot = (now - TimeDelta::hours(1)).with_timezone(&offset);
    slot.duration_trunc(TimeDelta::hours(1)).unwrap_or(slot)
}

/// The shared adapter algorithm, parameterized by schema and HTTP client.
pub struct RegionalAdapter<S, C> {
    base_url: String,
    client: C,
    _schema: PhantomData<fn() -> S>,
}

impl<S: ProviderSchema, C: HttpClient> RegionalAdapter<S, C> {
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        Self {
            base_url: base_url.into(),
            client,
            _schema: PhantomData,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

#[async_trait]
impl<S: ProviderSchema, C: HttpClient> ProviderAdapter for RegionalAdapter<S, C> {
    fn region(&self) -> Region {
        S::REGION
    }

    fn provider(&self) -> &'static str {
        S::NAME
    }

    #[tracing::instrument(skip(self), fields(provider = S::NAME))]
    async fn fetch_snapshot_at(&self, now: DateTime<Utc>) -> Result<RegionSnapshot> {
        let slot = observation_slot(now, S::UTC_OFFSET_SECS);
        let date_key = slot.format(S::DATE_FORMAT).to_string();

        let mut query: Vec<(&str, &str)> = vec![(S::DATE_PARAM, date_key.as_str())];
        query.extend_from_slice(S::EXTRA_QUERY);

        debug!(date_key = %date_key, url = %self.base_url, "Requesting provider data");
        let bytes = fetch_bytes(&self.client, &self.base_url, &query)
            .await
            .map_err(|e| {
                warn!(error = %e, "Provider request failed");
                AirQualityError::unavailable(S::NAME, e.to_string())
            })?;

        let rows = decode::<S>(&bytes)?;
        let readings: Vec<SubRegionReading> = rows.into_iter().map(S::to_reading).collect();

        info!(date_key = %date_key, stations = readings.len(), "Provider data normalized");
        Ok(RegionSnapshot::from_readings(S::REGION, slot, date_key, readings))
    }
}

/// Parses a raw body and checks the provider's envelope before trusting it.
pub fn decode<S: ProviderSchema>(bytes: &[u8]) -> Result<Vec<S::Row>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AirQualityError::unavailable(S::NAME, "no response body"));
    }

    let body: Option<S::Body> = serde_json::from_slice(bytes).map_err(|e| {
        AirQualityError::unavailable(S::NAME, format!("malformed response body: {e}"))
    })?;
    let Some(body) = body else {
        return Err(AirQualityError::unavailable(S::NAME, "no response body"));
    };

    match S::open(body) {
        Envelope::Missing => Err(AirQualityError::unavailable(S::NAME, "no response body")),
        Envelope::Rejected { code, message } => {
            warn!(provider = S::NAME, code = %code, message = %message, "Provider rejected request");
            Err(AirQualityError::bad_response(S::NAME, code, message))
        }
        Envelope::Accepted(rows) => Ok(rows),
    }
}
