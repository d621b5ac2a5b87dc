//! Entry point for air-quality queries.

use tracing::{debug, info};

use crate::error::Result;
use crate::model::RegionSnapshot;
use crate::router::RegionRouter;

pub struct AirQualityService {
    router: RegionRouter,
}

impl AirQualityService {
    pub fn new(router: RegionRouter) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &RegionRouter {
        &self.router
    }

    /// Fetches the current snapshot for `region`, optionally narrowed to one
    /// station.
    ///
    /// `sub_region` matches station names exactly and case-sensitively after
    /// trimming surrounding whitespace; a blank filter is ignored. A filter
    /// that matches nothing yields an empty station list, not an error. The
    /// region average and grade always cover every station.
    ///
    /// Router and provider errors are returned unchanged.
    #[tracing::instrument(skip(self))]
    pub async fn get_air_quality(
        &self,
        region: &str,
        sub_region: Option<&str>,
    ) -> Result<RegionSnapshot> {
        let adapter = self.router.resolve(region)?;
        let snapshot = adapter.fetch_snapshot().await?;

        let Some(station) = sub_region.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(snapshot);
        };

        let filtered = snapshot.filter_station(station);
        if filtered.stations.is_empty() {
            info!(station, "No station matched filter");
        } else {
            debug!(station, matches = filtered.total_count, "Station filter applied");
        }
        Ok(filtered)
    }
}
