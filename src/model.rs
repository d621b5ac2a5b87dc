//! Normalized data model shared by every provider.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::AirQualityError;
use crate::grade::{Grade, grade_for, grade_for_average};
use crate::stats::mean;

/// A top-level area publishing its own air-quality feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Seoul,
    Busan,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Seoul, Region::Busan];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Seoul => "seoul",
            Region::Busan => "busan",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = AirQualityError;

    /// Matches the canonical lowercase name exactly. The error carries the
    /// token exactly as given.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.as_str() == token)
            .ok_or_else(|| AirQualityError::unsupported(token))
    }
}

/// One monitoring station's readings. Any pollutant may be missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubRegionReading {
    pub station: String,
    pub pm10: Option<f64>,
    pub pm25: Option<f64>,
    pub o3: Option<f64>,
    pub no2: Option<f64>,
    pub co: Option<f64>,
    pub so2: Option<f64>,
    pub pm10_grade: Grade,
}

impl SubRegionReading {
    /// Surrounding whitespace in the provider's station name is dropped.
    pub fn new(station: impl Into<String>) -> Self {
        let station: String = station.into();
        Self {
            station: station.trim().to_string(),
            pm10: None,
            pm25: None,
            o3: None,
            no2: None,
            co: None,
            so2: None,
            pm10_grade: Grade::Unknown,
        }
    }

    pub fn with_pm10(mut self, pm10: Option<f64>) -> Self {
        self.pm10 = pm10;
        self.pm10_grade = pm10.map_or(Grade::Unknown, grade_for);
        self
    }
}

/// Region-wide result for one observation slot.
///
/// `pm10_average` and `pm10_grade` always describe every station the provider
/// returned, even after [`RegionSnapshot::filter_station`] narrows `stations`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSnapshot {
    pub observed_at: DateTime<FixedOffset>,
    pub date_key: String,
    pub region: Region,
    pub pm10_average: Option<f64>,
    pub pm10_grade: Grade,
    pub stations: Vec<SubRegionReading>,
    pub total_count: usize,
}

impl RegionSnapshot {
    /// Builds a snapshot, deriving the PM10 average over the stations that
    /// report PM10 and grading it.
    pub fn from_readings(
        region: Region,
        observed_at: DateTime<FixedOffset>,
        date_key: String,
        stations: Vec<SubRegionReading>,
    ) -> Self {
        let pm10_values: Vec<f64> = stations.iter().filter_map(|s| s.pm10).collect();
        let pm10_average = mean(&pm10_values);

        Self {
            observed_at,
            date_key,
            region,
            pm10_average,
            pm10_grade: grade_for_average(pm10_average),
            total_count: stations.len(),
            stations,
        }
    }

    /// Keeps only stations whose name equals `station` exactly (case-sensitive).
    /// The region-level average and grade are left untouched.
    pub fn filter_station(self, station: &str) -> Self {
        let stations: Vec<SubRegionReading> = self
            .stations
            .into_iter()
            .filter(|s| s.station == station)
            .collect();

        Self {
            total_count: stations.len(),
            stations,
            ..self
        }
    }
}
