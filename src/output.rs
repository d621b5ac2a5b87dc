//! Output formatting for region snapshots.
//!
//! Supports debug logging, JSON serialization, and a plain-text table.

use anyhow::Result;
use std::fmt::Write;
use tracing::debug;

use crate::model::RegionSnapshot;

/// Logs a snapshot using Rust's debug pretty-print format.
pub fn print_pretty(snapshot: &RegionSnapshot) {
    debug!("{:#?}", snapshot);
}

/// Serializes a snapshot as pretty-printed JSON. Absent readings become `null`.
pub fn to_json(snapshot: &RegionSnapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

fn reading(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v}"))
}

/// Renders a snapshot as a header line plus one row per station.
pub fn render_table(snapshot: &RegionSnapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} @ {} (key {}): PM10 avg {} [{}], {} station(s)",
        snapshot.region,
        snapshot.observed_at.format("%Y-%m-%d %H:%M %:z"),
        snapshot.date_key,
        snapshot
            .pm10_average
            .map_or_else(|| "-".to_string(), |v| format!("{v:.1}")),
        snapshot.pm10_grade,
        snapshot.total_count,
    );
    let _ = writeln!(
        out,
        "{:<16} {:>7} {:>7} {:>7} {:>7} {:>7} {:>7}  {}",
        "station", "pm10", "pm2.5", "o3", "no2", "co", "so2", "grade"
    );
    for s in &snapshot.stations {
        let _ = writeln!(
            out,
            "{:<16} {:>7} {:>7} {:>7} {:>7} {:>7} {:>7}  {}",
            s.station,
            reading(s.pm10),
            reading(s.pm25),
            reading(s.o3),
            reading(s.no2),
            reading(s.co),
            reading(s.so2),
            s.pm10_grade,
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Region, SubRegionReading};
    use chrono::{FixedOffset, TimeZone};

    fn snapshot() -> RegionSnapshot {
        let observed_at = FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 16, 12, 0, 0)
            .unwrap();
        let stations = vec![
            SubRegionReading::new("광복동").with_pm10(Some(52.0)),
            SubRegionReading::new("초량동").with_pm10(None),
        ];
        RegionSnapshot::from_readings(Region::Busan, observed_at, "2026101612".into(), stations)
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&snapshot());
    }

    #[test]
    fn test_json_marks_missing_readings_null() {
        let json: serde_json::Value = serde_json::from_str(&to_json(&snapshot()).unwrap()).unwrap();
        assert_eq!(json["total_count"], 2);
        assert_eq!(json["pm10_average"], 52.0);
        assert_eq!(json["pm10_grade"], "moderate");
        assert!(json["stations"][1]["pm10"].is_null());
        assert_eq!(json["observed_at"], "2026-10-16T12:00:00+09:00");
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let table = render_table(&snapshot());
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("busan @ 2026-10-16 12:00 +09:00"));
        assert!(lines[0].contains("PM10 avg 52.0 [Moderate]"));
        assert!(lines[3].contains("초량동"));
        assert!(lines[3].contains("Unknown"));
    }
}
