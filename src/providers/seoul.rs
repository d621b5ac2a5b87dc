//! Seoul Open Data Plaza: district air-quality feed.
//!
//! Success is reported as `RESULT.CODE == "INFO-000"` inside the service
//! block. When the service has nothing to return it drops the service block
//! entirely and answers with a bare top-level `RESULT`.

use serde::Deserialize;

use super::lenient;
use super::{Envelope, ProviderSchema};
use crate::model::{Region, SubRegionReading};

const SUCCESS_CODE: &str = "INFO-000";

pub struct SeoulSchema;

#[derive(Debug, Deserialize)]
pub struct SeoulBody {
    #[serde(rename = "ListAirQualityByDistrictService")]
    service: Option<SeoulService>,
    #[serde(rename = "RESULT")]
    result: Option<SeoulResult>,
}

#[derive(Debug, Deserialize)]
struct SeoulService {
    #[serde(rename = "RESULT")]
    result: Option<SeoulResult>,
    #[serde(default)]
    row: Vec<SeoulRow>,
}

#[derive(Debug, Deserialize)]
struct SeoulResult {
    #[serde(rename = "CODE")]
    code: String,
    #[serde(rename = "MESSAGE", default)]
    message: String,
}

#[derive(Debug, Deserialize)]
pub struct SeoulRow {
    #[serde(rename = "MSRSTENAME")]
    station: String,
    #[serde(rename = "PM10", default, deserialize_with = "lenient::number")]
    pm10: Option<f64>,
    #[serde(rename = "PM25", default, deserialize_with = "lenient::number")]
    pm25: Option<f64>,
    #[serde(rename = "OZONE", default, deserialize_with = "lenient::number")]
    o3: Option<f64>,
    #[serde(rename = "NITROGEN", default, deserialize_with = "lenient::number")]
    no2: Option<f64>,
    #[serde(rename = "CARBON", default, deserialize_with = "lenient::number")]
    co: Option<f64>,
    #[serde(rename = "SULFUROUS", default, deserialize_with = "lenient::number")]
    so2: Option<f64>,
}

impl ProviderSchema for SeoulSchema {
    type Body = SeoulBody;
    type Row = SeoulRow;

    const NAME: &'static str = "seoul";
    const REGION: Region = Region::Seoul;
    const DATE_PARAM: &'static str = "date";
    const DATE_FORMAT: &'static str = "%Y%m%d";
    const API_KEY_PARAM: &'static str = "KEY";

    fn open(body: SeoulBody) -> Envelope<SeoulRow> {
        match (body.service, body.result) {
            (Some(service), _) => match service.result {
                Some(result) if result.code == SUCCESS_CODE => Envelope::Accepted(service.row),
                Some(result) => Envelope::Rejected {
                    code: result.code,
                    message: result.message,
                },
                None => Envelope::Missing,
            },
            (None, Some(result)) => Envelope::Rejected {
                code: result.code,
                message: result.message,
            },
            (None, None) => Envelope::Missing,
        }
    }

    fn to_reading(row: SeoulRow) -> SubRegionReading {
        SubRegionReading {
            pm25: row.pm25,
            o3: row.o3,
            no2: row.no2,
            co: row.co,
            so2: row.so2,
            ..SubRegionReading::new(row.station)
        }
        .with_pm10(row.pm10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AirQualityError;
    use crate::fetch::testing::CannedClient;
    use crate::grade::Grade;
    use crate::providers::fixtures::{SEOUL_NO_DATA, SEOUL_OK};
    use crate::providers::{ProviderAdapter, RegionalAdapter, decode};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_decode_rows_in_provider_order() {
        let rows = decode::<SeoulSchema>(SEOUL_OK.as_bytes()).unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.station.as_str()).collect();
        assert_eq!(names, ["종로구", "중구", "용산구"]);
    }

    #[test]
    fn test_row_maps_field_for_field() {
        let row = decode::<SeoulSchema>(SEOUL_OK.as_bytes())
            .unwrap()
            .into_iter()
            .next()
            .unwrap();
        let reading = SeoulSchema::to_reading(row);
        assert_eq!(reading.station, "종로구");
        assert_eq!(reading.pm10, Some(20.0));
        assert_eq!(reading.pm25, Some(11.0));
        assert_eq!(reading.o3, Some(0.034));
        assert_eq!(reading.no2, Some(0.021));
        assert_eq!(reading.co, Some(0.4));
        assert_eq!(reading.so2, Some(0.003));
        assert_eq!(reading.pm10_grade, Grade::Good);
    }

    #[test]
    fn test_top_level_result_is_rejection() {
        let err = decode::<SeoulSchema>(SEOUL_NO_DATA.as_bytes()).unwrap_err();
        match err {
            AirQualityError::ProviderBadResponse { provider, code, message } => {
                assert_eq!(provider, "seoul");
                assert_eq!(code, "INFO-200");
                assert_eq!(message, "해당하는 데이터가 없습니다.");
            }
            other => panic!("expected bad response, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_envelope_is_unavailable() {
        let err = decode::<SeoulSchema>(br#"{"something_else": {}}"#).unwrap_err();
        assert!(matches!(err, AirQualityError::ProviderUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_fetch_snapshot_end_to_end() {
        let adapter: RegionalAdapter<SeoulSchema, _> =
            RegionalAdapter::new("http://seoul.test/air", CannedClient::ok(SEOUL_OK));
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 4, 30, 0).unwrap();

        let snapshot = adapter.fetch_snapshot_at(now).await.unwrap();

        assert_eq!(snapshot.region, Region::Seoul);
        assert_eq!(snapshot.date_key, "20261016");
        assert_eq!(snapshot.observed_at.to_rfc3339(), "2026-10-16T12:00:00+09:00");
        assert_eq!(snapshot.pm10_average, Some(120.0));
        assert_eq!(snapshot.pm10_grade, Grade::Unhealthy);
        assert_eq!(snapshot.total_count, 3);
        assert_eq!(
            adapter_url(&adapter),
            "http://seoul.test/air?date=20261016"
        );
    }

    fn adapter_url(adapter: &RegionalAdapter<SeoulSchema, CannedClient>) -> String {
        adapter.client().last_url()
    }
}
