//! Busan air-quality feed published through the public-data portal.
//!
//! Readings arrive as strings (`"-"` when a sensor is down) and the portal
//! wraps everything in a `header` / `body.items.item` envelope.

use serde::Deserialize;

use super::lenient;
use super::{Envelope, ProviderSchema};
use crate::model::{Region, SubRegionReading};

const SUCCESS_CODE: &str = "00";

pub struct BusanSchema;

#[derive(Debug, Deserialize)]
pub struct BusanBody {
    #[serde(rename = "getAirQualityInfoClassifiedByStation")]
    response: Option<BusanResponse>,
}

#[derive(Debug, Deserialize)]
struct BusanResponse {
    header: Option<BusanHeader>,
    body: Option<BusanPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BusanHeader {
    result_code: String,
    #[serde(default)]
    result_msg: String,
}

#[derive(Debug, Deserialize)]
struct BusanPayload {
    items: Option<BusanItems>,
}

#[derive(Debug, Deserialize)]
struct BusanItems {
    #[serde(default)]
    item: Vec<BusanRow>,
}

#[derive(Debug, Deserialize)]
pub struct BusanRow {
    site: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pm10: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pm25: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    o3: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    no2: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    co: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    so2: Option<f64>,
}

impl ProviderSchema for BusanSchema {
    type Body = BusanBody;
    type Row = BusanRow;

    const NAME: &'static str = "busan";
    const REGION: Region = Region::Busan;
    const DATE_PARAM: &'static str = "controlnumber";
    const DATE_FORMAT: &'static str = "%Y%m%d%H";
    const API_KEY_PARAM: &'static str = "serviceKey";
    const EXTRA_QUERY: &'static [(&'static str, &'static str)] = &[("resultType", "json")];

    fn open(body: BusanBody) -> Envelope<BusanRow> {
        let Some(response) = body.response else {
            return Envelope::Missing;
        };
        let Some(header) = response.header else {
            return Envelope::Missing;
        };
        if header.result_code != SUCCESS_CODE {
            return Envelope::Rejected {
                code: header.result_code,
                message: header.result_msg,
            };
        }

        let rows = response
            .body
            .and_then(|b| b.items)
            .map(|items| items.item)
            .unwrap_or_default();
        Envelope::Accepted(rows)
    }

    fn to_reading(row: BusanRow) -> SubRegionReading {
        SubRegionReading {
            pm25: row.pm25,
            o3: row.o3,
            no2: row.no2,
            co: row.co,
            so2: row.so2,
            ..SubRegionReading::new(row.site)
        }
        .with_pm10(row.pm10)
    }
}
