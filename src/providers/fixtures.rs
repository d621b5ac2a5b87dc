//! Representative provider payloads used by the adapter tests.

/// Seoul district feed, three stations, PM10 20/40/300.
pub const SEOUL_OK: &str = r#"{
  "ListAirQualityByDistrictService": {
    "list_total_count": 3,
    "RESULT": { "CODE": "INFO-000", "MESSAGE": "정상 처리되었습니다" },
    "row": [
      { "MSRDATE": "202610161200", "MSRADMCODE": "111123", "MSRSTENAME": "종로구",
        "MAXINDEX": "45", "GRADE": "보통", "POLLUTANT": "PM10",
        "NITROGEN": 0.021, "OZONE": 0.034, "CARBON": 0.4, "SULFUROUS": 0.003,
        "PM10": 20, "PM25": 11 },
      { "MSRDATE": "202610161200", "MSRADMCODE": "111121", "MSRSTENAME": "중구",
        "NITROGEN": 0.025, "OZONE": 0.031, "CARBON": 0.5, "SULFUROUS": 0.003,
        "PM10": 40, "PM25": 22 },
      { "MSRDATE": "202610161200", "MSRADMCODE": "111131", "MSRSTENAME": "용산구",
        "NITROGEN": 0.030, "OZONE": 0.020, "CARBON": 0.6, "SULFUROUS": 0.004,
        "PM10": 300, "PM25": 140 }
    ]
  }
}"#;

/// Seoul answers "no data" with a bare top-level RESULT and no service block.
pub const SEOUL_NO_DATA: &str = r#"{
  "RESULT": { "CODE": "INFO-200", "MESSAGE": "해당하는 데이터가 없습니다." }
}"#;

/// Busan station feed with string-typed readings and a "-" placeholder.
pub const BUSAN_OK: &str = r#"{
  "getAirQualityInfoClassifiedByStation": {
    "header": { "resultCode": "00", "resultMsg": "NORMAL SERVICE." },
    "body": {
      "items": {
        "item": [
          { "site": "광복동", "areaIndex": "52", "controlnumber": "2026101612",
            "repItem": "PM10", "repVal": "52",
            "pm10": "52", "pm25": "23", "o3": "0.031", "no2": "0.018",
            "co": "0.3", "so2": "0.004" },
          { "site": "초량동", "controlnumber": "2026101612",
            "pm10": "-", "pm25": "19", "o3": "0.029", "no2": "0.021",
            "co": "0.4", "so2": "0.003" },
          { "site": "태종대", "controlnumber": "2026101612",
            "pm10": "28", "pm25": "12", "o3": "0.040", "no2": "0.006",
            "co": "0.2", "so2": "0.002" }
        ]
      },
      "numOfRows": 10,
      "pageNo": 1,
      "totalCount": 3
    }
  }
}"#;

pub const BUSAN_KEY_ERROR: &str = r#"{
  "getAirQualityInfoClassifiedByStation": {
    "header": { "resultCode": "30", "resultMsg": "SERVICE KEY IS NOT REGISTERED ERROR." }
  }
}"#;
