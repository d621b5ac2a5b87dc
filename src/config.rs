//! Provider endpoints, API keys and HTTP timeouts.
//!
//! Configuration comes from the environment (after `dotenvy` has loaded any
//! `.env` file) or from a JSON file:
//!
//! ```json
//! {
//!   "seoul": { "base_url": "http://openapi.seoul.go.kr:8088/...", "api_key": "..." },
//!   "busan": { "base_url": "https://apis.data.go.kr/...", "api_key": "..." },
//!   "timeout_secs": 30,
//!   "connect_timeout_secs": 10
//! }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_SEOUL_BASE_URL: &str =
    "http://openapi.seoul.go.kr:8088/sample/json/ListAirQualityByDistrictService/1/25/";
pub const DEFAULT_BUSAN_BASE_URL: &str =
    "https://apis.data.go.kr/6260000/AirQualityInfoService/getAirQualityInfoClassifiedByStation";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl ProviderConfig {
    fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirQualityConfig {
    #[serde(default = "default_seoul")]
    pub seoul: ProviderConfig,
    #[serde(default = "default_busan")]
    pub busan: ProviderConfig,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_seoul() -> ProviderConfig {
    ProviderConfig::new(DEFAULT_SEOUL_BASE_URL)
}

fn default_busan() -> ProviderConfig {
    ProviderConfig::new(DEFAULT_BUSAN_BASE_URL)
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

impl Default for AirQualityConfig {
    fn default() -> Self {
        Self {
            seoul: default_seoul(),
            busan: default_busan(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl AirQualityConfig {
    /// Loads the config from a JSON file at `path`. Omitted keys take defaults.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{path}'"))?;
        serde_json::from_str(&content).with_context(|| format!("failed to parse config file '{path}'"))
    }

    /// Reads `SEOUL_API_BASE_URL`, `SEOUL_API_KEY`, `BUSAN_API_BASE_URL`,
    /// `BUSAN_API_KEY`, `AIRQ_HTTP_TIMEOUT_SECS` and
    /// `AIRQ_HTTP_CONNECT_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = |prefix: &str, default_url: &str| ProviderConfig {
            base_url: lookup(format!("{prefix}_API_BASE_URL").as_str())
                .unwrap_or_else(|| default_url.to_string()),
            api_key: lookup(format!("{prefix}_API_KEY").as_str()).filter(|k| !k.is_empty()),
        };
        let secs = |key: &str, default: u64| -> Result<u64> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{key} must be a whole number of seconds, got '{raw}'")),
                None => Ok(default),
            }
        };

        Ok(Self {
            seoul: provider("SEOUL", DEFAULT_SEOUL_BASE_URL),
            busan: provider("BUSAN", DEFAULT_BUSAN_BASE_URL),
            timeout_secs: secs("AIRQ_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            connect_timeout_secs: secs(
                "AIRQ_HTTP_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::env;
    use std::fs;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = AirQualityConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AirQualityConfig::default());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_environment_overrides() {
        let config = AirQualityConfig::from_lookup(lookup_from(&[
            ("BUSAN_API_BASE_URL", "http://localhost:9000/busan"),
            ("BUSAN_API_KEY", "secret"),
            ("SEOUL_API_KEY", ""),
            ("AIRQ_HTTP_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.busan.base_url, "http://localhost:9000/busan");
        assert_eq!(config.busan.api_key.as_deref(), Some("secret"));
        assert_eq!(config.seoul.api_key, None);
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn test_bad_timeout_is_an_error() {
        let result =
            AirQualityConfig::from_lookup(lookup_from(&[("AIRQ_HTTP_TIMEOUT_SECS", "soon")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_json_with_partial_keys() {
        let path = format!("{}/airq_config_test.json", env::temp_dir().display());
        fs::write(
            &path,
            r#"{ "seoul": { "base_url": "http://seoul.test/", "api_key": "k" }, "timeout_secs": 3 }"#,
        )
        .unwrap();

        let config = AirQualityConfig::load(&path).unwrap();
        assert_eq!(config.seoul.base_url, "http://seoul.test/");
        assert_eq!(config.seoul.api_key.as_deref(), Some("k"));
        assert_eq!(config.busan, default_busan());
        assert_eq!(config.timeout_secs, 3);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(AirQualityConfig::load("/nonexistent/airq.json").is_err());
    }
}
