//! Tolerant numeric parsing for public-data feeds, which publish readings as
//! JSON numbers, numeric strings, or placeholders such as `"-"`.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Deserializes an optional reading; placeholders and garbage become `None`.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawNumber::Number(v)) => Some(v),
        Some(RawNumber::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(RawNumber::Other(_)) | None => None,
    }
    .filter(|v| v.is_finite()))
}
