use serde::Serialize;
use std::fmt;

/// Discrete PM10 air-quality grade.
///
/// Variants are declared in severity order so that `Ord` follows severity;
/// `Unknown` sorts below every real grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Unknown,
    Good,
    Moderate,
    Unhealthy,
    VeryUnhealthy,
}

impl Grade {
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Unknown => "Unknown",
            Grade::Good => "Good",
            Grade::Moderate => "Moderate",
            Grade::Unhealthy => "Unhealthy",
            Grade::VeryUnhealthy => "Very Unhealthy",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Converts a PM10 concentration (µg/m³) into a [`Grade`].
///
/// | Range       | Grade          |
/// |-------------|----------------|
/// | <= 30       | Good           |
/// | <= 80       | Moderate       |
/// | <= 150      | Unhealthy      |
/// | > 150       | Very Unhealthy |
/// | NaN         | Unknown        |
pub fn grade_for(pm10: f64) -> Grade {
    match pm10 {
        p if p.is_nan() => Grade::Unknown,
        p if p <= 30.0 => Grade::Good,
        p if p <= 80.0 => Grade::Moderate,
        p if p <= 150.0 => Grade::Unhealthy,
        _ => Grade::VeryUnhealthy,
    }
}

/// Grades an average that may be absent because no station reported PM10.
pub fn grade_for_average(pm10: Option<f64>) -> Grade {
    pm10.map_or(Grade::Unknown, grade_for)
}
