use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Full spectrum payload for one observation.
///
/// Wavelength and flux arrays arrive as the instrument produced them: they
/// may be unsorted and may contain nulls (deserialized as NaN). The
/// preprocessor owns cleanup; nothing here is validated.
#[derive(Debug, Clone, Deserialize)]
pub struct Spectrum {
    /// Spectrum ID.
    pub id: i64,
    /// Object this spectrum belongs to.
    pub obj_id: String,
    /// Instrument that took the observation.
    #[serde(default)]
    pub instrument_id: Option<i64>,
    #[serde(default)]
    pub instrument_name: Option<String>,
    /// When the observation was taken.
    #[serde(default, deserialize_with = "crate::timefmt::deserialize_opt_time")]
    pub observed_at: Option<DateTime<Utc>>,
    /// Wavelengths in Angstrom.
    #[serde(deserialize_with = "nullable_floats")]
    pub wavelengths: Vec<f64>,
    /// Flux values, one per wavelength.
    #[serde(deserialize_with = "nullable_floats")]
    pub fluxes: Vec<f64>,
}

/// JSON has no NaN; the server sends `null` for missing samples.
/// Map those to NaN so the preprocessor's finite-mask drops them.
fn nullable_floats<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Option<f64>> = Vec::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}
