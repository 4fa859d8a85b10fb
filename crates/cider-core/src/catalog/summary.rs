use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Minimal listing record returned by the spectra query with
/// `minimalPayload=true`.
#[derive(Debug, Clone, Deserialize)]
pub struct SpectrumSummary {
    /// Spectrum ID.
    pub id: i64,
    /// Object this spectrum belongs to.
    pub obj_id: String,
    /// Last modification time on the server.
    #[serde(default, deserialize_with = "crate::timefmt::deserialize_opt_time")]
    pub modified: Option<DateTime<Utc>>,
}
