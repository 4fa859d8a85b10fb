use chrono::{DateTime, Utc};

use crate::catalog::{Source, Spectrum, SpectrumSummary};
use crate::errors::CiderResult;

/// Access to the spectrum catalog.
///
/// Implemented by the SkyPortal client; the listener engine only sees this
/// seam, so tests can run against an in-memory double.
pub trait ISpectrumCatalog: Send + Sync {
    /// List spectra modified inside the window, minimal payload.
    fn recent_spectra(
        &self,
        instrument_ids: &[i64],
        modified_after: DateTime<Utc>,
        modified_before: DateTime<Utc>,
    ) -> CiderResult<Vec<SpectrumSummary>>;

    /// Fetch the full payload for one spectrum.
    fn spectrum(&self, id: i64) -> CiderResult<Spectrum>;

    /// Fetch the catalog record for one object.
    fn source(&self, obj_id: &str) -> CiderResult<Source>;

    /// Attach a text comment to a source.
    fn post_comment(&self, obj_id: &str, text: &str) -> CiderResult<()>;
}
