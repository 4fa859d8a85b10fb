use super::Source;
use crate::spectra::ClassScores;

/// Classification result for one spectrum, ready for reporting.
///
/// The pipeline produces at most one of these per fetched spectrum.
#[derive(Debug, Clone)]
pub struct ClassificationReport {
    /// Object the spectrum belongs to.
    pub obj_id: String,
    /// Spectrum that was classified.
    pub spectrum_id: i64,
    /// Per-class probabilities from the model.
    pub scores: ClassScores,
    /// Catalog context, when enrichment succeeded.
    pub source: Option<Source>,
}

impl ClassificationReport {
    pub fn new(obj_id: String, spectrum_id: i64, scores: ClassScores) -> Self {
        Self {
            obj_id,
            spectrum_id,
            scores,
            source: None,
        }
    }

    /// Attach catalog context to the report.
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }
}
