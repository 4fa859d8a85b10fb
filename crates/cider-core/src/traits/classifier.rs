use crate::catalog::Spectrum;
use crate::errors::CiderResult;
use crate::spectra::ClassScores;

/// Spectrum classification backend.
///
/// Implementations own preprocessing: data-quality problems surface as
/// [`crate::errors::SpectrumError`], inference problems as
/// [`crate::errors::ModelError`]. The listener uses that split to decide
/// between skipping a spectrum and failing loudly.
pub trait IClassifier: Send + Sync {
    /// Classify a spectrum into per-class probability scores.
    fn classify(&self, spectrum: &Spectrum) -> CiderResult<ClassScores>;

    /// Human-readable model name.
    fn name(&self) -> &str;
}
