/// Spectrum data-quality errors raised during preprocessing.
///
/// These are permanent for a given spectrum: the same payload will fail the
/// same way on every attempt, so the listener skips rather than retries.
#[derive(Debug, thiserror::Error)]
pub enum SpectrumError {
    #[error("mismatched lengths: {wavelengths} wavelengths vs {fluxes} fluxes")]
    LengthMismatch { wavelengths: usize, fluxes: usize },

    #[error("no finite values in spectrum")]
    NoFiniteValues,

    #[error("too few data points after cleaning: {remaining}")]
    TooFewPoints { remaining: usize },
}
