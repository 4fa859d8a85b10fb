//! Error handling for cider.
//! One error enum per subsystem, `thiserror` only; `anyhow` stays at the binary boundary.

pub mod api_error;
pub mod cache_error;
pub mod config_error;
pub mod model_error;
pub mod spectrum_error;

pub use api_error::ApiError;
pub use cache_error::CacheError;
pub use config_error::ConfigError;
pub use model_error::ModelError;
pub use spectrum_error::SpectrumError;

/// Result alias used across the workspace.
pub type CiderResult<T> = Result<T, CiderError>;

/// Top-level error aggregating all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum CiderError {
    #[error("api: {0}")]
    ApiError(#[from] ApiError),

    #[error("spectrum: {0}")]
    SpectrumError(#[from] SpectrumError),

    #[error("model: {0}")]
    ModelError(#[from] ModelError),

    #[error("cache: {0}")]
    CacheError(#[from] CacheError),

    #[error("config: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CiderError {
    /// Whether retrying the same operation later could succeed.
    ///
    /// Transport-level failures are transient; everything else (bad data,
    /// rejected requests, broken config) fails the same way every time.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::ApiError(e) => e.is_transient(),
            _ => false,
        }
    }
}
