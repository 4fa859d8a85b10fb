/// Processed-spectrum cache errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache directory unusable: {path}: {reason}")]
    DirUnusable { path: String, reason: String },

    #[error("cache write failed: {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}
