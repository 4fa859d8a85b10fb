/// ONNX classifier errors.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model load failed: {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("unexpected output shape {shape}: expected {expected} logits")]
    OutputShape { shape: String, expected: usize },
}
