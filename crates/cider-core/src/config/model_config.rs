use serde::{Deserialize, Serialize};

use super::defaults;

/// Classifier model configuration.
///
/// The grid parameters must match the input layer of the ONNX model;
/// the defaults fit the bundled `SpectraCNN1D_4650` network.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the ONNX model file.
    pub model_path: String,
    /// Lower edge of the resample grid in Angstrom.
    pub grid_min_angstrom: f64,
    /// Upper edge of the resample grid in Angstrom.
    pub grid_max_angstrom: f64,
    /// Number of grid points the model input layer expects.
    pub grid_points: usize,
    /// ONNX Runtime intra-op thread count.
    pub intra_threads: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_path: defaults::DEFAULT_MODEL_PATH.to_string(),
            grid_min_angstrom: defaults::DEFAULT_GRID_MIN_ANGSTROM,
            grid_max_angstrom: defaults::DEFAULT_GRID_MAX_ANGSTROM,
            grid_points: defaults::DEFAULT_GRID_POINTS,
            intra_threads: defaults::DEFAULT_INTRA_THREADS,
        }
    }
}
