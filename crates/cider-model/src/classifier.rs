//! ONNX Runtime classifier.
//!
//! Loads the classification network via the `ort` crate (v2) and runs
//! single-spectrum inference on the `[1, 1, grid_points]` input layout.

use std::path::Path;
use std::sync::Mutex;

use cider_core::catalog::Spectrum;
use cider_core::config::ModelConfig;
use cider_core::errors::ModelError;
use cider_core::spectra::{ClassScores, TransientClass};
use cider_core::traits::IClassifier;
use cider_core::CiderResult;
use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

use crate::preprocess::{preprocess, WavelengthGrid};
use crate::softmax::softmax;

/// ONNX-backed spectrum classifier.
///
/// Wraps an ort `Session` and handles resampling, inference, and
/// conversion of the output logits into class probabilities.
#[derive(Debug)]
pub struct SpectrumClassifier {
    /// Session requires `&mut self` for `run`, so we wrap in Mutex
    /// to satisfy the `&self` trait requirement.
    session: Mutex<Session>,
    grid: WavelengthGrid,
    model_name: String,
}

// Safety: Session is Send but not Sync by default. The Mutex provides Sync.
unsafe impl Sync for SpectrumClassifier {}

impl SpectrumClassifier {
    /// Load the ONNX model named by the configuration.
    ///
    /// # Errors
    /// Returns `ModelError::LoadFailed` if the model cannot be loaded.
    pub fn load(config: &ModelConfig) -> CiderResult<Self> {
        let path = Path::new(&config.model_path);
        if !path.exists() {
            return Err(ModelError::LoadFailed {
                path: config.model_path.clone(),
                reason: "model file not found".to_string(),
            }
            .into());
        }

        let session = Session::builder()
            .map_err(|e| ModelError::LoadFailed {
                path: config.model_path.clone(),
                reason: e.to_string(),
            })?
            .with_intra_threads(config.intra_threads)
            .map_err(|e| ModelError::LoadFailed {
                path: config.model_path.clone(),
                reason: e.to_string(),
            })?
            .commit_from_file(&config.model_path)
            .map_err(|e| ModelError::LoadFailed {
                path: config.model_path.clone(),
                reason: e.to_string(),
            })?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        let grid = WavelengthGrid::from_config(config);
        debug!(model = %model_name, grid_points = grid.points(), "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            grid,
            model_name,
        })
    }

    /// Run the network on one preprocessed input, returning class
    /// probabilities in model-head order.
    fn infer(&self, input: Vec<f32>) -> CiderResult<Vec<f64>> {
        let len = input.len();
        let tensor = Tensor::from_array((vec![1i64, 1, len as i64], input)).map_err(|e| {
            ModelError::InferenceFailed {
                reason: format!("tensor creation error: {e}"),
            }
        })?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| ModelError::InferenceFailed {
                reason: format!("session lock poisoned: {e}"),
            })?;

        let outputs = session
            .run(ort::inputs![tensor])
            .map_err(|e| ModelError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| ModelError::InferenceFailed {
                reason: "no output tensor".to_string(),
            })?;

        let (shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| ModelError::InferenceFailed {
                reason: format!("tensor extraction failed: {e}"),
            })?;

        // Accept a [1, classes] batch head or a bare [classes] vector.
        let logits: &[f32] = if shape.len() == 2 && shape[0] == 1 {
            let classes = shape[1] as usize;
            &data[..classes]
        } else if shape.len() == 1 {
            let classes = shape[0] as usize;
            &data[..classes]
        } else {
            return Err(ModelError::OutputShape {
                shape: format!("{shape:?}"),
                expected: TransientClass::COUNT,
            }
            .into());
        };

        if logits.len() != TransientClass::COUNT {
            return Err(ModelError::OutputShape {
                shape: format!("{shape:?}"),
                expected: TransientClass::COUNT,
            }
            .into());
        }

        Ok(softmax(logits))
    }
}

impl IClassifier for SpectrumClassifier {
    fn classify(&self, spectrum: &Spectrum) -> CiderResult<ClassScores> {
        let input = preprocess(&spectrum.wavelengths, &spectrum.fluxes, &self.grid)?;
        let probabilities = self.infer(input)?;
        ClassScores::from_probabilities(&probabilities).ok_or_else(|| {
            ModelError::OutputShape {
                shape: format!("[{}]", probabilities.len()),
                expected: TransientClass::COUNT,
            }
            .into()
        })
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}
