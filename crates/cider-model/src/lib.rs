//! Spectrum preprocessing and ONNX classification.
//!
//! Turns raw wavelength/flux arrays into the fixed-length, z-scored input
//! the classification network expects, runs the network via `ort`, and
//! converts the logits into per-class probabilities.
//!
//! The pipeline is split so each stage is testable without a model file:
//! [`preprocess`] and [`softmax`] are pure functions; only
//! [`SpectrumClassifier`] touches ONNX Runtime.

pub mod classifier;
pub mod preprocess;
pub mod softmax;

pub use classifier::SpectrumClassifier;
pub use preprocess::{preprocess, WavelengthGrid};
pub use softmax::softmax;
