//! Polling engine for the cider listener.
//!
//! Ties the pieces together: a [`Cursor`](cider_core::Cursor)-windowed poll
//! of the spectrum listing, the processed-spectrum cache that keeps results
//! to at most one per spectrum, classification through the
//! [`IClassifier`](cider_core::traits::IClassifier) seam, and report
//! delivery. The `cider` binary in this crate wires it to the real
//! SkyPortal client and ONNX model.

pub mod cache;
pub mod cli;
pub mod engine;
pub mod report;
pub mod tracing_setup;

pub use cache::ProcessedCache;
pub use engine::{CycleOutcome, Listener};
pub use report::Reporter;
