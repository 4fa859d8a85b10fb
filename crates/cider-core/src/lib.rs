//! # cider-core
//!
//! Foundation crate for the cider spectrum classifier.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod spectra;
pub mod timefmt;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CiderConfig;
pub use errors::{CiderError, CiderResult};
pub use spectra::{ClassScores, Cursor, Probability, TransientClass};
