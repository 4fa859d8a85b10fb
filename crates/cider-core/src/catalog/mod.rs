//! Records exchanged with the spectrum catalog, plus the report shape
//! the pipeline produces from them.

pub mod report;
pub mod source;
pub mod spectrum;
pub mod summary;

pub use report::ClassificationReport;
pub use source::{Source, SourceClassification};
pub use spectrum::Spectrum;
pub use summary::SpectrumSummary;
