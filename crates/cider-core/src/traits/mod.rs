pub mod catalog;
pub mod classifier;

pub use catalog::ISpectrumCatalog;
pub use classifier::IClassifier;
