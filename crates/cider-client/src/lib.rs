//! # cider-client
//!
//! Blocking SkyPortal API client: HTTP transport with retry and exponential
//! backoff, the `{status, data, message}` response envelope, and typed
//! endpoints for the spectra, sources, and comments resources.
//!
//! Implements [`cider_core::traits::ISpectrumCatalog`], the seam the
//! listener engine polls through.

pub mod skyportal;
pub mod transport;

pub use skyportal::SkyPortal;
pub use transport::{ApiResponse, HttpClient, HttpClientConfig};
