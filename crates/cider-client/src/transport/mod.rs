//! Transport layer: HTTP client with retry/backoff and the response envelope.

pub mod http_client;
pub mod protocol;

pub use http_client::{HttpClient, HttpClientConfig};
pub use protocol::ApiResponse;
