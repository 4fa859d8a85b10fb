//! HTTP transport with retry, exponential backoff, timeout, and gzip.

use std::time::Duration;

use cider_core::constants::USER_AGENT;
use cider_core::errors::ApiError;
use cider_core::{CiderError, CiderResult};
use serde::{de::DeserializeOwned, Serialize};

use super::protocol::ApiResponse;

/// Configuration for the HTTP transport layer.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL of the SkyPortal instance, without a trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum number of retry attempts.
    pub max_retries: u32,
    /// Initial backoff duration (doubles each retry).
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
        }
    }
}

/// Convert a string into an ApiError::Network.
fn net_err(reason: String) -> CiderError {
    ApiError::Network { reason }.into()
}

/// HTTP transport client. Wraps a blocking reqwest client with retry
/// logic and backoff.
///
/// SkyPortal authenticates with an `Authorization: token <token>` header
/// rather than a bearer scheme.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
    config: HttpClientConfig,
    token: Option<String>,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> CiderResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e: reqwest::Error| net_err(e.to_string()))?;
        Ok(Self {
            client,
            config,
            token: None,
        })
    }

    /// Set the API token for authenticated requests.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Clear the API token.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// GET a resource with retry and backoff.
    pub fn get<Resp: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> CiderResult<ApiResponse<Resp>> {
        self.do_request::<Resp>(reqwest::Method::GET, path, query, None::<&()>)
    }

    /// POST a JSON payload with retry and backoff.
    pub fn post<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        path: &str,
        payload: &Req,
    ) -> CiderResult<ApiResponse<Resp>> {
        self.do_request::<Resp>(reqwest::Method::POST, path, &[], Some(payload))
    }

    /// Single GET without retries, returning only the HTTP status code.
    ///
    /// Used by startup probes where the status itself is the answer and
    /// backing off would only delay an obvious failure.
    pub fn probe(&self, path: &str, with_auth: bool) -> CiderResult<u16> {
        let url = format!("{}{}", self.config.base_url, path);
        let mut req = self.client.get(&url);
        if with_auth {
            if let Some(ref token) = self.token {
                req = req.header(reqwest::header::AUTHORIZATION, format!("token {token}"));
            }
        }
        let resp = req.send().map_err(|e| net_err(e.to_string()))?;
        Ok(resp.status().as_u16())
    }

    /// Unified retry loop for any HTTP method.
    ///
    /// 5xx and transport errors are retried; 4xx responses fail fast since
    /// repeating a rejected request cannot change the outcome.
    fn do_request<Resp: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&impl Serialize>,
    ) -> CiderResult<ApiResponse<Resp>> {
        let url = format!("{}{}", self.config.base_url, path);

        let mut backoff = self.config.initial_backoff;
        let mut last_err = String::new();

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::debug!(
                    "api: retry attempt {}/{} after {:?}",
                    attempt,
                    self.config.max_retries,
                    backoff
                );
                std::thread::sleep(backoff);
                backoff = (backoff * 2).min(self.config.max_backoff);
            }

            let mut req = self.client.request(method.clone(), &url);
            if !query.is_empty() {
                req = req.query(query);
            }
            if let Some(b) = body {
                req = req.json(b);
            }
            if let Some(ref token) = self.token {
                req = req.header(reqwest::header::AUTHORIZATION, format!("token {token}"));
            }

            match req.send() {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return resp.json::<ApiResponse<Resp>>().map_err(
                            |e: reqwest::Error| {
                                ApiError::MalformedResponse {
                                    endpoint: path.to_string(),
                                    reason: format!("deserialization failed: {e}"),
                                }
                                .into()
                            },
                        );
                    }
                    if status.is_client_error() {
                        let body_text = resp.text().unwrap_or_default();
                        return Err(ApiError::Status {
                            endpoint: path.to_string(),
                            status: status.as_u16(),
                            body: body_text,
                        }
                        .into());
                    }
                    last_err = format!("HTTP {status}");
                }
                Err(e) => {
                    last_err = e.to_string();
                }
            }
        }

        Err(net_err(format!(
            "all {} retries exhausted: {last_err}",
            self.config.max_retries
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_transport_defaults() {
        let config = HttpClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.initial_backoff, Duration::from_millis(500));
        assert_eq!(config.max_backoff, Duration::from_secs(30));
        assert!(config.base_url.is_empty());
    }

    #[test]
    fn token_can_be_set_and_cleared() {
        let mut client = HttpClient::new(HttpClientConfig::default()).unwrap();
        client.set_token("abc".to_string());
        assert!(client.token.is_some());
        client.clear_token();
        assert!(client.token.is_none());
    }
}
