//! Typed SkyPortal endpoints over the HTTP transport.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use cider_core::catalog::{Source, Spectrum, SpectrumSummary};
use cider_core::config::ApiConfig;
use cider_core::errors::ApiError;
use cider_core::timefmt::format_query_time;
use cider_core::traits::ISpectrumCatalog;
use cider_core::CiderResult;

use crate::transport::{ApiResponse, HttpClient, HttpClientConfig};

/// Comment body for `POST /api/sources/{obj_id}/comments`.
#[derive(Debug, Serialize)]
struct CommentPayload<'a> {
    text: &'a str,
}

/// Client for one SkyPortal instance.
///
/// Holds the transport and the instance URL; all methods are blocking and
/// go through the transport's retry loop.
#[derive(Debug)]
pub struct SkyPortal {
    http: HttpClient,
    base_url: String,
}

impl SkyPortal {
    /// Build a client from the API configuration.
    ///
    /// Does not touch the network; use [`ping`](Self::ping) and
    /// [`verify_auth`](Self::verify_auth) to check the instance.
    pub fn connect(config: &ApiConfig) -> CiderResult<Self> {
        let base_url = config.instance_url.trim_end_matches('/').to_string();
        let mut http = HttpClient::new(HttpClientConfig {
            base_url: base_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            max_retries: config.max_retries,
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
            max_backoff: Duration::from_secs(config.max_backoff_secs),
        })?;
        if let Some(ref token) = config.token {
            http.set_token(token.clone());
        }
        Ok(Self { http, base_url })
    }

    /// Check that the instance answers at all.
    ///
    /// `/api/sysinfo` is unauthenticated, so this succeeds even with a bad
    /// token.
    pub fn ping(&self) -> CiderResult<()> {
        let status = self.http.probe("/api/sysinfo", false)?;
        if !(200..300).contains(&status) {
            return Err(ApiError::Unreachable {
                url: self.base_url.clone(),
            }
            .into());
        }
        Ok(())
    }

    /// Check that the configured token is accepted.
    pub fn verify_auth(&self) -> CiderResult<()> {
        let status = self.http.probe("/api/config", true)?;
        if !(200..300).contains(&status) {
            return Err(ApiError::AuthFailed {
                url: self.base_url.clone(),
            }
            .into());
        }
        Ok(())
    }

    /// List spectra modified inside `[modified_after, modified_before]`.
    ///
    /// Asks for minimal payloads; wavelengths and fluxes come from
    /// [`spectrum`](Self::spectrum) one object at a time.
    pub fn recent_spectra(
        &self,
        instrument_ids: &[i64],
        modified_after: DateTime<Utc>,
        modified_before: DateTime<Utc>,
    ) -> CiderResult<Vec<SpectrumSummary>> {
        let query = spectra_query(instrument_ids, modified_after, modified_before);
        let resp: ApiResponse<Vec<SpectrumSummary>> = self.http.get("/api/spectra", &query)?;
        Ok(resp.into_data("/api/spectra")?)
    }

    /// Fetch one spectrum with its full wavelength and flux arrays.
    pub fn spectrum(&self, id: i64) -> CiderResult<Spectrum> {
        let path = format!("/api/spectra/{id}");
        let resp: ApiResponse<Spectrum> = self.http.get(&path, &[])?;
        Ok(resp.into_data(&path)?)
    }

    /// Fetch the source an object belongs to, with its classifications.
    pub fn source(&self, obj_id: &str) -> CiderResult<Source> {
        let path = format!("/api/sources/{obj_id}");
        let resp: ApiResponse<Source> = self.http.get(&path, &[])?;
        Ok(resp.into_data(&path)?)
    }

    /// Post a text comment on a source.
    pub fn post_comment(&self, obj_id: &str, text: &str) -> CiderResult<()> {
        let path = format!("/api/sources/{obj_id}/comments");
        let resp: ApiResponse<serde_json::Value> =
            self.http.post(&path, &CommentPayload { text })?;
        if !resp.is_success() {
            return Err(ApiError::Rejected {
                message: resp
                    .message
                    .unwrap_or_else(|| "no message in error response".to_string()),
            }
            .into());
        }
        Ok(())
    }
}

impl ISpectrumCatalog for SkyPortal {
    fn recent_spectra(
        &self,
        instrument_ids: &[i64],
        modified_after: DateTime<Utc>,
        modified_before: DateTime<Utc>,
    ) -> CiderResult<Vec<SpectrumSummary>> {
        SkyPortal::recent_spectra(self, instrument_ids, modified_after, modified_before)
    }

    fn spectrum(&self, id: i64) -> CiderResult<Spectrum> {
        SkyPortal::spectrum(self, id)
    }

    fn source(&self, obj_id: &str) -> CiderResult<Source> {
        SkyPortal::source(self, obj_id)
    }

    fn post_comment(&self, obj_id: &str, text: &str) -> CiderResult<()> {
        SkyPortal::post_comment(self, obj_id, text)
    }
}

/// Build the `/api/spectra` query string pairs.
fn spectra_query(
    instrument_ids: &[i64],
    modified_after: DateTime<Utc>,
    modified_before: DateTime<Utc>,
) -> Vec<(String, String)> {
    let mut query = vec![
        ("minimalPayload".to_string(), "true".to_string()),
        (
            "modifiedAfter".to_string(),
            format_query_time(modified_after),
        ),
        (
            "modifiedBefore".to_string(),
            format_query_time(modified_before),
        ),
    ];
    if !instrument_ids.is_empty() {
        query.push(("instrumentIDs".to_string(), join_ids(instrument_ids)));
    }
    query
}

/// Comma-join instrument ids the way the API expects them.
fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn join_ids_is_comma_separated() {
        assert_eq!(join_ids(&[7, 9, 35]), "7,9,35");
        assert_eq!(join_ids(&[1117]), "1117");
        assert_eq!(join_ids(&[]), "");
    }

    #[test]
    fn spectra_query_has_offset_free_timestamps() {
        let after = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let before = Utc.with_ymd_and_hms(2024, 3, 2, 12, 30, 0).unwrap();
        let query = spectra_query(&[7, 9], after, before);

        let lookup = |key: &str| {
            query
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(lookup("minimalPayload"), "true");
        assert_eq!(lookup("modifiedAfter"), "2024-03-01T00:00:00.000000");
        assert_eq!(lookup("modifiedBefore"), "2024-03-02T12:30:00.000000");
        assert_eq!(lookup("instrumentIDs"), "7,9");
        assert!(!lookup("modifiedAfter").contains('+'));
        assert!(!lookup("modifiedAfter").ends_with('Z'));
    }

    #[test]
    fn empty_instrument_list_omits_the_filter() {
        let after = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let before = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();
        let query = spectra_query(&[], after, before);
        assert!(query.iter().all(|(k, _)| k != "instrumentIDs"));
    }

    #[test]
    fn connect_strips_trailing_slash() {
        let config = ApiConfig {
            instance_url: "https://fritz.science/".to_string(),
            token: Some("t".to_string()),
            ..ApiConfig::default()
        };
        let client = SkyPortal::connect(&config).unwrap();
        assert_eq!(client.base_url, "https://fritz.science");
    }
}
