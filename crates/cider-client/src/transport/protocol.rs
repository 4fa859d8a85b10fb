//! SkyPortal response envelope.

use serde::Deserialize;

use cider_core::errors::ApiError;

/// Envelope wrapping every SkyPortal response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// `"success"` or `"error"`.
    pub status: String,
    /// Payload, present on success.
    pub data: Option<T>,
    /// Human-readable message, present on error.
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Whether the server reported success.
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Unwrap the payload.
    ///
    /// An error envelope becomes [`ApiError::Rejected`] carrying the server
    /// message; a success envelope without data is malformed.
    pub fn into_data(self, endpoint: &str) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(ApiError::Rejected {
                message: self
                    .message
                    .unwrap_or_else(|| "no message in error response".to_string()),
            });
        }
        self.data.ok_or_else(|| ApiError::MalformedResponse {
            endpoint: endpoint.to_string(),
            reason: "success envelope without data".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_yields_data() {
        let json = r#"{"status": "success", "data": [1, 2, 3], "message": null}"#;
        let resp: ApiResponse<Vec<i64>> = serde_json::from_str(json).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.into_data("/api/test").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn error_envelope_becomes_rejected() {
        let json = r#"{"status": "error", "data": null, "message": "Invalid query"}"#;
        let resp: ApiResponse<Vec<i64>> = serde_json::from_str(json).unwrap();
        let err = resp.into_data("/api/test").unwrap_err();
        match err {
            ApiError::Rejected { message } => assert_eq!(message, "Invalid query"),
            other => panic!("expected Rejected, got: {other:?}"),
        }
    }

    #[test]
    fn success_without_data_is_malformed() {
        let json = r#"{"status": "success"}"#;
        let resp: ApiResponse<Vec<i64>> = serde_json::from_str(json).unwrap();
        assert!(matches!(
            resp.into_data("/api/test").unwrap_err(),
            ApiError::MalformedResponse { .. }
        ));
    }

    #[test]
    fn missing_message_gets_placeholder() {
        let json = r#"{"status": "error"}"#;
        let resp: ApiResponse<Vec<i64>> = serde_json::from_str(json).unwrap();
        match resp.into_data("/api/test").unwrap_err() {
            ApiError::Rejected { message } => {
                assert!(message.contains("no message"));
            }
            other => panic!("expected Rejected, got: {other:?}"),
        }
    }
}
