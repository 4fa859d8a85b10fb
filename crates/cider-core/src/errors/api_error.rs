/// SkyPortal API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("HTTP {status} from {endpoint}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("request rejected: {message}")]
    Rejected { message: String },

    #[error("malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    #[error("instance unreachable: {url}")]
    Unreachable { url: String },

    #[error("authentication failed: token rejected by {url}")]
    AuthFailed { url: String },
}

impl ApiError {
    /// Whether retrying the same request later could succeed.
    /// 5xx and transport failures are transient; 4xx and rejections are not.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
