/// Failures talking to the remote controller.
///
/// These never escape the service boundary; `DeviceService` logs them
/// and reports a tagged outcome instead.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request returned with HTTP {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Authorization token is not a valid header value")]
    InvalidAuthToken,
}

impl ClientError {
    /// HTTP status of the failed request, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::UnexpectedStatus { status } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            ClientError::InvalidBaseUrl(_) | ClientError::InvalidAuthToken => None,
        }
    }
}
