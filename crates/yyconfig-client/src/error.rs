//! Transport error types for the yyconfig client

/// Error surfaced by a [`Transport`](crate::Transport) round trip
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed with status {status}: {message}")]
    Status {
        status: u16,
        message: String,
        body: Option<String>,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("server rejected request: code={code}, message={message}")]
    Rejected { code: String, message: String },

    #[error("no server address configured")]
    NoServers,
}

impl TransportError {
    /// HTTP status code of the failed response, if the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Response body of a non-2xx answer
    pub fn body(&self) -> Option<&str> {
        match self {
            TransportError::Status { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, TransportError>;
