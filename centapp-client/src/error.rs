//! Error type for client operations.

/// Error type for client operations.
///
/// A non-success HTTP status with a JSON body is not an error at this level;
/// it comes back as [`crate::ApiResponse::Failure`]. `Api` is only produced
/// by [`crate::ApiResponse::into_result`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {body}")]
    Api {
        status: u16,
        body: serde_json::Value,
    },

    #[error("Response with status {status} is not valid JSON: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// HTTP status of the response that caused the error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            ClientError::Api { status, .. } | ClientError::Decode { status, .. } => Some(*status),
        }
    }
}
