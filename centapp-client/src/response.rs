//! Decoded result of a single API call.

use serde_json::Value;

use crate::ClientError;

/// Decoded response body, tagged with whether the HTTP status was a success.
///
/// The remote service reports most failures as a JSON payload alongside a
/// 4xx/5xx status. That payload is kept intact in `Failure`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Success(Value),
    Failure { status: u16, body: Value },
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// The decoded body, whichever variant this is.
    pub fn body(&self) -> &Value {
        match self {
            ApiResponse::Success(body) | ApiResponse::Failure { body, .. } => body,
        }
    }

    pub fn into_body(self) -> Value {
        match self {
            ApiResponse::Success(body) | ApiResponse::Failure { body, .. } => body,
        }
    }

    /// Turns a `Failure` into [`ClientError::Api`].
    pub fn into_result(self) -> Result<Value, ClientError> {
        match self {
            ApiResponse::Success(body) => Ok(body),
            ApiResponse::Failure { status, body } => Err(ClientError::Api { status, body }),
        }
    }
}
