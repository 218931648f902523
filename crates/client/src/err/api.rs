use crate::SearchClientError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Canonical status codes carried in the `error.status` field of a failed response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiStatus {
    InvalidArgument,
    FailedPrecondition,
    OutOfRange,
    Unauthenticated,
    PermissionDenied,
    NotFound,
    Aborted,
    AlreadyExists,
    ResourceExhausted,
    Cancelled,
    DataLoss,
    Unknown,
    Internal,
    NotImplemented,
    Unavailable,
    DeadlineExceeded,
    #[serde(other)]
    Other,
}

impl Display for ApiStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::String(s)) => f.write_str(&s),
            _ => write!(f, "{:?}", self),
        }
    }
}

/// Error envelope: `{"error": {"code": 404, "message": "...", "status": "NOT_FOUND"}}`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiErrorBody {
    pub code: u16,
    #[serde(default)]
    pub message: String,
    pub status: Option<ApiStatus>,
}

impl SearchClientError {
    /// Maps a non-success HTTP response onto the client error it represents.
    ///
    /// Only a 404 (or an envelope whose status is `NOT_FOUND`) becomes
    /// [`SearchClientError::NotFound`]; everything else is reported as
    /// [`SearchClientError::Api`] with whatever detail the body carried.
    pub fn from_response(code: u16, body: &str) -> Self {
        let envelope = serde_json::from_str::<ApiErrorResponse>(body).ok();

        let message = match &envelope {
            Some(envelope) if !envelope.error.message.is_empty() => envelope.error.message.clone(),
            _ if body.trim().is_empty() => format!("HTTP {}", code),
            _ => body.trim().to_string(),
        };
        let status = envelope.and_then(|envelope| envelope.error.status);

        if code == 404 || status == Some(ApiStatus::NotFound) {
            return SearchClientError::NotFound(message);
        }

        SearchClientError::Api {
            code,
            status: status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "UNKNOWN".to_string()),
            message,
        }
    }
}
