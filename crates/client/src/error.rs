#![forbid(unsafe_code)]

use thiserror::Error;

/// Everything that can go wrong between a service call and a decoded response.
///
/// Callers above the service layer only ever look at [`ClientError::message`]; the
/// variants exist for logging and for the transport's own tests.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("{0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response from {path}: {detail}")]
    Decode { path: String, detail: String },
    #[error("could not encode request body: {0}")]
    Encode(String),
    #[error("invalid client config: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Builds a `Status` error from a non-2xx body. The backend reports failures
    /// as `{"error": "..."}` (sometimes `{"message": "..."}`); anything else falls back
    /// to the raw body, then to the bare status line.
    pub fn from_status_body(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: status_message(status, body),
        }
    }
}

fn status_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        for field in ["error", "message"] {
            let found = match value.get(field) {
                Some(serde_json::Value::String(text)) => Some(text.trim().to_string()),
                Some(serde_json::Value::Object(inner)) => inner
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(|s| s.trim().to_string()),
                _ => None,
            };
            if let Some(text) = found.filter(|t| !t.is_empty()) {
                return text;
            }
        }
    }
    if !trimmed.is_empty() && !trimmed.starts_with('{') && !trimmed.starts_with('<') {
        return trimmed.to_string();
    }
    format!("HTTP {status}")
}
