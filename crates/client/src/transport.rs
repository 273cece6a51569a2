#![forbid(unsafe_code)]

use crate::{ClientConfig, ClientError, HttpTransport};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// One JSON request/response exchange against the REST base.
///
/// Implementations must turn network failures and non-2xx statuses into errors;
/// they never retry.
pub trait Transport: Send + Sync {
    fn get(&self, path: &str) -> Result<Value, ClientError>;
    fn post(&self, path: &str, body: &Value) -> Result<Value, ClientError>;
}

/// Typed wrapper over a shared [`Transport`].
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn http(config: &ClientConfig) -> Self {
        Self::new(Arc::new(HttpTransport::new(config)))
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let value = self.transport.get(path)?;
        decode(path, value)
    }

    pub fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|err| ClientError::Encode(err.to_string()))?;
        let value = self.transport.post(path, &body)?;
        decode(path, value)
    }
}

fn decode<T: DeserializeOwned>(path: &str, value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value).map_err(|err| ClientError::Decode {
        path: path.to_string(),
        detail: err.to_string(),
    })
}

/// Percent-encodes one path segment, keeping the RFC 3986 unreserved set.
pub fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
