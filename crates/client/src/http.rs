#![forbid(unsafe_code)]

use crate::{ClientConfig, ClientError, Transport};
use serde_json::Value;
use tracing::debug;

/// [`Transport`] over HTTP/1.1 using a pooled `ureq` agent.
pub struct HttpTransport {
    agent: ureq::Agent,
    base_url: String,
    authorization: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
            base_url: config.base_url.clone(),
            authorization: config
                .auth_token
                .as_ref()
                .map(|token| format!("Bearer {token}")),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: &str, path: &str) -> ureq::Request {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .agent
            .request(method, &url)
            .set("Accept", "application/json");
        if let Some(authorization) = self.authorization.as_deref() {
            request = request.set("Authorization", authorization);
        }
        request
    }

    fn settle(
        method: &str,
        path: &str,
        result: Result<ureq::Response, ureq::Error>,
    ) -> Result<Value, ClientError> {
        match result {
            Ok(response) => {
                let status = response.status();
                let body = response.into_string().map_err(|err| {
                    ClientError::Transport(format!("failed to read response body: {err}"))
                })?;
                debug!(method, path, status, "response");
                if body.trim().is_empty() {
                    return Ok(Value::Null);
                }
                serde_json::from_str(&body).map_err(|err| ClientError::Decode {
                    path: path.to_string(),
                    detail: err.to_string(),
                })
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                debug!(method, path, status, "request rejected");
                Err(ClientError::from_status_body(status, &body))
            }
            Err(ureq::Error::Transport(transport)) => {
                debug!(method, path, error = %transport, "transport failure");
                Err(ClientError::Transport(transport.to_string()))
            }
        }
    }
}

impl Transport for HttpTransport {
    fn get(&self, path: &str) -> Result<Value, ClientError> {
        debug!(method = "GET", path, "request");
        Self::settle("GET", path, self.request("GET", path).call())
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value, ClientError> {
        debug!(method = "POST", path, "request");
        Self::settle("POST", path, self.request("POST", path).send_json(body))
    }
}
