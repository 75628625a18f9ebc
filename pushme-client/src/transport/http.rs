//! Production transport over reqwest.

use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;

use pushme_types::{ApiRequest, ApiResponse, Method};

use super::{Transport, TransportError};

/// HTTP transport backed by a pooled [`reqwest::Client`].
///
/// One client per transport instance; connections are reused across calls.
/// Timeouts are per request, taken from the descriptor, so a long-poll call
/// and a quick status call can share the same transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds a transport with a fresh connection pool.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| TransportError::Build(err.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, &request.url)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
            .timeout(request.timeout);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(auth) = &request.basic_auth {
            builder = builder.basic_auth(&auth.username, Some(&auth.password));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(from_reqwest)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(from_reqwest)?;
        let body = decode_body(&text)?;
        tracing::trace!(target: "pushme::transport", status, url = %request.url, "exchange complete");
        Ok(ApiResponse { status, body })
    }
}

fn from_reqwest(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::ConnectionFailed(err.to_string())
    } else {
        TransportError::RequestFailed(err.to_string())
    }
}

/// The poll endpoint answers an expired window with an empty body; that is
/// JSON null here, not a decode failure.
fn decode_body(text: &str) -> Result<Value, TransportError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|err| TransportError::InvalidBody(err.to_string()))
}
