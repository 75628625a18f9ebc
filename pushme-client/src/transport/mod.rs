//! Transport abstraction for the PushMe client.
//!
//! This module provides a pluggable transport layer that abstracts the
//! HTTP stack (reqwest in production, mock for testing).
//!
//! # Design
//!
//! The transport executes one fully-composed [`ApiRequest`] per call and
//! reports either the response status with its decoded JSON body, or a
//! [`TransportError`] when no usable response exists. It applies no policy:
//! URL joining, auth decisions, and status interpretation all happen in the
//! dispatcher before and after the exchange.
//!
//! # Example
//!
//! ```ignore
//! let transport = MockTransport::new();
//! transport.queue_response(200, json!({"success": true}));
//! let response = transport.send(request).await?;
//! assert_eq!(response.status, 200);
//! ```

mod http;
mod mock;

pub use http::HttpTransport;
pub use mock::MockTransport;

use async_trait::async_trait;
use thiserror::Error;

use pushme_types::{ApiRequest, ApiResponse, TransportCode};

/// Transport errors. Every variant means no usable HTTP response exists.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request did not complete within its timeout.
    #[error("request timed out")]
    Timeout,

    /// The connection could not be established (DNS, refused, TLS).
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request failed after connecting, without an HTTP response.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// A response arrived but its body was not valid JSON.
    #[error("invalid response body: {0}")]
    InvalidBody(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Build(String),
}

impl TransportError {
    /// The transport-level code carried by classified errors.
    pub fn code(&self) -> TransportCode {
        match self {
            TransportError::Timeout => TransportCode::Timeout,
            TransportError::ConnectionFailed(_) => TransportCode::Connect,
            TransportError::RequestFailed(_) | TransportError::Build(_) => TransportCode::Request,
            TransportError::InvalidBody(_) => TransportCode::Decode,
        }
    }
}

/// Transport trait for executing PushMe API requests.
///
/// Implementations handle the underlying HTTP mechanism (reqwest, mock).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one HTTP exchange.
    ///
    /// Any status counts as a response here; only the failure to obtain
    /// or decode one is an error.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
