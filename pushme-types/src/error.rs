//! The PushMe API error taxonomy.
//!
//! Every failed API call surfaces as exactly one [`ApiError`]. [`ErrorKind`]
//! names the three classes a failure can fall into; the payload fields
//! (`message`, `body`, `code`, `timestamp`) are shared by all of them.

use std::fmt;
use std::time::SystemTime;

use serde_json::Value;
use thiserror::Error;

/// The three classes a failed API call can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The backend rejected the credential (HTTP 401).
    Unauthorized,
    /// The backend reported a logical failure with an explanatory message.
    Server,
    /// Transport failures and responses carrying no explanatory message.
    Api,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Unauthorized => write!(f, "unauthorized"),
            ErrorKind::Server => write!(f, "server error"),
            ErrorKind::Api => write!(f, "api error"),
        }
    }
}

/// Where a transport-level failure happened, when no HTTP response exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportCode {
    /// The request did not complete within its timeout.
    Timeout,
    /// The connection could not be established (DNS, refused, TLS).
    Connect,
    /// The request failed after connecting, without producing a response.
    Request,
    /// A response arrived but its body was not valid JSON.
    Decode,
}

impl fmt::Display for TransportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportCode::Timeout => write!(f, "timeout"),
            TransportCode::Connect => write!(f, "connection failed"),
            TransportCode::Request => write!(f, "request failed"),
            TransportCode::Decode => write!(f, "invalid response body"),
        }
    }
}

/// Failure code attached to an [`ApiError`].
///
/// Carries the HTTP status when a response was obtained, and a
/// [`TransportCode`] when the failure happened below the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// HTTP status of the classified response.
    Status(u16),
    /// Transport-level failure; no HTTP response exists.
    Transport(TransportCode),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Status(status) => write!(f, "http {status}"),
            ErrorCode::Transport(code) => write!(f, "{code}"),
        }
    }
}

/// A classified API failure.
///
/// `message` preserves the server-provided text verbatim whenever one was
/// available; `body` is the decoded response payload, absent when no
/// response was obtained at all.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message} ({code})")]
pub struct ApiError {
    /// Which class this failure falls into.
    pub kind: ErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
    /// Decoded response body, `None` when no response exists.
    pub body: Option<Value>,
    /// HTTP status or transport-level failure code.
    pub code: ErrorCode,
    /// When the failure was classified.
    pub timestamp: SystemTime,
}

impl ApiError {
    /// An HTTP 401 rejection.
    pub fn unauthorized(message: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            kind: ErrorKind::Unauthorized,
            message: message.into(),
            body,
            code: ErrorCode::Status(401),
            timestamp: SystemTime::now(),
        }
    }

    /// A server-reported logical failure at the given status.
    pub fn server(message: impl Into<String>, body: Option<Value>, status: u16) -> Self {
        Self {
            kind: ErrorKind::Server,
            message: message.into(),
            body,
            code: ErrorCode::Status(status),
            timestamp: SystemTime::now(),
        }
    }

    /// A transport failure or a response with no explanatory message.
    pub fn api(message: impl Into<String>, body: Option<Value>, code: ErrorCode) -> Self {
        Self {
            kind: ErrorKind::Api,
            message: message.into(),
            body,
            code,
            timestamp: SystemTime::now(),
        }
    }

    /// HTTP status of the classified response, if one exists.
    pub fn status(&self) -> Option<u16> {
        match self.code {
            ErrorCode::Status(status) => Some(status),
            ErrorCode::Transport(_) => None,
        }
    }

    /// Transport-level failure code, if no HTTP response exists.
    pub fn transport_code(&self) -> Option<TransportCode> {
        match self.code {
            ErrorCode::Status(_) => None,
            ErrorCode::Transport(code) => Some(code),
        }
    }

    /// Whether this is a credential rejection.
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ErrorKind::Unauthorized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_includes_kind_message_and_code() {
        let err = ApiError::server("email is required", Some(json!({"success": false})), 400);
        assert_eq!(err.to_string(), "server error: email is required (http 400)");
    }

    #[test]
    fn unauthorized_pins_status_401() {
        let err = ApiError::unauthorized("unauthorized", None);
        assert_eq!(err.code, ErrorCode::Status(401));
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());
    }

    #[test]
    fn transport_errors_carry_no_status() {
        let err = ApiError::api(
            "connection refused",
            None,
            ErrorCode::Transport(TransportCode::Connect),
        );
        assert_eq!(err.status(), None);
        assert_eq!(err.transport_code(), Some(TransportCode::Connect));
        assert_eq!(err.to_string(), "api error: connection refused (connection failed)");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiError>();
    }
}
