//! Request and response descriptors handed across the transport seam.
//!
//! A descriptor is fully composed by the dispatcher: the URL is already
//! joined, the bearer token already decided, the body already attached or
//! withheld. Transports execute descriptors without policy of their own.

use std::fmt;
use std::time::Duration;

use serde_json::Value;

/// HTTP methods used by the PushMe API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Fetch a resource; never carries a body.
    Get,
    /// Create or mutate a resource.
    Post,
    /// Remove a resource.
    Delete,
}

impl Method {
    /// Uppercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }

    /// Whether requests with this method may carry a JSON body.
    pub fn allows_body(&self) -> bool {
        !matches!(self, Method::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Basic-auth credentials supplied per call, used by the Trio handshake.
///
/// Never stored on the client; each call that needs them passes a fresh pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    /// Topic key.
    pub username: String,
    /// Topic secret.
    pub password: String,
}

impl BasicAuth {
    /// Builds a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// A fully-composed request, ready for a transport to execute.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL (base URL and path already joined).
    pub url: String,
    /// Bearer token, present iff a credential was set on the client.
    pub bearer: Option<String>,
    /// Per-call basic-auth pair, present only for Trio handshake calls.
    pub basic_auth: Option<BasicAuth>,
    /// JSON body; `None` for GET and for body-less POSTs.
    pub body: Option<Value>,
    /// How long the transport may wait for a response.
    pub timeout: Duration,
}

impl ApiRequest {
    /// Value of the `Authorization` header this request will carry, if any.
    ///
    /// `Bearer` is the only scheme the backend accepts for token auth.
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Status and decoded body of a completed HTTP exchange.
///
/// Any status is representable here; deciding whether it counts as success
/// is the dispatcher's job, not the transport's.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded JSON body; an entirely empty body decodes to `Null`.
    pub body: Value,
}

impl ApiResponse {
    /// Whether the status falls in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn method_wire_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn only_get_refuses_a_body() {
        assert!(!Method::Get.allows_body());
        assert!(Method::Post.allows_body());
        assert!(Method::Delete.allows_body());
    }

    #[test]
    fn authorization_uses_bearer_scheme() {
        let request = ApiRequest {
            method: Method::Get,
            url: "https://pushme.tgxn.net/user".to_string(),
            bearer: Some("token123".to_string()),
            basic_auth: None,
            body: None,
            timeout: Duration::from_secs(1),
        };
        assert_eq!(request.authorization().as_deref(), Some("Bearer token123"));
    }

    #[test]
    fn absent_bearer_means_no_header() {
        let request = ApiRequest {
            method: Method::Get,
            url: "https://pushme.tgxn.net/topic".to_string(),
            bearer: None,
            basic_auth: None,
            body: None,
            timeout: Duration::from_secs(1),
        };
        assert_eq!(request.authorization(), None);
    }

    #[test]
    fn success_covers_the_2xx_range() {
        let ok = ApiResponse { status: 204, body: Value::Null };
        let created = ApiResponse { status: 201, body: json!({"success": true}) };
        let redirect = ApiResponse { status: 301, body: Value::Null };
        let client_err = ApiResponse { status: 404, body: Value::Null };
        assert!(ok.is_success());
        assert!(created.is_success());
        assert!(!redirect.is_success());
        assert!(!client_err.is_success());
    }
}
