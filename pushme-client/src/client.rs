//! PushMeClient - the main interface to the PushMe backend.
//!
//! This module provides [`PushMeClient`], the dispatcher every call funnels
//! through. It owns the base URL and bearer credential, composes request
//! descriptors, delegates the exchange to a [`Transport`], and turns every
//! non-success into exactly one [`ApiError`].
//!
//! # Architecture
//!
//! ```text
//! Application → resource services → PushMeClient → Transport → Backend
//!                                        ↓
//!                                   EventSink (logging)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use pushme_client::{ClientConfig, PushMeClient};
//!
//! let client = PushMeClient::new(ClientConfig::new())?;
//! client.user().email_login("user@example.com", "hunter2").await?;
//! let devices = client.device().list().await?;
//! ```

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use serde_json::Value;

use pushme_types::{ApiError, ApiRequest, ApiResponse, BasicAuth, ErrorCode, ErrorKind, Method};

use crate::logging::{EventSink, Logging};
use crate::service::{DeviceService, PushService, TopicService, TrioService, UserService};
use crate::transport::{HttpTransport, Transport, TransportError};

/// Default backend this SDK talks to.
pub const BACKEND_URL: &str = "https://pushme.tgxn.net";

/// Default per-call timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// Per-attempt window for long polls, also used by the Trio auth call.
pub const POLLING_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for [`PushMeClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL prefixed to every path.
    pub backend_url: String,
    /// Pre-seeded bearer credential.
    pub access_token: Option<String>,
    /// Where dispatcher events go.
    pub logging: Logging,
    /// Treat a 2xx body carrying `success: false` as a server error.
    pub strict: bool,
    /// Timeout applied to calls that bring no override.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: BACKEND_URL.to_string(),
            access_token: None,
            logging: Logging::Disabled,
            strict: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at the default backend, logging disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different backend.
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into();
        self
    }

    /// Pre-seed the bearer credential.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Select where dispatcher events go.
    pub fn with_logging(mut self, logging: Logging) -> Self {
        self.logging = logging;
        self
    }

    /// Turn strict handling of `success: false` bodies on or off.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Override the default per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Per-call options merged over the client defaults.
///
/// Options win on conflict; the payload is attached independently of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallOptions {
    /// Replaces the client's default timeout for this call.
    pub timeout: Option<Duration>,
    /// Basic-auth pair for this call only; used by the Trio handshake.
    pub basic_auth: Option<BasicAuth>,
}

impl CallOptions {
    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the timeout for this call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attach a basic-auth pair for this call.
    pub fn with_basic_auth(mut self, auth: BasicAuth) -> Self {
        self.basic_auth = Some(auth);
        self
    }
}

/// The main PushMe client.
///
/// One instance per logical session. Instances are independent: each owns
/// its base URL and credential, so an authenticated and an anonymous client
/// can coexist in one process without interfering.
pub struct PushMeClient<T: Transport> {
    transport: T,
    backend_url: RwLock<String>,
    access_token: RwLock<Option<String>>,
    sink: Arc<dyn EventSink>,
    strict: bool,
    timeout: Duration,
}

impl PushMeClient<HttpTransport> {
    /// Create a client over the production HTTP transport.
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        Ok(Self::with_transport(config, HttpTransport::new()?))
    }
}

impl<T: Transport> PushMeClient<T> {
    /// Create a client over the given transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            transport,
            backend_url: RwLock::new(config.backend_url),
            access_token: RwLock::new(config.access_token),
            sink: config.logging.into_sink(),
            strict: config.strict,
            timeout: config.timeout,
        }
    }

    /// Base URL calls are currently sent to.
    pub fn backend_url(&self) -> String {
        self.backend_url
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether the client still points at the default backend.
    pub fn is_default_backend(&self) -> bool {
        self.backend_url() == BACKEND_URL
    }

    /// Point every subsequent call at a different backend.
    pub fn set_backend_url(&self, url: impl Into<String>) {
        let url = url.into();
        self.record("set_backend_url", format_args!("{url}"));
        *self
            .backend_url
            .write()
            .unwrap_or_else(PoisonError::into_inner) = url;
    }

    /// Restore the default backend.
    pub fn reset_backend(&self) {
        self.set_backend_url(BACKEND_URL);
    }

    /// Set the bearer credential used by every subsequent call.
    pub fn set_access_token(&self, token: impl Into<String>) {
        self.record("set_access_token", format_args!("credential updated"));
        *self
            .access_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    /// Whether a bearer credential is currently set.
    pub fn has_access_token(&self) -> bool {
        self.access_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// User account and auth endpoints.
    pub fn user(&self) -> UserService<'_, T> {
        UserService::new(self)
    }

    /// Device registration endpoints.
    pub fn device(&self) -> DeviceService<'_, T> {
        DeviceService::new(self)
    }

    /// Topic management endpoints.
    pub fn topic(&self) -> TopicService<'_, T> {
        TopicService::new(self)
    }

    /// Push sending and tracking endpoints.
    pub fn push(&self) -> PushService<'_, T> {
        PushService::new(self)
    }

    /// Trio handshake endpoints.
    pub fn trio(&self) -> TrioService<'_, T> {
        TrioService::new(self)
    }

    /// Send `method path` through the transport and classify any failure.
    ///
    /// The payload is attached only for non-GET methods. On success the
    /// decoded body is returned unchanged; interpreting it is the caller's
    /// job (unless strict mode is on, which rejects `success: false`
    /// bodies centrally).
    pub async fn call(
        &self,
        path: &str,
        method: Method,
        payload: Option<Value>,
        options: CallOptions,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.backend_url(), path);
        let body = match payload {
            Some(payload) if method.allows_body() => Some(payload),
            _ => None,
        };
        let request = ApiRequest {
            method,
            url,
            bearer: self
                .access_token
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
            basic_auth: options.basic_auth,
            body,
            timeout: options.timeout.unwrap_or(self.timeout),
        };

        match &request.body {
            Some(body) => self.record(
                "call",
                format_args!("{} {} {}", request.method, request.url, body),
            ),
            None => self.record("call", format_args!("{} {}", request.method, request.url)),
        }

        match self.transport.send(request).await {
            Ok(response) => self.accept(response),
            Err(err) => {
                let error = ApiError::api(err.to_string(), None, ErrorCode::Transport(err.code()));
                self.record("api_error", format_args!("{error}"));
                Err(error)
            }
        }
    }

    /// Apply the success policy to a completed exchange.
    fn accept(&self, response: ApiResponse) -> Result<Value, ApiError> {
        if !response.is_success() {
            return Err(self.classify(response));
        }
        if self.strict && response.body.get("success").and_then(Value::as_bool) == Some(false) {
            let message = message_field(&response.body)
                .unwrap_or("request reported failure")
                .to_string();
            let error = ApiError::server(message, Some(response.body), response.status);
            self.record("server_error", format_args!("{error}"));
            return Err(error);
        }
        self.record(
            "response",
            format_args!("{} {}", response.status, response.body),
        );
        Ok(response.body)
    }

    /// Classify a non-2xx response. Order matters: 401 wins over a
    /// server-provided message, which wins over the generic fallback.
    fn classify(&self, response: ApiResponse) -> ApiError {
        let status = response.status;
        let message = message_field(&response.body).map(str::to_string);
        let error = if status == 401 {
            ApiError::unauthorized(
                message.unwrap_or_else(|| "unauthorized".to_string()),
                Some(response.body),
            )
        } else if let Some(message) = message {
            ApiError::server(message, Some(response.body), status)
        } else {
            ApiError::api(
                format!("request failed with status code {status}"),
                Some(response.body),
                ErrorCode::Status(status),
            )
        };
        let tag = match error.kind {
            ErrorKind::Unauthorized => "unauthorized_error",
            ErrorKind::Server => "server_error",
            ErrorKind::Api => "api_error",
        };
        self.record(tag, format_args!("{error}"));
        error
    }

    pub(crate) fn record(&self, tag: &str, detail: fmt::Arguments<'_>) {
        self.sink.record(tag, detail);
    }
}

/// The body's `message` field when it is a non-empty string.
fn message_field(body: &Value) -> Option<&str> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
}
