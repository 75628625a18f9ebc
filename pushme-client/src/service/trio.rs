//! Trio device-pairing handshake.
//!
//! A Duo-style second factor built on topics: the caller identifies itself
//! with the topic key/secret over HTTP basic auth, asks the backend to push
//! an approval prompt, and the auth call then blocks for up to the polling
//! window while the user answers on their device.

use serde_json::{json, Value};

use pushme_types::{ApiError, BasicAuth, Method};

use crate::client::{CallOptions, PushMeClient, POLLING_TIMEOUT};
use crate::transport::Transport;

/// Trio handshake endpoints, reached through [`PushMeClient::trio`].
pub struct TrioService<'a, T: Transport> {
    client: &'a PushMeClient<T>,
}

impl<'a, T: Transport> TrioService<'a, T> {
    pub(crate) fn new(client: &'a PushMeClient<T>) -> Self {
        Self { client }
    }

    /// Liveness check for the handshake endpoints. No auth.
    pub async fn ping(&self) -> Result<Value, ApiError> {
        self.client
            .call("/auth/v2/ping", Method::Get, None, CallOptions::new())
            .await
    }

    /// Announce an upcoming auth for `username`.
    pub async fn preauth(
        &self,
        topic_key: &str,
        topic_secret: &str,
        username: &str,
    ) -> Result<Value, ApiError> {
        self.client
            .call(
                "/auth/v2/preauth",
                Method::Post,
                Some(json!({"username": username})),
                CallOptions::new().with_basic_auth(BasicAuth::new(topic_key, topic_secret)),
            )
            .await
    }

    /// Push the approval prompt and wait for the user's answer.
    ///
    /// The backend holds this request while the prompt is pending, so the
    /// call runs with the polling window as its timeout rather than the
    /// client default.
    pub async fn auth(
        &self,
        topic_key: &str,
        topic_secret: &str,
        username: &str,
        device_key: &str,
    ) -> Result<Value, ApiError> {
        self.client
            .call(
                "/auth/v2/auth",
                Method::Post,
                Some(json!({"username": username, "device": device_key})),
                CallOptions::new()
                    .with_basic_auth(BasicAuth::new(topic_key, topic_secret))
                    .with_timeout(POLLING_TIMEOUT),
            )
            .await
    }
}
