//! Push sending and tracking endpoints.
//!
//! Sending needs only a topic secret, no login. The returned push ident is
//! the handle for everything after the send: receipts, the recipient's
//! response, status checks, and the long poll.

use serde_json::Value;

use pushme_types::{ApiError, Method, PushMessage, PushReply};

use crate::client::{CallOptions, PushMeClient, POLLING_TIMEOUT};
use crate::poll::{PollError, PollOptions};
use crate::transport::Transport;

/// Push endpoints, reached through [`PushMeClient::push`].
pub struct PushService<'a, T: Transport> {
    client: &'a PushMeClient<T>,
}

impl<'a, T: Transport> PushService<'a, T> {
    pub(crate) fn new(client: &'a PushMeClient<T>) -> Self {
        Self { client }
    }

    /// The authenticated user's push history.
    pub async fn history(&self) -> Result<Value, ApiError> {
        self.client
            .call("/push", Method::Get, None, CallOptions::new())
            .await
    }

    /// Send a push to the topic with the given secret.
    pub async fn send_to_topic(
        &self,
        topic_secret: &str,
        message: &PushMessage,
    ) -> Result<Value, ApiError> {
        self.client
            .call(
                &format!("/push/{topic_secret}"),
                Method::Post,
                Some(super::to_body(message)),
                CallOptions::new(),
            )
            .await
    }

    /// Report delivery of a push to the receiving device.
    pub async fn send_receipt(&self, push_ident: &str, receipt: Value) -> Result<Value, ApiError> {
        self.client
            .call(
                &format!("/push/{push_ident}/receipt"),
                Method::Post,
                Some(receipt),
                CallOptions::new(),
            )
            .await
    }

    /// Report the action the recipient took on a push.
    pub async fn respond(&self, push_ident: &str, reply: &PushReply) -> Result<Value, ApiError> {
        self.client
            .call(
                &format!("/push/{push_ident}/response"),
                Method::Post,
                Some(super::to_body(reply)),
                CallOptions::new(),
            )
            .await
    }

    /// Current delivery/response status of a push.
    pub async fn status(&self, push_ident: &str) -> Result<Value, ApiError> {
        self.client
            .call(
                &format!("/push/{push_ident}/status"),
                Method::Get,
                None,
                CallOptions::new(),
            )
            .await
    }

    /// One long-poll attempt against the push's poll endpoint.
    ///
    /// Answers `Null` when nothing happened within the polling window. Most
    /// callers want [`PushService::poll_delivery`], which loops for them.
    pub async fn long_poll_status(&self, push_ident: &str) -> Result<Value, ApiError> {
        self.client
            .call(
                &format!("/push/{push_ident}/poll"),
                Method::Get,
                None,
                CallOptions::new().with_timeout(POLLING_TIMEOUT),
            )
            .await
    }

    /// Poll the push's poll endpoint until a status arrives.
    pub async fn poll_delivery(
        &self,
        push_ident: &str,
        options: PollOptions,
    ) -> Result<Value, PollError> {
        self.client
            .poll_until_ready(&format!("/push/{push_ident}/poll"), options)
            .await
    }
}
