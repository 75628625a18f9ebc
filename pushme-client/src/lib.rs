//! # pushme-client
//!
//! Client library for the PushMe push-notification backend.
//!
//! This is the main library applications use to send pushes, track their
//! delivery, and manage the account resources behind them.
//!
//! ## Features
//!
//! - **One Error Shape**: every failure becomes an [`ApiError`] classified
//!   as unauthorized, server, or api
//! - **Transport Abstraction**: pluggable transport layer (reqwest, mock)
//! - **Bounded Long Polling**: iterative retry loop with attempt and
//!   deadline ceilings
//! - **Pluggable Logging**: dispatcher events go to tracing, a custom sink,
//!   or nowhere
//!
//! ## Example
//!
//! ```ignore
//! use pushme_client::{ClientConfig, PollOptions, PushMeClient};
//! use pushme_types::PushMessage;
//!
//! let client = PushMeClient::new(ClientConfig::new())?;
//!
//! // Send a push to a topic
//! let message = PushMessage::new("button.approve_deny", "Deploy to prod?");
//! let queued = client.push().send_to_topic("topic-secret", &message).await?;
//!
//! // Wait for the recipient's answer
//! let ident = queued["pushIdent"].as_str().unwrap_or_default();
//! let status = client.push().poll_delivery(ident, PollOptions::new()).await?;
//! ```
//!
//! [`ApiError`]: pushme_types::ApiError

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod logging;
pub mod poll;
pub mod service;
pub mod transport;

pub use client::{
    CallOptions, ClientConfig, PushMeClient, BACKEND_URL, DEFAULT_TIMEOUT, POLLING_TIMEOUT,
};
pub use logging::{EventSink, Logging, MemorySink, NoopSink, TracingSink};
pub use poll::{PollError, PollOptions};
pub use service::{DeviceService, PushService, TopicService, TrioService, UserService};
pub use transport::{HttpTransport, MockTransport, Transport, TransportError};
