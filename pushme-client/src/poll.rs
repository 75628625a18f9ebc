//! Long-poll loop for delivery and response tracking.
//!
//! The backend's poll endpoints hold a request open for up to the polling
//! window and answer with an empty body when nothing happened in that
//! window. [`PushMeClient::poll_until_ready`] drives that protocol as an
//! iterative loop: ask, and if the answer is empty or the attempt failed,
//! immediately ask again.
//!
//! This loop is the one place classified failures are suppressed. A poll
//! attempt that times out or errors means "not yet ready", not "give up";
//! every suppressed failure is reported to the logging sink and the most
//! recent one is carried in [`PollError`] if the bounds run out.
//!
//! Unbounded by default. Callers that need a ceiling set one through
//! [`PollOptions`], or cancel externally by dropping the future.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use pushme_client::PollOptions;
//!
//! let options = PollOptions::new()
//!     .with_max_attempts(10)
//!     .with_deadline(Duration::from_secs(300));
//! let status = client
//!     .poll_until_ready("/push/abc123/poll", options)
//!     .await?;
//! ```

use std::time::{Duration, Instant};

use serde_json::Value;
use thiserror::Error;

use pushme_types::{ApiError, Method};

use crate::client::{CallOptions, PushMeClient, POLLING_TIMEOUT};
use crate::transport::Transport;

/// Bounds and tuning for [`PushMeClient::poll_until_ready`].
#[derive(Debug, Clone, PartialEq)]
pub struct PollOptions {
    /// Per-attempt timeout handed to the transport.
    pub window: Duration,
    /// Stop after this many attempts. `None` means no attempt ceiling.
    pub max_attempts: Option<u32>,
    /// Stop once this much wall-clock time has passed. `None` means no
    /// deadline.
    pub deadline: Option<Duration>,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            window: POLLING_TIMEOUT,
            max_attempts: None,
            deadline: None,
        }
    }
}

impl PollOptions {
    /// Default polling window, no bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the per-attempt timeout.
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Cap the number of attempts.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Cap the overall wall-clock time, measured from the first attempt.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// The poll bounds ran out before the backend produced a result.
#[derive(Debug, Clone, Error)]
#[error("poll gave up after {attempts} attempts")]
pub struct PollError {
    /// Attempts completed before giving up.
    pub attempts: u32,
    /// The most recent suppressed failure, if any attempt failed.
    #[source]
    pub last: Option<ApiError>,
}

impl<T: Transport> PushMeClient<T> {
    /// Poll `path` until it answers with a non-empty body.
    ///
    /// Empty answers and failed attempts both trigger an immediate retry;
    /// see the module docs for the full protocol. Runs until a result
    /// arrives, a configured bound is exceeded, or the future is dropped.
    pub async fn poll_until_ready(
        &self,
        path: &str,
        options: PollOptions,
    ) -> Result<Value, PollError> {
        let started = Instant::now();
        let mut attempts: u32 = 0;
        let mut last: Option<ApiError> = None;

        loop {
            if let Some(max) = options.max_attempts {
                if attempts >= max {
                    break;
                }
            }
            if let Some(deadline) = options.deadline {
                if started.elapsed() >= deadline {
                    break;
                }
            }
            attempts += 1;

            let outcome = self
                .call(
                    path,
                    Method::Get,
                    None,
                    CallOptions::new().with_timeout(options.window),
                )
                .await;
            match outcome {
                Ok(Value::Null) => {
                    self.record(
                        "poll_retry",
                        format_args!("{path} not ready (attempt {attempts})"),
                    );
                }
                Ok(body) => return Ok(body),
                Err(err) => {
                    self.record(
                        "poll_retry",
                        format_args!("{path} attempt {attempts} failed: {err}"),
                    );
                    last = Some(err);
                }
            }
        }

        Err(PollError { attempts, last })
    }
}
