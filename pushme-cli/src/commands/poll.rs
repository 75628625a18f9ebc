//! Long-poll a push until its status arrives.

use std::time::Duration;

use anyhow::{Context, Result};

use pushme_client::{PollOptions, PushMeClient, Transport};

/// Run the poll command.
pub async fn run<T: Transport>(
    client: &PushMeClient<T>,
    push_ident: &str,
    max_attempts: Option<u32>,
    deadline_secs: Option<u64>,
) -> Result<()> {
    let mut options = PollOptions::new();
    if let Some(max) = max_attempts {
        options = options.with_max_attempts(max);
    }
    if let Some(secs) = deadline_secs {
        options = options.with_deadline(Duration::from_secs(secs));
    }

    let status = client
        .push()
        .poll_delivery(push_ident, options)
        .await
        .context("No status arrived within the configured bounds")?;
    println!("{}", serde_json::to_string_pretty(&status)?);

    Ok(())
}
