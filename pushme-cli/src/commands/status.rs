//! Show the current status of a push.

use anyhow::Result;

use pushme_client::{PushMeClient, Transport};

/// Run the status command. Prints the status document as-is so scripts can
/// pick out the fields they need.
pub async fn run<T: Transport>(client: &PushMeClient<T>, push_ident: &str) -> Result<()> {
    let status = client.push().status(push_ident).await?;
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}
