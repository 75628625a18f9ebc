//! Send a push to a topic.

use anyhow::{Context, Result};
use serde_json::Value;

use pushme_client::{PollOptions, PushMeClient, Transport};
use pushme_types::{category, PushMessage};

/// Run the send command.
pub async fn run<T: Transport>(
    client: &PushMeClient<T>,
    secret: &str,
    category_id: &str,
    title: &str,
    body: Option<&str>,
    data: Option<&str>,
    wait: bool,
) -> Result<()> {
    if category::category(category_id).is_none() {
        anyhow::bail!(
            "Unknown category '{category_id}'. Known categories: {}",
            known_categories()
        );
    }

    let mut message = PushMessage::new(category_id, title);
    if let Some(body) = body {
        message = message.with_body(body);
    }
    if let Some(data) = data {
        let data: Value = serde_json::from_str(data).context("--data is not valid JSON")?;
        message = message.with_data(data);
    }

    let queued = client.push().send_to_topic(secret, &message).await?;
    let ident = queued
        .get("pushIdent")
        .and_then(Value::as_str)
        .with_context(|| format!("Backend did not return a push ident: {queued}"))?;
    println!("Push Ident: {ident}");

    if wait {
        println!("Waiting for a response...");
        let status = client.push().poll_delivery(ident, PollOptions::new()).await?;
        print_response(&status);
    }

    Ok(())
}

/// Print the recipient's answer, resolving the action identifier to its
/// declared definition where one exists.
fn print_response(status: &Value) {
    let Some(response) = status.get("firstValidResponse") else {
        println!("No response recorded: {status}");
        return;
    };

    let category_id = response
        .get("categoryIdentifier")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let action_id = response
        .get("actionIdentifier")
        .and_then(Value::as_str)
        .unwrap_or_default();

    match category::action(category_id, action_id) {
        Some(action) => println!("User responded with \"{}\"", action.title),
        None => println!("User responded with \"{action_id}\""),
    }

    if let Some(text) = response.get("responseText").and_then(Value::as_str) {
        println!("User entered \"{text}\"");
    }
}

fn known_categories() -> String {
    let mut ids: Vec<&str> = category::definitions().keys().copied().collect();
    ids.sort_unstable();
    ids.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pushme_client::{ClientConfig, MockTransport};
    use serde_json::json;

    fn client(transport: MockTransport) -> PushMeClient<MockTransport> {
        PushMeClient::with_transport(ClientConfig::new(), transport)
    }

    #[tokio::test]
    async fn send_posts_the_full_message() {
        let transport = MockTransport::new();
        transport.queue_response(200, json!({"success": true, "pushIdent": "abc"}));
        let client = client(transport.clone());

        run(
            &client,
            "topic-secret",
            "button.approve_deny",
            "Deploy to prod?",
            Some("Release 1.4.2 is ready."),
            Some(r#"{"release":"1.4.2"}"#),
            false,
        )
        .await
        .unwrap();

        let request = transport.last_request().unwrap();
        assert!(request.url.ends_with("/push/topic-secret"));
        assert_eq!(
            request.body,
            Some(json!({
                "categoryId": "button.approve_deny",
                "title": "Deploy to prod?",
                "body": "Release 1.4.2 is ready.",
                "data": {"release": "1.4.2"},
            }))
        );
    }

    #[tokio::test]
    async fn unknown_category_fails_before_any_request() {
        let transport = MockTransport::new();
        let client = client(transport.clone());

        let err = run(
            &client,
            "topic-secret",
            "fake.category",
            "hello",
            None,
            None,
            false,
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("Unknown category"));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn malformed_data_fails_before_any_request() {
        let transport = MockTransport::new();
        let client = client(transport.clone());

        let err = run(
            &client,
            "topic-secret",
            "simple.push",
            "hello",
            None,
            Some("{not json"),
            false,
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("--data"));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn missing_push_ident_is_an_error() {
        let transport = MockTransport::new();
        transport.queue_response(200, json!({"success": true}));
        let client = client(transport);

        let err = run(
            &client,
            "topic-secret",
            "simple.push",
            "hello",
            None,
            None,
            false,
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("push ident"));
    }

    #[tokio::test]
    async fn wait_polls_until_the_response_lands() {
        let transport = MockTransport::new();
        transport.queue_response(200, json!({"success": true, "pushIdent": "abc"}));
        transport.queue_response(200, Value::Null);
        transport.queue_response(
            200,
            json!({"firstValidResponse": {
                "categoryIdentifier": "button.approve_deny",
                "actionIdentifier": "approve",
            }}),
        );
        let client = client(transport.clone());

        run(
            &client,
            "topic-secret",
            "button.approve_deny",
            "Deploy to prod?",
            None,
            None,
            true,
        )
        .await
        .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        assert!(requests[1].url.ends_with("/push/abc/poll"));
        assert!(requests[2].url.ends_with("/push/abc/poll"));
    }
}
