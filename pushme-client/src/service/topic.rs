//! Topic management endpoints.
//!
//! Topics are the delivery channels pushes are addressed to. Creating one
//! yields the key/secret pair senders use; the secret alone is enough to
//! push, so treat it like a credential.

use serde_json::Value;

use pushme_types::{ApiError, Method};

use crate::client::{CallOptions, PushMeClient};
use crate::transport::Transport;

/// Topic endpoints, reached through [`PushMeClient::topic`].
pub struct TopicService<'a, T: Transport> {
    client: &'a PushMeClient<T>,
}

impl<'a, T: Transport> TopicService<'a, T> {
    pub(crate) fn new(client: &'a PushMeClient<T>) -> Self {
        Self { client }
    }

    /// All topics owned by the authenticated user.
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client
            .call("/topic", Method::Get, None, CallOptions::new())
            .await
    }

    /// A single topic by its id.
    pub async fn get(&self, topic_id: &str) -> Result<Value, ApiError> {
        self.client
            .call(
                &format!("/topic/{topic_id}"),
                Method::Get,
                None,
                CallOptions::new(),
            )
            .await
    }

    /// Create a topic, optionally with initial settings.
    pub async fn create(&self, data: Option<Value>) -> Result<Value, ApiError> {
        self.client
            .call("/topic", Method::Post, data, CallOptions::new())
            .await
    }

    /// Update a topic by its id.
    pub async fn update(&self, topic_id: &str, update: Value) -> Result<Value, ApiError> {
        self.client
            .call(
                &format!("/topic/{topic_id}"),
                Method::Post,
                Some(update),
                CallOptions::new(),
            )
            .await
    }

    /// Remove a topic by its id.
    pub async fn delete(&self, topic_id: &str) -> Result<Value, ApiError> {
        self.client
            .call(
                &format!("/topic/{topic_id}"),
                Method::Delete,
                None,
                CallOptions::new(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use crate::transport::MockTransport;
    use serde_json::json;

    fn client(transport: MockTransport) -> PushMeClient<MockTransport> {
        PushMeClient::with_transport(ClientConfig::new(), transport)
    }

    #[tokio::test]
    async fn create_without_data_posts_an_empty_body() {
        let transport = MockTransport::new();
        transport.queue_response(200, json!({"success": true, "topicKey": "k"}));
        let client = client(transport.clone());

        client.topic().create(None).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert!(request.url.ends_with("/topic"));
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn create_with_data_attaches_it() {
        let transport = MockTransport::new();
        transport.queue_response(200, json!({"success": true}));
        let client = client(transport.clone());

        client
            .topic()
            .create(Some(json!({"name": "alerts"})))
            .await
            .unwrap();

        assert_eq!(
            transport.last_request().unwrap().body,
            Some(json!({"name": "alerts"}))
        );
    }

    #[tokio::test]
    async fn listing_and_lookups_address_the_topic() {
        let transport = MockTransport::new();
        transport.queue_response(200, json!({"topics": []}));
        transport.queue_response(200, json!({"topic": {}}));
        transport.queue_response(200, json!({"success": true}));
        transport.queue_response(200, json!({"success": true}));
        let client = client(transport.clone());

        client.topic().list().await.unwrap();
        client.topic().get("9").await.unwrap();
        client
            .topic()
            .update("9", json!({"name": "renamed"}))
            .await
            .unwrap();
        client.topic().delete("9").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Get);
        assert!(requests[0].url.ends_with("/topic"));
        assert!(requests[1].url.ends_with("/topic/9"));
        assert_eq!(requests[2].body, Some(json!({"name": "renamed"})));
        assert_eq!(requests[3].method, Method::Delete);
        assert!(requests[3].url.ends_with("/topic/9"));
    }
}
