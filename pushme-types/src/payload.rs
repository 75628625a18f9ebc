//! Typed request payloads for the endpoints with a known body shape.
//!
//! Wire names are camelCase to match the backend. Everything the backend
//! returns stays a [`serde_json::Value`]; only outgoing bodies are typed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A push message addressed to a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushMessage {
    /// Notification category the receiving app renders, e.g. `button.approve_deny`.
    pub category_id: String,
    /// Notification title.
    pub title: String,
    /// Body text shown under the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Free-form data forwarded to the receiving device untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl PushMessage {
    /// A message with the given category and title and nothing else.
    pub fn new(category_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            category_id: category_id.into(),
            title: title.into(),
            body: None,
            data: None,
        }
    }

    /// Sets the body text.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attaches free-form data.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// A user's reaction to a delivered push, reported back to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushReply {
    /// Category of the originating push.
    pub category_identifier: String,
    /// Identifier of the action the user took.
    pub action_identifier: String,
    /// Text the user entered, for text-input actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_text: Option<String>,
}

impl PushReply {
    /// A reply reporting the given action.
    pub fn new(category_identifier: impl Into<String>, action_identifier: impl Into<String>) -> Self {
        Self {
            category_identifier: category_identifier.into(),
            action_identifier: action_identifier.into(),
            response_text: None,
        }
    }

    /// Attaches the entered text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.response_text = Some(text.into());
        self
    }
}

/// Registration details for a device installing the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRegistration {
    /// Stable identifier generated by the installing device.
    pub device_key: String,
    /// Push token used to reach the device.
    pub token: String,
    /// Raw platform token, when the push provider's differs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_token: Option<Value>,
    /// Platform type, e.g. `ios` or `android`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl DeviceRegistration {
    /// A registration with the required fields.
    pub fn new(
        device_key: impl Into<String>,
        token: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            device_key: device_key.into(),
            token: token.into(),
            native_token: None,
            kind: kind.into(),
        }
    }

    /// Attaches the raw platform token.
    pub fn with_native_token(mut self, native_token: Value) -> Self {
        self.native_token = Some(native_token);
        self
    }
}
