//! Notification categories and action resolution.
//!
//! A category describes how a class of pushes renders on the device: its
//! human-readable title and the action buttons or text inputs it offers.
//! The set of categories is fixed at compile time and shared between the
//! backend, the apps, and this SDK; apps feed the definitions to their
//! platform notification layer (the shape follows Expo's category API,
//! <https://docs.expo.dev/versions/latest/sdk/notifications/>).
//!
//! When the user taps a declared button, the response carries that button's
//! identifier. When the user opens the notification directly, platforms
//! report the reserved [`DEFAULT_ACTION_IDENTIFIER`] instead; [`action`]
//! resolves it to a synthetic "Default" action for every known category,
//! including ones that declare no buttons at all.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Identifier platforms report when the notification body itself was tapped.
pub const DEFAULT_ACTION_IDENTIFIER: &str = "expo.modules.notifications.actions.DEFAULT";

/// Category identifiers the backend and apps agree on.
pub mod ids {
    /// Plain notification, no buttons.
    pub const SIMPLE_PUSH: &str = "simple.push";
    /// Approve and deny buttons.
    pub const BUTTON_APPROVE_DENY: &str = "button.approve_deny";
    /// Yes and no buttons.
    pub const BUTTON_YES_NO: &str = "button.yes_no";
    /// Single acknowledge button.
    pub const BUTTON_ACKNOWLEDGE: &str = "button.acknowledge";
    /// Single button that opens a link from the push data.
    pub const BUTTON_OPEN_LINK: &str = "button.open_link";
    /// Inline text input that replies to the sender.
    pub const INPUT_REPLY: &str = "input.reply";
    /// Inline text input that submits a value.
    pub const INPUT_SUBMIT: &str = "input.submit";
}

/// Display hints for an action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOptions {
    /// Whether invoking the action brings the app to the foreground.
    /// Absent when the category leaves it to the platform default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opens_app_to_foreground: Option<bool>,
    /// Whether the device must be unlocked to invoke the action.
    pub is_authentication_required: bool,
}

/// Text-input prompt attached to an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInput {
    /// Label on the submit button.
    pub submit_button_title: String,
}

/// A single button or input a notification can present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationAction {
    /// Button label.
    pub title: String,
    /// Identifier reported back when the action is taken.
    pub identifier: String,
    /// Text-input prompt, for input actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_input: Option<TextInput>,
    /// Display hints; the synthetic default action has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ActionOptions>,
}

impl NotificationAction {
    /// The synthetic action representing "notification opened directly."
    pub fn default_action() -> Self {
        Self {
            title: "Default".to_string(),
            identifier: "default".to_string(),
            text_input: None,
            options: None,
        }
    }
}

/// A notification category definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationCategory {
    /// Human-readable name.
    pub title: String,
    /// Whether opening the notification itself reports the default action.
    pub send_default_action: bool,
    /// Declared action buttons, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<NotificationAction>,
}

fn button(title: &str, identifier: &str) -> NotificationAction {
    NotificationAction {
        title: title.to_string(),
        identifier: identifier.to_string(),
        text_input: None,
        options: Some(ActionOptions {
            opens_app_to_foreground: Some(false),
            is_authentication_required: false,
        }),
    }
}

fn input(title: &str, identifier: &str, submit_button_title: &str) -> NotificationAction {
    NotificationAction {
        title: title.to_string(),
        identifier: identifier.to_string(),
        text_input: Some(TextInput {
            submit_button_title: submit_button_title.to_string(),
        }),
        options: Some(ActionOptions {
            opens_app_to_foreground: Some(false),
            is_authentication_required: false,
        }),
    }
}

static DEFINITIONS: LazyLock<HashMap<&'static str, NotificationCategory>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    table.insert(
        ids::SIMPLE_PUSH,
        NotificationCategory {
            title: "Simple Push".to_string(),
            send_default_action: true,
            actions: Vec::new(),
        },
    );
    table.insert(
        ids::BUTTON_APPROVE_DENY,
        NotificationCategory {
            title: "Approve/Deny Buttons".to_string(),
            send_default_action: false,
            actions: vec![button("Approve", "approve"), button("Deny", "deny")],
        },
    );
    table.insert(
        ids::BUTTON_YES_NO,
        NotificationCategory {
            title: "Yes/No Buttons".to_string(),
            send_default_action: false,
            actions: vec![button("Yes", "yes"), button("No", "no")],
        },
    );
    table.insert(
        ids::BUTTON_ACKNOWLEDGE,
        NotificationCategory {
            title: "Acknowledge Button".to_string(),
            send_default_action: false,
            actions: vec![button("Acknowledge", "acknowledge")],
        },
    );
    table.insert(
        ids::BUTTON_OPEN_LINK,
        NotificationCategory {
            title: "Open Link Button".to_string(),
            send_default_action: true,
            actions: vec![NotificationAction {
                title: "Open Link".to_string(),
                identifier: "open_link".to_string(),
                text_input: None,
                // No foreground hint declared; the platform decides.
                options: Some(ActionOptions {
                    opens_app_to_foreground: None,
                    is_authentication_required: false,
                }),
            }],
        },
    );
    table.insert(
        ids::INPUT_REPLY,
        NotificationCategory {
            title: "Reply Input".to_string(),
            send_default_action: false,
            actions: vec![input("Reply", "reply", "Reply")],
        },
    );
    table.insert(
        ids::INPUT_SUBMIT,
        NotificationCategory {
            title: "Submit Input".to_string(),
            send_default_action: false,
            actions: vec![input("Submit", "submit", "Submit")],
        },
    );
    table
});

/// The full category table, for registering with a platform notification layer.
pub fn definitions() -> &'static HashMap<&'static str, NotificationCategory> {
    &DEFINITIONS
}

/// Looks up a category definition by identifier.
pub fn category(category_id: &str) -> Option<&'static NotificationCategory> {
    DEFINITIONS.get(category_id)
}

/// Resolves the action a push response reported.
///
/// Declared actions win by exact identifier match. The reserved
/// [`DEFAULT_ACTION_IDENTIFIER`] resolves to the synthetic default action
/// for any known category, whether or not it declares actions. Unknown
/// categories and unknown identifiers resolve to `None`.
pub fn action(category_id: &str, action_identifier: &str) -> Option<NotificationAction> {
    let category = category(category_id)?;
    if let Some(found) = category
        .actions
        .iter()
        .find(|action| action.identifier == action_identifier)
    {
        return Some(found.clone());
    }
    if action_identifier == DEFAULT_ACTION_IDENTIFIER {
        return Some(NotificationAction::default_action());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_contains_all_seven_categories() {
        assert_eq!(definitions().len(), 7);
        for id in [
            ids::SIMPLE_PUSH,
            ids::BUTTON_APPROVE_DENY,
            ids::BUTTON_YES_NO,
            ids::BUTTON_ACKNOWLEDGE,
            ids::BUTTON_OPEN_LINK,
            ids::INPUT_REPLY,
            ids::INPUT_SUBMIT,
        ] {
            assert!(category(id).is_some(), "missing category {id}");
        }
    }

    #[test]
    fn category_lookup_returns_definition() {
        let found = category(ids::BUTTON_APPROVE_DENY).unwrap();
        assert_eq!(found.title, "Approve/Deny Buttons");
        assert!(!found.send_default_action);
        assert_eq!(found.actions.len(), 2);
    }

    #[test]
    fn unknown_category_is_none() {
        assert!(category("fake.category").is_none());
        assert!(action("fake.category", "approve").is_none());
    }

    #[test]
    fn declared_action_resolves_by_identifier() {
        let found = action(ids::BUTTON_OPEN_LINK, "open_link").unwrap();
        assert_eq!(found.title, "Open Link");
        assert_eq!(found.identifier, "open_link");
    }

    #[test]
    fn unknown_action_is_none() {
        assert!(action(ids::BUTTON_OPEN_LINK, "fake-action").is_none());
        assert!(action(ids::SIMPLE_PUSH, "fake-action").is_none());
    }

    #[test]
    fn default_sentinel_resolves_for_categories_with_actions() {
        let found = action(ids::BUTTON_APPROVE_DENY, DEFAULT_ACTION_IDENTIFIER).unwrap();
        assert_eq!(found.identifier, "default");
        assert_eq!(found.title, "Default");
    }

    #[test]
    fn default_sentinel_resolves_for_categories_without_actions() {
        let found = action(ids::SIMPLE_PUSH, DEFAULT_ACTION_IDENTIFIER).unwrap();
        assert_eq!(found.identifier, "default");
        assert_eq!(found.title, "Default");
        assert!(found.options.is_none());
    }

    #[test]
    fn lookups_are_idempotent() {
        let first = action(ids::INPUT_REPLY, "reply").unwrap();
        let second = action(ids::INPUT_REPLY, "reply").unwrap();
        assert_eq!(first, second);
        let input = first.text_input.unwrap();
        assert_eq!(input.submit_button_title, "Reply");
    }

    #[test]
    fn category_serializes_like_the_backend_expects() {
        let value = serde_json::to_value(category(ids::INPUT_SUBMIT).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Submit Input",
                "sendDefaultAction": false,
                "actions": [{
                    "title": "Submit",
                    "identifier": "submit",
                    "textInput": {"submitButtonTitle": "Submit"},
                    "options": {
                        "opensAppToForeground": false,
                        "isAuthenticationRequired": false,
                    },
                }],
            })
        );
    }

    #[test]
    fn simple_push_omits_its_empty_action_list() {
        let value = serde_json::to_value(category(ids::SIMPLE_PUSH).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"title": "Simple Push", "sendDefaultAction": true})
        );
    }
}
