//! Device registration endpoints.

use serde_json::Value;

use pushme_types::{ApiError, DeviceRegistration, Method};

use crate::client::{CallOptions, PushMeClient};
use crate::transport::Transport;

/// Device endpoints, reached through [`PushMeClient::device`].
pub struct DeviceService<'a, T: Transport> {
    client: &'a PushMeClient<T>,
}

impl<'a, T: Transport> DeviceService<'a, T> {
    pub(crate) fn new(client: &'a PushMeClient<T>) -> Self {
        Self { client }
    }

    /// All devices registered to the authenticated user.
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client
            .call("/device", Method::Get, None, CallOptions::new())
            .await
    }

    /// A single device by its id.
    pub async fn get(&self, device_id: &str) -> Result<Value, ApiError> {
        self.client
            .call(
                &format!("/device/{device_id}"),
                Method::Get,
                None,
                CallOptions::new(),
            )
            .await
    }

    /// Register a device.
    pub async fn create(&self, registration: &DeviceRegistration) -> Result<Value, ApiError> {
        self.client
            .call(
                "/device/create",
                Method::Post,
                Some(super::to_body(registration)),
                CallOptions::new(),
            )
            .await
    }

    /// Update a registered device by its key.
    pub async fn update(&self, device_key: &str, update: Value) -> Result<Value, ApiError> {
        self.client
            .call(
                &format!("/device/{device_key}"),
                Method::Post,
                Some(update),
                CallOptions::new(),
            )
            .await
    }

    /// Remove a device by its id.
    pub async fn delete(&self, device_id: &str) -> Result<Value, ApiError> {
        self.client
            .call(
                &format!("/device/{device_id}"),
                Method::Delete,
                None,
                CallOptions::new(),
            )
            .await
    }

    /// Ask the backend to send a test notification to the device.
    pub async fn send_test(&self, device_key: &str) -> Result<Value, ApiError> {
        self.client
            .call(
                &format!("/device/{device_key}/test"),
                Method::Post,
                None,
                CallOptions::new(),
            )
            .await
    }
}
