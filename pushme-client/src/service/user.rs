//! Account registration, login, and profile endpoints.
//!
//! The two login calls capture the credential the backend hands back and
//! store it on the client, so a successful login is all it takes for every
//! later call to go out authenticated.

use serde_json::{json, Value};

use pushme_types::{ApiError, Method};

use crate::client::{CallOptions, PushMeClient};
use crate::transport::Transport;

/// User account endpoints, reached through [`PushMeClient::user`].
pub struct UserService<'a, T: Transport> {
    client: &'a PushMeClient<T>,
}

impl<'a, T: Transport> UserService<'a, T> {
    pub(crate) fn new(client: &'a PushMeClient<T>) -> Self {
        Self { client }
    }

    /// Register a new account with an email and password.
    pub async fn email_register(&self, email: &str, password: &str) -> Result<Value, ApiError> {
        self.client
            .call(
                "/auth/email/register",
                Method::Post,
                Some(json!({"email": email, "password": password})),
                CallOptions::new(),
            )
            .await
    }

    /// Log in with an email and password.
    ///
    /// On a `success: true` answer the returned `user.token` becomes the
    /// client's bearer credential.
    pub async fn email_login(&self, email: &str, password: &str) -> Result<Value, ApiError> {
        let body = self
            .client
            .call(
                "/auth/email/login",
                Method::Post,
                Some(json!({"email": email, "password": password})),
                CallOptions::new(),
            )
            .await?;
        self.capture_token(&body, "/user/token");
        Ok(body)
    }

    /// Log in with a Google ID token.
    ///
    /// On a `success: true` answer the returned `accessToken` becomes the
    /// client's bearer credential.
    pub async fn auth_with_google(&self, id_token: &str) -> Result<Value, ApiError> {
        let body = self
            .client
            .call(
                "/auth/google/token",
                Method::Post,
                Some(json!({"idToken": id_token})),
                CallOptions::new(),
            )
            .await?;
        self.capture_token(&body, "/accessToken");
        Ok(body)
    }

    /// Change the account's email address.
    pub async fn update_email(&self, email: &str) -> Result<Value, ApiError> {
        self.client
            .call(
                "/auth/email/email",
                Method::Post,
                Some(json!({"email": email})),
                CallOptions::new(),
            )
            .await
    }

    /// Change the account's password.
    pub async fn update_password(&self, password: &str) -> Result<Value, ApiError> {
        self.client
            .call(
                "/auth/email/password",
                Method::Post,
                Some(json!({"password": password})),
                CallOptions::new(),
            )
            .await
    }

    /// The currently authenticated user.
    pub async fn current(&self) -> Result<Value, ApiError> {
        self.client
            .call("/user", Method::Get, None, CallOptions::new())
            .await
    }

    /// Delete the authenticated account.
    pub async fn delete_self(&self) -> Result<Value, ApiError> {
        self.client
            .call("/user", Method::Delete, None, CallOptions::new())
            .await
    }

    /// Store the token at `pointer` as the client credential when the body
    /// reports success. A successful answer missing the token field leaves
    /// the credential untouched.
    fn capture_token(&self, body: &Value, pointer: &str) {
        if body.get("success").and_then(Value::as_bool) != Some(true) {
            return;
        }
        if let Some(token) = body.pointer(pointer).and_then(Value::as_str) {
            self.client.set_access_token(token);
        }
    }
}
