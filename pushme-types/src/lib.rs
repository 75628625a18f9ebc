//! # pushme-types
//!
//! Shared types for the PushMe push-notification API.
//!
//! This crate provides the foundational types used across the PushMe crates:
//! - [`ApiRequest`], [`ApiResponse`], [`Method`], [`BasicAuth`] - Transport descriptors
//! - [`ApiError`], [`ErrorKind`], [`ErrorCode`] - The three-kind error taxonomy
//! - [`PushMessage`], [`PushReply`], [`DeviceRegistration`] - Typed request payloads
//! - [`category`] - Notification category definitions and action resolution

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
mod error;
mod payload;
mod request;

pub use error::{ApiError, ErrorCode, ErrorKind, TransportCode};
pub use payload::{DeviceRegistration, PushMessage, PushReply};
pub use request::{ApiRequest, ApiResponse, BasicAuth, Method};
