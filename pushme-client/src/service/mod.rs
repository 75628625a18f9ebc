//! Resource services grouped by backend area.
//!
//! Each service is a thin borrowed view over a [`PushMeClient`], reached
//! through its accessor (`client.user()`, `client.device()`, and so on).
//! Services know paths and payload shapes; dispatch, credentials, and error
//! classification all live in the client they borrow.
//!
//! [`PushMeClient`]: crate::PushMeClient

mod device;
mod push;
mod topic;
mod trio;
mod user;

pub use device::DeviceService;
pub use push::PushService;
pub use topic::TopicService;
pub use trio::TrioService;
pub use user::UserService;

use serde::Serialize;
use serde_json::Value;

/// Serialize a typed payload into a wire body.
fn to_body<T: Serialize>(payload: &T) -> Value {
    serde_json::to_value(payload).unwrap_or(Value::Null)
}
