//! Domain models mirroring the backend's JSON wire format.
//!
//! Field names are `camelCase` on the wire. Unknown fields are ignored and
//! missing or `null` fields fall back to their defaults.

mod api_message;
mod auth;
mod email;
mod page;
mod user;

pub use api_message::ApiMessage;
pub use auth::{Credentials, RegisterRequest, Session};
pub use email::{BroadcastRequest, Email, EmailRequest, Folder};
pub use page::Page;
pub use user::{
    ChangePasswordRequest, CreateUserRequest, ResetPasswordRequest, UpdateProfileRequest, User,
    UserProfile, UserRole, UserStatus,
};

use serde::{Deserialize, Deserializer};

/// Deserialize a value that the backend may send as `null`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
