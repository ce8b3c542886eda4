//! Screen state for the client.

mod admin;
mod auth;
mod broadcast;
mod compose;
mod mailbox;
mod profile;
mod settings;

pub use admin::{CreateUserForm, ResetPasswordDialog, UserAdminState};
pub use auth::{LoginForm, RegisterForm};
pub use broadcast::BroadcastForm;
pub use compose::ComposeState;
pub use mailbox::MailboxTab;
pub use profile::{PasswordDialog, ProfileForm};
pub use settings::AppSettings;
