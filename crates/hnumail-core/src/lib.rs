//! # hnumail-core
//!
//! Client-side core of the `HnuMail` desktop client.
//!
//! This crate provides:
//! - A JSON-over-HTTP transport with bearer-token authentication
//! - A repository with one method per backend endpoint
//! - Domain models mirroring the backend wire format
//! - An observable view-model with one outcome slot per operation
//! - Navigation history for the screens of the client
//! - Advisory form validation, configuration and time formatting

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
mod error;
pub mod model;
pub mod navigation;
pub mod repository;
pub mod state;
pub mod time;
pub mod transport;
pub mod validation;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use model::{
    ApiMessage, BroadcastRequest, ChangePasswordRequest, CreateUserRequest, Credentials, Email,
    EmailRequest, Folder, Page, RegisterRequest, ResetPasswordRequest, Session,
    UpdateProfileRequest, User, UserProfile, UserRole, UserStatus,
};
pub use navigation::{Navigator, Route};
pub use repository::MailRepository;
pub use state::{MailViewModel, Outcome, Slot, Slots};
pub use transport::{ApiClient, ApiResponse};
pub use validation::{ValidationError, ValidationResult};
