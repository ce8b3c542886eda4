//! View components for the application.

mod common;
mod compose;
mod drawer;
mod email_detail;
mod email_list;
mod header;
mod login;
mod mass_email;
mod profile;
mod register;
mod user_management;

pub use compose::view_compose;
pub use drawer::view_drawer;
pub use email_detail::{DetailActions, view_email_detail};
pub use email_list::view_email_list;
pub use header::view_header;
pub use login::view_login;
pub use mass_email::view_mass_email;
pub use profile::{ProfileOutcomes, view_profile};
pub use register::view_register;
pub use user_management::{UserAdminOutcomes, view_user_management};
