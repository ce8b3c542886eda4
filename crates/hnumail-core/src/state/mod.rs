//! Observable view-model state.
//!
//! Each backend operation owns one [`Slot`] holding the latest [`Outcome`].
//! Screens read slots to render and subscribe to them for change
//! notifications.

mod slot;
mod view_model;

pub use slot::{Outcome, Slot};
pub use view_model::{LATEST_DRAFT_WINDOW, MailViewModel, Slots, newest_draft};
