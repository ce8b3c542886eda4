//! Widget styles shared by every screen.

#![allow(clippy::needless_update)] // Explicit struct updates for clarity

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

pub use palette::ThemeMode;

pub use containers::{
    card_style, drawer_style, email_row_style, error_banner_style, header_style,
    page_style, success_banner_style,
};

pub use buttons::{
    danger_button_style, drawer_item_selected_style, drawer_item_style, ghost_button_style,
    link_button_style, primary_button_style, row_button_style, secondary_button_style,
    tab_button_selected_style, tab_button_style,
};

pub use inputs::{editor_style, input_style, scrollable_style};
