//! Button style functions with theme support.

use iced::widget::button;
use iced::{Background, Border, Color};

use super::palette::{self, Palette};
use super::shadows;
use super::shadows::radius;

fn filled(p: &Palette, fill: Color, hover: Color, pressed: Color, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(fill)),
        text_color: p.text_on_primary,
        border: Border {
            color: fill,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::subtle(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover)),
            border: Border {
                color: hover,
                ..base.border
            },
            shadow: shadows::raised(),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(pressed)),
            shadow: shadows::none(),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(p.border_medium)),
            text_color: p.text_muted,
            border: Border {
                color: p.border_medium,
                ..base.border
            },
            shadow: shadows::none(),
            ..base
        },
    }
}

/// Primary action (login, send, save).
pub fn primary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();
    filled(&p, p.primary, p.primary_light, p.primary_dark, status)
}

/// Destructive action (delete, logout).
pub fn danger_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();
    let pressed = Color {
        a: 0.85,
        ..p.accent_red
    };
    filled(&p, p.accent_red, p.accent_red, pressed, status)
}

/// Outlined secondary action.
pub fn secondary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(p.surface)),
        text_color: p.text_primary,
        border: Border {
            color: p.border_medium,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            border: Border {
                color: p.primary,
                ..base.border
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.selected)),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: p.text_muted,
            ..base
        },
    }
}

/// Borderless icon/text button for toolbars.
pub fn ghost_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.text_secondary,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            text_color: p.text_primary,
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.selected)),
            text_color: p.primary,
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: p.text_muted,
            ..base
        },
    }
}

/// Inline text link ("Create an account").
pub fn link_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => p.primary_light,
            button::Status::Disabled => p.text_muted,
            button::Status::Active => p.primary,
        },
        border: Border::default(),
        shadow: shadows::none(),
        snap: false,
    }
}

/// Drawer entry.
pub fn drawer_item_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.text_primary,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.selected)),
            ..base
        },
    }
}

/// Drawer entry for the active mailbox.
pub fn drawer_item_selected_style(_theme: &iced::Theme, _status: button::Status) -> button::Style {
    let p = palette::current();

    button::Style {
        background: Some(Background::Color(p.selected)),
        text_color: p.primary,
        border: Border {
            color: p.primary,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::none(),
        snap: false,
    }
}

/// Mailbox tab.
pub fn tab_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.text_secondary,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::NONE.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            text_color: p.text_primary,
            background: Some(Background::Color(p.hover)),
            ..base
        },
        button::Status::Active | button::Status::Disabled => base,
    }
}

/// Mailbox tab that is currently shown.
pub fn tab_button_selected_style(_theme: &iced::Theme, _status: button::Status) -> button::Style {
    let p = palette::current();

    button::Style {
        background: Some(Background::Color(p.surface)),
        text_color: p.primary,
        border: Border {
            color: p.primary,
            width: 1.0,
            radius: radius::SMALL.into(),
        },
        shadow: shadows::none(),
        snap: false,
    }
}

/// Clickable list row (emails, users).
pub fn row_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(p.surface)),
        text_color: p.text_primary,
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.selected)),
            ..base
        },
    }
}
