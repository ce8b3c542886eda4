//! Container style functions with theme support.

use iced::widget::container;
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Top bar with a bottom hairline.
pub fn header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        shadow: shadows::subtle(),
        ..Default::default()
    }
}

/// Navigation drawer.
pub fn drawer_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_sunken)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Full-window background.
pub fn page_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        text_color: Some(p.text_primary),
        ..Default::default()
    }
}

/// Card holding a form or a message body.
pub fn card_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::raised(),
        ..Default::default()
    }
}

/// Unread marker strip in an email row.
pub fn email_row_style(unread: bool) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();
        container::Style {
            background: Some(Background::Color(if unread {
                p.unread
            } else {
                Color::TRANSPARENT
            })),
            border: Border {
                radius: radius::SMALL.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

fn banner(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: 0.12, ..color })),
        text_color: Some(color),
        border: Border {
            color,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        ..Default::default()
    }
}

/// Failure banner.
pub fn error_banner_style(_theme: &iced::Theme) -> container::Style {
    banner(palette::current().accent_red)
}

/// Success banner.
pub fn success_banner_style(_theme: &iced::Theme) -> container::Style {
    banner(palette::current().accent_green)
}
