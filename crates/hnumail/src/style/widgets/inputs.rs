//! Text input, editor and scrollable style functions.

use iced::widget::{container, scrollable, text_editor, text_input};
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Form text input.
pub fn input_style(_theme: &iced::Theme, status: text_input::Status) -> text_input::Style {
    let p = palette::current();

    let base = text_input::Style {
        background: Background::Color(p.surface_elevated),
        border: Border {
            color: p.border_medium,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        icon: p.text_muted,
        placeholder: p.text_muted,
        value: p.text_primary,
        selection: p.selected,
    };

    match status {
        text_input::Status::Active => base,
        text_input::Status::Hovered => text_input::Style {
            border: Border {
                color: p.text_muted,
                ..base.border
            },
            ..base
        },
        text_input::Status::Focused { .. } => text_input::Style {
            background: Background::Color(p.surface),
            border: Border {
                color: p.primary,
                ..base.border
            },
            ..base
        },
        text_input::Status::Disabled => text_input::Style {
            background: Background::Color(p.surface_sunken),
            value: p.text_muted,
            ..base
        },
    }
}

/// Multi-line body editor, drawn like [`input_style`].
pub fn editor_style(theme: &iced::Theme, status: text_editor::Status) -> text_editor::Style {
    let p = palette::current();
    let input = input_style(
        theme,
        match status {
            text_editor::Status::Active => text_input::Status::Active,
            text_editor::Status::Hovered => text_input::Status::Hovered,
            text_editor::Status::Focused { is_hovered } => text_input::Status::Focused { is_hovered },
            text_editor::Status::Disabled => text_input::Status::Disabled,
        },
    );

    let mut style = text_editor::default(theme, status);
    style.background = input.background;
    style.border = input.border;
    style.placeholder = p.text_muted;
    style.value = input.value;
    style.selection = input.selection;
    style
}

/// Scrollable with a thin rail that picks up the brand color when used.
pub fn scrollable_style(_theme: &iced::Theme, status: scrollable::Status) -> scrollable::Style {
    let p = palette::current();

    let rail = || scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(p.border_medium),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::SMALL.into(),
            },
        },
    };

    let mut style = scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail(),
        horizontal_rail: rail(),
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(p.surface),
            border: Border::default(),
            shadow: shadows::none(),
            icon: p.text_muted,
        },
    };

    let (vertical, horizontal, color) = match status {
        scrollable::Status::Active { .. } => return style,
        scrollable::Status::Hovered {
            is_horizontal_scrollbar_hovered,
            is_vertical_scrollbar_hovered,
            ..
        } => (
            is_vertical_scrollbar_hovered,
            is_horizontal_scrollbar_hovered,
            p.primary_light,
        ),
        scrollable::Status::Dragged {
            is_horizontal_scrollbar_dragged,
            is_vertical_scrollbar_dragged,
            ..
        } => (
            is_vertical_scrollbar_dragged,
            is_horizontal_scrollbar_dragged,
            p.primary,
        ),
    };

    if vertical {
        style.vertical_rail.scroller.background = Background::Color(color);
    }
    if horizontal {
        style.horizontal_rail.scroller.background = Background::Color(color);
    }
    style
}
