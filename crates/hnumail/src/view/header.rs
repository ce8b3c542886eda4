//! Header bar shown above every signed-in screen.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};

use hnumail_core::{Route, Session};

use crate::message::Message;
use crate::style::widgets::{ThemeMode, header_style, palette, secondary_button_style};

/// Renders the header with menu, back, title, theme and account.
pub fn view_header(
    route: Route,
    can_go_back: bool,
    session: Option<&Session>,
    theme_mode: ThemeMode,
) -> Element<'static, Message> {
    let p = palette::current();

    let menu = button(text("\u{2630}").size(20).color(p.text_secondary))
        .padding([8, 12])
        .style(secondary_button_style)
        .on_press(Message::ToggleDrawer);

    let back: Element<'static, Message> = if can_go_back {
        button(text("\u{2190}").size(18).color(p.text_secondary))
            .padding([8, 12])
            .style(secondary_button_style)
            .on_press(Message::Back)
            .into()
    } else {
        Space::new().width(0).into()
    };

    let title = text(route.title())
        .size(20)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .color(p.primary);

    let theme_icon = match theme_mode {
        ThemeMode::Light => "\u{263E}",
        ThemeMode::Dark => "\u{2600}",
    };
    let theme = button(text(theme_icon).size(18).color(p.text_secondary))
        .padding([8, 12])
        .style(secondary_button_style)
        .on_press(Message::ToggleTheme);

    let account: Element<'static, Message> = match session {
        Some(session) => {
            let label = if session.is_admin() {
                format!("{} (admin)", session.username)
            } else {
                session.username.clone()
            };
            text(label).size(13).color(p.text_secondary).into()
        }
        None => Space::new().width(0).into(),
    };

    container(
        row![
            menu,
            back,
            title,
            Space::new().width(Length::Fill),
            account,
            theme,
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding([10, 16])
    .width(Length::Fill)
    .style(header_style)
    .into()
}
