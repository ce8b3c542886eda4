//! Navigation drawer.

use iced::widget::{Column, Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use hnumail_core::Route;

use crate::message::Message;
use crate::model::MailboxTab;
use crate::style::widgets::{
    drawer_item_selected_style, drawer_item_style, drawer_style, palette, scrollable_style,
};

/// Renders the drawer. Admin entries only appear for administrators.
pub fn view_drawer(route: Route, tab: MailboxTab, is_admin: bool) -> Element<'static, Message> {
    let on_list = route == Route::EmailList;

    let mut items: Vec<Element<'static, Message>> = vec![section_header("MAILBOX")];
    items.extend(MailboxTab::ALL.iter().map(|&entry| {
        item(
            entry.icon(),
            entry.label(),
            on_list && entry == tab,
            Message::SelectMailbox(entry),
        )
    }));

    items.push(section_header("WRITE"));
    items.push(item(
        "\u{270F}",
        "Compose",
        route == Route::Compose(None),
        Message::ComposeNew,
    ));
    items.push(item("\u{21A9}", "Resume latest draft", false, Message::ResumeLatestDraft));

    items.push(section_header("ACCOUNT"));
    items.push(item(
        "\u{1F464}",
        "Profile",
        route == Route::UserProfile,
        Message::Navigate(Route::UserProfile),
    ));

    if is_admin {
        items.push(section_header("ADMIN"));
        items.push(item(
            "\u{1F465}",
            "User management",
            route == Route::UserManagement,
            Message::Navigate(Route::UserManagement),
        ));
        items.push(item(
            "\u{1F4E2}",
            "Mass email",
            route == Route::MassEmail,
            Message::Navigate(Route::MassEmail),
        ));
    }

    let list = Column::with_children(items).spacing(2).padding([0, 8]);

    let logout = container(item("\u{1F6AA}", "Log out", false, Message::Logout)).padding(8);

    container(
        column![
            scrollable(list).height(Length::Fill).style(scrollable_style),
            logout,
        ]
        .spacing(0),
    )
    .width(Length::Fixed(220.0))
    .height(Length::Fill)
    .style(drawer_style)
    .into()
}

fn section_header(title: &'static str) -> Element<'static, Message> {
    let p = palette::current();
    container(
        text(title)
            .size(11)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            })
            .color(p.text_muted),
    )
    .padding([12, 8])
    .into()
}

fn item(
    icon: &'static str,
    label: &'static str,
    selected: bool,
    on_press: Message,
) -> Element<'static, Message> {
    let weight = if selected {
        iced::font::Weight::Semibold
    } else {
        iced::font::Weight::Normal
    };

    let content = row![
        text(icon).size(16),
        text(label).size(14).font(iced::Font {
            weight,
            ..Default::default()
        }),
        Space::new().width(Length::Fill),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    button(content)
        .on_press(on_press)
        .padding([8, 12])
        .width(Length::Fill)
        .style(if selected {
            drawer_item_selected_style
        } else {
            drawer_item_style
        })
        .into()
}
