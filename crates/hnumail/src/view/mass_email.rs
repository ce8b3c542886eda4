//! Admin broadcast form.

use iced::widget::{Column, Space, button, column, container, row, text, text_editor};
use iced::{Alignment, Element, Length};

use hnumail_core::{ApiMessage, Outcome, User};

use super::common;
use crate::message::{BroadcastMessage, Message};
use crate::model::BroadcastForm;
use crate::style::widgets::{self, palette};

/// Renders the mass email screen.
pub fn view_mass_email<'a>(
    form: &'a BroadcastForm,
    users: Outcome<Vec<User>>,
    send: Outcome<ApiMessage>,
) -> Element<'a, Message> {
    let p = palette::current();
    let pending = send.is_pending();
    let ready = !pending && form.request().is_ok();

    let compose = column![
        common::labeled_input("Subject", "Subject", &form.subject, |s| {
            Message::Broadcast(BroadcastMessage::SubjectChanged(s))
        }),
        column![
            text("Message").size(12).color(p.text_secondary),
            text_editor(&form.content)
                .placeholder("Write the announcement...")
                .on_action(|action| Message::Broadcast(BroadcastMessage::BodyEdited(action)))
                .padding(12)
                .height(Length::Fixed(220.0))
                .style(widgets::editor_style),
        ]
        .spacing(4),
        text(form.audience()).size(13).color(p.text_secondary),
    ]
    .spacing(10);

    let status: Element<'static, Message> = match (&form.error, &send) {
        (Some(err), _) => common::error_banner(err),
        (None, Outcome::Failure(err)) => common::error_banner(err),
        (None, Outcome::Pending) => common::placeholder("Sending..."),
        _ => Space::new().height(0).into(),
    };

    let actions = row![
        Space::new().width(Length::Fill),
        common::primary_button(
            "Send to recipients",
            ready.then_some(Message::Broadcast(BroadcastMessage::Send)),
        ),
    ];

    common::page(
        column![
            text("Mass email").size(28).color(p.text_primary),
            common::section("Message", compose),
            status,
            actions,
            recipients_section(form, users),
        ]
        .spacing(16),
    )
}

fn recipients_section(form: &BroadcastForm, users: Outcome<Vec<User>>) -> Element<'static, Message> {
    let p = palette::current();
    let list: Element<'static, Message> = match users {
        Outcome::Idle | Outcome::Pending => common::placeholder("Loading users..."),
        Outcome::Failure(message) => common::failure_with_retry(
            &message,
            Message::Broadcast(BroadcastMessage::ReloadUsers),
        ),
        Outcome::Success(users) => Column::with_children(
            users
                .iter()
                .map(|user| recipient_row(user, form.selected.contains(&user.id))),
        )
        .spacing(2)
        .into(),
    };

    let controls = row![
        text(format!("{} selected", form.selected.len()))
            .size(13)
            .color(p.text_muted),
        Space::new().width(Length::Fill),
        common::secondary_button(
            "Select all",
            Some(Message::Broadcast(BroadcastMessage::SelectAll)),
        ),
        common::secondary_button(
            "Clear",
            (!form.selected.is_empty())
                .then_some(Message::Broadcast(BroadcastMessage::ClearSelection)),
        ),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    common::section("Recipients (optional)", column![controls, list].spacing(10))
}

fn recipient_row(user: &User, selected: bool) -> Element<'static, Message> {
    let p = palette::current();
    let mark = if selected { "\u{2611}" } else { "\u{2610}" };

    let content = row![
        text(mark).size(16).color(if selected { p.primary } else { p.text_muted }),
        text(user.display_name().to_string())
            .size(14)
            .color(p.text_primary),
        Space::new().width(Length::Fill),
        text(user.email.clone()).size(12).color(p.text_muted),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    button(container(content).padding([6, 10]).width(Length::Fill))
        .on_press(Message::Broadcast(BroadcastMessage::ToggleRecipient(user.id)))
        .padding(0)
        .width(Length::Fill)
        .style(if selected {
            widgets::drawer_item_selected_style
        } else {
            widgets::drawer_item_style
        })
        .into()
}
