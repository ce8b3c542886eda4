//! Compose message view.

use iced::widget::{Space, column, row, text, text_editor, text_input};
use iced::{Element, Length};

use hnumail_core::{ApiMessage, Email, Outcome};

use super::common;
use crate::message::{ComposeMessage, Message};
use crate::model::ComposeState;
use crate::style::widgets::{self, palette};

/// Renders the compose form.
pub fn view_compose<'a>(
    state: &'a ComposeState,
    draft: Outcome<Email>,
    send: Outcome<ApiMessage>,
    save: Outcome<ApiMessage>,
) -> Element<'a, Message> {
    let p = palette::current();

    let title = if state.draft_id.is_some() {
        "Edit draft"
    } else {
        "New message"
    };

    let loading_draft = state.draft_id.is_some() && draft.is_pending();
    let busy = loading_draft || send.is_pending() || save.is_pending();

    let to_row = field_row("To:", &state.to, "name@hnu.edu.cn", |s| {
        Message::Compose(ComposeMessage::ToChanged(s))
    });
    let subject_row = field_row("Subject:", &state.subject, "Subject", |s| {
        Message::Compose(ComposeMessage::SubjectChanged(s))
    });

    let body_input = text_editor(&state.content)
        .placeholder("Write your message here...")
        .on_action(|action| Message::Compose(ComposeMessage::BodyEdited(action)))
        .padding(12)
        .size(14)
        .height(Length::Fixed(320.0))
        .style(widgets::editor_style);

    let body_row = row![
        text("Message:")
            .size(14)
            .color(p.text_secondary)
            .width(Length::Fixed(80.0)),
        body_input,
    ]
    .spacing(12)
    .align_y(iced::Alignment::Start);

    let status: Element<'static, Message> = if loading_draft {
        common::placeholder("Loading draft...")
    } else if let Some(err) = draft.failure().filter(|_| state.draft_id.is_some()) {
        common::error_banner(err)
    } else if let Some(err) = &state.error {
        common::error_banner(err)
    } else if let Some(err) = send.failure().or_else(|| save.failure()) {
        common::error_banner(err)
    } else if save.success().is_some() {
        common::success_banner("Draft saved")
    } else if send.is_pending() {
        common::placeholder("Sending...")
    } else {
        Space::new().height(0).into()
    };

    let actions = row![
        common::secondary_button(
            "Discard",
            (!busy).then_some(Message::Compose(ComposeMessage::Discard)),
        ),
        Space::new().width(Length::Fill),
        common::secondary_button(
            "Save draft",
            (!busy && state.has_content()).then_some(Message::Compose(ComposeMessage::SaveDraft)),
        ),
        common::primary_button(
            "Send",
            (!busy && state.can_send()).then_some(Message::Compose(ComposeMessage::Send)),
        ),
    ]
    .spacing(8);

    common::page(
        column![
            text(title).size(28).color(p.text_primary),
            to_row,
            subject_row,
            body_row,
            status,
            actions,
        ]
        .spacing(16),
    )
}

fn field_row(
    label: &'static str,
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> Message + 'static,
) -> Element<'static, Message> {
    let p = palette::current();
    row![
        text(label)
            .size(14)
            .color(p.text_secondary)
            .width(Length::Fixed(80.0)),
        text_input(placeholder, value)
            .on_input(on_change)
            .padding(10)
            .size(14)
            .width(Length::Fill)
            .style(widgets::input_style),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center)
    .into()
}
