//! Single email view.

use iced::widget::{Space, column, container, row, text};
use iced::{Element, Length};

use hnumail_core::{ApiMessage, Email, Outcome, time};

use super::common;
use crate::message::{DetailMessage, Message};
use crate::style::widgets::{self, palette};

/// Outcomes of the actions offered on the detail screen.
#[derive(Debug, Clone, Default)]
pub struct DetailActions {
    /// Mark-as-read call.
    pub mark_read: Outcome<Email>,
    /// Move-to-trash call.
    pub move_to_trash: Outcome<ApiMessage>,
    /// Delete call.
    pub delete: Outcome<ApiMessage>,
}

/// Renders the loaded email, or its loading and failure states.
pub fn view_email_detail(detail: Outcome<Email>, actions: &DetailActions) -> Element<'static, Message> {
    match detail {
        Outcome::Idle | Outcome::Pending => common::placeholder("Loading message..."),
        Outcome::Failure(message) => {
            common::failure_with_retry(&message, Message::Detail(DetailMessage::Retry))
        }
        Outcome::Success(email) => common::page(view_email(&email, actions)),
    }
}

fn view_email(email: &Email, actions: &DetailActions) -> Element<'static, Message> {
    let p = palette::current();
    let busy = actions.mark_read.is_pending()
        || actions.move_to_trash.is_pending()
        || actions.delete.is_pending();
    let enabled = |message: DetailMessage| (!busy).then_some(Message::Detail(message));

    let subject = text(email.subject_or_placeholder().to_string())
        .size(24)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .color(p.text_primary);

    let sent_at = email
        .sent_at
        .as_deref()
        .map(time::format_absolute)
        .unwrap_or_default();

    let header = column![
        subject,
        common::info_row("From", &email.from),
        common::info_row("To", &email.to),
        common::info_row("Date", &sent_at),
        common::info_row("Folder", email.folder.display_name()),
    ]
    .spacing(6);

    let mut toolbar = row![
        common::primary_button("Reply", enabled(DetailMessage::Reply)),
        common::secondary_button("Forward", enabled(DetailMessage::Forward)),
    ]
    .spacing(8);
    if !email.is_read {
        toolbar = toolbar.push(common::secondary_button(
            "Mark as read",
            enabled(DetailMessage::MarkRead),
        ));
    }
    toolbar = toolbar
        .push(Space::new().width(Length::Fill))
        .push(common::secondary_button(
            "Move to trash",
            enabled(DetailMessage::MoveToTrash),
        ))
        .push(common::danger_button("Delete", enabled(DetailMessage::Delete)));

    let status = status_line(actions);

    let body = container(text(email.content.clone()).size(15).color(p.text_primary))
        .padding(20)
        .width(Length::Fill)
        .style(widgets::card_style);

    column![header, toolbar, status, body]
        .spacing(16)
        .into()
}

fn status_line(actions: &DetailActions) -> Element<'static, Message> {
    if let Some(message) = actions
        .mark_read
        .failure()
        .or_else(|| actions.move_to_trash.failure())
        .or_else(|| actions.delete.failure())
    {
        return common::error_banner(message);
    }
    if actions.mark_read.success().is_some() {
        return common::success_banner("Marked as read");
    }
    Space::new().height(0).into()
}
