//! Mailbox listing with Inbox, Sent and Drafts tabs.

use iced::widget::{Column, Row, Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use hnumail_core::{Email, Outcome, Page, time};

use super::common;
use crate::message::Message;
use crate::model::MailboxTab;
use crate::style::widgets::{
    self, email_row_style, palette, row_button_style, scrollable_style, tab_button_selected_style,
    tab_button_style,
};

const PREVIEW_CHARS: usize = 80;

/// Renders the tab bar and the listing for the selected tab.
pub fn view_email_list(tab: MailboxTab, outcome: Outcome<Page<Email>>) -> Element<'static, Message> {
    let tabs = Row::with_children(MailboxTab::ALL.iter().map(|&entry| {
        button(text(entry.label()).size(14))
            .on_press(Message::SelectMailbox(entry))
            .padding([8, 18])
            .style(if entry == tab {
                tab_button_selected_style
            } else {
                tab_button_style
            })
            .into()
    }))
    .spacing(4);

    let refresh = button(text("\u{21BB}").size(16))
        .on_press(Message::RefreshMailbox)
        .padding([6, 12])
        .style(widgets::secondary_button_style);

    let toolbar = row![tabs, Space::new().width(Length::Fill), refresh]
        .align_y(Alignment::Center)
        .padding([8, 16]);

    let body: Element<'static, Message> = match outcome {
        Outcome::Idle | Outcome::Pending => common::placeholder("Loading..."),
        Outcome::Failure(message) => common::failure_with_retry(&message, Message::RefreshMailbox),
        Outcome::Success(page) if page.is_empty() => common::placeholder(tab.empty_text()),
        Outcome::Success(page) => view_page(tab, &page),
    };

    container(column![toolbar, body].height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(widgets::page_style)
        .into()
}

fn view_page(tab: MailboxTab, page: &Page<Email>) -> Element<'static, Message> {
    let rows: Vec<Element<'static, Message>> = page
        .content
        .iter()
        .map(|email| view_row(tab, email))
        .collect();

    let list = scrollable(Column::with_children(rows).spacing(1))
        .height(Length::Fill)
        .style(scrollable_style);

    column![list, view_pager(page)].into()
}

fn view_row(tab: MailboxTab, email: &Email) -> Element<'static, Message> {
    let p = palette::current();
    let unread = tab == MailboxTab::Inbox && !email.is_read;

    let party = match tab {
        MailboxTab::Inbox => email.from.clone(),
        MailboxTab::Sent | MailboxTab::Drafts => format!("To: {}", email.to),
    };
    let when = email
        .sent_at
        .as_deref()
        .map(time::relative_time)
        .unwrap_or_default();

    let subject_weight = if unread {
        iced::font::Weight::Bold
    } else {
        iced::font::Weight::Normal
    };

    let top = row![
        text(party).size(13).color(p.text_secondary),
        Space::new().width(Length::Fill),
        text(when).size(12).color(p.text_muted),
    ]
    .align_y(Alignment::Center);

    let subject = text(email.subject_or_placeholder().to_string())
        .size(15)
        .font(iced::Font {
            weight: subject_weight,
            ..Default::default()
        })
        .color(if unread { p.unread } else { p.text_primary });

    let preview = text(email.preview(PREVIEW_CHARS)).size(13).color(p.text_muted);

    let content = container(column![top, subject, preview].spacing(4))
        .padding([10, 16])
        .width(Length::Fill)
        .style(email_row_style(unread));

    button(content)
        .on_press(Message::OpenEmail {
            id: email.id,
            is_draft: tab == MailboxTab::Drafts || email.is_draft(),
        })
        .padding(0)
        .width(Length::Fill)
        .style(row_button_style)
        .into()
}

fn view_pager(page: &Page<Email>) -> Element<'static, Message> {
    let p = palette::current();
    if page.total_pages <= 1 {
        return Space::new().height(0).into();
    }

    let label = format!(
        "Page {} of {} ({} messages)",
        page.number + 1,
        page.total_pages,
        page.total_elements
    );

    row![
        common::secondary_button(
            "Previous",
            page.has_previous()
                .then(|| Message::ChangePage(page.number.saturating_sub(1))),
        ),
        Space::new().width(Length::Fill),
        text(label).size(12).color(p.text_muted),
        Space::new().width(Length::Fill),
        common::secondary_button(
            "Next",
            page.has_next().then(|| Message::ChangePage(page.number + 1)),
        ),
    ]
    .align_y(Alignment::Center)
    .padding([8, 16])
    .into()
}
