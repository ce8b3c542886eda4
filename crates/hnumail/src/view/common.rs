//! Building blocks shared by the screens.

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use hnumail_core::Outcome;

use crate::message::Message;
use crate::style::widgets::{self, palette};

/// Titled card holding a group of fields.
pub fn section<'a>(title: &str, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let p = palette::current();
    container(
        column![
            text(title.to_string()).size(16).color(p.text_primary),
            Space::new().height(12),
            content.into(),
        ]
        .spacing(8),
    )
    .padding(20)
    .width(Length::Fill)
    .style(widgets::card_style)
    .into()
}

/// Label above a single-line input.
pub fn labeled_input(
    label: &str,
    placeholder: &str,
    value: &str,
    on_input: impl Fn(String) -> Message + 'static,
) -> Element<'static, Message> {
    let p = palette::current();
    column![
        text(label.to_string()).size(12).color(p.text_secondary),
        text_input(placeholder, value)
            .on_input(on_input)
            .padding(10)
            .style(widgets::input_style),
    ]
    .spacing(4)
    .into()
}

/// Label above a masked input.
pub fn labeled_password(
    label: &str,
    value: &str,
    on_input: impl Fn(String) -> Message + 'static,
    on_submit: Option<Message>,
) -> Element<'static, Message> {
    let p = palette::current();
    let mut input = text_input("", value)
        .on_input(on_input)
        .padding(10)
        .secure(true)
        .style(widgets::input_style);
    if let Some(message) = on_submit {
        input = input.on_submit(message);
    }
    column![text(label.to_string()).size(12).color(p.text_secondary), input]
        .spacing(4)
        .into()
}

/// Inline field hint in the error color.
pub fn field_error(error: Option<&str>) -> Element<'static, Message> {
    let p = palette::current();
    error.map_or_else(
        || Space::new().height(0).into(),
        |err| text(err.to_string()).size(11).color(p.accent_red).into(),
    )
}

/// Red banner for a failed call.
pub fn error_banner(message: &str) -> Element<'static, Message> {
    let p = palette::current();
    container(text(message.to_string()).size(14).color(p.accent_red))
        .padding(10)
        .width(Length::Fill)
        .style(widgets::error_banner_style)
        .into()
}

/// Green banner for a finished call.
pub fn success_banner(message: &str) -> Element<'static, Message> {
    let p = palette::current();
    container(text(message.to_string()).size(14).color(p.accent_green))
        .padding(10)
        .width(Length::Fill)
        .style(widgets::success_banner_style)
        .into()
}

/// Failure banner with a retry button.
pub fn failure_with_retry(message: &str, retry: Message) -> Element<'static, Message> {
    let p = palette::current();
    container(
        column![
            text(message.to_string()).size(14).color(p.accent_red),
            button(text("Retry").size(13))
                .on_press(retry)
                .padding([8, 16])
                .style(widgets::secondary_button_style),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(24)
    .center_x(Length::Fill)
    .into()
}

/// Centered muted text, for loading and empty states.
pub fn placeholder(message: &str) -> Element<'static, Message> {
    let p = palette::current();
    container(text(message.to_string()).size(14).color(p.text_muted))
        .padding(40)
        .center_x(Length::Fill)
        .into()
}

/// Status line for a write call: spinner text, failure or success.
pub fn outcome_status<T>(outcome: &Outcome<T>, success: &str) -> Element<'static, Message> {
    match outcome {
        Outcome::Idle => Space::new().height(0).into(),
        Outcome::Pending => placeholder("Working..."),
        Outcome::Success(_) => success_banner(success),
        Outcome::Failure(message) => error_banner(message),
    }
}

/// Primary button that is disabled without a message.
pub fn primary_button(label: &str, on_press: Option<Message>) -> Element<'static, Message> {
    button(text(label.to_string()).size(14))
        .on_press_maybe(on_press)
        .padding([10, 20])
        .style(widgets::primary_button_style)
        .into()
}

/// Secondary button that is disabled without a message.
pub fn secondary_button(label: &str, on_press: Option<Message>) -> Element<'static, Message> {
    button(text(label.to_string()).size(14))
        .on_press_maybe(on_press)
        .padding([10, 20])
        .style(widgets::secondary_button_style)
        .into()
}

/// Danger button that is disabled without a message.
pub fn danger_button(label: &str, on_press: Option<Message>) -> Element<'static, Message> {
    button(text(label.to_string()).size(14))
        .on_press_maybe(on_press)
        .padding([10, 20])
        .style(widgets::danger_button_style)
        .into()
}

/// Label and value on one line.
pub fn info_row(label: &str, value: &str) -> Element<'static, Message> {
    let p = palette::current();
    row![
        text(label.to_string())
            .size(13)
            .color(p.text_muted)
            .width(Length::Fixed(110.0)),
        text(value.to_string()).size(13).color(p.text_primary),
    ]
    .spacing(8)
    .into()
}

/// Screen body with the page background, scrolled when tall.
pub fn page<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(
        iced::widget::scrollable(container(content).padding(24).max_width(760.0))
            .height(Length::Fill)
            .style(widgets::scrollable_style),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .style(widgets::page_style)
    .into()
}
