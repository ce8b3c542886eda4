//! Account registration screen.

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length};

use hnumail_core::{Outcome, Session};

use super::common;
use crate::message::{Message, RegisterMessage};
use crate::model::RegisterForm;
use crate::style::widgets::{self, palette};

/// Renders the registration form.
pub fn view_register(form: &RegisterForm, outcome: Outcome<Session>) -> Element<'static, Message> {
    let p = palette::current();
    let pending = outcome.is_pending();
    let can_submit = !pending && form.can_submit();
    let submit_message = can_submit.then_some(Message::Register(RegisterMessage::Submit));

    let errors = form.errors();
    let error_for = |field: &str| {
        errors
            .iter()
            .find(|e| e.field() == field)
            .map(|e| e.message())
    };

    let fields = column![
        common::labeled_input("Username", "username", &form.username, |s| {
            Message::Register(RegisterMessage::UsernameChanged(s))
        }),
        common::field_error(error_for("username")),
        common::labeled_input("Email", "you@hnu.edu.cn", &form.email, |s| {
            Message::Register(RegisterMessage::EmailChanged(s))
        }),
        common::field_error(error_for("email")),
        common::labeled_password(
            "Password",
            &form.password,
            |s| Message::Register(RegisterMessage::PasswordChanged(s)),
            None,
        ),
        common::field_error(error_for("password")),
        common::labeled_password(
            "Confirm password",
            &form.confirm,
            |s| Message::Register(RegisterMessage::ConfirmChanged(s)),
            submit_message.clone(),
        ),
        common::field_error(form.passwords_mismatch().then_some("Passwords do not match")),
    ]
    .spacing(6);

    let status: Element<'static, Message> = match &outcome {
        Outcome::Failure(message) => common::error_banner(message),
        Outcome::Pending => common::placeholder("Creating account..."),
        _ => Space::new().height(0).into(),
    };

    let submit = button(container(text("Create account").size(14)).center_x(Length::Fill))
        .on_press_maybe(submit_message)
        .padding([10, 20])
        .width(Length::Fill)
        .style(widgets::primary_button_style);

    let back = button(text("Already registered? Sign in").size(13))
        .on_press(Message::Back)
        .style(widgets::link_button_style);

    let card = container(
        column![
            text("Create account").size(26).color(p.text_primary),
            Space::new().height(8),
            fields,
            status,
            submit,
            back,
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(32)
    .width(Length::Fixed(420.0))
    .style(widgets::card_style);

    container(card)
        .center(Length::Fill)
        .style(widgets::page_style)
        .into()
}
