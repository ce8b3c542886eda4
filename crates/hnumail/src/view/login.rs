//! Sign-in screen.

use iced::widget::{Space, button, column, container, text, text_input};
use iced::{Alignment, Element, Length};

use hnumail_core::{Outcome, Route, Session};

use super::common;
use crate::message::{LoginMessage, Message};
use crate::model::LoginForm;
use crate::style::widgets::{self, palette};

/// Renders the login form.
///
/// `ready` is false until the client configuration has loaded.
pub fn view_login(
    form: &LoginForm,
    outcome: Outcome<Session>,
    ready: bool,
    startup_error: Option<&str>,
) -> Element<'static, Message> {
    let p = palette::current();
    let pending = outcome.is_pending();
    let can_submit = ready && !pending && form.can_submit();

    let title = text("HnuMail").size(32).color(p.primary);
    let subtitle = text("Sign in to your mailbox").size(14).color(p.text_secondary);

    let username = column![
        text("Username").size(12).color(p.text_secondary),
        text_input("username", &form.username)
            .on_input(|s| Message::Login(LoginMessage::UsernameChanged(s)))
            .padding(10)
            .style(widgets::input_style),
    ]
    .spacing(4);

    let password = common::labeled_password(
        "Password",
        &form.password,
        |s| Message::Login(LoginMessage::PasswordChanged(s)),
        can_submit.then_some(Message::Login(LoginMessage::Submit)),
    );

    let status: Element<'static, Message> = match (startup_error, &outcome) {
        (Some(err), _) => common::error_banner(err),
        (None, Outcome::Failure(message)) => common::error_banner(message),
        (None, Outcome::Pending) => common::placeholder("Signing in..."),
        _ => Space::new().height(0).into(),
    };

    let submit = button(
        container(text(if pending { "Signing in..." } else { "Sign in" }).size(14))
            .center_x(Length::Fill),
    )
    .on_press_maybe(can_submit.then_some(Message::Login(LoginMessage::Submit)))
    .padding([10, 20])
    .width(Length::Fill)
    .style(widgets::primary_button_style);

    let register = button(text("No account? Create one").size(13))
        .on_press(Message::Navigate(Route::Register))
        .style(widgets::link_button_style);

    let card = container(
        column![
            title,
            subtitle,
            Space::new().height(16),
            username,
            password,
            status,
            submit,
            register,
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(32)
    .width(Length::Fixed(380.0))
    .style(widgets::card_style);

    container(card)
        .center(Length::Fill)
        .style(widgets::page_style)
        .into()
}
