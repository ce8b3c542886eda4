//! Admin user list with status, role, reset and delete actions.

use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use hnumail_core::{ApiMessage, Outcome, User, UserRole, UserStatus};

use super::common;
use crate::message::{CreateUserField, Message, UserAdminMessage};
use crate::model::{CreateUserForm, ResetPasswordDialog, UserAdminState};
use crate::style::widgets::{self, palette};

/// Slot snapshots rendered by the user management screen.
#[derive(Debug, Clone, Default)]
pub struct UserAdminOutcomes {
    /// User list.
    pub users: Outcome<Vec<User>>,
    /// Last create call.
    pub create: Outcome<ApiMessage>,
    /// Last status change.
    pub status: Outcome<ApiMessage>,
    /// Last role change.
    pub role: Outcome<ApiMessage>,
    /// Last delete call.
    pub delete: Outcome<ApiMessage>,
    /// Last password reset.
    pub reset: Outcome<ApiMessage>,
}

impl UserAdminOutcomes {
    fn busy(&self) -> bool {
        self.create.is_pending()
            || self.status.is_pending()
            || self.role.is_pending()
            || self.delete.is_pending()
            || self.reset.is_pending()
    }

    fn first_failure(&self) -> Option<&str> {
        [&self.status, &self.role, &self.delete]
            .into_iter()
            .find_map(Outcome::failure)
    }
}

/// Renders the user management screen.
pub fn view_user_management(
    state: &UserAdminState,
    outcomes: UserAdminOutcomes,
) -> Element<'static, Message> {
    let p = palette::current();
    let busy = outcomes.busy();

    let toolbar = row![
        text("Users").size(28).color(p.text_primary),
        Space::new().width(Length::Fill),
        common::secondary_button(
            "Reload",
            Some(Message::Users(UserAdminMessage::Reload)),
        ),
        common::primary_button(
            "New user",
            (state.create_form.is_none() && !busy)
                .then_some(Message::Users(UserAdminMessage::OpenCreate)),
        ),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let mut content = column![toolbar].spacing(16);

    if let Some(form) = &state.create_form {
        content = content.push(create_section(form, &outcomes.create));
    }
    if let Some(dialog) = &state.reset_dialog {
        content = content.push(reset_section(dialog, &outcomes.reset));
    }
    if let Some(err) = outcomes.first_failure() {
        content = content.push(common::error_banner(err));
    }

    let list: Element<'static, Message> = match &outcomes.users {
        Outcome::Idle | Outcome::Pending => common::placeholder("Loading users..."),
        Outcome::Failure(message) => {
            common::failure_with_retry(message, Message::Users(UserAdminMessage::Reload))
        }
        Outcome::Success(users) if users.is_empty() => common::placeholder("No users"),
        Outcome::Success(users) => Column::with_children(
            users
                .iter()
                .map(|user| user_row(user, state.confirm_delete == Some(user.id), busy)),
        )
        .spacing(6)
        .into(),
    };

    common::page(content.push(list))
}

fn user_row(user: &User, confirming: bool, busy: bool) -> Element<'static, Message> {
    let p = palette::current();
    let enabled = |message: UserAdminMessage| (!busy).then_some(Message::Users(message));

    let status_color = match user.status {
        UserStatus::Active => p.accent_green,
        UserStatus::Disabled => p.text_muted,
        UserStatus::Locked => p.accent_yellow,
    };

    let identity = column![
        text(user.display_name().to_string())
            .size(15)
            .color(p.text_primary),
        text(user.email.clone()).size(12).color(p.text_muted),
    ]
    .spacing(2)
    .width(Length::Fill);

    let badges = row![
        text(user.role.as_str()).size(12).color(p.text_secondary),
        text(user.status.as_str()).size(12).color(status_color),
    ]
    .spacing(10);

    let status_label = match user.status {
        UserStatus::Active => "Disable",
        UserStatus::Disabled | UserStatus::Locked => "Enable",
    };
    let role_label = match user.role {
        UserRole::User => "Make admin",
        UserRole::Admin => "Make user",
    };

    let actions: Element<'static, Message> = if confirming {
        row![
            text("Delete this user?").size(13).color(p.accent_red),
            common::danger_button("Delete", enabled(UserAdminMessage::ConfirmDelete)),
            common::secondary_button("Cancel", Some(Message::Users(UserAdminMessage::CloseDialog))),
        ]
        .spacing(6)
        .align_y(Alignment::Center)
        .into()
    } else {
        row![
            small_button(status_label, enabled(UserAdminMessage::ToggleStatus(user.id))),
            small_button(role_label, enabled(UserAdminMessage::ToggleRole(user.id))),
            small_button("Reset password", enabled(UserAdminMessage::OpenReset(user.id))),
            small_button("Delete", enabled(UserAdminMessage::AskDelete(user.id))),
        ]
        .spacing(6)
        .into()
    };

    container(
        row![identity, badges, actions]
            .spacing(16)
            .align_y(Alignment::Center),
    )
    .padding([12, 16])
    .width(Length::Fill)
    .style(widgets::card_style)
    .into()
}

fn small_button(label: &'static str, on_press: Option<Message>) -> Element<'static, Message> {
    button(text(label).size(12))
        .on_press_maybe(on_press)
        .padding([6, 10])
        .style(widgets::ghost_button_style)
        .into()
}

fn reset_section(dialog: &ResetPasswordDialog, outcome: &Outcome<ApiMessage>) -> Element<'static, Message> {
    let submit = (!outcome.is_pending()).then_some(Message::Users(UserAdminMessage::SubmitReset));
    let status: Element<'static, Message> = match (&dialog.error, outcome) {
        (Some(err), _) => common::error_banner(err),
        (None, Outcome::Failure(err)) => common::error_banner(err),
        _ => Space::new().height(0).into(),
    };

    common::section(
        &format!("Reset password for {}", dialog.username),
        column![
            common::labeled_password(
                "New password (6-120 characters)",
                &dialog.password,
                |s| Message::Users(UserAdminMessage::ResetPasswordChanged(s)),
                submit.clone(),
            ),
            status,
            dialog_buttons("Reset", submit),
        ]
        .spacing(10),
    )
}

fn create_section(form: &CreateUserForm, outcome: &Outcome<ApiMessage>) -> Element<'static, Message> {
    let field = |label: &str, placeholder: &str, value: &str, which: CreateUserField| {
        common::labeled_input(label, placeholder, value, move |s| {
            Message::Users(UserAdminMessage::CreateField(which, s))
        })
    };

    let submit = (!outcome.is_pending()).then_some(Message::Users(UserAdminMessage::SubmitCreate));
    let status: Element<'static, Message> = match (&form.error, outcome) {
        (Some(err), _) => common::error_banner(err),
        (None, Outcome::Failure(err)) => common::error_banner(err),
        _ => Space::new().height(0).into(),
    };

    let admin_toggle = button(text(if form.admin { "Role: ADMIN" } else { "Role: USER" }).size(13))
        .on_press(Message::Users(UserAdminMessage::CreateAdminToggled(!form.admin)))
        .padding([8, 14])
        .style(if form.admin {
            widgets::tab_button_selected_style
        } else {
            widgets::tab_button_style
        });

    common::section(
        "New user",
        column![
            field("Username", "username", &form.username, CreateUserField::Username),
            field("Email", "user@hnu.edu.cn", &form.email, CreateUserField::Email),
            common::labeled_password(
                "Password",
                &form.password,
                |s| Message::Users(UserAdminMessage::CreateField(CreateUserField::Password, s)),
                None,
            ),
            field("Nickname (optional)", "", &form.nickname, CreateUserField::Nickname),
            field("Phone (optional)", "", &form.phone, CreateUserField::Phone),
            admin_toggle,
            status,
            dialog_buttons("Create", submit),
        ]
        .spacing(10),
    )
}

fn dialog_buttons(label: &'static str, submit: Option<Message>) -> Element<'static, Message> {
    row![
        common::secondary_button("Cancel", Some(Message::Users(UserAdminMessage::CloseDialog))),
        Space::new().width(Length::Fill),
        common::primary_button(label, submit),
    ]
    .spacing(8)
    .into()
}
