//! Own profile and password screen.

use iced::widget::{Space, column, row, text};
use iced::{Element, Length};

use hnumail_core::{ApiMessage, Outcome, UserProfile, time};

use super::common;
use crate::message::{Message, ProfileMessage};
use crate::model::{PasswordDialog, ProfileForm};
use crate::style::widgets::palette;

/// Slot snapshots rendered by the profile screen.
#[derive(Debug, Clone, Default)]
pub struct ProfileOutcomes {
    /// Loaded profile.
    pub profile: Outcome<UserProfile>,
    /// Last profile save.
    pub update: Outcome<ApiMessage>,
    /// Last password change.
    pub change_password: Outcome<ApiMessage>,
}

/// Renders the profile screen.
pub fn view_profile(form: &ProfileForm, outcomes: ProfileOutcomes) -> Element<'static, Message> {
    let profile = match outcomes.profile {
        Outcome::Idle | Outcome::Pending => return common::placeholder("Loading profile..."),
        Outcome::Failure(message) => {
            return common::failure_with_retry(&message, Message::Profile(ProfileMessage::Reload));
        }
        Outcome::Success(profile) => profile,
    };

    let p = palette::current();
    let mut content = column![
        text("Profile").size(28).color(p.text_primary),
        account_section(&profile),
        edit_section(form, &outcomes.update),
    ]
    .spacing(16);

    content = content.push(form.password_dialog.as_ref().map_or_else(
        || {
            common::section(
                "Security",
                column![
                    common::outcome_status(&outcomes.change_password, "Password changed"),
                    common::secondary_button(
                        "Change password",
                        Some(Message::Profile(ProfileMessage::OpenPasswordDialog)),
                    ),
                ]
                .spacing(10),
            )
        },
        |dialog| password_section(dialog, &outcomes.change_password),
    ));

    common::page(content)
}

fn account_section(profile: &UserProfile) -> Element<'static, Message> {
    let usage = match (profile.used_size, profile.mailbox_size, profile.usage_percent()) {
        (Some(used), Some(total), Some(percent)) => {
            format!("{used} KB of {total} MB ({percent:.1}%)")
        }
        _ => "unknown".to_string(),
    };
    let last_login = profile
        .last_login_time
        .as_deref()
        .map_or_else(|| "never".to_string(), time::format_absolute);

    common::section(
        "Account",
        column![
            common::info_row("Username", &profile.username),
            common::info_row("Email", &profile.email),
            common::info_row("Role", profile.role.as_str()),
            common::info_row("Status", profile.status.as_str()),
            common::info_row("Mailbox usage", &usage),
            common::info_row("Last login", &last_login),
        ]
        .spacing(6),
    )
}

fn edit_section(form: &ProfileForm, update: &Outcome<ApiMessage>) -> Element<'static, Message> {
    let error = form.error();
    let can_save = error.is_none() && !update.is_pending();

    common::section(
        "Details",
        column![
            common::labeled_input("Nickname", "nickname", &form.nickname, |s| {
                Message::Profile(ProfileMessage::NicknameChanged(s))
            }),
            common::labeled_input("Phone", "phone number", &form.phone, |s| {
                Message::Profile(ProfileMessage::PhoneChanged(s))
            }),
            common::field_error(error),
            common::outcome_status(update, "Profile saved"),
            row![
                Space::new().width(Length::Fill),
                common::primary_button(
                    "Save",
                    can_save.then_some(Message::Profile(ProfileMessage::Save)),
                ),
            ],
        ]
        .spacing(10),
    )
}

fn password_section(
    dialog: &PasswordDialog,
    outcome: &Outcome<ApiMessage>,
) -> Element<'static, Message> {
    let pending = outcome.is_pending();
    let submit = (!pending).then_some(Message::Profile(ProfileMessage::SubmitPassword));

    let status: Element<'static, Message> = match (&dialog.error, outcome) {
        (Some(err), _) => common::error_banner(err),
        (None, Outcome::Failure(err)) => common::error_banner(err),
        (None, Outcome::Pending) => common::placeholder("Changing password..."),
        _ => Space::new().height(0).into(),
    };

    common::section(
        "Change password",
        column![
            common::labeled_password(
                "Current password",
                &dialog.old,
                |s| Message::Profile(ProfileMessage::OldPasswordChanged(s)),
                None,
            ),
            common::labeled_password(
                "New password (6-120 characters)",
                &dialog.new,
                |s| Message::Profile(ProfileMessage::NewPasswordChanged(s)),
                None,
            ),
            common::labeled_password(
                "Confirm new password",
                &dialog.confirm,
                |s| Message::Profile(ProfileMessage::ConfirmPasswordChanged(s)),
                submit.clone(),
            ),
            status,
            row![
                common::secondary_button(
                    "Cancel",
                    Some(Message::Profile(ProfileMessage::ClosePasswordDialog)),
                ),
                Space::new().width(Length::Fill),
                common::primary_button("Change password", submit),
            ]
            .spacing(8),
        ]
        .spacing(10),
    )
}
