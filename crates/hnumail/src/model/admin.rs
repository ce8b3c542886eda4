//! User management screen state.

use hnumail_core::validation;
use hnumail_core::{CreateUserRequest, UserRole, UserStatus};

/// Transient state of the user management screen.
#[derive(Debug, Clone, Default)]
pub struct UserAdminState {
    /// Reset-password dialog, when open.
    pub reset_dialog: Option<ResetPasswordDialog>,
    /// Create-user form, when open.
    pub create_form: Option<CreateUserForm>,
    /// User awaiting delete confirmation.
    pub confirm_delete: Option<i64>,
}

impl UserAdminState {
    /// Closes every dialog.
    pub fn close_dialogs(&mut self) {
        self.reset_dialog = None;
        self.create_form = None;
        self.confirm_delete = None;
    }
}

/// Admin reset of another user's password.
#[derive(Debug, Clone, Default)]
pub struct ResetPasswordDialog {
    /// Target user.
    pub user_id: i64,
    /// Target username, for the dialog title.
    pub username: String,
    /// New password.
    pub password: String,
    /// Validation error.
    pub error: Option<String>,
}

impl ResetPasswordDialog {
    /// Opens the dialog for a user.
    #[must_use]
    pub fn new(user_id: i64, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            ..Self::default()
        }
    }

    /// Validated password, or the first validation message.
    ///
    /// # Errors
    ///
    /// Returns the message of the first failed check.
    pub fn password(&self) -> Result<String, &'static str> {
        validation::validate_new_password(&self.password, None)
            .map_err(|errors| errors.first().map_or("Invalid password", |e| e.message()))?;
        Ok(self.password.clone())
    }
}

/// Form for creating a user account.
#[derive(Debug, Clone, Default)]
pub struct CreateUserForm {
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Optional nickname.
    pub nickname: String,
    /// Optional phone.
    pub phone: String,
    /// Whether the account is an administrator.
    pub admin: bool,
    /// Validation error.
    pub error: Option<String>,
}

impl CreateUserForm {
    /// Request body, or the first validation message.
    ///
    /// # Errors
    ///
    /// Returns the message of the first failed check.
    pub fn request(&self) -> Result<CreateUserRequest, &'static str> {
        let account = hnumail_core::RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        validation::validate_registration(&account, &self.password)
            .map_err(|errors| errors.first().map_or("Invalid input", |e| e.message()))?;

        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        Ok(CreateUserRequest {
            username: account.username,
            email: account.email,
            password: account.password,
            nickname: optional(&self.nickname),
            phone: optional(&self.phone),
            role: if self.admin { UserRole::Admin } else { UserRole::User },
            status: UserStatus::Active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_form_maps_optional_fields() {
        let form = CreateUserForm {
            username: " carol ".to_string(),
            email: "carol@hnu.edu.cn".to_string(),
            password: "secret1".to_string(),
            nickname: "  ".to_string(),
            phone: "123".to_string(),
            admin: true,
            error: None,
        };
        let request = form.request().ok();
        let request = request.as_ref();
        assert_eq!(request.map(|r| r.username.as_str()), Some("carol"));
        assert_eq!(request.and_then(|r| r.nickname.clone()), None);
        assert_eq!(request.and_then(|r| r.phone.clone()), Some("123".to_string()));
        assert_eq!(request.map(|r| r.role), Some(UserRole::Admin));
    }

    #[test]
    fn test_create_form_rejects_bad_email() {
        let form = CreateUserForm {
            username: "carol".to_string(),
            email: "carol".to_string(),
            password: "secret1".to_string(),
            ..CreateUserForm::default()
        };
        assert_eq!(form.request().err(), Some("Invalid email address format"));
    }

    #[test]
    fn test_reset_dialog_checks_length() {
        let mut dialog = ResetPasswordDialog::new(4, "dave");
        dialog.password = "abc".to_string();
        assert!(dialog.password().is_err());
        dialog.password = "abcdef".to_string();
        assert_eq!(dialog.password(), Ok("abcdef".to_string()));
    }

    #[test]
    fn test_close_dialogs() {
        let mut state = UserAdminState {
            confirm_delete: Some(3),
            create_form: Some(CreateUserForm::default()),
            ..UserAdminState::default()
        };
        state.close_dialogs();
        assert!(state.confirm_delete.is_none());
        assert!(state.create_form.is_none());
    }
}
