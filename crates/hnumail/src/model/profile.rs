//! Profile screen forms.

use hnumail_core::validation;
use hnumail_core::{ChangePasswordRequest, UpdateProfileRequest, UserProfile};

/// Editable profile fields.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    /// Nickname field.
    pub nickname: String,
    /// Phone field.
    pub phone: String,
    /// Whether the fields have been seeded from a loaded profile.
    pub loaded: bool,
    /// Change-password dialog, when open.
    pub password_dialog: Option<PasswordDialog>,
}

impl ProfileForm {
    /// Seeds the fields from a loaded profile.
    pub fn fill(&mut self, profile: &UserProfile) {
        self.nickname = profile.nickname.clone().unwrap_or_default();
        self.phone = profile.phone.clone().unwrap_or_default();
        self.loaded = true;
    }

    /// Request body for the current fields.
    #[must_use]
    pub fn request(&self) -> UpdateProfileRequest {
        UpdateProfileRequest {
            nickname: self.nickname.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }

    /// First validation message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        validation::validate_profile(&self.request())
            .err()
            .and_then(|errors| errors.first().map(|e| e.message()))
    }
}

/// Change-password dialog.
#[derive(Debug, Clone, Default)]
pub struct PasswordDialog {
    /// Current password.
    pub old: String,
    /// New password.
    pub new: String,
    /// New password repeated.
    pub confirm: String,
    /// Error shown after a rejected submit.
    pub error: Option<String>,
}

impl PasswordDialog {
    /// Request body, or the first validation message.
    ///
    /// # Errors
    ///
    /// Returns the message of the first failed check.
    pub fn request(&self) -> Result<ChangePasswordRequest, &'static str> {
        validation::validate_password_change(&self.old, &self.new, &self.confirm).map_err(
            |errors| errors.first().map_or("Invalid password", |e| e.message()),
        )?;
        Ok(ChangePasswordRequest {
            old_password: self.old.clone(),
            new_password: self.new.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_uses_empty_for_missing_fields() {
        let mut form = ProfileForm::default();
        form.fill(&UserProfile {
            nickname: Some("Ali".to_string()),
            ..UserProfile::default()
        });
        assert!(form.loaded);
        assert_eq!(form.nickname, "Ali");
        assert_eq!(form.phone, "");
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_long_phone_is_rejected() {
        let form = ProfileForm {
            phone: "1".repeat(30),
            ..ProfileForm::default()
        };
        assert_eq!(form.error(), Some("Phone number must be at most 20 characters"));
    }

    #[test]
    fn test_password_dialog_request() {
        let mut dialog = PasswordDialog {
            old: "oldpass".to_string(),
            new: "newpass".to_string(),
            confirm: "other".to_string(),
            error: None,
        };
        assert_eq!(dialog.request().err(), Some("Passwords do not match"));

        dialog.confirm = "newpass".to_string();
        let request = dialog.request().ok();
        assert_eq!(request.map(|r| r.new_password), Some("newpass".to_string()));
    }
}
