//! Login and registration forms.

use hnumail_core::validation::{self, ValidationError};
use hnumail_core::{Credentials, RegisterRequest};

/// State of the login form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    /// Username field.
    pub username: String,
    /// Password field.
    pub password: String,
}

impl LoginForm {
    /// Request body for the current fields.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.trim(), self.password.clone())
    }

    /// Whether both fields are filled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        validation::validate_login(&self.credentials()).is_ok()
    }
}

/// State of the registration form.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    /// Username field.
    pub username: String,
    /// Email field.
    pub email: String,
    /// Password field.
    pub password: String,
    /// Confirmation field.
    pub confirm: String,
}

impl RegisterForm {
    /// Request body for the current fields.
    #[must_use]
    pub fn request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }

    /// Whether the confirmation was typed and differs.
    #[must_use]
    pub fn passwords_mismatch(&self) -> bool {
        !self.confirm.is_empty() && self.confirm != self.password
    }

    /// Failed checks, once every field has input.
    #[must_use]
    pub fn errors(&self) -> Vec<ValidationError> {
        if self.has_blank_field() {
            return Vec::new();
        }
        validation::validate_registration(&self.request(), &self.confirm).err().unwrap_or_default()
    }

    /// Whether every field is filled and valid.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.has_blank_field() && self.errors().is_empty()
    }

    fn has_blank_field(&self) -> bool {
        [&self.username, &self.email, &self.password, &self.confirm]
            .iter()
            .any(|field| field.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_needs_both_fields() {
        let mut form = LoginForm::default();
        assert!(!form.can_submit());
        form.username = "alice".to_string();
        assert!(!form.can_submit());
        form.password = "pw".to_string();
        assert!(form.can_submit());
        assert_eq!(form.credentials().username, "alice");
    }

    #[test]
    fn test_register_mismatch_and_submit() {
        let mut form = RegisterForm {
            username: "alice".to_string(),
            email: "alice@hnu.edu.cn".to_string(),
            password: "secret1".to_string(),
            confirm: "secret".to_string(),
        };
        assert!(form.passwords_mismatch());
        assert!(!form.can_submit());
        assert_eq!(form.errors(), vec![ValidationError::PasswordMismatch]);

        form.confirm = "secret1".to_string();
        assert!(!form.passwords_mismatch());
        assert!(form.can_submit());
    }

    #[test]
    fn test_register_hides_errors_until_filled() {
        let form = RegisterForm {
            username: "alice".to_string(),
            ..RegisterForm::default()
        };
        assert!(form.errors().is_empty());
        assert!(!form.can_submit());
    }
}
