//! Advisory form validation.
//!
//! These checks only gate buttons and show hints. The backend remains the
//! authority and may still reject a request that passes here.

use crate::model::{
    Credentials, EmailRequest, RegisterRequest, UpdateProfileRequest,
};

/// Minimum password length accepted by the backend.
pub const PASSWORD_MIN_LEN: usize = 6;
/// Maximum password length accepted by the backend.
pub const PASSWORD_MAX_LEN: usize = 120;
/// Maximum nickname length.
pub const NICKNAME_MAX_LEN: usize = 50;
/// Maximum phone number length.
pub const PHONE_MAX_LEN: usize = 20;

/// Validation error for a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Username is empty.
    EmptyUsername,
    /// Password is empty.
    EmptyPassword,
    /// Email address is empty.
    EmptyEmail,
    /// Email address format is invalid.
    InvalidEmail,
    /// Password is shorter or longer than allowed.
    PasswordLength,
    /// Password confirmation differs.
    PasswordMismatch,
    /// Current password is empty.
    EmptyOldPassword,
    /// No recipient given.
    EmptyRecipient,
    /// The recipient is not exactly one well-formed address.
    InvalidRecipient,
    /// Message body is empty.
    EmptyContent,
    /// Subject is empty.
    EmptySubject,
    /// Nickname too long.
    NicknameTooLong,
    /// Phone number too long.
    PhoneTooLong,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyUsername => "Username is required",
            Self::EmptyPassword => "Password is required",
            Self::EmptyEmail => "Email address is required",
            Self::InvalidEmail => "Invalid email address format",
            Self::PasswordLength => "Password must be 6-120 characters",
            Self::PasswordMismatch => "Passwords do not match",
            Self::EmptyOldPassword => "Current password is required",
            Self::EmptyRecipient => "A recipient is required",
            Self::InvalidRecipient => "Enter a single valid recipient address",
            Self::EmptyContent => "Message body is required",
            Self::EmptySubject => "Subject is required",
            Self::NicknameTooLong => "Nickname must be at most 50 characters",
            Self::PhoneTooLong => "Phone number must be at most 20 characters",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyUsername => "username",
            Self::EmptyPassword | Self::PasswordLength => "password",
            Self::EmptyEmail | Self::InvalidEmail => "email",
            Self::PasswordMismatch => "confirm_password",
            Self::EmptyOldPassword => "old_password",
            Self::EmptyRecipient | Self::InvalidRecipient => "to",
            Self::EmptyContent => "content",
            Self::EmptySubject => "subject",
            Self::NicknameTooLong => "nickname",
            Self::PhoneTooLong => "phone",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating a form.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate the login form.
///
/// # Errors
///
/// Returns every failed check.
pub fn validate_login(credentials: &Credentials) -> ValidationResult {
    let mut errors = Vec::new();
    if credentials.username.trim().is_empty() {
        errors.push(ValidationError::EmptyUsername);
    }
    if credentials.password.is_empty() {
        errors.push(ValidationError::EmptyPassword);
    }
    finish(errors)
}

/// Validate the registration form.
///
/// # Errors
///
/// Returns every failed check.
pub fn validate_registration(request: &RegisterRequest, confirm: &str) -> ValidationResult {
    let mut errors = Vec::new();
    if request.username.trim().is_empty() {
        errors.push(ValidationError::EmptyUsername);
    }
    if request.email.trim().is_empty() {
        errors.push(ValidationError::EmptyEmail);
    } else if !is_valid_email(&request.email) {
        errors.push(ValidationError::InvalidEmail);
    }
    if request.password.is_empty() {
        errors.push(ValidationError::EmptyPassword);
    } else if !is_valid_password_length(&request.password) {
        errors.push(ValidationError::PasswordLength);
    }
    if request.password != confirm {
        errors.push(ValidationError::PasswordMismatch);
    }
    finish(errors)
}

/// Validate the compose form, for sending and for saving a draft.
///
/// The backend takes exactly one recipient address and requires a subject
/// and a body.
///
/// # Errors
///
/// Returns every failed check.
pub fn validate_email_request(request: &EmailRequest) -> ValidationResult {
    let mut errors = Vec::new();
    if request.to.trim().is_empty() {
        errors.push(ValidationError::EmptyRecipient);
    } else if !is_valid_email(&request.to) {
        errors.push(ValidationError::InvalidRecipient);
    }
    if request.subject.trim().is_empty() {
        errors.push(ValidationError::EmptySubject);
    }
    if request.content.trim().is_empty() {
        errors.push(ValidationError::EmptyContent);
    }
    finish(errors)
}

/// Validate a new password, with its confirmation when the form has one.
///
/// # Errors
///
/// Returns every failed check.
pub fn validate_new_password(password: &str, confirm: Option<&str>) -> ValidationResult {
    let mut errors = Vec::new();
    if !is_valid_password_length(password) {
        errors.push(ValidationError::PasswordLength);
    }
    if confirm.is_some_and(|c| c != password) {
        errors.push(ValidationError::PasswordMismatch);
    }
    finish(errors)
}

/// Validate the change-password dialog.
///
/// # Errors
///
/// Returns every failed check.
pub fn validate_password_change(old: &str, new: &str, confirm: &str) -> ValidationResult {
    let mut errors = Vec::new();
    if old.is_empty() {
        errors.push(ValidationError::EmptyOldPassword);
    }
    if let Err(mut more) = validate_new_password(new, Some(confirm)) {
        errors.append(&mut more);
    }
    finish(errors)
}

/// Validate the profile form.
///
/// # Errors
///
/// Returns every failed check.
pub fn validate_profile(request: &UpdateProfileRequest) -> ValidationResult {
    let mut errors = Vec::new();
    if request.nickname.chars().count() > NICKNAME_MAX_LEN {
        errors.push(ValidationError::NicknameTooLong);
    }
    if request.phone.chars().count() > PHONE_MAX_LEN {
        errors.push(ValidationError::PhoneTooLong);
    }
    finish(errors)
}

/// Validate the broadcast form.
///
/// # Errors
///
/// Returns every failed check.
pub fn validate_broadcast(subject: &str, content: &str) -> ValidationResult {
    let mut errors = Vec::new();
    if subject.trim().is_empty() {
        errors.push(ValidationError::EmptySubject);
    }
    if content.trim().is_empty() {
        errors.push(ValidationError::EmptyContent);
    }
    finish(errors)
}

/// Whether the password length is within the accepted range.
#[must_use]
pub fn is_valid_password_length(password: &str) -> bool {
    (PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&password.chars().count())
}

/// Basic email validation.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty()
        || domain.contains('@')
        || email.contains(char::is_whitespace)
        || email.contains([',', ';'])
    {
        return false;
    }

    if !domain.contains('.') {
        return false;
    }

    !domain.split('.').any(str::is_empty)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn registration(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name@hnu.edu.cn"));
    }

    #[test]
    fn test_invalid_email() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("a@hnu.edu.cn;b@hnu.edu.cn"));
        assert!(!is_valid_email("a@hnu.edu.cn,b"));
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert!(validate_login(&Credentials::new("alice", "pw")).is_ok());
        let errors = validate_login(&Credentials::new(" ", "")).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::EmptyUsername, ValidationError::EmptyPassword]
        );
    }

    #[test]
    fn test_registration() {
        let ok = registration("alice", "alice@hnu.edu.cn", "secret1");
        assert!(validate_registration(&ok, "secret1").is_ok());

        let errors = validate_registration(&ok, "secret2").unwrap_err();
        assert_eq!(errors, vec![ValidationError::PasswordMismatch]);
        assert_eq!(errors[0].field(), "confirm_password");

        let errors =
            validate_registration(&registration("", "nope", "abc"), "abc").unwrap_err();
        assert!(errors.contains(&ValidationError::EmptyUsername));
        assert!(errors.contains(&ValidationError::InvalidEmail));
        assert!(errors.contains(&ValidationError::PasswordLength));
    }

    #[test]
    fn test_compose() {
        let request = EmailRequest::new("bob@hnu.edu.cn", "Hello", "Body");
        assert!(validate_email_request(&request).is_ok());

        let errors = validate_email_request(&EmailRequest::new(" ", " ", " ")).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyRecipient,
                ValidationError::EmptySubject,
                ValidationError::EmptyContent,
            ]
        );

        let errors = validate_email_request(&EmailRequest::new("bob", "s", "c")).unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvalidRecipient]);
    }

    #[test]
    fn test_compose_takes_a_single_recipient() {
        for to in [
            "bob@hnu.edu.cn, carol@hnu.edu.cn",
            "bob@hnu.edu.cn;carol@hnu.edu.cn",
            "bob@hnu.edu.cn carol@hnu.edu.cn",
        ] {
            let errors = validate_email_request(&EmailRequest::new(to, "s", "c")).unwrap_err();
            assert_eq!(errors, vec![ValidationError::InvalidRecipient], "{to}");
        }
    }

    #[test]
    fn test_compose_requires_subject() {
        let errors =
            validate_email_request(&EmailRequest::new("bob@hnu.edu.cn", "  ", "Body")).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptySubject]);
        assert_eq!(errors[0].field(), "subject");
    }

    #[test]
    fn test_password_change() {
        assert!(validate_password_change("old", "newpass", "newpass").is_ok());
        let errors = validate_password_change("", "short", "other").unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyOldPassword,
                ValidationError::PasswordLength,
                ValidationError::PasswordMismatch,
            ]
        );
    }

    #[test]
    fn test_profile_limits() {
        let ok = UpdateProfileRequest {
            nickname: "n".repeat(50),
            phone: "1".repeat(20),
        };
        assert!(validate_profile(&ok).is_ok());

        let too_long = UpdateProfileRequest {
            nickname: "n".repeat(51),
            phone: "1".repeat(21),
        };
        assert_eq!(
            validate_profile(&too_long).unwrap_err(),
            vec![ValidationError::NicknameTooLong, ValidationError::PhoneTooLong]
        );
    }

    #[test]
    fn test_broadcast() {
        assert!(validate_broadcast("Notice", "Body").is_ok());
        assert_eq!(
            validate_broadcast("", "Body").unwrap_err(),
            vec![ValidationError::EmptySubject]
        );
    }

    proptest! {
        #[test]
        fn password_length_bounds(password in "\\PC{0,140}") {
            let len = password.chars().count();
            let ok = validate_new_password(&password, None).is_ok();
            prop_assert_eq!(ok, (PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len));
        }

        #[test]
        fn confirmation_must_match(password in "[a-z0-9]{6,20}", other in "[a-z0-9]{6,20}") {
            let result = validate_new_password(&password, Some(&other));
            prop_assert_eq!(result.is_ok(), password == other);
        }

        #[test]
        fn generated_addresses_are_valid(
            local in "[a-z0-9._]{1,20}",
            domain in "[a-z0-9]{1,10}",
            tld in "[a-z]{2,5}",
        ) {
            let address = format!("{local}@{domain}.{tld}");
            prop_assert!(is_valid_email(&address));
        }

        #[test]
        fn addresses_without_at_are_invalid(text in "[^@]{0,40}") {
            prop_assert!(!is_valid_email(&text));
        }
    }
}
