//! User accounts, profiles and account-management requests.

use serde::{Deserialize, Serialize};

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Regular mailbox user.
    #[default]
    User,
    /// Administrator.
    Admin,
}

impl UserRole {
    /// Wire value used in query parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    /// The other role.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::User => Self::Admin,
            Self::Admin => Self::User,
        }
    }
}

/// Account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    /// Account can log in.
    #[default]
    Active,
    /// Disabled by an administrator.
    Disabled,
    /// Locked after failed logins.
    Locked,
}

impl UserStatus {
    /// Wire value used in query parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Disabled => "DISABLED",
            Self::Locked => "LOCKED",
        }
    }

    /// Status applied by the enable/disable toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Disabled,
            Self::Disabled | Self::Locked => Self::Active,
        }
    }
}

/// A user account as listed by the admin endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// User id.
    #[serde(deserialize_with = "super::nullable")]
    pub id: i64,
    /// Account name.
    #[serde(deserialize_with = "super::nullable")]
    pub username: String,
    /// Email address.
    #[serde(deserialize_with = "super::nullable")]
    pub email: String,
    /// Display name.
    pub nickname: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Role.
    #[serde(deserialize_with = "super::nullable")]
    pub role: UserRole,
    /// Status.
    #[serde(deserialize_with = "super::nullable")]
    pub status: UserStatus,
    /// Mailbox quota in megabytes.
    pub mailbox_size: Option<i64>,
    /// Used mailbox space in kilobytes.
    pub used_size: Option<i64>,
    /// Last login timestamp.
    pub last_login_time: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<String>,
}

impl User {
    /// Nickname if set, otherwise the username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// The signed-in user's own profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// User id.
    #[serde(deserialize_with = "super::nullable")]
    pub id: i64,
    /// Account name.
    #[serde(deserialize_with = "super::nullable")]
    pub username: String,
    /// Email address.
    #[serde(deserialize_with = "super::nullable")]
    pub email: String,
    /// Display name.
    pub nickname: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Role.
    #[serde(deserialize_with = "super::nullable")]
    pub role: UserRole,
    /// Status.
    #[serde(deserialize_with = "super::nullable")]
    pub status: UserStatus,
    /// Mailbox quota in megabytes.
    pub mailbox_size: Option<i64>,
    /// Used mailbox space in kilobytes.
    pub used_size: Option<i64>,
    /// Last login timestamp.
    pub last_login_time: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<String>,
}

impl UserProfile {
    /// Apply the editable fields of an accepted profile update.
    pub fn apply(&mut self, update: &UpdateProfileRequest) {
        self.nickname = Some(update.nickname.clone());
        self.phone = Some(update.phone.clone());
    }

    /// Used share of the mailbox quota in percent, when both sizes are known.
    ///
    /// The quota is in megabytes and the used space in kilobytes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn usage_percent(&self) -> Option<f64> {
        match (self.used_size, self.mailbox_size) {
            (Some(used_kb), Some(quota_mb)) if quota_mb > 0 => {
                Some(used_kb as f64 * 100.0 / (quota_mb as f64 * 1024.0))
            }
            _ => None,
        }
    }
}

/// Body of the profile update endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// Display name, at most 50 characters.
    pub nickname: String,
    /// Phone number, at most 20 characters.
    pub phone: String,
}

/// Body of the change-password endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Current password.
    pub old_password: String,
    /// Replacement password.
    pub new_password: String,
}

/// Body of the admin reset-password endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    /// Replacement password.
    pub new_password: String,
}

/// Body of the admin create-user endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Account name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Role.
    pub role: UserRole,
    /// Status.
    pub status: UserStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_json() {
        let json = r#"{
            "id": 3,
            "username": "carol",
            "email": "carol@hnu.edu.cn",
            "nickname": null,
            "role": "ADMIN",
            "status": "LOCKED",
            "mailboxSize": 100,
            "usedSize": 2048,
            "lastLoginTime": "2025-12-01T08:00:00",
            "createdAt": "2025-01-01T00:00:00"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.status, UserStatus::Locked);
        assert_eq!(user.display_name(), "carol");
        assert_eq!(user.mailbox_size, Some(100));
    }

    #[test]
    fn test_toggles() {
        assert_eq!(UserRole::User.toggled(), UserRole::Admin);
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Disabled);
        assert_eq!(UserStatus::Locked.toggled(), UserStatus::Active);
    }

    #[test]
    fn test_profile_apply_and_usage() {
        let mut profile = UserProfile {
            mailbox_size: Some(200),
            used_size: Some(51_200),
            ..UserProfile::default()
        };
        profile.apply(&UpdateProfileRequest {
            nickname: "Dee".to_string(),
            phone: "555".to_string(),
        });
        assert_eq!(profile.nickname.as_deref(), Some("Dee"));
        assert_eq!(profile.phone.as_deref(), Some("555"));
        assert_eq!(profile.usage_percent(), Some(25.0));
    }

    #[test]
    fn test_password_request_wire_names() {
        let json = serde_json::to_value(ChangePasswordRequest {
            old_password: "a".to_string(),
            new_password: "b".to_string(),
        })
        .unwrap();
        assert_eq!(json["oldPassword"], "a");
        assert_eq!(json["newPassword"], "b");
    }
}
