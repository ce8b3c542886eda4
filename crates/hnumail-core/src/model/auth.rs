//! Authentication request and session types.

use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account name.
    pub username: String,
    /// Plain-text password, sent over the configured transport.
    pub password: String,
}

impl Credentials {
    /// Create login credentials.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Self-service registration body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired account name.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Initial password.
    pub password: String,
}

/// Authenticated session returned by login and registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    /// Bearer token attached to subsequent requests.
    #[serde(deserialize_with = "super::nullable")]
    pub token: String,
    /// Token scheme reported by the server (usually `Bearer`).
    #[serde(rename = "type", deserialize_with = "super::nullable")]
    pub token_type: String,
    /// User id.
    #[serde(deserialize_with = "super::nullable")]
    pub id: i64,
    /// Account name.
    #[serde(deserialize_with = "super::nullable")]
    pub username: String,
    /// Account email address.
    #[serde(deserialize_with = "super::nullable")]
    pub email: String,
    /// Role string such as `ROLE_USER` or `ROLE_ADMIN`.
    #[serde(deserialize_with = "super::nullable")]
    pub role: String,
}

impl Session {
    /// Whether this session may use the administration screens.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self.role.as_str(), "ROLE_ADMIN" | "ADMIN")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_jwt_response() {
        let json = r#"{
            "token": "abc.def.ghi",
            "type": "Bearer",
            "id": 7,
            "username": "alice",
            "email": "alice@hnu.edu.cn",
            "role": "ROLE_ADMIN"
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.token, "abc.def.ghi");
        assert_eq!(session.token_type, "Bearer");
        assert_eq!(session.id, 7);
        assert!(session.is_admin());
    }

    #[test]
    fn test_session_roles() {
        let mut session = Session {
            role: "ROLE_USER".to_string(),
            ..Session::default()
        };
        assert!(!session.is_admin());
        session.role = "ADMIN".to_string();
        assert!(session.is_admin());
    }

    #[test]
    fn test_credentials_wire_shape() {
        let json = serde_json::to_value(Credentials::new("bob", "secret")).unwrap();
        assert_eq!(json["username"], "bob");
        assert_eq!(json["password"], "secret");
    }
}
