use reqwest::StatusCode;

use crate::error::{Error, Result};
use crate::model::ApiMessage;

/// Raw outcome of one HTTP call.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status.
    pub status: StatusCode,
    /// Decoded body of a successful response, `None` when empty.
    pub body: Option<T>,
    /// Raw body of a failed response, `None` when empty.
    pub error_body: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Message explaining a failed response.
    ///
    /// Prefers the `message` of a `{success, message}` error body, then any
    /// short plain-text body, then the status reason phrase.
    #[must_use]
    pub fn error_message(&self) -> String {
        if let Some(raw) = self.error_body.as_deref() {
            if let Ok(envelope) = serde_json::from_str::<ApiMessage>(raw)
                && !envelope.message.trim().is_empty()
            {
                return envelope.message;
            }

            let trimmed = raw.trim();
            if !trimmed.is_empty() && !trimmed.starts_with(['{', '<']) && trimmed.len() <= 200 {
                return trimmed.to_string();
            }
        }

        self.status
            .canonical_reason()
            .map_or_else(|| format!("HTTP {}", self.status.as_u16()), str::to_string)
    }

    /// Convert into the decoded body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Status`] for non-success statuses and
    /// [`Error::EmptyBody`] when a successful response had no body.
    pub fn into_result(self) -> Result<T> {
        if !self.is_success() {
            return Err(Error::Status {
                status: self.status.as_u16(),
                message: self.error_message(),
            });
        }
        self.body.ok_or(Error::EmptyBody)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn failed(status: u16, body: Option<&str>) -> ApiResponse<()> {
        ApiResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: None,
            error_body: body.map(str::to_string),
        }
    }

    #[test]
    fn test_error_message_from_envelope() {
        let response = failed(400, Some(r#"{"success":false,"message":"Username already exists"}"#));
        assert_eq!(response.error_message(), "Username already exists");
    }

    #[test]
    fn test_error_message_falls_back_to_reason() {
        assert_eq!(failed(401, None).error_message(), "Unauthorized");
        assert_eq!(
            failed(500, Some("<html>boom</html>")).error_message(),
            "Internal Server Error"
        );
        assert_eq!(failed(403, Some(r#"{"message":""}"#)).error_message(), "Forbidden");
    }

    #[test]
    fn test_error_message_plain_text() {
        assert_eq!(failed(409, Some("Conflict: draft gone\n")).error_message(), "Conflict: draft gone");
    }

    #[test]
    fn test_into_result() {
        let ok = ApiResponse {
            status: StatusCode::OK,
            body: Some(5),
            error_body: None,
        };
        assert_eq!(ok.into_result().unwrap(), 5);

        let empty: ApiResponse<i32> = ApiResponse {
            status: StatusCode::OK,
            body: None,
            error_body: None,
        };
        assert!(matches!(empty.into_result(), Err(Error::EmptyBody)));

        match failed(404, Some(r#"{"success":false,"message":"Mail not found"}"#)).into_result() {
            Err(Error::Status { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Mail not found");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
