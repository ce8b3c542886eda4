//! Email records and outgoing mail requests.

use serde::{Deserialize, Serialize};

/// Server-side mailbox an email lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Folder {
    /// Received mail.
    #[default]
    Inbox,
    /// Mail sent by the user.
    Sent,
    /// Saved, unsent drafts.
    Draft,
    /// Deleted mail.
    Trash,
    /// Mail flagged as spam.
    Spam,
}

impl Folder {
    /// All folders in display order.
    pub const ALL: [Self; 5] = [Self::Inbox, Self::Sent, Self::Draft, Self::Trash, Self::Spam];

    /// Wire value used in query parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "INBOX",
            Self::Sent => "SENT",
            Self::Draft => "DRAFT",
            Self::Trash => "TRASH",
            Self::Spam => "SPAM",
        }
    }

    /// Human-readable folder name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Sent => "Sent",
            Self::Draft => "Drafts",
            Self::Trash => "Trash",
            Self::Spam => "Spam",
        }
    }
}

impl std::fmt::Display for Folder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored email as returned by the listing and detail endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Email {
    /// Server-assigned id.
    #[serde(deserialize_with = "super::nullable")]
    pub id: i64,
    /// Sender address.
    #[serde(deserialize_with = "super::nullable")]
    pub from: String,
    /// Recipient address(es), comma separated.
    #[serde(deserialize_with = "super::nullable")]
    pub to: String,
    /// Subject line.
    #[serde(deserialize_with = "super::nullable")]
    pub subject: String,
    /// Plain-text body.
    #[serde(deserialize_with = "super::nullable")]
    pub content: String,
    /// Send (or last save) timestamp as sent by the server, ISO-8601.
    pub sent_at: Option<String>,
    /// Mailbox the email is stored in.
    #[serde(deserialize_with = "super::nullable")]
    pub folder: Folder,
    /// Read flag.
    #[serde(deserialize_with = "super::nullable")]
    pub is_read: bool,
    /// Star flag.
    #[serde(deserialize_with = "super::nullable")]
    pub is_starred: bool,
    /// Size in bytes, when known.
    pub size: Option<i64>,
    /// Attachment file names.
    #[serde(deserialize_with = "super::nullable")]
    pub attachments: Vec<String>,
}

impl Email {
    /// Whether this email is an unsent draft.
    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.folder == Folder::Draft
    }

    /// Subject, or a placeholder when empty.
    #[must_use]
    pub fn subject_or_placeholder(&self) -> &str {
        if self.subject.trim().is_empty() {
            "(no subject)"
        } else {
            &self.subject
        }
    }

    /// First line of the body, collapsed and truncated to `max_chars`.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        let line: String = self
            .content
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if line.chars().count() <= max_chars {
            line
        } else {
            let truncated: String = line.chars().take(max_chars).collect();
            format!("{}…", truncated.trim_end())
        }
    }
}

/// Body of the send and save-draft endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    /// Recipient address(es), comma separated.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub content: String,
    /// Sender override; the server uses the session user when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Draft this request replaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_id: Option<i64>,
    /// Attachment names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<String>>,
}

impl EmailRequest {
    /// Create a request from the compose fields.
    #[must_use]
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Attach the id of the draft being edited.
    #[must_use]
    pub const fn with_draft_id(mut self, draft_id: Option<i64>) -> Self {
        self.draft_id = draft_id;
        self
    }
}

/// Body of the admin broadcast endpoint.
///
/// Empty recipient lists mean "all users".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastRequest {
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub content: String,
    /// Named recipient groups.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub recipient_groups: Vec<String>,
    /// Explicit recipient user ids.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub recipient_ids: Vec<i64>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_email_from_mail_dto() {
        let json = r#"{
            "id": 12,
            "subject": "Meeting",
            "content": "See you at 3pm",
            "from": "alice@hnu.edu.cn",
            "to": "bob@hnu.edu.cn",
            "sentAt": "2025-12-15T11:08:47",
            "isRead": false,
            "isStarred": true,
            "folder": "INBOX",
            "size": 120,
            "attachments": null,
            "extra": "ignored"
        }"#;
        let email: Email = serde_json::from_str(json).unwrap();
        assert_eq!(email.id, 12);
        assert_eq!(email.sent_at.as_deref(), Some("2025-12-15T11:08:47"));
        assert!(!email.is_read);
        assert!(email.is_starred);
        assert_eq!(email.folder, Folder::Inbox);
        assert!(email.attachments.is_empty());
    }

    #[test]
    fn test_email_missing_fields_default() {
        let email: Email = serde_json::from_str(r#"{"id":1,"folder":"DRAFT","subject":null}"#).unwrap();
        assert!(email.is_draft());
        assert_eq!(email.subject_or_placeholder(), "(no subject)");
        assert!(email.sent_at.is_none());
    }

    #[test]
    fn test_preview_collapses_and_truncates() {
        let email = Email {
            content: "Hello\n\n  world,   this is a long body".to_string(),
            ..Email::default()
        };
        assert_eq!(email.preview(100), "Hello world, this is a long body");
        assert_eq!(email.preview(11), "Hello world…");
    }

    #[test]
    fn test_email_request_wire_shape() {
        let request = EmailRequest::new("bob@hnu.edu.cn", "Hi", "Body").with_draft_id(Some(9));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["draftId"], 9);
        assert!(json.get("from").is_none());
        assert!(json.get("attachments").is_none());

        let json = serde_json::to_value(EmailRequest::new("a@b.c", "", "x")).unwrap();
        assert!(json.get("draftId").is_none());
    }

    #[test]
    fn test_broadcast_omits_empty_recipients() {
        let request = BroadcastRequest {
            subject: "Notice".to_string(),
            content: "Maintenance tonight".to_string(),
            ..BroadcastRequest::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("recipientIds").is_none());

        let request = BroadcastRequest {
            recipient_ids: vec![1, 2],
            ..request
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["recipientIds"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_folder_wire_values() {
        assert_eq!(serde_json::to_string(&Folder::Draft).unwrap(), "\"DRAFT\"");
        assert_eq!(Folder::Trash.as_str(), "TRASH");
        assert_eq!(Folder::ALL.len(), 5);
    }
}
