//! Compose screen state.

use hnumail_core::validation::{self, ValidationError};
use hnumail_core::{Email, EmailRequest};
use iced::widget::text_editor;

/// State for composing a new message or editing a draft.
#[derive(Debug, Default)]
pub struct ComposeState {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Message body, edited in a multi-line editor.
    pub content: text_editor::Content,
    /// Draft being edited, replaced on send.
    pub draft_id: Option<i64>,
    /// Error shown above the actions.
    pub error: Option<String>,
}

impl ComposeState {
    /// Creates an empty compose state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a compose state that edits an existing draft.
    #[must_use]
    pub fn for_draft(draft: &Email) -> Self {
        let mut state = Self::new();
        state.fill_from_draft(draft);
        state
    }

    /// Creates a compose state for replying to a message.
    #[must_use]
    pub fn reply(email: &Email) -> Self {
        let subject = if email.subject.to_lowercase().starts_with("re:") {
            email.subject.clone()
        } else {
            format!("Re: {}", email.subject)
        };

        let quoted = format!("\n\n> {}", email.content.replace('\n', "\n> "));

        Self {
            to: email.from.clone(),
            subject,
            content: text_editor::Content::with_text(&quoted),
            ..Default::default()
        }
    }

    /// Creates a compose state for forwarding a message.
    #[must_use]
    pub fn forward(email: &Email) -> Self {
        let subject = if email.subject.to_lowercase().starts_with("fwd:") {
            email.subject.clone()
        } else {
            format!("Fwd: {}", email.subject)
        };

        let forwarded = format!(
            "\n\n---------- Forwarded message ----------\nFrom: {}\nTo: {}\n\n{}",
            email.from, email.to, email.content
        );

        Self {
            subject,
            content: text_editor::Content::with_text(&forwarded),
            ..Default::default()
        }
    }

    /// Copies a loaded draft into the form.
    pub fn fill_from_draft(&mut self, draft: &Email) {
        self.to.clone_from(&draft.to);
        self.subject.clone_from(&draft.subject);
        self.content = text_editor::Content::with_text(&draft.content);
        self.draft_id = Some(draft.id);
        self.error = None;
    }

    /// Body text without the editor's trailing line break.
    #[must_use]
    pub fn body(&self) -> String {
        self.content.text().trim_end().to_string()
    }

    /// Applies an editor action to the body.
    pub fn edit_body(&mut self, action: text_editor::Action) {
        if action.is_edit() {
            self.error = None;
        }
        self.content.perform(action);
    }

    /// Request body for the current form.
    #[must_use]
    pub fn request(&self) -> EmailRequest {
        EmailRequest::new(self.to.trim(), self.subject.trim(), self.body())
            .with_draft_id(self.draft_id)
    }

    /// Checks the form before sending or saving a draft.
    ///
    /// # Errors
    ///
    /// Returns the first failed check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_email_request(&self.request())
            .map_err(|errors| errors.first().copied().unwrap_or(ValidationError::EmptyRecipient))
    }

    /// Whether the form passes validation.
    #[must_use]
    pub fn can_send(&self) -> bool {
        self.validate().is_ok()
    }

    /// Whether anything was typed, so a draft is worth saving.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !(self.to.trim().is_empty() && self.subject.trim().is_empty() && self.body().trim().is_empty())
    }
}
