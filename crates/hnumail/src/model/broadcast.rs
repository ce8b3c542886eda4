//! Mass email form.

use std::collections::BTreeSet;

use hnumail_core::validation;
use hnumail_core::BroadcastRequest;
use iced::widget::text_editor;

/// State of the mass email screen.
///
/// An empty selection sends to every user.
#[derive(Debug, Default)]
pub struct BroadcastForm {
    /// Subject line.
    pub subject: String,
    /// Message body, edited in a multi-line editor.
    pub content: text_editor::Content,
    /// Picked user ids.
    pub selected: BTreeSet<i64>,
    /// Validation error.
    pub error: Option<String>,
}

impl BroadcastForm {
    /// Adds or removes a user from the picked set.
    pub fn toggle(&mut self, id: i64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Picks every listed user.
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = i64>) {
        self.selected.extend(ids);
    }

    /// Drops the selection, which targets every user again.
    pub fn clear(&mut self) {
        self.selected.clear();
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

    /// Audience summary shown above the form.
    #[must_use]
    pub fn audience(&self) -> String {
        match self.selected.len() {
            0 => "Will be sent to all users".to_string(),
            1 => "Will be sent to 1 selected user".to_string(),
            n => format!("Will be sent to {n} selected users"),
        }
    }

    /// Request body, or the first validation message.
    ///
    /// # Errors
    ///
    /// Returns the message of the first failed check.
    pub fn request(&self) -> Result<BroadcastRequest, &'static str> {
        let content = self.body();
        validation::validate_broadcast(&self.subject, &content)
            .map_err(|errors| errors.first().map_or("Invalid input", |e| e.message()))?;

        Ok(BroadcastRequest {
            subject: self.subject.trim().to_string(),
            content,
            recipient_groups: Vec::new(),
            recipient_ids: self.selected.iter().copied().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BroadcastForm {
        BroadcastForm {
            subject: "Maintenance".to_string(),
            content: text_editor::Content::with_text("Tonight"),
            ..BroadcastForm::default()
        }
    }

    #[test]
    fn test_empty_selection_targets_everyone() {
        let form = filled();
        assert_eq!(form.audience(), "Will be sent to all users");
        let request = form.request().ok();
        assert_eq!(request.map(|r| r.recipient_ids), Some(Vec::new()));
    }

    #[test]
    fn test_selected_ids_are_sorted() {
        let mut form = filled();
        form.toggle(7);
        form.toggle(2);
        form.toggle(5);
        form.toggle(5);
        assert_eq!(form.audience(), "Will be sent to 2 selected users");
        let request = form.request().ok();
        assert_eq!(request.map(|r| r.recipient_ids), Some(vec![2, 7]));
    }

    #[test]
    fn test_select_all_then_clear() {
        let mut form = filled();
        form.select_all([3, 1, 3]);
        assert_eq!(form.selected.len(), 2);
        form.clear();
        assert!(form.selected.is_empty());
    }

    #[test]
    fn test_requires_subject() {
        let form = BroadcastForm {
            content: text_editor::Content::with_text("x"),
            ..BroadcastForm::default()
        };
        assert_eq!(form.request().err(), Some("Subject is required"));
    }

    #[test]
    fn test_multi_line_body_is_sent_as_typed() {
        let form = BroadcastForm {
            content: text_editor::Content::with_text("Line one\n\nLine three"),
            ..filled()
        };
        let request = form.request().ok();
        assert_eq!(request.map(|r| r.content), Some("Line one\n\nLine three".to_string()));
    }
}
