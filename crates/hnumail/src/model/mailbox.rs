use hnumail_core::Folder;

/// Tabs of the email list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MailboxTab {
    /// Received mail.
    #[default]
    Inbox,
    /// Sent mail.
    Sent,
    /// Unsent drafts.
    Drafts,
}

impl MailboxTab {
    /// Tabs in display order.
    pub const ALL: [Self; 3] = [Self::Inbox, Self::Sent, Self::Drafts];

    /// Backend folder listed by this tab.
    #[must_use]
    pub const fn folder(self) -> Folder {
        match self {
            Self::Inbox => Folder::Inbox,
            Self::Sent => Folder::Sent,
            Self::Drafts => Folder::Draft,
        }
    }

    /// Tab caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Sent => "Sent",
            Self::Drafts => "Drafts",
        }
    }

    /// Drawer icon.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Inbox => "\u{1F4E5}",
            Self::Sent => "\u{1F4E4}",
            Self::Drafts => "\u{1F4DD}",
        }
    }

    /// Message shown for an empty listing.
    #[must_use]
    pub const fn empty_text(self) -> &'static str {
        match self {
            Self::Inbox => "Your inbox is empty",
            Self::Sent => "No sent mail yet",
            Self::Drafts => "No drafts",
        }
    }
}
