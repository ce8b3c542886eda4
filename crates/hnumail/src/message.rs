//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use hnumail_core::{ClientConfig, Route};
use iced::widget::text_editor;

use crate::model::{AppSettings, MailboxTab};

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    /// Open a screen.
    Navigate(Route),
    /// Return to the previous screen.
    Back,
    /// Toggle drawer visibility.
    ToggleDrawer,

    // Startup and settings
    /// Client configuration loaded.
    ConfigLoaded(Result<ClientConfig, String>),
    /// Settings loaded.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings saved.
    SettingsSaved(Result<(), String>),
    /// Switch between light and dark mode.
    ToggleTheme,

    // Authentication
    /// Login form messages.
    Login(LoginMessage),
    /// Registration form messages.
    Register(RegisterMessage),
    /// End the session.
    Logout,

    // Mailbox
    /// Show a mailbox tab.
    SelectMailbox(MailboxTab),
    /// Reload the current mailbox page.
    RefreshMailbox,
    /// Load another page of the current mailbox.
    ChangePage(u32),
    /// Open a row of the mailbox listing.
    OpenEmail {
        /// Email id.
        id: i64,
        /// Drafts open in the compose screen.
        is_draft: bool,
    },
    /// Email detail messages.
    Detail(DetailMessage),

    // Compose
    /// Start a blank message.
    ComposeNew,
    /// Open the most recent draft.
    ResumeLatestDraft,
    /// Compose form messages.
    Compose(ComposeMessage),

    // Account
    /// Profile screen messages.
    Profile(ProfileMessage),

    // Administration
    /// User management messages.
    Users(UserAdminMessage),
    /// Mass email messages.
    Broadcast(BroadcastMessage),

    /// A view-model call finished; its slot holds the outcome.
    Completed(Operation),

    // Keyboard Events
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
    /// Event with nothing to do.
    Ignored,
}

/// View-model calls whose completion the app reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Login.
    Login,
    /// Registration.
    Register,
    /// Logout.
    Logout,
    /// Profile loaded.
    Profile,
    /// Profile saved.
    UpdateProfile,
    /// Password changed.
    ChangePassword,
    /// Mailbox page loaded.
    Mailbox(MailboxTab),
    /// Email detail loaded.
    Email,
    /// Email marked read.
    MarkRead,
    /// Email moved to trash.
    MoveToTrash,
    /// Email deleted.
    DeleteEmail,
    /// Email sent.
    SendEmail,
    /// Draft saved.
    SaveDraft,
    /// Draft loaded into compose.
    LoadDraft,
    /// Latest-draft lookup finished.
    LatestDraft {
        /// Whether any draft existed.
        found: bool,
    },
    /// User list loaded.
    Users,
    /// User created.
    CreateUser,
    /// User enabled or disabled.
    UpdateUserStatus,
    /// User role changed.
    UpdateUserRole,
    /// User deleted.
    DeleteUser,
    /// User password reset.
    ResetPassword,
    /// Broadcast sent.
    Broadcast,
}

/// Keyboard actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Compose new message (Ctrl+N).
    ComposeNew,
    /// Send message in compose view (Ctrl+Enter).
    Send,
    /// Go back (Escape).
    Back,
    /// Refresh mailbox (F5).
    Refresh,
    /// Toggle drawer (Ctrl+B).
    ToggleDrawer,
}

/// Messages for the login form.
#[derive(Debug, Clone)]
pub enum LoginMessage {
    /// Username changed.
    UsernameChanged(String),
    /// Password changed.
    PasswordChanged(String),
    /// Submit the form.
    Submit,
}

/// Messages for the registration form.
#[derive(Debug, Clone)]
pub enum RegisterMessage {
    /// Username changed.
    UsernameChanged(String),
    /// Email changed.
    EmailChanged(String),
    /// Password changed.
    PasswordChanged(String),
    /// Confirmation changed.
    ConfirmChanged(String),
    /// Submit the form.
    Submit,
}

/// Messages for the email detail screen.
#[derive(Debug, Clone, Copy)]
pub enum DetailMessage {
    /// Load the email again after a failure.
    Retry,
    /// Mark as read.
    MarkRead,
    /// Move to trash.
    MoveToTrash,
    /// Delete permanently.
    Delete,
    /// Reply to the sender.
    Reply,
    /// Forward the email.
    Forward,
}

/// Messages for compose form.
#[derive(Debug, Clone)]
pub enum ComposeMessage {
    /// Recipients changed.
    ToChanged(String),
    /// Subject changed.
    SubjectChanged(String),
    /// Body editor action (typing, cursor movement, selection).
    BodyEdited(text_editor::Action),
    /// Save as draft.
    SaveDraft,
    /// Send the message.
    Send,
    /// Discard and go back.
    Discard,
}

/// Messages for the profile screen.
#[derive(Debug, Clone)]
pub enum ProfileMessage {
    /// Load the profile again.
    Reload,
    /// Nickname changed.
    NicknameChanged(String),
    /// Phone changed.
    PhoneChanged(String),
    /// Save nickname and phone.
    Save,
    /// Open the change-password dialog.
    OpenPasswordDialog,
    /// Close the change-password dialog.
    ClosePasswordDialog,
    /// Current password changed.
    OldPasswordChanged(String),
    /// New password changed.
    NewPasswordChanged(String),
    /// Confirmation changed.
    ConfirmPasswordChanged(String),
    /// Submit the password change.
    SubmitPassword,
}

/// Messages for the user management screen.
#[derive(Debug, Clone)]
pub enum UserAdminMessage {
    /// Load the user list again.
    Reload,
    /// Enable or disable a user.
    ToggleStatus(i64),
    /// Promote or demote a user.
    ToggleRole(i64),
    /// Ask for delete confirmation.
    AskDelete(i64),
    /// Delete the user awaiting confirmation.
    ConfirmDelete,
    /// Open the reset-password dialog for a user.
    OpenReset(i64),
    /// Reset password field changed.
    ResetPasswordChanged(String),
    /// Submit the password reset.
    SubmitReset,
    /// Open the create-user form.
    OpenCreate,
    /// Create-user form field changed.
    CreateField(CreateUserField, String),
    /// Toggle the administrator flag of the new user.
    CreateAdminToggled(bool),
    /// Submit the create-user form.
    SubmitCreate,
    /// Close any open dialog.
    CloseDialog,
}

/// Text fields of the create-user form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateUserField {
    /// Username.
    Username,
    /// Email address.
    Email,
    /// Initial password.
    Password,
    /// Nickname.
    Nickname,
    /// Phone.
    Phone,
}

/// Messages for the mass email screen.
#[derive(Debug, Clone)]
pub enum BroadcastMessage {
    /// Subject changed.
    SubjectChanged(String),
    /// Body editor action.
    BodyEdited(text_editor::Action),
    /// Pick or unpick a recipient.
    ToggleRecipient(i64),
    /// Pick every listed user.
    SelectAll,
    /// Clear the selection.
    ClearSelection,
    /// Load the user list again.
    ReloadUsers,
    /// Send the broadcast.
    Send,
}
