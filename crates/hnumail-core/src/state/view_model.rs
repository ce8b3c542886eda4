use std::future::Future;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{Outcome, Slot};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::model::{
    ApiMessage, BroadcastRequest, ChangePasswordRequest, CreateUserRequest, Credentials, Email,
    EmailRequest, Folder, Page, RegisterRequest, ResetPasswordRequest, Session,
    UpdateProfileRequest, User, UserProfile, UserRole, UserStatus,
};
use crate::repository::MailRepository;
use crate::transport::{ApiClient, ApiResponse};

/// Number of drafts scanned when resuming the most recent one.
pub const LATEST_DRAFT_WINDOW: u32 = 10;

/// One observable slot per backend operation.
#[derive(Debug, Default)]
pub struct Slots {
    /// Login result.
    pub login: Slot<Session>,
    /// Registration result.
    pub register: Slot<Session>,
    /// Logout acknowledgement.
    pub logout: Slot<ApiMessage>,
    /// Signed-in user's profile.
    pub profile: Slot<UserProfile>,
    /// Inbox page.
    pub inbox: Slot<Page<Email>>,
    /// Sent page.
    pub sent: Slot<Page<Email>>,
    /// Drafts page.
    pub drafts: Slot<Page<Email>>,
    /// Send acknowledgement.
    pub send_email: Slot<ApiMessage>,
    /// Email shown on the detail screen.
    pub email_detail: Slot<Email>,
    /// Mark-as-read result.
    pub mark_read: Slot<Email>,
    /// Move acknowledgement.
    pub move_to_folder: Slot<ApiMessage>,
    /// Delete acknowledgement.
    pub delete_email: Slot<ApiMessage>,
    /// Users on the current admin page.
    pub users: Slot<Vec<User>>,
    /// Create-user acknowledgement.
    pub create_user: Slot<ApiMessage>,
    /// Status-change acknowledgement.
    pub update_user_status: Slot<ApiMessage>,
    /// Role-change acknowledgement.
    pub update_user_role: Slot<ApiMessage>,
    /// Delete-user acknowledgement.
    pub delete_user: Slot<ApiMessage>,
    /// Broadcast acknowledgement.
    pub broadcast: Slot<ApiMessage>,
    /// Change-password acknowledgement.
    pub change_password: Slot<ApiMessage>,
    /// Reset-password acknowledgement.
    pub reset_password: Slot<ApiMessage>,
    /// Profile update acknowledgement.
    pub update_profile: Slot<ApiMessage>,
    /// Save-draft acknowledgement.
    pub save_draft: Slot<ApiMessage>,
    /// Draft loaded into the compose screen.
    pub current_draft: Slot<Email>,
}

#[derive(Debug)]
struct Inner {
    repository: MailRepository,
    page_size: u32,
    slots: Slots,
}

/// State holder between the screens and the repository.
///
/// Every trigger publishes [`Outcome::Pending`], performs one backend call
/// and publishes exactly one terminal outcome, which it also returns.
/// Concurrent triggers on the same slot race; the last write wins.
///
/// Cloning is cheap; clones share slots and the session token.
#[derive(Debug, Clone)]
pub struct MailViewModel {
    inner: Arc<Inner>,
}

impl MailViewModel {
    /// Build a view-model talking to the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = ApiClient::new(config)?;
        Ok(Self::with_repository(
            MailRepository::new(client),
            config.page_size,
        ))
    }

    /// Build a view-model over an existing repository.
    #[must_use]
    pub fn with_repository(repository: MailRepository, page_size: u32) -> Self {
        Self {
            inner: Arc::new(Inner {
                repository,
                page_size: page_size.max(1),
                slots: Slots::default(),
            }),
        }
    }

    /// All observable slots.
    #[must_use]
    pub fn slots(&self) -> &Slots {
        &self.inner.slots
    }

    /// Page size used for listings.
    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.inner.page_size
    }

    /// Transport client (token inspection).
    #[must_use]
    pub fn client(&self) -> &ApiClient {
        self.inner.repository.client()
    }

    /// Session from the last successful login or registration.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        let slots = self.slots();
        slots
            .login
            .get()
            .into_success()
            .or_else(|| slots.register.get().into_success())
    }

    fn repo(&self) -> &MailRepository {
        &self.inner.repository
    }

    // Authentication

    /// Log in and store the session token.
    pub async fn login(&self, credentials: Credentials) -> Outcome<Session> {
        run(&self.slots().login, "Login failed", async {
            let session = self.repo().login(&credentials).await?.into_result()?;
            self.accept_session(&session)?;
            info!(user = %session.username, admin = session.is_admin(), "Logged in");
            Ok(session)
        })
        .await
    }

    /// Register a new account and store the returned session token.
    pub async fn register(&self, request: RegisterRequest) -> Outcome<Session> {
        run(&self.slots().register, "Registration failed", async {
            let session = self.repo().register(&request).await?.into_result()?;
            self.accept_session(&session)?;
            info!(user = %session.username, "Registered");
            Ok(session)
        })
        .await
    }

    fn accept_session(&self, session: &Session) -> Result<()> {
        if session.token.is_empty() {
            return Err(Error::EmptyBody);
        }
        self.client().set_token(session.token.clone());
        Ok(())
    }

    /// Log out.
    ///
    /// Whatever the backend answers, the token is dropped and the
    /// session-bound slots return to idle before the outcome is published.
    pub async fn logout(&self) -> Outcome<ApiMessage> {
        run(&self.slots().logout, "Logout failed", async {
            let result = self
                .repo()
                .logout()
                .await
                .and_then(ApiResponse::into_result);
            self.clear_session();
            info!("Logged out");
            result
        })
        .await
    }

    fn clear_session(&self) {
        self.client().clear_token();
        let slots = self.slots();
        slots.login.reset();
        slots.register.reset();
        slots.profile.reset();
        slots.inbox.reset();
        slots.sent.reset();
        slots.drafts.reset();
        slots.email_detail.reset();
        slots.current_draft.reset();
        slots.users.reset();
    }

    /// Clear the logout slot once the screen has reacted to it.
    pub fn reset_logout(&self) {
        self.slots().logout.reset();
    }

    /// Fetch the signed-in user's profile.
    pub async fn load_profile(&self) -> Outcome<UserProfile> {
        run(&self.slots().profile, "Failed to load profile", async {
            self.repo().profile().await?.into_result()
        })
        .await
    }

    /// Update nickname and phone; on success the profile slot is patched.
    pub async fn update_profile(&self, request: UpdateProfileRequest) -> Outcome<ApiMessage> {
        let outcome = run(
            &self.slots().update_profile,
            "Failed to update profile",
            async { self.repo().update_profile(&request).await?.into_result() },
        )
        .await;

        if outcome.success().is_some() {
            self.slots().profile.update(|profile| {
                if let Outcome::Success(profile) = profile {
                    profile.apply(&request);
                }
            });
        }
        outcome
    }

    /// Change the signed-in user's password.
    pub async fn change_password(&self, request: ChangePasswordRequest) -> Outcome<ApiMessage> {
        run(
            &self.slots().change_password,
            "Failed to change password",
            async { self.repo().change_password(&request).await?.into_result() },
        )
        .await
    }

    // Mailboxes

    /// Load one page of the inbox.
    pub async fn load_inbox(&self, page: u32) -> Outcome<Page<Email>> {
        let size = self.page_size();
        run(&self.slots().inbox, "Failed to load inbox", async {
            self.repo().inbox(page, size).await?.into_result()
        })
        .await
    }

    /// Load one page of sent mail.
    pub async fn load_sent(&self, page: u32) -> Outcome<Page<Email>> {
        let size = self.page_size();
        run(&self.slots().sent, "Failed to load sent mail", async {
            self.repo().sent(page, size).await?.into_result()
        })
        .await
    }

    /// Load one page of drafts.
    pub async fn load_drafts(&self, page: u32) -> Outcome<Page<Email>> {
        let size = self.page_size();
        run(&self.slots().drafts, "Failed to load drafts", async {
            self.repo().drafts(page, size).await?.into_result()
        })
        .await
    }

    /// Load one page of a listable folder.
    ///
    /// Trash and spam have no listing endpoint and fall back to the inbox.
    pub async fn load_folder(&self, folder: Folder, page: u32) -> Outcome<Page<Email>> {
        match folder {
            Folder::Sent => self.load_sent(page).await,
            Folder::Draft => self.load_drafts(page).await,
            Folder::Inbox | Folder::Trash | Folder::Spam => self.load_inbox(page).await,
        }
    }

    /// Slot backing a folder listing.
    #[must_use]
    pub fn folder_slot(&self, folder: Folder) -> &Slot<Page<Email>> {
        let slots = self.slots();
        match folder {
            Folder::Sent => &slots.sent,
            Folder::Draft => &slots.drafts,
            Folder::Inbox | Folder::Trash | Folder::Spam => &slots.inbox,
        }
    }

    // Emails

    /// Fetch one email for the detail screen.
    pub async fn load_email(&self, id: i64) -> Outcome<Email> {
        run(&self.slots().email_detail, "Failed to load email", async {
            self.repo().email(id).await?.into_result()
        })
        .await
    }

    /// Mark an email read; on success the detail slot is updated and the
    /// inbox reloaded.
    pub async fn mark_read(&self, id: i64) -> Outcome<Email> {
        let outcome = run(&self.slots().mark_read, "Failed to mark as read", async {
            self.repo().mark_read(id).await?.into_result()
        })
        .await;

        if let Outcome::Success(email) = &outcome {
            self.slots()
                .email_detail
                .publish(Outcome::Success(email.clone()));
            self.load_inbox(0).await;
        }
        outcome
    }

    /// Move an email to another folder; on success the inbox is reloaded.
    pub async fn move_to_folder(&self, id: i64, folder: Folder) -> Outcome<ApiMessage> {
        let outcome = run(&self.slots().move_to_folder, "Failed to move email", async {
            self.repo().move_to_folder(id, folder).await?.into_result()
        })
        .await;

        if outcome.success().is_some() {
            self.load_inbox(0).await;
        }
        outcome
    }

    /// Delete an email; on success the inbox is reloaded.
    pub async fn delete_email(&self, id: i64) -> Outcome<ApiMessage> {
        let outcome = run(&self.slots().delete_email, "Failed to delete email", async {
            self.repo().delete_email(id).await?.into_result()
        })
        .await;

        if outcome.success().is_some() {
            self.load_inbox(0).await;
        }
        outcome
    }

    /// Send an email, replacing the referenced draft if any.
    pub async fn send_email(&self, request: EmailRequest) -> Outcome<ApiMessage> {
        run(&self.slots().send_email, "Failed to send email", async {
            let ack = self.repo().send_email(&request).await?.into_result()?;
            info!(to = %request.to, draft = ?request.draft_id, "Email sent");
            Ok(ack)
        })
        .await
    }

    /// Save the compose fields as a draft.
    pub async fn save_draft(&self, request: EmailRequest) -> Outcome<ApiMessage> {
        run(&self.slots().save_draft, "Failed to save draft", async {
            self.repo().save_draft(&request).await?.into_result()
        })
        .await
    }

    /// Load one draft into the compose screen.
    pub async fn load_draft(&self, id: i64) -> Outcome<Email> {
        run(&self.slots().current_draft, "Failed to load draft", async {
            self.repo().email(id).await?.into_result()
        })
        .await
    }

    /// Load the most recent draft into the compose screen.
    ///
    /// The slot turns pending while drafts are listed. When there are no
    /// drafts it gets its previous value back and `None` is returned.
    pub async fn load_latest_draft(&self) -> Option<Outcome<Email>> {
        let slot = &self.slots().current_draft;
        let previous = slot.get();
        slot.publish(Outcome::Pending);

        let drafts = self
            .repo()
            .drafts(0, LATEST_DRAFT_WINDOW)
            .await
            .and_then(ApiResponse::into_result);

        let drafts = match drafts {
            Ok(page) => page,
            Err(err) => {
                warn!(error = %err, "Failed to list drafts");
                let outcome = failure("Failed to load draft", &err);
                slot.publish(outcome.clone());
                return Some(outcome);
            }
        };

        let Some(latest) = newest_draft(&drafts.content) else {
            debug!("No drafts to resume");
            slot.publish(previous);
            return None;
        };
        Some(self.load_draft(latest.id).await)
    }

    // Administration

    /// Load one page of users.
    pub async fn load_users(&self, page: u32) -> Outcome<Vec<User>> {
        let size = self.page_size();
        run(&self.slots().users, "Failed to load users", async {
            let page = self.repo().users(page, size).await?.into_result()?;
            Ok(page.content)
        })
        .await
    }

    /// Create a user; on success the user list is reloaded.
    pub async fn create_user(&self, request: CreateUserRequest) -> Outcome<ApiMessage> {
        let outcome = run(&self.slots().create_user, "Failed to create user", async {
            self.repo().create_user(&request).await?.into_result()
        })
        .await;
        self.refresh_users_after(outcome).await
    }

    /// Change a user's status; on success the user list is reloaded.
    pub async fn update_user_status(&self, id: i64, status: UserStatus) -> Outcome<ApiMessage> {
        let outcome = run(
            &self.slots().update_user_status,
            "Failed to update user status",
            async { self.repo().set_user_status(id, status).await?.into_result() },
        )
        .await;
        self.refresh_users_after(outcome).await
    }

    /// Change a user's role; on success the user list is reloaded.
    pub async fn update_user_role(&self, id: i64, role: UserRole) -> Outcome<ApiMessage> {
        let outcome = run(
            &self.slots().update_user_role,
            "Failed to update user role",
            async { self.repo().set_user_role(id, role).await?.into_result() },
        )
        .await;
        self.refresh_users_after(outcome).await
    }

    /// Delete a user; on success the user list is reloaded.
    pub async fn delete_user(&self, id: i64) -> Outcome<ApiMessage> {
        let outcome = run(&self.slots().delete_user, "Failed to delete user", async {
            self.repo().delete_user(id).await?.into_result()
        })
        .await;
        self.refresh_users_after(outcome).await
    }

    /// Reset a user's password; on success the user list is reloaded.
    pub async fn reset_password(
        &self,
        id: i64,
        request: ResetPasswordRequest,
    ) -> Outcome<ApiMessage> {
        let outcome = run(
            &self.slots().reset_password,
            "Failed to reset password",
            async { self.repo().reset_password(id, &request).await?.into_result() },
        )
        .await;
        self.refresh_users_after(outcome).await
    }

    async fn refresh_users_after(&self, outcome: Outcome<ApiMessage>) -> Outcome<ApiMessage> {
        if outcome.success().is_some() {
            self.load_users(0).await;
        }
        outcome
    }

    /// Send a message to many users at once.
    pub async fn broadcast(&self, request: BroadcastRequest) -> Outcome<ApiMessage> {
        run(&self.slots().broadcast, "Failed to send broadcast", async {
            let ack = self.repo().broadcast(&request).await?.into_result()?;
            info!(recipients = request.recipient_ids.len(), "Broadcast sent");
            Ok(ack)
        })
        .await
    }
}

/// Newest email by `sent_at`; the first one wins ties, undated ones sort oldest.
#[must_use]
pub fn newest_draft(drafts: &[Email]) -> Option<&Email> {
    drafts.iter().fold(None, |best, email| match best {
        Some(current) if sort_key(current) >= sort_key(email) => Some(current),
        _ => Some(email),
    })
}

fn sort_key(email: &Email) -> &str {
    email.sent_at.as_deref().unwrap_or("")
}

fn failure<T>(label: &str, err: &Error) -> Outcome<T> {
    Outcome::Failure(format!("{label}: {}", err.user_message()))
}

async fn run<T, F>(slot: &Slot<T>, label: &str, call: F) -> Outcome<T>
where
    T: Clone,
    F: Future<Output = Result<T>>,
{
    slot.publish(Outcome::Pending);

    let outcome = match call.await {
        Ok(value) => Outcome::Success(value),
        Err(err) => {
            warn!(operation = label, error = %err, "Operation failed");
            failure(label, &err)
        }
    };

    slot.publish(outcome.clone());
    outcome
}
