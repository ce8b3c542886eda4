//! `HnuMail` - desktop client for the HNU mail server
//!
//! Built with Rust and the iced GUI framework on top of `hnumail-core`.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use std::future::Future;

use anyhow::Context;
use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{column, row};
use iced::{Element, Length, Subscription, Task};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hnumail_core::{
    ClientConfig, Email, Folder, MailViewModel, Navigator, Outcome, ResetPasswordRequest, Route,
    Session, Slots, User,
};
use message::{
    BroadcastMessage, ComposeMessage, CreateUserField, DetailMessage, KeyboardAction, LoginMessage,
    Message, Operation, ProfileMessage, RegisterMessage, UserAdminMessage,
};
use model::{
    AppSettings, BroadcastForm, ComposeState, CreateUserForm, LoginForm, MailboxTab,
    PasswordDialog, ProfileForm, RegisterForm, ResetPasswordDialog, UserAdminState,
};
use style::widgets::palette::ThemeMode;

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hnumail=debug,hnumail_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HnuMail");

    iced::application(HnuMail::new, HnuMail::update, HnuMail::view)
        .title("HnuMail")
        .subscription(HnuMail::subscription)
        .run()
}

/// Main application state.
struct HnuMail {
    /// Screen history.
    navigator: Navigator,
    /// Client state holder, available once the configuration has loaded.
    vm: Option<MailViewModel>,
    /// Configuration or client construction error.
    startup_error: Option<String>,
    /// Current theme mode (light/dark).
    theme_mode: ThemeMode,
    /// Whether the drawer is visible.
    drawer_visible: bool,
    /// Selected mailbox tab.
    mailbox: MailboxTab,
    /// Zero-based page of the selected mailbox.
    page: u32,
    login: LoginForm,
    register: RegisterForm,
    compose: ComposeState,
    profile: ProfileForm,
    users: UserAdminState,
    broadcast: BroadcastForm,
}

impl Default for HnuMail {
    fn default() -> Self {
        Self {
            navigator: Navigator::default(),
            vm: None,
            startup_error: None,
            theme_mode: ThemeMode::default(),
            drawer_visible: true,
            mailbox: MailboxTab::Inbox,
            page: 0,
            login: LoginForm::default(),
            register: RegisterForm::default(),
            compose: ComposeState::new(),
            profile: ProfileForm::default(),
            users: UserAdminState::default(),
            broadcast: BroadcastForm::default(),
        }
    }
}

impl HnuMail {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        app.apply_theme();
        let settings_task = Task::perform(load_settings(), Message::SettingsLoaded);
        let config_task = Task::perform(load_config(), Message::ConfigLoaded);
        (app, Task::batch([settings_task, config_task]))
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        style::widgets::palette::set_theme(self.theme_mode);
    }

    fn slots(&self) -> Option<&Slots> {
        self.vm.as_ref().map(MailViewModel::slots)
    }

    fn session(&self) -> Option<Session> {
        self.vm.as_ref().and_then(MailViewModel::session)
    }

    fn is_admin(&self) -> bool {
        self.session().is_some_and(|s| s.is_admin())
    }

    /// User from the loaded user list.
    fn listed_user(&self, id: i64) -> Option<User> {
        self.slots()
            .and_then(|s| s.users.get().into_success())
            .and_then(|users| users.into_iter().find(|u| u.id == id))
    }

    /// Starts a view-model call and reports `Completed(op)` when it finishes.
    ///
    /// The matching slot turns pending before the task is spawned so the
    /// next frame already shows it.
    fn run<F, Fut, T>(&self, op: Operation, call: F) -> Task<Message>
    where
        F: FnOnce(MailViewModel) -> Fut,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let Some(vm) = self.vm.clone() else {
            warn!(?op, "Client not ready");
            return Task::none();
        };
        mark_pending(vm.slots(), op);
        Task::perform(call(vm), move |_| Message::Completed(op))
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    #[allow(clippy::too_many_lines)] // Large match is idiomatic for Elm architecture
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => return self.open(route),
            Message::Back => return self.go_back(),
            Message::ToggleDrawer => {
                self.drawer_visible = !self.drawer_visible;
            }
            Message::ConfigLoaded(result) => {
                match result.and_then(|config| {
                    info!(base_url = %config.base_url, "Configuration loaded");
                    MailViewModel::new(&config).map_err(|e| e.user_message())
                }) {
                    Ok(vm) => {
                        self.vm = Some(vm);
                        self.startup_error = None;
                    }
                    Err(e) => {
                        warn!("Failed to start client: {}", e);
                        self.startup_error = Some(format!("Invalid client configuration: {e}"));
                    }
                }
            }
            Message::SettingsLoaded(result) => match result {
                Ok(settings) => {
                    self.theme_mode = settings.theme_mode;
                    self.apply_theme();
                    info!("Settings loaded: theme={:?}", self.theme_mode);
                }
                Err(e) => {
                    warn!("Failed to load settings: {}", e);
                }
            },
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to save settings: {}", e);
                }
            }
            Message::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                self.apply_theme();
                let settings = AppSettings {
                    theme_mode: self.theme_mode,
                };
                return Task::perform(save_settings(settings), Message::SettingsSaved);
            }
            Message::Login(msg) => return self.handle_login(msg),
            Message::Register(msg) => return self.handle_register(msg),
            Message::Logout => {
                return self.run(Operation::Logout, |vm| async move { vm.logout().await });
            }
            Message::SelectMailbox(tab) => {
                self.mailbox = tab;
                self.page = 0;
                if self.navigator.current() != Route::EmailList {
                    self.navigator
                        .navigate_pop_up_to(Route::EmailList, Route::EmailList, true);
                }
                return self.load_mailbox();
            }
            Message::RefreshMailbox => return self.load_mailbox(),
            Message::ChangePage(page) => {
                self.page = page;
                return self.load_mailbox();
            }
            Message::OpenEmail { id, is_draft } => {
                let route = if is_draft {
                    Route::Compose(Some(id))
                } else {
                    Route::EmailDetail(id)
                };
                return self.open(route);
            }
            Message::Detail(msg) => return self.handle_detail(msg),
            Message::ComposeNew => {
                self.compose = ComposeState::new();
                return self.open(Route::Compose(None));
            }
            Message::ResumeLatestDraft => {
                let Some(vm) = self.vm.clone() else {
                    return Task::none();
                };
                mark_pending(vm.slots(), Operation::LatestDraft { found: true });
                return Task::perform(
                    async move { vm.load_latest_draft().await.is_some() },
                    |found| Message::Completed(Operation::LatestDraft { found }),
                );
            }
            Message::Compose(msg) => return self.handle_compose(msg),
            Message::Profile(msg) => return self.handle_profile(msg),
            Message::Users(msg) => return self.handle_users(msg),
            Message::Broadcast(msg) => return self.handle_broadcast(msg),
            Message::Completed(op) => return self.handle_completed(op),
            Message::KeyPressed(action) => return self.handle_keyboard_action(action),
            Message::Ignored => {}
        }
        Task::none()
    }

    /// Pushes a screen and starts whatever it needs to show.
    fn open(&mut self, route: Route) -> Task<Message> {
        if !route.is_public() && self.session().is_none() {
            debug!(%route, "Ignoring navigation without a session");
            return Task::none();
        }
        if route.requires_admin() && !self.is_admin() {
            warn!(%route, "Ignoring admin screen for a non-admin session");
            return Task::none();
        }
        self.navigator.navigate(route);
        self.enter(route)
    }

    /// Starts the loads a screen needs when it becomes current.
    fn enter(&mut self, route: Route) -> Task<Message> {
        let Some(slots) = self.slots() else {
            return Task::none();
        };
        match route {
            Route::Login | Route::Register => Task::none(),
            Route::EmailList => self.load_mailbox(),
            Route::EmailDetail(id) => {
                slots.mark_read.reset();
                slots.move_to_folder.reset();
                slots.delete_email.reset();
                self.run(Operation::Email, move |vm| async move { vm.load_email(id).await })
            }
            Route::Compose(draft) => {
                slots.send_email.reset();
                slots.save_draft.reset();
                match draft {
                    Some(id) => {
                        self.compose = ComposeState {
                            draft_id: Some(id),
                            ..ComposeState::new()
                        };
                        self.run(Operation::LoadDraft, move |vm| async move {
                            vm.load_draft(id).await
                        })
                    }
                    None => Task::none(),
                }
            }
            Route::UserProfile => {
                slots.update_profile.reset();
                slots.change_password.reset();
                self.profile = ProfileForm::default();
                self.run(Operation::Profile, |vm| async move { vm.load_profile().await })
            }
            Route::UserManagement => {
                for slot in [
                    &slots.create_user,
                    &slots.update_user_status,
                    &slots.update_user_role,
                    &slots.delete_user,
                    &slots.reset_password,
                ] {
                    slot.reset();
                }
                self.users = UserAdminState::default();
                self.load_users()
            }
            Route::MassEmail => {
                slots.broadcast.reset();
                self.broadcast = BroadcastForm::default();
                self.load_users()
            }
        }
    }

    fn go_back(&mut self) -> Task<Message> {
        if !self.navigator.back() {
            return Task::none();
        }
        if self.navigator.current() == Route::EmailList {
            return self.load_mailbox();
        }
        Task::none()
    }

    fn load_mailbox(&self) -> Task<Message> {
        let tab = self.mailbox;
        let page = self.page;
        self.run(Operation::Mailbox(tab), move |vm| async move {
            vm.load_folder(tab.folder(), page).await
        })
    }

    fn load_users(&self) -> Task<Message> {
        self.run(Operation::Users, |vm| async move { vm.load_users(0).await })
    }

    fn handle_login(&mut self, msg: LoginMessage) -> Task<Message> {
        match msg {
            LoginMessage::UsernameChanged(value) => self.login.username = value,
            LoginMessage::PasswordChanged(value) => self.login.password = value,
            LoginMessage::Submit => {
                if !self.login.can_submit() {
                    return Task::none();
                }
                let credentials = self.login.credentials();
                return self.run(Operation::Login, |vm| async move {
                    vm.login(credentials).await
                });
            }
        }
        Task::none()
    }

    fn handle_register(&mut self, msg: RegisterMessage) -> Task<Message> {
        match msg {
            RegisterMessage::UsernameChanged(value) => self.register.username = value,
            RegisterMessage::EmailChanged(value) => self.register.email = value,
            RegisterMessage::PasswordChanged(value) => self.register.password = value,
            RegisterMessage::ConfirmChanged(value) => self.register.confirm = value,
            RegisterMessage::Submit => {
                if !self.register.can_submit() {
                    return Task::none();
                }
                let request = self.register.request();
                return self.run(Operation::Register, |vm| async move {
                    vm.register(request).await
                });
            }
        }
        Task::none()
    }

    fn handle_detail(&mut self, msg: DetailMessage) -> Task<Message> {
        let Route::EmailDetail(id) = self.navigator.current() else {
            return Task::none();
        };
        match msg {
            DetailMessage::Retry => {
                self.run(Operation::Email, move |vm| async move { vm.load_email(id).await })
            }
            DetailMessage::MarkRead => {
                self.run(Operation::MarkRead, move |vm| async move { vm.mark_read(id).await })
            }
            DetailMessage::MoveToTrash => self.run(Operation::MoveToTrash, move |vm| async move {
                vm.move_to_folder(id, Folder::Trash).await
            }),
            DetailMessage::Delete => self.run(Operation::DeleteEmail, move |vm| async move {
                vm.delete_email(id).await
            }),
            DetailMessage::Reply | DetailMessage::Forward => {
                let Some(email) = self
                    .slots()
                    .and_then(|s| s.email_detail.get().into_success())
                else {
                    return Task::none();
                };
                self.compose = if matches!(msg, DetailMessage::Reply) {
                    ComposeState::reply(&email)
                } else {
                    ComposeState::forward(&email)
                };
                self.open(Route::Compose(None))
            }
        }
    }

    fn handle_compose(&mut self, msg: ComposeMessage) -> Task<Message> {
        match msg {
            ComposeMessage::ToChanged(value) => {
                self.compose.to = value;
                self.compose.error = None;
            }
            ComposeMessage::SubjectChanged(value) => {
                self.compose.subject = value;
                self.compose.error = None;
            }
            ComposeMessage::BodyEdited(action) => self.compose.edit_body(action),
            ComposeMessage::SaveDraft => {
                if let Err(e) = self.compose.validate() {
                    self.compose.error = Some(e.message().to_string());
                    return Task::none();
                }
                let request = self.compose.request();
                return self.run(Operation::SaveDraft, |vm| async move {
                    vm.save_draft(request).await
                });
            }
            ComposeMessage::Send => {
                if let Err(e) = self.compose.validate() {
                    self.compose.error = Some(e.message().to_string());
                    return Task::none();
                }
                let request = self.compose.request();
                return self.run(Operation::SendEmail, |vm| async move {
                    vm.send_email(request).await
                });
            }
            ComposeMessage::Discard => {
                self.compose = ComposeState::new();
                return self.go_back();
            }
        }
        Task::none()
    }

    fn handle_profile(&mut self, msg: ProfileMessage) -> Task<Message> {
        match msg {
            ProfileMessage::Reload => {
                self.profile.loaded = false;
                return self.run(Operation::Profile, |vm| async move { vm.load_profile().await });
            }
            ProfileMessage::NicknameChanged(value) => self.profile.nickname = value,
            ProfileMessage::PhoneChanged(value) => self.profile.phone = value,
            ProfileMessage::Save => {
                if self.profile.error().is_some() {
                    return Task::none();
                }
                let request = self.profile.request();
                return self.run(Operation::UpdateProfile, |vm| async move {
                    vm.update_profile(request).await
                });
            }
            ProfileMessage::OpenPasswordDialog => {
                if let Some(slots) = self.slots() {
                    slots.change_password.reset();
                }
                self.profile.password_dialog = Some(PasswordDialog::default());
            }
            ProfileMessage::ClosePasswordDialog => self.profile.password_dialog = None,
            ProfileMessage::OldPasswordChanged(value) => {
                if let Some(dialog) = &mut self.profile.password_dialog {
                    dialog.old = value;
                    dialog.error = None;
                }
            }
            ProfileMessage::NewPasswordChanged(value) => {
                if let Some(dialog) = &mut self.profile.password_dialog {
                    dialog.new = value;
                    dialog.error = None;
                }
            }
            ProfileMessage::ConfirmPasswordChanged(value) => {
                if let Some(dialog) = &mut self.profile.password_dialog {
                    dialog.confirm = value;
                    dialog.error = None;
                }
            }
            ProfileMessage::SubmitPassword => {
                let Some(dialog) = &mut self.profile.password_dialog else {
                    return Task::none();
                };
                match dialog.request() {
                    Ok(request) => {
                        return self.run(Operation::ChangePassword, |vm| async move {
                            vm.change_password(request).await
                        });
                    }
                    Err(e) => dialog.error = Some(e.to_string()),
                }
            }
        }
        Task::none()
    }

    #[allow(clippy::too_many_lines)]
    fn handle_users(&mut self, msg: UserAdminMessage) -> Task<Message> {
        match msg {
            UserAdminMessage::Reload => return self.load_users(),
            UserAdminMessage::ToggleStatus(id) => {
                if let Some(user) = self.listed_user(id) {
                    let status = user.status.toggled();
                    return self.run(Operation::UpdateUserStatus, move |vm| async move {
                        vm.update_user_status(id, status).await
                    });
                }
            }
            UserAdminMessage::ToggleRole(id) => {
                if let Some(user) = self.listed_user(id) {
                    let role = user.role.toggled();
                    return self.run(Operation::UpdateUserRole, move |vm| async move {
                        vm.update_user_role(id, role).await
                    });
                }
            }
            UserAdminMessage::AskDelete(id) => {
                self.users.close_dialogs();
                self.users.confirm_delete = Some(id);
            }
            UserAdminMessage::ConfirmDelete => {
                if let Some(id) = self.users.confirm_delete.take() {
                    return self.run(Operation::DeleteUser, move |vm| async move {
                        vm.delete_user(id).await
                    });
                }
            }
            UserAdminMessage::OpenReset(id) => {
                if let Some(user) = self.listed_user(id) {
                    if let Some(slots) = self.slots() {
                        slots.reset_password.reset();
                    }
                    self.users.close_dialogs();
                    self.users.reset_dialog = Some(ResetPasswordDialog::new(id, user.username));
                }
            }
            UserAdminMessage::ResetPasswordChanged(value) => {
                if let Some(dialog) = &mut self.users.reset_dialog {
                    dialog.password = value;
                    dialog.error = None;
                }
            }
            UserAdminMessage::SubmitReset => {
                let Some(dialog) = &mut self.users.reset_dialog else {
                    return Task::none();
                };
                match dialog.password() {
                    Ok(new_password) => {
                        let id = dialog.user_id;
                        return self.run(Operation::ResetPassword, move |vm| async move {
                            vm.reset_password(id, ResetPasswordRequest { new_password })
                                .await
                        });
                    }
                    Err(e) => dialog.error = Some(e.to_string()),
                }
            }
            UserAdminMessage::OpenCreate => {
                if let Some(slots) = self.slots() {
                    slots.create_user.reset();
                }
                self.users.close_dialogs();
                self.users.create_form = Some(CreateUserForm::default());
            }
            UserAdminMessage::CreateField(field, value) => {
                if let Some(form) = &mut self.users.create_form {
                    let target = match field {
                        CreateUserField::Username => &mut form.username,
                        CreateUserField::Email => &mut form.email,
                        CreateUserField::Password => &mut form.password,
                        CreateUserField::Nickname => &mut form.nickname,
                        CreateUserField::Phone => &mut form.phone,
                    };
                    *target = value;
                    form.error = None;
                }
            }
            UserAdminMessage::CreateAdminToggled(admin) => {
                if let Some(form) = &mut self.users.create_form {
                    form.admin = admin;
                }
            }
            UserAdminMessage::SubmitCreate => {
                let Some(form) = &mut self.users.create_form else {
                    return Task::none();
                };
                match form.request() {
                    Ok(request) => {
                        return self.run(Operation::CreateUser, |vm| async move {
                            vm.create_user(request).await
                        });
                    }
                    Err(e) => form.error = Some(e.to_string()),
                }
            }
            UserAdminMessage::CloseDialog => self.users.close_dialogs(),
        }
        Task::none()
    }

    fn handle_broadcast(&mut self, msg: BroadcastMessage) -> Task<Message> {
        match msg {
            BroadcastMessage::SubjectChanged(value) => {
                self.broadcast.subject = value;
                self.broadcast.error = None;
            }
            BroadcastMessage::BodyEdited(action) => self.broadcast.edit_body(action),
            BroadcastMessage::ToggleRecipient(id) => self.broadcast.toggle(id),
            BroadcastMessage::SelectAll => {
                if let Some(users) = self.slots().and_then(|s| s.users.get().into_success()) {
                    self.broadcast.select_all(users.iter().map(|u| u.id));
                }
            }
            BroadcastMessage::ClearSelection => self.broadcast.clear(),
            BroadcastMessage::ReloadUsers => return self.load_users(),
            BroadcastMessage::Send => match self.broadcast.request() {
                Ok(request) => {
                    return self.run(Operation::Broadcast, |vm| async move {
                        vm.broadcast(request).await
                    });
                }
                Err(e) => self.broadcast.error = Some(e.to_string()),
            },
        }
        Task::none()
    }

    /// Reacts to a finished call by reading its slot.
    ///
    /// Completions for a screen that is no longer current only update slots.
    fn handle_completed(&mut self, op: Operation) -> Task<Message> {
        let Some(slots) = self.slots() else {
            return Task::none();
        };
        let current = self.navigator.current();

        match op {
            Operation::Login => {
                if slots.login.get().success().is_some() && current == Route::Login {
                    self.login.password.clear();
                    return self.enter_mailbox();
                }
            }
            Operation::Register => {
                if slots.register.get().success().is_some() && current == Route::Register {
                    self.register = RegisterForm::default();
                    return self.enter_mailbox();
                }
            }
            Operation::Logout => {
                if let Some(vm) = &self.vm {
                    vm.reset_logout();
                }
                self.navigator.reset_to(Route::Login);
                self.login.password.clear();
                self.compose = ComposeState::new();
                self.profile = ProfileForm::default();
                self.users = UserAdminState::default();
                self.broadcast = BroadcastForm::default();
                info!("Returned to login");
            }
            Operation::Profile => {
                if let Some(profile) = slots.profile.get().into_success()
                    && !self.profile.loaded
                {
                    self.profile.fill(&profile);
                }
            }
            Operation::ChangePassword => {
                if slots.change_password.get().success().is_some() {
                    self.profile.password_dialog = None;
                }
            }
            Operation::MoveToTrash | Operation::DeleteEmail => {
                let slot = if op == Operation::MoveToTrash {
                    &slots.move_to_folder
                } else {
                    &slots.delete_email
                };
                if slot.get().success().is_some()
                    && matches!(current, Route::EmailDetail(_))
                {
                    return self.go_back();
                }
            }
            Operation::SendEmail => {
                if slots.send_email.get().success().is_some()
                    && matches!(current, Route::Compose(_))
                {
                    self.compose = ComposeState::new();
                    return self.go_back();
                }
            }
            Operation::LoadDraft => {
                if let Some(draft) = slots.current_draft.get().into_success()
                    && self.compose.draft_id == Some(draft.id)
                {
                    self.compose.fill_from_draft(&draft);
                }
            }
            Operation::LatestDraft { found } => {
                let outcome = slots.current_draft.get();
                if !found {
                    slots.current_draft.reset();
                }
                return self.resume_draft(found.then_some(outcome));
            }
            Operation::CreateUser => {
                if slots.create_user.get().success().is_some() {
                    self.users.create_form = None;
                }
            }
            Operation::ResetPassword => {
                if slots.reset_password.get().success().is_some() {
                    self.users.reset_dialog = None;
                }
            }
            Operation::Broadcast => {
                if slots.broadcast.get().success().is_some() && current == Route::MassEmail {
                    self.broadcast = BroadcastForm::default();
                    return self.go_back();
                }
            }
            Operation::UpdateProfile
            | Operation::Mailbox(_)
            | Operation::Email
            | Operation::MarkRead
            | Operation::SaveDraft
            | Operation::Users
            | Operation::UpdateUserStatus
            | Operation::UpdateUserRole
            | Operation::DeleteUser => {}
        }
        Task::none()
    }

    /// Shows the inbox after a successful login or registration.
    fn enter_mailbox(&mut self) -> Task<Message> {
        self.navigator
            .navigate_pop_up_to(Route::EmailList, Route::Login, true);
        self.mailbox = MailboxTab::Inbox;
        self.page = 0;
        self.load_mailbox()
    }

    /// Opens compose with the latest draft, its load error, or blank.
    fn resume_draft(&mut self, outcome: Option<Outcome<Email>>) -> Task<Message> {
        let Some(slots) = self.slots() else {
            return Task::none();
        };
        slots.send_email.reset();
        slots.save_draft.reset();

        match outcome {
            Some(Outcome::Success(draft)) => {
                self.compose = ComposeState::for_draft(&draft);
                self.navigator.navigate(Route::Compose(Some(draft.id)));
            }
            Some(Outcome::Failure(message)) => {
                self.compose = ComposeState::new();
                self.compose.error = Some(message);
                self.navigator.navigate(Route::Compose(None));
            }
            _ => {
                debug!("No draft to resume, starting blank");
                self.compose = ComposeState::new();
                self.navigator.navigate(Route::Compose(None));
            }
        }
        Task::none()
    }

    /// Handle keyboard shortcut actions.
    fn handle_keyboard_action(&mut self, action: KeyboardAction) -> Task<Message> {
        let current = self.navigator.current();
        if current.is_public() {
            // Only Escape applies before sign-in, to leave Register.
            return if action == KeyboardAction::Back {
                self.go_back()
            } else {
                Task::none()
            };
        }
        match action {
            KeyboardAction::ComposeNew => Task::done(Message::ComposeNew),
            KeyboardAction::Send => {
                if matches!(current, Route::Compose(_)) {
                    Task::done(Message::Compose(ComposeMessage::Send))
                } else {
                    Task::none()
                }
            }
            KeyboardAction::Back => self.go_back(),
            KeyboardAction::Refresh => {
                if current == Route::EmailList {
                    self.load_mailbox()
                } else {
                    Task::none()
                }
            }
            KeyboardAction::ToggleDrawer => {
                self.drawer_visible = !self.drawer_visible;
                Task::none()
            }
        }
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let route = self.navigator.current();
        let Some(slots) = self.slots() else {
            return view::view_login(
                &self.login,
                Outcome::Idle,
                false,
                self.startup_error.as_deref(),
            );
        };

        match route {
            Route::Login => view::view_login(&self.login, slots.login.get(), true, None),
            Route::Register => view::view_register(&self.register, slots.register.get()),
            _ => self.view_signed_in(slots, route),
        }
    }

    /// Header, drawer and the current screen.
    fn view_signed_in(&self, slots: &Slots, route: Route) -> Element<'_, Message> {
        let session = self.session();
        let header = view::view_header(
            route,
            self.navigator.can_go_back(),
            session.as_ref(),
            self.theme_mode,
        );

        let screen = match route {
            Route::EmailList => view::view_email_list(
                self.mailbox,
                self.vm
                    .as_ref()
                    .map(|vm| vm.folder_slot(self.mailbox.folder()).get())
                    .unwrap_or_default(),
            ),
            Route::EmailDetail(_) => view::view_email_detail(
                slots.email_detail.get(),
                &view::DetailActions {
                    mark_read: slots.mark_read.get(),
                    move_to_trash: slots.move_to_folder.get(),
                    delete: slots.delete_email.get(),
                },
            ),
            Route::Compose(_) => view::view_compose(
                &self.compose,
                slots.current_draft.get(),
                slots.send_email.get(),
                slots.save_draft.get(),
            ),
            Route::UserProfile => view::view_profile(
                &self.profile,
                view::ProfileOutcomes {
                    profile: slots.profile.get(),
                    update: slots.update_profile.get(),
                    change_password: slots.change_password.get(),
                },
            ),
            Route::UserManagement => view::view_user_management(
                &self.users,
                view::UserAdminOutcomes {
                    users: slots.users.get(),
                    create: slots.create_user.get(),
                    status: slots.update_user_status.get(),
                    role: slots.update_user_role.get(),
                    delete: slots.delete_user.get(),
                    reset: slots.reset_password.get(),
                },
            ),
            Route::MassEmail => view::view_mass_email(
                &self.broadcast,
                slots.users.get(),
                slots.broadcast.get(),
            ),
            Route::Login | Route::Register => unreachable_screen(),
        };

        let mut main_content = row![];
        if self.drawer_visible {
            main_content = main_content.push(view::view_drawer(
                route,
                self.mailbox,
                session.as_ref().is_some_and(Session::is_admin),
            ));
        }
        main_content = main_content.push(screen);

        column![header, main_content.height(Length::Fill)]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Subscribe to keyboard events for shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(key, modifiers).unwrap_or(Message::Ignored)
            } else {
                Message::Ignored
            }
        })
    }
}

/// Public screens are rendered before the signed-in shell is built.
fn unreachable_screen() -> Element<'static, Message> {
    iced::widget::Space::new().into()
}

/// Publishes `Pending` to the slot an operation reports into.
fn mark_pending(slots: &Slots, op: Operation) {
    match op {
        Operation::Login => slots.login.publish(Outcome::Pending),
        Operation::Register => slots.register.publish(Outcome::Pending),
        Operation::Logout => slots.logout.publish(Outcome::Pending),
        Operation::Profile => slots.profile.publish(Outcome::Pending),
        Operation::UpdateProfile => slots.update_profile.publish(Outcome::Pending),
        Operation::ChangePassword => slots.change_password.publish(Outcome::Pending),
        Operation::Mailbox(tab) => match tab {
            MailboxTab::Inbox => slots.inbox.publish(Outcome::Pending),
            MailboxTab::Sent => slots.sent.publish(Outcome::Pending),
            MailboxTab::Drafts => slots.drafts.publish(Outcome::Pending),
        },
        Operation::Email => slots.email_detail.publish(Outcome::Pending),
        Operation::MarkRead => slots.mark_read.publish(Outcome::Pending),
        Operation::MoveToTrash => slots.move_to_folder.publish(Outcome::Pending),
        Operation::DeleteEmail => slots.delete_email.publish(Outcome::Pending),
        Operation::SendEmail => slots.send_email.publish(Outcome::Pending),
        Operation::SaveDraft => slots.save_draft.publish(Outcome::Pending),
        Operation::LoadDraft | Operation::LatestDraft { .. } => {
            slots.current_draft.publish(Outcome::Pending);
        }
        Operation::Users => slots.users.publish(Outcome::Pending),
        Operation::CreateUser => slots.create_user.publish(Outcome::Pending),
        Operation::UpdateUserStatus => slots.update_user_status.publish(Outcome::Pending),
        Operation::UpdateUserRole => slots.update_user_role.publish(Outcome::Pending),
        Operation::DeleteUser => slots.delete_user.publish(Outcome::Pending),
        Operation::ResetPassword => slots.reset_password.publish(Outcome::Pending),
        Operation::Broadcast => slots.broadcast.publish(Outcome::Pending),
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS
    let shift = modifiers.shift();

    match key {
        // Ctrl+N: Compose new message
        Key::Character(c) if ctrl && !shift && c.as_str() == "n" => {
            Some(Message::KeyPressed(KeyboardAction::ComposeNew))
        }
        // Ctrl+Enter: Send (in compose view)
        Key::Named(keyboard::key::Named::Enter) if ctrl => {
            Some(Message::KeyPressed(KeyboardAction::Send))
        }
        // Escape: Back
        Key::Named(keyboard::key::Named::Escape) => Some(Message::KeyPressed(KeyboardAction::Back)),
        // F5: Refresh
        Key::Named(keyboard::key::Named::F5) => Some(Message::KeyPressed(KeyboardAction::Refresh)),
        // Ctrl+B: Toggle drawer
        Key::Character(c) if ctrl && !shift && c.as_str() == "b" => {
            Some(Message::KeyPressed(KeyboardAction::ToggleDrawer))
        }
        _ => None,
    }
}

/// Load the client configuration. Environment overrides are applied by
/// [`ClientConfig::load`].
async fn load_config() -> Result<ClientConfig, String> {
    ClientConfig::load().await.map_err(|e| e.to_string())
}

fn settings_path() -> std::path::PathBuf {
    ClientConfig::config_dir().join("settings.json")
}

/// Load application settings from file.
async fn load_settings() -> Result<AppSettings, String> {
    read_settings(&settings_path())
        .await
        .map_err(|e| format!("{e:#}"))
}

async fn read_settings(path: &std::path::Path) -> anyhow::Result<AppSettings> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Ok(AppSettings::default());
    }
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

/// Save application settings to file.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    write_settings(&settings_path(), settings)
        .await
        .map_err(|e| format!("{e:#}"))
}

async fn write_settings(path: &std::path::Path, settings: AppSettings) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("creating {}", dir.display()))?;
    }
    let contents = serde_json::to_string_pretty(&settings)?;
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    info!("Settings saved to {:?}", path);
    Ok(())
}
