//! Screen identities and back-stack navigation.

use std::fmt;

/// A screen in the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Sign-in form.
    Login,
    /// Account registration form.
    Register,
    /// Mailbox listing (inbox, sent, drafts).
    EmailList,
    /// One email.
    EmailDetail(i64),
    /// Compose form, optionally editing a draft.
    Compose(Option<i64>),
    /// Own profile and password.
    UserProfile,
    /// Admin user list.
    UserManagement,
    /// Admin broadcast form.
    MassEmail,
}

impl Route {
    /// Whether only administrators may open this screen.
    #[must_use]
    pub const fn requires_admin(self) -> bool {
        matches!(self, Self::UserManagement | Self::MassEmail)
    }

    /// Whether this screen can be shown without a session.
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// Whether both routes show the same screen, ignoring arguments.
    #[must_use]
    pub fn same_screen(self, other: Self) -> bool {
        std::mem::discriminant(&self) == std::mem::discriminant(&other)
    }

    /// Window title for this screen.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::EmailList => "Mail",
            Self::EmailDetail(_) => "Message",
            Self::Compose(_) => "Compose",
            Self::UserProfile => "Profile",
            Self::UserManagement => "User management",
            Self::MassEmail => "Mass email",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => f.write_str("login"),
            Self::Register => f.write_str("register"),
            Self::EmailList => f.write_str("email_list"),
            Self::EmailDetail(id) => write!(f, "email_detail/{id}"),
            Self::Compose(None) => f.write_str("compose_email"),
            Self::Compose(Some(id)) => write!(f, "compose_email/{id}"),
            Self::UserProfile => f.write_str("user_profile"),
            Self::UserManagement => f.write_str("user_management"),
            Self::MassEmail => f.write_str("mass_email"),
        }
    }
}

/// Back stack of visited screens.
///
/// The stack is never empty; the last entry is the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}

impl Navigator {
    /// Start with a single screen.
    #[must_use]
    pub fn new(start: Route) -> Self {
        Self { stack: vec![start] }
    }

    /// Screen currently shown.
    #[must_use]
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Login)
    }

    /// Visited screens, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Route] {
        &self.stack
    }

    /// Whether a route with the same screen is anywhere in history.
    #[must_use]
    pub fn contains_screen(&self, route: Route) -> bool {
        self.stack.iter().any(|r| r.same_screen(route))
    }

    /// Whether [`Navigator::back`] would leave the current screen.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Push a screen. Navigating to the current route is a no-op.
    pub fn navigate(&mut self, route: Route) {
        if self.current() == route {
            return;
        }
        tracing::debug!(from = %self.current(), to = %route, "navigate");
        self.stack.push(route);
    }

    /// Pop the current screen. Returns `false` on the root screen.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.stack.pop();
        tracing::debug!(to = %self.current(), "back");
        true
    }

    /// Pop back to the most recent `pop_to` screen (and it too when
    /// `inclusive`), then push `route`. Without a matching entry nothing is
    /// popped.
    pub fn navigate_pop_up_to(&mut self, route: Route, pop_to: Route, inclusive: bool) {
        if let Some(index) = self.stack.iter().rposition(|r| r.same_screen(pop_to)) {
            let keep = if inclusive { index } else { index + 1 };
            self.stack.truncate(keep);
        }
        tracing::debug!(to = %route, pop_to = %pop_to, inclusive, "navigate (pop up to)");
        self.stack.push(route);
    }

    /// Clear all history and show `route`.
    pub fn reset_to(&mut self, route: Route) {
        tracing::debug!(to = %route, "reset navigation");
        self.stack.clear();
        self.stack.push(route);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_login() {
        let nav = Navigator::default();
        assert_eq!(nav.current(), Route::Login);
        assert_eq!(nav.history(), &[Route::Login]);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_back_never_pops_root() {
        let mut nav = Navigator::new(Route::EmailList);
        nav.navigate(Route::EmailDetail(3));
        assert!(nav.back());
        assert!(!nav.back());
        assert_eq!(nav.current(), Route::EmailList);
    }

    #[test]
    fn test_navigate_same_route_is_noop() {
        let mut nav = Navigator::new(Route::EmailList);
        nav.navigate(Route::EmailList);
        assert_eq!(nav.history().len(), 1);

        nav.navigate(Route::EmailDetail(1));
        nav.navigate(Route::EmailDetail(2));
        assert_eq!(nav.history().len(), 3);
    }

    #[test]
    fn test_login_removed_after_successful_login() {
        let mut nav = Navigator::default();
        nav.navigate_pop_up_to(Route::EmailList, Route::Login, true);
        assert_eq!(nav.history(), &[Route::EmailList]);
        assert!(!nav.contains_screen(Route::Login));
        assert!(!nav.back());
    }

    #[test]
    fn test_register_then_login_removed() {
        let mut nav = Navigator::default();
        nav.navigate(Route::Register);
        nav.navigate_pop_up_to(Route::EmailList, Route::Login, true);
        assert_eq!(nav.history(), &[Route::EmailList]);
    }

    #[test]
    fn test_pop_up_to_exclusive() {
        let mut nav = Navigator::new(Route::EmailList);
        nav.navigate(Route::EmailDetail(1));
        nav.navigate(Route::Compose(Some(1)));
        nav.navigate_pop_up_to(Route::UserProfile, Route::EmailList, false);
        assert_eq!(nav.history(), &[Route::EmailList, Route::UserProfile]);
    }

    #[test]
    fn test_pop_up_to_missing_route_only_pushes() {
        let mut nav = Navigator::new(Route::EmailList);
        nav.navigate_pop_up_to(Route::MassEmail, Route::Login, true);
        assert_eq!(nav.history(), &[Route::EmailList, Route::MassEmail]);
    }

    #[test]
    fn test_reset_to() {
        let mut nav = Navigator::new(Route::EmailList);
        nav.navigate(Route::UserManagement);
        nav.reset_to(Route::Login);
        assert_eq!(nav.history(), &[Route::Login]);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::EmailDetail(42).to_string(), "email_detail/42");
        assert_eq!(Route::Compose(None).to_string(), "compose_email");
        assert_eq!(Route::Compose(Some(7)).to_string(), "compose_email/7");
        assert!(Route::MassEmail.requires_admin());
        assert!(!Route::UserProfile.requires_admin());
        assert!(Route::Compose(None).same_screen(Route::Compose(Some(1))));
        assert!(Route::Register.is_public());
    }
}
