//! Dashboard View
//!
//! Turns the identity query status, the session user and the logout flag into
//! the thing to render. Rendering is a pure function of those inputs; the
//! frontend only maps the resulting [`DashboardState`] onto markup.

use chrono::{DateTime, Utc};

use crate::dashboard::controls::{Control, LogoutControl};
use crate::error::DashboardError;
use crate::identity::{GuestPolicy, QueryStatus, UserProfile};

/// What the dashboard page shows
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    /// Spinner only
    Loading,
    Ready(DashboardModel),
    Error(DashboardError),
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn model(&self) -> Option<&DashboardModel> {
        match self {
            Self::Ready(model) => Some(model),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&DashboardError> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }
}

/// Visual tone of a status value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    pub fn text_class(self) -> &'static str {
        match self {
            Tone::Success => "text-green-600",
            Tone::Error => "text-red-600",
        }
    }
}

/// The "Email Verified" row of the account card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifiedBadge {
    pub verified: bool,
}

impl VerifiedBadge {
    pub fn label(&self) -> &'static str {
        if self.verified {
            "Yes"
        } else {
            "No"
        }
    }

    pub fn tone(&self) -> Tone {
        if self.verified {
            Tone::Success
        } else {
            Tone::Error
        }
    }
}

/// Contents of the security card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityOverview {
    pub password_changed_at: Option<DateTime<Utc>>,
    pub google_linked: bool,
}

impl SecurityOverview {
    fn for_user(user: &UserProfile) -> Self {
        Self {
            password_changed_at: user.password_changed_at,
            google_linked: user.is_google_linked(),
        }
    }

    /// "Your password was last changed ..." sentence
    pub fn password_summary(&self) -> String {
        let when = self
            .password_changed_at
            .map(|at| format!("on {}", at.format("%b %d, %Y")))
            .unwrap_or_else(|| "never".to_string());
        format!("Your password was last changed {}.", when)
    }

    pub fn two_factor_summary(&self) -> &'static str {
        "Add an extra layer of security to your account."
    }
}

/// Everything the ready page displays
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub user: UserProfile,
    pub display_label: String,
    /// The user came from the guest policy, not the session
    pub is_guest: bool,
    pub email_verified: VerifiedBadge,
    pub logout: LogoutControl,
    pub security: SecurityOverview,
}

impl DashboardModel {
    pub fn greeting(&self) -> String {
        format!("Welcome back, {}", self.display_label)
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        control.is_enabled(self.logout.pending)
    }
}

/// The dashboard render contract with its injected guest policy
#[derive(Debug, Clone)]
pub struct DashboardView {
    policy: GuestPolicy,
}

impl DashboardView {
    pub fn new(policy: GuestPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &GuestPolicy {
        &self.policy
    }

    /// Decide what to render.
    ///
    /// Loading wins over everything else. A failed query renders an error even
    /// when a session user is present.
    pub fn render<T>(
        &self,
        query: &QueryStatus<T>,
        current: Option<&UserProfile>,
        logout_pending: bool,
    ) -> DashboardState {
        match query {
            QueryStatus::Loading => return DashboardState::Loading,
            QueryStatus::Failed(message) => {
                return DashboardState::Error(DashboardError::IdentityFetch(message.clone()))
            }
            QueryStatus::Ready(_) => {}
        }

        let Some(user) = self.policy.resolve(current) else {
            return DashboardState::Error(DashboardError::SignedOut);
        };

        if let Err(e) = user.validate() {
            tracing::warn!(user_id = user.id, error = %e, "Refusing to render profile");
            return DashboardState::Error(e);
        }

        DashboardState::Ready(DashboardModel {
            display_label: user.display_label().to_string(),
            is_guest: current.is_none(),
            email_verified: VerifiedBadge {
                verified: user.email_verified,
            },
            logout: LogoutControl::new(logout_pending),
            security: SecurityOverview::for_user(user),
            user: user.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ready() -> QueryStatus<Option<UserProfile>> {
        QueryStatus::Ready(Some(UserProfile::guest()))
    }

    fn dev_view() -> DashboardView {
        DashboardView::new(GuestPolicy::development())
    }

    #[test]
    fn test_loading_wins_regardless_of_user() {
        let view = dev_view();
        let user = UserProfile::new(5, "eve", "eve@example.com");
        let loading = QueryStatus::<Option<UserProfile>>::Loading;

        assert_eq!(view.render(&loading, None, false), DashboardState::Loading);
        assert_eq!(view.render(&loading, Some(&user), true), DashboardState::Loading);

        let strict = DashboardView::new(GuestPolicy::RequireSignIn);
        assert!(strict.render(&loading, None, false).is_loading());
    }

    #[test]
    fn test_absent_user_uses_guest() {
        let state = dev_view().render(&ready(), None, false);
        let model = state.model().unwrap();

        assert_eq!(model.user.username, "testuser");
        assert_eq!(model.user.email, "test@example.com");
        assert_eq!(model.display_label, "Test User");
        assert_eq!(model.greeting(), "Welcome back, Test User");
        assert!(model.is_guest);
    }

    #[test]
    fn test_label_is_username_without_name() {
        let user = UserProfile::new(5, "eve", "eve@example.com");
        let state = dev_view().render(&ready(), Some(&user), false);
        let model = state.model().unwrap();

        assert_eq!(model.display_label, "eve");
        assert!(!model.is_guest);
    }

    #[test]
    fn test_label_is_name_when_set() {
        let user = UserProfile::new(5, "eve", "eve@example.com").name("Eve Online");
        let state = dev_view().render(&ready(), Some(&user), false);
        assert_eq!(state.model().unwrap().display_label, "Eve Online");
    }

    #[test]
    fn test_verified_badge() {
        let verified = UserProfile::new(5, "eve", "eve@example.com").verified(true);
        let state = dev_view().render(&ready(), Some(&verified), false);
        let badge = state.model().unwrap().email_verified;
        assert_eq!(badge.label(), "Yes");
        assert_eq!(badge.tone(), Tone::Success);
        assert_eq!(badge.tone().text_class(), "text-green-600");

        let unverified = UserProfile::new(5, "eve", "eve@example.com");
        let state = dev_view().render(&ready(), Some(&unverified), false);
        let badge = state.model().unwrap().email_verified;
        assert_eq!(badge.label(), "No");
        assert_eq!(badge.tone(), Tone::Error);
    }

    #[test]
    fn test_logout_pending_disables_control() {
        let state = dev_view().render(&ready(), None, true);
        let model = state.model().unwrap();

        assert!(model.logout.disabled());
        assert_eq!(model.logout.label(), "Logging out...");
        assert!(!model.is_enabled(Control::Logout));
        assert!(model.is_enabled(Control::Profile));
    }

    #[test]
    fn test_placeholders_disabled_in_model() {
        let state = dev_view().render(&ready(), None, false);
        let model = state.model().unwrap();
        assert!(!model.is_enabled(Control::ChangePassword));
        assert!(!model.is_enabled(Control::EnableTwoFactor));
    }

    #[test]
    fn test_failed_query_renders_error() {
        let failed = QueryStatus::<Option<UserProfile>>::Failed("503".into());
        let user = UserProfile::guest();
        let state = dev_view().render(&failed, Some(&user), false);
        assert_eq!(
            state.error(),
            Some(&DashboardError::IdentityFetch("503".into()))
        );
    }

    #[test]
    fn test_require_sign_in_without_user() {
        let view = DashboardView::new(GuestPolicy::RequireSignIn);
        let state = view.render(&QueryStatus::Ready(None::<UserProfile>), None, false);
        assert_eq!(state.error(), Some(&DashboardError::SignedOut));
    }

    #[test]
    fn test_invalid_session_user_renders_error() {
        let broken = UserProfile::new(8, "", "ghost@example.com");
        let state = dev_view().render(&ready(), Some(&broken), false);
        assert!(matches!(state.error(), Some(DashboardError::InvalidProfile(_))));
    }

    #[test]
    fn test_password_summary() {
        let state = dev_view().render(&ready(), None, false);
        assert_eq!(
            state.model().unwrap().security.password_summary(),
            "Your password was last changed never."
        );

        let changed = UserProfile::guest()
            .password_changed_at(Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap());
        let state = dev_view().render(&ready(), Some(&changed), false);
        assert_eq!(
            state.model().unwrap().security.password_summary(),
            "Your password was last changed on Mar 09, 2024."
        );
    }
}
