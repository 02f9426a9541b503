//! Dashboard Controls
//!
//! Every button on the dashboard and what activating it does.

use crate::routes::Route;

/// A button on the dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Header link to the profile page
    Profile,
    /// Account card footer link to the profile page
    EditProfile,
    Logout,
    ChangePassword,
    EnableTwoFactor,
}

/// Effect of activating a control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Navigate(Route),
    Logout,
    /// Placeholder with no behavior wired; carries the feature name
    NotImplemented(&'static str),
}

impl Control {
    pub fn action(self) -> ControlAction {
        match self {
            Control::Profile | Control::EditProfile => ControlAction::Navigate(Route::Profile),
            Control::Logout => ControlAction::Logout,
            Control::ChangePassword => ControlAction::NotImplemented("Password change"),
            Control::EnableTwoFactor => ControlAction::NotImplemented("Two-factor authentication"),
        }
    }

    /// Idle label. The logout label also depends on [`LogoutControl`].
    pub fn label(self) -> &'static str {
        match self {
            Control::Profile => "Profile",
            Control::EditProfile => "Edit Profile",
            Control::Logout => LogoutControl::IDLE_LABEL,
            Control::ChangePassword => "Change Password",
            Control::EnableTwoFactor => "Enable 2FA",
        }
    }

    pub fn is_implemented(self) -> bool {
        !matches!(self.action(), ControlAction::NotImplemented(_))
    }

    /// Whether the control accepts clicks given the current logout state
    pub fn is_enabled(self, logout_pending: bool) -> bool {
        match self {
            Control::Logout => !logout_pending,
            other => other.is_implemented(),
        }
    }
}

/// State of the logout button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogoutControl {
    pub pending: bool,
}

impl LogoutControl {
    pub const IDLE_LABEL: &'static str = "Log out";
    pub const PENDING_LABEL: &'static str = "Logging out...";

    pub fn new(pending: bool) -> Self {
        Self { pending }
    }

    pub fn label(&self) -> &'static str {
        if self.pending {
            Self::PENDING_LABEL
        } else {
            Self::IDLE_LABEL
        }
    }

    pub fn disabled(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_controls_target_profile() {
        assert_eq!(Control::Profile.action(), ControlAction::Navigate(Route::Profile));
        assert_eq!(Control::EditProfile.action(), ControlAction::Navigate(Route::Profile));
    }

    #[test]
    fn test_placeholders_are_not_implemented() {
        for control in [Control::ChangePassword, Control::EnableTwoFactor] {
            assert!(!control.is_implemented());
            assert!(!control.is_enabled(false));
        }
        assert_eq!(
            Control::EnableTwoFactor.action(),
            ControlAction::NotImplemented("Two-factor authentication")
        );
    }

    #[test]
    fn test_only_logout_depends_on_pending() {
        assert!(Control::Logout.is_enabled(false));
        assert!(!Control::Logout.is_enabled(true));
        assert!(Control::Profile.is_enabled(true));
        assert!(Control::EditProfile.is_enabled(true));
    }

    #[test]
    fn test_logout_labels() {
        assert_eq!(LogoutControl::new(false).label(), "Log out");
        assert!(!LogoutControl::new(false).disabled());
        assert_eq!(LogoutControl::new(true).label(), "Logging out...");
        assert!(LogoutControl::new(true).disabled());
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = [
            Control::Profile,
            Control::EditProfile,
            Control::Logout,
            Control::ChangePassword,
            Control::EnableTwoFactor,
        ]
        .iter()
        .map(|c| c.label())
        .collect();
        assert_eq!(
            labels,
            ["Profile", "Edit Profile", "Log out", "Change Password", "Enable 2FA"]
        );
    }
}
