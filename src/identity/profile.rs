//! User Profile
//!
//! The account record rendered by the dashboard and served by the identity API,
//! plus the guest policy that decides what to show when nobody is signed in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// A user account as seen by the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    /// Unique display handle
    pub username: String,
    pub email: String,
    /// Human display name, falls back to `username` when absent
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    /// Linked Google account, if any
    #[serde(default)]
    pub google_id: Option<String>,
    #[serde(default)]
    pub password_changed_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Create a profile with only the required fields set
    pub fn new(id: i64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            name: None,
            email_verified: false,
            google_id: None,
            password_changed_at: None,
        }
    }

    /// The development guest account used while authentication is disabled
    pub fn guest() -> Self {
        Self::new(1, "testuser", "test@example.com")
            .name("Test User")
            .verified(true)
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.email_verified = verified;
        self
    }

    pub fn google_id(mut self, google_id: impl Into<String>) -> Self {
        self.google_id = Some(google_id.into());
        self
    }

    pub fn password_changed_at(mut self, at: DateTime<Utc>) -> Self {
        self.password_changed_at = Some(at);
        self
    }

    /// Label shown in the greeting and the account card.
    ///
    /// An empty or whitespace-only name counts as absent.
    pub fn display_label(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }

    pub fn is_google_linked(&self) -> bool {
        self.google_id.is_some()
    }

    /// Check the invariants the dashboard relies on
    pub fn validate(&self) -> DashboardResult<()> {
        if self.username.trim().is_empty() {
            return Err(DashboardError::InvalidProfile(format!(
                "user {} has an empty username",
                self.id
            )));
        }
        if self.email.trim().is_empty() {
            return Err(DashboardError::InvalidProfile(format!(
                "user {} has an empty email",
                self.id
            )));
        }
        Ok(())
    }
}

/// What to render when the session has no user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuestPolicy {
    /// Render this profile in place of the missing user
    Fallback(UserProfile),
    /// Treat a missing user as signed out
    RequireSignIn,
}

impl GuestPolicy {
    /// Build a fallback policy, rejecting profiles that break the label invariant
    pub fn fallback(profile: UserProfile) -> DashboardResult<Self> {
        profile.validate()?;
        Ok(Self::Fallback(profile))
    }

    /// Fallback to [`UserProfile::guest`], the behavior while authentication is disabled
    pub fn development() -> Self {
        Self::Fallback(UserProfile::guest())
    }

    /// Policy matching an auth switch: enabled auth never falls back
    pub fn for_auth(auth_enabled: bool, guest: UserProfile) -> DashboardResult<Self> {
        if auth_enabled {
            Ok(Self::RequireSignIn)
        } else {
            Self::fallback(guest)
        }
    }

    pub fn guest(&self) -> Option<&UserProfile> {
        match self {
            Self::Fallback(profile) => Some(profile),
            Self::RequireSignIn => None,
        }
    }

    /// `current ?? fallback`
    pub fn resolve<'a>(&'a self, current: Option<&'a UserProfile>) -> Option<&'a UserProfile> {
        current.or_else(|| self.guest())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_prefers_name() {
        let user = UserProfile::new(7, "ada", "ada@example.com").name("Ada Lovelace");
        assert_eq!(user.display_label(), "Ada Lovelace");
    }

    #[test]
    fn test_display_label_falls_back_to_username() {
        let user = UserProfile::new(7, "ada", "ada@example.com");
        assert_eq!(user.display_label(), "ada");

        let blank = UserProfile::new(7, "ada", "ada@example.com").name("  ");
        assert_eq!(blank.display_label(), "ada");
    }

    #[test]
    fn test_guest_profile() {
        let guest = UserProfile::guest();
        assert_eq!(guest.id, 1);
        assert_eq!(guest.username, "testuser");
        assert_eq!(guest.email, "test@example.com");
        assert_eq!(guest.display_label(), "Test User");
        assert!(guest.email_verified);
        assert!(!guest.is_google_linked());
    }

    #[test]
    fn test_validate_rejects_empty_username() {
        let user = UserProfile::new(3, "", "x@example.com");
        assert!(matches!(user.validate(), Err(DashboardError::InvalidProfile(_))));
        assert!(GuestPolicy::fallback(user).is_err());
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = r#"{"id":1,"username":"testuser","email":"test@example.com",
            "name":"Test User","emailVerified":true,"googleId":null}"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user, UserProfile::guest());

        let value = serde_json::to_value(UserProfile::guest().google_id("g-42")).unwrap();
        assert_eq!(value["emailVerified"], true);
        assert_eq!(value["googleId"], "g-42");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"id":9,"username":"bob","email":"bob@example.com"}"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, None);
        assert!(!user.email_verified);
        assert_eq!(user.password_changed_at, None);
    }

    #[test]
    fn test_policy_resolution() {
        let current = UserProfile::new(2, "carol", "carol@example.com");

        let dev = GuestPolicy::development();
        assert_eq!(dev.resolve(Some(&current)), Some(&current));
        assert_eq!(dev.resolve(None).map(|u| u.username.as_str()), Some("testuser"));

        let strict = GuestPolicy::RequireSignIn;
        assert_eq!(strict.resolve(None), None);
        assert_eq!(strict.resolve(Some(&current)), Some(&current));
    }

    #[test]
    fn test_policy_for_auth() {
        let policy = GuestPolicy::for_auth(true, UserProfile::guest()).unwrap();
        assert_eq!(policy, GuestPolicy::RequireSignIn);

        let policy = GuestPolicy::for_auth(false, UserProfile::guest()).unwrap();
        assert_eq!(policy, GuestPolicy::development());
    }
}
