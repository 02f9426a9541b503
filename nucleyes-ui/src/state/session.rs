//! Session State
//!
//! Reactive session signals and the HTTP-backed session collaborator.

use async_trait::async_trait;
use leptos::*;

use nucleyes::error::{DashboardError, DashboardResult};
use nucleyes::identity::{SessionProvider, UserProfile};

use crate::api;
use crate::config::UiConfig;

/// Session state provided to all components
#[derive(Clone, Copy)]
pub struct SessionState {
    /// Signed-in user, `None` before the identity query resolves or after logout
    pub user: RwSignal<Option<UserProfile>>,
    pub logout_pending: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide session state to the component tree
pub fn provide_session_state() {
    let state = SessionState {
        user: create_rw_signal(None),
        logout_pending: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl SessionState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

/// Session collaborator backed by [`SessionState`] and the identity API
#[derive(Clone)]
pub struct HttpSession {
    state: SessionState,
    config: UiConfig,
}

impl HttpSession {
    pub fn new(state: SessionState, config: UiConfig) -> Self {
        Self { state, config }
    }
}

#[async_trait(?Send)]
impl SessionProvider for HttpSession {
    fn current_user(&self) -> Option<UserProfile> {
        self.state.user.get_untracked()
    }

    fn is_logout_pending(&self) -> bool {
        self.state.logout_pending.get_untracked()
    }

    async fn logout(&self) -> DashboardResult<()> {
        self.state.logout_pending.set(true);

        // Without auth there is no server-side session to end
        let result = if self.config.auth_enabled {
            api::logout(&self.config)
                .await
                .map_err(DashboardError::Logout)
        } else {
            Ok(())
        };

        if result.is_ok() {
            self.state.user.set(None);
        }
        self.state.logout_pending.set(false);
        result
    }
}
