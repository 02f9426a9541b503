//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::config::ApiConfig;
use crate::error::DashboardResult;
use crate::identity::{GuestPolicy, UserProfile};

/// The server's single active session
#[derive(Debug, Default)]
pub struct SessionStore {
    current: RwLock<Option<UserProfile>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session, replacing any previous one.
    ///
    /// Sign-in itself happens on an external login surface; this is the hook
    /// it calls into.
    pub async fn sign_in(&self, user: UserProfile) -> DashboardResult<()> {
        user.validate()?;
        tracing::info!(user_id = user.id, username = %user.username, "Session started");
        *self.current.write().await = Some(user);
        Ok(())
    }

    /// End the session, returning the user that was signed in
    pub async fn sign_out(&self) -> Option<UserProfile> {
        let previous = self.current.write().await.take();
        if let Some(user) = &previous {
            tracing::info!(user_id = user.id, "Session ended");
        }
        previous
    }

    pub async fn current(&self) -> Option<UserProfile> {
        self.current.read().await.clone()
    }
}

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Active session
    pub sessions: Arc<SessionStore>,
    /// What unauthenticated requests see
    pub policy: Arc<GuestPolicy>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(policy: GuestPolicy, config: ApiConfig) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new()),
            policy: Arc::new(policy),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn auth_enabled(&self) -> bool {
        matches!(*self.policy, GuestPolicy::RequireSignIn)
    }
}
