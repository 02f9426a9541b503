//! Session Capability
//!
//! Who is signed in and how to sign them out. The frontend backs this with
//! reactive signals and the identity API; [`LocalSession`] keeps everything
//! in memory.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::DashboardResult;
use crate::identity::profile::UserProfile;

/// Identity/session collaborator consumed by the dashboard
#[async_trait(?Send)]
pub trait SessionProvider {
    /// The signed-in user, if any
    fn current_user(&self) -> Option<UserProfile>;

    /// Whether a logout is in flight
    fn is_logout_pending(&self) -> bool;

    /// End the session
    async fn logout(&self) -> DashboardResult<()>;
}

#[async_trait(?Send)]
impl<S: SessionProvider + ?Sized> SessionProvider for Rc<S> {
    fn current_user(&self) -> Option<UserProfile> {
        (**self).current_user()
    }

    fn is_logout_pending(&self) -> bool {
        (**self).is_logout_pending()
    }

    async fn logout(&self) -> DashboardResult<()> {
        (**self).logout().await
    }
}

/// In-memory, single-threaded session
#[derive(Debug, Default)]
pub struct LocalSession {
    user: RefCell<Option<UserProfile>>,
    logout_pending: Cell<bool>,
    logouts: Cell<usize>,
}

impl LocalSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(user: UserProfile) -> Self {
        let session = Self::default();
        session.sign_in(user);
        session
    }

    pub fn sign_in(&self, user: UserProfile) {
        tracing::info!(user_id = user.id, username = %user.username, "Session started");
        self.user.replace(Some(user));
    }

    /// Mark a logout as in flight without completing it
    pub fn set_logout_pending(&self, pending: bool) {
        self.logout_pending.set(pending);
    }

    /// Number of completed logouts
    pub fn logout_count(&self) -> usize {
        self.logouts.get()
    }
}

#[async_trait(?Send)]
impl SessionProvider for LocalSession {
    fn current_user(&self) -> Option<UserProfile> {
        self.user.borrow().clone()
    }

    fn is_logout_pending(&self) -> bool {
        self.logout_pending.get()
    }

    async fn logout(&self) -> DashboardResult<()> {
        self.logout_pending.set(true);
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = user.id, "Session ended");
        }
        self.logouts.set(self.logouts.get() + 1);
        self.logout_pending.set(false);
        Ok(())
    }
}
