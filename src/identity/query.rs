//! Identity Query
//!
//! The "who am I" lookup behind the dashboard. A query is keyed by a fixed
//! token and moves from `Loading` to either `Ready` or `Failed`; invalidating
//! it starts over from `Loading`.

use async_trait::async_trait;
use std::rc::Rc;

use crate::error::{DashboardError, DashboardResult};
use crate::identity::profile::UserProfile;

/// Query key of the identity lookup, also the API path it resolves against
pub const IDENTITY_QUERY_KEY: &str = "/api/auth/me";

/// Status of an asynchronous query
#[derive(Debug, Clone, PartialEq)]
pub enum QueryStatus<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> QueryStatus<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Source of the current identity.
///
/// `Ok(None)` means the lookup succeeded and nobody is signed in.
#[async_trait(?Send)]
pub trait IdentityFetcher {
    fn key(&self) -> &'static str {
        IDENTITY_QUERY_KEY
    }

    async fn fetch(&self) -> DashboardResult<Option<UserProfile>>;
}

#[async_trait(?Send)]
impl<F: IdentityFetcher + ?Sized> IdentityFetcher for Rc<F> {
    fn key(&self) -> &'static str {
        (**self).key()
    }

    async fn fetch(&self) -> DashboardResult<Option<UserProfile>> {
        (**self).fetch().await
    }
}

/// Fetcher that resolves immediately to a fixed profile.
///
/// Stands in for the identity API while authentication is disabled.
#[derive(Debug, Clone)]
pub struct GuestFetcher {
    profile: UserProfile,
}

impl GuestFetcher {
    pub fn new(profile: UserProfile) -> Self {
        Self { profile }
    }
}

#[async_trait(?Send)]
impl IdentityFetcher for GuestFetcher {
    async fn fetch(&self) -> DashboardResult<Option<UserProfile>> {
        Ok(Some(self.profile.clone()))
    }
}

/// A keyed identity query and its latest status
pub struct IdentityQuery<F> {
    fetcher: F,
    status: QueryStatus<Option<UserProfile>>,
}

impl<F: IdentityFetcher> IdentityQuery<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            status: QueryStatus::Loading,
        }
    }

    pub fn key(&self) -> &'static str {
        self.fetcher.key()
    }

    pub fn status(&self) -> &QueryStatus<Option<UserProfile>> {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    /// Await the fetcher and record the outcome
    pub async fn run(&mut self) -> &QueryStatus<Option<UserProfile>> {
        tracing::debug!(key = self.key(), "Running identity query");

        let status = match self.fetcher.fetch().await {
            Ok(user) => QueryStatus::Ready(user),
            Err(e) => {
                tracing::warn!(key = self.key(), error = %e, "Identity query failed");
                let message = match e {
                    DashboardError::IdentityFetch(message) => message,
                    other => other.to_string(),
                };
                QueryStatus::Failed(message)
            }
        };

        self.status = status;
        &self.status
    }

    /// Drop the cached outcome so the next render is `Loading` again
    pub fn invalidate(&mut self) {
        self.status = QueryStatus::Loading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingFetcher;

    #[async_trait(?Send)]
    impl IdentityFetcher for FailingFetcher {
        async fn fetch(&self) -> DashboardResult<Option<UserProfile>> {
            Err(DashboardError::IdentityFetch("connection refused".into()))
        }
    }

    struct SignedOutFetcher;

    #[async_trait(?Send)]
    impl IdentityFetcher for SignedOutFetcher {
        async fn fetch(&self) -> DashboardResult<Option<UserProfile>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_guest_fetcher_resolves_to_guest() {
        let mut query = IdentityQuery::new(GuestFetcher::new(UserProfile::guest()));
        assert_eq!(query.key(), "/api/auth/me");
        assert!(query.is_loading());

        let status = query.run().await;
        assert_eq!(status, &QueryStatus::Ready(Some(UserProfile::guest())));
        assert!(!query.is_loading());
    }

    #[tokio::test]
    async fn test_failed_fetch_is_recorded() {
        let mut query = IdentityQuery::new(FailingFetcher);
        query.run().await;

        assert_eq!(query.status().error(), Some("connection refused"));
        assert!(query.status().value().is_none());
    }

    #[tokio::test]
    async fn test_signed_out_is_ready_with_none() {
        let mut query = IdentityQuery::new(SignedOutFetcher);
        query.run().await;
        assert_eq!(query.status(), &QueryStatus::Ready(None));
    }

    #[tokio::test]
    async fn test_shared_trait_object_fetcher() {
        let fetcher: Rc<dyn IdentityFetcher> = Rc::new(SignedOutFetcher);
        let mut query = IdentityQuery::new(Rc::clone(&fetcher));
        assert_eq!(query.key(), IDENTITY_QUERY_KEY);
        assert_eq!(query.run().await, &QueryStatus::Ready(None));
    }

    #[tokio::test]
    async fn test_invalidate_returns_to_loading() {
        let mut query = IdentityQuery::new(GuestFetcher::new(UserProfile::guest()));
        query.run().await;
        query.invalidate();
        assert!(query.is_loading());

        query.run().await;
        assert!(query.status().value().is_some());
    }
}
