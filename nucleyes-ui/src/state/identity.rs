//! Identity Query
//!
//! Runs the identity query as a local resource keyed by the query key.

use async_trait::async_trait;
use leptos::*;
use std::rc::Rc;

use nucleyes::error::{DashboardError, DashboardResult};
use nucleyes::identity::{
    GuestFetcher, IdentityFetcher, IdentityQuery, QueryStatus, UserProfile, IDENTITY_QUERY_KEY,
};

use super::session::SessionState;
use crate::api;
use crate::config::UiConfig;

/// Resolved status of the identity query
pub type IdentityStatus = QueryStatus<Option<UserProfile>>;

/// Fetcher that asks the identity API
pub struct HttpFetcher {
    config: UiConfig,
}

#[async_trait(?Send)]
impl IdentityFetcher for HttpFetcher {
    async fn fetch(&self) -> DashboardResult<Option<UserProfile>> {
        api::fetch_current_user(&self.config)
            .await
            .map_err(DashboardError::IdentityFetch)
    }
}

fn identity_fetcher(config: &UiConfig) -> Rc<dyn IdentityFetcher> {
    if config.auth_enabled {
        Rc::new(HttpFetcher {
            config: config.clone(),
        })
    } else {
        Rc::new(GuestFetcher::new(UserProfile::guest()))
    }
}

/// Start the identity query.
///
/// With authentication enabled the resolved user becomes the session user
/// before the resource settles, so the first ready render already sees it.
pub fn use_identity_query(
    config: &UiConfig,
    session: SessionState,
) -> Resource<&'static str, IdentityStatus> {
    let fetcher = identity_fetcher(config);
    let seeds_session = config.auth_enabled;

    create_local_resource(
        || IDENTITY_QUERY_KEY,
        move |_key| {
            let fetcher = Rc::clone(&fetcher);
            async move {
                let mut query = IdentityQuery::new(fetcher);
                let status = query.run().await.clone();

                match &status {
                    QueryStatus::Ready(user) if seeds_session => session.user.set(user.clone()),
                    QueryStatus::Failed(message) => {
                        web_sys::console::error_1(
                            &format!("Failed to load identity: {}", message).into(),
                        );
                    }
                    _ => {}
                }

                status
            }
        },
    )
}

/// Current status of `resource`, `Loading` until it first resolves
pub fn identity_status(resource: Resource<&'static str, IdentityStatus>) -> IdentityStatus {
    if resource.loading().get() {
        return QueryStatus::Loading;
    }
    resource.get().unwrap_or(QueryStatus::Loading)
}
