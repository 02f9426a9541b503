//! # Nucleyes
//!
//! Account dashboard for the Nucleyes web application: the identity model, the
//! dashboard's render contract and control wiring, and the identity API that
//! backs it.
//!
//! ## Modules
//!
//! - [`identity`]: user profiles, guest policy, identity query and session capability
//! - [`dashboard`]: what the dashboard renders and what its controls do
//! - [`routes`]: client-side route table
//! - [`config`]: TOML/environment configuration (feature `server`)
//! - [`api`]: identity REST API with Axum (feature `server`)
//!
//! The frontend lives in the sibling `nucleyes-ui` crate and depends on this
//! crate with default features disabled.
//!
//! ## Quick Start
//!
//! ```rust
//! use nucleyes::dashboard::DashboardView;
//! use nucleyes::identity::{GuestPolicy, QueryStatus, UserProfile};
//!
//! let view = DashboardView::new(GuestPolicy::development());
//! let query = QueryStatus::Ready(Some(UserProfile::guest()));
//!
//! let state = view.render(&query, None, false);
//! assert_eq!(state.model().unwrap().display_label, "Test User");
//! ```

pub mod dashboard;
pub mod error;
pub mod identity;
pub mod routes;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;

pub use dashboard::{
    Control, ControlAction, ControlOutcome, DashboardController, DashboardModel, DashboardState,
    DashboardView, Navigator,
};
pub use error::{DashboardError, DashboardResult};
pub use identity::{
    GuestFetcher, GuestPolicy, IdentityFetcher, IdentityQuery, LocalSession, QueryStatus,
    SessionProvider, UserProfile, IDENTITY_QUERY_KEY,
};
pub use routes::Route;

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};
#[cfg(feature = "server")]
pub use config::{Config, ConfigError};
