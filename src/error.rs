//! Dashboard Error Types
//!
//! Failures the dashboard can render or report. The variants carry strings
//! rather than source errors so a failed state can be cloned into the view.

use thiserror::Error;

/// Errors surfaced by the identity, session and dashboard layers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// The identity query failed to resolve
    #[error("Failed to load identity: {0}")]
    IdentityFetch(String),

    /// The session collaborator could not complete a logout
    #[error("Logout failed: {0}")]
    Logout(String),

    /// No user is signed in and the guest policy does not allow a fallback
    #[error("Not signed in")]
    SignedOut,

    /// A profile violated its invariants
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// The control exists on the page but has no behavior wired yet
    #[error("{0} is not available yet")]
    NotImplemented(&'static str),
}

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
