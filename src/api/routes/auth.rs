//! Auth Routes
//!
//! - GET /api/auth/me - Current identity
//! - POST /api/auth/logout - End the session

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::identity::UserProfile;

/// GET /api/auth/me
///
/// Returns the session user. Without a session the guest profile is returned
/// while authentication is disabled, otherwise 401.
pub async fn me(State(state): State<Arc<AppState>>) -> ApiResult<Json<UserProfile>> {
    let current = state.sessions.current().await;

    match state.policy.resolve(current.as_ref()) {
        Some(user) => {
            tracing::debug!(
                user_id = user.id,
                guest = current.is_none(),
                "Resolved identity"
            );
            Ok(Json(user.clone()))
        }
        None => Err(ApiError::Unauthorized("no active session".to_string())),
    }
}

/// POST /api/auth/logout
///
/// Idempotent; logging out without a session still succeeds.
pub async fn logout(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.sessions.sign_out().await.is_none() {
        tracing::debug!("Logout without an active session");
    }
    StatusCode::NO_CONTENT
}
