//! HTTP API Client
//!
//! Functions for communicating with the Nucleyes identity API.

use gloo_net::http::{Request, Response};
use web_sys::RequestCredentials;

use nucleyes::identity::{UserProfile, IDENTITY_QUERY_KEY};

use crate::config::UiConfig;

const LOGOUT_PATH: &str = "/api/auth/logout";

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Fetch the signed-in user. `Ok(None)` when the API answers 401.
pub async fn fetch_current_user(config: &UiConfig) -> Result<Option<UserProfile>, String> {
    let response = Request::get(&config.url(IDENTITY_QUERY_KEY))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status() == 401 {
        return Ok(None);
    }

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map(Some)
        .map_err(|e| format!("Parse error: {}", e))
}

/// End the server-side session
pub async fn logout(config: &UiConfig) -> Result<(), String> {
    let response = Request::post(&config.url(LOGOUT_PATH))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    response
        .json::<ApiErrorResponse>()
        .await
        .map(|body| body.error.message)
        .unwrap_or_else(|_| format!("HTTP {}", status))
}
