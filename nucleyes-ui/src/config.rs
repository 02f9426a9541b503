//! Frontend Configuration
//!
//! Settings read from local storage, falling back to defaults.

use nucleyes::identity::GuestPolicy;

/// Default identity API origin
pub const DEFAULT_API_BASE: &str = "http://localhost:8085";

const API_URL_KEY: &str = "nucleyes_api_url";
const AUTH_ENABLED_KEY: &str = "nucleyes_auth_enabled";

/// Frontend settings provided to all components
#[derive(Clone, Debug, PartialEq)]
pub struct UiConfig {
    /// Origin of the identity API, without trailing slash
    pub api_base: String,
    /// When false the dashboard never calls the identity API and shows the guest
    pub auth_enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            auth_enabled: false,
        }
    }
}

impl UiConfig {
    /// Read settings from local storage
    pub fn load() -> Self {
        Self::from_values(read_item(API_URL_KEY), read_item(AUTH_ENABLED_KEY))
    }

    fn from_values(api_url: Option<String>, auth_enabled: Option<String>) -> Self {
        let api_base = api_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let auth_enabled = auth_enabled
            .map(|value| {
                matches!(
                    value.trim().to_lowercase().as_str(),
                    "true" | "1" | "yes" | "on"
                )
            })
            .unwrap_or(false);

        Self {
            api_base,
            auth_enabled,
        }
    }

    /// Absolute URL of an API path such as `/api/auth/me`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    pub fn guest_policy(&self) -> GuestPolicy {
        if self.auth_enabled {
            GuestPolicy::RequireSignIn
        } else {
            GuestPolicy::development()
        }
    }
}

fn read_item(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}
