//! Data Transfer Objects
//!
//! Response bodies of the identity API that are not plain profiles.

use serde::{Deserialize, Serialize};

/// Full health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub auth_enabled: bool,
    pub session_active: bool,
    pub uptime_seconds: u64,
    pub version: String,
}
