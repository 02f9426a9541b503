//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::DashboardResult;
use crate::identity::{GuestPolicy, UserProfile};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub identity: IdentityConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins, permissive when empty
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8085
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Identity and guest fallback configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// When false, requests without a session see the guest profile
    #[serde(default)]
    pub auth_enabled: bool,

    #[serde(default = "UserProfile::guest")]
    pub guest: UserProfile,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            auth_enabled: false,
            guest: UserProfile::guest(),
        }
    }
}

impl IdentityConfig {
    pub fn guest_policy(&self) -> DashboardResult<GuestPolicy> {
        GuestPolicy::for_auth(self.auth_enabled, self.guest.clone())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.identity.guest.validate().map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("nucleyes").join("config.toml")),
            Some(PathBuf::from("/etc/nucleyes/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("NUCLEYES_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("NUCLEYES_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        if let Ok(enabled) = std::env::var("NUCLEYES_AUTH_ENABLED") {
            match parse_flag(&enabled) {
                Some(flag) => self.identity.auth_enabled = flag,
                None => tracing::warn!(
                    "Ignoring unrecognized NUCLEYES_AUTH_ENABLED value {:?}",
                    enabled
                ),
            }
        }

        if let Ok(level) = std::env::var("NUCLEYES_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("NUCLEYES_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Nucleyes Configuration
#
# Environment variables override these settings:
# - NUCLEYES_API_HOST
# - NUCLEYES_API_PORT
# - NUCLEYES_AUTH_ENABLED
# - NUCLEYES_LOG_LEVEL
# - NUCLEYES_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8085

# Allowed CORS origins (empty allows any origin)
cors_origins = ["http://localhost:8080", "http://127.0.0.1:8080"]

[identity]
# With authentication disabled, requests without a session
# are answered with the guest profile below
auth_enabled = false

[identity.guest]
id = 1
username = "testuser"
email = "test@example.com"
name = "Test User"
emailVerified = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.addr(), "0.0.0.0:8085");
        assert!(!config.identity.auth_enabled);
        assert_eq!(config.identity.guest, UserProfile::guest());
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config(), Path::new("default.toml")).unwrap();
        assert_eq!(config.api.port, 8085);
        assert_eq!(config.identity.guest, UserProfile::guest());
        assert_eq!(
            config.identity.guest_policy().unwrap(),
            GuestPolicy::development()
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[api]
port = 9000

[identity]
auth_enabled = true

[logging]
format = "json"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "0.0.0.0");
        assert!(config.identity.auth_enabled);
        assert_eq!(
            config.identity.guest_policy().unwrap(),
            GuestPolicy::RequireSignIn
        );
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_invalid_guest_rejected() {
        let toml = r#"
[identity.guest]
id = 2
username = ""
email = "nobody@example.com"
"#;
        let err = Config::parse(toml, Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/nucleyes.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" Yes "), Some(true));
        assert_eq!(parse_flag("on"), Some(true));

        assert_eq!(parse_flag("FALSE"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("no"), Some(false));
        assert_eq!(parse_flag("off"), Some(false));

        assert_eq!(parse_flag(""), None);
        assert_eq!(parse_flag("disabled"), None);
    }

    // The only test touching NUCLEYES_* variables, so parallel tests cannot race on them
    #[test]
    fn test_env_overrides() {
        const VARS: [&str; 5] = [
            "NUCLEYES_API_HOST",
            "NUCLEYES_API_PORT",
            "NUCLEYES_AUTH_ENABLED",
            "NUCLEYES_LOG_LEVEL",
            "NUCLEYES_LOG_FORMAT",
        ];

        std::env::set_var("NUCLEYES_API_HOST", "127.0.0.1");
        std::env::set_var("NUCLEYES_API_PORT", "9100");
        std::env::set_var("NUCLEYES_AUTH_ENABLED", "yes");
        std::env::set_var("NUCLEYES_LOG_LEVEL", "debug");
        std::env::set_var("NUCLEYES_LOG_FORMAT", "json");

        let config = Config::from_env();
        assert_eq!(config.api.addr(), "127.0.0.1:9100");
        assert!(config.identity.auth_enabled);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.is_json());

        std::env::set_var("NUCLEYES_API_PORT", "not-a-port");
        std::env::set_var("NUCLEYES_AUTH_ENABLED", "no");
        let config = Config::from_env();
        assert_eq!(config.api.port, 8085);
        assert!(!config.identity.auth_enabled);

        // Unrecognized values keep the configured setting
        std::env::set_var("NUCLEYES_AUTH_ENABLED", "");
        let mut config = Config::default();
        config.identity.auth_enabled = true;
        config.apply_env_overrides();
        assert!(config.identity.auth_enabled);

        std::env::set_var("NUCLEYES_AUTH_ENABLED", "disabled");
        assert!(!Config::from_env().identity.auth_enabled);

        for var in VARS {
            std::env::remove_var(var);
        }
    }
}
