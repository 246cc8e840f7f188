//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors raised while reading startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is present but its value cannot be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// A variable required by another setting is absent.
    #[error("missing {var} (required when {required_by} is set)")]
    Missing { var: &'static str, required_by: &'static str },
}

/// Connection settings for a hosted auth + REST backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// `None` selects the in-process memory backend.
    pub backend: Option<BackendConfig>,
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: hosted backend base URL; memory backend when absent
    /// - `BACKEND_ANON_KEY`: required when `BACKEND_URL` is set
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    /// - `COOKIE_SECURE`: bool words; inferred from an `https://` `PUBLIC_URL`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `PORT` is not a port number or the
    /// backend URL is set without its key.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match non_empty_var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let backend = match non_empty_var("BACKEND_URL") {
            Some(url) => {
                let anon_key = non_empty_var("BACKEND_ANON_KEY")
                    .ok_or(ConfigError::Missing { var: "BACKEND_ANON_KEY", required_by: "BACKEND_URL" })?;
                Some(BackendConfig {
                    url: url.trim_end_matches('/').to_owned(),
                    anon_key,
                    connect_timeout_secs: env_parse_u64(
                        "BACKEND_CONNECT_TIMEOUT_SECS",
                        DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
                    ),
                })
            }
            None => None,
        };

        let cookie_secure = env_bool("COOKIE_SECURE").unwrap_or_else(|| {
            std::env::var("PUBLIC_URL")
                .map(|url| url.starts_with("https://"))
                .unwrap_or(false)
        });

        Ok(Self { port, backend, cookie_secure })
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
