use std::{str::FromStr, time::Duration};

/// Signing secret used when `SESSION_SECRET` is not set. Development only.
pub const DEV_SESSION_SECRET: &str = "dev-insecure-session-secret";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-flash-latest";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: String,
    pub session_secret: String,
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub api_timeout: Duration,
    pub max_upload_bytes: usize,
    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            bind_address: get("BIND_ADDRESS").unwrap_or_else(|| "127.0.0.1:3000".to_string()),
            session_secret: get("SESSION_SECRET").unwrap_or_else(|| DEV_SESSION_SECRET.to_string()),
            google_api_key: get("GOOGLE_API_KEY"),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base: get("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_timeout: Duration::from_secs(parse_or("API_TIMEOUT_SECS", get("API_TIMEOUT_SECS"), 60)),
            max_upload_bytes: parse_or("MAX_UPLOAD_BYTES", get("MAX_UPLOAD_BYTES"), 10 * 1024 * 1024),
            secure_cookies: parse_or("SECURE_COOKIES", get("SECURE_COOKIES"), false),
        }
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.session_secret == DEV_SESSION_SECRET
    }
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, %default, "invalid config value, using default");
            default
        }),
    }
}
