use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE: &str = "https://public.api.bsky.app";
pub const DEFAULT_MARKER_FILE: &str = "newest_post";

#[derive(Clone)]
pub struct Config {
    /// Discord webhook the relay delivers to
    pub webhook_url: String,
    /// Bluesky handle whose original posts are relayed
    pub user_handle: String,
    /// Base URL of the Bluesky public API
    pub api_base_url: String,
    /// Path of the last-seen marker file
    pub marker_path: PathBuf,
}

impl Config {
    /// Load configuration from the environment. `DISCORD_WEBHOOK_URL` and
    /// `USER_HANDLE` are required; an empty value counts as missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            webhook_url: required("DISCORD_WEBHOOK_URL")?,
            user_handle: required("USER_HANDLE")?,
            api_base_url: env::var("BSKY_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            marker_path: env::var("NEWEST_POST_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_MARKER_FILE)),
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}
