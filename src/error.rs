//! Error types for each layer of the relay:
//! - `ConfigError`: missing or empty environment configuration
//! - `FeedError`: Bluesky feed API client errors
//! - `WebhookError`: webhook delivery errors (recovered per-post, never fatal)
//! - `MarkerError`: last-seen marker file errors

use thiserror::Error;

/// Configuration errors, raised before any network or file activity
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),
}

/// Feed API client errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Webhook delivery errors
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Webhook rejected delivery: {status} - {message}")]
    Rejected { status: u16, message: String },
}

/// Last-seen marker file errors
#[derive(Debug, Error)]
pub enum MarkerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid marker contents: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Relay pipeline errors - everything that aborts a run
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Marker error: {0}")]
    Marker(#[from] MarkerError),
}
