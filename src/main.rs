//! Bluesky to Discord feed relay
//!
//! Polls one author's Bluesky feed for original posts with media and
//! forwards everything newer than the last recorded post to a Discord
//! webhook. Runs once per invocation; scheduling is left to cron or a
//! similar external trigger.

mod adapters;
mod app;
mod config;
mod domain;
mod error;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use adapters::{BlueskyFeedClient, DiscordWebhook, FileMarkerStore};
use app::RelayService;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let feed = Arc::new(BlueskyFeedClient::new(config.api_base_url.clone()));
    let webhook = Arc::new(DiscordWebhook::new(config.webhook_url.clone()));
    let marker = Arc::new(FileMarkerStore::new(config.marker_path.clone()));

    let relay = RelayService::new(config.user_handle.clone(), feed, webhook, marker);
    let outcome = relay.run().await?;
    tracing::info!(?outcome, "Run complete");

    Ok(())
}
