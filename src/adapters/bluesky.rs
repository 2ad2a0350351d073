//! Bluesky public API client

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::entities::{FeedEnvelope, Post};
use crate::domain::ports::FeedSource;
use crate::error::FeedError;

/// Feed source backed by the Bluesky public XRPC API
pub struct BlueskyFeedClient {
    http: Client,
    base_url: String,
}

impl BlueskyFeedClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn feed_url(&self, handle: &str) -> String {
        format!(
            "{}/xrpc/app.bsky.feed.getAuthorFeed?filter=posts_with_media&actor={}",
            self.base_url, handle
        )
    }
}

#[async_trait]
impl FeedSource for BlueskyFeedClient {
    async fn fetch_author_feed(&self, handle: &str) -> Result<Vec<Post>, FeedError> {
        let response = self.http.get(self.feed_url(handle)).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: FeedEnvelope = response
            .json()
            .await
            .map_err(|e| FeedError::Deserialization(e.to_string()))?;

        Ok(envelope.into_posts())
    }
}
