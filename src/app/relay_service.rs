//! Relay pipeline
//!
//! One pass per invocation: fetch the author feed, keep the author's
//! original posts, compare against the persisted last-seen marker, record
//! the newest post, and deliver everything newer than the previous marker
//! to the webhook, oldest-first.

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::ports::{FeedSource, MarkerStore, WebhookSink};
use crate::error::RelayError;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The feed contained no original posts by the configured author
    NoOwnerPosts,
    /// No marker existed yet; the newest post was recorded without relaying
    BaselineEstablished,
    /// The newest post is not newer than the marker
    NoNewPosts,
    /// The marker advanced and deliveries were attempted
    Relayed { attempted: usize, delivered: usize },
}

/// Single-pass relay over a feed source, a webhook sink and a marker store
pub struct RelayService<F, W, M>
where
    F: FeedSource,
    W: WebhookSink,
    M: MarkerStore,
{
    handle: String,
    feed: Arc<F>,
    webhook: Arc<W>,
    marker: Arc<M>,
}

impl<F, W, M> RelayService<F, W, M>
where
    F: FeedSource,
    W: WebhookSink,
    M: MarkerStore,
{
    pub fn new(handle: String, feed: Arc<F>, webhook: Arc<W>, marker: Arc<M>) -> Self {
        Self {
            handle,
            feed,
            webhook,
            marker,
        }
    }

    /// Execute one relay pass. Feed and marker errors abort the run;
    /// webhook failures are logged per post and the loop continues.
    pub async fn run(&self) -> Result<Outcome, RelayError> {
        let feed = self.feed.fetch_author_feed(&self.handle).await?;

        let mut owner_feed: Vec<Post> = feed
            .into_iter()
            .filter(|post| post.is_original_by(&self.handle))
            .collect();

        if owner_feed.is_empty() {
            tracing::info!("No posts found for the owner");
            return Ok(Outcome::NoOwnerPosts);
        }

        // Upstream returns newest-first in practice, but that ordering is
        // not contractual. Sort before taking the newest.
        owner_feed.sort_by(|a, b| b.indexed_at.cmp(&a.indexed_at));

        let newest = owner_feed[0].clone();

        let previous = match self.marker.load().await? {
            Some(previous) => previous,
            None => {
                tracing::info!(
                    indexed_at = %newest.indexed_at,
                    "No last indexed post, recording current post as baseline"
                );
                self.marker.store(&newest).await?;
                return Ok(Outcome::BaselineEstablished);
            }
        };

        if newest.indexed_at <= previous.indexed_at {
            tracing::info!("No new post since last check");
            return Ok(Outcome::NoNewPosts);
        }

        // The marker moves forward before any delivery. A crash mid-relay
        // drops the remaining posts instead of reposting them next run.
        self.marker.store(&newest).await?;

        let new_posts: Vec<&Post> = owner_feed
            .iter()
            .filter(|post| post.indexed_at > previous.indexed_at)
            .rev()
            .collect();

        let attempted = new_posts.len();
        let mut delivered = 0;

        for post in new_posts {
            let url = post.web_url(&self.handle);
            tracing::info!(%url, "Submitting post to webhook");

            match self.webhook.deliver(&post.message_content(&self.handle)).await {
                Ok(()) => {
                    delivered += 1;
                    tracing::info!(%url, "Delivered");
                }
                Err(e) => {
                    tracing::error!(%url, error = %e, "Failed to deliver post");
                }
            }
        }

        Ok(Outcome::Relayed {
            attempted,
            delivered,
        })
    }
}
