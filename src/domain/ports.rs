//! Port traits for the relay pipeline.
//!
//! These traits define the interface between the pipeline logic and the
//! outside world. Implementations are provided by adapters (HTTP clients,
//! the marker file) and by in-memory fakes in tests.

use async_trait::async_trait;

use crate::domain::entities::Post;
use crate::error::{FeedError, MarkerError, WebhookError};

/// Source of the author feed
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the first page of the author feed, filtered to posts with
    /// media, in upstream order.
    async fn fetch_author_feed(&self, handle: &str) -> Result<Vec<Post>, FeedError>;
}

/// Destination for relayed messages
#[async_trait]
pub trait WebhookSink: Send + Sync {
    /// Deliver one message. Err covers transport failures and non-success
    /// responses alike.
    async fn deliver(&self, content: &str) -> Result<(), WebhookError>;
}

/// Durable store for the last-seen post marker
#[async_trait]
pub trait MarkerStore: Send + Sync {
    /// Read the marker, or `None` if no marker has ever been written.
    async fn load(&self) -> Result<Option<Post>, MarkerError>;

    /// Overwrite the marker with `post`.
    async fn store(&self, post: &Post) -> Result<(), MarkerError>;
}
