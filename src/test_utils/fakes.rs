//! Configurable in-memory implementations of the port traits

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::Post;
use crate::domain::ports::{FeedSource, MarkerStore, WebhookSink};
use crate::error::{FeedError, MarkerError, WebhookError};

/// Feed source that returns a fixed list of posts
pub struct StaticFeed {
    posts: Vec<Post>,
}

impl StaticFeed {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl FeedSource for StaticFeed {
    async fn fetch_author_feed(&self, _handle: &str) -> Result<Vec<Post>, FeedError> {
        Ok(self.posts.clone())
    }
}

/// Webhook sink that records every attempted delivery and can be told to
/// reject upcoming ones with a given status
#[derive(Default)]
pub struct RecordingWebhook {
    deliveries: RwLock<Vec<String>>,
    rejections: RwLock<VecDeque<u16>>,
}

impl RecordingWebhook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a rejection for the next delivery attempt
    pub fn reject_next(&self, status: u16) {
        self.rejections.write().unwrap().push_back(status);
    }

    /// Every content string handed to `deliver`, in order, including
    /// rejected attempts
    pub fn deliveries(&self) -> Vec<String> {
        self.deliveries.read().unwrap().clone()
    }
}

#[async_trait]
impl WebhookSink for RecordingWebhook {
    async fn deliver(&self, content: &str) -> Result<(), WebhookError> {
        self.deliveries.write().unwrap().push(content.to_string());

        if let Some(status) = self.rejections.write().unwrap().pop_front() {
            return Err(WebhookError::Rejected {
                status,
                message: "rejected by test".to_string(),
            });
        }

        Ok(())
    }
}

/// Marker store holding the marker in memory
#[derive(Default)]
pub struct InMemoryMarkerStore {
    marker: RwLock<Option<Post>>,
    stores: AtomicUsize,
}

impl InMemoryMarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an existing marker
    pub fn with_marker(post: Post) -> Self {
        Self {
            marker: RwLock::new(Some(post)),
            stores: AtomicUsize::new(0),
        }
    }

    pub fn current(&self) -> Option<Post> {
        self.marker.read().unwrap().clone()
    }

    /// Number of times `store` has been called
    pub fn store_count(&self) -> usize {
        self.stores.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarkerStore for InMemoryMarkerStore {
    async fn load(&self) -> Result<Option<Post>, MarkerError> {
        Ok(self.marker.read().unwrap().clone())
    }

    async fn store(&self, post: &Post) -> Result<(), MarkerError> {
        *self.marker.write().unwrap() = Some(post.clone());
        self.stores.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
