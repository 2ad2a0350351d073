//! Feed entities as returned by `app.bsky.feed.getAuthorFeed`.
//!
//! Only the fields the relay needs are modeled; everything else in the API
//! response is ignored on deserialize. The full `Post` is what gets written
//! to the marker file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub handle: String,
}

/// The record embedded in a post. `reply` is present (an object) when the
/// post is a reply to another post; its contents are irrelevant here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<serde_json::Value>,
}

/// A single post from the author feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub uri: String,
    pub author: Author,
    pub record: PostRecord,
    #[serde(rename = "indexedAt")]
    pub indexed_at: DateTime<Utc>,
}

impl Post {
    /// True for top-level posts authored by `handle` (exact match, no reply
    /// marker).
    pub fn is_original_by(&self, handle: &str) -> bool {
        self.author.handle == handle && self.record.reply.is_none()
    }

    /// Final path segment of the AT-URI, e.g. "abc123" from
    /// "at://did:plc:xyz/app.bsky.feed.post/abc123".
    pub fn hash(&self) -> &str {
        self.uri.rsplit('/').next().unwrap_or_default()
    }

    /// Canonical web-viewable link for this post.
    pub fn web_url(&self, handle: &str) -> String {
        format!("https://bsky.app/profile/{}/post/{}", handle, self.hash())
    }

    /// Webhook message body: post text above the link when present, the link
    /// alone otherwise.
    pub fn message_content(&self, handle: &str) -> String {
        let url = self.web_url(handle);
        match self.record.text.as_deref() {
            Some(text) if !text.is_empty() => format!("{}\n{}", text, url),
            _ => url,
        }
    }
}

/// Response envelope of `getAuthorFeed`
#[derive(Debug, Deserialize)]
pub struct FeedEnvelope {
    pub feed: Vec<FeedItem>,
}

/// Wrapper around each post in the feed
#[derive(Debug, Deserialize)]
pub struct FeedItem {
    pub post: Post,
}

impl FeedEnvelope {
    /// Unwrap the inner posts, preserving feed order.
    pub fn into_posts(self) -> Vec<Post> {
        self.feed.into_iter().map(|item| item.post).collect()
    }
}
