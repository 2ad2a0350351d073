//! In-memory port implementations and fixtures for tests

mod fakes;

pub use fakes::{InMemoryMarkerStore, RecordingWebhook, StaticFeed};
pub use fixtures::{post, post_by, post_with_text, reply_post, HANDLE};
