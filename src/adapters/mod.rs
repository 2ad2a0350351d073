mod bluesky;
mod discord;
mod marker;

pub use bluesky::BlueskyFeedClient;
pub use discord::DiscordWebhook;
pub use marker::FileMarkerStore;
