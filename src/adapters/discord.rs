//! Discord webhook delivery

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;

use crate::domain::ports::WebhookSink;
use crate::error::WebhookError;

/// Webhook sink that POSTs Discord-style `{"content": ...}` payloads
pub struct DiscordWebhook {
    http: Client,
    url: String,
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

impl DiscordWebhook {
    pub fn new(url: String) -> Self {
        Self {
            http: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl WebhookSink for DiscordWebhook {
    async fn deliver(&self, content: &str) -> Result<(), WebhookError> {
        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&WebhookPayload { content })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(WebhookError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}
