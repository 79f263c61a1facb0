use crate::ports::outbound::Notifier;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

/// WebhookNotifier adapter for posting the run summary
///
/// Implements the Notifier port by POSTing a `{"text": ...}` JSON payload
/// to a configured webhook URL (the shape Slack-compatible incoming
/// webhooks expect).
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: String) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("org-license-audit/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, text: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "text": text }))
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("webhook returned status code {}", response.status());
        }

        Ok(())
    }
}
