//! Slack adapter. Implements NotifierPort via an incoming-webhook URL.

use crate::domain::DomainError;
use crate::ports::{DeliveryOptions, NotifierPort};
use reqwest::Client;
use std::sync::Arc;

/// Slack incoming-webhook notifier.
///
/// Webhook URLs come from https://api.slack.com/messaging/webhooks and
/// already encode the target channel.
pub struct SlackNotifier {
    client: Arc<Client>,
    webhook_url: String,
}

impl SlackNotifier {
    pub fn new(webhook_url: String) -> Self {
        Self {
            client: Arc::new(Client::new()),
            webhook_url,
        }
    }
}

#[async_trait::async_trait]
impl NotifierPort for SlackNotifier {
    async fn notify(&self, message: &str, options: DeliveryOptions) -> Result<(), DomainError> {
        // <!channel> raises the channel-wide alert; omitted by default.
        let text = if options.channel_alert {
            format!("<!channel> {}", message)
        } else {
            message.to_string()
        };

        let body = serde_json::json!({ "text": text });

        let res = self
            .client
            .post(&self.webhook_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Notify(format!("webhook request failed: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
            return Err(DomainError::Notify(format!(
                "Slack webhook error {}: {}",
                status, text
            )));
        }

        Ok(())
    }
}
