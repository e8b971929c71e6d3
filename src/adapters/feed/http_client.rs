//! HTTP feed adapter. Implements FeedActionPort against a Mastodon-style
//! REST API (`POST /api/v1/statuses/{id}/favourite` and `/reblog`).

use crate::domain::DomainError;
use crate::ports::FeedActionPort;
use reqwest::Client;
use std::sync::Arc;

/// REST feed client. Authenticates with a bearer token.
pub struct HttpFeedClient {
    client: Arc<Client>,
    api_base: String,
    token: String,
}

impl HttpFeedClient {
    /// `api_base` is the instance root, e.g. `https://example.social`.
    pub fn new(api_base: String, token: String) -> Self {
        Self {
            client: Arc::new(Client::new()),
            api_base: api_base.trim_end_matches('/').to_string(),
            token,
        }
    }

    async fn post_action(&self, post_id: &str, action: &str) -> Result<(), DomainError> {
        let url = format!("{}/api/v1/statuses/{}/{}", self.api_base, post_id, action);

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| DomainError::FeedAction(format!("{} request failed: {}", action, e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
            return Err(DomainError::FeedAction(format!(
                "{} returned {}: {}",
                action, status, text
            )));
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl FeedActionPort for HttpFeedClient {
    async fn mark_favorite(&self, post_id: &str) -> Result<(), DomainError> {
        self.post_action(post_id, "favourite").await
    }

    async fn reshare(&self, post_id: &str) -> Result<(), DomainError> {
        self.post_action(post_id, "reblog").await
    }
}
