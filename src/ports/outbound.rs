//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters. Both collaborators must be safe for concurrent
//! use: the reaction fan-out calls them from sibling tasks.

use crate::domain::DomainError;

/// Feed action gateway. Best-effort reactions against a matched post.
#[async_trait::async_trait]
pub trait FeedActionPort: Send + Sync {
    /// Mark the post as a favorite.
    async fn mark_favorite(&self, post_id: &str) -> Result<(), DomainError>;

    /// Re-share the post to the sentinel's own timeline.
    async fn reshare(&self, post_id: &str) -> Result<(), DomainError>;
}

/// Options for a channel notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeliveryOptions {
    /// When true, the channel-wide alert is raised for the message.
    /// The sentinel always suppresses it.
    pub channel_alert: bool,
}

/// Notification channel gateway (e.g. a chat webhook).
#[async_trait::async_trait]
pub trait NotifierPort: Send + Sync {
    /// Deliver a message to the configured channel.
    async fn notify(&self, message: &str, options: DeliveryOptions) -> Result<(), DomainError>;
}
