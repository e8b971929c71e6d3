//! Mock feed adapter for testing without network calls.
//!
//! Counts invocations and can be switched into a failing mode to exercise
//! the swallow-and-log path.

use crate::domain::DomainError;
use crate::ports::FeedActionPort;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

/// Mock feed client. Simulates network latency with a configurable delay.
pub struct MockFeedClient {
    delay_ms: u64,
    fail: bool,
    favorites: AtomicUsize,
    reshares: AtomicUsize,
}

impl MockFeedClient {
    /// Create a new mock client with default delay (10ms).
    pub fn new() -> Self {
        Self {
            delay_ms: 10,
            fail: false,
            favorites: AtomicUsize::new(0),
            reshares: AtomicUsize::new(0),
        }
    }

    /// Every action attempt fails with a simulated remote error.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Number of mark_favorite attempts so far.
    pub fn favorites(&self) -> usize {
        self.favorites.load(Ordering::SeqCst)
    }

    /// Number of reshare attempts so far.
    pub fn reshares(&self) -> usize {
        self.reshares.load(Ordering::SeqCst)
    }

    async fn settle(&self, action: &str, post_id: &str) -> Result<(), DomainError> {
        info!(post_id, action, "[MOCK] simulating feed action");
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        if self.fail {
            Err(DomainError::FeedAction(format!(
                "[MOCK] {} rejected by remote",
                action
            )))
        } else {
            Ok(())
        }
    }
}

impl Default for MockFeedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl FeedActionPort for MockFeedClient {
    async fn mark_favorite(&self, post_id: &str) -> Result<(), DomainError> {
        self.favorites.fetch_add(1, Ordering::SeqCst);
        self.settle("favorite", post_id).await
    }

    async fn reshare(&self, post_id: &str) -> Result<(), DomainError> {
        self.reshares.fetch_add(1, Ordering::SeqCst);
        self.settle("reshare", post_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_attempts_in_both_modes() {
        let ok = MockFeedClient::new();
        assert!(ok.mark_favorite("1").await.is_ok());
        assert_eq!(ok.favorites(), 1);

        let failing = MockFeedClient::new().failing();
        assert!(failing.reshare("1").await.is_err());
        assert_eq!(failing.reshares(), 1);
    }
}
