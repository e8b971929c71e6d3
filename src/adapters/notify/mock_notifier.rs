//! Mock notifier for testing without a webhook.
//!
//! Records every message it was asked to deliver; can be switched into a
//! failing mode to exercise the swallow-and-log path.

use crate::domain::DomainError;
use crate::ports::{DeliveryOptions, NotifierPort};
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;

/// Mock notifier. Simulates network latency with a small fixed delay.
pub struct MockNotifier {
    fail: bool,
    sent: Mutex<Vec<String>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            fail: false,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Every notify attempt fails with a simulated remote error.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Number of notify attempts so far.
    pub fn notifications(&self) -> usize {
        self.sent.lock().map(|v| v.len()).unwrap_or(0)
    }

    /// Copies of the messages passed to notify, in call order.
    pub fn messages(&self) -> Vec<String> {
        self.sent.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl NotifierPort for MockNotifier {
    async fn notify(&self, message: &str, options: DeliveryOptions) -> Result<(), DomainError> {
        info!(
            channel_alert = options.channel_alert,
            "[MOCK] simulating notification"
        );
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(message.to_string());
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
        if self.fail {
            Err(DomainError::Notify("[MOCK] webhook unreachable".into()))
        } else {
            Ok(())
        }
    }
}
