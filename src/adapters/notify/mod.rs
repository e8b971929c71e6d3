//! Notification adapters: Slack incoming webhook and a mock for tests/dev.

pub mod mock_notifier;
pub mod slack;

pub use mock_notifier::MockNotifier;
pub use slack::SlackNotifier;
