//! Feed action adapters: real REST client and a mock for tests/dev.

pub mod http_client;
pub mod mock_client;

pub use http_client::HttpFeedClient;
pub use mock_client::MockFeedClient;
