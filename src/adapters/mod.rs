//! Infrastructure adapters. Implement outbound ports.
//!
//! Feed REST API, Slack webhook, and mocks. Map errors to DomainError.

pub mod feed;
pub mod notify;
