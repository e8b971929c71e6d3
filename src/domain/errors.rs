//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. Every variant is a
//! remote-action failure: the orchestrator swallows and logs them, so none
//! of them ever escapes a post evaluation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("feed action error: {0}")]
    FeedAction(String),

    #[error("notification error: {0}")]
    Notify(String),
}
