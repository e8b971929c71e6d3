//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here — these are mapped from adapters.

use serde::{Deserialize, Serialize};

/// Default phrase watched for when none is configured.
pub const DEFAULT_TARGET_PHRASE: &str = "大塩平八郎";

/// A single post from the feed, as handed to one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    /// Body text. May be empty; an empty body never matches.
    #[serde(default)]
    pub text: String,
    pub author_id: String,
    /// Display name, used in the channel notification.
    #[serde(default)]
    pub author_name: String,
    /// True when this post is a re-share of another post.
    #[serde(default)]
    pub is_reshare: bool,
}

/// Identity of the account the sentinel runs as. Read-only during evaluation.
#[derive(Debug, Clone)]
pub struct ActorIdentity {
    pub id: String,
}

impl ActorIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// The phrase to detect: an ordered sequence of distinct characters,
/// fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPattern(String);

impl TargetPattern {
    /// Callers guarantee a non-empty phrase of distinct characters.
    pub fn new(phrase: impl Into<String>) -> Self {
        Self(phrase.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl Default for TargetPattern {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_PHRASE)
    }
}

/// How a single reaction settled. Never escalated to the caller;
/// only recorded for completion logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionOutcome {
    Succeeded,
    FailedButSwallowed,
}
