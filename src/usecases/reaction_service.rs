//! Reaction fan-out: favorite + re-share + notify for a matched post.
//!
//! The three actions run concurrently and settle independently. A failed
//! action is logged and swallowed at its own boundary; it cannot cancel or
//! block its siblings, and nothing propagates to the caller. `react`
//! returns only after all three have settled.

use crate::domain::{DomainError, Post, ReactionOutcome, TargetPattern};
use crate::ports::{DeliveryOptions, FeedActionPort, NotifierPort};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

/// Reaction service. Owns the outbound collaborators for a matched post.
pub struct ReactionService {
    feed: Arc<dyn FeedActionPort>,
    notifier: Arc<dyn NotifierPort>,
    pattern: TargetPattern,
}

impl ReactionService {
    pub fn new(
        feed: Arc<dyn FeedActionPort>,
        notifier: Arc<dyn NotifierPort>,
        pattern: TargetPattern,
    ) -> Self {
        Self {
            feed,
            notifier,
            pattern,
        }
    }

    /// Fan out all three reactions and wait for every one to settle.
    ///
    /// Each action attempts its operation exactly once; there is no retry,
    /// no timeout, and no ordering between the three external effects.
    pub async fn react(&self, post: &Post) {
        let message = format!(
            "Detected \"{}\".\n{}: 「{}」",
            self.pattern.as_str(),
            post.author_name,
            post.text
        );

        let (favorite, reshare, notify) = tokio::join!(
            settle("favorite", &post.id, self.feed.mark_favorite(&post.id)),
            settle("reshare", &post.id, self.feed.reshare(&post.id)),
            settle(
                "notify",
                &post.id,
                self.notifier
                    .notify(&message, DeliveryOptions { channel_alert: false }),
            ),
        );

        debug!(
            post_id = %post.id,
            ?favorite,
            ?reshare,
            ?notify,
            "all reactions settled"
        );
    }
}

/// Isolation wrapper applied identically to every reaction: a failure is
/// logged and converted into a settlement, so the join above never sees an
/// error and no single action can fail the group.
async fn settle<F>(action: &'static str, post_id: &str, fut: F) -> ReactionOutcome
where
    F: Future<Output = Result<(), DomainError>>,
{
    match fut.await {
        Ok(()) => ReactionOutcome::Succeeded,
        Err(e) => {
            warn!(post_id, action, error = %e, "reaction failed; continuing");
            ReactionOutcome::FailedButSwallowed
        }
    }
}
