//! Per-post pipeline: eligibility gate -> ordered match -> reaction fan-out.
//!
//! One evaluation per post, no state carried across posts. A rejected post
//! is terminal with no callback; the caller treats "no callback" as
//! "not processed".

use crate::domain::{eligibility, matcher, ActorIdentity, Post, TargetPattern};
use crate::ports::{FeedActionPort, NotifierPort};
use crate::usecases::ReactionService;
use std::sync::Arc;
use tracing::{debug, info};

/// Phrase detector. Entry point invoked once per incoming post.
pub struct PhraseDetector {
    actor: ActorIdentity,
    pattern: TargetPattern,
    reactions: ReactionService,
}

impl PhraseDetector {
    pub fn new(
        actor: ActorIdentity,
        pattern: TargetPattern,
        feed: Arc<dyn FeedActionPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        let reactions = ReactionService::new(feed, notifier, pattern.clone());
        Self {
            actor,
            pattern,
            reactions,
        }
    }

    /// Evaluate one post. `on_complete` fires exactly once, with no payload,
    /// after the post matched and all three reactions settled. It is never
    /// invoked for rejected posts.
    pub async fn run<F>(&self, post: &Post, on_complete: F)
    where
        F: FnOnce(),
    {
        if !eligibility::is_eligible(post, &self.actor, &self.pattern) {
            debug!(post_id = %post.id, "post not eligible; skipping");
            return;
        }

        if !matcher::matches(&post.text, &self.pattern) {
            debug!(post_id = %post.id, "eligible but no ordered match");
            return;
        }

        info!(post_id = %post.id, author_id = %post.author_id, "target phrase detected");
        self.reactions.react(post).await;
        on_complete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::feed::MockFeedClient;
    use crate::adapters::notify::MockNotifier;

    fn detector(
        feed: &Arc<MockFeedClient>,
        notifier: &Arc<MockNotifier>,
    ) -> PhraseDetector {
        PhraseDetector::new(
            ActorIdentity::new("me"),
            TargetPattern::default(),
            Arc::clone(feed) as Arc<dyn FeedActionPort>,
            Arc::clone(notifier) as Arc<dyn NotifierPort>,
        )
    }

    fn post(text: &str) -> Post {
        Post {
            id: "42".into(),
            text: text.into(),
            author_id: "other".into(),
            author_name: "Somebody".into(),
            is_reshare: false,
        }
    }

    #[tokio::test]
    async fn matched_post_triggers_all_reactions_and_completion() {
        let feed = Arc::new(MockFeedClient::new());
        let notifier = Arc::new(MockNotifier::new());
        let detector = detector(&feed, &notifier);

        let mut fired = false;
        detector.run(&post("大塩平八郎が現れた"), || fired = true).await;

        assert!(fired);
        assert_eq!(feed.favorites(), 1);
        assert_eq!(feed.reshares(), 1);
        assert_eq!(notifier.notifications(), 1);
    }

    #[tokio::test]
    async fn completion_fires_even_when_every_reaction_fails() {
        let feed = Arc::new(MockFeedClient::new().failing());
        let notifier = Arc::new(MockNotifier::new().failing());
        let detector = detector(&feed, &notifier);

        let mut fired = false;
        detector.run(&post("大塩平八郎が現れた"), || fired = true).await;

        assert!(fired);
        assert_eq!(feed.favorites(), 1);
        assert_eq!(feed.reshares(), 1);
        assert_eq!(notifier.notifications(), 1);
    }

    #[tokio::test]
    async fn reversed_order_is_rejected_without_callback() {
        let feed = Arc::new(MockFeedClient::new());
        let notifier = Arc::new(MockNotifier::new());
        let detector = detector(&feed, &notifier);

        let mut fired = false;
        detector.run(&post("八郎大塩"), || fired = true).await;

        assert!(!fired);
        assert_eq!(feed.favorites(), 0);
        assert_eq!(feed.reshares(), 0);
        assert_eq!(notifier.notifications(), 0);
    }

    #[tokio::test]
    async fn partial_ordered_phrase_still_completes() {
        let feed = Arc::new(MockFeedClient::new());
        let notifier = Arc::new(MockNotifier::new());
        let detector = detector(&feed, &notifier);

        let mut fired = false;
        detector.run(&post("平八郎"), || fired = true).await;

        assert!(fired);
    }

    #[tokio::test]
    async fn reshare_is_gated_out_before_matching() {
        let feed = Arc::new(MockFeedClient::new());
        let notifier = Arc::new(MockNotifier::new());
        let detector = detector(&feed, &notifier);

        let mut p = post("大塩平八郎が現れた");
        p.is_reshare = true;
        let mut fired = false;
        detector.run(&p, || fired = true).await;

        assert!(!fired);
        assert_eq!(feed.favorites(), 0);
    }

    #[tokio::test]
    async fn own_post_is_gated_out_before_matching() {
        let feed = Arc::new(MockFeedClient::new());
        let notifier = Arc::new(MockNotifier::new());
        let detector = detector(&feed, &notifier);

        let mut p = post("大塩平八郎が現れた");
        p.author_id = "me".into();
        let mut fired = false;
        detector.run(&p, || fired = true).await;

        assert!(!fired);
        assert_eq!(notifier.notifications(), 0);
    }
}
