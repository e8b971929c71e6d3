//! Eligibility gate: cheap pre-check before the full phrase match.
//!
//! Excludes re-shares and the sentinel's own posts, then applies the loose
//! presence pre-filter. The full matcher re-derives presence from scratch
//! and remains the authoritative decision.

use crate::domain::entities::{ActorIdentity, Post, TargetPattern};
use crate::domain::matcher;

/// Should this post be considered for detection at all?
pub fn is_eligible(post: &Post, actor: &ActorIdentity, pattern: &TargetPattern) -> bool {
    !post.is_reshare
        && post.author_id != actor.id
        && matcher::contains_any(&post.text, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(text: &str) -> Post {
        Post {
            id: "1".into(),
            text: text.into(),
            author_id: "other".into(),
            author_name: "Other".into(),
            is_reshare: false,
        }
    }

    fn actor() -> ActorIdentity {
        ActorIdentity::new("me")
    }

    fn pattern() -> TargetPattern {
        TargetPattern::new("大塩平八郎")
    }

    #[test]
    fn reshares_are_never_eligible() {
        let mut p = post("大塩平八郎");
        p.is_reshare = true;
        assert!(!is_eligible(&p, &actor(), &pattern()));
    }

    #[test]
    fn own_posts_are_never_eligible() {
        let mut p = post("大塩平八郎");
        p.author_id = "me".into();
        assert!(!is_eligible(&p, &actor(), &pattern()));
    }

    #[test]
    fn zero_presence_is_not_eligible() {
        assert!(!is_eligible(&post("no target characters"), &actor(), &pattern()));
        assert!(!is_eligible(&post(""), &actor(), &pattern()));
    }

    #[test]
    fn single_present_character_passes_the_gate() {
        // Looser than the matcher's 2-character threshold, by design.
        assert!(is_eligible(&post("塩"), &actor(), &pattern()));
    }

    #[test]
    fn ordinary_candidate_is_eligible() {
        assert!(is_eligible(&post("大塩平八郎が現れた"), &actor(), &pattern()));
    }
}
