//! Ordered-subsequence phrase matching.
//!
//! A post matches when the pattern's characters occur in the text with
//! non-decreasing first-occurrence positions. Missing characters are
//! tolerated (down to a minimum count), reordering is not.

use crate::domain::entities::TargetPattern;

/// Fewer matched pattern characters than this never count as a detection.
/// A single common character would produce far too many false positives.
const MIN_MATCHED_CHARS: usize = 2;

/// Full ordered match. Authoritative detection decision.
///
/// Collects the first occurrence of each pattern character in `text`,
/// discards absent ones, then requires the surviving positions to be
/// non-decreasing in pattern order. Ties are allowed (`"AAB"` matches
/// pattern `"AB"`); a single drop below the running position fails.
pub fn matches(text: &str, pattern: &TargetPattern) -> bool {
    if text.is_empty() {
        return false;
    }

    let positions: Vec<usize> = pattern.chars().filter_map(|c| text.find(c)).collect();

    if positions.len() < MIN_MATCHED_CHARS {
        return false;
    }

    let mut current = 0usize;
    positions.into_iter().all(|pos| {
        let in_order = current <= pos;
        current = pos;
        in_order
    })
}

/// Loose presence pre-filter: does `text` contain any pattern character at all?
///
/// Used by the eligibility gate to skip posts that cannot possibly match.
/// Deliberately looser than the matcher's threshold; the two checks are kept
/// separate so the gate never changes which posts reach the full match.
pub fn contains_any(text: &str, pattern: &TargetPattern) -> bool {
    if text.is_empty() {
        return false;
    }
    pattern.chars().any(|c| text.contains(c))
}
