//! Translation vocabulary in edit summaries.
//!
//! An edit summary hints at a translation when it pairs a translation or
//! import verb with "from". Matching is plain substring search on the
//! lower-cased text, so "imported from a family photo album" counts too.

use tracing::trace;

/// Verb stems that announce content brought in from elsewhere.
pub const TRANSLATION_STEMS: &[&str] = &["translat", "imported", "importing"];

/// The preposition that must accompany a stem.
pub const SOURCE_MARKER: &str = "from";

/// True when `summary` contains any stem from [`TRANSLATION_STEMS`] together
/// with [`SOURCE_MARKER`].
pub fn has_translation_keywords(summary: &str) -> bool {
    let lower = summary.to_lowercase();
    let has_from = lower.contains(SOURCE_MARKER);
    let stems: Vec<&str> = TRANSLATION_STEMS
        .iter()
        .copied()
        .filter(|stem| lower.contains(stem))
        .collect();

    trace!(summary, has_from, ?stems, "checked summary for translation keywords");

    has_from && !stems.is_empty()
}
