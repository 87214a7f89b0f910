//! Edit summary classification.
//!
//! Every summary that mentions a translation is sorted into one of two
//! buckets: it names its source with an interwiki prefix (attributed) or it
//! does not (unattributed). Both buckets can fill up in the same history.

use serde::Serialize;
use tracing::debug;

use crate::interwiki::interwiki_prefix;
use crate::keywords::has_translation_keywords;

/// The two translation signals accumulated over an edit history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummarySignals {
    /// Some summary mentions a translation without an interwiki source.
    pub unattributed: bool,
    /// Some summary mentions a translation and links its source.
    pub attributed: bool,
}

impl SummarySignals {
    /// Fold one summary into the signals.
    pub fn observe(&mut self, summary: &str) {
        if !has_translation_keywords(summary) {
            return;
        }
        if let Some(prefix) = interwiki_prefix(summary) {
            debug!(summary, prefix, "attributed translation summary");
            self.attributed = true;
        } else {
            debug!(summary, "unattributed translation summary");
            self.unattributed = true;
        }
    }
}

/// Classify every summary; none is skipped and order does not matter.
pub fn classify_summaries<I, S>(summaries: I) -> SummarySignals
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut signals = SummarySignals::default();
    for summary in summaries {
        signals.observe(summary.as_ref());
    }
    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributed_summary() {
        let signals = classify_summaries(["translated from de:Foo"]);
        assert_eq!(
            signals,
            SummarySignals {
                unattributed: false,
                attributed: true
            }
        );
    }

    #[test]
    fn unattributed_summary() {
        let signals = classify_summaries(["translated from French"]);
        assert!(signals.unattributed);
        assert!(!signals.attributed);
    }

    #[test]
    fn both_signals_accumulate() {
        let signals = classify_summaries(vec![
            "Translated from fr:Exemple".to_string(),
            "copyedit".to_string(),
            "imported from the Italian article".to_string(),
        ]);
        assert!(signals.attributed);
        assert!(signals.unattributed);
    }

    #[test]
    fn interwiki_without_keywords_is_ignored() {
        let signals = classify_summaries(["see de:Foo for comparison"]);
        assert_eq!(signals, SummarySignals::default());
    }

    #[test]
    fn empty_history() {
        let signals = classify_summaries(Vec::<String>::new());
        assert_eq!(signals, SummarySignals::default());
    }

    #[test]
    fn order_does_not_matter() {
        let a = classify_summaries(["translated from es:Hola", "translated from Spanish"]);
        let b = classify_summaries(["translated from Spanish", "translated from es:Hola"]);
        assert_eq!(a, b);
    }
}
