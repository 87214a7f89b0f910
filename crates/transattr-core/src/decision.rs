//! Outcome selection.
//!
//! Four independent inputs decide the outcome: tool provenance of the
//! creation edit, suspicious access dates, and the two summary signals.
//! [`Outcome::decide`] is a total function over them. The talk page is only
//! consulted for [`Outcome::AttributedNeedsTemplateCheck`], see
//! [`Outcome::needs_talk_page`].

use serde::Serialize;

use crate::summary::SummarySignals;

/// Inputs to the decision table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecisionInputs {
    pub tool_attributed: bool,
    pub suspicious_dates: bool,
    pub unattributed: bool,
    pub attributed: bool,
}

impl DecisionInputs {
    pub fn new(tool_attributed: bool, suspicious_dates: bool, signals: SummarySignals) -> Self {
        Self {
            tool_attributed,
            suspicious_dates,
            unattributed: signals.unattributed,
            attributed: signals.attributed,
        }
    }
}

/// What a check concluded about an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Created with the translation tool, which attributes automatically.
    ToolAttributed,
    /// Old access dates and no translation summaries.
    DateWarningOnly,
    /// Old access dates, but a summary attributes the translation.
    DateWarningAttributed,
    /// Unattributed translation summary and old access dates.
    UnattributedWithDateWarning,
    /// Attributed translation; the talk page decides whether to suggest the template.
    AttributedNeedsTemplateCheck,
    /// Unattributed translation summary, access dates look fine.
    UnattributedNoDateIssue,
    /// Nothing worth reporting.
    NoSignal,
}

impl Outcome {
    /// Every outcome, in table order.
    pub const ALL: [Outcome; 7] = [
        Self::ToolAttributed,
        Self::DateWarningOnly,
        Self::DateWarningAttributed,
        Self::UnattributedWithDateWarning,
        Self::AttributedNeedsTemplateCheck,
        Self::UnattributedNoDateIssue,
        Self::NoSignal,
    ];

    /// Apply the decision table.
    ///
    /// Tool provenance overrides everything. An unattributed summary beats
    /// an attributed one, with or without suspicious dates.
    pub fn decide(inputs: DecisionInputs) -> Self {
        let DecisionInputs {
            tool_attributed,
            suspicious_dates,
            unattributed,
            attributed,
        } = inputs;

        match (tool_attributed, suspicious_dates, unattributed, attributed) {
            (true, _, _, _) => Self::ToolAttributed,
            (false, true, true, _) => Self::UnattributedWithDateWarning,
            (false, true, false, true) => Self::DateWarningAttributed,
            (false, true, false, false) => Self::DateWarningOnly,
            (false, false, true, _) => Self::UnattributedNoDateIssue,
            (false, false, false, true) => Self::AttributedNeedsTemplateCheck,
            (false, false, false, false) => Self::NoSignal,
        }
    }

    /// Whether this outcome needs the talk page to pick its notice.
    pub fn needs_talk_page(self) -> bool {
        matches!(self, Self::AttributedNeedsTemplateCheck)
    }

    /// Whether a reader should be shown anything at all.
    pub fn is_reportable(self) -> bool {
        self != Self::NoSignal
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToolAttributed => "tool_attributed",
            Self::DateWarningOnly => "date_warning_only",
            Self::DateWarningAttributed => "date_warning_attributed",
            Self::UnattributedWithDateWarning => "unattributed_with_date_warning",
            Self::AttributedNeedsTemplateCheck => "attributed_needs_template_check",
            Self::UnattributedNoDateIssue => "unattributed_no_date_issue",
            Self::NoSignal => "no_signal",
        }
    }
}

/// Whether to suggest `{{Translated from}}` on the talk page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateAdvice {
    /// The talk page says nothing about a translation yet.
    ConsiderTemplate,
    /// The talk page already mentions the translation.
    AlreadyNoted,
}

impl TemplateAdvice {
    /// Decide from the talk page source; a missing talk page counts as silent.
    pub fn from_talk_page(markup: Option<&str>) -> Self {
        if markup.is_some_and(talk_page_mentions_translation) {
            Self::AlreadyNoted
        } else {
            Self::ConsiderTemplate
        }
    }
}

/// True when the talk page contains "translat" in any case.
pub fn talk_page_mentions_translation(markup: &str) -> bool {
    markup.to_lowercase().contains("translat")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn inputs(tool: bool, dates: bool, unattributed: bool, attributed: bool) -> DecisionInputs {
        DecisionInputs {
            tool_attributed: tool,
            suspicious_dates: dates,
            unattributed,
            attributed,
        }
    }

    /// All 16 combinations of the four flags.
    fn all_inputs() -> Vec<DecisionInputs> {
        (0u8..16)
            .map(|bits| {
                inputs(
                    bits & 0b1000 != 0,
                    bits & 0b0100 != 0,
                    bits & 0b0010 != 0,
                    bits & 0b0001 != 0,
                )
            })
            .collect()
    }

    #[test]
    fn table_rows() {
        use Outcome::*;
        let rows = [
            (inputs(false, true, false, false), DateWarningOnly),
            (inputs(false, true, false, true), DateWarningAttributed),
            (inputs(false, true, true, false), UnattributedWithDateWarning),
            (inputs(false, true, true, true), UnattributedWithDateWarning),
            (inputs(false, false, false, true), AttributedNeedsTemplateCheck),
            (inputs(false, false, true, false), UnattributedNoDateIssue),
            (inputs(false, false, true, true), UnattributedNoDateIssue),
            (inputs(false, false, false, false), NoSignal),
        ];
        for (input, expected) in rows {
            assert_eq!(Outcome::decide(input), expected, "{input:?}");
        }
    }

    #[test]
    fn tool_provenance_overrides_everything() {
        for input in all_inputs().into_iter().filter(|i| i.tool_attributed) {
            assert_eq!(Outcome::decide(input), Outcome::ToolAttributed, "{input:?}");
        }
    }

    #[test]
    fn table_is_total_and_reaches_every_outcome() {
        let reached: HashSet<Outcome> = all_inputs().into_iter().map(Outcome::decide).collect();
        assert_eq!(reached.len(), Outcome::ALL.len());
        for outcome in Outcome::ALL {
            assert!(reached.contains(&outcome), "{outcome:?} unreachable");
        }
    }

    #[test]
    fn only_template_check_needs_talk_page() {
        for outcome in Outcome::ALL {
            assert_eq!(
                outcome.needs_talk_page(),
                outcome == Outcome::AttributedNeedsTemplateCheck
            );
        }
    }

    #[test]
    fn inputs_from_signals() {
        let signals = SummarySignals {
            unattributed: false,
            attributed: true,
        };
        let input = DecisionInputs::new(false, false, signals);
        assert_eq!(input, inputs(false, false, false, true));
    }

    #[test]
    fn template_advice_from_talk_page() {
        assert_eq!(
            TemplateAdvice::from_talk_page(None),
            TemplateAdvice::ConsiderTemplate
        );
        assert_eq!(
            TemplateAdvice::from_talk_page(Some("{{WikiProject Films}}")),
            TemplateAdvice::ConsiderTemplate
        );
        assert_eq!(
            TemplateAdvice::from_talk_page(Some("{{Translated from|fr|Exemple}}")),
            TemplateAdvice::AlreadyNoted
        );
        assert_eq!(
            TemplateAdvice::from_talk_page(Some("This was a TRANSLATION of the German page.")),
            TemplateAdvice::AlreadyNoted
        );
    }

    #[test]
    fn outcome_names_match_serde() {
        for outcome in Outcome::ALL {
            let json = serde_json::to_value(outcome).unwrap();
            assert_eq!(json, outcome.as_str());
        }
    }
}
