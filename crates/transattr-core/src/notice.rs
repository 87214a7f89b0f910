//! Reader-facing notices for each outcome.

use serde::Serialize;

use crate::decision::{Outcome, TemplateAdvice};

/// Help page for this checker.
pub const DOCS_URL: &str =
    "https://en.wikipedia.org/wiki/User:Vanderwaalforces/checkTranslationAttribution";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

pub const TFOLWP: Link = Link {
    label: "WP:TFOLWP",
    url: "https://en.wikipedia.org/wiki/WP:TFOLWP",
};

pub const TRANSLATED_FROM_TEMPLATE: Link = Link {
    label: "{{Translated from}}",
    url: "https://en.wikipedia.org/wiki/Template:Translated_from",
};

pub const CONTENT_TRANSLATION: Link = Link {
    label: "ContentTranslation",
    url: "https://www.mediawiki.org/wiki/Special:MyLanguage/Content_translation",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Info,
}

/// The distinct banners a check can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    WarnDate,
    InfoDate,
    WarnUnattributed,
    InfoTalk,
    InfoTalkNoted,
    InfoTool,
}

impl NoticeKind {
    pub fn severity(self) -> Severity {
        match self {
            Self::WarnDate | Self::WarnUnattributed => Severity::Warning,
            Self::InfoDate | Self::InfoTalk | Self::InfoTalkNoted | Self::InfoTool => {
                Severity::Info
            }
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::WarnDate => {
                "Warning: There are citations in this article that have access dates from before \
                 the article was created. This suggests the article may have been copy-pasted \
                 from somewhere."
            }
            Self::InfoDate => {
                "Notice: Despite some citations having access dates before the article's creation, \
                 indicating possible copy-pasting or interwiki translation, proper attribution \
                 has been given."
            }
            Self::WarnUnattributed => {
                "Warning: This article is likely an unattributed translation. Please see \
                 WP:TFOLWP for proper attribution, and consider adding {{Translated from}} to \
                 the talk page."
            }
            Self::InfoTalk => {
                "Notice: This translated article has been correctly attributed. Consider \
                 optionally adding {{Translated from}} to the talk page."
            }
            Self::InfoTalkNoted => "Notice: This translated article has been correctly attributed.",
            Self::InfoTool => {
                "This article was created using the ContentTranslation module and is correctly \
                 attributed to the source Wikipedia."
            }
        }
    }

    /// Pages referenced by the message, in the order they appear.
    pub fn links(self) -> &'static [Link] {
        match self {
            Self::WarnUnattributed => &[TFOLWP, TRANSLATED_FROM_TEMPLATE],
            Self::InfoTalk => &[TRANSLATED_FROM_TEMPLATE],
            Self::InfoTool => &[CONTENT_TRANSLATION],
            Self::WarnDate | Self::InfoDate | Self::InfoTalkNoted => &[],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WarnDate => "warn_date",
            Self::InfoDate => "info_date",
            Self::WarnUnattributed => "warn_unattributed",
            Self::InfoTalk => "info_talk",
            Self::InfoTalkNoted => "info_talk_noted",
            Self::InfoTool => "info_tool",
        }
    }
}

/// One banner, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub severity: Severity,
    pub message: &'static str,
    pub links: &'static [Link],
}

impl From<NoticeKind> for Notice {
    fn from(kind: NoticeKind) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            message: kind.message(),
            links: kind.links(),
        }
    }
}

/// Banners for an outcome, in display order.
///
/// `advice` only matters for [`Outcome::AttributedNeedsTemplateCheck`];
/// without it the template is suggested.
pub fn notices_for(outcome: Outcome, advice: Option<TemplateAdvice>) -> Vec<Notice> {
    let kinds: &[NoticeKind] = match outcome {
        Outcome::ToolAttributed => &[NoticeKind::InfoTool],
        Outcome::DateWarningOnly => &[NoticeKind::WarnDate],
        Outcome::DateWarningAttributed => &[NoticeKind::InfoDate],
        Outcome::UnattributedWithDateWarning => {
            &[NoticeKind::WarnUnattributed, NoticeKind::WarnDate]
        }
        Outcome::AttributedNeedsTemplateCheck => match advice {
            Some(TemplateAdvice::AlreadyNoted) => &[NoticeKind::InfoTalkNoted],
            Some(TemplateAdvice::ConsiderTemplate) | None => &[NoticeKind::InfoTalk],
        },
        Outcome::UnattributedNoDateIssue => &[NoticeKind::WarnUnattributed],
        Outcome::NoSignal => &[],
    };
    kinds.iter().copied().map(Notice::from).collect()
}
