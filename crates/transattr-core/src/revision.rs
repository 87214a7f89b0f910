//! Revision records as seen by the checker.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::CheckConfig;

/// One edit of an article. The chronologically first one is the creation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionRecord {
    /// Edit summary; empty when the summary was hidden or left blank.
    pub comment: String,
    pub tags: BTreeSet<String>,
    pub timestamp: DateTime<Utc>,
}

impl RevisionRecord {
    /// True when this edit was made by the translation tool: the summary
    /// carries the tool's phrase and the edit carries the tool's tag.
    pub fn is_tool_created(&self, config: &CheckConfig) -> bool {
        self.comment.contains(&config.tool_phrase) && self.tags.contains(&config.tool_tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn revision(comment: &str, tags: &[&str]) -> RevisionRecord {
        RevisionRecord {
            comment: comment.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn phrase_and_tag_together() {
        let config = CheckConfig::default();
        let rev = revision(
            "Created by translating the page \"Exemple\"",
            &["contenttranslation", "sectiontranslation"],
        );
        assert!(rev.is_tool_created(&config));
    }

    #[test]
    fn phrase_without_tag() {
        let config = CheckConfig::default();
        let rev = revision("Created by translating the page Exemple", &["visualeditor"]);
        assert!(!rev.is_tool_created(&config));
    }

    #[test]
    fn tag_without_phrase() {
        let config = CheckConfig::default();
        let rev = revision("new article", &["contenttranslation"]);
        assert!(!rev.is_tool_created(&config));
    }

    #[test]
    fn phrase_is_case_sensitive() {
        let config = CheckConfig::default();
        let rev = revision("created by translating the page Exemple", &["contenttranslation"]);
        assert!(!rev.is_tool_created(&config));
    }

    #[test]
    fn json_roundtrip() {
        let rev = revision("Created by translating the page Exemple", &["contenttranslation"]);
        let json = serde_json::to_string(&rev).unwrap();
        let parsed: RevisionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rev);
    }
}
