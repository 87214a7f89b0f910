//! Tunables for a check.

use chrono::TimeDelta;

/// Default tolerance between offline research and publication.
pub const OFFLINE_WORK_MARGIN_DAYS: u32 = 7;

/// Largest margin the CLI accepts, about a century.
pub const MAX_MARGIN_DAYS: u32 = 36_500;

/// Summary phrase the translation tool writes on the edit that creates a page.
pub const TOOL_CREATION_PHRASE: &str = "Created by translating the page";

/// Change tag the translation tool puts on its edits.
pub const TOOL_TAG: &str = "contenttranslation";

/// Article (0) and Draft (118) namespaces.
pub const CHECKED_NAMESPACES: &[i64] = &[0, 118];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Subtracted from the creation instant before comparing access dates.
    pub offline_margin: TimeDelta,
    pub tool_phrase: String,
    pub tool_tag: String,
    /// Namespaces a page must be in to be checked.
    pub checked_namespaces: Vec<i64>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            offline_margin: TimeDelta::days(i64::from(OFFLINE_WORK_MARGIN_DAYS)),
            tool_phrase: TOOL_CREATION_PHRASE.to_string(),
            tool_tag: TOOL_TAG.to_string(),
            checked_namespaces: CHECKED_NAMESPACES.to_vec(),
        }
    }
}

impl CheckConfig {
    /// Override the offline-work margin, in whole days.
    pub fn with_margin_days(mut self, days: u32) -> Self {
        self.offline_margin = TimeDelta::days(i64::from(days));
        self
    }

    pub fn checks_namespace(&self, namespace: i64) -> bool {
        self.checked_namespaces.contains(&namespace)
    }
}
