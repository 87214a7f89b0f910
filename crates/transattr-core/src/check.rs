//! The attribution check pipeline.
//!
//! One run fetches sequentially from an [`ArticleSource`]:
//!
//! 1. creation record; a tool-created page stops here
//! 2. edit summaries → [`SummarySignals`]
//! 3. article markup → [`AccessDateReport`]
//! 4. talk page, only when [`Outcome::needs_talk_page`]
//!
//! A fetch error ends the run with no verdict.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::access_date::{AccessDateReport, scan_access_dates};
use crate::config::CheckConfig;
use crate::decision::{DecisionInputs, Outcome, TemplateAdvice};
use crate::notice::{Notice, notices_for};
use crate::source::ArticleSource;
use crate::summary::{SummarySignals, classify_summaries};

/// Everything a run concluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub outcome: Outcome,
    /// Timestamp of the creation record.
    pub created_at: DateTime<Utc>,
    /// `None` when the run stopped at the creation record.
    pub signals: Option<SummarySignals>,
    /// `None` when the run stopped at the creation record.
    pub access_dates: Option<AccessDateReport>,
    /// Only set for [`Outcome::AttributedNeedsTemplateCheck`].
    pub template_advice: Option<TemplateAdvice>,
}

impl Verdict {
    /// Banners to show, in order. Empty for [`Outcome::NoSignal`].
    pub fn notices(&self) -> Vec<Notice> {
        notices_for(self.outcome, self.template_advice)
    }
}

/// Run a full check against `source`.
pub async fn check_attribution<S>(source: &S, config: &CheckConfig) -> Result<Verdict, S::Error>
where
    S: ArticleSource + ?Sized,
{
    let creation = source.creation_record().await?;
    debug!(
        comment = %creation.comment,
        tags = ?creation.tags,
        created_at = %creation.timestamp,
        "fetched creation record"
    );

    if creation.is_tool_created(config) {
        let verdict = Verdict {
            outcome: Outcome::ToolAttributed,
            created_at: creation.timestamp,
            signals: None,
            access_dates: None,
            template_advice: None,
        };
        info!(outcome = verdict.outcome.as_str(), "created with translation tool");
        return Ok(verdict);
    }

    let summaries = source.edit_summaries().await?;
    debug!(count = summaries.len(), "fetched edit summaries");
    let signals = classify_summaries(&summaries);

    let markup = source.article_markup().await?;
    let access_dates = scan_access_dates(
        markup.as_deref(),
        creation.timestamp,
        config.offline_margin,
    );

    let outcome = Outcome::decide(DecisionInputs::new(
        false,
        access_dates.is_suspicious(),
        signals,
    ));

    let template_advice = if outcome.needs_talk_page() {
        let talk = source.talk_page_markup().await?;
        debug!(exists = talk.is_some(), "fetched talk page");
        Some(TemplateAdvice::from_talk_page(talk.as_deref()))
    } else {
        None
    };

    info!(
        outcome = outcome.as_str(),
        unattributed = signals.unattributed,
        attributed = signals.attributed,
        suspicious_dates = access_dates.suspicious.len(),
        ?template_advice,
        "attribution check complete"
    );

    Ok(Verdict {
        outcome,
        created_at: creation.timestamp,
        signals: Some(signals),
        access_dates: Some(access_dates),
        template_advice,
    })
}
