//! Citation access dates that predate the article.
//!
//! An editor who copies an article from somewhere else usually carries its
//! citations along, `access-date` fields included. When those dates fall
//! well before the article's first revision, the text was most likely
//! written elsewhere first. A margin (7 days by default) leaves room for
//! research done offline before publishing.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::date::parse_date;

/// `| access-date = <value>`, also `access date`, case-insensitive.
static ACCESS_DATE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\|\s*access[- ]date\s*=\s*([a-z0-9, -]+)").unwrap()
});

/// An access date found earlier than the margin date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuspiciousDate {
    /// The field value as written in the markup, trimmed.
    pub raw: String,
    pub date: NaiveDate,
}

/// Result of scanning one article's markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessDateReport {
    /// Creation instant minus the offline-work margin.
    pub margin_date: DateTime<Utc>,
    /// Number of access-date fields whose value parsed as a date.
    pub parsed: usize,
    pub suspicious: Vec<SuspiciousDate>,
}

impl AccessDateReport {
    pub fn is_suspicious(&self) -> bool {
        !self.suspicious.is_empty()
    }
}

/// Raw values of every access-date field in `markup`.
pub fn access_date_values(markup: &str) -> impl Iterator<Item = &str> {
    ACCESS_DATE_FIELD
        .captures_iter(markup)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Scan `markup` for access dates earlier than `created - margin`.
///
/// Values that do not parse as a date are skipped. Absent or empty markup
/// yields an empty report. Each access date is taken at 00:00 UTC and must
/// be strictly earlier than the margin date to count. A margin reaching
/// past the earliest representable instant clamps to that instant.
pub fn scan_access_dates(
    markup: Option<&str>,
    created: DateTime<Utc>,
    margin: TimeDelta,
) -> AccessDateReport {
    let margin_date = created
        .checked_sub_signed(margin)
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let mut parsed = 0;
    let mut suspicious = Vec::new();

    for raw in markup.into_iter().flat_map(access_date_values) {
        let Some(date) = parse_date(raw) else {
            continue;
        };
        parsed += 1;
        if date.and_time(NaiveTime::MIN).and_utc() < margin_date {
            suspicious.push(SuspiciousDate {
                raw: raw.to_string(),
                date,
            });
        }
    }

    if markup.is_none() {
        debug!("no markup to check for access dates");
    }
    debug!(
        %margin_date,
        parsed,
        suspicious = ?suspicious.iter().map(|d| d.raw.as_str()).collect::<Vec<_>>(),
        "scanned access dates"
    );

    AccessDateReport {
        margin_date,
        parsed,
        suspicious,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap()
    }

    fn week() -> TimeDelta {
        TimeDelta::days(7)
    }

    fn has_suspicious_access_dates(
        markup: Option<&str>,
        created: DateTime<Utc>,
        margin: TimeDelta,
    ) -> bool {
        scan_access_dates(markup, created, margin).is_suspicious()
    }

    fn cite(access_date: &str) -> String {
        format!("{{{{cite web |url=https://example.org |title=Example |access-date={access_date}}}}}")
    }

    #[test]
    fn margin_date_is_creation_minus_margin() {
        let report = scan_access_dates(None, created(), week());
        assert_eq!(
            report.margin_date,
            Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn date_before_margin_is_suspicious() {
        let markup = cite("1 January 2024");
        assert!(has_suspicious_access_dates(Some(&markup), created(), week()));
    }

    #[test]
    fn date_after_margin_is_fine() {
        let markup = cite("5 January 2024");
        assert!(!has_suspicious_access_dates(Some(&markup), created(), week()));
    }

    #[test]
    fn date_on_margin_is_not_strictly_earlier() {
        let markup = cite("2024-01-03");
        assert!(!has_suspicious_access_dates(Some(&markup), created(), week()));
    }

    #[test]
    fn absent_or_empty_markup() {
        assert!(!has_suspicious_access_dates(None, created(), week()));
        assert!(!has_suspicious_access_dates(Some(""), created(), week()));
    }

    #[test]
    fn unparseable_values_are_skipped() {
        let markup = format!("{}{}", cite("sometime last year"), cite("{{date}}"));
        let report = scan_access_dates(Some(&markup), created(), week());
        assert_eq!(report.parsed, 0);
        assert!(!report.is_suspicious());
    }

    #[test]
    fn field_name_variants() {
        let markup = "\
            {{cite web |Access-Date = 1 Dec 2023}}\n\
            {{cite web | access date=2023-12-02 }}\n\
            {{cite news|ACCESS-DATE=December 3, 2023|work=X}}";
        let values: Vec<&str> = access_date_values(markup).collect();
        assert_eq!(values, ["1 Dec 2023", "2023-12-02", "December 3, 2023"]);

        let report = scan_access_dates(Some(markup), created(), week());
        assert_eq!(report.parsed, 3);
        assert_eq!(report.suspicious.len(), 3);
    }

    #[test]
    fn other_date_fields_are_ignored() {
        let markup = "{{cite web |date=1 January 2001 |archive-date=2 January 2001 |accessdate=3 January 2001}}";
        let report = scan_access_dates(Some(markup), created(), week());
        assert_eq!(report.parsed, 0);
    }

    #[test]
    fn collects_only_suspicious_values() {
        let markup = format!(
            "{}{}{}",
            cite("1 January 2024"),
            cite("9 January 2024"),
            cite("21-12-2023")
        );
        let report = scan_access_dates(Some(&markup), created(), week());
        assert_eq!(report.parsed, 3);
        let raws: Vec<&str> = report.suspicious.iter().map(|d| d.raw.as_str()).collect();
        assert_eq!(raws, ["1 January 2024", "21-12-2023"]);
    }

    #[test]
    fn margin_is_configurable() {
        let markup = cite("5 January 2024");
        assert!(has_suspicious_access_dates(
            Some(&markup),
            created(),
            TimeDelta::days(1)
        ));
        assert!(!has_suspicious_access_dates(
            Some(&markup),
            created(),
            TimeDelta::days(30)
        ));
    }

    #[test]
    fn huge_margin_clamps_instead_of_overflowing() {
        let markup = cite("1 January 2024");
        let margin = crate::CheckConfig::default()
            .with_margin_days(200_000_000)
            .offline_margin;
        let report = scan_access_dates(Some(&markup), created(), margin);
        assert_eq!(report.margin_date, DateTime::<Utc>::MIN_UTC);
        assert_eq!(report.parsed, 1);
        assert!(!report.is_suspicious());
    }
}
