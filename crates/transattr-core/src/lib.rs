//! Heuristics for spotting unattributed translations in wiki articles.

pub mod access_date;
pub mod check;
pub mod config;
pub mod date;
pub mod decision;
pub mod interwiki;
pub mod keywords;
pub mod notice;
pub mod revision;
pub mod source;
pub mod summary;

pub use access_date::{AccessDateReport, SuspiciousDate, scan_access_dates};
pub use check::{Verdict, check_attribution};
pub use config::CheckConfig;
pub use date::parse_date;
pub use decision::{DecisionInputs, Outcome, TemplateAdvice};
pub use notice::{Notice, NoticeKind, Severity};
pub use revision::RevisionRecord;
pub use source::ArticleSource;
pub use summary::{SummarySignals, classify_summaries};
