//! Presenting a verdict to the reader.
//!
//! The text presenter renders each notice as a banner followed by its links,
//! with an optional detail card listing the signals behind the outcome. The
//! JSON presenter writes the whole verdict for other tools.

use std::io::Write;

use serde::Serialize;
use transattr_core::notice::DOCS_URL;
use transattr_core::{Notice, Severity, Verdict};

const MAX_LISTED_DATES: usize = 10;

/// Receives the result of a check. Nothing is read back.
pub trait Presenter {
    fn present(&mut self, title: &str, verdict: &Verdict) -> anyhow::Result<()>;
}

/// Banners as plain text.
pub struct TextPresenter<W> {
    out: W,
    details: bool,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W, details: bool) -> Self {
        Self { out, details }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn banner(&mut self, notice: &Notice) -> std::io::Result<()> {
        let label = match notice.severity {
            Severity::Warning => "WARNING",
            Severity::Info => "NOTICE",
        };
        writeln!(self.out, "[{label}] {}", notice.message)?;
        for link in notice.links {
            writeln!(self.out, "  {:<26} {}", link.label, link.url)?;
        }
        writeln!(self.out, "  {:<26} {}", "help", DOCS_URL)?;
        writeln!(self.out)
    }

    fn detail_card(&mut self, verdict: &Verdict) -> std::io::Result<()> {
        writeln!(self.out, "Details")?;
        writeln!(self.out, "  {:<26} {}", "outcome", verdict.outcome.as_str())?;
        writeln!(self.out, "  {:<26} {}", "created_at", verdict.created_at)?;

        if let Some(signals) = verdict.signals {
            writeln!(self.out, "  {:<26} {}", "unattributed_summary", yes_no(signals.unattributed))?;
            writeln!(self.out, "  {:<26} {}", "attributed_summary", yes_no(signals.attributed))?;
        }

        if let Some(report) = &verdict.access_dates {
            writeln!(self.out, "  {:<26} {}", "margin_date", report.margin_date)?;
            writeln!(self.out, "  {:<26} {}", "parsed_access_dates", report.parsed)?;
            let len = report.suspicious.len();
            if len > 0 {
                writeln!(self.out, "  suspicious_access_dates ({len}):")?;
                for date in report.suspicious.iter().take(MAX_LISTED_DATES) {
                    writeln!(self.out, "    {:<30} {}", date.raw, date.date)?;
                }
                if len > MAX_LISTED_DATES {
                    writeln!(self.out, "    ... and {} more", len - MAX_LISTED_DATES)?;
                }
            }
        }

        if let Some(advice) = verdict.template_advice {
            writeln!(self.out, "  {:<26} {:?}", "template_advice", advice)?;
        }
        writeln!(self.out)
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, title: &str, verdict: &Verdict) -> anyhow::Result<()> {
        if !verdict.outcome.is_reportable() && !self.details {
            return Ok(());
        }
        let notices = verdict.notices();

        writeln!(self.out, "=== {title} ===")?;
        writeln!(self.out)?;
        for notice in &notices {
            self.banner(notice)?;
        }
        if self.details {
            self.detail_card(verdict)?;
        }
        Ok(())
    }
}

/// The verdict plus its notices as one JSON document.
pub struct JsonPresenter<W> {
    out: W,
}

#[derive(Serialize)]
struct Report<'a> {
    title: &'a str,
    #[serde(flatten)]
    verdict: &'a Verdict,
    notices: Vec<Notice>,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn present(&mut self, title: &str, verdict: &Verdict) -> anyhow::Result<()> {
        let report = Report {
            title,
            verdict,
            notices: verdict.notices(),
        };
        serde_json::to_writer_pretty(&mut self.out, &report)?;
        writeln!(self.out)?;
        Ok(())
    }
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}
