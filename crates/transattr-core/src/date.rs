//! Date recognition for human-entered citation dates.
//!
//! Citation templates carry dates typed by hand, so the same day shows up as
//! "21 January 2024", "21 Jan 2024", "2024-01-21", "21-01-2024" or
//! "January 21, 2024". [`parse_date`] recognises the first of these layouts
//! found in a fragment and returns the calendar date.
//!
//! # Layouts, in priority order
//!
//! 1. `D Mon YYYY` : "21 Jan 2024", "21 january 2024"
//! 2. `YYYY-MM-DD` : "2024-01-21"
//! 3. `D-M-YYYY` : "21-1-2024" (day first)
//! 4. `Mon D, YYYY` : "Jan 21, 2024", "January 21 2024"
//!
//! Month names match on their first three letters, case-insensitively.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};

static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([0-9]{1,2})\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+([0-9]{4})\b")
        .unwrap()
});

static ISO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-9]{4})-([0-9]{2})-([0-9]{2})\b").unwrap());

static NUMERIC_DAY_MONTH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-9]{1,2})-([0-9]{1,2})-([0-9]{4})\b").unwrap());

static MONTH_DAY_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+([0-9]{1,2}),?\s+([0-9]{4})\b")
        .unwrap()
});

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// One accepted date layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    DayMonthYear,
    Iso,
    NumericDayMonthYear,
    MonthDayYear,
}

impl DateLayout {
    /// All layouts in the order they are tried.
    pub const PRIORITY: [DateLayout; 4] = [
        Self::DayMonthYear,
        Self::Iso,
        Self::NumericDayMonthYear,
        Self::MonthDayYear,
    ];

    fn regex(self) -> &'static Regex {
        match self {
            Self::DayMonthYear => &DAY_MONTH_YEAR,
            Self::Iso => &ISO,
            Self::NumericDayMonthYear => &NUMERIC_DAY_MONTH_YEAR,
            Self::MonthDayYear => &MONTH_DAY_YEAR,
        }
    }

    /// Build a date from this layout's captures.
    ///
    /// Returns `None` for impossible dates such as 31 February or month 13.
    fn build(self, caps: &Captures<'_>) -> Option<NaiveDate> {
        let (year, month, day) = match self {
            Self::DayMonthYear => (number(caps, 3)?, month_number(&caps[2])?, number(caps, 1)?),
            Self::Iso => (number(caps, 1)?, number(caps, 2)?, number(caps, 3)?),
            Self::NumericDayMonthYear => (number(caps, 3)?, number(caps, 2)?, number(caps, 1)?),
            Self::MonthDayYear => (number(caps, 3)?, month_number(&caps[1])?, number(caps, 2)?),
        };
        NaiveDate::from_ymd_opt(year as i32, month, day)
    }
}

/// Recognise a calendar date in `text`.
///
/// Layouts are tried in [`DateLayout::PRIORITY`] order and the first layout
/// whose pattern matches decides the result. `None` means "no date here"
/// and callers skip the token.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    parse_date_with_layout(text).map(|(date, _)| date)
}

/// Like [`parse_date`], also reporting which layout matched.
pub fn parse_date_with_layout(text: &str) -> Option<(NaiveDate, DateLayout)> {
    let (layout, caps) = DateLayout::PRIORITY
        .iter()
        .find_map(|&layout| layout.regex().captures(text).map(|caps| (layout, caps)))?;
    layout.build(&caps).map(|date| (date, layout))
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

fn month_number(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|&m| m == prefix)
        .map(|i| i as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn equivalent_layouts_agree() {
        let expected = Some(ymd(2024, 1, 21));
        assert_eq!(parse_date("21 January 2024"), expected);
        assert_eq!(parse_date("2024-01-21"), expected);
        assert_eq!(parse_date("January 21, 2024"), expected);
        assert_eq!(parse_date("21-01-2024"), expected);
        assert_eq!(parse_date("21 Jan 2024"), expected);
        assert_eq!(parse_date("Jan 21 2024"), expected);
    }

    #[test]
    fn unrecognised_text() {
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2024"), None);
        assert_eq!(parse_date("January 2024"), None);
    }

    #[test]
    fn month_names_are_case_insensitive() {
        assert_eq!(parse_date("3 MARCH 2021"), Some(ymd(2021, 3, 3)));
        assert_eq!(parse_date("3 march 2021"), Some(ymd(2021, 3, 3)));
        assert_eq!(parse_date("sept 9, 2019"), Some(ymd(2019, 9, 9)));
    }

    #[test]
    fn numeric_layout_is_day_first() {
        assert_eq!(parse_date("5-6-2020"), Some(ymd(2020, 6, 5)));
    }

    #[test]
    fn layout_priority() {
        // Both a day-month-year and an ISO date are present; the former wins.
        let (date, layout) = parse_date_with_layout("2023-05-01 or 7 June 2022").unwrap();
        assert_eq!(layout, DateLayout::DayMonthYear);
        assert_eq!(date, ymd(2022, 6, 7));

        let (_, layout) = parse_date_with_layout("2023-05-01").unwrap();
        assert_eq!(layout, DateLayout::Iso);
        let (_, layout) = parse_date_with_layout("1-5-2023").unwrap();
        assert_eq!(layout, DateLayout::NumericDayMonthYear);
        let (_, layout) = parse_date_with_layout("May 1, 2023").unwrap();
        assert_eq!(layout, DateLayout::MonthDayYear);
    }

    #[test]
    fn impossible_dates_are_rejected() {
        assert_eq!(parse_date("31-02-2024"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("30 Feb 2024"), None);
    }

    #[test]
    fn first_matching_layout_decides_even_when_invalid() {
        // "31 Feb 2024" matches the first layout and is impossible, so the
        // valid ISO date later in the string is not consulted.
        assert_eq!(parse_date("31 Feb 2024, 2024-01-01"), None);
    }

    #[test]
    fn embedded_in_surrounding_text() {
        assert_eq!(
            parse_date(" retrieved on 2 Dec 2019 "),
            Some(ymd(2019, 12, 2))
        );
    }

    #[test]
    fn leap_day() {
        assert_eq!(parse_date("29 February 2024"), Some(ymd(2024, 2, 29)));
        assert_eq!(parse_date("29 February 2023"), None);
    }
}
