//! Natural-language date phrase parsing.
//!
//! Accepts the phrases the date-entry widget supports:
//! - Relative words: `today`, `tomorrow`, `yesterday`
//! - Relative periods: `next week`, `last month`, `next year`
//! - Weekdays: `friday`, `next monday`, `last tuesday`
//! - Relative offsets: `in 2 days`, `3 weeks ago`
//! - Absolute dates: `March 03, 2024`, `2024-03-03`, `3/3/2024`
//! - Month + day without a year: `march 15`, `15 march`
//!
//! Anything else is "no match", reported as `None` rather than an error.

use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use regex::Regex;
use std::sync::OnceLock;

/// Turns free-form text into a resolved date, or `None` when the text does
/// not describe one. `None` is a normal outcome, not a failure.
pub trait PhraseParser {
    fn parse(&self, text: &str) -> Option<NaiveDate>;
}

fn patterns() -> &'static PhrasePatterns {
    static PATTERNS: OnceLock<PhrasePatterns> = OnceLock::new();
    PATTERNS.get_or_init(PhrasePatterns::new)
}

struct PhrasePatterns {
    // "in 2 days", "in 3 weeks"
    in_n_units: Regex,
    // "2 days ago", "3 weeks ago"
    n_units_ago: Regex,
    // "march 15", "march 15th"
    month_day: Regex,
    // "15 march", "15th of march"
    day_month: Regex,
}

impl PhrasePatterns {
    fn new() -> Self {
        Self {
            in_n_units: Regex::new(r"^in\s+(\d+)\s+(day|week|month|year)s?$").unwrap(),
            n_units_ago: Regex::new(r"^(\d+)\s+(day|week|month|year)s?\s+ago$").unwrap(),
            month_day: Regex::new(r"^([a-z]+)\s+(\d{1,2})(?:st|nd|rd|th)?$").unwrap(),
            day_month: Regex::new(r"^(\d{1,2})(?:st|nd|rd|th)?\s+(?:of\s+)?([a-z]+)$").unwrap(),
        }
    }
}

/// Production phrase parser for the date-entry widget.
///
/// The reference "today" defaults to the local date and is injectable so
/// relative phrases stay deterministic under test.
#[derive(Debug, Clone, Default)]
pub struct NaturalPhraseParser {
    today: Option<NaiveDate>,
}

impl NaturalPhraseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the reference date instead of reading the wall clock.
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today: Some(today) }
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl PhraseParser for NaturalPhraseParser {
    fn parse(&self, text: &str) -> Option<NaiveDate> {
        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        let today = self.today();

        match normalized.as_str() {
            "today" | "now" => return Some(today),
            "tomorrow" => return today.checked_add_days(Days::new(1)),
            "yesterday" => return today.checked_sub_days(Days::new(1)),
            "next week" => return today.checked_add_days(Days::new(7)),
            "last week" => return today.checked_sub_days(Days::new(7)),
            "next month" => return today.checked_add_months(Months::new(1)),
            "last month" => return today.checked_sub_months(Months::new(1)),
            "next year" => return today.checked_add_months(Months::new(12)),
            "last year" => return today.checked_sub_months(Months::new(12)),
            _ => {}
        }

        if let Some(date) = parse_weekday_phrase(&normalized, today) {
            return Some(date);
        }
        if let Some(date) = parse_relative_offset(&normalized, today) {
            return Some(date);
        }
        if let Some(date) = parse_absolute(&normalized) {
            return Some(date);
        }
        parse_month_day(&normalized, today)
    }
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    let weekday = match name {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

/// Bare weekday names resolve to the upcoming occurrence (today counts);
/// "next" skips to the following week, "last" walks backwards.
fn parse_weekday_phrase(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (qualifier, name) = match text.split_once(' ') {
        Some((q @ ("next" | "last"), rest)) => (Some(q), rest),
        Some(_) => (None, text),
        None => (None, text),
    };
    let target = weekday_from_name(name)?;
    let ahead = (target.num_days_from_monday() + 7 - today.weekday().num_days_from_monday()) % 7;
    match qualifier {
        Some("next") => {
            let ahead = if ahead == 0 { 7 } else { ahead };
            today.checked_add_days(Days::new(u64::from(ahead)))
        }
        Some("last") => {
            let back = if ahead == 0 { 7 } else { 7 - ahead };
            today.checked_sub_days(Days::new(u64::from(back)))
        }
        _ => today.checked_add_days(Days::new(u64::from(ahead))),
    }
}

fn parse_relative_offset(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let p = patterns();
    if let Some(caps) = p.in_n_units.captures(text) {
        let n: u32 = caps[1].parse().ok()?;
        return shift(today, &caps[2], n, true);
    }
    if let Some(caps) = p.n_units_ago.captures(text) {
        let n: u32 = caps[1].parse().ok()?;
        return shift(today, &caps[2], n, false);
    }
    None
}

fn shift(today: NaiveDate, unit: &str, n: u32, forward: bool) -> Option<NaiveDate> {
    match (unit, forward) {
        ("day", true) => today.checked_add_days(Days::new(n as u64)),
        ("day", false) => today.checked_sub_days(Days::new(n as u64)),
        ("week", true) => today.checked_add_days(Days::new(n as u64 * 7)),
        ("week", false) => today.checked_sub_days(Days::new(n as u64 * 7)),
        ("month", true) => today.checked_add_months(Months::new(n)),
        ("month", false) => today.checked_sub_months(Months::new(n)),
        ("year", true) => today.checked_add_months(Months::new(n.checked_mul(12)?)),
        ("year", false) => today.checked_sub_months(Months::new(n.checked_mul(12)?)),
        _ => None,
    }
}

/// Absolute formats, most specific first. `%B` also accepts abbreviated
/// month names when parsing, so "mar 3, 2024" resolves through the first
/// pattern.
fn parse_absolute(text: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 5] = ["%B %d, %Y", "%B %d %Y", "%d %B %Y", "%Y-%m-%d", "%m/%d/%Y"];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

/// Month + day with no year resolves within the reference year.
fn parse_month_day(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let p = patterns();
    let (month_name, day) = if let Some(caps) = p.month_day.captures(text) {
        (caps[1].to_string(), caps[2].parse::<u32>().ok()?)
    } else if let Some(caps) = p.day_month.captures(text) {
        (caps[2].to_string(), caps[1].parse::<u32>().ok()?)
    } else {
        return None;
    };
    let month = month_number(&month_name)?;
    NaiveDate::from_ymd_opt(today.year(), month, day)
}

fn month_number(name: &str) -> Option<u32> {
    let month = match name {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sep" | "sept" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(month)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-06-15 is a Saturday.
    fn parser() -> NaturalPhraseParser {
        NaturalPhraseParser::with_today(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_relative_words() {
        let p = parser();
        assert_eq!(p.parse("today"), Some(date(2024, 6, 15)));
        assert_eq!(p.parse("Tomorrow"), Some(date(2024, 6, 16)));
        assert_eq!(p.parse("yesterday"), Some(date(2024, 6, 14)));
    }

    #[test]
    fn test_relative_periods() {
        let p = parser();
        assert_eq!(p.parse("next week"), Some(date(2024, 6, 22)));
        assert_eq!(p.parse("last week"), Some(date(2024, 6, 8)));
        assert_eq!(p.parse("next month"), Some(date(2024, 7, 15)));
        assert_eq!(p.parse("last year"), Some(date(2023, 6, 15)));
    }

    #[test]
    fn test_weekdays() {
        let p = parser();
        // Reference day is a Saturday.
        assert_eq!(p.parse("saturday"), Some(date(2024, 6, 15)));
        assert_eq!(p.parse("monday"), Some(date(2024, 6, 17)));
        assert_eq!(p.parse("next friday"), Some(date(2024, 6, 21)));
        assert_eq!(p.parse("next saturday"), Some(date(2024, 6, 22)));
        assert_eq!(p.parse("last tuesday"), Some(date(2024, 6, 11)));
    }

    #[test]
    fn test_relative_offsets() {
        let p = parser();
        assert_eq!(p.parse("in 3 days"), Some(date(2024, 6, 18)));
        assert_eq!(p.parse("in 2 weeks"), Some(date(2024, 6, 29)));
        assert_eq!(p.parse("2 months ago"), Some(date(2024, 4, 15)));
        assert_eq!(p.parse("in 1 year"), Some(date(2025, 6, 15)));
    }

    #[test]
    fn test_absolute_dates() {
        let p = parser();
        assert_eq!(p.parse("March 03, 2024"), Some(date(2024, 3, 3)));
        assert_eq!(p.parse("March 3, 2024"), Some(date(2024, 3, 3)));
        assert_eq!(p.parse("2024-03-03"), Some(date(2024, 3, 3)));
        assert_eq!(p.parse("3/3/2024"), Some(date(2024, 3, 3)));
        assert_eq!(p.parse("15 December 2024"), Some(date(2024, 12, 15)));
    }

    #[test]
    fn test_month_day_without_year() {
        let p = parser();
        assert_eq!(p.parse("march 15"), Some(date(2024, 3, 15)));
        assert_eq!(p.parse("march 15th"), Some(date(2024, 3, 15)));
        assert_eq!(p.parse("15 march"), Some(date(2024, 3, 15)));
        assert_eq!(p.parse("15th of march"), Some(date(2024, 3, 15)));
    }

    #[test]
    fn test_no_match_is_none_not_error() {
        let p = parser();
        assert_eq!(p.parse(""), None);
        assert_eq!(p.parse("   "), None);
        assert_eq!(p.parse("asdfgh"), None);
        assert_eq!(p.parse("tom"), None);
        assert_eq!(p.parse("march 99"), None);
        assert_eq!(p.parse("in many days"), None);
    }

    #[test]
    fn test_whitespace_and_case_insensitive() {
        let p = parser();
        assert_eq!(p.parse("  NEXT WEEK  "), Some(date(2024, 6, 22)));
        assert_eq!(p.parse("MARCH 03, 2024"), Some(date(2024, 3, 3)));
    }
}
