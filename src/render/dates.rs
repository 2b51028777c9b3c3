//! The shared date formatting rule.
//!
//! Every template goes through [`format_date`]; no renderer formats dates on
//! its own.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

fn year_month_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{4})[-/](\d{2})$").expect("valid regex"))
}

/// Format a stored date string as abbreviated month plus full year.
///
/// `"2020-03"` becomes `"Mar 2020"`; full dates (`YYYY-MM-DD` or
/// `YYYY/MM/DD`) and slash-separated year-months format the same way. Empty
/// input stays empty, and anything unparseable (including out-of-range
/// months) is returned unchanged rather than erroring.
pub fn format_date(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    if let Some(caps) = year_month_re().captures(input) {
        if let (Ok(year), Ok(month)) = (caps[1].parse::<i32>(), caps[2].parse::<u32>()) {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) {
                return date.format("%b %Y").to_string();
            }
        }
        return input.to_string();
    }

    for pattern in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, pattern) {
            return date.format("%b %Y").to_string();
        }
    }

    input.to_string()
}

/// Format a start/end pair, showing "Present" for current positions.
pub fn format_range(start: &str, end: &str, current: bool) -> String {
    let end = if current {
        "Present".to_string()
    } else {
        format_date(end)
    };
    format!("{} - {}", format_date(start), end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_month() {
        assert_eq!(format_date("2020-03"), "Mar 2020");
        assert_eq!(format_date("1999-12"), "Dec 1999");
        assert_eq!(format_date("2021-01"), "Jan 2021");
    }

    #[test]
    fn test_full_date() {
        assert_eq!(format_date("2020-03-15"), "Mar 2020");
    }

    #[test]
    fn test_slash_separated_dates() {
        assert_eq!(format_date("2020/03"), "Mar 2020");
        assert_eq!(format_date("2020/03/15"), "Mar 2020");
        assert_eq!(format_date("2020/13"), "2020/13");
    }

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_unparseable_returned_unchanged() {
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_date("2020-13"), "2020-13");
        assert_eq!(format_date("03/2020"), "03/2020");
    }

    #[test]
    fn test_range_with_present() {
        assert_eq!(format_range("2020-03", "", true), "Mar 2020 - Present");
        assert_eq!(
            format_range("2017-06", "2020-02", false),
            "Jun 2017 - Feb 2020"
        );
    }
}
