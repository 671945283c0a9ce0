use chrono::{NaiveDate, NaiveTime};

const ISO_DATE: &str = "%Y-%m-%d";
const ISO_TIMES: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, ISO_DATE).ok()
}

pub fn parse_time(time: &str) -> Option<NaiveTime> {
    ISO_TIMES
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(time, format).ok())
}

/// "2024-12-25" -> "Wed, 25 December". Unparsable input is returned as-is.
pub fn format_date(date: &str) -> String {
    match parse_date(date) {
        Some(parsed) => parsed.format("%a, %-d %B").to_string(),
        None => date.to_string(),
    }
}

/// "19:30:00" -> "7:30 pm". Unparsable input is returned as-is.
pub fn format_time(time: &str) -> String {
    match parse_time(time) {
        Some(parsed) => parsed.format("%-I:%M %p").to_string().to_lowercase(),
        None => time.to_string(),
    }
}

/// Joins the non-empty parts with ", ".
pub fn join_non_empty<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
