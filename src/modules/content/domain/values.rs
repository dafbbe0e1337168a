use chrono::NaiveDate;

/// Calendar date for static content. Out-of-range parts fall back to the
/// epoch rather than panicking.
pub fn calendar_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn string_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
