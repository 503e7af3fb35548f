//! Plain display formatting for amounts, rates, and API dates.

use time::{Date, macros::format_description};

/// `R$ 1234.50`; negative zero and NaN render as `R$ 0.00`.
pub fn money(value: f64) -> String {
    format!("R$ {:.2}", finite(value))
}

/// `12.5%` with one decimal.
pub fn percent(value: f64) -> String {
    format!("{:.1}%", finite(value))
}

/// Parses the date part of an ISO date or timestamp (`2024-05-03T10:00:00Z`).
pub fn parse_date(value: &str) -> Option<Date> {
    let day = value.trim().get(..10)?;
    Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
}

/// `03/05/2024`, or the raw value when it is not a date.
pub fn short_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => format!(
            "{:02}/{:02}/{}",
            date.day(),
            u8::from(date.month()),
            date.year()
        ),
        None => value.trim().to_string(),
    }
}

/// Three-letter weekday (`Mon`), or an empty label for unparsable input.
pub fn weekday_label(value: &str) -> String {
    parse_date(value)
        .map(|date| date.weekday().to_string().chars().take(3).collect())
        .unwrap_or_default()
}

fn finite(value: f64) -> f64 {
    if value.is_finite() && value != 0.0 {
        value
    } else {
        0.0
    }
}
