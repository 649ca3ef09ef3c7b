//! Input formatting and normalization helpers
//!
//! CEP masking for the form field, the shape check that gates the ViaCEP
//! lookup, pt-BR currency rendering for display, and conversion of the
//! datetime-local input value into the RFC 3339 UTC timestamp the backend
//! expects.

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// Mask a raw CEP input: digits only, capped at 8, hyphen after the 5th.
///
/// Applied on every keystroke, so partial values ("01310" -> "01310",
/// "013109" -> "01310-9") must come out well-formed.
pub fn format_cep(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(8).collect();
    if digits.len() <= 5 {
        digits
    } else {
        format!("{}-{}", &digits[..5], &digits[5..])
    }
}

/// Whether a masked CEP is complete ("00000-000").
pub fn is_complete_cep(cep: &str) -> bool {
    static CEP_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = CEP_REGEX.get_or_init(|| Regex::new(r"^\d{5}-\d{3}$").unwrap());
    regex.is_match(cep)
}

/// Strip the mask, keeping digits only.
pub fn strip_cep(cep: &str) -> String {
    cep.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Render a monetary value the pt-BR way: "R$ 1.234,56".
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac:02}")
}

/// Render a local datetime as a datetime-local input value
/// ("YYYY-MM-DDTHH:MM"), used to seed the form's data field.
pub fn datetime_local_value(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%dT%H:%M").to_string()
}

/// Convert a datetime-local value into an RFC 3339 UTC timestamp with
/// millisecond precision ("2024-01-15T17:30:00.000Z").
///
/// The input carries no zone, so it is interpreted in the server's local
/// zone. Instants made ambiguous by a DST transition resolve to the earlier
/// offset; instants skipped by one are taken as UTC.
pub fn normalize_datetime(value: &str) -> Result<String, chrono::ParseError> {
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))?;
    let utc = match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => Utc.from_utc_datetime(&naive),
    };
    Ok(utc.to_rfc3339_opts(SecondsFormat::Millis, true))
}
