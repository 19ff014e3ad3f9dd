//! es-ES number and currency formatting.
//!
//! Spanish grouping only kicks in from five integer digits: `8000` stays
//! `8000` while `15000` becomes `15.000`. Currency is EUR with no decimals
//! and the symbol after a no-break space.

use crate::core::vehicle::VehicleRecord;

/// Shown wherever an optional attribute is missing.
pub const PLACEHOLDER: &str = "-";

/// Shown when a record has no location.
pub const DEFAULT_LOCATION: &str = "Ciudad Real";

const NBSP: char = '\u{a0}';

pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(amount) => format!("{}{NBSP}€", format_number(amount.round(), 0)),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_km(km: Option<f64>) -> String {
    km.map(|value| format_number(value, 3))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_power(power: Option<f64>) -> String {
    power
        .map(|value| format!("{value} CV"))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Plain numeric value (year, doors), no grouping.
pub fn format_plain(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_text(value: Option<&str>) -> String {
    value.unwrap_or(PLACEHOLDER).to_string()
}

pub fn location(record: &VehicleRecord) -> &str {
    record.location.as_deref().unwrap_or(DEFAULT_LOCATION)
}

/// `"2019 · 64.000 km · Ciudad Real"`
pub fn summary_line(record: &VehicleRecord) -> String {
    format!(
        "{} · {} km · {}",
        format_plain(record.year),
        format_km(record.km),
        location(record)
    )
}

/// Format with es-ES separators and at most `max_fraction` decimals
/// (trailing zeros dropped).
pub fn format_number(value: f64, max_fraction: usize) -> String {
    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && (int_part.bytes().any(|b| b != b'0') || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    if digits.len() < 5 {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
