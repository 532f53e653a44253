//! Display formatting for monetary amounts and counts.
//!
//! Output shapes are consumed verbatim by the presentation layer, so every
//! rounding step here is explicit rather than left to `{:.N}` formatting.

const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;
const THOUSAND: f64 = 1e3;

/// Compact dollar rendering: `$2.30B`, `$1.50M`, `$250K`, `$999`.
pub fn format_currency(amount: f64) -> String {
    if amount >= BILLION {
        format!("${:.2}B", round_to(amount / BILLION, 2))
    } else if amount >= MILLION {
        format!("${:.2}M", round_to(amount / MILLION, 2))
    } else if amount >= THOUSAND {
        format!("${:.0}K", round_to(amount / THOUSAND, 0))
    } else {
        format!("${}", format_decimal(amount))
    }
}

/// Thousands-separated integer, e.g. `1,500`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Locale-style rendering with separators and at most three fraction digits.
fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let rounded = round_to(value.abs(), 3);
    let whole = rounded.trunc();
    let integer = group_thousands(whole as u64);
    let fraction = format!("{:.3}", rounded - whole);
    let fraction = fraction
        .trim_start_matches('0')
        .trim_start_matches('.')
        .trim_end_matches('0');

    if fraction.is_empty() {
        format!("{sign}{integer}")
    } else {
        format!("{sign}{integer}.{fraction}")
    }
}

/// Half-away-from-zero rounding to `places` decimals.
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
