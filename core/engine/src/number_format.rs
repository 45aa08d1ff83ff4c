//! FILENAME: core/engine/src/number_format.rs
//! PURPOSE: Display formatting for gross values and years.

/// Formats a gross amount with thousands separators and no decimals,
/// e.g. `1234567.4` -> `1,234,567`.
pub fn format_gross(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    add_thousands_separator(&format!("{:.0}", value))
}

/// Formats a gross amount as currency, e.g. `$1,234,567`.
pub fn format_currency(value: f64) -> String {
    let body = format_gross(value.abs());
    if value < 0.0 && body != "0" {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Years are labels, not quantities: never separated.
pub fn format_year(year: i32) -> String {
    year.to_string()
}

/// Compact axis label, e.g. `2.5B`, `340M`, `12K`.
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e9 {
        (value / 1e9, "B")
    } else if abs >= 1e6 {
        (value / 1e6, "M")
    } else if abs >= 1e3 {
        (value / 1e3, "K")
    } else {
        (value, "")
    };

    let text = format!("{:.1}", scaled);
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{}{}", text, suffix)
}

/// Add thousands separators to a numeric string.
fn add_thousands_separator(s: &str) -> String {
    let (integer_part, decimal_part) = match s.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (s, None),
    };

    let negative = integer_part.starts_with('-');
    let digits: String = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut result = String::new();
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if negative && digits.chars().any(|c| c != '0') {
        result.insert(0, '-');
    }
    if let Some(d) = decimal_part {
        result.push('.');
        result.push_str(d);
    }
    result
}
