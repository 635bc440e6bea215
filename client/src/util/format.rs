//! Preview-panel formatting: prices, quantities, derived figures.
//!
//! Absent values always render as the locale's "not specified" label, never
//! as zero.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::state::product_form::format_decimal;
use crate::util::locale::Locale;

/// Group the integer part with commas: `1234567.5` → `1,234,567.5`.
#[must_use]
pub fn group_thousands(value: f64) -> String {
    let text = format_decimal(value);
    let (sign, unsigned) = text.strip_prefix('-').map_or(("", text.as_str()), |rest| ("-", rest));
    let (int_part, frac_part) = unsigned.split_once('.').map_or((unsigned, None), |(i, f)| (i, Some(f)));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// `450,000 Toman`, or "not specified" when unset.
#[must_use]
pub fn format_price(value: Option<f64>, locale: Locale) -> String {
    match value {
        Some(v) => format!("{} {}", group_thousands(v), locale.currency()),
        None => locale.not_specified().to_owned(),
    }
}

#[must_use]
pub fn format_quantity(value: Option<i64>, locale: Locale) -> String {
    #[allow(clippy::cast_precision_loss)]
    value.map_or_else(|| locale.not_specified().to_owned(), |v| group_thousands(v as f64))
}

#[must_use]
pub fn format_percentage(value: Option<f64>, locale: Locale) -> String {
    value.map_or_else(|| locale.not_specified().to_owned(), |v| format!("{}%", format_decimal(v)))
}

#[must_use]
pub fn format_months(value: Option<i64>, locale: Locale) -> String {
    value.map_or_else(|| locale.not_specified().to_owned(), |v| format!("{v} {}", locale.months()))
}

/// Price after applying the discount percentage. A missing discount means
/// the full price.
#[must_use]
pub fn sale_price(price: Option<f64>, discount_percentage: Option<f64>) -> Option<f64> {
    let price = price?;
    let discount = discount_percentage.unwrap_or(0.0).clamp(0.0, 100.0);
    Some((price * (100.0 - discount) / 100.0).round())
}

/// Gross margin as a percentage of the price; `None` if either side is unset
/// or the price is zero.
#[must_use]
pub fn margin_percent(price: Option<f64>, cost_price: Option<f64>) -> Option<f64> {
    let (price, cost) = (price?, cost_price?);
    if price <= 0.0 {
        return None;
    }
    Some(((price - cost) / price * 1000.0).round() / 10.0)
}

/// Trim an ISO 8601 timestamp to `YYYY-MM-DD HH:MM` for list display.
#[must_use]
pub fn format_created_at(raw: &str) -> String {
    let mut out: String = raw.chars().take(16).collect();
    if out.len() > 10 && out.as_bytes()[10] == b'T' {
        out.replace_range(10..11, " ");
    }
    out
}
