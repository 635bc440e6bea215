use super::*;

#[test]
fn group_thousands_inserts_commas() {
    assert_eq!(group_thousands(0.0), "0");
    assert_eq!(group_thousands(999.0), "999");
    assert_eq!(group_thousands(1000.0), "1,000");
    assert_eq!(group_thousands(1_234_567.5), "1,234,567.5");
    assert_eq!(group_thousands(-45_000.0), "-45,000");
}

#[test]
fn unset_price_renders_not_specified() {
    assert_eq!(format_price(None, Locale::En), "Not specified");
    assert_eq!(format_price(None, Locale::Fa), "تعیین نشده");
}

#[test]
fn set_price_renders_with_currency_suffix() {
    assert_eq!(format_price(Some(450_000.0), Locale::En), "450,000 Toman");
    assert_eq!(format_price(Some(0.0), Locale::Fa), "0 تومان");
}

#[test]
fn zero_quantity_is_not_confused_with_unset() {
    assert_eq!(format_quantity(Some(0), Locale::En), "0");
    assert_eq!(format_quantity(None, Locale::En), "Not specified");
}

#[test]
fn percentage_and_months_formatting() {
    assert_eq!(format_percentage(Some(12.5), Locale::En), "12.5%");
    assert_eq!(format_months(Some(18), Locale::En), "18 months");
    assert_eq!(format_months(None, Locale::En), "Not specified");
}

#[test]
fn sale_price_applies_discount() {
    assert_eq!(sale_price(Some(450_000.0), Some(10.0)), Some(405_000.0));
    assert_eq!(sale_price(Some(450_000.0), None), Some(450_000.0));
    assert_eq!(sale_price(None, Some(10.0)), None);
}

#[test]
fn margin_requires_both_sides_and_positive_price() {
    assert_eq!(margin_percent(Some(450_000.0), Some(300_000.0)), Some(33.3));
    assert_eq!(margin_percent(Some(450_000.0), None), None);
    assert_eq!(margin_percent(Some(0.0), Some(10.0)), None);
}

#[test]
fn format_created_at_trims_iso_timestamps() {
    assert_eq!(format_created_at("2024-03-01T10:15:42.123Z"), "2024-03-01 10:15");
    assert_eq!(format_created_at("2024-03-01"), "2024-03-01");
    assert_eq!(format_created_at(""), "");
}
