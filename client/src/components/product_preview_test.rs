use super::*;

fn row<'a>(rows: &'a [(&'static str, String)], label: &str) -> &'a str {
    rows.iter()
        .find(|(l, _)| *l == label)
        .map(|(_, v)| v.as_str())
        .unwrap()
}

#[test]
fn unset_price_previews_as_not_specified() {
    let rows = preview_rows(&ProductForm::default(), Locale::En);
    assert_eq!(row(&rows, "Price"), "Not specified");
    assert_eq!(row(&rows, "Sale price"), "Not specified");
    assert_eq!(row(&rows, "Weight"), "Not specified");
}

#[test]
fn set_price_previews_with_currency_and_discount() {
    let form = ProductForm {
        price: Some(200_000.0),
        discount_percentage: Some(25.0),
        cost_price: Some(150_000.0),
        weight: Some(1.5),
        ..ProductForm::default()
    };
    let rows = preview_rows(&form, Locale::En);
    assert_eq!(row(&rows, "Price"), "200,000 Toman");
    assert_eq!(row(&rows, "Sale price"), "150,000 Toman");
    assert_eq!(row(&rows, "Margin"), "25%");
    assert_eq!(row(&rows, "Weight"), "1.5 kg");
}

#[test]
fn persian_preview_uses_localized_labels() {
    let rows = preview_rows(&ProductForm::default(), Locale::Fa);
    assert_eq!(row(&rows, "Price"), "تعیین نشده");
    assert_eq!(row(&rows, "In stock"), "خیر");
}
